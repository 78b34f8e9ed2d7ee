use std::fmt;

use crate::{
    diagnostics::{Result, ThistleError},
    value::Value,
};

/// The Thistle data stack. Values enter and leave only at the top; every
/// checked accessor surfaces underflow as an error, never a panic.
#[derive(Debug, Default)]
pub struct Stack {
    values: Vec<Value>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Result<Value> {
        self.values
            .pop()
            .ok_or(ThistleError::StackUnderflow { needed: 1, depth: 0 })
    }

    /// Pop a value and widen it to `f64`. The value is consumed even when
    /// the coercion fails.
    pub fn pop_numeric(&mut self) -> Result<f64> {
        self.pop()?.as_numeric()
    }

    pub fn peek(&self) -> Option<&Value> {
        self.values.last()
    }

    pub fn has(&self, n: usize) -> bool {
        self.values.len() >= n
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn dup(&mut self) -> Result<()> {
        match self.values.last() {
            Some(top) => {
                let copy = top.clone();
                self.values.push(copy);
                Ok(())
            }
            None => Err(ThistleError::StackUnderflow { needed: 1, depth: 0 }),
        }
    }

    pub fn drop_top(&mut self) -> Result<()> {
        self.pop().map(|_| ())
    }

    pub fn swap(&mut self) -> Result<()> {
        let depth = self.values.len();
        if depth < 2 {
            return Err(ThistleError::StackUnderflow { needed: 2, depth });
        }
        self.values.swap(depth - 1, depth - 2);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack [{}]", self.values.len())?;
        if self.values.is_empty() {
            write!(f, "\n  (empty)")?;
        } else {
            for (idx, value) in self.values.iter().enumerate() {
                write!(f, "\n  [{idx}] {value}")?;
            }
        }
        Ok(())
    }
}
