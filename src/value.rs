use std::fmt;

use crate::diagnostics::{Result, ThistleError};

/// Measurement unit attached to a value. Consulted by display and equality
/// only, never by arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub name: String,
    pub scale: f64,
}

impl Unit {
    pub fn new(name: impl Into<String>, scale: f64) -> Self {
        Self {
            name: name.into(),
            scale,
        }
    }
}

/// One cell on the Thistle stack. Immutable once constructed; stack
/// operations move or copy whole values.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub kind: ValueKind,
    pub unit: Option<Unit>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    Int(i64),
    Float(f64),
    Str(String),
    Symbol(String),
}

impl Value {
    pub fn int(value: i64) -> Self {
        Self {
            kind: ValueKind::Int(value),
            unit: None,
        }
    }

    pub fn float(value: f64) -> Self {
        Self {
            kind: ValueKind::Float(value),
            unit: None,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self {
            kind: ValueKind::Str(value.into()),
            unit: None,
        }
    }

    pub fn symbol(value: impl Into<String>) -> Self {
        Self {
            kind: ValueKind::Symbol(value.into()),
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn type_name(&self) -> &'static str {
        match &self.kind {
            ValueKind::Int(_) => "Int",
            ValueKind::Float(_) => "Float",
            ValueKind::Str(_) => "String",
            ValueKind::Symbol(_) => "Symbol",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, ValueKind::Int(_) | ValueKind::Float(_))
    }

    /// Widen to `f64`. Errors for the text-carrying tags.
    pub fn as_numeric(&self) -> Result<f64> {
        match self.kind {
            ValueKind::Int(n) => Ok(n as f64),
            ValueKind::Float(n) => Ok(n),
            _ => Err(ThistleError::TypeMismatch {
                expected: "Int or Float",
                found: self.type_name(),
            }),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::Str(s) | ValueKind::Symbol(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Int(n) => write!(f, "{n}")?,
            ValueKind::Float(n) => write!(f, "{n}")?,
            ValueKind::Str(s) | ValueKind::Symbol(s) => write!(f, "{s}")?,
        }
        if let Some(unit) = &self.unit {
            write!(f, " {}", unit.name)?;
        }
        Ok(())
    }
}
