use std::{fs, path::Path};

use crate::{
    builtins,
    diagnostics::{Result, ThistleError},
    registry::Registry,
    stack::Stack,
    tokenizer,
    value::Value,
};

/// The Thistle interpreter: one stack, one operator registry, and the
/// loaded extensions that keep plugin handlers alive.
pub struct Interpreter {
    // `registry` precedes `extensions`: handler closures must drop before
    // the libraries that contain their code.
    registry: Registry,
    stack: Stack,
    pub(crate) extensions: Vec<libloading::Library>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        let mut interp = Self {
            registry: Registry::new(),
            stack: Stack::with_capacity(64),
            extensions: Vec::new(),
        };
        builtins::install(&mut interp);
        interp
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&mut Interpreter) -> Result<()> + 'static,
    {
        self.registry.register(name, handler);
    }

    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Result<Value> {
        self.stack.pop()
    }

    pub fn pop_numeric(&mut self) -> Result<f64> {
        self.stack.pop_numeric()
    }

    /// Execute one line: trim, tokenize, dispatch each token in order. A
    /// token beginning with `#` comments out the rest of the line. The
    /// first handler error stops the line's remaining tokens; stack effects
    /// of earlier tokens persist.
    pub fn exec_line(&mut self, line: &str) -> Result<()> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        for token in tokenizer::tokenize(trimmed) {
            if token.starts_with('#') {
                break;
            }
            self.dispatch_token(&token)?;
        }
        Ok(())
    }

    /// Execute a script file line by line. The first failing line
    /// terminates the run.
    pub fn exec_script(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| ThistleError::ScriptIo {
            path: path.to_path_buf(),
            source: err,
        })?;
        for line in source.lines() {
            self.exec_line(line)?;
        }
        Ok(())
    }

    fn dispatch_token(&mut self, token: &str) -> Result<()> {
        if let Some(inner) = quoted_inner(token) {
            self.stack.push(Value::string(inner));
            return Ok(());
        }

        if tokenizer::is_integer_literal(token) {
            // A literal whose digits outgrow i64 keeps its magnitude as a
            // float instead of failing the line.
            match token.parse::<i64>() {
                Ok(value) => self.stack.push(Value::int(value)),
                Err(_) => {
                    let value = token.parse::<f64>().unwrap_or(f64::INFINITY);
                    self.stack.push(Value::float(value));
                }
            }
            return Ok(());
        }

        if tokenizer::is_float_literal(token) {
            let value = token.parse::<f64>().unwrap_or(f64::INFINITY);
            self.stack.push(Value::float(value));
            return Ok(());
        }

        if let Some(handler) = self.registry.get(token) {
            return handler(self);
        }

        // Unknown identifiers become data, not errors.
        self.stack.push(Value::symbol(token));
        Ok(())
    }
}

fn quoted_inner(token: &str) -> Option<&str> {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}
