use std::{io, path::PathBuf};

use thiserror::Error;

/// Unified error type for the Thistle runtime and tooling.
#[derive(Debug, Error)]
pub enum ThistleError {
    /// An operator needed more values than the stack holds.
    #[error("stack underflow: needed {needed} value(s), stack holds {depth}")]
    StackUnderflow { needed: usize, depth: usize },
    /// A value's tag cannot satisfy the requested coercion.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// An extension module could not be opened or lacks the registration
    /// entry point. Reported by the loader and never propagated past it.
    #[error("cannot load extension `{}`: {reason}", path.display())]
    UnresolvedModule { path: PathBuf, reason: String },
    /// A script file could not be read. Fatal to that invocation only.
    #[error("cannot read script `{}`: {source}", path.display())]
    ScriptIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ThistleError>;
