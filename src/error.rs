use serde::Deserialize;
use thiserror::Error;

use crate::lexer::TokenKind;


/// Grammar mismatch, aborts the statement being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unexpected token {found}, expected {expected}")]
    UnexpectedToken { found: String, expected: TokenKind },

    #[error("unexpected token {found}, expected a number, a variable or '('")]
    ExpectedFactor { found: String },

    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    #[error("statement nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    #[error("modulo requires integer operands")]
    NonIntegerModulus,

    #[error("cannot write output: {0}")]
    Output(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PebbleError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Flat discriminant of [`PebbleError`], named the way test fixtures spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ErrorKind {
    SyntaxError,
    UndefinedVariable,
    DivisionByZero,
    ModuloByZero,
    NonIntegerModulus,
    OutputError,
}

impl PebbleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::SyntaxError,
            Self::Runtime(RuntimeError::UndefinedVariable(_)) => ErrorKind::UndefinedVariable,
            Self::Runtime(RuntimeError::DivisionByZero) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::ModuloByZero) => ErrorKind::ModuloByZero,
            Self::Runtime(RuntimeError::NonIntegerModulus) => ErrorKind::NonIntegerModulus,
            Self::Runtime(RuntimeError::Output(_)) => ErrorKind::OutputError,
        }
    }
}
