mod ast;
mod context;
mod environment;
mod error;
mod interpreter;
mod lexer;
mod parser;
mod repl;

#[cfg(test)]
mod test_utils;

pub use ast::{Ast, BinaryOperator};
pub use context::EvaluationContext;
pub use environment::Environment;
pub use error::{ErrorKind, PebbleError, RuntimeError, SyntaxError};
pub use interpreter::{evaluate, evaluate_statement, format_number, DisplayNumber, DISPLAY_EPSILON};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{parse, Parser, MAX_NESTING};
pub use repl::StatementBuffer;
