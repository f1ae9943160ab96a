use std::io::{self, Write};

use log::debug;

use crate::{
    ast::Ast,
    environment::Environment,
    error::{PebbleError, RuntimeError},
    interpreter::{evaluate, evaluate_statement},
    parser::Parser,
};


/// An evaluation context that takes source text or parsed statements and
/// evaluates them against one shared [`Environment`].
///
/// Variables assigned by one call stay visible to every later call, also when
/// a call fails halfway. `print` output goes to the writer the context was
/// built with, stdout by default.
pub struct EvaluationContext<W: Write = io::Stdout> {
    environment: Environment,
    output: W,
}

impl EvaluationContext<io::Stdout> {
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for EvaluationContext<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> EvaluationContext<W> {
    pub fn with_output(output: W) -> Self {
        Self { environment: Environment::new(), output }
    }

    /// Evaluates every top-level statement of `input`, one at a time.
    ///
    /// Each statement is parsed and then evaluated before the next one is
    /// parsed, and the first error ends the input. Returns the value of the
    /// last statement, or `None` when there was no statement or the last one
    /// only had side effects (`print`, `for`, blocks, or an `if` whose chosen
    /// branch was one of those or that ran no branch).
    pub fn evaluate_str(&mut self, input: &str) -> Result<Option<f64>, PebbleError> {
        let mut parser = Parser::new(input);
        let mut result = None;

        while !parser.at_end() {
            let statement = parser.parse_statement()?;
            result = self.evaluate_statement(&statement)?;
        }

        Ok(result)
    }

    /// Evaluates one parsed statement, reporting its value the way
    /// [`EvaluationContext::evaluate_str`] does.
    pub fn evaluate_statement(&mut self, ast: &Ast) -> Result<Option<f64>, PebbleError> {
        let value = evaluate_statement(ast, &mut self.environment, &mut self.output)?;
        self.flush()?;

        debug!("statement evaluated to {:?}", value);
        Ok(value)
    }

    /// Evaluates a tree to its raw value, `0` for statements run for their effects.
    pub fn evaluate_ast(&mut self, ast: &Ast) -> Result<f64, PebbleError> {
        let value = evaluate(ast, &mut self.environment, &mut self.output)?;
        self.flush()?;

        debug!("tree evaluated to {}", value);
        Ok(value)
    }

    fn flush(&mut self) -> Result<(), RuntimeError> {
        self.output.flush().map_err(|error| RuntimeError::Output(error.to_string()))
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
