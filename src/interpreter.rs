use core::fmt;
use std::io::Write;

use log::{debug, trace};

use crate::{
    ast::{Ast, BinaryOperator},
    environment::Environment,
    error::RuntimeError,
};

pub(crate) type EvaluationResult = Result<f64, RuntimeError>;

/// Distance from the nearest integer under which a value is shown as that integer
pub const DISPLAY_EPSILON: f64 = 1e-9;

/// Shows a value the way the user sees it.
///
/// Values within [`DISPLAY_EPSILON`] of an integer print without a fractional
/// part, everything else prints with full precision. Only the presentation is
/// affected, stored values are never rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayNumber(pub f64);

impl fmt::Display for DisplayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round();
        if (self.0 - rounded).abs() >= DISPLAY_EPSILON {
            return write!(f, "{}", self.0);
        }

        if rounded == 0.0 {
            // Avoid printing "-0"
            return f.write_str("0");
        }
        write!(f, "{:.0}", rounded)
    }
}

pub fn format_number(value: f64) -> String {
    DisplayNumber(value).to_string()
}

fn truthy(value: f64) -> bool {
    value != 0.0
}

fn from_bool(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

fn is_integral(value: f64) -> bool {
    (value - value.round()).abs() < f64::EPSILON
}

fn evaluate_modulo(left: f64, right: f64) -> EvaluationResult {
    if right == 0.0 { return Err(RuntimeError::ModuloByZero); }
    if !is_integral(left) || !is_integral(right) { return Err(RuntimeError::NonIntegerModulus); }

    let (left, right) = (left.round(), right.round());
    if right == 0.0 { return Err(RuntimeError::ModuloByZero); }

    // `%` on floats truncates toward zero like integer remainder, and is exact for integral values
    Ok(left % right)
}

fn evaluate_binary(left: &Ast, operator: BinaryOperator, right: &Ast, environment: &mut Environment, output: &mut dyn Write) -> EvaluationResult {
    // Both operands are always evaluated, left first
    let left = evaluate(left, environment, output)?;
    let right = evaluate(right, environment, output)?;

    match operator {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Subtract => Ok(left - right),
        BinaryOperator::Multiply => Ok(left * right),
        BinaryOperator::Divide => {
            if right == 0.0 { return Err(RuntimeError::DivisionByZero); }
            Ok(left / right)
        }
        BinaryOperator::Modulo => evaluate_modulo(left, right),
        BinaryOperator::Less => Ok(from_bool(left < right)),
        BinaryOperator::Greater => Ok(from_bool(left > right)),
    }
}

fn evaluate_if(condition: &Ast, then_branch: &Ast, else_branch: Option<&Ast>, environment: &mut Environment, output: &mut dyn Write) -> EvaluationResult {
    if truthy(evaluate(condition, environment, output)?) {
        return evaluate(then_branch, environment, output);
    }

    match else_branch {
        Some(else_branch) => evaluate(else_branch, environment, output),
        None => Ok(0.0),
    }
}

fn evaluate_for(init: &Ast, condition: &Ast, update: &Ast, body: &Ast, environment: &mut Environment, output: &mut dyn Write) -> EvaluationResult {
    // No iteration cap, a condition that never reaches zero loops forever
    evaluate(init, environment, output)?;

    let mut iteration = 0usize;
    while truthy(evaluate(condition, environment, output)?) {
        trace!("for loop iteration {}", iteration);
        evaluate(body, environment, output)?;
        evaluate(update, environment, output)?;
        iteration += 1;
    }

    Ok(0.0)
}

fn evaluate_print(expression: &Ast, environment: &mut Environment, output: &mut dyn Write) -> EvaluationResult {
    let value = evaluate(expression, environment, output)?;
    writeln!(output, "{}", DisplayNumber(value))
        .map_err(|error| RuntimeError::Output(error.to_string()))?;
    Ok(0.0)
}

/// Reduces `ast` to a number.
///
/// Assignments write into `environment` and `print` writes to `output`. On
/// error the effects of already evaluated sub-trees stay in place.
pub fn evaluate(ast: &Ast, environment: &mut Environment, output: &mut dyn Write) -> EvaluationResult {
    match ast {
        Ast::Number(value) => Ok(*value),
        Ast::Variable(name) => environment.get(name),
        Ast::Assign { name, expr } => {
            let value = evaluate(expr, environment, output)?;
            debug!("assigning {} = {}", name, value);
            environment.set(name, value);
            Ok(value)
        }
        Ast::BinaryOp { left, operator, right } => evaluate_binary(left, *operator, right, environment, output),
        Ast::If { condition, then_branch, else_branch } => evaluate_if(condition, then_branch, else_branch.as_deref(), environment, output),
        Ast::For { init, condition, update, body } => evaluate_for(init, condition, update, body, environment, output),
        Ast::Block(statements) => {
            for statement in statements {
                evaluate(statement, environment, output)?;
            }
            Ok(0.0)
        }
        Ast::Print(expression) => evaluate_print(expression, environment, output),
    }
}

/// Evaluates a top-level statement for a driver.
///
/// The value is only returned when the statement that actually ran produces
/// one. `print`, `for` and blocks run for their effects, and an `if` reports
/// whatever its chosen branch reports, or nothing when no branch ran.
pub fn evaluate_statement(ast: &Ast, environment: &mut Environment, output: &mut dyn Write) -> Result<Option<f64>, RuntimeError> {
    match ast {
        Ast::If { condition, then_branch, else_branch } => {
            if truthy(evaluate(condition, environment, output)?) {
                return evaluate_statement(then_branch, environment, output);
            }
            match else_branch {
                Some(else_branch) => evaluate_statement(else_branch, environment, output),
                None => Ok(None),
            }
        }
        Ast::Print(_) | Ast::For { .. } | Ast::Block(_) => {
            evaluate(ast, environment, output)?;
            Ok(None)
        }
        _ => evaluate(ast, environment, output).map(Some),
    }
}
