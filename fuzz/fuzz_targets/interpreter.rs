#![no_main]

use core::fmt;

use itertools::Itertools;
use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};

// Short fixed names so generated programs actually reuse their variables
#[derive(Arbitrary, Debug)]
enum Name { A, B, C, Count }

impl fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Name::A => "a",
            Name::B => "b",
            Name::C => "c",
            Name::Count => "count",
        })
    }
}

#[derive(Arbitrary, Debug)]
enum Operator { Add, Sub, Mul, Div, Mod, Less, Greater }

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Less => "<",
            Operator::Greater => ">",
        })
    }
}

#[derive(Arbitrary, Debug)]
enum Expression {
    Number(f64),
    Variable(Name),
    Binary(Box<Expression>, Operator, Box<Expression>),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // The grammar has no unary minus and no exponent syntax
            Expression::Number(value) if value.is_finite() => write!(f, "{}", value.abs()),
            Expression::Number(_) => write!(f, "0"),
            Expression::Variable(name) => name.fmt(f),
            Expression::Binary(left, operator, right) => write!(f, "({} {} {})", left, operator, right),
        }
    }
}

// No `for`, every generated program has to terminate
#[derive(Arbitrary, Debug)]
enum Statement {
    Assign(Name, Expression),
    Print(Expression),
    If(Expression, Box<Statement>, Option<Box<Statement>>),
    Block(Vec<Statement>),
    Expression(Expression),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Assign(name, expression) => write!(f, "{} = {}", name, expression),
            Statement::Print(expression) => write!(f, "print {}", expression),
            Statement::If(condition, then_branch, None) => write!(f, "if ({}) {}", condition, then_branch),
            Statement::If(condition, then_branch, Some(else_branch))
                => write!(f, "if ({}) {{ {} }} else {}", condition, then_branch, else_branch),
            Statement::Block(statements) => write!(f, "{{ {} }}", statements.iter().join("; ")),
            Statement::Expression(expression) => expression.fmt(f),
        }
    }
}

fuzz_target!(|statements: Vec<Statement>| {
    let mut context = pebble::EvaluationContext::with_output(std::io::sink());

    for statement in statements {
        let source = statement.to_string();
        match context.evaluate_str(&source) {
            Err(pebble::PebbleError::Syntax(pebble::SyntaxError::NestingTooDeep(_))) => {}
            Err(pebble::PebbleError::Syntax(err)) => panic!("generated statement failed to parse: {}\n{}", err, source),
            _ => {}
        }
    }
});
