use core::fmt;

use crate::lexer::TokenKind;


/// Operators allowed inside [`Ast::BinaryOp`].
///
/// Comparisons share the additive precedence tier, so `1 < 2 + 3` folds as
/// `(1 < 2) + 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Less,
    Greater,
}

impl BinaryOperator {
    /// Operators of the `expr` tier
    pub(crate) fn additive(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Subtract),
            TokenKind::Less => Some(Self::Less),
            TokenKind::Greater => Some(Self::Greater),
            _ => None,
        }
    }

    /// Operators of the `term` tier
    pub(crate) fn multiplicative(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Multiply => Some(Self::Multiply),
            TokenKind::Divide => Some(Self::Divide),
            TokenKind::Modulo => Some(Self::Modulo),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Less => "<",
            Self::Greater => ">",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// Every node owns its children, a parsed statement is a plain tree
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    Number(f64),
    Variable(String),
    BinaryOp {
        left: Box<Ast>,
        operator: BinaryOperator,
        right: Box<Ast>,
    },
    Assign {
        name: String,
        expr: Box<Ast>,
    },
    If {
        condition: Box<Ast>,
        then_branch: Box<Ast>,
        else_branch: Option<Box<Ast>>,
    },
    For {
        init: Box<Ast>,
        condition: Box<Ast>,
        update: Box<Ast>,
        body: Box<Ast>,
    },
    Block(Vec<Ast>),
    Print(Box<Ast>),
}

impl Ast {
    pub fn binary(left: Ast, operator: BinaryOperator, right: Ast) -> Self {
        Self::BinaryOp { left: Box::new(left), operator, right: Box::new(right) }
    }

    pub fn assign(name: impl Into<String>, expr: Ast) -> Self {
        Self::Assign { name: name.into(), expr: Box::new(expr) }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_tiers() {
        assert_eq!(BinaryOperator::additive(TokenKind::Less), Some(BinaryOperator::Less));
        assert_eq!(BinaryOperator::additive(TokenKind::Multiply), None);
        assert_eq!(BinaryOperator::multiplicative(TokenKind::Modulo), Some(BinaryOperator::Modulo));
        assert_eq!(BinaryOperator::multiplicative(TokenKind::Assign), None);
    }
}
