use log::debug;

use crate::{
    ast::{Ast, BinaryOperator},
    error::SyntaxError,
    lexer::{Lexer, Token, TokenKind},
};


type ParseResult<O> = Result<O, SyntaxError>;

/// Deepest nesting a single statement may have.
///
/// Parsing, evaluating and dropping a tree all recurse once per level, so both
/// the height of the tree and the nesting of parentheses and statements are
/// capped.
pub const MAX_NESTING: usize = 256;

// A parsed sub-tree together with its height
struct Parsed {
    ast: Ast,
    height: usize,
}

impl Parsed {
    fn leaf(ast: Ast) -> Self {
        Self { ast, height: 1 }
    }

    fn node(ast: Ast, child_heights: impl IntoIterator<Item = usize>) -> ParseResult<Self> {
        let height = 1 + child_heights.into_iter().max().unwrap_or(0);
        if height > MAX_NESTING { return Err(SyntaxError::NestingTooDeep(MAX_NESTING)); }
        Ok(Self { ast, height })
    }

    fn binary(left: Parsed, operator: BinaryOperator, right: Parsed) -> ParseResult<Self> {
        let heights = [left.height, right.height];
        Self::node(Ast::binary(left.ast, operator, right.ast), heights)
    }

    fn boxed(self) -> Box<Ast> {
        Box::new(self.ast)
    }
}

/// Recursive-descent parser pulling tokens from a [`Lexer`] on demand.
///
/// The parser always holds exactly one token of lookahead. Each call to
/// [`Parser::parse_statement`] produces the tree of one top-level statement.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self { lexer, current, depth: 0 }
    }

    pub fn at_end(&self) -> bool {
        self.current.is(TokenKind::EndOfInput)
    }

    fn advance(&mut self) -> Token<'a> {
        std::mem::replace(&mut self.current, self.lexer.next_token())
    }

    fn eat(&mut self, expected: TokenKind) -> ParseResult<Token<'a>> {
        if !self.current.is(expected) {
            return Err(SyntaxError::UnexpectedToken { found: self.current.to_string(), expected });
        }
        Ok(self.advance())
    }

    fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING { return Err(SyntaxError::NestingTooDeep(MAX_NESTING)); }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parses one top-level statement and the `;` that may follow it.
    pub fn parse_statement(&mut self) -> ParseResult<Ast> {
        // A failed statement may have left the nesting count behind
        self.depth = 0;

        let statement = self.statement()?.ast;
        if self.current.is(TokenKind::Semicolon) {
            self.advance();
        }

        debug!("parsed statement {:?}", statement);
        Ok(statement)
    }

    fn number(&mut self) -> ParseResult<Parsed> {
        let token = self.eat(TokenKind::Number)?;
        token.text.parse()
            .map(|value| Parsed::leaf(Ast::Number(value)))
            .map_err(|_| SyntaxError::InvalidNumber(token.text.to_owned()))
    }

    fn factor(&mut self) -> ParseResult<Parsed> {
        match self.current.kind {
            TokenKind::Number => self.number(),
            TokenKind::Identifier => Ok(Parsed::leaf(Ast::variable(self.advance().text))),
            TokenKind::LeftParen => {
                self.advance();
                self.enter()?;
                let expression = self.expr()?;
                self.leave();
                self.eat(TokenKind::RightParen)?;
                Ok(expression)
            }
            _ => Err(SyntaxError::ExpectedFactor { found: self.current.to_string() }),
        }
    }

    fn term_tail(&mut self, mut left: Parsed) -> ParseResult<Parsed> {
        while let Some(operator) = BinaryOperator::multiplicative(self.current.kind) {
            self.advance();
            left = Parsed::binary(left, operator, self.factor()?)?;
        }
        Ok(left)
    }

    fn expr_tail(&mut self, mut left: Parsed) -> ParseResult<Parsed> {
        while let Some(operator) = BinaryOperator::additive(self.current.kind) {
            self.advance();
            let right = self.term()?;
            left = Parsed::binary(left, operator, right)?;
        }
        Ok(left)
    }

    fn term(&mut self) -> ParseResult<Parsed> {
        let left = self.factor()?;
        self.term_tail(left)
    }

    fn expr(&mut self) -> ParseResult<Parsed> {
        let left = self.term()?;
        self.expr_tail(left)
    }

    fn statement(&mut self) -> ParseResult<Parsed> {
        self.enter()?;
        let statement = match self.current.kind {
            TokenKind::Print => {
                self.advance();
                let expression = self.expr()?;
                let height = expression.height;
                Parsed::node(Ast::Print(expression.boxed()), [height])?
            }
            TokenKind::Identifier => self.identifier_statement()?,
            TokenKind::If => self.if_statement()?,
            TokenKind::For => self.for_statement()?,
            TokenKind::LeftBrace => self.block()?,
            _ => self.expr()?,
        };
        self.leave();
        Ok(statement)
    }

    fn identifier_statement(&mut self) -> ParseResult<Parsed> {
        let name = self.eat(TokenKind::Identifier)?.text;

        if self.current.is(TokenKind::Assign) {
            self.advance();
            let expression = self.expr()?;
            let height = expression.height;
            return Parsed::node(Ast::assign(name, expression.ast), [height]);
        }

        // A bare variable may still be the first operand of a longer expression
        let left = self.term_tail(Parsed::leaf(Ast::variable(name)))?;
        self.expr_tail(left)
    }

    fn if_statement(&mut self) -> ParseResult<Parsed> {
        self.eat(TokenKind::If)?;
        self.eat(TokenKind::LeftParen)?;
        let condition = self.expr()?;
        self.eat(TokenKind::RightParen)?;
        let then_branch = self.statement()?;

        let else_branch = if self.current.is(TokenKind::Else) {
            self.advance();
            Some(self.statement()?)
        } else {
            None
        };

        let heights = [condition.height, then_branch.height, else_branch.as_ref().map_or(0, |branch| branch.height)];
        Parsed::node(Ast::If {
            condition: condition.boxed(),
            then_branch: then_branch.boxed(),
            else_branch: else_branch.map(Parsed::boxed),
        }, heights)
    }

    fn for_statement(&mut self) -> ParseResult<Parsed> {
        self.eat(TokenKind::For)?;
        self.eat(TokenKind::LeftParen)?;
        let init = self.statement()?;
        self.eat(TokenKind::Semicolon)?;
        let condition = self.expr()?;
        self.eat(TokenKind::Semicolon)?;
        let update = self.statement()?;
        self.eat(TokenKind::RightParen)?;
        let body = self.statement()?;

        let heights = [init.height, condition.height, update.height, body.height];
        Parsed::node(Ast::For {
            init: init.boxed(),
            condition: condition.boxed(),
            update: update.boxed(),
            body: body.boxed(),
        }, heights)
    }

    fn block(&mut self) -> ParseResult<Parsed> {
        self.eat(TokenKind::LeftBrace)?;

        let mut statements = vec![];
        let mut height = 0;
        while !self.current.is(TokenKind::RightBrace) && !self.at_end() {
            let statement = self.statement()?;
            height = height.max(statement.height);
            statements.push(statement.ast);
            if self.current.is(TokenKind::Semicolon) {
                self.advance();
            }
        }

        self.eat(TokenKind::RightBrace)?;
        Parsed::node(Ast::Block(statements), [height])
    }
}

/// Parses every top-level statement in `input`.
pub fn parse(input: &str) -> ParseResult<Vec<Ast>> {
    let mut parser = Parser::new(input);
    let mut statements = vec![];

    while !parser.at_end() {
        statements.push(parser.parse_statement()?);
    }

    Ok(statements)
}
