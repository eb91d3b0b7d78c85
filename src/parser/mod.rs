//! Precedence-climbing (Pratt) parser.
//!
//! Every token kind that can appear in an expression has a parse rule with a
//! left binding power, an optional null-denotation (how the token starts an
//! expression) and an optional left-denotation (how the token continues one,
//! given the already-parsed left operand). Higher binding power binds
//! tighter:
//!
//! |Tokens|LBP|Role
//! --|--|--
//! `Number` `Ident`|0|atoms
//! `(`|0|grouping, parses at precedence 0 up to `)`
//! `+` `-`|10|left-associative infix
//! `*` `/`|20|left-associative infix
//!
//! Statements sit above the expression grammar: `let`/`const` open a
//! declaration, an identifier directly followed by `=` opens an assignment,
//! anything else is an expression statement. Runs of `;` separate
//! statements.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{
	ast::{BinaryOp, DeclKind, Expr, Program, Stmt, VarAssign, VarDecl},
	error::parser::ParseError,
	lexer::{Token, TokenKind, TokenStream},
};

type NudFn = fn(&mut Parser) -> Result<Expr, ParseError>;
type LedFn = fn(&mut Parser, Expr) -> Result<Expr, ParseError>;

/// One row of the rule table.
struct ParseRule {
	/// Left binding power; 0 never continues an expression
	lbp: i8,
	/// Applied when the token starts an expression
	nud: Option<NudFn>,
	/// Applied when the token appears infix
	led: Option<LedFn>,
}

/// The rule table, built once and shared by every parser instance.
static RULES: Lazy<HashMap<TokenKind, ParseRule>> = Lazy::new(|| {
	HashMap::from([
		(TokenKind::Number, ParseRule { lbp: 0, nud: Some(nud_number), led: None }),
		(TokenKind::Ident, ParseRule { lbp: 0, nud: Some(nud_identifier), led: None }),
		(TokenKind::LParen, ParseRule { lbp: 0, nud: Some(nud_group), led: None }),
		// `)` is consumed inside the `(` null-denotation, never on its own
		(TokenKind::RParen, ParseRule { lbp: 0, nud: None, led: None }),
		(TokenKind::Plus, ParseRule { lbp: 10, nud: None, led: Some(led_plus) }),
		(TokenKind::Minus, ParseRule { lbp: 10, nud: None, led: Some(led_minus) }),
		(TokenKind::Star, ParseRule { lbp: 20, nud: None, led: Some(led_star) }),
		(TokenKind::Slash, ParseRule { lbp: 20, nud: None, led: Some(led_slash) }),
	])
});

fn nud_number(p: &mut Parser) -> Result<Expr, ParseError> {
	Ok(Expr::NumericLiteral(p.cur.literal.clone()))
}

fn nud_identifier(p: &mut Parser) -> Result<Expr, ParseError> {
	Ok(Expr::Identifier(p.cur.literal.clone()))
}

/// `(` recursively parses at precedence 0 and requires a matching `)`.
fn nud_group(p: &mut Parser) -> Result<Expr, ParseError> {
	p.next_token()?;
	let inner = p.parse_expr(0)?;
	if p.cur.kind != TokenKind::RParen {
		return Err(p.unexpected(TokenKind::RParen));
	}
	Ok(inner)
}

fn led_plus(p: &mut Parser, left: Expr) -> Result<Expr, ParseError> {
	p.binary_expr(left, BinaryOp::Plus, 10)
}

fn led_minus(p: &mut Parser, left: Expr) -> Result<Expr, ParseError> {
	p.binary_expr(left, BinaryOp::Minus, 10)
}

fn led_star(p: &mut Parser, left: Expr) -> Result<Expr, ParseError> {
	p.binary_expr(left, BinaryOp::Star, 20)
}

fn led_slash(p: &mut Parser, left: Expr) -> Result<Expr, ParseError> {
	p.binary_expr(left, BinaryOp::Slash, 20)
}

/// Builds a `Program` from a token stream.
pub struct Parser {
	stream: TokenStream,
	cur:    Token,
	rules:  &'static HashMap<TokenKind, ParseRule>,
}

impl Parser {
	/// Prime the parser with the first token of the stream.
	pub fn new(stream: TokenStream) -> Result<Self, ParseError> {
		let cur = stream.pop()?;
		Ok(Self { stream, cur, rules: &RULES })
	}

	/// Parse statements until the stream runs out or `Eof` is reached.
	pub fn parse(&mut self) -> Result<Program, ParseError> {
		let mut program = Program::new();
		while !self.stream.is_empty() && self.cur.kind != TokenKind::Eof {
			log::trace!("statement starts with {:?} at {}:{}", self.cur.kind, self.cur.line, self.cur.column);
			let stmt = self.parse_stmt()?;
			program.body.push(stmt);
			self.skip_semicolons();
		}
		Ok(program)
	}

	fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
		match self.cur.kind {
			TokenKind::Let | TokenKind::Const => self.parse_var_decl().map(Stmt::VarDecl),
			TokenKind::Ident if self.peek_kind() == Some(TokenKind::Assign) => {
				self.parse_var_assign().map(Stmt::VarAssign)
			}
			_ => self.parse_expr(0).map(Stmt::Expr),
		}
	}

	/// `let name: type [= expr]` or `const name: type = expr`.
	///
	/// Any type keyword is accepted; its literal text is recorded with no
	/// further validation. A missing initializer is legal only for `let`.
	fn parse_var_decl(&mut self) -> Result<VarDecl, ParseError> {
		let kind = if self.cur.kind == TokenKind::Let { DeclKind::Let } else { DeclKind::Const };

		self.expect(TokenKind::Ident)?;
		let name = self.cur.literal.clone();

		self.expect(TokenKind::Colon)?;
		self.expect(TokenKind::Type)?;
		let declared_type = self.cur.literal.clone();

		self.next_token()?;
		if matches!(self.cur.kind, TokenKind::Eof | TokenKind::Semi) {
			if kind == DeclKind::Const {
				return Err(self.unexpected(TokenKind::Assign));
			}
			return Ok(VarDecl { name, declared_type, kind, value: None });
		}

		if self.cur.kind != TokenKind::Assign {
			return Err(self.unexpected(TokenKind::Assign));
		}
		self.next_token()?;
		let value = self.parse_expr(0)?;

		Ok(VarDecl { name, declared_type, kind, value: Some(value) })
	}

	/// `name = expr`; whether `name` was declared is checked at evaluation
	/// time.
	fn parse_var_assign(&mut self) -> Result<VarAssign, ParseError> {
		let name = self.cur.literal.clone();
		self.expect(TokenKind::Assign)?;
		self.next_token()?;
		let value = self.parse_expr(0)?;
		Ok(VarAssign { name, value })
	}

	/// The precedence-climbing core: parse a left-hand side via the current
	/// token's null-denotation, then keep folding infix tokens into it while
	/// their binding power exceeds `min_bp`.
	fn parse_expr(&mut self, min_bp: i8) -> Result<Expr, ParseError> {
		let nud = self
			.rule(self.cur.kind)
			.and_then(|rule| rule.nud)
			.ok_or_else(|| self.unexpected_desc("expression"))?;
		let mut lhs = nud(self)?;

		// A statement terminator right after the atom ends the expression
		if self.next_token().is_err() || matches!(self.cur.kind, TokenKind::Eof | TokenKind::Semi) {
			return Ok(lhs);
		}

		while !self.stream.is_empty() {
			let Some(rule) = self.rule(self.cur.kind) else { break };
			if rule.lbp <= min_bp {
				break;
			}
			let led = rule.led.ok_or_else(|| self.unexpected_desc("infix operator"))?;
			self.next_token()?;
			lhs = led(self, lhs)?;
		}

		Ok(lhs)
	}

	/// Parse the right operand of `op` at the operator's own binding power,
	/// which makes same-power chains left-associative.
	fn binary_expr(&mut self, left: Expr, op: BinaryOp, bp: i8) -> Result<Expr, ParseError> {
		let right = self.parse_expr(bp)?;
		Ok(Expr::binary(left, op, right))
	}

	/// Advance and require the new current token to be `expected`.
	fn expect(&mut self, expected: TokenKind) -> Result<(), ParseError> {
		self.next_token()?;
		if self.cur.kind != expected {
			return Err(self.unexpected(expected));
		}
		Ok(())
	}

	/// Advance to the next token.
	fn next_token(&mut self) -> Result<(), ParseError> {
		self.cur = self.stream.pop()?;
		Ok(())
	}

	/// Peek at the kind following the current token.
	fn peek_kind(&self) -> Option<TokenKind> {
		self.stream.peek().ok().map(|token| token.kind)
	}

	fn skip_semicolons(&mut self) {
		while self.cur.kind == TokenKind::Semi && self.next_token().is_ok() {}
	}

	fn rule(&self, kind: TokenKind) -> Option<&'static ParseRule> {
		self.rules.get(&kind)
	}

	fn unexpected(&self, expected: TokenKind) -> ParseError {
		self.unexpected_desc(&expected.to_string())
	}

	fn unexpected_desc(&self, expected: &str) -> ParseError {
		ParseError::UnexpectedToken {
			expected: expected.to_string(),
			found:    self.cur.kind.to_string(),
			line:     self.cur.line,
			column:   self.cur.column,
		}
	}
}
