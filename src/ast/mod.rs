//! Syntax tree node types.
//!
//! Statements and expressions are closed sum types, dispatched with
//! exhaustive matching, and every expression is also usable as a statement.
//! A node exclusively owns its children: the tree is strict, with no sharing
//! and no cycles.
//!
//! `Display` renders nodes in prefix notation, which the parser tests use as
//! their oracle: `2 + 3 * 5` renders as `(+ 2 (* 3 5))`.

use std::fmt;

/// A statement in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
	/// The root node of a parse.
	Program(Program),
	/// A `let` or `const` declaration.
	VarDecl(VarDecl),
	/// An assignment to an existing variable.
	VarAssign(VarAssign),
	/// An expression used as a statement.
	Expr(Expr),
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
	/// Raw digit text, parsed to a number only at evaluation time.
	NumericLiteral(String),
	/// A variable read.
	Identifier(String),
	/// A binary arithmetic expression.
	Binary {
		left:  Box<Expr>,
		op:    BinaryOp,
		right: Box<Expr>,
	},
}

impl Expr {
	pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
		Expr::Binary { left: Box::new(left), op, right: Box::new(right) }
	}
}

/// The closed set of binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
	Plus,
	Minus,
	Star,
	Slash,
}

/// The root of a parsed unit of source text: an ordered body of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
	pub body: Vec<Stmt>,
}

impl Program {
	pub fn new() -> Self { Self::default() }
}

/// A variable declaration.
///
/// `declared_type` records which type keyword was written; it is surfaced
/// but never checked against the evaluated value.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
	pub name:          String,
	pub declared_type: String,
	pub kind:          DeclKind,
	pub value:         Option<Expr>,
}

/// An assignment to a previously declared variable. Whether the name was
/// actually declared is checked at evaluation time, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct VarAssign {
	pub name:  String,
	pub value: Expr,
}

/// Which keyword introduced a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
	Let,
	Const,
}

impl fmt::Display for Stmt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Stmt::Program(program) => write!(f, "{program}"),
			Stmt::VarDecl(decl) => write!(f, "{decl}"),
			Stmt::VarAssign(assign) => write!(f, "(= {} {})", assign.name, assign.value),
			Stmt::Expr(expr) => write!(f, "{expr}"),
		}
	}
}

impl fmt::Display for Expr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Expr::NumericLiteral(text) => write!(f, "{text}"),
			Expr::Identifier(name) => write!(f, "{name}"),
			Expr::Binary { left, op, right } => write!(f, "({op} {left} {right})"),
		}
	}
}

impl fmt::Display for BinaryOp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let op = match self {
			BinaryOp::Plus => "+",
			BinaryOp::Minus => "-",
			BinaryOp::Star => "*",
			BinaryOp::Slash => "/",
		};
		write!(f, "{op}")
	}
}

impl fmt::Display for Program {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let body: Vec<String> = self.body.iter().map(ToString::to_string).collect();
		write!(f, "{}", body.join(" "))
	}
}

impl fmt::Display for VarDecl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let keyword = match self.kind {
			DeclKind::Let => "let",
			DeclKind::Const => "const",
		};
		match &self.value {
			Some(value) => write!(f, "({keyword} {}:{} {value})", self.name, self.declared_type),
			None => write!(f, "({keyword} {}:{})", self.name, self.declared_type),
		}
	}
}
