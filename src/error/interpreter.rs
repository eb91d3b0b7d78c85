use crate::{ast::BinaryOp, interpreter::value::Value};

/// Errors that can occur while evaluating a program.
#[derive(thiserror::Error, Debug)]
pub enum RuntimeError {
	/// A name was read but no scope in the chain binds it.
	#[error("identifier '{name}' not found")]
	UnresolvedIdentifier { name: String },
	/// A name was assigned to but no scope in the chain binds it.
	#[error("variable '{name}' not found")]
	UndeclaredVariable { name: String },
	/// The nearest binding for the assignment target is a `const`.
	#[error("variable '{name}' is a constant and cannot be reassigned")]
	ConstReassignment { name: String },
	/// The right operand of `/` evaluated to exactly zero.
	#[error("division by zero")]
	DivisionByZero,
	/// A binary operator was applied to a non-numeric operand.
	#[error("cannot apply '{op}' to {left} and {right}")]
	UnsupportedOperation { op: BinaryOp, left: Value, right: Value },
	/// Invariant violation, should never happen
	#[error("internal error: {0}")]
	Internal(#[from] anyhow::Error),
}
