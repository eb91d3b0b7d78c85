//! Tree-walking evaluator.
//!
//! `evaluate` is a pure structural dispatch over node kind: a program yields
//! the value of its last statement, literals parse their digit text, reads
//! and writes of variables delegate to the scope chain, and binary
//! expressions reduce their operands and apply the operator. There is no
//! other entry point into execution.

pub mod value;

use anyhow::Context;
use value::Value;

use crate::{
	ast::{BinaryOp, Expr, Program, Stmt, VarAssign, VarDecl},
	environment::Environment,
	error::interpreter::RuntimeError,
};

/// Evaluates statements against an environment it owns.
///
/// The interpreter is the session's environment handle: keeping one
/// interpreter alive across inputs keeps declarations visible between them,
/// and a failed statement leaves the environment exactly as the statements
/// before it did.
pub struct Interpreter {
	environment: Environment,
}

impl Interpreter {
	pub fn new() -> Self { Self { environment: Environment::new() } }

	/// Evaluate a whole program: each body statement in order against the
	/// same environment, the last statement's value as the result. An empty
	/// body yields `Value::None`.
	pub fn run(&mut self, program: &Program) -> Result<Value, RuntimeError> {
		let mut last = Value::None;
		for stmt in &program.body {
			last = self.evaluate(stmt)?;
		}
		Ok(last)
	}

	/// Evaluate one statement.
	pub fn evaluate(&mut self, stmt: &Stmt) -> Result<Value, RuntimeError> {
		log::trace!("evaluating {stmt}");
		match stmt {
			Stmt::Program(program) => self.run(program),
			Stmt::VarDecl(decl) => self.eval_var_decl(decl),
			Stmt::VarAssign(assign) => self.eval_var_assign(assign),
			Stmt::Expr(expr) => self.eval_expr(expr),
		}
	}

	/// Evaluate the initializer (if any) against the current environment, so
	/// it may reference already-declared siblings, then bind the result.
	fn eval_var_decl(&mut self, decl: &VarDecl) -> Result<Value, RuntimeError> {
		let value = match &decl.value {
			Some(init) => self.eval_expr(init)?,
			None => Value::None,
		};
		Ok(self.environment.declare(&decl.name, decl.kind, value))
	}

	fn eval_var_assign(&mut self, assign: &VarAssign) -> Result<Value, RuntimeError> {
		let value = self.eval_expr(&assign.value)?;
		self.environment.assign(&assign.name, value)
	}

	fn eval_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
		match expr {
			Expr::NumericLiteral(text) => {
				// the lexer only emits digit runs, so this parse cannot fail
				let number = text
					.parse::<f64>()
					.with_context(|| format!("numeric literal '{text}' is not a number"))?;
				Ok(Value::Num(number))
			}
			Expr::Identifier(name) => self.environment.resolve(name),
			Expr::Binary { left, op, right } => {
				// right operand first; kept for compatibility with the
				// established evaluation order, observable only through
				// which operand's error wins
				let rhs = self.eval_expr(right)?;
				let lhs = self.eval_expr(left)?;
				apply_binary(lhs, *op, rhs)
			}
		}
	}
}

impl Default for Interpreter {
	fn default() -> Self { Self::new() }
}

/// Apply a binary operator to two reduced operands. Both must be numeric;
/// `/` additionally rejects a right operand of exactly zero.
fn apply_binary(lhs: Value, op: BinaryOp, rhs: Value) -> Result<Value, RuntimeError> {
	let (Value::Num(l), Value::Num(r)) = (&lhs, &rhs) else {
		return Err(RuntimeError::UnsupportedOperation { op, left: lhs, right: rhs });
	};

	let result = match op {
		BinaryOp::Plus => l + r,
		BinaryOp::Minus => l - r,
		BinaryOp::Star => l * r,
		BinaryOp::Slash => {
			if *r == 0.0 {
				return Err(RuntimeError::DivisionByZero);
			}
			l / r
		}
	};

	Ok(Value::Num(result))
}
