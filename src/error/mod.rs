pub mod interpreter;
pub mod lexer;
pub mod parser;

/// Error is the top-level error type for the quill pipeline.
///
/// Each stage surfaces the first error it encounters and aborts the current
/// statement; the hosting shell decides whether to keep the session going.
#[derive(thiserror::Error, Debug)]
pub enum Error {
	/// Failures while reading the source input
	#[error("lex error: {0}")]
	Lex(#[from] lexer::LexError),
	/// Structural mismatches while building the syntax tree
	#[error("parse error: {0}")]
	Parse(#[from] parser::ParseError),
	/// Failures while evaluating a parsed program
	#[error("runtime error: {0}")]
	Runtime(#[from] interpreter::RuntimeError),
}
