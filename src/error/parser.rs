use crate::lexer::stream::EmptyStream;

/// Parser related errors.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
	/// The token at the front of the stream does not fit the grammar.
	#[error("expected {expected}, found {found} at line {line}, column {column}")]
	UnexpectedToken {
		expected: String,
		found:    String,
		line:     usize,
		column:   usize,
	},
	/// The token stream ran out mid-statement.
	#[error(transparent)]
	EmptyStream(#[from] EmptyStream),
}
