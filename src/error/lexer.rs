/// Lexer related errors.
///
/// Lexing is total over its input: a byte outside the vocabulary degrades to
/// an `Illegal` token instead of failing the whole lex, so the only way the
/// lexer itself can fail is the underlying reader.
#[derive(thiserror::Error, Debug)]
pub enum LexError {
	/// The source reader failed mid-lex.
	#[error("failed to read source: {0}")]
	Io(#[from] std::io::Error),
}
