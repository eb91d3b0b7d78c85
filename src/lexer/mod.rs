//! Converts a byte stream of source text into a finite token stream.
//!
//! The lexer keeps one byte of lookahead. At each step it skips a run of
//! whitespace, then classifies the current byte: the single-character table
//! wins first, then a letter or underscore opens a maximal identifier run
//! (checked against the keyword table afterwards), then a digit opens a
//! maximal digit run. Anything else becomes an `Illegal` token carrying that
//! one byte — malformed input never aborts the lex, it just produces tokens
//! the parser will reject.
//!
//! Numbers are integer digit runs only: no decimal point, no exponent, no
//! sign. A leading `-` lexes as a separate `Minus` token, which makes unary
//! minus a parser concern.

pub mod stream;
pub mod token;

use std::io::{BufReader, Bytes, Read};

pub use stream::TokenStream;
pub use token::{Token, TokenKind};

use crate::error::lexer::LexError;

/// A lexer over any byte source.
pub struct Lexer<R: Read> {
	/// Source bytes, consumed exactly once
	reader: Bytes<BufReader<R>>,
	/// One byte of lookahead; `None` once the input is exhausted
	ch:     Option<u8>,
	/// 1-based line of the lookahead byte
	line:   usize,
	/// Column of the lookahead byte, reset to 0 by a newline
	column: usize,
}

impl<R: Read> Lexer<R> {
	pub fn new(reader: R) -> Self {
		Self { reader: BufReader::new(reader).bytes(), ch: None, line: 1, column: 0 }
	}

	/// Lex the whole input into a token stream terminated by exactly one
	/// `Eof` token. Fails only if the underlying reader fails.
	pub fn lex(mut self) -> Result<TokenStream, LexError> {
		let tokens = TokenStream::new();

		// Prime the lookahead
		self.read_char()?;

		loop {
			self.skip_whitespace()?;
			let token = self.next_token()?;
			let done = token.kind == TokenKind::Eof;
			log::trace!("lexed {:?} at {}:{}", token.kind, token.line, token.column);
			tokens.push(token);
			if done {
				break;
			}
		}

		Ok(tokens)
	}

	/// Advance the lookahead by one byte, maintaining the position counters.
	fn read_char(&mut self) -> Result<(), LexError> {
		match self.reader.next() {
			Some(Ok(byte)) => {
				self.ch = Some(byte);
				self.column += 1;
				if byte == b'\n' {
					self.line += 1;
					self.column = 0;
				}
				Ok(())
			}
			Some(Err(e)) => Err(e.into()),
			None => {
				self.ch = None;
				Ok(())
			}
		}
	}

	fn skip_whitespace(&mut self) -> Result<(), LexError> {
		while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
			self.read_char()?;
		}
		Ok(())
	}

	/// Lex a single token starting at the current lookahead byte.
	fn next_token(&mut self) -> Result<Token, LexError> {
		let line = self.line;
		let column = self.column;

		let Some(ch) = self.ch else {
			return Ok(Token::new(TokenKind::Eof, "", line, column));
		};

		if let Some(kind) = TokenKind::from_single_char(ch) {
			self.read_char()?;
			return Ok(Token::new(kind, (ch as char).to_string(), line, column));
		}

		if is_letter(ch) {
			return self.lex_identifier(line, column);
		}
		if ch.is_ascii_digit() {
			return self.lex_number(line, column);
		}

		// consume the offending byte so lexing stays total
		self.read_char()?;
		Ok(Token::new(TokenKind::Illegal, (ch as char).to_string(), line, column))
	}

	/// Lex a maximal letter/digit/underscore run, then classify it as a
	/// keyword or identifier.
	fn lex_identifier(&mut self, line: usize, column: usize) -> Result<Token, LexError> {
		let mut literal = String::new();
		while let Some(ch) = self.ch {
			if !is_letter(ch) && !ch.is_ascii_digit() {
				break;
			}
			literal.push(ch as char);
			self.read_char()?;
		}

		let kind = TokenKind::keyword_or_identifier(&literal);
		Ok(Token::new(kind, literal, line, column))
	}

	/// Lex a maximal digit run.
	fn lex_number(&mut self, line: usize, column: usize) -> Result<Token, LexError> {
		let mut literal = String::new();
		while let Some(ch) = self.ch {
			if !ch.is_ascii_digit() {
				break;
			}
			literal.push(ch as char);
			self.read_char()?;
		}

		Ok(Token::new(TokenKind::Number, literal, line, column))
	}
}

fn is_letter(ch: u8) -> bool { ch.is_ascii_alphabetic() || ch == b'_' }

#[cfg(test)]
mod tests {
	use super::*;

	fn lex(input: &str) -> Vec<Token> {
		Lexer::new(input.as_bytes()).lex().unwrap().tokens()
	}

	fn kinds(input: &str) -> Vec<TokenKind> {
		lex(input).into_iter().map(|t| t.kind).collect()
	}

	#[test]
	fn lex_number_then_eof() {
		let tokens = lex("12345");
		assert_eq!(tokens.len(), 2);
		assert_eq!(tokens[0].kind, TokenKind::Number);
		assert_eq!(tokens[0].literal, "12345");
		assert_eq!(tokens[1].kind, TokenKind::Eof);
	}

	#[test]
	fn lex_empty_and_whitespace_only() {
		assert_eq!(kinds(""), vec![TokenKind::Eof]);
		assert_eq!(kinds("  \t\r\n  "), vec![TokenKind::Eof]);
	}

	#[test]
	fn lex_single_char_tokens() {
		assert_eq!(kinds(": = ; { } ( ) + - * /"), vec![
			TokenKind::Colon,
			TokenKind::Assign,
			TokenKind::Semi,
			TokenKind::LBrace,
			TokenKind::RBrace,
			TokenKind::LParen,
			TokenKind::RParen,
			TokenKind::Plus,
			TokenKind::Minus,
			TokenKind::Star,
			TokenKind::Slash,
			TokenKind::Eof,
		]);
	}

	#[test]
	fn lex_keywords_and_identifiers() {
		assert_eq!(kinds("let const def true false"), vec![
			TokenKind::Let,
			TokenKind::Const,
			TokenKind::Function,
			TokenKind::True,
			TokenKind::False,
			TokenKind::Eof,
		]);

		let tokens = lex("int string bool");
		assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Type));
		assert_eq!(tokens[0].literal, "int");
		assert_eq!(tokens[1].literal, "string");
		assert_eq!(tokens[2].literal, "bool");

		assert_eq!(kinds("x _name snake_case lets x1"), vec![
			TokenKind::Ident,
			TokenKind::Ident,
			TokenKind::Ident,
			TokenKind::Ident,
			TokenKind::Ident,
			TokenKind::Eof,
		]);
	}

	#[test]
	fn lex_declaration() {
		let tokens = lex("let x: int = 5;");
		let expected = [
			(TokenKind::Let, "let"),
			(TokenKind::Ident, "x"),
			(TokenKind::Colon, ":"),
			(TokenKind::Type, "int"),
			(TokenKind::Assign, "="),
			(TokenKind::Number, "5"),
			(TokenKind::Semi, ";"),
			(TokenKind::Eof, ""),
		];
		assert_eq!(tokens.len(), expected.len());
		for (token, (kind, literal)) in tokens.iter().zip(expected) {
			assert_eq!(token.kind, kind);
			assert_eq!(token.literal, literal);
		}
	}

	#[test]
	fn lex_illegal_bytes_do_not_abort() {
		let tokens = lex("1 @ 2");
		assert_eq!(tokens[0].kind, TokenKind::Number);
		assert_eq!(tokens[1].kind, TokenKind::Illegal);
		assert_eq!(tokens[1].literal, "@");
		assert_eq!(tokens[2].kind, TokenKind::Number);
		assert_eq!(tokens[3].kind, TokenKind::Eof);

		assert_eq!(kinds("@#$"), vec![
			TokenKind::Illegal,
			TokenKind::Illegal,
			TokenKind::Illegal,
			TokenKind::Eof,
		]);
	}

	#[test]
	fn lex_unsigned_numbers_only() {
		// `-7` is Minus then Number; `3.14` is Number, Illegal, Number
		assert_eq!(kinds("-7"), vec![TokenKind::Minus, TokenKind::Number, TokenKind::Eof]);

		let tokens = lex("3.14");
		assert_eq!(tokens[0].literal, "3");
		assert_eq!(tokens[1].kind, TokenKind::Illegal);
		assert_eq!(tokens[2].literal, "14");
	}

	#[test]
	fn lex_positions() {
		let tokens = lex("let x: int = 5");
		assert_eq!((tokens[0].line, tokens[0].column), (1, 1)); // let
		assert_eq!((tokens[1].line, tokens[1].column), (1, 5)); // x
		assert_eq!((tokens[2].line, tokens[2].column), (1, 6)); // :
		assert_eq!((tokens[3].line, tokens[3].column), (1, 8)); // int
		assert_eq!((tokens[4].line, tokens[4].column), (1, 12)); // =
		assert_eq!((tokens[5].line, tokens[5].column), (1, 14)); // 5
	}

	#[test]
	fn lex_newline_resets_column() {
		let tokens = lex("a\nbc\nd");
		assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
		assert_eq!((tokens[1].line, tokens[1].column), (2, 1));
		assert_eq!((tokens[2].line, tokens[2].column), (3, 1));
	}

	#[test]
	fn lex_adjacent_tokens_without_spaces() {
		assert_eq!(kinds("(1+2)*3"), vec![
			TokenKind::LParen,
			TokenKind::Number,
			TokenKind::Plus,
			TokenKind::Number,
			TokenKind::RParen,
			TokenKind::Star,
			TokenKind::Number,
			TokenKind::Eof,
		]);
	}

	#[test]
	fn lex_exactly_one_eof() {
		for input in ["", "   ", "1 + 2", "let x: int"] {
			let eofs = lex(input).iter().filter(|t| t.kind == TokenKind::Eof).count();
			assert_eq!(eofs, 1, "input {input:?}");
		}
	}
}
