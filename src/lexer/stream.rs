use std::{collections::VecDeque, sync::{Mutex, PoisonError}};

use super::token::Token;

/// Popping or peeking a stream with no tokens left.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("token stream is empty")]
pub struct EmptyStream;

/// A first-in-first-out queue of tokens.
///
/// The lexer pushes, the parser pops; `pop` returns tokens in exactly the
/// order they were pushed. All operations serialize under one lock so a
/// stream handed across threads never exposes a partial read, though the
/// intended pipeline is strictly lex-then-parse on one thread.
#[derive(Debug, Default)]
pub struct TokenStream {
	tokens: Mutex<VecDeque<Token>>,
}

impl TokenStream {
	pub fn new() -> Self { Self::default() }

	/// Append a token at the back of the queue.
	pub fn push(&self, token: Token) {
		self.lock().push_back(token);
	}

	/// Remove and return the front token.
	pub fn pop(&self) -> Result<Token, EmptyStream> {
		self.lock().pop_front().ok_or(EmptyStream)
	}

	/// Return the front token without removing it.
	pub fn peek(&self) -> Result<Token, EmptyStream> {
		self.lock().front().cloned().ok_or(EmptyStream)
	}

	pub fn len(&self) -> usize { self.lock().len() }

	pub fn is_empty(&self) -> bool { self.lock().is_empty() }

	/// Snapshot of the remaining tokens, for tests and debugging.
	pub fn tokens(&self) -> Vec<Token> {
		self.lock().iter().cloned().collect()
	}

	fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Token>> {
		// no operation can panic while holding the lock, so a poisoned
		// guard still holds a consistent queue
		self.tokens.lock().unwrap_or_else(PoisonError::into_inner)
	}
}
