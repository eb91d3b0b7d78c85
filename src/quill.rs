use std::{fs::File, io::Write, path::Path};

use crate::{
	error::{Error, lexer::LexError},
	interpreter::{Interpreter, value::Value},
	lexer::{Lexer, TokenStream},
	parser::Parser,
};

/// One interpreter session.
///
/// The session owns its environment for its whole lifetime: declarations
/// persist across `eval` calls, and a failing line neither corrupts the
/// environment nor the ability to process the next one.
pub struct Quill {
	interpreter: Interpreter,
}

impl Quill {
	pub fn new() -> Self { Self { interpreter: Interpreter::new() } }

	/// Run a source file against this session and return the program's final
	/// value.
	pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Value, Error> {
		let file = File::open(path).map_err(LexError::from)?;
		let tokens = Lexer::new(file).lex()?;
		self.execute(tokens)
	}

	/// Lex, parse and evaluate one unit of source text against this
	/// session's environment.
	pub fn eval(&mut self, source: &str) -> Result<Value, Error> {
		let tokens = Lexer::new(source.as_bytes()).lex()?;
		self.execute(tokens)
	}

	/// Run the interactive prompt until end of input.
	pub fn run_prompt(&mut self) {
		let stdin = std::io::stdin();
		let mut input = String::new();
		println!("quill interactive shell - press Ctrl+D to exit");

		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("failed to flush stdout: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!();
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("failed to read line: {e}");
					continue;
				}
			}

			let line = input.trim();
			if line.is_empty() {
				continue;
			}
			match self.eval(line) {
				Ok(value) => println!("{value}"),
				Err(e) => eprintln!("{e}"),
			}
		}
	}

	fn execute(&mut self, tokens: TokenStream) -> Result<Value, Error> {
		let mut parser = Parser::new(tokens)?;
		let program = parser.parse()?;
		Ok(self.interpreter.run(&program)?)
	}
}

impl Default for Quill {
	fn default() -> Self { Self::new() }
}
