use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quill", about = "An interpreter for the quill expression language")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Evaluate a source file and print its final value
	File { path: PathBuf },
	/// Start an interactive prompt
	Repl,
}
