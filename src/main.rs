use clap::Parser;
use quill::{Quill, cli::{Cli, Mode}};

fn main() {
	simple_logger::SimpleLogger::new().with_level(log::LevelFilter::Warn).env().init().unwrap();

	match Cli::parse().mode {
		Mode::File { path } => match Quill::new().run_file(&path) {
			Ok(value) => println!("{value}"),
			Err(e) => {
				eprintln!("{e}");
				std::process::exit(1);
			}
		},
		Mode::Repl => Quill::new().run_prompt(),
	}
}
