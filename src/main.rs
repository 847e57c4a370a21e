mod args;
mod error;
mod fmt;
mod lexer;
mod output;
mod source;
mod symbol;
mod term;
#[cfg(test)]
mod tests;

use std::{
	io::{self, Write},
	path::Path,
};

use term::color;

use args::{Args, Command};
use error::Error;
use source::Source;


fn main() -> ! {
	init_tracing();

	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(1)
		}
	};

	let result = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			std::process::exit(0)
		},
	};

	let exit_code = match result {
		Ok(code) => code,
		Err(error) => {
			eprintln!("{}: {}", color::Fg(color::Red, "Error"), error);
			1
		}
	};

	std::process::exit(exit_code)
}


/// Install the log subscriber, only if `RUST_LOG` is set. Logs go to stderr, leaving stdout
/// for the tokens.
fn init_tracing() {
	use tracing_subscriber::{fmt, prelude::*, EnvFilter};

	if std::env::var("RUST_LOG").is_ok() {
		tracing_subscriber::registry()
			.with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
			.with(EnvFilter::from_default_env())
			.init();
	}
}


fn run(args: Args) -> Result<i32, Error> {
	let source = match &args.path {
		Some(path) => Source::from_path(path.as_path())
			.map_err(|error| Error::read(error, path))?,

		None => {
			let path = Path::new("<stdin>");
			Source::from_reader(path, io::stdin().lock())
				.map_err(|error| Error::read(error, path))?
		}
	};

	tracing::debug!(path = %source.path.display(), len = source.contents.len(), "source loaded");

	let options = lexer::Options { recover: args.recover };
	let mut analyzer = lexer::Analyzer::with_options(lexer::Cursor::from(&source), options);

	let stdout = io::stdout();
	let mut out = stdout.lock();
	let mut errors = 0_usize;

	while let Some(result) = analyzer.next() {
		match result {
			Ok(token) if args.json => {
				writeln!(out, "{}", output::json(&token, analyzer.interner())?)?;
			}

			Ok(token) => {
				writeln!(out, "{}: {}", token.pos, fmt::Show(&token, analyzer.interner()))?;
			}

			Err(error) => {
				errors += 1;
				eprintln!(
					"{}: {}: {}",
					color::Fg(color::Red, "Error"),
					source.path.display(),
					error
				);
			}
		}
	}

	if args.table {
		for (symbol, lexeme) in analyzer.interner().iter() {
			let lexeme = String::from_utf8_lossy(lexeme);

			if args.json {
				let entry = serde_json::json!({ "index": symbol.index(), "lexeme": lexeme });
				writeln!(out, "{}", entry)?;
			} else {
				writeln!(out, "{}\t{}", symbol.index(), lexeme)?;
			}
		}
	}

	out.flush()?;

	Ok(if errors == 0 { 0 } else { 2 })
}
