use std::{ffi::OsString, path::PathBuf};

use clap::{clap_app, crate_authors, crate_version, crate_description};


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args)
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args {
	/// The source file, or stdin if absent.
	pub path: Option<PathBuf>,
	/// Print tokens as JSON objects, one per line.
	pub json: bool,
	/// Print the lexeme table after the tokens.
	pub table: bool,
	/// Resume after lexical errors instead of stopping at the first.
	pub recover: bool,
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone
{
	let app = clap_app!(
		clex =>
			(version: crate_version!())
			(author: crate_authors!())
			(about: crate_description!())
			(@arg PATH: "The source file to scan. Reads from stdin if omitted.")
			(@arg json: --json "Print tokens as JSON objects, one per line")
			(@arg table: --table "Print the lexeme table after the tokens")
			(@arg recover: --recover "Report every lexical error instead of stopping at the first")
	);

	match app.get_matches_from_safe(args) {
		Ok(matches) => Ok(
			Command::Run(
				Args {
					path: matches.value_of_os("PATH").map(PathBuf::from),
					json: matches.is_present("json"),
					table: matches.is_present("table"),
					recover: matches.is_present("recover"),
				}
			)
		),

		Err(error) => match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	}
}
