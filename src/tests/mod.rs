mod util;

use crate::lexer::{Analyzer, Cursor, Error, Options, Token};


fn analyze(source: &crate::source::Source, options: Options) -> Vec<Result<Token, Error>> {
	Analyzer::with_options(Cursor::from(source), options).collect()
}


#[test]
fn test_valid_fixtures() -> std::io::Result<()> {
	let count = util::test_dir(
		"fixtures/valid",
		|source| {
			let tokens = analyze(source, Options::default());

			assert!(!tokens.is_empty(), "{} produced no tokens", source.path.display());

			if let Some(Err(error)) = tokens.iter().find(|result| result.is_err()) {
				panic!("{}: {}", source.path.display(), error);
			}
		}
	)?;

	assert!(count > 0, "no valid fixtures");

	Ok(())
}


#[test]
fn test_invalid_fixtures() -> std::io::Result<()> {
	let count = util::test_dir(
		"fixtures/invalid",
		|source| {
			let tokens = analyze(source, Options::default());

			assert!(
				matches!(tokens.last(), Some(Err(_))),
				"{} should fail",
				source.path.display()
			);
			assert_eq!(
				tokens.iter().filter(|result| result.is_err()).count(),
				1,
				"{} should stop at the first error",
				source.path.display()
			);

			let recovered = analyze(source, Options { recover: true });
			assert!(recovered.len() >= tokens.len());
		}
	)?;

	assert!(count > 0, "no invalid fixtures");

	Ok(())
}
