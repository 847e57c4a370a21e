use std::{fs::File, path::Path};

use crate::lexer::Cursor;


/// Source code to be analyzed. The whole input is read before scanning begins.
#[derive(Debug)]
pub struct Source {
	/// The origin path, may be something fictional like `<stdin>`.
	pub path: Box<Path>,
	/// The source code.
	pub contents: Box<[u8]>,
}


impl Source {
	/// Load the source code from a file path.
	pub fn from_path<P>(path: P) -> std::io::Result<Self>
	where
		P: Into<Box<Path>>,
	{
		let path = path.into();
		let file = File::open(&path)?;
		Self::from_reader(path, file)
	}


	/// Load the source code from a std::io::Read.
	/// The path argument may be anything, including fictional paths like `<stdin>`.
	pub fn from_reader<P, R>(path: P, mut reader: R) -> std::io::Result<Self>
	where
		P: Into<Box<Path>>,
		R: std::io::Read,
	{
		let path = path.into();
		let mut contents = Vec::with_capacity(512); // Expect a few characters.
		reader.read_to_end(&mut contents)?;

		Ok(Self { path, contents: contents.into() })
	}
}


impl<'a> From<&'a Source> for Cursor<'a> {
	fn from(source: &'a Source) -> Self {
		Cursor::from(&*source.contents)
	}
}


#[cfg(test)]
mod tests {
	use super::*;


	#[test]
	fn test_from_reader() {
		let source = Source::from_reader(Path::new("<test>"), b"int x;".as_ref())
			.expect("failed to read source");

		assert_eq!(&*source.path, Path::new("<test>"));
		assert_eq!(&*source.contents, b"int x;");
	}


	#[test]
	fn test_missing_file() {
		let error = Source::from_path(Path::new("/nonexistent/source.c"))
			.expect_err("missing file should fail");

		assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
	}
}
