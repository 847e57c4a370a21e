use std::{
	fmt::{self, Display},
	io,
	path::Path,
};


/// A failure outside of lexical analysis.
#[derive(Debug)]
pub enum Error {
	/// Failed to read the source.
	Read { path: Box<Path>, error: io::Error },
	/// Failed to write the output.
	Write(io::Error),
}


impl Error {
	pub fn read(error: io::Error, path: &Path) -> Self {
		Self::Read { path: path.into(), error }
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Read { path, error } => write!(f, "failed to read {}: {}", path.display(), error),
			Self::Write(error) => write!(f, "failed to write output: {}", error),
		}
	}
}


impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Read { error, .. } | Self::Write(error) => Some(error),
		}
	}
}


impl From<io::Error> for Error {
	fn from(error: io::Error) -> Self {
		Self::Write(error)
	}
}


impl From<serde_json::Error> for Error {
	fn from(error: serde_json::Error) -> Self {
		Self::Write(error.into())
	}
}
