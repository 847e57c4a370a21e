use std::fmt::{self, Display};

use super::{Error, ErrorKind};


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::UnrecognizedCharacter(value) => {
				write!(f, "unrecognized character '{}'", (*value as char).escape_debug())?
			}

			Self::UnterminatedLiteral => "unterminated literal".fmt(f)?,

			Self::UnterminatedComment => "unterminated comment".fmt(f)?,

			Self::MalformedEscape => "malformed escape sequence".fmt(f)?,

			Self::InvalidExponent => "invalid exponent".fmt(f)?,
		};

		Ok(())
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"{} - {} in {}.",
			self.pos,
			self.error,
			String::from_utf8_lossy(&self.lexeme).escape_debug()
		)
	}
}
