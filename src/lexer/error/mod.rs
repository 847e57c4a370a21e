mod fmt;

use super::SourcePos;


/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
	/// No transition rule accepts the character in the current state.
	UnrecognizedCharacter(u8),
	/// String or char literal without the closing delimiter.
	UnterminatedLiteral,
	/// Multi-line comment without the closing `*/`.
	UnterminatedComment,
	/// Invalid escape sequence in a char or string literal.
	MalformedEscape,
	/// Exponent marker not followed by an optional sign and at least one digit.
	InvalidExponent,
}


/// A lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
	pub error: ErrorKind,
	/// The partial lexeme, up to and including the offending character.
	pub lexeme: Box<[u8]>,
	/// Absolute offset of the offending character, or of the end of input.
	pub offset: usize,
	pub pos: SourcePos,
}


impl std::error::Error for Error {}


impl Error {
	pub fn unrecognized_character(input: u8, lexeme: &[u8], offset: usize, pos: SourcePos) -> Self {
		Self {
			error: ErrorKind::UnrecognizedCharacter(input),
			lexeme: lexeme.into(),
			offset,
			pos,
		}
	}

	pub fn unterminated_literal(lexeme: &[u8], offset: usize, pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnterminatedLiteral, lexeme: lexeme.into(), offset, pos }
	}

	pub fn unterminated_comment(lexeme: &[u8], offset: usize, pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnterminatedComment, lexeme: lexeme.into(), offset, pos }
	}

	pub fn malformed_escape(lexeme: &[u8], offset: usize, pos: SourcePos) -> Self {
		Self { error: ErrorKind::MalformedEscape, lexeme: lexeme.into(), offset, pos }
	}

	pub fn invalid_exponent(lexeme: &[u8], offset: usize, pos: SourcePos) -> Self {
		Self { error: ErrorKind::InvalidExponent, lexeme: lexeme.into(), offset, pos }
	}
}
