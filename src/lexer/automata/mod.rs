mod class;
mod scanner;
mod table;
#[cfg(test)]
mod tests;

pub use class::{CharClass, Classify};
pub use scanner::{Scan, Scanner};
pub use table::Table;


/// All states in the automata.
///
/// Besides `Initial`, `End` and `Error`, states are either prefixes, which can't produce a
/// token by themselves, or accepting states, which are the ones that have a rule targeting
/// `End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
	Initial,

	Identifier,
	Whitespace,
	Separator,

	// Operator prefixes:
	Plus,       // +
	Minus,      // -
	Star,       // *
	Slash,      // /
	Percent,    // %
	Equal,      // =
	Less,       // <
	Greater,    // >
	Ampersand,  // &
	Bang,       // !
	Pipe,       // |
	Caret,      // ^
	ShiftLeft,  // <<
	ShiftRight, // >>
	Dot,        // .
	/// A complete operator, which can't be extended further.
	Operator,

	// Comments:
	SingleLineComment,
	MultiLineComment,
	MultiLineCommentStar,
	MultiLineCommentEnd,

	// Char literals:
	Char,
	CharEscape,
	CharEscapeDigit1,
	CharEscapeDigit2,
	CharEscapeDigit3,
	CharEscapeHex,
	CharEscapeHex1,
	CharCharacter,
	CharEnd,

	// String literals:
	String,
	StringEscape,
	StringEnd,

	// Number literals:
	Zero,
	Number,
	NumberU,
	NumberL,
	NumberUL,
	HexaPrefix,
	Hexa,
	FloatNumber,
	FloatNumberL,
	Exponent,
	ExponentSign,
	ExponentValue,

	/// Lexeme complete, the triggering character is not consumed.
	End,
	/// No valid continuation.
	Error,
}


impl State {
	pub const ALL: [State; 50] = [
		Self::Initial,
		Self::Identifier,
		Self::Whitespace,
		Self::Separator,
		Self::Plus,
		Self::Minus,
		Self::Star,
		Self::Slash,
		Self::Percent,
		Self::Equal,
		Self::Less,
		Self::Greater,
		Self::Ampersand,
		Self::Bang,
		Self::Pipe,
		Self::Caret,
		Self::ShiftLeft,
		Self::ShiftRight,
		Self::Dot,
		Self::Operator,
		Self::SingleLineComment,
		Self::MultiLineComment,
		Self::MultiLineCommentStar,
		Self::MultiLineCommentEnd,
		Self::Char,
		Self::CharEscape,
		Self::CharEscapeDigit1,
		Self::CharEscapeDigit2,
		Self::CharEscapeDigit3,
		Self::CharEscapeHex,
		Self::CharEscapeHex1,
		Self::CharCharacter,
		Self::CharEnd,
		Self::String,
		Self::StringEscape,
		Self::StringEnd,
		Self::Zero,
		Self::Number,
		Self::NumberU,
		Self::NumberL,
		Self::NumberUL,
		Self::HexaPrefix,
		Self::Hexa,
		Self::FloatNumber,
		Self::FloatNumberL,
		Self::Exponent,
		Self::ExponentSign,
		Self::ExponentValue,
		Self::End,
		Self::Error,
	];


	/// The position of the state in `State::ALL`.
	pub fn index(self) -> usize {
		self as usize
	}


	/// Whether the state is one of the pseudo states that have no outgoing rules.
	pub fn is_sink(self) -> bool {
		matches!(self, Self::End | Self::Error)
	}


	pub fn in_escape(self) -> bool {
		matches!(
			self,
			Self::CharEscape
				| Self::CharEscapeDigit1
				| Self::CharEscapeDigit2
				| Self::CharEscapeDigit3
				| Self::CharEscapeHex
				| Self::CharEscapeHex1
				| Self::StringEscape
		)
	}


	pub fn in_block_comment(self) -> bool {
		matches!(self, Self::MultiLineComment | Self::MultiLineCommentStar)
	}


	pub fn in_exponent(self) -> bool {
		matches!(self, Self::Exponent | Self::ExponentSign)
	}
}


/// A transition rule: if the visited character belongs to the class, move to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
	pub class: CharClass,
	pub target: State,
}
