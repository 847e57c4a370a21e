use std::fmt::{self, Display};

use super::{CharClass::{self, *}, Rule, State};


macro_rules! rules {
	($($class:expr => $target:ident),* $(,)?) => {
		&[ $( Rule { class: $class, target: State::$target } ),* ]
	};
}


/// The ordered rule list of each state. The first matching rule wins, so every list that
/// has rules must end with a catch-all.
fn rules_of(state: State) -> &'static [Rule] {
	match state {
		State::Initial => rules![
			Byte(b'0') => Zero,
			Digit => Number,
			Letter => Identifier,
			Blank => Whitespace,
			Newline => Whitespace,
			CharClass::Separator => Separator,
			Byte(b'+') => Plus,
			Byte(b'-') => Minus,
			Byte(b'*') => Star,
			Byte(b'/') => Slash,
			Byte(b'%') => Percent,
			Byte(b'=') => Equal,
			Byte(b'<') => Less,
			Byte(b'>') => Greater,
			Byte(b'&') => Ampersand,
			Byte(b'!') => Bang,
			Byte(b'|') => Pipe,
			Byte(b'^') => Caret,
			Byte(b'.') => Dot,
			LoneOperator => Operator,
			Quote => Char,
			DoubleQuote => String,
			Any => Error,
		],

		State::Identifier => rules![
			IdentChar => Identifier,
			Any => End,
		],

		State::Whitespace => rules![
			Blank => Whitespace,
			Newline => Whitespace,
			Any => End,
		],

		State::Separator => rules![
			Any => End,
		],

		// Operators. Every prefix tries to extend before giving up.
		State::Plus => rules![
			Byte(b'+') => Operator,
			Byte(b'=') => Operator,
			Any => End,
		],

		State::Minus => rules![
			Byte(b'-') => Operator,
			Byte(b'>') => Operator,
			Byte(b'=') => Operator,
			Any => End,
		],

		State::Slash => rules![
			Byte(b'=') => Operator,
			Slash => SingleLineComment,
			Star => MultiLineComment,
			Any => End,
		],

		State::Less => rules![
			Byte(b'=') => Operator,
			Byte(b'<') => ShiftLeft,
			Any => End,
		],

		State::Greater => rules![
			Byte(b'=') => Operator,
			Byte(b'>') => ShiftRight,
			Any => End,
		],

		State::Ampersand => rules![
			Byte(b'&') => Operator,
			Byte(b'=') => Operator,
			Any => End,
		],

		State::Pipe => rules![
			Byte(b'|') => Operator,
			Byte(b'=') => Operator,
			Any => End,
		],

		State::Star
		| State::Percent
		| State::Equal
		| State::Bang
		| State::Caret
		| State::ShiftLeft
		| State::ShiftRight => rules![
			Byte(b'=') => Operator,
			Any => End,
		],

		// A dot followed by a digit is a float literal.
		State::Dot => rules![
			Digit => FloatNumber,
			Any => End,
		],

		State::Operator => rules![
			Any => End,
		],

		// Comments.
		State::SingleLineComment => rules![
			Newline => End,
			Any => SingleLineComment,
		],

		State::MultiLineComment => rules![
			Star => MultiLineCommentStar,
			Any => MultiLineComment,
		],

		State::MultiLineCommentStar => rules![
			Slash => MultiLineCommentEnd,
			Star => MultiLineCommentStar,
			Any => MultiLineComment,
		],

		State::MultiLineCommentEnd => rules![
			Any => End,
		],

		// Char literals.
		State::Char => rules![
			Escape => CharEscape,
			Quote => Error,
			Printable => CharCharacter,
			Any => Error,
		],

		State::CharEscape => rules![
			Digit => CharEscapeDigit1,
			Byte(b'x') => CharEscapeHex,
			Printable => CharCharacter,
			Any => Error,
		],

		State::CharEscapeDigit1 => rules![
			Digit => CharEscapeDigit2,
			Quote => CharEnd,
			Any => Error,
		],

		State::CharEscapeDigit2 => rules![
			Digit => CharEscapeDigit3,
			Quote => CharEnd,
			Any => Error,
		],

		State::CharEscapeDigit3 => rules![
			Quote => CharEnd,
			Any => Error,
		],

		State::CharEscapeHex => rules![
			HexDigit => CharEscapeHex1,
			Any => Error,
		],

		State::CharEscapeHex1 => rules![
			HexDigit => CharCharacter,
			Any => Error,
		],

		State::CharCharacter => rules![
			Quote => CharEnd,
			Any => Error,
		],

		State::CharEnd => rules![
			Any => End,
		],

		// String literals.
		State::String => rules![
			DoubleQuote => StringEnd,
			Escape => StringEscape,
			Printable => String,
			Any => Error,
		],

		State::StringEscape => rules![
			Printable => String,
			Newline => String,
			Any => Error,
		],

		State::StringEnd => rules![
			Any => End,
		],

		// Number literals.
		State::Zero => rules![
			Byte(b'x') => HexaPrefix,
			Digit => Number,
			Byte(b'.') => FloatNumber,
			Exponent => Exponent,
			Unsigned => NumberU,
			Long => NumberL,
			Any => End,
		],

		State::Number => rules![
			Digit => Number,
			Byte(b'.') => FloatNumber,
			Unsigned => NumberU,
			Long => NumberL,
			Exponent => Exponent,
			Any => End,
		],

		State::NumberU => rules![
			Long => NumberUL,
			Any => End,
		],

		State::NumberL => rules![
			Unsigned => NumberUL,
			Any => End,
		],

		State::NumberUL => rules![
			Any => End,
		],

		State::HexaPrefix => rules![
			HexDigit => Hexa,
			Any => Error,
		],

		State::Hexa => rules![
			HexDigit => Hexa,
			Any => End,
		],

		State::FloatNumber => rules![
			Digit => FloatNumber,
			Long => FloatNumberL,
			Exponent => Exponent,
			Any => End,
		],

		State::FloatNumberL => rules![
			Any => End,
		],

		State::Exponent => rules![
			Sign => ExponentSign,
			Digit => ExponentValue,
			Any => Error,
		],

		State::ExponentSign => rules![
			Digit => ExponentValue,
			Any => Error,
		],

		State::ExponentValue => rules![
			Digit => ExponentValue,
			Long => FloatNumberL,
			Any => End,
		],

		State::End | State::Error => &[],
	}
}


/// A defect in the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
	/// The state's rule list does not end with a catch-all.
	NotTotal(State),
	/// The state can't be reached from the initial state.
	Unreachable(State),
	/// A pseudo state has outgoing rules.
	SinkHasRules(State),
}


impl Display for TableError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::NotTotal(state) => write!(f, "state {:?} has no catch-all rule", state),
			Self::Unreachable(state) => write!(f, "state {:?} is unreachable", state),
			Self::SinkHasRules(state) => write!(f, "sink state {:?} has outgoing rules", state),
		}
	}
}


impl std::error::Error for TableError {}


/// The transition table, mapping each state to its ordered rule list.
#[derive(Debug, Clone)]
pub struct Table {
	rules: [&'static [Rule]; State::ALL.len()],
}


impl Table {
	pub fn new() -> Self {
		let mut rules: [&'static [Rule]; State::ALL.len()] = [&[]; State::ALL.len()];

		for &state in State::ALL.iter() {
			rules[state.index()] = rules_of(state);
		}

		Self { rules }
	}


	/// The ordered rule list of a state.
	pub fn rules(&self, state: State) -> &'static [Rule] {
		self.rules[state.index()]
	}


	/// Find the first rule of the state that matches the character.
	pub fn transition(&self, state: State, input: u8) -> Option<State> {
		self.rules(state)
			.iter()
			.find(|rule| rule.class.matches(input))
			.map(|rule| rule.target)
	}


	/// Whether the state may complete a token, which is the case when some rule targets
	/// `End`.
	pub fn accepts(&self, state: State) -> bool {
		self.rules(state)
			.iter()
			.any(|rule| rule.target == State::End)
	}


	/// Check the table for totality, reachability and sink states without rules.
	pub fn validate(&self) -> Result<(), TableError> {
		for &state in State::ALL.iter() {
			let rules = self.rules(state);

			if state.is_sink() {
				if !rules.is_empty() {
					return Err(TableError::SinkHasRules(state));
				}
			} else if rules.last().map(|rule| rule.class) != Some(CharClass::Any) {
				return Err(TableError::NotTotal(state));
			}
		}

		let mut reached = [false; State::ALL.len()];
		let mut pending = vec![State::Initial];
		reached[State::Initial.index()] = true;

		while let Some(state) = pending.pop() {
			for rule in self.rules(state) {
				if !reached[rule.target.index()] {
					reached[rule.target.index()] = true;
					pending.push(rule.target);
				}
			}
		}

		match State::ALL.iter().find(|state| !reached[state.index()]) {
			Some(&state) => Err(TableError::Unreachable(state)),
			None => Ok(()),
		}
	}
}


impl Default for Table {
	fn default() -> Self {
		Self::new()
	}
}
