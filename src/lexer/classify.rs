use super::{
	automata::{Scan, State},
	Category,
	Error,
};


/// Whether the word is a reserved identifier.
pub fn is_keyword(word: &[u8]) -> bool {
	matches!(
		word,
		b"auto" | b"int" | b"const" | b"short" | b"break" | b"long" | b"continue" | b"signed"
			| b"double" | b"struct" | b"float" | b"unsigned" | b"else" | b"switch" | b"for"
			| b"void" | b"case" | b"register" | b"default" | b"sizeof" | b"char" | b"return"
			| b"do" | b"static" | b"enum" | b"typedef" | b"goto" | b"volatile" | b"extern"
			| b"union" | b"if" | b"while"
	)
}


/// The category of tokens completed in the given state. States that can't complete a token
/// map to `Error`.
pub fn category_of(state: State) -> Category {
	match state {
		State::Identifier => Category::Identifier,

		State::Whitespace => Category::Whitespace,
		State::SingleLineComment | State::MultiLineCommentEnd => Category::Comment,

		State::Separator => Category::Separator,

		State::Plus
		| State::Minus
		| State::Star
		| State::Slash
		| State::Percent
		| State::Equal
		| State::Less
		| State::Greater
		| State::Ampersand
		| State::Bang
		| State::Pipe
		| State::Caret
		| State::ShiftLeft
		| State::ShiftRight
		| State::Dot
		| State::Operator => Category::Operator,

		State::StringEnd => Category::String,
		State::CharEnd => Category::Char,

		State::Zero | State::Number | State::NumberU | State::NumberL | State::NumberUL => {
			Category::Integer
		}
		State::Hexa => Category::Hexadecimal,
		State::FloatNumber | State::FloatNumberL | State::ExponentValue => Category::Float,

		_ => Category::Error,
	}
}


/// Classify the outcome of a scan. The lexeme must be the scanned input.
pub fn classify(scan: &Scan, lexeme: &[u8]) -> Result<Category, Error> {
	match *scan {
		Scan::Accept { state, .. } => match category_of(state) {
			Category::Identifier if is_keyword(lexeme) => Ok(Category::Keyword),
			category => Ok(category),
		},

		Scan::Reject { state, input: Some(input), offset, pos, .. } => Err(
			if state.in_escape() {
				Error::malformed_escape(lexeme, offset, pos)
			} else if state.in_exponent() {
				Error::invalid_exponent(lexeme, offset, pos)
			} else if state == State::String && input == b'\n' {
				Error::unterminated_literal(lexeme, offset, pos)
			} else {
				Error::unrecognized_character(input, lexeme, offset, pos)
			}
		),

		Scan::Reject { state, input: None, offset, pos, .. } => Err(
			if state.in_block_comment() {
				Error::unterminated_comment(lexeme, offset, pos)
			} else if state.in_exponent() {
				Error::invalid_exponent(lexeme, offset, pos)
			} else {
				Error::unterminated_literal(lexeme, offset, pos)
			}
		),
	}
}
