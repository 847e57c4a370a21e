/// Predicates partitioning the input alphabet.
pub trait Classify {
	fn is_ident_start(&self) -> bool;
	fn is_ident(&self) -> bool;
	fn is_hex_digit(&self) -> bool;
	fn is_blank(&self) -> bool;
	fn is_newline(&self) -> bool;
	fn is_printable(&self) -> bool;
	fn is_separator(&self) -> bool;
	fn is_lone_operator(&self) -> bool;
}


impl Classify for u8 {
	fn is_ident_start(&self) -> bool {
		self.is_ascii_alphabetic() || *self == b'_'
	}

	fn is_ident(&self) -> bool {
		self.is_ascii_alphanumeric() || *self == b'_'
	}

	fn is_hex_digit(&self) -> bool {
		self.is_ascii_hexdigit()
	}

	/// Space, tab and carriage return. Newlines are classified separately.
	fn is_blank(&self) -> bool {
		matches!(self, b' ' | b'\t' | b'\r')
	}

	fn is_newline(&self) -> bool {
		*self == b'\n'
	}

	/// ASCII 32 to 126, inclusive.
	fn is_printable(&self) -> bool {
		(32 ..= 126).contains(self)
	}

	fn is_separator(&self) -> bool {
		matches!(self, b'(' | b')' | b'{' | b'}' | b'[' | b']' | b',' | b';')
	}

	/// Operators that never extend into a longer one.
	fn is_lone_operator(&self) -> bool {
		matches!(self, b':' | b'?' | b'~')
	}
}


/// A character class, which is the guard of a transition rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
	/// Exactly the given character.
	Byte(u8),
	/// `[A-Za-z_]`
	Letter,
	/// `[A-Za-z0-9_]`
	IdentChar,
	Digit,
	HexDigit,
	Blank,
	Newline,
	/// Single quote.
	Quote,
	/// Double quote.
	DoubleQuote,
	/// Backslash.
	Escape,
	Slash,
	Star,
	/// The exponent marker, `e`.
	Exponent,
	/// Either `+` or `-`.
	Sign,
	/// The unsigned integer suffix, `U`.
	Unsigned,
	/// The long suffix, `L`.
	Long,
	Printable,
	Separator,
	LoneOperator,
	/// Catch-all.
	Any,
}


impl CharClass {
	pub fn matches(self, c: u8) -> bool {
		match self {
			Self::Byte(byte) => c == byte,
			Self::Letter => c.is_ident_start(),
			Self::IdentChar => c.is_ident(),
			Self::Digit => c.is_ascii_digit(),
			Self::HexDigit => c.is_hex_digit(),
			Self::Blank => c.is_blank(),
			Self::Newline => c.is_newline(),
			Self::Quote => c == b'\'',
			Self::DoubleQuote => c == b'"',
			Self::Escape => c == b'\\',
			Self::Slash => c == b'/',
			Self::Star => c == b'*',
			Self::Exponent => c == b'e',
			Self::Sign => c == b'+' || c == b'-',
			Self::Unsigned => c == b'U',
			Self::Long => c == b'L',
			Self::Printable => c.is_printable(),
			Self::Separator => c.is_separator(),
			Self::LoneOperator => c.is_lone_operator(),
			Self::Any => true,
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;


	#[test]
	fn test_any_is_total() {
		assert!((0 ..= u8::MAX).all(|c| CharClass::Any.matches(c)));
	}


	#[test]
	fn test_printable_range() {
		assert!(!CharClass::Printable.matches(31));
		assert!(CharClass::Printable.matches(b' '));
		assert!(CharClass::Printable.matches(b'~'));
		assert!(!CharClass::Printable.matches(127));
		assert!(!CharClass::Printable.matches(b'\n'));
	}


	#[test]
	fn test_identifier_classes() {
		assert!(b'_'.is_ident_start());
		assert!(b'Z'.is_ident_start());
		assert!(!b'7'.is_ident_start());
		assert!(b'7'.is_ident());
		assert!(!b'$'.is_ident());
	}


	#[test]
	fn test_classes_are_disjoint() {
		for c in 0 ..= u8::MAX {
			let classes = [
				b"+-*/%=<>&!|^.".contains(&c),
				c.is_lone_operator(),
				c.is_separator(),
				c.is_ident(),
				c.is_blank() || c.is_newline(),
			];

			assert!(
				classes.iter().filter(|&&class| class).count() <= 1,
				"character {:?} belongs to more than one class",
				c as char
			);
		}
	}


	#[test]
	fn test_hex_digits_accept_both_cases() {
		assert!(CharClass::HexDigit.matches(b'a'));
		assert!(CharClass::HexDigit.matches(b'F'));
		assert!(!CharClass::HexDigit.matches(b'g'));
	}
}
