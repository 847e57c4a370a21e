mod fmt;

use super::SourcePos;
use crate::symbol::Symbol;


/// The semantic category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
	Identifier,
	Keyword,
	String,
	Char,
	Integer,
	Float,
	Hexadecimal,
	Comment,
	Whitespace,
	Operator,
	Separator,
	Error,
}


impl Category {
	/// Comments and whitespace are never surfaced to the consumer.
	pub fn is_elided(&self) -> bool {
		matches!(self, Self::Comment | Self::Whitespace)
	}


	/// The lowercase name of the category.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Identifier => "identifier",
			Self::Keyword => "keyword",
			Self::String => "string",
			Self::Char => "char",
			Self::Integer => "integer",
			Self::Float => "float",
			Self::Hexadecimal => "hexadecimal",
			Self::Comment => "comment",
			Self::Whitespace => "whitespace",
			Self::Operator => "operator",
			Self::Separator => "separator",
			Self::Error => "error",
		}
	}
}


/// A lexical token. The lexeme is stored in the analyzer's interner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
	pub category: Category,
	pub lexeme: Symbol,
	/// Absolute offset of the first character.
	pub offset: usize,
	pub pos: SourcePos,
}
