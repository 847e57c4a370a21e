use std::fmt::Display as _;

use super::{Category, Token};
use crate::{
	fmt::Display,
	symbol,
	term::color,
};


impl std::fmt::Display for Category {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.write_str(match self {
			Self::Identifier => "Identifier",
			Self::Keyword => "Keyword",
			Self::String => "String",
			Self::Char => "Char",
			Self::Integer => "Integer",
			Self::Float => "Float",
			Self::Hexadecimal => "Hexadecimal",
			Self::Comment => "Comment",
			Self::Whitespace => "Whitespace",
			Self::Operator => "Operator",
			Self::Separator => "Separator",
			Self::Error => "Error",
		})
	}
}


impl<'a> Display<'a> for Token {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self.category {
			Category::Keyword => color::Fg(color::Blue, self.category).fmt(f)?,
			Category::Identifier => color::Fg(color::Green, self.category).fmt(f)?,
			Category::String | Category::Char => color::Fg(color::Magenta, self.category).fmt(f)?,
			Category::Integer | Category::Float | Category::Hexadecimal => {
				color::Fg(color::Cyan, self.category).fmt(f)?
			}
			Category::Operator => color::Fg(color::Yellow, self.category).fmt(f)?,
			Category::Error => color::Fg(color::Red, self.category).fmt(f)?,
			_ => self.category.fmt(f)?,
		}

		'('.fmt(f)?;
		self.lexeme.fmt(f, context)?;
		')'.fmt(f)
	}
}
