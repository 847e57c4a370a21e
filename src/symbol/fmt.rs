use std::fmt::Display as _;

use super::{Interner, Symbol};
use crate::{
	fmt::Display,
	term::color,
};


/// Symbols which are not in the interner are displayed in red.
const INVALID: color::Fg<color::Red, &'static str> = color::Fg(color::Red, "<invalid symbol>");


impl<'a> Display<'a> for Symbol {
	type Context = &'a Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		match context.resolve(*self) {
			Some(lexeme) => String::from_utf8_lossy(lexeme).fmt(f),
			None => INVALID.fmt(f),
		}
	}
}
