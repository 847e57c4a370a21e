mod automata;
mod classify;
mod cursor;
mod error;
mod token;

use tracing::{debug, trace};

use crate::symbol;
use automata::{Classify, Scanner, Table};
pub use cursor::{Cursor, SourcePos};
pub use error::{Error, ErrorKind};
pub use token::{Category, Token};


/// Analyzer options.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
	/// Report an error and resume at the next whitespace, instead of stopping at the first
	/// error.
	pub recover: bool,
}


/// The lexical analyzer for C-like source code.
/// Produces the significant tokens of the source, one at a time. Whitespace and comments
/// are elided.
#[derive(Debug)]
pub struct Analyzer<'a> {
	cursor: Cursor<'a>,
	table: Table,
	interner: symbol::Interner,
	options: Options,
	/// Set after a fatal error.
	done: bool,
}


impl<'a> Analyzer<'a> {
	pub fn new(cursor: Cursor<'a>) -> Self {
		Self::with_options(cursor, Options::default())
	}


	pub fn with_options(cursor: Cursor<'a>, options: Options) -> Self {
		let table = Table::new();

		debug_assert_eq!(table.validate(), Ok(()), "invalid transition table");

		Self {
			cursor,
			table,
			interner: symbol::Interner::new(),
			options,
			done: false,
		}
	}


	/// The lexeme table.
	pub fn interner(&self) -> &symbol::Interner {
		&self.interner
	}


	pub fn into_interner(self) -> symbol::Interner {
		self.interner
	}


	/// Resolve the lexeme of a token produced by this analyzer.
	pub fn lexeme(&self, token: &Token) -> Option<&[u8]> {
		self.interner.resolve(token.lexeme)
	}


	/// Produce the next significant token, or `None` at the end of input.
	pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
		loop {
			if self.done || self.cursor.is_eof() {
				return Ok(None);
			}

			let start = self.cursor.clone();
			let scan = Scanner::new(&self.table).run(&start);

			self.cursor.advance_to(start.offset() + scan.len());
			let lexeme = self.cursor.since(start.offset());

			let category = match classify::classify(&scan, lexeme) {
				Ok(category) => category,
				Err(error) => {
					debug!(%error, "lexical error");
					self.fail(start, error.offset);
					return Err(error);
				}
			};

			if category.is_elided() {
				trace!(?category, offset = start.offset(), "elided");
				continue;
			}

			let token = Token {
				category,
				lexeme: self.interner.get_or_intern(lexeme),
				offset: start.offset(),
				pos: start.pos(),
			};

			trace!(?category, index = token.lexeme.index(), offset = token.offset, "token");

			return Ok(Some(token));
		}
	}


	/// Stop, or resynchronize if recovery is enabled. The failed scan started at `start`,
	/// and `offset` is where the offending character was found.
	fn fail(&mut self, start: Cursor<'a>, offset: usize) {
		if !self.options.recover {
			self.done = true;
			return;
		}

		// Skip to the next whitespace, starting at the offending character. At least one
		// character must be dropped.
		self.cursor = start.clone();
		self.cursor.advance_to(offset);

		if self.cursor.offset() == start.offset() {
			self.cursor.step();
		}

		while let Some(c) = self.cursor.peek() {
			if c.is_blank() || c.is_newline() {
				break;
			}

			self.cursor.step();
		}

		debug!(from = start.offset(), to = self.cursor.offset(), "resynchronized");
	}
}


impl<'a> Iterator for Analyzer<'a> {
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		self.next_token().transpose()
	}
}
