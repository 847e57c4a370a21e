use super::{State, Table};
use crate::lexer::{Cursor, SourcePos};


/// The outcome of a single automaton run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
	/// The automaton completed a lexeme of `len` characters in an accepting state.
	Accept { state: State, len: usize },
	/// The automaton has no valid continuation from `state`.
	Reject {
		state: State,
		/// The offending character, or `None` if the end of input was reached.
		input: Option<u8>,
		/// Consumed characters, including the offending one.
		len: usize,
		/// Absolute offset of the offending character or of the end of input.
		offset: usize,
		pos: SourcePos,
	},
}


impl Scan {
	/// How many characters the run consumed.
	pub fn len(&self) -> usize {
		match self {
			Self::Accept { len, .. } | Self::Reject { len, .. } => *len,
		}
	}
}


/// Drives one automaton run at a time.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'t> {
	table: &'t Table,
}


impl<'t> Scanner<'t> {
	pub fn new(table: &'t Table) -> Self {
		Self { table }
	}


	/// Run the automaton from the cursor until a lexeme is complete or the run fails. The
	/// given cursor is not moved, it's up to the caller to advance it by the scanned length.
	pub fn run(&self, start: &Cursor) -> Scan {
		let mut cursor = start.clone();
		let mut state = State::Initial;

		loop {
			let len = cursor.offset() - start.offset();

			let input = match cursor.peek() {
				Some(input) => input,

				// At the end of input, the lexeme is valid only if the state could complete it.
				None if state != State::Initial && self.table.accepts(state) => {
					return Scan::Accept { state, len };
				}

				None => {
					return Scan::Reject {
						state,
						input: None,
						len,
						offset: cursor.offset(),
						pos: cursor.pos(),
					};
				}
			};

			match self.table.transition(state, input) {
				// Retract: the triggering character belongs to the next lexeme.
				Some(State::End) => return Scan::Accept { state, len },

				Some(State::Error) | None => {
					return Scan::Reject {
						state,
						input: Some(input),
						len: len + 1,
						offset: cursor.offset(),
						pos: cursor.pos(),
					};
				}

				Some(next) => {
					cursor.step();
					state = next;
				}
			}
		}
	}
}
