mod fmt;
#[cfg(test)]
mod tests;

use intaglio::{Symbol as SymbolInner, bytes::SymbolTable};


/// A symbol is a reference to a lexeme stored in the symbol interner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Symbol(SymbolInner);


impl Symbol {
	/// The stable index of the lexeme, assigned sequentially from zero in insertion order.
	pub fn index(self) -> usize {
		self.0.id() as usize
	}
}


impl From<Symbol> for usize {
	fn from(symbol: Symbol) -> usize {
		symbol.index()
	}
}


/// A symbol interner, used to deduplicate lexemes.
#[derive(Debug)]
pub struct Interner(SymbolTable);


impl Interner {
	pub fn new() -> Self {
		Self(SymbolTable::new())
	}


	/// Get the symbol for a value, if it has been interned.
	pub fn get<T>(&self, value: T) -> Option<Symbol>
	where
		T: AsRef<[u8]>,
	{
		self.0
			.check_interned(value.as_ref())
			.map(Symbol)
	}


	/// Get the symbol for a value. The value is interned if needed.
	pub fn get_or_intern<T>(&mut self, value: T) -> Symbol
	where
		T: AsRef<[u8]>,
	{
		if let Some(symbol) = self.get(value.as_ref()) {
			return symbol;
		}

		let value = value.as_ref().to_owned();

		Symbol(
			self.0
				.intern(value)
				.expect("failed to intern symbol")
		)
	}


	/// Resolve the lexeme for a symbol.
	pub fn resolve(&self, symbol: Symbol) -> Option<&[u8]> {
		self.0.get(symbol.0)
	}


	/// Iterate the interned lexemes in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[u8])> + '_ {
		self.0
			.iter()
			.map(|(symbol, value)| (Symbol(symbol), value))
	}


	/// Get the number of interned lexemes.
	pub fn len(&self) -> usize {
		self.0.len()
	}


	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}


impl Default for Interner {
	fn default() -> Self {
		Self::new()
	}
}
