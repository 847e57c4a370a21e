use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
	lexer::Token,
	symbol,
};


/// A token paired with the lexeme table, for serialization.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
	pub token: &'a Token,
	pub interner: &'a symbol::Interner,
}


impl<'a> Serialize for Record<'a> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let lexeme = self.interner
			.resolve(self.token.lexeme)
			.map(String::from_utf8_lossy)
			.unwrap_or_default();

		let mut map = serializer.serialize_map(Some(6))?;

		map.serialize_entry("category", self.token.category.name())?;
		map.serialize_entry("lexeme", &lexeme)?;
		map.serialize_entry("index", &self.token.lexeme.index())?;
		map.serialize_entry("offset", &self.token.offset)?;
		map.serialize_entry("line", &self.token.pos.line)?;
		map.serialize_entry("column", &self.token.pos.column)?;

		map.end()
	}
}


/// Serialize a token as a single line JSON object.
pub fn json(token: &Token, interner: &symbol::Interner) -> serde_json::Result<String> {
	serde_json::to_string(&Record { token, interner })
}
