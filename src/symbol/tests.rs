use super::*;

use proptest::prelude::*;


#[test]
fn test_indices_are_sequential() {
	let mut interner = Interner::new();

	let int = interner.get_or_intern("int");
	let x = interner.get_or_intern("x");
	let semicolon = interner.get_or_intern(";");

	assert_eq!(int.index(), 0);
	assert_eq!(x.index(), 1);
	assert_eq!(semicolon.index(), 2);
	assert_eq!(interner.len(), 3);
}


#[test]
fn test_resolve() {
	let mut interner = Interner::new();

	let symbol = interner.get_or_intern(b"\"abc\"");

	assert_eq!(interner.resolve(symbol), Some(b"\"abc\"".as_ref()));
	assert_eq!(interner.get("\"abc\""), Some(symbol));
	assert_eq!(interner.get("abc"), None);
}


#[test]
fn test_iter_in_insertion_order() {
	let mut interner = Interner::new();

	for lexeme in &["b", "a", "b", "c", "a"] {
		interner.get_or_intern(lexeme);
	}

	let lexemes: Vec<(usize, &[u8])> = interner
		.iter()
		.map(|(symbol, lexeme)| (symbol.index(), lexeme))
		.collect();

	assert_eq!(
		lexemes,
		vec![(0, b"b".as_ref()), (1, b"a".as_ref()), (2, b"c".as_ref())]
	);
}


proptest! {
	#[test]
	fn interning_is_idempotent(lexemes in prop::collection::vec("[a-z0-9+=;]{1,6}", 1 .. 32)) {
		let mut interner = Interner::new();

		let first: Vec<Symbol> = lexemes.iter().map(|lexeme| interner.get_or_intern(lexeme)).collect();
		let len = interner.len();
		let second: Vec<Symbol> = lexemes.iter().map(|lexeme| interner.get_or_intern(lexeme)).collect();

		prop_assert_eq!(first, second);
		prop_assert_eq!(interner.len(), len);
	}
}
