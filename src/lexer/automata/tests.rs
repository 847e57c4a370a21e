use super::*;
use crate::lexer::Cursor;
use table::TableError;

use assert_matches::assert_matches;


fn scan(input: &str) -> Scan {
	let table = Table::new();
	let cursor = Cursor::from(input.as_bytes());
	Scanner::new(&table).run(&cursor)
}


#[test]
fn test_state_indices() {
	for (index, state) in State::ALL.iter().enumerate() {
		assert_eq!(state.index(), index, "{:?} is out of order", state);
	}
}


#[test]
fn test_table_is_valid() {
	assert_eq!(Table::new().validate(), Ok(()));
}


#[test]
fn test_sinks_have_no_rules() {
	let table = Table::new();

	assert!(table.rules(State::End).is_empty());
	assert!(table.rules(State::Error).is_empty());
	assert!(!table.accepts(State::Error));
}


#[test]
fn test_table_error_display() {
	assert_eq!(
		TableError::NotTotal(State::Hexa).to_string(),
		"state Hexa has no catch-all rule"
	);
}


#[test]
fn test_first_rule_wins() {
	let table = Table::new();

	// '0' is also a digit, but the dedicated rule comes first.
	assert_eq!(table.transition(State::Initial, b'0'), Some(State::Zero));
	assert_eq!(table.transition(State::Initial, b'7'), Some(State::Number));
	// A quote is printable, but an empty char literal is rejected.
	assert_eq!(table.transition(State::Char, b'\''), Some(State::Error));
	assert_eq!(table.transition(State::Initial, b'@'), Some(State::Error));
}


#[test]
fn test_accepting_states() {
	let table = Table::new();

	assert!(table.accepts(State::Identifier));
	assert!(table.accepts(State::SingleLineComment));
	assert!(!table.accepts(State::String));
	assert!(!table.accepts(State::MultiLineComment));
	assert!(!table.accepts(State::Exponent));
	assert!(!table.accepts(State::HexaPrefix));
}


#[test]
fn test_retracts_on_terminator() {
	assert_matches!(scan("foo+"), Scan::Accept { state: State::Identifier, len: 3 });
	assert_matches!(scan("12;"), Scan::Accept { state: State::Number, len: 2 });
	assert_matches!(scan("(x"), Scan::Accept { state: State::Separator, len: 1 });
}


#[test]
fn test_accepts_at_eof() {
	assert_matches!(scan("foo"), Scan::Accept { state: State::Identifier, len: 3 });
	assert_matches!(scan("// note"), Scan::Accept { state: State::SingleLineComment, len: 7 });
	assert_matches!(scan("'a'"), Scan::Accept { state: State::CharEnd, len: 3 });
}


#[test]
fn test_maximal_munch() {
	assert_matches!(scan(">>=2"), Scan::Accept { state: State::Operator, len: 3 });
	assert_matches!(scan(">>2"), Scan::Accept { state: State::ShiftRight, len: 2 });
	assert_matches!(scan(">2"), Scan::Accept { state: State::Greater, len: 1 });
	assert_matches!(scan("->x"), Scan::Accept { state: State::Operator, len: 2 });
	assert_matches!(scan("&&&"), Scan::Accept { state: State::Operator, len: 2 });
}


#[test]
fn test_dot_peeks_digit() {
	assert_matches!(scan(".5"), Scan::Accept { state: State::FloatNumber, len: 2 });
	assert_matches!(scan(".x"), Scan::Accept { state: State::Dot, len: 1 });
}


#[test]
fn test_multi_line_comment_star_run() {
	assert_matches!(
		scan("/* a ***/x"),
		Scan::Accept { state: State::MultiLineCommentEnd, len: 9 }
	);
}


#[test]
fn test_rejects_at_eof() {
	assert_matches!(
		scan("\"abc"),
		Scan::Reject { state: State::String, input: None, len: 4, offset: 4, .. }
	);
	assert_matches!(
		scan("/* abc *"),
		Scan::Reject { state: State::MultiLineCommentStar, input: None, len: 8, .. }
	);
}


#[test]
fn test_rejects_offending_character() {
	assert_matches!(
		scan("'ab'"),
		Scan::Reject { state: State::CharCharacter, input: Some(b'b'), len: 3, offset: 2, .. }
	);
	assert_matches!(
		scan("1e+x"),
		Scan::Reject { state: State::ExponentSign, input: Some(b'x'), len: 4, offset: 3, .. }
	);
	assert_matches!(
		scan("$"),
		Scan::Reject { state: State::Initial, input: Some(b'$'), len: 1, offset: 0, .. }
	);
}
