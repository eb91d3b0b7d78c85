use std::path::PathBuf;

use quill::{Error, ParseError, Quill, RuntimeError, Value};

fn eval(source: &str) -> Result<Value, Error> {
	Quill::new().eval(source)
}

fn eval_num(source: &str) -> f64 {
	match eval(source).unwrap() {
		Value::Num(n) => n,
		other => panic!("expected a number, got {other:?}"),
	}
}

#[test]
fn arithmetic_precedence() {
	assert_eq!(eval_num("2 + 3 * 5"), 17.0);
	assert_eq!(eval_num("10 - 3 - 2"), 5.0);
	assert_eq!(eval_num("(2 + 3) * 4"), 20.0);
	assert_eq!(eval_num("1 + 2 * 3 / 4 - 5"), -2.5);
}

#[test]
fn declarations_and_assignment() {
	assert_eq!(eval_num("let x: int = 5; x"), 5.0);
	assert_eq!(eval_num("let x: int = 5; x = 10; x"), 10.0);
	assert_eq!(eval_num("let x: int = 5; x = x + 5; x"), 10.0);
	assert_eq!(eval("let x: int").unwrap(), Value::None);
}

#[test]
fn const_reassignment_is_a_runtime_error() {
	assert!(matches!(
		eval("const x: int = 5; x = 10"),
		Err(Error::Runtime(RuntimeError::ConstReassignment { .. }))
	));
}

#[test]
fn division_by_zero() {
	assert!(matches!(eval("1 / 0"), Err(Error::Runtime(RuntimeError::DivisionByZero))));
}

#[test]
fn unresolved_identifier() {
	assert!(matches!(
		eval("y"),
		Err(Error::Runtime(RuntimeError::UnresolvedIdentifier { .. }))
	));
}

#[test]
fn parse_errors_carry_the_expectation() {
	match eval("let x = 5") {
		Err(Error::Parse(ParseError::UnexpectedToken { expected, .. })) => assert_eq!(expected, ":"),
		other => panic!("expected a parse error, got {other:?}"),
	}
	assert!(matches!(
		eval("const c: int"),
		Err(Error::Parse(ParseError::UnexpectedToken { .. }))
	));
}

#[test]
fn session_keeps_declarations_across_lines() {
	let mut session = Quill::new();
	session.eval("let x: int = 5").unwrap();
	session.eval("let y: int = x * 2").unwrap();
	assert_eq!(session.eval("x + y").unwrap(), Value::Num(15.0));
}

#[test]
fn failing_line_does_not_corrupt_the_session() {
	let mut session = Quill::new();
	session.eval("let x: int = 5").unwrap();

	assert!(session.eval("x = 1 / 0").is_err());
	assert!(session.eval("@").is_err());
	assert!(session.eval("z + 1").is_err());

	assert_eq!(session.eval("x").unwrap(), Value::Num(5.0));
	assert_eq!(session.eval("x = 6").unwrap(), Value::Num(6.0));
}

#[test]
fn sessions_are_isolated() {
	let mut first = Quill::new();
	let mut second = Quill::new();
	first.eval("let x: int = 1").unwrap();
	assert!(matches!(
		second.eval("x"),
		Err(Error::Runtime(RuntimeError::UnresolvedIdentifier { .. }))
	));
}

#[test]
fn illegal_token_is_rejected_at_parse_time() {
	// the lexer degrades `@` to an Illegal token, the parser rejects it
	assert!(matches!(eval("1 @ 2"), Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
}

#[test]
fn long_sum_evaluates() {
	let terms: Vec<String> = (1..=200).map(|n| n.to_string()).collect();
	let source = terms.join(" + ");
	assert_eq!(eval_num(&source), 20100.0);
}

#[test]
fn deep_grouping_evaluates() {
	let source = format!("{}7{}", "(".repeat(64), ")".repeat(64));
	assert_eq!(eval_num(&source), 7.0);
}

#[test]
fn run_file_returns_final_value() {
	let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("scripts").join("variables.ql");
	let value = Quill::new().run_file(&path).unwrap();
	assert_eq!(value, Value::Num(30.0));
}

#[test]
fn run_file_on_missing_path_is_a_lex_error() {
	let result = Quill::new().run_file("no/such/file.ql");
	assert!(matches!(result, Err(Error::Lex(_))));
}
