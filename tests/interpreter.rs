use std::fs;

use tempfile::tempdir;
use thistle::{
    diagnostics::ThistleError,
    runtime::Interpreter,
    tokenizer,
    value::{Unit, Value},
};

fn exec(source: &str) -> Interpreter {
    let mut interp = Interpreter::new();
    interp.exec_line(source).expect("line should execute");
    interp
}

fn exec_err(source: &str) -> (Interpreter, ThistleError) {
    let mut interp = Interpreter::new();
    match interp.exec_line(source) {
        Ok(()) => panic!("expected error for `{source}`"),
        Err(err) => (interp, err),
    }
}

#[test]
fn arithmetic_always_yields_float() {
    let interp = exec("5 3 +");
    assert_eq!(interp.stack().len(), 1);
    assert_eq!(interp.stack().peek(), Some(&Value::float(8.0)));
}

#[test]
fn division_yields_float() {
    let interp = exec("20 4 /");
    assert_eq!(interp.stack().peek(), Some(&Value::float(5.0)));
}

#[test]
fn integer_literals_keep_their_tag() {
    let interp = exec("42");
    assert_eq!(interp.stack().peek(), Some(&Value::int(42)));
}

#[test]
fn float_literals_keep_their_tag() {
    let interp = exec("-0.5");
    assert_eq!(interp.stack().peek(), Some(&Value::float(-0.5)));
}

#[test]
fn oversized_integer_literal_falls_back_to_float() {
    let interp = exec("99999999999999999999");
    assert_eq!(interp.stack().peek(), Some(&Value::float(1e20)));
}

#[test]
fn integer_and_float_are_unequal() {
    assert_ne!(Value::int(2), Value::float(2.0));
}

#[test]
fn integer_round_trips_through_display() {
    let interp = exec("-17");
    assert_eq!(interp.stack().peek().expect("value").to_string(), "-17");
}

#[test]
fn string_literal_strips_quotes() {
    let interp = exec(r#""hello world""#);
    assert_eq!(interp.stack().peek(), Some(&Value::string("hello world")));
}

#[test]
fn unknown_token_becomes_symbol() {
    let interp = exec("frobnicate");
    assert_eq!(interp.stack().len(), 1);
    assert_eq!(interp.stack().peek(), Some(&Value::symbol("frobnicate")));
}

#[test]
fn dup_then_drop_preserves_stack() {
    let mut interp = exec("1 2 3");
    interp.exec_line("dup").expect("dup");
    assert_eq!(interp.stack().len(), 4);
    assert_eq!(interp.stack().peek(), Some(&Value::int(3)));
    interp.exec_line("drop").expect("drop");
    assert_eq!(interp.stack().len(), 3);
    assert_eq!(interp.stack().peek(), Some(&Value::int(3)));
}

#[test]
fn swap_twice_is_identity() {
    let mut interp = exec("1 2 swap swap");
    assert_eq!(interp.pop().expect("top"), Value::int(2));
    assert_eq!(interp.pop().expect("next"), Value::int(1));
}

#[test]
fn stack_ops_report_underflow() {
    let (_, err) = exec_err("dup");
    assert!(matches!(
        err,
        ThistleError::StackUnderflow { needed: 1, depth: 0 }
    ));

    let (_, err) = exec_err("1 swap");
    assert!(matches!(
        err,
        ThistleError::StackUnderflow { needed: 2, depth: 1 }
    ));

    let (_, err) = exec_err("drop");
    assert!(matches!(err, ThistleError::StackUnderflow { .. }));
}

#[test]
fn division_by_zero_consumes_both_operands() {
    let (interp, err) = exec_err("5 0 /");
    assert!(matches!(err, ThistleError::DivisionByZero));
    assert!(interp.stack().is_empty());
}

#[test]
fn arithmetic_on_text_is_a_type_mismatch() {
    let (_, err) = exec_err(r#""a" "b" +"#);
    assert!(matches!(err, ThistleError::TypeMismatch { .. }));
}

#[test]
fn error_stops_remaining_tokens_on_line() {
    let (interp, _) = exec_err("1 0 / 42");
    assert!(interp.stack().is_empty(), "42 should never be dispatched");
}

#[test]
fn comment_discards_rest_of_line() {
    let interp = exec("1 2 # + 3");
    assert_eq!(interp.stack().len(), 2);
}

#[test]
fn hash_inside_string_is_not_a_comment() {
    let interp = exec(r#""a # b" 1"#);
    assert_eq!(interp.stack().len(), 2);
    assert_eq!(interp.stack().peek(), Some(&Value::int(1)));
}

#[test]
fn clear_empties_the_stack() {
    let interp = exec("1 2 3 clear");
    assert!(interp.stack().is_empty());
}

#[test]
fn registry_override_is_last_write_wins() {
    let mut interp = Interpreter::new();
    interp.register("answer", |ip| {
        ip.push(Value::int(1));
        Ok(())
    });
    interp.register("answer", |ip| {
        ip.push(Value::int(42));
        Ok(())
    });
    interp.exec_line("answer").expect("dispatch");
    assert_eq!(interp.stack().peek(), Some(&Value::int(42)));
}

#[test]
fn builtins_can_be_overridden() {
    let mut interp = Interpreter::new();
    interp.register("+", |ip| {
        ip.push(Value::symbol("shadowed"));
        Ok(())
    });
    interp.exec_line("+").expect("dispatch");
    assert_eq!(interp.stack().peek(), Some(&Value::symbol("shadowed")));
}

#[test]
fn multibyte_operator_names_dispatch() {
    let mut interp = Interpreter::new();
    interp.register("√", |ip| {
        let x = ip.pop_numeric()?;
        ip.push(Value::float(x.sqrt()));
        Ok(())
    });
    interp.exec_line("9 √").expect("dispatch");
    assert_eq!(interp.stack().peek(), Some(&Value::float(3.0)));
}

#[test]
fn unit_participates_in_display_and_equality() {
    let metres = Value::float(3.0).with_unit(Unit::new("m", 1.0));
    assert_eq!(metres.to_string(), "3 m");
    assert_ne!(metres, Value::float(3.0));
    assert_eq!(metres, Value::float(3.0).with_unit(Unit::new("m", 1.0)));
    assert_ne!(metres, Value::float(3.0).with_unit(Unit::new("m", 100.0)));
}

#[test]
fn as_numeric_rejects_text_tags() {
    assert!(Value::symbol("x").as_numeric().is_err());
    assert!(Value::string("x").as_numeric().is_err());
    assert_eq!(Value::int(4).as_numeric().expect("numeric"), 4.0);
}

#[test]
fn empty_line_is_a_noop() {
    let mut interp = Interpreter::new();
    interp.exec_line("").expect("empty");
    interp.exec_line("   \t ").expect("blank");
    assert!(interp.stack().is_empty());
}

#[test]
fn tokenizer_splits_on_whitespace_runs() {
    assert_eq!(tokenizer::tokenize("  1   2\t3  "), ["1", "2", "3"]);
}

#[test]
fn tokenizer_keeps_quoted_whitespace() {
    assert_eq!(
        tokenizer::tokenize(r#"push "a b  c" pop"#),
        ["push", "\"a b  c\"", "pop"]
    );
}

#[test]
fn tokenizer_drops_unterminated_quote() {
    assert_eq!(tokenizer::tokenize(r#"1 "abc"#), ["1"]);
}

#[test]
fn tokenizer_classifies_integer_literals() {
    assert!(tokenizer::is_integer_literal("42"));
    assert!(tokenizer::is_integer_literal("-7"));
    assert!(tokenizer::is_integer_literal("+7"));
    assert!(!tokenizer::is_integer_literal("7.0"));
    assert!(!tokenizer::is_integer_literal("-"));
    assert!(!tokenizer::is_integer_literal("12a"));
    assert!(!tokenizer::is_integer_literal(""));
}

#[test]
fn tokenizer_classifies_float_literals() {
    assert!(tokenizer::is_float_literal("3.14"));
    assert!(tokenizer::is_float_literal("-0.5"));
    assert!(tokenizer::is_float_literal(".5"));
    assert!(tokenizer::is_float_literal("5."));
    assert!(!tokenizer::is_float_literal("1.2.3"));
    assert!(!tokenizer::is_float_literal("."));
    assert!(!tokenizer::is_float_literal("1e5"));
    assert!(!tokenizer::is_float_literal("42"));
}

#[test]
fn exec_script_runs_lines_in_order() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("sum.th");
    fs::write(&path, "1 2 +\n3 +\n").expect("write script");

    let mut interp = Interpreter::new();
    interp.exec_script(&path).expect("script");
    assert_eq!(interp.stack().peek(), Some(&Value::float(6.0)));
}

#[test]
fn missing_script_is_a_script_io_error() {
    let mut interp = Interpreter::new();
    let err = interp
        .exec_script("no/such/script.th")
        .expect_err("should fail");
    assert!(matches!(err, ThistleError::ScriptIo { .. }));
}

#[test]
fn script_error_terminates_the_run() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("boom.th");
    fs::write(&path, "5 0 /\n42\n").expect("write script");

    let mut interp = Interpreter::new();
    let err = interp.exec_script(&path).expect_err("should fail");
    assert!(matches!(err, ThistleError::DivisionByZero));
    assert!(interp.stack().is_empty(), "42 should never be dispatched");
}

#[test]
fn loading_missing_extension_is_a_no_op() {
    let mut interp = Interpreter::new();
    let before = interp.registry().len();
    interp.load_extension("no/such/module.so");
    assert_eq!(interp.registry().len(), before);
}

#[test]
fn corrupt_module_is_skipped_without_aborting() {
    let dir = tempdir().expect("create temp dir");
    let bogus = dir
        .path()
        .join(format!("bogus.{}", std::env::consts::DLL_EXTENSION));
    fs::write(&bogus, b"not a loadable module").expect("write bogus module");
    fs::write(dir.path().join("notes.txt"), b"ignored").expect("write stray file");

    let mut interp = Interpreter::new();
    let before = interp.registry().len();
    interp.load_extensions(dir.path());
    assert_eq!(interp.registry().len(), before);

    // the interpreter stays usable after the skip
    interp.exec_line("2 2 +").expect("line");
    assert_eq!(interp.stack().peek(), Some(&Value::float(4.0)));
}

#[test]
fn load_extensions_ignores_non_directories() {
    let dir = tempdir().expect("create temp dir");
    let file = dir.path().join("plain.txt");
    fs::write(&file, b"not a directory").expect("write file");

    let mut interp = Interpreter::new();
    interp.load_extensions(&file);
    interp.load_extensions(dir.path().join("missing"));
    assert!(interp.stack().is_empty());
}
