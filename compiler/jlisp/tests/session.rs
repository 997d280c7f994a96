//! End-to-end behaviour of a session: text in, rendered text out.

use jlisp::{LineOutcome, Session};
use pretty_assertions::assert_eq;

/// Evaluate lines in one session, returning every rendered outcome.
fn transcript(lines: &[&str]) -> Vec<String> {
    let session = Session::new();
    lines
        .iter()
        .map(|line| session.eval_line(line).to_string())
        .collect()
}

fn last(lines: &[&str]) -> String {
    transcript(lines).pop().unwrap_or_default()
}

#[test]
fn test_arithmetic() {
    assert_eq!(
        transcript(&["(+ 1 2 3)", "(- 5)", "(/ 4 0)", "(^ 2 5)"]),
        ["6", "-5", "Error: Division by zero!", "32"]
    );
}

#[test]
fn test_digit_run_is_its_own_number() {
    assert_eq!(
        transcript(&["(+ 1-2)", "(+ 5 3x)", "{12-3}"]),
        ["-1", "Error: Unbound symbol 'x'", "{12 -3}"]
    );
}

#[test]
fn test_deeply_nested_line() {
    let depth = 100_000;
    let line = format!("{}(+ 1 2){}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(last(&[line.as_str()]), "3");
}

#[test]
fn test_lists() {
    assert_eq!(
        transcript(&[
            "(head {1 2 3})",
            "(tail {1 2 3})",
            "(join {1} {2 3})",
            "(eval {+ 1 2})",
        ]),
        ["{1}", "{2 3}", "{1 2 3}", "3"]
    );
}

#[test]
fn test_currying() {
    assert_eq!(last(&["(def {add} (\\ {a b} {+ a b}))", "((add 1) 2)"]), "3");
}

#[test]
fn test_variadic() {
    let def = "(def {f} (\\ {a & b} {b}))";
    assert_eq!(transcript(&[def, "(f 1 2 3)", "(f 1)"]), ["()", "{2 3}", "{}"]);
}

#[test]
fn test_error_short_circuit() {
    assert_eq!(
        last(&["(+ 1 (/ 1 0) (head {}))"]),
        "Error: Division by zero!"
    );
}

#[test]
fn test_local_assignment_does_not_leak() {
    assert_eq!(
        last(&["(def {x} 5)", "(def {set} (\\ {v} {= {x} v}))", "(set 100)", "x"]),
        "5"
    );
}

#[test]
fn test_global_persists_across_lines() {
    assert_eq!(
        transcript(&["(def {x} 10)", "x", "(def {x} (+ x 1))", "x"]),
        ["()", "10", "()", "11"]
    );
}

#[test]
fn test_closure_body_resolves_names_at_call_time() {
    let lines = [
        "(def {quadruple} (\\ {x} {double (double x)}))",
        "(def {double} (\\ {x} {* 2 x}))",
        "(quadruple 4)",
    ];
    assert_eq!(last(&lines), "16");
}

#[test]
fn test_parse_error_skips_evaluation() {
    let session = Session::new();
    let outcome = session.eval_line("(def {x} 1");
    assert!(outcome.is_parse_error());
    assert_eq!(
        outcome,
        LineOutcome::ParseError(
            "<stdin>:1:11: error: expected ')' but found end of input".to_string()
        )
    );
    // The definition never ran.
    assert_eq!(session.eval_line("x").text(), "Error: Unbound symbol 'x'");
    assert_eq!(session.eval_line("(+ 1 1)"), LineOutcome::Value("2".to_string()));
}

#[test]
fn test_rendering() {
    assert_eq!(
        transcript(&["+", "(\\ {x} {* x x})", "{a (b 1) {c}}", "()"]),
        ["<function>", "(\\ {x} {* x x})", "{a (b 1) {c}}", "()"]
    );
}

#[test]
fn test_named_origin_in_errors() {
    let session = Session::with_origin("demo.jl");
    assert_eq!(session.origin(), "demo.jl");
    assert_eq!(
        session.eval_line(")").text(),
        "demo.jl:1:1: error: unexpected ')' with no matching opening bracket"
    );
}
