use minicalc::{error::{Error, RuntimeError}, evaluate, get_result, parse};

fn value(source: &str) -> i32 {
    get_result(source).unwrap_or_else(|e| panic!("{source:?} failed: {e}"))
}

fn fault(source: &str) -> RuntimeError {
    let tree = parse(source);
    assert!(!tree.has_errors(), "{source:?} has diagnostics");
    match evaluate(tree.root()) {
        Ok(v) => panic!("{source:?} evaluated to {v} but was expected to fault"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(value("1 + 2"), 3);
    assert_eq!(value("8 - 5"), 3);
    assert_eq!(value("7 * 9"), 63);
    assert_eq!(value("10 / 2"), 5);
}

#[test]
fn precedence_and_parentheses() {
    assert_eq!(value("2+3*4"), 14);
    assert_eq!(value("(2+3)*4"), 20);
    assert_eq!(value("1+2*3"), 7);
    assert_eq!(value("2*(3+4)*5"), 70);
}

#[test]
fn equal_precedence_evaluates_left_to_right() {
    assert_eq!(value("10-3-2"), 5);
    assert_eq!(value("8/4/2"), 1);
    assert_eq!(value("100/10*2"), 20);
}

#[test]
fn unary_signs() {
    assert_eq!(value("-5+2"), -3);
    assert_eq!(value("+5"), 5);
    assert_eq!(value("--5"), 5);
    assert_eq!(value("2 - -3"), 5);
    assert_eq!(value("-(2+3)"), -5);
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(value("7/2"), 3);
    assert_eq!(value("-7/2"), -3);
    assert_eq!(value("7/-2"), -3);
    assert_eq!(value("0/5"), 0);
}

#[test]
fn int32_range_is_reachable() {
    assert_eq!(value("2147483647"), i32::MAX);
    assert_eq!(value("-2147483647 - 1"), i32::MIN);
}

#[test]
fn division_by_zero_is_a_runtime_fault() {
    assert_eq!(fault("1/0"), RuntimeError::DivisionByZero { position: 1 });
    assert_eq!(fault("5 / (3 - 3)"), RuntimeError::DivisionByZero { position: 2 });
    assert_eq!(get_result("1/0"),
               Err(Error::Runtime(RuntimeError::DivisionByZero { position: 1 })));
}

#[test]
fn overflow_is_a_runtime_fault() {
    assert_eq!(fault("2147483647 + 1"), RuntimeError::Overflow { position: 11 });
    assert_eq!(fault("65536 * 65536"), RuntimeError::Overflow { position: 6 });
    assert!(matches!(fault("-(-2147483647 - 1)"), RuntimeError::Overflow { .. }));
    assert!(matches!(fault("(-2147483647 - 1) / -1"), RuntimeError::Overflow { .. }));
}

#[test]
fn faults_display_differently_from_diagnostics() {
    let message = fault("1/0").to_string();

    assert_eq!(message, "RUNTIME ERROR: division by zero at position 1");
    assert!(!message.starts_with("ERROR: "));
}

#[test]
fn diagnostics_suppress_evaluation() {
    let Err(Error::Diagnostics(diagnostics)) = get_result("2+") else {
        panic!("expected diagnostics");
    };

    assert_eq!(diagnostics.len(), 1);
    // The division by zero is never reached.
    assert!(matches!(get_result("1/0 +"), Err(Error::Diagnostics(_))));
}

#[test]
fn placeholder_literals_have_no_value() {
    assert_eq!(evaluate(parse("2+").root()),
               Err(RuntimeError::MissingValue { position: 2 }));
    assert_eq!(evaluate(parse("99999999999").root()),
               Err(RuntimeError::MissingValue { position: 0 }));
}

#[test]
fn long_chains_are_rejected_without_crashing() {
    assert_eq!(get_result(&format!("{}1", "1+".repeat(255))), Ok(256));

    let Err(Error::Diagnostics(diagnostics)) = get_result(&format!("{}1", "1+".repeat(50_000)))
    else {
        panic!("a 50001-term chain should exceed the nesting limit");
    };
    assert_eq!(diagnostics.len(), 1);
}
