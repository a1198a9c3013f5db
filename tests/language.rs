use std::fs::{self};

use safecalc::{
    error::{ArithError, Construct, Error, ErrorKind, SyntaxError},
    evaluate,
    interpreter::parser::MAX_NESTING,
    util::num::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for block in extract_calc_blocks(&content) {
            for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
                count += 1;
                let (source, expected) =
                    line.rsplit_once(" => ")
                        .unwrap_or_else(|| panic!("Malformed example in {path:?}: {line}"));
                check_example(source, expected.trim())
                    .unwrap_or_else(|msg| panic!("Example in {path:?} failed: {line}\n{msg}"));
            }
        }
    }

    assert!(count > 0, "No calculator examples found in book/src");
}

fn extract_calc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```safecalc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn check_example(source: &str, expected: &str) -> Result<(), String> {
    let result = evaluate(source);
    let matches = match expected {
        "PARAM" => result.as_ref().is_err_and(|e| e.kind() == ErrorKind::Param),
        "SYNTAX" => result.as_ref().is_err_and(|e| e.kind() == ErrorKind::Syntax),
        "ARITH" => result.as_ref().is_err_and(|e| e.kind() == ErrorKind::Arith),
        value => {
            let value = value.parse::<i64>()
                             .map_err(|e| format!("Bad expected value {value}: {e}"))?;
            result == Ok(value)
        },
    };

    if matches {
        Ok(())
    } else {
        Err(format!("Expected {expected}, got {result:?}"))
    }
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "Wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "Wrong error kind for {src:?}: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("6 + 2", 8);
    assert_value("6 - 2", 4);
    assert_value("6 * 2", 12);
    assert_value("6 / 2", 3);
}

#[test]
fn unary_operators() {
    assert_value("+6 + +2", 8);
    assert_value("-6 - -2", -4);
    assert_value("--1 + ++2", 3);
    assert_value("+++++1", 1);
    assert_value("-----1", -1);
    assert_value("-+-+-1", -1);
}

#[test]
fn parentheses() {
    assert_value("6 - (2 - 1)", 5);
    assert_value("(1) + 2", 3);
    assert_value("3 - (-4)", 7);
    assert_value("((5 + 6))", 11);
    assert_value("1", 1);
    assert_value("-1", -1);
    assert_value("-(1)", -1);
    assert_value("-(-1)", 1);
}

#[test]
fn precedence_and_left_associativity() {
    assert_value("6 + 5 - 4 * +3 / -2", 17);
    assert_value("6 + 5 - 4 * 3 / -2", 17);
    assert_value("6 - 2 - 1", 3);
    assert_value("16 / 4 / 2", 2);
    assert_value("2 + 3 * 4", 14);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 3 * 3", 6);
    assert_value("1 / 2 * 4", 0);
    assert_value("-7 / 3", -2);
    assert_value("7 / -3", -2);
    assert_value("-7 / -3", 2);
    assert_value("+1 / 2", 0);
}

#[test]
fn negative_zero_is_zero() {
    for src in ["-0", "-(0)", "(-0)", "-(-0)", "-1 / 2", "+0"] {
        assert_value(src, 0);
        assert_eq!(evaluate(src).map(|v| v.to_string()), Ok("0".to_string()));
    }
}

#[test]
fn spaces_are_ignored() {
    assert_value("-  6  +  +  2", -4);
    assert_value("6+5-4*((-3/-2)+-1)", 11);
    assert_value("6 + 5 - 4 * (  (  -3 / -2  ) + -1  )", 11);
    assert_value("-(1 - 2)", 1);
    assert_value("3 - -(1 + 2)", 6);
    assert_value("-+(+-+2)", 2);
    assert_value("  12  ", 12);
}

#[test]
fn safe_integer_boundaries() {
    assert_value(&format!("{MAX_SAFE_INTEGER} - 1 + 1"), MAX_SAFE_INTEGER);
    assert_value(&format!("{MIN_SAFE_INTEGER} + 1 - 1"), MIN_SAFE_INTEGER);
    assert_value(&format!("{MAX_SAFE_INTEGER}"), MAX_SAFE_INTEGER);
    assert_value("4503599627370495 * 2 + 1", MAX_SAFE_INTEGER);

    let above = MAX_SAFE_INTEGER + 1;
    assert_failure(&format!("{above} - 1"), ErrorKind::Arith);
    assert_failure(&format!("{MAX_SAFE_INTEGER} + 1"), ErrorKind::Arith);
    assert_failure(&format!("{MAX_SAFE_INTEGER} + 1 - 1"), ErrorKind::Arith);
    assert_failure(&format!("{above} + 1"), ErrorKind::Arith);
    assert_failure(&format!("{MIN_SAFE_INTEGER} - 1"), ErrorKind::Arith);
    assert_failure(&format!("{MIN_SAFE_INTEGER} - 1 + 1"), ErrorKind::Arith);
    assert_failure("4503599627370496 * 2", ErrorKind::Arith);
    assert_failure("99999999999999999999999999 - 1", ErrorKind::Arith);
    assert_failure("3037000500 * 3037000500 / 3037000500", ErrorKind::Arith);
}

#[test]
fn overflow_reports_operands() {
    let err = evaluate(&format!("{MAX_SAFE_INTEGER} + 1")).unwrap_err();
    assert_eq!(err,
               Error::Arith(ArithError::Overflow { left:   MAX_SAFE_INTEGER,
                                                   op:     safecalc::ast::BinaryOperator::Add,
                                                   right:  1,
                                                   column: 18, }));
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("1 / 0", ErrorKind::Arith);
    assert_failure("1 / ( 2 - 2 )", ErrorKind::Arith);
    assert_failure("0 / 0", ErrorKind::Arith);
    assert_eq!(evaluate("5 / (3 - 3)"),
               Err(Error::Arith(ArithError::DivisionByZero { column: 3 })));
}

#[test]
fn unsupported_constructs_are_syntax_errors() {
    for src in ["2 ^ 3",
                "5 % 2",
                "1.2 + 3",
                "1e3 + 1",
                "x + 1",
                "sin ( 1 )",
                "いちたすに",
                "1\t+2",
                "1 # 2",
                "[1]"]
    {
        assert_failure(src, ErrorKind::Syntax);
    }
}

#[test]
fn screening_reports_first_construct_in_priority_order() {
    let unsupported = |construct: Construct| -> Result<i64, Error> {
        Err(Error::Syntax(SyntaxError::Unsupported { construct }))
    };

    assert_eq!(evaluate("2 ^ 3.5"), unsupported(Construct::UnsupportedOperator));
    assert_eq!(evaluate("1.5e3"), unsupported(Construct::DecimalPoint));
    assert_eq!(evaluate("x * 1e3"), unsupported(Construct::ExponentNotation));
    assert_eq!(evaluate("1E-7"), unsupported(Construct::ExponentNotation));
    assert_eq!(evaluate("e + 1"), unsupported(Construct::Identifier));
    assert_eq!(evaluate("_1"), unsupported(Construct::Identifier));
    assert_eq!(evaluate("1 = 1"), unsupported(Construct::Character));
    assert_eq!(evaluate("1\n+ 1"), unsupported(Construct::Character));
}

#[test]
fn tabs_are_rejected_by_the_scanner() {
    assert_eq!(evaluate("1\t+2"),
               Err(Error::Syntax(SyntaxError::UnsupportedWhitespace { column: 2 })));
    assert_eq!(evaluate("1 +\t2"),
               Err(Error::Syntax(SyntaxError::UnsupportedWhitespace { column: 4 })));
}

#[test]
fn literal_is_checked_before_a_following_tab() {
    assert_eq!(evaluate("99999999999999999\t+ 1"),
               Err(Error::Arith(ArithError::LiteralOutOfRange { literal: "99999999999999999".to_string(),
                                                                column:  1, })));
    assert_failure("1 + 9007199254740992\t+ 1", ErrorKind::Arith);
}

#[test]
fn spaces_do_not_split_literals() {
    assert_value("1 2", 12);
    assert_value("(1 2)", 12);
    assert_value("1 2 + 3 4", 46);
    assert_value("- 1 0 * 2", -20);
    assert_value("9 007 199 254 740 991", MAX_SAFE_INTEGER);

    assert_eq!(evaluate("2 * 9007199254740991 0"),
               Err(Error::Arith(ArithError::LiteralOutOfRange { literal: "90071992547409910".to_string(),
                                                                column:  5, })));
    assert_failure("1\t2", ErrorKind::Syntax);
}

#[test]
fn unbalanced_parentheses() {
    assert_failure("( 1 + 2", ErrorKind::Syntax);
    assert_failure("1 + 2 )", ErrorKind::Syntax);
    assert_failure(")(", ErrorKind::Syntax);
    assert_eq!(evaluate("1 + 2 )"),
               Err(Error::Syntax(SyntaxError::UnmatchedClosingParen { column: 7 })));
    assert_eq!(evaluate("((1)"),
               Err(Error::Syntax(SyntaxError::UnclosedParen { open: 1 })));
}

#[test]
fn malformed_token_sequences() {
    assert_failure("1 + 2 +", ErrorKind::Syntax);
    assert_failure("* 2 + 3", ErrorKind::Syntax);
    assert_failure("1 * / 2", ErrorKind::Syntax);
    assert_failure("2 ( 3 )", ErrorKind::Syntax);
    assert_failure("( 2 ) 3", ErrorKind::Syntax);
    assert_failure("()", ErrorKind::Syntax);
    assert_failure("-", ErrorKind::Syntax);

    assert_eq!(evaluate("1 + 2 +"), Err(Error::Syntax(SyntaxError::UnexpectedEndOfInput)));
    assert_eq!(evaluate("* 2 + 3"),
               Err(Error::Syntax(SyntaxError::UnexpectedToken { token:  "*".to_string(),
                                                                column: 1, })));
    assert_eq!(evaluate("( 2 ) 3"),
               Err(Error::Syntax(SyntaxError::UnexpectedTrailingTokens { token:  "3".to_string(),
                                                                         column: 7, })));
    assert_eq!(evaluate("(1 (2))"),
               Err(Error::Syntax(SyntaxError::ExpectedClosingParen { column: 1 })));
}

#[test]
fn nesting_within_the_limit_is_accepted() {
    let depth = MAX_NESTING - 12;
    assert_value(&format!("{}1", "-".repeat(depth)), 1);
    assert_value(&format!("{}7{}", "(".repeat(depth), ")".repeat(depth)), 7);
    assert_value(&vec!["1"; depth].join(" + "), i64::try_from(depth).unwrap());
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    assert_eq!(evaluate(&format!("{}1", "-".repeat(MAX_NESTING + 1))),
               Err(Error::Syntax(SyntaxError::NestingTooDeep { limit:  MAX_NESTING,
                                                               column: MAX_NESTING + 1, })));

    assert_failure(&format!("{}1", "-".repeat(100_000)), ErrorKind::Syntax);
    assert_failure(&format!("{}1{}", "(".repeat(30_000), ")".repeat(30_000)),
                   ErrorKind::Syntax);
    assert_failure(&vec!["1"; 100_000].join(" + "), ErrorKind::Syntax);
    assert_failure(&format!("{}1{}", "(-".repeat(20_000), ")".repeat(20_000)),
                   ErrorKind::Syntax);
}

#[test]
fn missing_expression_is_param_error() {
    assert_failure("", ErrorKind::Param);
    assert_failure("   ", ErrorKind::Param);
    assert_eq!(evaluate("").unwrap_err().exit_code(), 1);
}

#[test]
fn exit_codes_follow_error_kind() {
    assert_eq!(evaluate("1 +").unwrap_err().exit_code(), 2);
    assert_eq!(evaluate("1 / 0").unwrap_err().exit_code(), 3);
    assert_eq!(ErrorKind::Syntax.to_string(), "SYNTAX");
}
