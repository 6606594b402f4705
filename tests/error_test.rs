mod common;
use common::*;
use container::lang::ErrorCode;
use container::mach::{Config, Runtime};
use container::respond;
use pretty_assertions::assert_eq;
use std::collections::HashMap;

#[test]
fn test_output_before_fault_is_kept() {
    let body = "console.type(\"one\");\nconsole.type(\"two\");\ncall missing;\nconsole.type(\"three\");";
    assert_eq!(
        exec(body),
        "one\ntwo\nProcedure 'missing' not defined (line 4)\n"
    );
}

#[test]
fn test_respond_returns_output() {
    let mut inputs = HashMap::new();
    inputs.insert("Name?".to_string(), "Ada".to_string());
    let source = program("def var n = input from \"Name?\";\nconsole.type(\"Hello \" + n);\nconsole.type(2 - 3 - 1);");
    assert_eq!(respond(&source, inputs), "Hello Ada\n0\n");
}

#[test]
fn test_respond_returns_only_the_error() {
    let source = program("console.type(1);\nconsole.type(1 / 0);");
    assert_eq!(respond(&source, HashMap::new()), "Division by zero (line 3)");
    assert_eq!(
        respond("console.type(1);", HashMap::new()),
        "Program must start with When container main(int): (line 1)"
    );
}

#[test]
fn test_runs_are_isolated() {
    let mut runtime = Runtime::new(&program("console.type(1);\ndef const x = 1;"));
    runtime.run().unwrap();
    runtime.run().unwrap();
    assert_eq!(runtime.output(), "1\n");
}

#[test]
fn test_error_codes() {
    let cases = [
        ("foo;", ErrorCode::UnknownStatement),
        ("console.type(1", ErrorCode::SyntaxError),
        ("console.type(1 * );", ErrorCode::InvalidExpression),
        ("console.type(x);", ErrorCode::UndefinedVariable),
        ("List l length();", ErrorCode::UndefinedList),
        ("call p;", ErrorCode::UndefinedProcedure),
        ("console.type(\"a\" * 2);", ErrorCode::TypeMismatch),
        ("console.type(2 / 0.0);", ErrorCode::DivisionByZero),
        ("console.type(10 ** 30);", ErrorCode::Overflow),
        ("console.type(sqrt(0 - 4));", ErrorCode::MathDomain),
        ("def const c = 1;\ndef const c = 2;", ErrorCode::ConstantRedefined),
        ("else:\nEnd;", ErrorCode::ElseWithoutIf),
        ("skip;", ErrorCode::BreakOutsideLoop),
        ("console.type($$);", ErrorCode::InvalidExpression),
        ("console.type(1.5 ** 2000);", ErrorCode::Overflow),
    ];
    for (body, code) in cases.iter() {
        let e = Runtime::new(&program(body)).run().unwrap_err();
        assert_eq!(e.code(), *code, "{}", body);
    }
}

#[test]
fn test_step_limit() {
    let config = Config {
        max_call_depth: 256,
        max_steps: Some(50),
    };
    let mut runtime = Runtime::new(&program("while 1:\nconsole.type(1);\nEnd;")).with_config(config);
    let e = runtime.run().unwrap_err();
    assert_eq!(e.code(), ErrorCode::StepLimitExceeded);
    assert_eq!(e.line_number(), Some(3));
    assert!(runtime.output().len() < 50);
}
