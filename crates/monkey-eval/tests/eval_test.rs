// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! End-to-end parse + evaluate scenarios.

use monkey_eval::{eval_program, Environment, Object};

fn eval(input: &str) -> Object {
    let (program, errors) = monkey_parser::parse(input);
    assert!(errors.is_empty(), "parse errors for {input:?}: {errors:?}");
    let env = Environment::new();
    eval_program(&program, &env)
}

fn assert_integer(obj: &Object, expected: i64) {
    match obj {
        Object::Integer(v) => assert_eq!(*v, expected),
        other => panic!("expected Integer({expected}), got {other:?}"),
    }
}

#[test]
fn integer_expressions() {
    assert_integer(&eval("5"), 5);
    assert_integer(&eval("10"), 10);
    assert_integer(&eval("-5"), -5);
    assert_integer(&eval("5 + 5 + 5 + 5 - 10"), 10);
    assert_integer(&eval("2 * 2 * 2 * 2 * 2"), 32);
    assert_integer(&eval("(5 + 10 * 2 + 15 / 3) * 2 + -10"), 50);
}

#[test]
fn boolean_expressions() {
    assert_eq!(eval("true"), Object::Boolean(true));
    assert_eq!(eval("1 < 2"), Object::Boolean(true));
    assert_eq!(eval("1 == 1"), Object::Boolean(true));
    assert_eq!(eval("1 != 2"), Object::Boolean(true));
    assert_eq!(eval("(1 < 2) == true"), Object::Boolean(true));
}

#[test]
fn bang_operator() {
    assert_eq!(eval("!true"), Object::Boolean(false));
    assert_eq!(eval("!false"), Object::Boolean(true));
    assert_eq!(eval("!5"), Object::Boolean(false));
    assert_eq!(eval("!!true"), Object::Boolean(true));
}

#[test]
fn if_else_expressions() {
    assert_integer(&eval("if (true) { 10 }"), 10);
    assert_eq!(eval("if (false) { 10 }"), Object::Null);
    assert_integer(&eval("if (1 < 2) { 10 } else { 20 }"), 10);
    assert_integer(&eval("if (1 > 2) { 10 } else { 20 }"), 20);
}

#[test]
fn return_statements() {
    assert_integer(&eval("return 10;"), 10);
    assert_integer(&eval("return 2 * 5; 9;"), 10);
    assert_integer(&eval("9; return 2 * 5; 9;"), 10);

    let nested = "if (10 > 1) { if (10 > 1) { return 10; } return 1; }";
    assert_integer(&eval(nested), 10);
}

#[test]
fn let_statements() {
    assert_integer(&eval("let a = 5; a;"), 5);
    assert_integer(&eval("let a = 5 * 5; a;"), 25);
    assert_integer(&eval("let a = 5; let b = a; b;"), 5);
    assert_integer(&eval("let a = 5; let b = a; let c = a + b + 5; c;"), 15);
}

#[test]
fn function_application_and_closures() {
    assert_integer(&eval("let identity = fn(x) { x; }; identity(5);"), 5);
    assert_integer(&eval("let identity = fn(x) { return x; }; identity(5);"), 5);
    assert_integer(&eval("let double = fn(x) { x * 2; }; double(5);"), 10);
    assert_integer(&eval("let add = fn(x, y) { x + y; }; add(5, 5);"), 10);
    assert_integer(&eval("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));"), 20);
    assert_integer(&eval("fn(x) { x; }(5)"), 5);

    let make_adder = "
        let newAdder = fn(x) {
            fn(y) { x + y; };
        };
        let addTwo = newAdder(2);
        addTwo(3);
    ";
    assert_integer(&eval(make_adder), 5);
}

#[test]
fn recursive_closure_sees_its_own_binding() {
    let fib = "
        let fib = fn(x) {
            if (x < 2) {
                x
            } else {
                fib(x - 1) + fib(x - 2)
            }
        };
        fib(15);
    ";
    assert_integer(&eval(fib), 610);
}

#[test]
fn string_literals_and_concatenation() {
    assert_eq!(eval(r#""Hello World!""#), Object::String(std::rc::Rc::from("Hello World!")));
    assert_eq!(
        eval(r#"let greeting = fn(a, b) { a + " " + b }; greeting("hello", "world!");"#),
        Object::String(std::rc::Rc::from("hello world!"))
    );
}

#[test]
fn array_literals_and_indexing() {
    assert_integer(&eval("[1, 2 * 2, 3 + 3][1]"), 4);
    assert_eq!(eval("[1, 2, 3][3]"), Object::Null);
    assert_eq!(eval("[1, 2, 3][-1]"), Object::Null);
}

#[test]
fn hash_literal_multi_key_lookup() {
    let input = r#"
        let two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }["thr" + "ee"]
    "#;
    assert_integer(&eval(input), 3);
}

#[test]
fn builtin_len_first_last_rest_push() {
    assert_integer(&eval(r#"len("")"#), 0);
    assert_integer(&eval(r#"len("four")"#), 4);
    assert_integer(&eval(r#"len("hello world")"#), 11);
    assert_integer(&eval("len([1, 2, 3])"), 3);
    assert_integer(&eval("first([1, 2, 3])"), 1);
    assert_integer(&eval("last([1, 2, 3])"), 3);
    assert_integer(&eval("last(rest([1, 2, 3]))"), 3);
    assert_integer(&eval("len(push([1, 2], 3))"), 3);
}

#[test]
fn error_handling_messages() {
    let cases = [
        ("5 + true;", "type mismatch: MInteger + MBoolean"),
        ("5 + true; 5;", "type mismatch: MInteger + MBoolean"),
        ("-true", "unknown operator: -MBoolean"),
        ("true + false;", "unknown operator: MBoolean + MBoolean"),
        ("5; true + false; 5", "unknown operator: MBoolean + MBoolean"),
        ("if (10 > 1) { true + false; }", "unknown operator: MBoolean + MBoolean"),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: MBoolean + MBoolean",
        ),
        ("foobar", "identifier not found: foobar"),
        (r#""Hello" - "World""#, "unknown operator: MString - MString"),
        (r#"{"name": "Monkey"}[fn(x) { x }];"#, "unusable as a hash key: MFunction"),
        (r#"len(1)"#, "argument to 'len' not supported, got MInteger"),
        (r#"len("one", "two")"#, "wrong number of arguments. got=2, want=1"),
    ];

    for (input, expected) in cases {
        match eval(input) {
            Object::Error(msg) => assert_eq!(msg, expected, "input: {input}"),
            other => panic!("expected Error({expected:?}) for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn short_circuit_stops_evaluating_later_arguments() {
    let input = "let sideEffect = fn() { 1 + true }; [sideEffect(), 2][0];";
    match eval(input) {
        Object::Error(msg) => assert_eq!(msg, "type mismatch: MInteger + MBoolean"),
        other => panic!("expected short-circuited error, got {other:?}"),
    }
}
