// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Monkey CLI - REPL and file runner.

mod output;

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;
use std::time::Instant;

use colored::Colorize;
use monkey_eval::{eval_program, format_parse_errors, Environment, Object};

const BENCHMARK_SOURCE: &str = "
    let fibonacci = fn(x) {
        if (x == 0) {
            0
        } else {
            if (x == 1) {
                1
            } else {
                fibonacci(x - 1) + fibonacci(x - 2)
            }
        }
    };
    fibonacci(35);
";

fn main() {
    output::init();
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None => run_repl(),
        Some("--bench") => run_benchmark(),
        Some(path) => run_file(path),
    }
}

fn run_repl() {
    println!("Hello! This is the Monkey programming language REPL.");
    println!("Feel free to type in commands.");

    let env = Environment::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", output::prompt());
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let (program, errors) = monkey_parser::parse(&line);
        if !errors.is_empty() {
            println!("{}", format_parse_errors(&errors));
            continue;
        }

        let result = eval_program(&program, &env);
        println!("{}", result.inspect());
    }
}

fn run_file(path: &str) {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("{}: could not read {path}: {err}", output::error_label());
        process::exit(1);
    });

    let (program, errors) = monkey_parser::parse(&source);
    if !errors.is_empty() {
        eprintln!("{}", format_parse_errors(&errors));
        process::exit(1);
    }

    let env = Environment::new();
    let result = eval_program(&program, &env);
    if let Object::Error(_) = &result {
        eprintln!("{}: {}", output::error_label(), result.inspect());
        process::exit(1);
    }
    println!("{}", result.inspect());
}

fn run_benchmark() {
    let (program, errors) = monkey_parser::parse(BENCHMARK_SOURCE);
    assert!(errors.is_empty(), "benchmark source failed to parse: {errors:?}");

    let env = Environment::new();
    let start = Instant::now();
    let result = eval_program(&program, &env);
    let elapsed = start.elapsed();

    println!("result: {}, duration: {:?}", result.inspect(), elapsed);
}
