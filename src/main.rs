//! Driver for the minischeme interpreter
//!
//! With no arguments: run the embedded self-check battery, then start
//! the interactive REPL. With one argument: batch-evaluate the given
//! source file. Anything else: usage error.

use std::io::{self, Write};
use std::process;

use minischeme::{Error, ErrorKind, Evaluator, Parser, Scanner, Value};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        1 => {
            run_battery();
            run_repl();
        }
        2 => run_file(&args[1]),
        _ => {
            eprintln!("usage: {} [script]", args[0]);
            process::exit(1);
        }
    }
}

/// Embedded self-check battery: source text and its expected printed
/// result, run against a fresh session each.
const BATTERY: &[(&str, &str)] = &[
    ("(+ 1 2 3)", "6"),
    ("(- 10 1 2)", "7"),
    ("(* 2 3 4)", "24"),
    ("(/ 12 2 3)", "2"),
    ("(define (fact n) (if (= n 0) 1 (* n (fact (- n 1))))) (fact 5)", "120"),
    (
        "(define (make-adder n) (lambda (x) (+ x n))) ((make-adder 3) 10)",
        "13",
    ),
    ("(let ((x 2) (y 3)) (let ((x 7) (z (+ x y))) (* z x)))", "35"),
    ("`(1 ,(+ 1 1) 3)", "(1 2 3)"),
    ("(map (lambda (x) (* x x)) (list 1 2 3 4))", "(1 4 9 16)"),
    ("(filter odd? (list 1 2 3 4 5))", "(1 3 5)"),
    ("(reduce + (list 1 2 3 4))", "10"),
    ("(cond ((= 1 2) 'a) ((= 2 2) 'b) (else 'c))", "b"),
    ("(if #f 1)", "()"),
    ("(and)", "#t"),
    ("(or)", "#f"),
    ("(not #f)", "#t"),
    ("(modulo -7 3)", "2"),
    ("(remainder -7 3)", "-1"),
    ("(cons 1 2)", "(1 . 2)"),
    ("(append '(1 2) '(3) '())", "(1 2 3)"),
    ("(eq? 'a 'a)", "#t"),
    ("(equal? '(1 (2)) '(1 (2)))", "#t"),
    ("(apply + 1 '(2 3))", "6"),
    ("(length '(a b c))", "3"),
];

fn run_battery() {
    let mut passed = 0;
    for (source, expected) in BATTERY {
        let interp = Evaluator::new();
        match interp.eval_source(source) {
            Ok(value) if value.to_string() == *expected => passed += 1,
            Ok(value) => {
                eprintln!(
                    "self-check failed: {} => {}, expected {}",
                    source, value, expected
                );
            }
            Err(err) => eprintln!("self-check failed: {} => {}", source, err),
        }
    }
    println!("self-check: {}/{} passed", passed, BATTERY.len());
}

fn run_repl() {
    let mut interp = Evaluator::new();

    loop {
        print!(">>> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                eprintln!("Error reading input: {}", err);
                continue;
            }
        }

        let input = input.trim();
        match input {
            "" => continue,
            "exit" => break,
            "reset" => {
                interp = Evaluator::new();
                println!("environment reset");
                continue;
            }
            _ => {}
        }

        if let Err(err) = eval_line(&interp, input) {
            report(&err);
        }
    }
}

/// Evaluates every expression on the line, printing non-Nil results
fn eval_line(interp: &Evaluator, line: &str) -> Result<(), Error> {
    let tokens = Scanner::new(line).scan_tokens()?;
    let exprs = Parser::new(tokens).parse_all()?;
    for expr in &exprs {
        let value = interp.eval(expr)?;
        if !value.is_nil() {
            println!("{}", value);
        }
    }
    Ok(())
}

fn run_file(path: &str) {
    let source = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Error reading file '{}': {}", path, err);
            process::exit(1);
        }
    };

    if let Err(err) = eval_file(&source) {
        report(&err);
        process::exit(1);
    }
}

/// Evaluates every top-level expression in order, discarding results
fn eval_file(source: &str) -> Result<(), Error> {
    let tokens = Scanner::new(source).scan_tokens()?;
    let exprs = Parser::new(tokens).parse_all()?;
    let interp = Evaluator::new();
    for expr in &exprs {
        let _: Value = interp.eval(expr)?;
    }
    Ok(())
}

fn report(err: &Error) {
    match err.kind() {
        ErrorKind::Syntax => eprintln!("Syntax error: {}", err),
        _ => eprintln!("Evaluation error: {}", err),
    }
}
