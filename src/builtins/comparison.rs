//! Comparison and equality builtins
//!
//! The numeric comparisons are n-ary and chained: `(< a b c)` is true
//! iff `a < b` and `b < c`.

use super::{bind, require_at_least, require_exact};
use crate::error::Result;
use crate::runtime::{EnvRef, Value};

/// Registers the comparison builtins
pub fn register(env: &EnvRef) {
    bind(env, "=", num_equal);
    bind(env, "<", less_than);
    bind(env, ">", greater_than);
    bind(env, "<=", less_or_equal);
    bind(env, ">=", greater_or_equal);
    bind(env, "eq?", eq);
    bind(env, "equal?", equal);
    bind(env, "not", not);
    bind(env, "even?", even);
    bind(env, "odd?", odd);
    bind(env, "zero?", zero);
}

fn chain(name: &str, args: &[Value], holds: fn(f64, f64) -> bool) -> Result<Value> {
    require_at_least(name, args, 2)?;
    for window in args.windows(2) {
        if !holds(window[0].as_number()?, window[1].as_number()?) {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

fn num_equal(args: &[Value], _env: &EnvRef) -> Result<Value> {
    chain("=", args, |a, b| a == b)
}

fn less_than(args: &[Value], _env: &EnvRef) -> Result<Value> {
    chain("<", args, |a, b| a < b)
}

fn greater_than(args: &[Value], _env: &EnvRef) -> Result<Value> {
    chain(">", args, |a, b| a > b)
}

fn less_or_equal(args: &[Value], _env: &EnvRef) -> Result<Value> {
    chain("<=", args, |a, b| a <= b)
}

fn greater_or_equal(args: &[Value], _env: &EnvRef) -> Result<Value> {
    chain(">=", args, |a, b| a >= b)
}

/// Identity: symbols by name, numbers by value, reference otherwise
fn eq(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("eq?", args, 2)?;
    Ok(Value::Bool(args[0].is_identical(&args[1])))
}

/// Deep structural equality, recursing through pairs
fn equal(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("equal?", args, 2)?;
    Ok(Value::Bool(args[0] == args[1]))
}

/// `#t` iff the argument is exactly the boolean `#f`
fn not(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("not", args, 1)?;
    Ok(Value::Bool(!args[0].is_truthy()))
}

fn even(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("even?", args, 1)?;
    let n = args[0].as_number()?;
    Ok(Value::Bool((n as i64) % 2 == 0))
}

fn odd(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("odd?", args, 1)?;
    let n = args[0].as_number()?;
    Ok(Value::Bool((n as i64) % 2 != 0))
}

fn zero(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("zero?", args, 1)?;
    Ok(Value::Bool(args[0].as_number()? == 0.0))
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::runtime::{Evaluator, Value};

    fn run(source: &str) -> Value {
        Evaluator::new().eval_source(source).unwrap()
    }

    fn run_err(source: &str) -> Error {
        Evaluator::new().eval_source(source).unwrap_err()
    }

    #[test]
    fn test_chained_comparisons() {
        assert_eq!(run("(< 1 2 3)"), Value::Bool(true));
        assert_eq!(run("(< 1 3 2)"), Value::Bool(false));
        assert_eq!(run("(<= 1 1 2)"), Value::Bool(true));
        assert_eq!(run("(> 3 2 1)"), Value::Bool(true));
        assert_eq!(run("(>= 3 3 1)"), Value::Bool(true));
        assert_eq!(run("(= 2 2 2)"), Value::Bool(true));
        assert_eq!(run("(= 2 2 3)"), Value::Bool(false));
    }

    #[test]
    fn test_comparisons_need_two_operands() {
        assert!(matches!(run_err("(< 1)"), Error::ArityMismatch { .. }));
        assert!(matches!(run_err("(=)"), Error::ArityMismatch { .. }));
    }

    #[test]
    fn test_comparisons_require_numbers() {
        assert!(matches!(run_err("(< 1 'a)"), Error::TypeError { .. }));
    }

    #[test]
    fn test_eq() {
        assert_eq!(run("(eq? 'a 'a)"), Value::Bool(true));
        assert_eq!(run("(eq? 1 1)"), Value::Bool(true));
        assert_eq!(run("(eq? '(1) '(1))"), Value::Bool(false));
        assert_eq!(run("(define p '(1)) (eq? p p)"), Value::Bool(true));
        assert_eq!(run("(eq? car car)"), Value::Bool(true));
        assert_eq!(run("(eq? car cdr)"), Value::Bool(false));
    }

    #[test]
    fn test_equal() {
        assert_eq!(run("(equal? '(1 (2 3)) '(1 (2 3)))"), Value::Bool(true));
        assert_eq!(run("(equal? '(1 2) '(1 3))"), Value::Bool(false));
        assert_eq!(run("(equal? \"ab\" \"ab\")"), Value::Bool(true));
        assert_eq!(run("(equal? 1 \"1\")"), Value::Bool(false));
        assert_eq!(
            run("(define p '(1 . 2)) (equal? (cons (car p) (cdr p)) p)"),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_not() {
        assert_eq!(run("(not #f)"), Value::Bool(true));
        assert_eq!(run("(not #t)"), Value::Bool(false));
        // Canonical rule: anything that is not #f maps to #f.
        assert_eq!(run("(not '())"), Value::Bool(false));
        assert_eq!(run("(not 0)"), Value::Bool(false));
        assert_eq!(run("(not \"\")"), Value::Bool(false));
    }

    #[test]
    fn test_even_odd_zero() {
        assert_eq!(run("(even? 4)"), Value::Bool(true));
        assert_eq!(run("(even? 3)"), Value::Bool(false));
        assert_eq!(run("(odd? 3)"), Value::Bool(true));
        assert_eq!(run("(odd? -3)"), Value::Bool(true));
        assert_eq!(run("(zero? 0)"), Value::Bool(true));
        assert_eq!(run("(zero? 0.0)"), Value::Bool(true));
        assert_eq!(run("(zero? 1)"), Value::Bool(false));
        assert!(matches!(run_err("(even? 'x)"), Error::TypeError { .. }));
    }
}
