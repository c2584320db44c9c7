//! Arithmetic builtins
//!
//! Every argument is coerced through `as_number`; there is no numeric
//! tower, all arithmetic is IEEE-754 double precision.

use super::{bind, require_at_least, require_exact};
use crate::error::{Error, Result};
use crate::runtime::{EnvRef, Value};

/// Registers the arithmetic builtins
pub fn register(env: &EnvRef) {
    bind(env, "+", add);
    bind(env, "-", subtract);
    bind(env, "*", multiply);
    bind(env, "/", divide);
    bind(env, "abs", abs);
    bind(env, "expt", expt);
    bind(env, "quotient", quotient);
    bind(env, "modulo", modulo);
    bind(env, "remainder", remainder);
}

fn add(args: &[Value], _env: &EnvRef) -> Result<Value> {
    let mut sum = 0.0;
    for arg in args {
        sum += arg.as_number()?;
    }
    Ok(Value::Number(sum))
}

/// `(- x)` negates; `(- x y ..)` subtracts left to right
fn subtract(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_at_least("-", args, 1)?;
    let first = args[0].as_number()?;
    if args.len() == 1 {
        return Ok(Value::Number(-first));
    }
    let mut result = first;
    for arg in &args[1..] {
        result -= arg.as_number()?;
    }
    Ok(Value::Number(result))
}

fn multiply(args: &[Value], _env: &EnvRef) -> Result<Value> {
    let mut product = 1.0;
    for arg in args {
        product *= arg.as_number()?;
    }
    Ok(Value::Number(product))
}

/// `(/ x)` is the reciprocal; `(/ x y ..)` divides left to right.
/// Any zero divisor is a domain error.
fn divide(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_at_least("/", args, 1)?;
    let first = args[0].as_number()?;
    if args.len() == 1 {
        if first == 0.0 {
            return Err(Error::DivisionByZero);
        }
        return Ok(Value::Number(1.0 / first));
    }
    let mut result = first;
    for arg in &args[1..] {
        let divisor = arg.as_number()?;
        if divisor == 0.0 {
            return Err(Error::DivisionByZero);
        }
        result /= divisor;
    }
    Ok(Value::Number(result))
}

fn abs(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("abs", args, 1)?;
    Ok(Value::Number(args[0].as_number()?.abs()))
}

fn expt(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("expt", args, 2)?;
    let base = args[0].as_number()?;
    let exponent = args[1].as_number()?;
    Ok(Value::Number(base.powf(exponent)))
}

/// Integer division truncated toward zero
fn quotient(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("quotient", args, 2)?;
    let dividend = args[0].as_number()?;
    let divisor = args[1].as_number()?;
    if divisor == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(Value::Number((dividend / divisor).trunc()))
}

/// The result takes the sign of the divisor
fn modulo(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("modulo", args, 2)?;
    let a = args[0].as_number()?;
    let b = args[1].as_number()?;
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    let mut result = a % b;
    if result != 0.0 && (result < 0.0) != (b < 0.0) {
        result += b;
    }
    Ok(Value::Number(result))
}

/// The result takes the sign of the dividend
fn remainder(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("remainder", args, 2)?;
    let a = args[0].as_number()?;
    let b = args[1].as_number()?;
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(Value::Number(a % b))
}
