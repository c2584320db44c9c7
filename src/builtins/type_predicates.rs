//! Type predicates: one argument in, a boolean out

use super::{bind, require_exact};
use crate::error::Result;
use crate::runtime::{EnvRef, Value};

/// Registers the type predicates
pub fn register(env: &EnvRef) {
    bind(env, "atom?", is_atom);
    bind(env, "boolean?", is_boolean);
    bind(env, "integer?", is_integer);
    bind(env, "list?", is_list);
    bind(env, "number?", is_number);
    bind(env, "null?", is_null);
    bind(env, "pair?", is_pair);
    bind(env, "procedure?", is_procedure);
    bind(env, "string?", is_string);
    bind(env, "symbol?", is_symbol);
}

/// Atoms are everything that is neither a pair nor a procedure.
fn is_atom(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("atom?", args, 1)?;
    Ok(Value::Bool(matches!(
        args[0],
        Value::Bool(_) | Value::Number(_) | Value::Str(_) | Value::Symbol(_) | Value::Nil
    )))
}

fn is_boolean(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("boolean?", args, 1)?;
    Ok(Value::Bool(matches!(args[0], Value::Bool(_))))
}

/// True for numbers whose value equals its floor
fn is_integer(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("integer?", args, 1)?;
    Ok(Value::Bool(match args[0] {
        Value::Number(n) => n.floor() == n,
        _ => false,
    }))
}

/// True for Nil and proper lists only
fn is_list(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("list?", args, 1)?;
    Ok(Value::Bool(args[0].is_list()))
}

fn is_number(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("number?", args, 1)?;
    Ok(Value::Bool(matches!(args[0], Value::Number(_))))
}

fn is_null(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("null?", args, 1)?;
    Ok(Value::Bool(args[0].is_nil()))
}

fn is_pair(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("pair?", args, 1)?;
    Ok(Value::Bool(args[0].is_pair()))
}

fn is_procedure(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("procedure?", args, 1)?;
    Ok(Value::Bool(args[0].is_procedure()))
}

fn is_string(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("string?", args, 1)?;
    Ok(Value::Bool(matches!(args[0], Value::Str(_))))
}

fn is_symbol(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("symbol?", args, 1)?;
    Ok(Value::Bool(matches!(args[0], Value::Symbol(_))))
}
