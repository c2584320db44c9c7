//! List builtins

use super::{bind, require_exact};
use crate::error::{Error, Result};
use crate::runtime::{self, EnvRef, Value};

/// Registers the list builtins
pub fn register(env: &EnvRef) {
    bind(env, "append", append);
    bind(env, "car", car);
    bind(env, "cdr", cdr);
    bind(env, "cons", cons);
    bind(env, "length", length);
    bind(env, "list", list);
    bind(env, "map", map);
    bind(env, "filter", filter);
    bind(env, "reduce", reduce);
    bind(env, "memq", memq);
}

/// `(append list ..)` — concatenates any number of proper lists
fn append(args: &[Value], _env: &EnvRef) -> Result<Value> {
    let mut items = Vec::new();
    for list in args {
        items.extend(list.list_to_vec()?);
    }
    Ok(Value::list(items))
}

fn car(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("car", args, 1)?;
    match args[0].as_pair() {
        Some(pair) => Ok(pair.car.clone()),
        None => Err(Error::TypeError {
            expected: "pair".to_string(),
            got: args[0].type_name().to_string(),
        }),
    }
}

fn cdr(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("cdr", args, 1)?;
    match args[0].as_pair() {
        Some(pair) => Ok(pair.cdr.clone()),
        None => Err(Error::TypeError {
            expected: "pair".to_string(),
            got: args[0].type_name().to_string(),
        }),
    }
}

fn cons(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("cons", args, 2)?;
    Ok(Value::cons(args[0].clone(), args[1].clone()))
}

/// `(length list)` — element count of a proper list
fn length(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("length", args, 1)?;
    let items = args[0].list_to_vec()?;
    Ok(Value::Number(items.len() as f64))
}

fn list(args: &[Value], _env: &EnvRef) -> Result<Value> {
    Ok(Value::list(args.to_vec()))
}

/// `(map proc list)` — a fresh list of `proc` applied to each element
fn map(args: &[Value], env: &EnvRef) -> Result<Value> {
    require_exact("map", args, 2)?;
    let proc = &args[0];
    let items = args[1].list_to_vec()?;

    let mut mapped = Vec::with_capacity(items.len());
    for item in items {
        mapped.push(runtime::apply(proc, &[item], env)?);
    }
    Ok(Value::list(mapped))
}

/// `(filter pred list)` — keeps an element unless the predicate
/// returns `#f` for it
fn filter(args: &[Value], env: &EnvRef) -> Result<Value> {
    require_exact("filter", args, 2)?;
    let pred = &args[0];
    let items = args[1].list_to_vec()?;

    let mut kept = Vec::new();
    for item in items {
        if runtime::apply(pred, &[item.clone()], env)?.is_truthy() {
            kept.push(item);
        }
    }
    Ok(Value::list(kept))
}

/// `(reduce proc list)` — left fold of a binary procedure over a
/// non-empty list: `f(f(x1, x2), x3) ..`
fn reduce(args: &[Value], env: &EnvRef) -> Result<Value> {
    require_exact("reduce", args, 2)?;
    let proc = &args[0];
    let items = args[1].list_to_vec()?;

    let (first, rest) = items.split_first().ok_or_else(|| Error::EmptyCollection {
        operation: "reduce".to_string(),
    })?;

    let mut acc = first.clone();
    for item in rest {
        acc = runtime::apply(proc, &[acc, item.clone()], env)?;
    }
    Ok(acc)
}

/// `(memq x list)` — the tail of `list` starting at the first element
/// identical to `x`, or `#f`
fn memq(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("memq", args, 2)?;
    let needle = &args[0];
    let mut current = args[1].clone();
    while let Value::Pair(pair) = current {
        if pair.car.is_identical(needle) {
            return Ok(Value::Pair(pair));
        }
        current = pair.cdr.clone();
    }
    Ok(Value::Bool(false))
}
