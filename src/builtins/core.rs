//! Core builtins: procedure application, output, errors, eval, exit

use super::{bind, require_at_least, require_at_most, require_exact};
use crate::error::{Error, Result};
use crate::runtime::{self, EnvRef, Value};

/// Registers the core builtins
pub fn register(env: &EnvRef) {
    bind(env, "apply", apply);
    bind(env, "display", display);
    bind(env, "displayln", displayln);
    bind(env, "newline", newline);
    bind(env, "print", print);
    bind(env, "error", error);
    bind(env, "eval", eval);
    bind(env, "exit", exit);
}

/// `(apply proc arg .. arg-list)` — calls `proc` with the leading
/// arguments followed by the elements of the trailing list.
fn apply(args: &[Value], env: &EnvRef) -> Result<Value> {
    require_at_least("apply", args, 2)?;
    let proc = &args[0];
    let (tail, leading) = args[1..].split_last().unwrap();

    let mut call_args = leading.to_vec();
    call_args.extend(tail.list_to_vec()?);
    runtime::apply(proc, &call_args, env)
}

/// `(display x)` — strings print their raw contents, everything else
/// its printed form. No trailing newline.
fn display(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_at_most("display", args, 1)?;
    if let Some(value) = args.first() {
        match value {
            Value::Str(s) => print!("{}", s),
            other => print!("{}", other),
        }
    }
    Ok(Value::Nil)
}

fn displayln(args: &[Value], env: &EnvRef) -> Result<Value> {
    display(args, env)?;
    println!();
    Ok(Value::Nil)
}

fn newline(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_exact("newline", args, 0)?;
    println!();
    Ok(Value::Nil)
}

/// `(print x ..)` — each argument in printed form on its own line
fn print(args: &[Value], _env: &EnvRef) -> Result<Value> {
    for arg in args {
        println!("{}", arg);
    }
    Ok(Value::Nil)
}

/// `(error msg)` — raises a user error with the printed form of its
/// argument, or "Error" when called with none.
fn error(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_at_most("error", args, 1)?;
    let message = match args.first() {
        Some(value) => value.to_string(),
        None => "Error".to_string(),
    };
    Err(Error::UserError(message))
}

/// `(eval expr)` — evaluates `expr` in the current environment
fn eval(args: &[Value], env: &EnvRef) -> Result<Value> {
    require_exact("eval", args, 1)?;
    runtime::eval(&args[0], env)
}

/// `(exit code)` — terminates the process, default exit code 0
fn exit(args: &[Value], _env: &EnvRef) -> Result<Value> {
    require_at_most("exit", args, 1)?;
    let code = match args.first() {
        Some(value) => value.as_number()? as i32,
        None => 0,
    };
    std::process::exit(code)
}
