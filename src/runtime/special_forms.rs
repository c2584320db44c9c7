//! Special forms: reserved head symbols whose operands are not
//! pre-evaluated.
//!
//! The table is consulted before head evaluation, so special forms are
//! not first-class values and cannot be shadowed.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::runtime::environment::{EnvRef, Environment};
use crate::runtime::evaluator::{eval, eval_sequence};
use crate::runtime::value::Lambda;
use crate::runtime::Value;

/// Handler signature: unevaluated operands plus the current environment
pub type SpecialFormFn = fn(&[Value], &EnvRef) -> Result<Value>;

/// Maps a reserved symbol to its handler
pub fn special_form(name: &str) -> Option<SpecialFormFn> {
    Some(match name {
        "quote" => quote_form,
        "quasiquote" => quasiquote_form,
        "unquote" => unquote_form,
        "if" => if_form,
        "and" => and_form,
        "or" => or_form,
        "lambda" => lambda_form,
        "define" => define_form,
        "cond" => cond_form,
        "begin" => begin_form,
        "let" => let_form,
        _ => return None,
    })
}

fn arity(name: &str, expected: &str, got: usize) -> Error {
    Error::ArityMismatch {
        name: name.to_string(),
        expected: expected.to_string(),
        got,
    }
}

fn quote_form(args: &[Value], _env: &EnvRef) -> Result<Value> {
    if args.len() != 1 {
        return Err(arity("quote", "exactly 1", args.len()));
    }
    Ok(args[0].clone())
}

fn quasiquote_form(args: &[Value], env: &EnvRef) -> Result<Value> {
    if args.len() != 1 {
        return Err(arity("quasiquote", "exactly 1", args.len()));
    }
    quasiquote_expand(&args[0], env)
}

/// Walks the quoted template, replacing each `(unquote e)` sub-form with
/// the result of evaluating `e`. One level only; `unquote-splicing` is
/// not supported.
fn quasiquote_expand(expr: &Value, env: &EnvRef) -> Result<Value> {
    if let Some(pair) = expr.as_pair() {
        if pair.car.as_symbol() == Some("unquote") {
            let items = expr.list_to_vec()?;
            if items.len() != 2 {
                return Err(arity("unquote", "exactly 1", items.len() - 1));
            }
            return eval(&items[1], env);
        }
        return Ok(Value::cons(
            quasiquote_expand(&pair.car, env)?,
            quasiquote_expand(&pair.cdr, env)?,
        ));
    }
    Ok(expr.clone())
}

// Installed for uniformity; a well-formed unquote is consumed by the
// quasiquote walk before the evaluator ever dispatches on it.
fn unquote_form(_args: &[Value], _env: &EnvRef) -> Result<Value> {
    Err(Error::runtime("unquote is only valid inside quasiquote"))
}

fn if_form(args: &[Value], env: &EnvRef) -> Result<Value> {
    if args.len() < 2 || args.len() > 3 {
        return Err(arity("if", "2 or 3", args.len()));
    }
    let condition = eval(&args[0], env)?;
    if condition.is_truthy() {
        eval(&args[1], env)
    } else if args.len() == 3 {
        eval(&args[2], env)
    } else {
        Ok(Value::Nil)
    }
}

fn and_form(args: &[Value], env: &EnvRef) -> Result<Value> {
    if args.is_empty() {
        return Ok(Value::Bool(true));
    }
    let (last, init) = args.split_last().unwrap();
    for expr in init {
        if !eval(expr, env)?.is_truthy() {
            return Ok(Value::Bool(false));
        }
    }
    eval(last, env)
}

fn or_form(args: &[Value], env: &EnvRef) -> Result<Value> {
    for expr in args {
        let value = eval(expr, env)?;
        if value.is_truthy() {
            return Ok(value);
        }
    }
    Ok(Value::Bool(false))
}

fn lambda_form(args: &[Value], env: &EnvRef) -> Result<Value> {
    if args.len() < 2 {
        return Err(arity("lambda", "at least 2", args.len()));
    }
    let params = param_names(&args[0])?;
    let body = args[1..].to_vec();
    // The closure captures a fresh child of the defining frame.
    Ok(Value::Lambda(Rc::new(Lambda {
        params,
        body,
        env: Environment::child(env),
    })))
}

fn param_names(params: &Value) -> Result<Vec<String>> {
    let items = params.list_to_vec().map_err(|_| Error::TypeError {
        expected: "parameter list".to_string(),
        got: params.type_name().to_string(),
    })?;
    items
        .iter()
        .map(|item| match item.as_symbol() {
            Some(name) => Ok(name.to_string()),
            None => Err(Error::TypeError {
                expected: "parameter symbol".to_string(),
                got: item.type_name().to_string(),
            }),
        })
        .collect()
}

fn define_form(args: &[Value], env: &EnvRef) -> Result<Value> {
    if args.len() < 2 {
        return Err(arity("define", "at least 2", args.len()));
    }

    // (define (name p1 .. pk) body1 ..) is sugar for
    // (define name (lambda (p1 .. pk) body1 ..))
    if args[0].is_pair() {
        let header = args[0].list_to_vec()?;
        let name = header[0].as_symbol().ok_or_else(|| Error::TypeError {
            expected: "function name symbol".to_string(),
            got: header[0].type_name().to_string(),
        })?;

        let mut lambda_args = vec![Value::list(header[1..].to_vec())];
        lambda_args.extend_from_slice(&args[1..]);
        let lambda = lambda_form(&lambda_args, env)?;

        env.borrow_mut().define(name, lambda);
        return Ok(Value::Nil);
    }

    if let Some(name) = args[0].as_symbol() {
        if args.len() != 2 {
            return Err(arity("define", "exactly 2", args.len()));
        }
        let value = eval(&args[1], env)?;
        env.borrow_mut().define(name, value);
        return Ok(Value::Nil);
    }

    Err(Error::TypeError {
        expected: "symbol or function header".to_string(),
        got: args[0].type_name().to_string(),
    })
}

fn cond_form(args: &[Value], env: &EnvRef) -> Result<Value> {
    for clause in args {
        let items = clause.list_to_vec().map_err(|_| Error::TypeError {
            expected: "cond clause list".to_string(),
            got: clause.type_name().to_string(),
        })?;
        if items.is_empty() {
            return Err(Error::runtime("cond clause cannot be empty"));
        }

        // `else` in test position is a literal true.
        let test = if items[0].as_symbol() == Some("else") {
            Value::Bool(true)
        } else {
            eval(&items[0], env)?
        };

        if test.is_truthy() {
            if items.len() == 1 {
                return Ok(test);
            }
            return eval_sequence(&items[1..], env);
        }
    }
    Ok(Value::Nil)
}

fn begin_form(args: &[Value], env: &EnvRef) -> Result<Value> {
    eval_sequence(args, env)
}

fn let_form(args: &[Value], env: &EnvRef) -> Result<Value> {
    if args.is_empty() {
        return Err(arity("let", "at least 1", args.len()));
    }

    let bindings = args[0].list_to_vec().map_err(|_| Error::TypeError {
        expected: "let binding list".to_string(),
        got: args[0].type_name().to_string(),
    })?;

    // Every init expression is evaluated in the outer environment
    // before the new frame exists.
    let mut bound = Vec::with_capacity(bindings.len());
    for binding in &bindings {
        let items = binding.list_to_vec().map_err(|_| Error::TypeError {
            expected: "(name value) binding".to_string(),
            got: binding.type_name().to_string(),
        })?;
        if items.len() != 2 {
            return Err(Error::runtime("let binding must be (name value)"));
        }
        let name = items[0].as_symbol().ok_or_else(|| Error::TypeError {
            expected: "binding name symbol".to_string(),
            got: items[0].type_name().to_string(),
        })?;
        bound.push((name.to_string(), eval(&items[1], env)?));
    }

    let frame = Environment::child(env);
    for (name, value) in bound {
        frame.borrow_mut().define(name, value);
    }
    eval_sequence(&args[1..], &frame)
}
