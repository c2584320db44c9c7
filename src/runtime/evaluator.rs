//! Recursive interpreter over the `Value` tree

use crate::error::{Error, Result};
use crate::lexer::SExprScanner;
use crate::parser::SExprParser;
use crate::runtime::environment::{EnvRef, Environment};
use crate::runtime::special_forms::special_form;
use crate::runtime::Value;

/// Evaluates one expression in the given environment
///
/// Dispatch order: self-evaluating atoms and procedures, the prohibited
/// empty list, symbol lookup, then compound forms. For a compound form
/// the head symbol is checked against the special-form table *before*
/// it is evaluated; otherwise the head and the operands are evaluated
/// strictly left-to-right and the result applied.
pub fn eval(expr: &Value, env: &EnvRef) -> Result<Value> {
    match expr {
        Value::Bool(_)
        | Value::Number(_)
        | Value::Str(_)
        | Value::Builtin(_)
        | Value::Lambda(_) => Ok(expr.clone()),

        Value::Nil => Err(Error::runtime("Evaluating nil is prohibited")),

        Value::Symbol(name) => env.borrow().lookup(name),

        Value::Pair(_) => {
            let items = expr
                .list_to_vec()
                .map_err(|_| Error::runtime("Malformed application: improper operand list"))?;
            let (head, tail) = items.split_first().expect("pair spine is never empty");

            if let Some(name) = head.as_symbol() {
                if let Some(form) = special_form(name) {
                    return form(tail, env);
                }
            }

            let proc = eval(head, env)?;
            let mut args = Vec::with_capacity(tail.len());
            for operand in tail {
                args.push(eval(operand, env)?);
            }
            apply(&proc, &args, env)
        }
    }
}

/// Evaluates expressions in order, returning the last value
///
/// An empty sequence yields Nil.
pub fn eval_sequence(exprs: &[Value], env: &EnvRef) -> Result<Value> {
    let mut last = Value::Nil;
    for expr in exprs {
        last = eval(expr, env)?;
    }
    Ok(last)
}

/// Invokes a procedure value on already-evaluated arguments
///
/// Builtins receive the caller's environment; lambdas get a fresh
/// child frame of their captured environment with the parameters bound
/// in order.
pub fn apply(proc: &Value, args: &[Value], env: &EnvRef) -> Result<Value> {
    match proc {
        Value::Builtin(builtin) => (builtin.func)(args, env),
        Value::Lambda(lambda) => {
            if args.len() != lambda.params.len() {
                return Err(Error::ArityMismatch {
                    name: "#<procedure>".to_string(),
                    expected: format!("exactly {}", lambda.params.len()),
                    got: args.len(),
                });
            }
            let frame = Environment::child(&lambda.env);
            for (param, arg) in lambda.params.iter().zip(args) {
                frame.borrow_mut().define(param.clone(), arg.clone());
            }
            eval_sequence(&lambda.body, &frame)
        }
        _ => Err(Error::NotCallable {
            type_name: proc.type_name().to_string(),
        }),
    }
}

/// Interpreter session: owns the global frame
pub struct Evaluator {
    env: EnvRef,
}

impl Evaluator {
    /// Creates a new session with a freshly populated global frame
    pub fn new() -> Self {
        Evaluator {
            env: Environment::global(),
        }
    }

    /// The session's global frame
    pub fn env(&self) -> &EnvRef {
        &self.env
    }

    /// Evaluates one already-parsed expression at the top level
    pub fn eval(&self, expr: &Value) -> Result<Value> {
        eval(expr, &self.env)
    }

    /// Evaluates parsed expressions in order, returning the last value
    pub fn execute(&self, exprs: &[Value]) -> Result<Value> {
        eval_sequence(exprs, &self.env)
    }

    /// Full pipeline convenience: scan, parse, and evaluate source text
    pub fn eval_source(&self, source: &str) -> Result<Value> {
        let tokens = SExprScanner::new(source).scan_tokens()?;
        let exprs = SExprParser::new(tokens).parse_all()?;
        self.execute(&exprs)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
