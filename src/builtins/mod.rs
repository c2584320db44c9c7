//! Builtin procedure library
//!
//! Builtins are ordinary first-class `Value`s bound into the global
//! frame at session start; each module covers one concern and exposes a
//! `register` function collected by [`register_all`].

pub mod comparison;
pub mod core;
pub mod lists;
pub mod math;
pub mod type_predicates;

use crate::error::{Error, Result};
use crate::runtime::{Builtin, BuiltinFn, EnvRef, Value};

/// Registers every builtin into the given (global) frame
pub fn register_all(env: &EnvRef) {
    core::register(env);
    type_predicates::register(env);
    lists::register(env);
    math::register(env);
    comparison::register(env);
}

/// Binds one builtin under its display name
pub(crate) fn bind(env: &EnvRef, name: &'static str, func: BuiltinFn) {
    env.borrow_mut()
        .define(name, Value::Builtin(Builtin { name, func }));
}

pub(crate) fn require_exact(name: &str, args: &[Value], count: usize) -> Result<()> {
    if args.len() != count {
        return Err(Error::ArityMismatch {
            name: name.to_string(),
            expected: format!("exactly {}", count),
            got: args.len(),
        });
    }
    Ok(())
}

pub(crate) fn require_at_least(name: &str, args: &[Value], count: usize) -> Result<()> {
    if args.len() < count {
        return Err(Error::ArityMismatch {
            name: name.to_string(),
            expected: format!("at least {}", count),
            got: args.len(),
        });
    }
    Ok(())
}

pub(crate) fn require_at_most(name: &str, args: &[Value], count: usize) -> Result<()> {
    if args.len() > count {
        return Err(Error::ArityMismatch {
            name: name.to_string(),
            expected: format!("at most {}", count),
            got: args.len(),
        });
    }
    Ok(())
}
