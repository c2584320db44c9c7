use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::runtime::Value;

/// Shared handle to an environment frame
///
/// Frames are reference-counted so that closures can capture them and
/// outlive the call that created them. A closure bound under a name it
/// captures forms a reference cycle; such cycles live at most until the
/// interpreter session (or a REPL `reset`) ends.
pub type EnvRef = Rc<RefCell<Environment>>;

/// One frame of the lexical environment chain
#[derive(Debug)]
pub struct Environment {
    /// Enclosing frame, `None` for the global frame
    parent: Option<EnvRef>,
    /// Bindings of this frame only
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Creates the global frame, populated with every builtin procedure
    pub fn global() -> EnvRef {
        let env = Rc::new(RefCell::new(Environment {
            parent: None,
            bindings: HashMap::new(),
        }));
        crate::builtins::register_all(&env);
        env
    }

    /// Creates a fresh empty frame whose parent is `parent`
    pub fn child(parent: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Environment {
            parent: Some(parent.clone()),
            bindings: HashMap::new(),
        }))
    }

    /// Binds a name in this frame, overwriting any prior binding here
    ///
    /// Parent frames are never touched.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Looks a name up through the frame chain
    pub fn lookup(&self, name: &str) -> Result<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Ok(value.clone());
        }
        match &self.parent {
            Some(parent) => parent.borrow().lookup(name),
            None => Err(Error::UndefinedVariable {
                name: name.to_string(),
            }),
        }
    }

    /// Checks whether a name is bound in this frame (not the chain)
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}
