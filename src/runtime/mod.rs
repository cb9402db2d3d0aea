//=====================================================
// File: runtime/mod.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Bhanai runtime environment
// Objective: Own the mutable and immutable binding tables plus the builtin catalog
//            for exactly one script run, and resolve names across them in order
//=====================================================

use std::collections::HashMap;

use tracing::debug;

use crate::builtins::{Builtin, Builtins};
use crate::console::Console;
use crate::interpreter::errors::{RuntimeError, RuntimeResult};
use crate::interpreter::value::Value;

//=====================================================
// Section 1.0 - Binding Tables
//=====================================================

/// Mutable and immutable bindings. A name lives in at most one of the two tables.
#[derive(Debug, Default, Clone)]
pub struct Bindings {
    mutable: HashMap<String, Value>,
    immutable: HashMap<String, Value>,
}

impl Bindings {
    /// Creates or overwrites a mutable binding. Rejected for immutable names.
    pub fn declare_mutable(&mut self, name: &str, value: Value) -> RuntimeResult<()> {
        if self.immutable.contains_key(name) {
            return Err(RuntimeError::ConstantReassignment(name.to_string()));
        }
        debug!(name, kind = value.type_name(), "binding mutable");
        self.mutable.insert(name.to_string(), value);
        Ok(())
    }

    /// Creates an immutable binding for a name not yet bound in either table.
    pub fn declare_immutable(&mut self, name: &str, value: Value) -> RuntimeResult<()> {
        if self.mutable.contains_key(name) || self.immutable.contains_key(name) {
            return Err(RuntimeError::AlreadyDefined(name.to_string()));
        }
        debug!(name, kind = value.type_name(), "binding immutable");
        self.immutable.insert(name.to_string(), value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.mutable.get(name).or_else(|| self.immutable.get(name))
    }

    pub fn is_immutable(&self, name: &str) -> bool {
        self.immutable.contains_key(name)
    }
}

//=====================================================
// Section 2.0 - Environment
//=====================================================

#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: Bindings,
    builtins: Builtins,
}

impl Environment {
    pub fn new() -> Self {
        Self::with_builtins(Builtins::with_defaults())
    }

    pub fn with_builtins(builtins: Builtins) -> Self {
        Self {
            bindings: Bindings::default(),
            builtins,
        }
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn declare_mutable(&mut self, name: &str, value: Value) -> RuntimeResult<()> {
        self.bindings.declare_mutable(name, value)
    }

    pub fn declare_immutable(&mut self, name: &str, value: Value) -> RuntimeResult<()> {
        self.bindings.declare_immutable(name, value)
    }

    /// Resolves `name` as mutable, then immutable, then builtin constant.
    /// Arrays and objects come back as aliases of the bound storage.
    pub fn lookup(&self, name: &str) -> RuntimeResult<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Ok(value.clone());
        }
        match self.builtins.get(name) {
            Some(Builtin::Constant(value)) => Ok(value.clone()),
            Some(Builtin::Function { .. }) => Err(RuntimeError::type_error(format!(
                "{name} is a builtin function and cannot be used as a value"
            ))),
            None => Err(RuntimeError::UndefinedVariable(name.to_string())),
        }
    }

    pub fn is_builtin_function(&self, name: &str) -> bool {
        self.builtins.is_function(name)
    }

    pub fn invoke_builtin(
        &mut self,
        name: &str,
        args: &[Value],
        console: &mut dyn Console,
    ) -> RuntimeResult<Value> {
        self.builtins.invoke(name, args, &mut self.bindings, console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;

    #[test]
    fn immutable_names_cannot_be_reused() {
        let mut env = Environment::new();
        env.declare_immutable("PI", Value::Number(3.0)).unwrap();
        assert_eq!(
            env.declare_immutable("PI", Value::Number(3.0)),
            Err(RuntimeError::AlreadyDefined("PI".into()))
        );
        assert_eq!(
            env.declare_mutable("PI", Value::Number(4.0)),
            Err(RuntimeError::ConstantReassignment("PI".into()))
        );
        assert_eq!(env.lookup("PI").unwrap(), Value::Number(3.0));
    }

    #[test]
    fn mutable_names_are_overwritten_but_block_constants() {
        let mut env = Environment::new();
        env.declare_mutable("x", Value::Number(1.0)).unwrap();
        env.declare_mutable("x", Value::Number(2.0)).unwrap();
        assert_eq!(env.lookup("x").unwrap(), Value::Number(2.0));
        assert!(matches!(
            env.declare_immutable("x", Value::Number(3.0)),
            Err(RuntimeError::AlreadyDefined(_))
        ));
    }

    #[test]
    fn lookup_falls_back_to_builtin_constants() {
        let mut env = Environment::new();
        assert_eq!(env.lookup("sachho").unwrap(), Value::Boolean(true));
        env.declare_mutable("sachho", Value::Number(0.0)).unwrap();
        assert_eq!(env.lookup("sachho").unwrap(), Value::Number(0.0));
        assert!(matches!(env.lookup("missing"), Err(RuntimeError::UndefinedVariable(_))));
        assert!(matches!(env.lookup("jod"), Err(RuntimeError::Type(_))));
    }

    #[test]
    fn builtins_declare_through_the_environment() {
        let mut env = Environment::new();
        let mut console = BufferConsole::new();
        env.invoke_builtin("rakha", &[Value::string("n"), Value::Number(5.0)], &mut console)
            .unwrap();
        assert_eq!(env.lookup("n").unwrap(), Value::Number(5.0));
        assert!(!env.bindings().is_immutable("n"));
    }
}

//=====================================================
// End of file
//=====================================================
