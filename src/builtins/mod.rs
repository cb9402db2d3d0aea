//=====================================================
// File: builtins/mod.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Bhanai builtin catalog and command dispatch
// Objective: Register every native operation with its arity and operation kind,
//            and route statement commands and expression calls through one
//            arity-checked invoke path
//=====================================================

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::console::Console;
use crate::interpreter::errors::{RuntimeError, RuntimeResult};
use crate::interpreter::value::{ArrayRef, ObjectRef, Value};
use crate::runtime::Bindings;

pub mod arith;
pub mod bindings;
pub mod collections;
pub mod io;
pub mod strings;

//=====================================================
// Section 1.0 - Catalog Types
//=====================================================

pub type PureFn = fn(&[Value]) -> RuntimeResult<Value>;
pub type BindingFn = fn(&mut Bindings, &[Value]) -> RuntimeResult<Value>;
pub type ConsoleFn = fn(&mut dyn Console, &[Value]) -> RuntimeResult<Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(expected) => expected == count,
            Arity::Variadic => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(count) => write!(f, "{count}"),
            Arity::Variadic => write!(f, "any number of"),
        }
    }
}

/// What a builtin touches when it runs.
#[derive(Clone, Copy)]
pub enum Operation {
    /// Computes a value from its arguments only.
    Pure(PureFn),
    /// Declares bindings in the runtime environment.
    Binding(BindingFn),
    /// Performs console I/O.
    Console(ConsoleFn),
}

impl Operation {
    pub fn is_pure(&self) -> bool {
        matches!(self, Operation::Pure(_))
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Pure(_) => write!(f, "Pure"),
            Operation::Binding(_) => write!(f, "Binding"),
            Operation::Console(_) => write!(f, "Console"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Builtin {
    Function { arity: Arity, operation: Operation },
    Constant(Value),
}

//=====================================================
// Section 2.0 - Registry
//=====================================================

#[derive(Debug, Clone)]
pub struct Builtins {
    entries: HashMap<String, Builtin>,
}

impl Builtins {
    pub fn with_defaults() -> Self {
        let mut builtins = Self {
            entries: HashMap::new(),
        };

        builtins.register("rakha", Arity::Exact(2), Operation::Binding(bindings::rakha));
        builtins.register(
            "sadai_rakha",
            Arity::Exact(2),
            Operation::Binding(bindings::sadai_rakha),
        );

        builtins.register("bhanai", Arity::Variadic, Operation::Console(io::bhanai));
        builtins.register("sodhString", Arity::Exact(1), Operation::Console(io::sodh_string));
        builtins.register("sodhNumber", Arity::Exact(1), Operation::Console(io::sodh_number));

        builtins.register("jod", Arity::Exact(2), Operation::Pure(arith::jod));
        builtins.register("ghata", Arity::Exact(2), Operation::Pure(arith::ghata));
        builtins.register("guna", Arity::Exact(2), Operation::Pure(arith::guna));
        builtins.register("bhaag", Arity::Exact(2), Operation::Pure(arith::bhaag));
        builtins.register("shesh", Arity::Exact(2), Operation::Pure(arith::shesh));
        builtins.register("ra", Arity::Exact(2), Operation::Pure(arith::ra));
        builtins.register("athawa", Arity::Exact(2), Operation::Pure(arith::athawa));
        builtins.register("hoina", Arity::Exact(1), Operation::Pure(arith::hoina));
        builtins.register_constant("sachho", Value::Boolean(true));
        builtins.register_constant("jutho", Value::Boolean(false));

        builtins.register("jodString", Arity::Exact(2), Operation::Pure(strings::jod_string));
        builtins.register("lambai", Arity::Exact(1), Operation::Pure(strings::lambai));
        builtins.register("tola", Arity::Exact(3), Operation::Pure(strings::tola));
        builtins.register("badal", Arity::Exact(3), Operation::Pure(strings::badal));
        builtins.register("thuloAkshar", Arity::Exact(1), Operation::Pure(strings::thulo_akshar));
        builtins.register("sanoAkshar", Arity::Exact(1), Operation::Pure(strings::sano_akshar));
        builtins.register("chhaina", Arity::Exact(2), Operation::Pure(strings::chhaina));
        builtins.register("tukra", Arity::Exact(2), Operation::Pure(strings::tukra));
        builtins.register("safa", Arity::Exact(1), Operation::Pure(strings::safa));
        builtins.register("khoj", Arity::Exact(2), Operation::Pure(strings::khoj));
        builtins.register("ulto", Arity::Exact(1), Operation::Pure(strings::ulto));
        builtins.register("padDaya", Arity::Exact(3), Operation::Pure(strings::pad_daya));
        builtins.register("padBaya", Arity::Exact(3), Operation::Pure(strings::pad_baya));
        builtins.register("shabdaGanti", Arity::Exact(1), Operation::Pure(strings::shabda_ganti));

        builtins.register("lambaiList", Arity::Exact(1), Operation::Pure(collections::lambai_list));
        builtins.register("thapList", Arity::Exact(2), Operation::Pure(collections::thap_list));
        builtins.register("hatauList", Arity::Exact(1), Operation::Pure(collections::hatau_list));
        builtins.register("chaabiList", Arity::Exact(1), Operation::Pure(collections::chaabi_list));
        builtins.register("maanList", Arity::Exact(1), Operation::Pure(collections::maan_list));

        builtins
    }

    pub fn register(&mut self, name: &str, arity: Arity, operation: Operation) {
        self.entries
            .insert(name.to_string(), Builtin::Function { arity, operation });
    }

    pub fn register_constant(&mut self, name: &str, value: Value) {
        self.entries.insert(name.to_string(), Builtin::Constant(value));
    }

    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.entries.get(name)
    }

    pub fn is_function(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(Builtin::Function { .. }))
    }

    /// Arity-checked invocation of the builtin function `name`.
    pub fn invoke(
        &self,
        name: &str,
        args: &[Value],
        bindings: &mut Bindings,
        console: &mut dyn Console,
    ) -> RuntimeResult<Value> {
        let Some(Builtin::Function { arity, operation }) = self.entries.get(name) else {
            return Err(RuntimeError::UnknownCommand(name.to_string()));
        };
        if !arity.accepts(args.len()) {
            return Err(RuntimeError::Arity {
                name: name.to_string(),
                expected: arity.to_string(),
                found: args.len(),
            });
        }
        debug!(builtin = name, argc = args.len(), kind = ?operation, "invoking builtin");
        match operation {
            Operation::Pure(func) => func(args),
            Operation::Binding(func) => func(bindings, args),
            Operation::Console(func) => func(console, args),
        }
    }
}

impl Default for Builtins {
    fn default() -> Self {
        Self::with_defaults()
    }
}

//=====================================================
// Section 3.0 - Argument Helpers
//=====================================================

fn kind_error(builtin: &str, position: usize, expected: &str, found: &Value) -> RuntimeError {
    RuntimeError::type_error(format!(
        "{builtin} expects {expected} as argument {}, got {}",
        position + 1,
        found.type_name()
    ))
}

pub(crate) fn expect_number(builtin: &str, args: &[Value], position: usize) -> RuntimeResult<f64> {
    match &args[position] {
        Value::Number(number) => Ok(*number),
        other => Err(kind_error(builtin, position, "a number", other)),
    }
}

pub(crate) fn expect_string<'a>(
    builtin: &str,
    args: &'a [Value],
    position: usize,
) -> RuntimeResult<&'a str> {
    match &args[position] {
        Value::String(text) => Ok(text),
        other => Err(kind_error(builtin, position, "a string", other)),
    }
}

pub(crate) fn expect_array<'a>(
    builtin: &str,
    args: &'a [Value],
    position: usize,
) -> RuntimeResult<&'a ArrayRef> {
    match &args[position] {
        Value::Array(items) => Ok(items),
        other => Err(kind_error(builtin, position, "an array", other)),
    }
}

pub(crate) fn expect_object<'a>(
    builtin: &str,
    args: &'a [Value],
    position: usize,
) -> RuntimeResult<&'a ObjectRef> {
    match &args[position] {
        Value::Object(entries) => Ok(entries),
        other => Err(kind_error(builtin, position, "an object", other)),
    }
}


//=====================================================
// End of file
//=====================================================
