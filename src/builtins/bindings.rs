//=====================================================
// File: builtins/bindings.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Binding declaration commands
// Objective: rakha declares or reassigns a mutable name, sadai_rakha declares a constant
//=====================================================

use crate::interpreter::errors::{RuntimeError, RuntimeResult};
use crate::interpreter::value::Value;
use crate::parser::scan::is_identifier;
use crate::runtime::Bindings;

pub fn rakha(bindings: &mut Bindings, args: &[Value]) -> RuntimeResult<Value> {
    let name = binding_name("rakha", &args[0])?;
    bindings.declare_mutable(&name, args[1].clone())?;
    Ok(Value::Undefined)
}

pub fn sadai_rakha(bindings: &mut Bindings, args: &[Value]) -> RuntimeResult<Value> {
    let name = binding_name("sadai_rakha", &args[0])?;
    bindings.declare_immutable(&name, args[1].clone())?;
    Ok(Value::Undefined)
}

// The name argument is stringified, so `rakha("x", 1)` and `rakha(label, 1)` both work.
fn binding_name(builtin: &str, value: &Value) -> RuntimeResult<String> {
    let name = value.to_string();
    if is_identifier(&name) {
        Ok(name)
    } else {
        Err(RuntimeError::type_error(format!(
            "{builtin} needs an identifier as the binding name, got {name:?}"
        )))
    }
}


//=====================================================
// End of file
//=====================================================
