//=====================================================
// File: builtins/collections.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Array and object builtins
// Objective: In-place push/pop on shared arrays and key/value listings on objects
//=====================================================

use super::{expect_array, expect_object};
use crate::interpreter::errors::RuntimeResult;
use crate::interpreter::value::Value;

pub fn lambai_list(args: &[Value]) -> RuntimeResult<Value> {
    let items = expect_array("lambaiList", args, 0)?;
    Ok(Value::Number(items.borrow().len() as f64))
}

/// Appends in place and returns the same (aliased) array.
pub fn thap_list(args: &[Value]) -> RuntimeResult<Value> {
    let items = expect_array("thapList", args, 0)?;
    items.borrow_mut().push(args[1].clone());
    Ok(args[0].clone())
}

/// Removes the last element in place; `undefined` for an empty array.
pub fn hatau_list(args: &[Value]) -> RuntimeResult<Value> {
    let items = expect_array("hatauList", args, 0)?;
    Ok(items.borrow_mut().pop().unwrap_or(Value::Undefined))
}

pub fn chaabi_list(args: &[Value]) -> RuntimeResult<Value> {
    let entries = expect_object("chaabiList", args, 0)?;
    let keys = entries.borrow().keys().cloned().map(Value::String).collect();
    Ok(Value::array(keys))
}

pub fn maan_list(args: &[Value]) -> RuntimeResult<Value> {
    let entries = expect_object("maanList", args, 0)?;
    let values = entries.borrow().values().cloned().collect();
    Ok(Value::array(values))
}


//=====================================================
// End of file
//=====================================================
