//=====================================================
// File: builtins/arith.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Arithmetic and logical builtins
// Objective: Numeric operators, the number-or-text additive overload and the
//            truthiness based boolean operators
//=====================================================

use super::expect_number;
use crate::interpreter::errors::{RuntimeError, RuntimeResult};
use crate::interpreter::value::Value;

//=====================================================
// Section 1.0 - Additive Overload
//=====================================================

/// Numeric sum when every operand is a number, otherwise the in-order
/// concatenation of every operand's text form.
pub fn sum_or_concat(operands: &[Value]) -> Value {
    let numbers: Option<Vec<f64>> = operands.iter().map(Value::as_number).collect();
    match numbers {
        Some(numbers) => Value::Number(numbers.iter().sum()),
        None => Value::String(operands.iter().map(Value::to_string).collect()),
    }
}

pub fn jod(args: &[Value]) -> RuntimeResult<Value> {
    Ok(sum_or_concat(args))
}

//=====================================================
// Section 2.0 - Numeric Operators
//=====================================================

pub fn ghata(args: &[Value]) -> RuntimeResult<Value> {
    let (a, b) = operands("ghata", args)?;
    Ok(Value::Number(a - b))
}

pub fn guna(args: &[Value]) -> RuntimeResult<Value> {
    let (a, b) = operands("guna", args)?;
    Ok(Value::Number(a * b))
}

pub fn bhaag(args: &[Value]) -> RuntimeResult<Value> {
    let (a, b) = operands("bhaag", args)?;
    if b == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    Ok(Value::Number(a / b))
}

pub fn shesh(args: &[Value]) -> RuntimeResult<Value> {
    let (a, b) = operands("shesh", args)?;
    if b == 0.0 {
        return Err(RuntimeError::ModuloByZero);
    }
    Ok(Value::Number(a % b))
}

fn operands(builtin: &str, args: &[Value]) -> RuntimeResult<(f64, f64)> {
    Ok((expect_number(builtin, args, 0)?, expect_number(builtin, args, 1)?))
}

//=====================================================
// Section 3.0 - Logical Operators
//=====================================================

pub fn ra(args: &[Value]) -> RuntimeResult<Value> {
    Ok(Value::Boolean(args[0].is_truthy() && args[1].is_truthy()))
}

pub fn athawa(args: &[Value]) -> RuntimeResult<Value> {
    Ok(Value::Boolean(args[0].is_truthy() || args[1].is_truthy()))
}

pub fn hoina(args: &[Value]) -> RuntimeResult<Value> {
    Ok(Value::Boolean(!args[0].is_truthy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_overload() {
        assert_eq!(sum_or_concat(&[1.0.into(), 2.0.into()]), Value::Number(3.0));
        assert_eq!(sum_or_concat(&["a".into(), 1.0.into()]), Value::string("a1"));
        assert_eq!(
            sum_or_concat(&[1.0.into(), 2.0.into(), "x".into()]),
            Value::string("12x")
        );
    }

    #[test]
    fn division_by_zero_fails_for_any_dividend() {
        for dividend in [0.0, 1.0, -7.5, 1e300] {
            assert_eq!(
                bhaag(&[dividend.into(), 0.0.into()]),
                Err(RuntimeError::DivisionByZero)
            );
        }
        assert_eq!(shesh(&[5.0.into(), 0.0.into()]), Err(RuntimeError::ModuloByZero));
        assert_eq!(bhaag(&[9.0.into(), 2.0.into()]), Ok(Value::Number(4.5)));
    }

    #[test]
    fn numeric_operators_reject_text() {
        let err = guna(&["2".into(), 3.0.into()]).unwrap_err();
        assert!(matches!(err, RuntimeError::Type(_)));
    }

    #[test]
    fn logic_uses_truthiness() {
        assert_eq!(ra(&[1.0.into(), "".into()]), Ok(Value::Boolean(false)));
        assert_eq!(athawa(&[0.0.into(), "x".into()]), Ok(Value::Boolean(true)));
        assert_eq!(hoina(&[Value::Undefined]), Ok(Value::Boolean(true)));
    }
}

//=====================================================
// End of file
//=====================================================
