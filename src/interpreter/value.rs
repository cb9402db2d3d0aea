//=====================================================
// File: interpreter/value.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Bhanai runtime value model
// Objective: Tagged values with shared, in-place mutable arrays and objects plus
//            the truthiness, equality, ordering and text-form rules of the language
//=====================================================

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use super::errors::{RuntimeError, RuntimeResult};

//=====================================================
// Section 1.0 - Value Types
//=====================================================

pub type ArrayRef = Rc<RefCell<Vec<Value>>>;
pub type ObjectRef = Rc<RefCell<IndexMap<String, Value>>>;

/// Runtime value. Arrays and objects are shared handles: cloning a value
/// aliases the same storage, so mutation through one alias is seen by all.
#[derive(Debug, Clone)]
pub enum Value {
    Number(f64),
    String(String),
    Boolean(bool),
    Array(ArrayRef),
    Object(ObjectRef),
    Undefined,
}

impl Value {
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items)))
    }

    pub fn object(entries: IndexMap<String, Value>) -> Self {
        Value::Object(Rc::new(RefCell::new(entries)))
    }

    pub fn string(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Undefined => "undefined",
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(flag) => *flag,
            Value::Number(number) => *number != 0.0 && !number.is_nan(),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
            Value::Undefined => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    //=================================================
    // Section 1.1 - Equality & Ordering
    //=================================================

    /// Exact equality: never coerces across kinds. Arrays and objects compare by
    /// identity of the shared storage.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Undefined, Value::Undefined) => true,
            _ => false,
        }
    }

    /// Natural order between two values of the same orderable kind. `None` means
    /// the operands are unordered (a NaN is involved).
    pub fn compare(&self, other: &Value) -> RuntimeResult<Option<Ordering>> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Ok(a.partial_cmp(b)),
            (Value::String(a), Value::String(b)) => Ok(Some(a.cmp(b))),
            (Value::Boolean(a), Value::Boolean(b)) => Ok(Some(a.cmp(b))),
            _ => Err(RuntimeError::type_error(format!(
                "cannot order {} against {}",
                self.type_name(),
                other.type_name()
            ))),
        }
    }

    //=================================================
    // Section 1.2 - Text Forms
    //=================================================

    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Number(number) => number_to_json(*number),
            Value::String(text) => JsonValue::String(text.clone()),
            Value::Boolean(flag) => JsonValue::Bool(*flag),
            Value::Array(items) => {
                JsonValue::Array(items.borrow().iter().map(Value::to_json).collect())
            }
            Value::Object(entries) => JsonValue::Object(
                entries
                    .borrow()
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Value::Undefined => JsonValue::Null,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => *a.borrow() == *b.borrow(),
            (Value::Object(a), Value::Object(b)) => *a.borrow() == *b.borrow(),
            _ => self.strict_equals(other),
        }
    }
}

/// Arrays render as compact JSON, objects as two-space indented JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(number) => write!(f, "{}", format_number(*number)),
            Value::String(text) => write!(f, "{text}"),
            Value::Boolean(flag) => write!(f, "{flag}"),
            Value::Array(_) => write!(f, "{}", self.to_json()),
            Value::Object(_) => write!(f, "{:#}", self.to_json()),
            Value::Undefined => write!(f, "undefined"),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

//=====================================================
// Section 2.0 - Number Formatting
//=====================================================

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
const DECIMAL_EXPONENTS: RangeInclusive<i32> = -6..=20;

pub fn format_number(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_string()
    } else if number.is_infinite() {
        let text = if number > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if number == 0.0 {
        "0".to_string()
    } else {
        decimal_or_exponent(number)
    }
}

// Plain decimal for exponents -6 through 20, otherwise `1.5e-7` / `1e+21`.
fn decimal_or_exponent(number: f64) -> String {
    let scientific = format!("{number:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{number}");
    };
    match exponent.parse::<i32>() {
        Ok(exponent) if !DECIMAL_EXPONENTS.contains(&exponent) => {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{}", exponent.unsigned_abs())
        }
        _ => format!("{number}"),
    }
}

/// Parses a complete decimal numeric literal (sign, fraction and exponent allowed).
/// Words such as `inf` or `NaN` are not numbers here.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let numeric = text
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'));
    if !numeric || !text.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok()
}

fn number_to_json(number: f64) -> JsonValue {
    if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER {
        JsonValue::from(number as i64)
    } else {
        serde_json::Number::from_f64(number)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_print_without_fraction() {
        assert_eq!(Value::Number(8.0).to_string(), "8");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(-0.0).to_string(), "0");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn extreme_magnitudes_switch_to_exponent_form() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-1.5e-9), "-1.5e-9");
    }

    #[test]
    fn collections_render_as_json() {
        let array = Value::array(vec![1.0.into(), "a".into(), Value::Undefined]);
        assert_eq!(array.to_string(), r#"[1,"a",null]"#);

        let mut entries = IndexMap::new();
        entries.insert("b".to_string(), Value::Number(2.0));
        entries.insert("a".to_string(), Value::Boolean(true));
        assert_eq!(
            Value::object(entries).to_string(),
            "{\n  \"b\": 2,\n  \"a\": true\n}"
        );
    }

    #[test]
    fn strict_equality_does_not_coerce() {
        assert!(!Value::Number(1.0).strict_equals(&Value::string("1")));
        assert!(!Value::Boolean(true).strict_equals(&Value::Number(1.0)));
        let shared = Value::array(vec![]);
        assert!(shared.strict_equals(&shared.clone()));
        assert!(!shared.strict_equals(&Value::array(vec![])));
    }

    #[test]
    fn numeric_literals() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" -3.5 "), Some(-3.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("e"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("12abc"), None);
    }

    #[test]
    fn mixed_kinds_are_not_ordered() {
        let err = Value::Number(1.0).compare(&Value::string("2")).unwrap_err();
        assert!(matches!(err, RuntimeError::Type(_)));
    }

    #[test]
    fn truthiness_follows_language_rules() {
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::string("").is_truthy());
        assert!(!Value::Undefined.is_truthy());
        assert!(Value::array(vec![]).is_truthy());
        assert!(Value::string("0").is_truthy());
    }
}

//=====================================================
// End of file
//=====================================================
