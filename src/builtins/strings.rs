//=====================================================
// File: builtins/strings.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: String builtins
// Objective: Case conversion, searching, slicing, splitting and padding over
//            character (not byte) positions
//=====================================================

use super::{expect_number, expect_string};
use crate::interpreter::errors::{RuntimeError, RuntimeResult};
use crate::interpreter::value::Value;

pub fn jod_string(args: &[Value]) -> RuntimeResult<Value> {
    Ok(Value::String(format!("{}{}", args[0], args[1])))
}

/// Character count of a string; arrays report their element count.
pub fn lambai(args: &[Value]) -> RuntimeResult<Value> {
    match &args[0] {
        Value::Array(items) => Ok(Value::Number(items.borrow().len() as f64)),
        _ => {
            let text = expect_string("lambai", args, 0)?;
            Ok(Value::Number(text.chars().count() as f64))
        }
    }
}

/// Substring between two character positions. Positions are truncated, clamped
/// to the string and swapped when reversed.
pub fn tola(args: &[Value]) -> RuntimeResult<Value> {
    let text = expect_string("tola", args, 0)?;
    let chars: Vec<char> = text.chars().collect();
    let start = clamp_position(expect_number("tola", args, 1)?, chars.len());
    let end = clamp_position(expect_number("tola", args, 2)?, chars.len());
    let (from, to) = if start <= end { (start, end) } else { (end, start) };
    Ok(Value::String(chars[from..to].iter().collect()))
}

fn clamp_position(position: f64, len: usize) -> usize {
    if position.is_nan() || position <= 0.0 {
        0
    } else {
        (position.trunc() as usize).min(len)
    }
}

pub fn badal(args: &[Value]) -> RuntimeResult<Value> {
    let text = expect_string("badal", args, 0)?;
    let from = expect_string("badal", args, 1)?;
    let to = expect_string("badal", args, 2)?;
    Ok(Value::String(text.replace(from, to)))
}

pub fn thulo_akshar(args: &[Value]) -> RuntimeResult<Value> {
    Ok(Value::String(expect_string("thuloAkshar", args, 0)?.to_uppercase()))
}

pub fn sano_akshar(args: &[Value]) -> RuntimeResult<Value> {
    Ok(Value::String(expect_string("sanoAkshar", args, 0)?.to_lowercase()))
}

pub fn chhaina(args: &[Value]) -> RuntimeResult<Value> {
    let text = expect_string("chhaina", args, 0)?;
    let needle = expect_string("chhaina", args, 1)?;
    Ok(Value::Boolean(text.contains(needle)))
}

pub fn tukra(args: &[Value]) -> RuntimeResult<Value> {
    let text = expect_string("tukra", args, 0)?;
    let delimiter = expect_string("tukra", args, 1)?;
    let pieces = if delimiter.is_empty() {
        text.chars().map(|ch| Value::String(ch.to_string())).collect()
    } else {
        text.split(delimiter).map(Value::string).collect()
    };
    Ok(Value::array(pieces))
}

pub fn safa(args: &[Value]) -> RuntimeResult<Value> {
    Ok(Value::string(expect_string("safa", args, 0)?.trim()))
}

/// Character index of the first occurrence, `-1` when absent.
pub fn khoj(args: &[Value]) -> RuntimeResult<Value> {
    let text = expect_string("khoj", args, 0)?;
    let needle = expect_string("khoj", args, 1)?;
    let index = text
        .find(needle)
        .map_or(-1.0, |byte| text[..byte].chars().count() as f64);
    Ok(Value::Number(index))
}

pub fn ulto(args: &[Value]) -> RuntimeResult<Value> {
    Ok(Value::String(expect_string("ulto", args, 0)?.chars().rev().collect()))
}

pub fn pad_daya(args: &[Value]) -> RuntimeResult<Value> {
    let (text, fill) = padding("padDaya", args)?;
    Ok(Value::String(format!("{text}{fill}")))
}

pub fn pad_baya(args: &[Value]) -> RuntimeResult<Value> {
    let (text, fill) = padding("padBaya", args)?;
    Ok(Value::String(format!("{fill}{text}")))
}

const MAX_PADDED_LENGTH: f64 = 16_777_216.0;

// Returns the text and the fill needed to reach the target length.
fn padding<'a>(builtin: &str, args: &'a [Value]) -> RuntimeResult<(&'a str, String)> {
    let text = expect_string(builtin, args, 0)?;
    let target = expect_number(builtin, args, 1)?;
    let pad = expect_string(builtin, args, 2)?;
    if target > MAX_PADDED_LENGTH {
        return Err(RuntimeError::Range(format!(
            "{builtin} target length {target} exceeds {MAX_PADDED_LENGTH}"
        )));
    }
    let len = text.chars().count();
    let target = clamp_position(target, usize::MAX);
    if target <= len || pad.is_empty() {
        return Ok((text, String::new()));
    }
    let fill = pad.chars().cycle().take(target - len).collect();
    Ok((text, fill))
}

pub fn shabda_ganti(args: &[Value]) -> RuntimeResult<Value> {
    let text = expect_string("shabdaGanti", args, 0)?;
    Ok(Value::Number(text.split_whitespace().count() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(func: fn(&[Value]) -> RuntimeResult<Value>, args: &[Value]) -> Value {
        func(args).unwrap()
    }

    #[test]
    fn substring_clamps_and_swaps() {
        let text = Value::string("namaste");
        assert_eq!(call(tola, &[text.clone(), 0.0.into(), 4.0.into()]), "nama".into());
        assert_eq!(call(tola, &[text.clone(), 4.0.into(), 0.0.into()]), "nama".into());
        assert_eq!(call(tola, &[text, (-3.0).into(), 99.0.into()]), "namaste".into());
    }

    #[test]
    fn replace_is_literal_and_global() {
        let args: [Value; 3] = ["a.b.c".into(), ".".into(), "-".into()];
        assert_eq!(call(badal, &args), "a-b-c".into());
    }

    #[test]
    fn split_and_search() {
        let pieces = call(tukra, &["a,b,,c".into(), ",".into()]);
        assert_eq!(pieces.to_string(), r#"["a","b","","c"]"#);
        assert_eq!(
            call(khoj, &["नमस्ते world".into(), "world".into()]),
            Value::Number(7.0)
        );
        assert_eq!(call(khoj, &["abc".into(), "z".into()]), Value::Number(-1.0));
    }

    #[test]
    fn padding_repeats_and_truncates_fill() {
        assert_eq!(call(pad_daya, &["7".into(), 4.0.into(), "ab".into()]), "7aba".into());
        assert_eq!(call(pad_baya, &["7".into(), 3.0.into(), "0".into()]), "007".into());
        assert_eq!(call(pad_baya, &["long".into(), 2.0.into(), "0".into()]), "long".into());
    }

    #[test]
    fn word_count_and_reverse() {
        assert_eq!(call(shabda_ganti, &["  one two\tthree ".into()]), Value::Number(3.0));
        assert_eq!(call(ulto, &["abc".into()]), "cba".into());
        assert_eq!(call(lambai, &["नमस्ते".into()]), Value::Number(6.0));
    }

    #[test]
    fn case_conversion_needs_text() {
        assert!(matches!(thulo_akshar(&[Value::Number(1.0)]), Err(RuntimeError::Type(_))));
        assert_eq!(call(sano_akshar, &["ABC".into()]), "abc".into());
    }
}

//=====================================================
// End of file
//=====================================================
