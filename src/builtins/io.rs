//=====================================================
// File: builtins/io.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Console builtins
// Objective: Printing and the blocking string/number prompts
//=====================================================

use crate::console::Console;
use crate::interpreter::errors::{RuntimeError, RuntimeResult};
use crate::interpreter::value::{Value, parse_number};

/// Prints every argument's trimmed text form joined by single spaces.
pub fn bhanai(console: &mut dyn Console, args: &[Value]) -> RuntimeResult<Value> {
    let line = args
        .iter()
        .map(|arg| arg.to_string().trim().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    console.write_line(&line)?;
    Ok(Value::Undefined)
}

pub fn sodh_string(console: &mut dyn Console, args: &[Value]) -> RuntimeResult<Value> {
    let answer = ask(console, &args[0])?;
    Ok(Value::String(answer))
}

pub fn sodh_number(console: &mut dyn Console, args: &[Value]) -> RuntimeResult<Value> {
    let answer = ask(console, &args[0])?;
    parse_number(&answer)
        .map(Value::Number)
        .ok_or(RuntimeError::InputFormat(answer))
}

fn ask(console: &mut dyn Console, message: &Value) -> RuntimeResult<String> {
    match console.prompt(&message.to_string())? {
        Some(answer) => Ok(answer.trim().to_string()),
        None => Err(RuntimeError::Io("input ended before a prompt was answered".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;

    #[test]
    fn print_joins_trimmed_arguments() {
        let mut console = BufferConsole::new();
        let args = [Value::string("  hello "), Value::Number(8.0), Value::Undefined];
        bhanai(&mut console, &args).unwrap();
        assert_eq!(console.output(), ["hello 8 undefined"]);
    }

    #[test]
    fn number_prompt_rejects_text() {
        let mut console = BufferConsole::with_input(["  12.5 \n", "abc"]);
        let value = sodh_number(&mut console, &[Value::string("n? ")]).unwrap();
        assert_eq!(value, Value::Number(12.5));
        let err = sodh_number(&mut console, &[Value::string("n? ")]).unwrap_err();
        assert_eq!(err, RuntimeError::InputFormat("abc".into()));
        assert_eq!(console.prompts(), ["n? ", "n? "]);
    }

    #[test]
    fn closed_input_is_an_io_error() {
        let mut console = BufferConsole::new();
        let err = sodh_string(&mut console, &[Value::string("name? ")]).unwrap_err();
        assert!(matches!(err, RuntimeError::Io(_)));
    }
}

//=====================================================
// End of file
//=====================================================
