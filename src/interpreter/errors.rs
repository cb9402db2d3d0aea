//=====================================================
// File: interpreter/errors.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Bhanai error taxonomy
// Objective: Classify every parse, evaluation and dispatch failure with a stable
//            error code and carry the failing source line to the caller
//=====================================================

use std::fmt;

use thiserror::Error;

//=====================================================
// Section 1.0 - Runtime Errors
//=====================================================

/// Failure raised anywhere in the evaluator, parser or dispatcher.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("Syntax error: {0}")]
    Syntax(String),
    #[error("{name} expects {expected} argument(s), got {found}")]
    Arity {
        name: String,
        expected: String,
        found: usize,
    },
    #[error("Variable {0} is not defined.")]
    UndefinedVariable(String),
    #[error("Function {0} is not defined.")]
    UndefinedFunction(String),
    #[error("{0} is a constant and cannot be changed.")]
    ConstantReassignment(String),
    #[error("{0} is already defined.")]
    AlreadyDefined(String),
    #[error("Type error: {0}")]
    Type(String),
    #[error("Range error: {0}")]
    Range(String),
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Modulo by zero.")]
    ModuloByZero,
    #[error("Input is not a valid number: {0:?}")]
    InputFormat(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Console error: {0}")]
    Io(String),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;

impl RuntimeError {
    pub fn syntax(message: impl Into<String>) -> Self {
        RuntimeError::Syntax(message.into())
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        RuntimeError::Type(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RuntimeError::Syntax(_) => ErrorCode::Syntax,
            RuntimeError::Arity { .. } => ErrorCode::Arity,
            RuntimeError::UndefinedVariable(_) | RuntimeError::UndefinedFunction(_) => {
                ErrorCode::UndefinedName
            }
            RuntimeError::ConstantReassignment(_) | RuntimeError::AlreadyDefined(_) => {
                ErrorCode::Reassignment
            }
            RuntimeError::Type(_) => ErrorCode::TypeMismatch,
            RuntimeError::Range(_) => ErrorCode::Range,
            RuntimeError::DivisionByZero | RuntimeError::ModuloByZero => ErrorCode::Arithmetic,
            RuntimeError::InputFormat(_) => ErrorCode::InputFormat,
            RuntimeError::UnknownCommand(_) => ErrorCode::UnknownCommand,
            RuntimeError::Io(_) => ErrorCode::Io,
        }
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        RuntimeError::Io(value.to_string())
    }
}

//=====================================================
// Section 2.0 - Error Codes
//=====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Syntax,
    Arity,
    UndefinedName,
    Reassignment,
    TypeMismatch,
    Range,
    Arithmetic,
    InputFormat,
    UnknownCommand,
    Io,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Syntax => "E001",
            ErrorCode::Arity => "E002",
            ErrorCode::UndefinedName => "E003",
            ErrorCode::Reassignment => "E004",
            ErrorCode::TypeMismatch => "E005",
            ErrorCode::Range => "E006",
            ErrorCode::Arithmetic => "E007",
            ErrorCode::InputFormat => "E008",
            ErrorCode::UnknownCommand => "E009",
            ErrorCode::Io => "E010",
        }
    }

    pub fn kind(self) -> &'static str {
        match self {
            ErrorCode::Syntax => "SyntaxError",
            ErrorCode::Arity => "ArityError",
            ErrorCode::UndefinedName => "UndefinedNameError",
            ErrorCode::Reassignment => "ReassignmentError",
            ErrorCode::TypeMismatch => "TypeError",
            ErrorCode::Range => "RangeError",
            ErrorCode::Arithmetic => "ArithmeticError",
            ErrorCode::InputFormat => "InputFormatError",
            ErrorCode::UnknownCommand => "UnknownCommandError",
            ErrorCode::Io => "IoError",
        }
    }
}

//=====================================================
// Section 3.0 - Script Errors
//=====================================================

/// Error surfaced by a script run: the classified failure plus the source line
/// of the logical line that raised it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptError {
    pub code: ErrorCode,
    pub message: String,
    pub line: Option<usize>,
}

impl ScriptError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            line: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        if self.line.is_none() {
            self.line = Some(line);
        }
        self
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<RuntimeError> for ScriptError {
    fn from(value: RuntimeError) -> Self {
        ScriptError::new(value.code(), value.to_string())
    }
}

//=====================================================
// End of file
//=====================================================
