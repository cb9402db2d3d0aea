//=====================================================
// File: lib.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Bhanai library root
// Objective: Expose the interpreter, its runtime environment and the console
//            transport to the `chalau` and `bhanai_examples` binaries
//=====================================================

pub mod builtins;
pub mod config;
pub mod console;
pub mod interpreter;
pub mod logging;
pub mod parser;
pub mod runtime;

pub use config::InterpreterConfig;
pub use console::{BufferConsole, Console, StdConsole};
pub use interpreter::{ErrorCode, Interpreter, RuntimeError, ScriptError, Value};
pub use runtime::Environment;

/// File extension every Bhanai script must carry.
pub const SOURCE_EXTENSION: &str = "bhn";

pub fn has_source_extension(path: &std::path::Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

//=====================================================
// End of file
//=====================================================
