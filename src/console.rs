//=====================================================
// File: console.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Console transport for Bhanai scripts
// Objective: Line output and blocking prompts over stdio, plus an in-memory
//            console for embedding and tests
//=====================================================

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

//=====================================================
// Section 1.0 - Console Trait
//=====================================================

pub trait Console {
    /// Emit one complete output line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Show `message` and block for one line of input. `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>>;
}

//=====================================================
// Section 2.0 - Standard Streams
//=====================================================

#[derive(Debug)]
pub struct StdConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = self.stdout.lock();
        writeln!(out, "{line}")?;
        out.flush()
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        {
            let mut out = self.stdout.lock();
            write!(out, "{message}")?;
            out.flush()?;
        }
        let mut answer = String::new();
        let read = self.stdin.lock().read_line(&mut answer)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(answer))
    }
}

//=====================================================
// Section 3.0 - Buffered Console
//=====================================================

/// Console backed by queued input lines and captured output.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    prompts: Vec<String>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn into_output(self) -> Vec<String> {
        self.output
    }
}

impl Console for BufferConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.prompts.push(message.to_string());
        Ok(self.input.pop_front())
    }
}

//=====================================================
// End of file
//=====================================================
