//=====================================================
// File: interpreter/mod.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Bhanai script driver
// Objective: Walk logical lines in order, forward statements to the dispatcher and
//            run conditional chains as a small state machine over their clauses
//=====================================================

pub mod errors;
pub mod eval;
pub mod value;

use std::fs;
use std::iter::Peekable;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

pub use errors::{ErrorCode, RuntimeError, RuntimeResult, ScriptError};
pub use eval::Evaluator;
pub use value::Value;

use crate::config::InterpreterConfig;
use crate::console::{Console, StdConsole};
use crate::parser::block::{LineAssembler, LineResult, LogicalLine, collect_block};
use crate::parser::{Clause, LineKind, classify_line, parse_statement};
use crate::runtime::Environment;

//=====================================================
// Section 1.0 - Interpreter
//=====================================================

/// Progress through one `yadi` / `athawa` / `aru` chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainState {
    Searching,
    Satisfied,
}

/// One script run: a fresh environment plus the console it talks to.
pub struct Interpreter<C: Console = StdConsole> {
    env: Environment,
    console: C,
    config: InterpreterConfig,
    /// Clause bodies currently executing, innermost included.
    nesting: usize,
}

impl Default for Interpreter<StdConsole> {
    fn default() -> Self {
        Self::new(StdConsole::new())
    }
}

impl<C: Console> Interpreter<C> {
    pub fn new(console: C) -> Self {
        Self::with_config(console, InterpreterConfig::default())
    }

    pub fn with_config(console: C, config: InterpreterConfig) -> Self {
        Self {
            env: Environment::new(),
            console,
            config,
            nesting: 0,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs a whole script. The first failure stops the run; output produced
    /// before it stays on the console.
    pub fn run_source(&mut self, source: &str) -> Result<(), ScriptError> {
        let mut lines = LineAssembler::new(source).peekable();
        self.run_lines(&mut lines)
    }

    pub fn run_path(&mut self, path: &Path) -> anyhow::Result<()> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        info!(path = %path.display(), "running script");
        self.run_source(&source)?;
        Ok(())
    }

    /// Evaluates a single expression fragment against this run's environment.
    pub fn evaluate(&mut self, fragment: &str) -> RuntimeResult<Value> {
        self.evaluator().evaluate(fragment)
    }

    /// Parses and dispatches one `name(args)` statement.
    pub fn execute_statement(&mut self, text: &str) -> RuntimeResult<Value> {
        let statement = parse_statement(text)?;
        let mut evaluator = self.evaluator();
        let args = statement
            .arguments
            .iter()
            .map(|fragment| evaluator.evaluate(fragment))
            .collect::<RuntimeResult<Vec<_>>>()?;
        debug!(command = statement.command, argc = args.len(), "dispatching statement");
        evaluator.dispatch(statement.command, &args)
    }

    fn evaluator(&mut self) -> Evaluator<'_> {
        Evaluator::with_max_depth(&mut self.env, &mut self.console, self.config.max_depth)
    }

    //=================================================
    // Section 1.1 - Line Walking
    //=================================================

    fn run_lines<I>(&mut self, lines: &mut Peekable<I>) -> Result<(), ScriptError>
    where
        I: Iterator<Item = LineResult>,
    {
        while let Some(line) = lines.next() {
            let line = line?;
            match classify_line(&line.text).map_err(|err| located(err, &line))? {
                LineKind::Statement => {
                    self.execute_statement(&line.text)
                        .map_err(|err| located(err, &line))?;
                }
                LineKind::Clause(Clause::If(_)) => self.run_chain(line, lines)?,
                LineKind::Clause(_) => {
                    let err = RuntimeError::syntax(format!(
                        "{} has no matching yadi clause",
                        line.text
                    ));
                    return Err(located(err, &line));
                }
            }
        }
        Ok(())
    }

    /// Runs the chain opened by `head`. Once a clause has run, later clauses are
    /// neither evaluated nor executed but their bodies are still consumed.
    fn run_chain<I>(
        &mut self,
        head: LogicalLine,
        lines: &mut Peekable<I>,
    ) -> Result<(), ScriptError>
    where
        I: Iterator<Item = LineResult>,
    {
        let indent = head.indent;
        let mut state = ChainState::Searching;
        let mut current = head;
        loop {
            let clause = match classify_line(&current.text).map_err(|err| located(err, &current))? {
                LineKind::Clause(clause) => clause,
                LineKind::Statement => break,
            };
            let take = match (state, &clause) {
                (ChainState::Satisfied, _) => false,
                (ChainState::Searching, Clause::Else) => true,
                (ChainState::Searching, Clause::If(condition) | Clause::Elif(condition)) => self
                    .evaluate(condition)
                    .map_err(|err| located(err, &current))?
                    .is_truthy(),
            };
            debug!(line = current.number, clause = ?clause, take, "conditional clause");
            let is_else = clause == Clause::Else;

            let body = collect_block(lines, current.indent);
            if take {
                state = ChainState::Satisfied;
                self.run_body(body, &current)?;
            }
            if is_else || !continues_chain(lines, indent) {
                break;
            }
            current = match lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => return Err(err),
                None => break,
            };
        }
        Ok(())
    }

    // Nested chains recurse through here, so their depth shares `max_depth`.
    fn run_body(
        &mut self,
        body: Vec<LogicalLine>,
        clause: &LogicalLine,
    ) -> Result<(), ScriptError> {
        if self.nesting >= self.config.max_depth {
            let err = RuntimeError::syntax("conditional blocks nested too deeply");
            return Err(located(err, clause));
        }
        self.nesting += 1;
        let result = self.run_lines(&mut body.into_iter().map(Ok).peekable());
        self.nesting -= 1;
        result
    }
}

// Next line is an `athawa ...:` or `aru:` clause at the chain's own column.
fn continues_chain<I>(lines: &mut Peekable<I>, indent: usize) -> bool
where
    I: Iterator<Item = LineResult>,
{
    matches!(
        lines.peek(),
        Some(Ok(next)) if next.indent == indent
            && matches!(
                classify_line(&next.text),
                Ok(LineKind::Clause(Clause::Elif(_) | Clause::Else))
            )
    )
}

fn located(err: RuntimeError, line: &LogicalLine) -> ScriptError {
    ScriptError::from(err).at_line(line.number)
}


//=====================================================
// End of file
//=====================================================
