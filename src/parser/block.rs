//=====================================================
// File: parser/block.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Bhanai block assembler
// Objective: Turn raw source lines into logical lines (comments removed, open
//            brackets merged across lines) and cut indentation-delimited bodies
//            for conditional clauses
//=====================================================

use std::iter::{Enumerate, Peekable};
use std::str::Lines;

use tracing::trace;

use super::scan::{literal_depth, strip_comment};
use crate::interpreter::errors::{ErrorCode, ScriptError};

pub const BLOCK_COMMENT_MARKER: &str = "\"\"\"";

//=====================================================
// Section 1.0 - Logical Lines
//=====================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based source line where the logical line starts.
    pub number: usize,
    /// Leading whitespace width of the first physical line, in characters.
    pub indent: usize,
    /// Comment-free, trimmed text with continuation lines joined by spaces.
    pub text: String,
}

impl LogicalLine {
    pub fn new(number: usize, indent: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            indent,
            text: text.into(),
        }
    }
}

pub type LineResult = Result<LogicalLine, ScriptError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssemblerState {
    Normal,
    InBlockComment,
}

/// Lazily yields logical lines so earlier statements run before later source
/// is examined.
pub struct LineAssembler<'a> {
    lines: Enumerate<Lines<'a>>,
    state: AssemblerState,
}

impl<'a> LineAssembler<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().enumerate(),
            state: AssemblerState::Normal,
        }
    }

    // Appends continuation lines until every bracket and brace is closed.
    fn accumulate(&mut self, number: usize, buffer: &mut String) -> Result<(), ScriptError> {
        while literal_depth(buffer) > 0 {
            let Some((_, raw)) = self.lines.next() else {
                return Err(ScriptError::new(
                    ErrorCode::Syntax,
                    "Syntax error: unclosed bracket or brace at end of file",
                )
                .at_line(number));
            };
            let continuation = strip_comment(raw).trim();
            if !continuation.is_empty() {
                buffer.push(' ');
                buffer.push_str(continuation);
            }
        }
        Ok(())
    }
}

impl Iterator for LineAssembler<'_> {
    type Item = LineResult;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, raw) = self.lines.next()?;
            if raw.trim_start().starts_with(BLOCK_COMMENT_MARKER) {
                self.state = match self.state {
                    AssemblerState::Normal => AssemblerState::InBlockComment,
                    AssemblerState::InBlockComment => AssemblerState::Normal,
                };
                continue;
            }
            if self.state == AssemblerState::InBlockComment {
                continue;
            }
            let text = strip_comment(raw).trim();
            if text.is_empty() {
                continue;
            }

            let number = index + 1;
            let mut buffer = text.to_string();
            if let Err(err) = self.accumulate(number, &mut buffer) {
                return Some(Err(err));
            }
            trace!(line = number, text = %buffer, "logical line");
            return Some(Ok(LogicalLine::new(number, indentation(raw), buffer)));
        }
    }
}

pub fn indentation(raw: &str) -> usize {
    raw.chars().take_while(|ch| ch.is_whitespace()).count()
}

//=====================================================
// Section 2.0 - Indented Blocks
//=====================================================

/// Takes every following line indented strictly deeper than `clause_indent`.
/// The first line at or above that column stays in `lines` for the caller.
pub fn collect_block<I>(lines: &mut Peekable<I>, clause_indent: usize) -> Vec<LogicalLine>
where
    I: Iterator<Item = LineResult>,
{
    let mut body = Vec::new();
    while let Some(Ok(line)) =
        lines.next_if(|next| matches!(next, Ok(line) if line.indent > clause_indent))
    {
        body.push(line);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble(source: &str) -> Vec<LogicalLine> {
        LineAssembler::new(source)
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn multi_line_array_matches_single_line() {
        let split = assemble("rakha(\"xs\", [\n    1, 2,\n    3\n])\nbhanai(xs)");
        assert_eq!(split[0], LogicalLine::new(1, 0, "rakha(\"xs\", [ 1, 2, 3 ])"));
        assert_eq!(split[1], LogicalLine::new(5, 0, "bhanai(xs)"));
    }

    #[test]
    fn comments_and_blank_lines_are_dropped() {
        let lines = assemble(
            "# heading\n\"\"\"\nbhanai(1)\nstill comment\n\"\"\"\n\n  bhanai(2) tippani why\n",
        );
        assert_eq!(lines, vec![LogicalLine::new(7, 2, "bhanai(2)")]);
    }

    #[test]
    fn brackets_inside_strings_do_not_continue() {
        let lines = assemble("bhanai(\"[\")\nbhanai(\"{\")");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn unclosed_literal_reports_its_start() {
        let err = LineAssembler::new("bhanai(1)\nrakha(\"x\", [1,\n2")
            .find_map(Result::err)
            .unwrap();
        assert_eq!(err.code, ErrorCode::Syntax);
        assert_eq!(err.line, Some(2));
    }

    #[test]
    fn block_stops_at_dedent() {
        let source = "yadi x:\n    bhanai(1)\n      bhanai(2)\n  bhanai(3)\nbhanai(4)";
        let mut lines = LineAssembler::new(source).peekable();
        let head = lines.next().unwrap().unwrap();
        let block = collect_block(&mut lines, head.indent);
        let texts: Vec<&str> = block.iter().map(|line| line.text.as_str()).collect();
        assert_eq!(texts, vec!["bhanai(1)", "bhanai(2)", "bhanai(3)"]);
        assert_eq!(lines.peek().unwrap().as_ref().unwrap().number, 5);

        let mut nested = block.into_iter().map(Ok).peekable();
        let first = nested.next().unwrap().unwrap();
        let inner = collect_block(&mut nested, first.indent);
        assert_eq!(inner.len(), 1);
        assert_eq!(nested.peek().unwrap().as_ref().unwrap().number, 4);
    }
}

//=====================================================
// End of file
//=====================================================
