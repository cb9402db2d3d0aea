//=====================================================
// File: parser/mod.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Bhanai statement parser
// Objective: Split a logical line into a command name and its raw top-level
//            arguments, and recognise conditional clause lines
//=====================================================

pub mod block;
pub mod scan;

use crate::interpreter::errors::{RuntimeError, RuntimeResult};
use scan::{identifier_len, is_enclosed, is_identifier_char, split_top_level, strip_comment};

pub const IF_KEYWORD: &str = "yadi";
pub const ELIF_KEYWORD: &str = "athawa";
pub const ELSE_KEYWORD: &str = "aru";
pub const CLAUSE_MARKER: char = ':';

//=====================================================
// Section 1.0 - Statements
//=====================================================

/// `name(arg, arg, ...)` with each argument still unevaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
    pub command: &'a str,
    pub arguments: Vec<&'a str>,
}

pub fn parse_statement(line: &str) -> RuntimeResult<Statement<'_>> {
    let line = strip_comment(line).trim();
    let name_len = identifier_len(line);
    let call = &line[name_len..];
    if name_len == 0 || !call.starts_with('(') || !is_enclosed(call) {
        return Err(RuntimeError::syntax(format!("Unable to parse line: {line}")));
    }
    Ok(Statement {
        command: &line[..name_len],
        arguments: split_arguments(&call[1..call.len() - 1])?,
    })
}

/// Top-level comma separated fragments, trimmed. An empty list yields no
/// fragments; an empty fragment inside a list is a syntax error.
pub fn split_arguments(list: &str) -> RuntimeResult<Vec<&str>> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }
    split_top_level(list, ',')
        .into_iter()
        .map(str::trim)
        .map(|fragment| {
            if fragment.is_empty() {
                Err(RuntimeError::syntax(format!("empty argument in ({list})")))
            } else {
                Ok(fragment)
            }
        })
        .collect()
}

//=====================================================
// Section 2.0 - Clauses
//=====================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause<'a> {
    If(&'a str),
    Elif(&'a str),
    Else,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Clause(Clause<'a>),
    Statement,
}

/// A clause is a keyword at statement start followed by a trailing `:`. The elif
/// keyword doubles as the infix `or`, so anything not shaped like a clause is
/// left to the statement parser.
pub fn classify_line(text: &str) -> RuntimeResult<LineKind<'_>> {
    let text = text.trim();
    let Some(head) = text.strip_suffix(CLAUSE_MARKER) else {
        return Ok(LineKind::Statement);
    };
    let head = head.trim_end();
    if head == ELSE_KEYWORD {
        return Ok(LineKind::Clause(Clause::Else));
    }
    let (keyword, condition, clause) =
        if let Some(condition) = keyword_argument(head, IF_KEYWORD) {
            (IF_KEYWORD, condition, Clause::If(condition))
        } else if let Some(condition) = keyword_argument(head, ELIF_KEYWORD) {
            (ELIF_KEYWORD, condition, Clause::Elif(condition))
        } else {
            return Ok(LineKind::Statement);
        };
    if condition.is_empty() {
        return Err(RuntimeError::syntax(format!("{keyword} clause needs a condition")));
    }
    Ok(LineKind::Clause(clause))
}

fn keyword_argument<'a>(head: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = head.strip_prefix(keyword)?;
    match rest.chars().next() {
        None => Some(""),
        Some(ch) if is_identifier_char(ch) => None,
        Some(_) => Some(rest.trim()),
    }
}


//=====================================================
// End of file
//=====================================================
