//=====================================================
// File: parser/scan.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Depth and quote aware scanning over raw Bhanai text
// Objective: One shared splitter for argument lists, additive operands, collection
//            elements, object pairs, operators and comment markers
//=====================================================

use std::str::CharIndices;

pub const COMMENT_SYMBOL: char = '#';
pub const COMMENT_WORD: &str = "tippani";

//=====================================================
// Section 1.0 - Nesting State
//=====================================================

/// Paren/bracket/brace nesting plus string-literal state at one scan position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Depth {
    parens: i32,
    brackets: i32,
    braces: i32,
    in_quote: bool,
    escaped: bool,
}

impl Depth {
    pub fn feed(&mut self, ch: char) {
        if self.in_quote {
            match ch {
                '\\' => {
                    self.escaped = !self.escaped;
                    return;
                }
                '"' if !self.escaped => self.in_quote = false,
                _ => {}
            }
            self.escaped = false;
            return;
        }
        match ch {
            '"' => self.in_quote = true,
            '(' => self.parens += 1,
            ')' => self.parens -= 1,
            '[' => self.brackets += 1,
            ']' => self.brackets -= 1,
            '{' => self.braces += 1,
            '}' => self.braces -= 1,
            _ => {}
        }
    }

    pub fn is_top_level(&self) -> bool {
        !self.in_quote && self.parens == 0 && self.brackets == 0 && self.braces == 0
    }

    pub fn in_quote(&self) -> bool {
        self.in_quote
    }

    /// Net open brackets and braces; parentheses never continue a line.
    pub fn literal_depth(&self) -> i32 {
        self.brackets + self.braces
    }
}

//=====================================================
// Section 2.0 - Top-Level Iteration
//=====================================================

/// Yields `(byte_index, char)` for every plain character that sits at depth zero
/// outside string literals. Brackets and quotes themselves are never yielded.
pub struct TopLevel<'a> {
    chars: CharIndices<'a>,
    depth: Depth,
}

impl<'a> TopLevel<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices(),
            depth: Depth::default(),
        }
    }
}

impl Iterator for TopLevel<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, ch) = self.chars.next()?;
            let before = self.depth.is_top_level();
            self.depth.feed(ch);
            if before && self.depth.is_top_level() {
                return Some((index, ch));
            }
        }
    }
}

/// Splits `text` at every top-level `delimiter`. Always yields at least one
/// (possibly empty) segment; segments are not trimmed.
pub fn split_top_level(text: &str, delimiter: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (index, ch) in TopLevel::new(text) {
        if ch == delimiter {
            parts.push(&text[start..index]);
            start = index + ch.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Earliest top-level occurrence of any of `patterns`. At a given position the
/// patterns are tried in order, so list longer operators first.
pub fn find_top_level(text: &str, patterns: &[&'static str]) -> Option<(usize, &'static str)> {
    TopLevel::new(text).find_map(|(index, _)| {
        patterns
            .iter()
            .find(|pattern| text[index..].starts_with(**pattern))
            .map(|pattern| (index, *pattern))
    })
}

/// Byte index of the character closing the group opened at the start of `text`.
pub fn matching_close(text: &str) -> Option<usize> {
    let mut depth = Depth::default();
    for (index, ch) in text.char_indices() {
        depth.feed(ch);
        if depth.is_top_level() {
            return if index == 0 { None } else { Some(index) };
        }
    }
    None
}

/// True when the group opened by the first character closes on the last one.
pub fn is_enclosed(text: &str) -> bool {
    matching_close(text).is_some_and(|close| close + 1 == text.len())
}

//=====================================================
// Section 3.0 - Lines
//=====================================================

/// Cuts the line at the first comment marker found outside a string literal.
pub fn strip_comment(line: &str) -> &str {
    let mut depth = Depth::default();
    for (index, ch) in line.char_indices() {
        if !depth.in_quote() && (ch == COMMENT_SYMBOL || starts_comment_word(line, index)) {
            return &line[..index];
        }
        depth.feed(ch);
    }
    line
}

fn starts_comment_word(line: &str, index: usize) -> bool {
    if !line[index..].starts_with(COMMENT_WORD) {
        return false;
    }
    let before = line[..index].chars().next_back();
    let after = line[index + COMMENT_WORD.len()..].chars().next();
    !before.is_some_and(is_identifier_char) && !after.is_some_and(is_identifier_char)
}

/// Net open bracket/brace depth of a (possibly partial) logical line.
pub fn literal_depth(text: &str) -> i32 {
    let mut depth = Depth::default();
    text.chars().for_each(|ch| depth.feed(ch));
    depth.literal_depth()
}

pub fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

pub fn is_identifier(text: &str) -> bool {
    identifier_len(text) == text.len() && !text.is_empty()
}

/// Length in bytes of the identifier prefix of `text` (zero when none).
pub fn identifier_len(text: &str) -> usize {
    match text.chars().next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => text
            .char_indices()
            .find(|(_, ch)| !is_identifier_char(*ch))
            .map_or(text.len(), |(index, _)| index),
        _ => 0,
    }
}


//=====================================================
// End of file
//=====================================================
