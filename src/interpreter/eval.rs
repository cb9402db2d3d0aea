//=====================================================
// File: interpreter/eval.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Bhanai expression evaluator
// Objective: Classify a raw expression fragment by trying each syntactic form in
//            a fixed precedence order and evaluate it in the same pass
//=====================================================

use indexmap::IndexMap;
use tracing::trace;

use super::errors::{RuntimeError, RuntimeResult};
use super::value::{Value, parse_number};
use crate::builtins::arith::sum_or_concat;
use crate::console::Console;
use crate::parser::split_arguments;
use crate::parser::scan::{
    find_top_level, identifier_len, is_enclosed, is_identifier, matching_close, split_top_level,
};
use crate::runtime::Environment;

//=====================================================
// Section 1.0 - Operators
//=====================================================

pub const AND_OPERATOR: &str = " ra ";
pub const OR_OPERATOR: &str = " athawa ";
const LOGICAL_OPERATORS: [&str; 2] = [AND_OPERATOR, OR_OPERATOR];
const COMPARISON_OPERATORS: [&str; 6] = ["==", "!=", "<=", ">=", "<", ">"];

pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Accessor<'a> {
    Property(&'a str),
    Index(&'a str),
}

//=====================================================
// Section 2.0 - Evaluator
//=====================================================

/// Evaluates fragments against one environment. Builtins invoked from inside an
/// expression share the same console, so an input prompt suspends the whole
/// evaluation until the line is read.
pub struct Evaluator<'a> {
    env: &'a mut Environment,
    console: &'a mut dyn Console,
    max_depth: usize,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(env: &'a mut Environment, console: &'a mut dyn Console) -> Self {
        Self::with_max_depth(env, console, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(
        env: &'a mut Environment,
        console: &'a mut dyn Console,
        max_depth: usize,
    ) -> Self {
        Self {
            env,
            console,
            max_depth,
            depth: 0,
        }
    }

    pub fn evaluate(&mut self, fragment: &str) -> RuntimeResult<Value> {
        if self.depth >= self.max_depth {
            return Err(RuntimeError::syntax("expression nested too deeply"));
        }
        self.depth += 1;
        let result = self.classify(fragment.trim());
        self.depth -= 1;
        result
    }

    /// Hands evaluated arguments to the builtin `name`.
    pub fn dispatch(&mut self, name: &str, args: &[Value]) -> RuntimeResult<Value> {
        self.env.invoke_builtin(name, args, &mut *self.console)
    }

    fn classify(&mut self, fragment: &str) -> RuntimeResult<Value> {
        if fragment.is_empty() {
            return Err(RuntimeError::syntax("empty expression"));
        }
        if let Some(text) = string_literal(fragment) {
            trace!(fragment, form = "string");
            return Ok(Value::String(text));
        }

        let operands = split_top_level(fragment, '+');
        if operands.len() > 1 {
            trace!(fragment, form = "additive");
            return self.additive(&operands);
        }

        if let Some((name, arguments)) = call_parts(fragment) {
            trace!(fragment, form = "call");
            return self.call(name, arguments);
        }
        if fragment.starts_with('[') && is_enclosed(fragment) {
            trace!(fragment, form = "array");
            return self.array_literal(inner(fragment));
        }
        if fragment.starts_with('{') && is_enclosed(fragment) {
            trace!(fragment, form = "object");
            return self.object_literal(inner(fragment));
        }
        if let Some((base, accessors)) = chain_parts(fragment) {
            trace!(fragment, form = "chain");
            return self.chain(base, &accessors);
        }
        if let Some((index, operator)) = find_top_level(fragment, &LOGICAL_OPERATORS) {
            trace!(fragment, form = "logical");
            return self.logical(fragment, index, operator);
        }
        if let Some((index, operator)) = find_top_level(fragment, &COMPARISON_OPERATORS) {
            trace!(fragment, form = "comparison");
            return self.comparison(fragment, index, operator);
        }
        if let Some(number) = parse_number(fragment) {
            return Ok(Value::Number(number));
        }
        if is_identifier(fragment) {
            trace!(fragment, form = "identifier");
            return self.env.lookup(fragment);
        }
        Err(RuntimeError::syntax(format!("unable to evaluate expression: {fragment}")))
    }

    //=================================================
    // Section 2.1 - Compound Forms
    //=================================================

    fn additive(&mut self, operands: &[&str]) -> RuntimeResult<Value> {
        let mut values = Vec::with_capacity(operands.len());
        for operand in operands {
            if operand.trim().is_empty() {
                return Err(RuntimeError::syntax("missing operand for +"));
            }
            values.push(self.evaluate(operand)?);
        }
        Ok(sum_or_concat(&values))
    }

    // `hoina(expr)` is the registered builtin `hoina`, so prefix not is served here.
    fn call(&mut self, name: &str, arguments: &str) -> RuntimeResult<Value> {
        if !self.env.is_builtin_function(name) {
            return Err(RuntimeError::UndefinedFunction(name.to_string()));
        }
        let args = self.evaluate_all(&split_arguments(arguments)?)?;
        self.dispatch(name, &args)
    }

    fn array_literal(&mut self, body: &str) -> RuntimeResult<Value> {
        let elements = collection_items(body)?;
        Ok(Value::array(self.evaluate_all(&elements)?))
    }

    fn object_literal(&mut self, body: &str) -> RuntimeResult<Value> {
        let mut entries = IndexMap::new();
        for pair in collection_items(body)? {
            let Some((colon, _)) = find_top_level(pair, &[":"]) else {
                return Err(RuntimeError::syntax(format!("expected key: value, got {pair}")));
            };
            let key = object_key(pair[..colon].trim())?;
            let value = self.evaluate(&pair[colon + 1..])?;
            entries.insert(key, value);
        }
        Ok(Value::object(entries))
    }

    fn chain(&mut self, base: &str, accessors: &[Accessor<'_>]) -> RuntimeResult<Value> {
        let mut current = self.env.lookup(base)?;
        for accessor in accessors {
            current = match accessor {
                Accessor::Property(name) => property(&current, name)?,
                Accessor::Index(expression) => {
                    let index = self.evaluate(expression)?;
                    element(&current, &index)?
                }
            };
        }
        Ok(current)
    }

    // Left-associative; every operand is evaluated, there is no short circuit.
    fn logical(&mut self, fragment: &str, index: usize, operator: &str) -> RuntimeResult<Value> {
        let mut result = self.operand(&fragment[..index])?.is_truthy();
        let mut operator = operator;
        let mut rest = &fragment[index + operator.len()..];
        loop {
            let next = find_top_level(rest, &LOGICAL_OPERATORS);
            let right = match next {
                Some((at, _)) => &rest[..at],
                None => rest,
            };
            let right = self.operand(right)?.is_truthy();
            result = if operator == AND_OPERATOR {
                result && right
            } else {
                result || right
            };
            match next {
                Some((at, following)) => {
                    rest = &rest[at + following.len()..];
                    operator = following;
                }
                None => return Ok(Value::Boolean(result)),
            }
        }
    }

    fn comparison(&mut self, fragment: &str, index: usize, operator: &str) -> RuntimeResult<Value> {
        let left = self.operand(&fragment[..index])?;
        let right = self.operand(&fragment[index + operator.len()..])?;
        let outcome = match operator {
            "==" => left.strict_equals(&right),
            "!=" => !left.strict_equals(&right),
            _ => {
                let ordering = left.compare(&right)?;
                ordering.is_some_and(|ordering| match operator {
                    "<" => ordering.is_lt(),
                    ">" => ordering.is_gt(),
                    "<=" => ordering.is_le(),
                    _ => ordering.is_ge(),
                })
            }
        };
        Ok(Value::Boolean(outcome))
    }

    fn operand(&mut self, fragment: &str) -> RuntimeResult<Value> {
        if fragment.trim().is_empty() {
            return Err(RuntimeError::syntax("operator is missing an operand"));
        }
        self.evaluate(fragment)
    }

    fn evaluate_all(&mut self, fragments: &[&str]) -> RuntimeResult<Vec<Value>> {
        fragments
            .iter()
            .map(|fragment| self.evaluate(fragment))
            .collect()
    }
}

//=====================================================
// Section 3.0 - Pattern Helpers
//=====================================================

/// Content of a fragment that is exactly one string literal, escapes resolved.
pub fn string_literal(fragment: &str) -> Option<String> {
    if !fragment.starts_with('"') || !is_enclosed(fragment) {
        return None;
    }
    let mut text = String::with_capacity(fragment.len());
    let mut chars = inner(fragment).chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(escaped @ ('"' | '\\')) => text.push(escaped),
                Some(other) => {
                    text.push('\\');
                    text.push(other);
                }
                None => text.push('\\'),
            },
            _ => text.push(ch),
        }
    }
    Some(text)
}

fn inner(fragment: &str) -> &str {
    &fragment[1..fragment.len() - 1]
}

fn call_parts(fragment: &str) -> Option<(&str, &str)> {
    let name_len = identifier_len(fragment);
    let rest = &fragment[name_len..];
    if name_len == 0 || !rest.starts_with('(') || !is_enclosed(rest) {
        return None;
    }
    Some((&fragment[..name_len], inner(rest)))
}

/// `identifier` followed by one or more `.prop` / `[index]` accessors covering the
/// whole fragment.
fn chain_parts(fragment: &str) -> Option<(&str, Vec<Accessor<'_>>)> {
    let base_len = identifier_len(fragment);
    if base_len == 0 || base_len == fragment.len() {
        return None;
    }
    let mut accessors = Vec::new();
    let mut rest = &fragment[base_len..];
    while !rest.is_empty() {
        if let Some(after_dot) = rest.strip_prefix('.') {
            let name_len = identifier_len(after_dot);
            if name_len == 0 {
                return None;
            }
            accessors.push(Accessor::Property(&after_dot[..name_len]));
            rest = &after_dot[name_len..];
        } else if rest.starts_with('[') {
            let close = matching_close(rest)?;
            accessors.push(Accessor::Index(&rest[1..close]));
            rest = &rest[close + 1..];
        } else {
            return None;
        }
    }
    Some((&fragment[..base_len], accessors))
}

// Elements of an array or object body; one trailing comma is tolerated.
fn collection_items(body: &str) -> RuntimeResult<Vec<&str>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut items: Vec<&str> = split_top_level(body, ',').into_iter().map(str::trim).collect();
    if items.len() > 1 && items.last().is_some_and(|last| last.is_empty()) {
        items.pop();
    }
    if items.iter().any(|item| item.is_empty()) {
        return Err(RuntimeError::syntax(format!("empty element in collection literal: {body}")));
    }
    Ok(items)
}

fn object_key(raw: &str) -> RuntimeResult<String> {
    if let Some(key) = string_literal(raw) {
        return Ok(key);
    }
    if is_identifier(raw) || parse_number(raw).is_some() {
        return Ok(raw.to_string());
    }
    Err(RuntimeError::syntax(format!("invalid object key: {raw}")))
}

fn property(current: &Value, name: &str) -> RuntimeResult<Value> {
    let Value::Object(entries) = current else {
        return Err(RuntimeError::type_error(format!(
            "cannot read property {name} of {}",
            current.type_name()
        )));
    };
    entries
        .borrow()
        .get(name)
        .cloned()
        .ok_or_else(|| RuntimeError::Range(format!("property {name} does not exist")))
}

fn element(current: &Value, index: &Value) -> RuntimeResult<Value> {
    let Value::Array(items) = current else {
        return Err(RuntimeError::type_error(format!(
            "cannot index into {}",
            current.type_name()
        )));
    };
    let Value::Number(position) = index else {
        return Err(RuntimeError::type_error(format!(
            "array index must be a number, got {}",
            index.type_name()
        )));
    };
    let items = items.borrow();
    if position.fract() != 0.0 || *position < 0.0 || *position >= items.len() as f64 {
        return Err(RuntimeError::Range(format!(
            "index {} is outside 0..{}",
            super::value::format_number(*position),
            items.len()
        )));
    }
    Ok(items[*position as usize].clone())
}


//=====================================================
// End of file
//=====================================================
