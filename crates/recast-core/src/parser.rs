//! Hand-rolled JSON parser — converts raw JSON text into a [`Value`] tree.
//!
//! Recursive descent over a single forward byte cursor; no tokenizer pass, no
//! regex engine, no backtracking across value types. Whitespace is skippable
//! between any two tokens and preserved verbatim inside string literals.
//!
//! # Key design decisions
//!
//! - **Cursor-index strategy**: the parser tracks an explicit byte offset into
//!   the unmodified input instead of repeatedly trimming a consumed prefix off
//!   the front. This avoids per-token substring allocation and the O(n²)
//!   rescanning a slice-consuming parser hits on deeply nested input.
//! - **Minimal escape handling**: a backslash shields the following byte from
//!   terminating a string, but only `\"` is decoded (to `"`). All other escape
//!   pairs pass through verbatim — `\n` stays a two-character sequence. This is
//!   a documented limitation, not an oversight.
//! - **Strict number conversion**: the number scanner is a greedy character
//!   class (`0-9 . - + e E`); the scanned span is then validated by
//!   `str::parse`, so malformed spans like `1.2.3` or `--5` fail at parse time
//!   with the offending span in the error rather than slipping through.
//! - **Duplicate keys**: last write wins, in place — the key keeps its
//!   first-seen position in the object, matching dict-overwrite semantics.
//! - **Depth guard**: recursion depth equals input nesting depth, so a
//!   configurable limit (default 128) turns adversarially deep input into a
//!   [`RecastError::DepthExceeded`] instead of a stack overflow.

use crate::error::{RecastError, Result};
use crate::value::Value;

/// Characters of a diagnostic snippet carried in parse errors.
const SNIPPET_LEN: usize = 20;

/// Tunable parser limits.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Maximum object/array nesting depth before the parser bails out.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Parse a complete JSON text into a [`Value`].
///
/// Permissive entry point: the root may be any JSON value, including a bare
/// scalar (`"hi"`, `5`, `true`). The whole input must be consumed — trailing
/// non-whitespace is an error.
pub fn parse(text: &str) -> Result<Value> {
    parse_with(text, &ParserOptions::default())
}

/// [`parse`] with explicit [`ParserOptions`].
pub fn parse_with(text: &str, options: &ParserOptions) -> Result<Value> {
    let mut cursor = Cursor::new(text, options);
    let value = cursor.parse_value()?;
    cursor.expect_end()?;
    Ok(value)
}

/// Parse a JSON document whose root must be an object or an array.
///
/// Strict variant of [`parse`] matching the classic document contract: after
/// leading whitespace the input has to open with `{` or `[`.
pub fn parse_document(text: &str) -> Result<Value> {
    parse_document_with(text, &ParserOptions::default())
}

/// [`parse_document`] with explicit [`ParserOptions`].
pub fn parse_document_with(text: &str, options: &ParserOptions) -> Result<Value> {
    let mut cursor = Cursor::new(text, options);
    cursor.skip_whitespace();
    match cursor.peek() {
        Some(b'{') | Some(b'[') => {}
        _ => {
            return Err(cursor.error("document root must be an object or array"));
        }
    }
    let value = cursor.parse_value()?;
    cursor.expect_end()?;
    Ok(value)
}

/// Parse state: the unmodified input plus a byte offset into it.
///
/// The offset only ever stops on character boundaries — every structural byte
/// the cursor matches on is ASCII, and UTF-8 continuation bytes can never
/// equal one.
struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str, options: &ParserOptions) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn remainder(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn error(&self, message: &str) -> RecastError {
        self.error_at(self.pos, message)
    }

    fn error_at(&self, position: usize, message: &str) -> RecastError {
        RecastError::Parse {
            position,
            message: message.to_string(),
            snippet: self.text[position..].chars().take(SNIPPET_LEN).collect(),
        }
    }

    /// After the root value: only whitespace may remain.
    fn expect_end(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.pos < self.bytes.len() {
            return Err(self.error("trailing characters after the root value"));
        }
        Ok(())
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.error("unexpected end of input, expected a value")),
            Some(b'"') => self.parse_string().map(Value::Str),
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b't') | Some(b'f') | Some(b'n') => self.parse_literal(),
            Some(_) => self.parse_number(),
        }
    }

    /// Scan a quoted string starting at the opening `"`.
    ///
    /// A backslash shields the next byte from terminating the scan, so `\"`
    /// stays inside the string; only that one escape is decoded afterwards.
    fn parse_string(&mut self) -> Result<String> {
        let open = self.pos;
        self.pos += 1;
        let start = self.pos;
        loop {
            match self.peek() {
                None => return Err(self.error_at(open, "unterminated string")),
                Some(b'\\') => self.pos += 2,
                Some(b'"') => break,
                Some(_) => self.pos += 1,
            }
        }
        let raw = &self.text[start..self.pos];
        self.pos += 1;
        Ok(raw.replace("\\\"", "\""))
    }

    fn parse_object(&mut self) -> Result<Value> {
        let open = self.pos;
        self.enter(open)?;
        self.pos += 1;
        let mut pairs: Vec<(String, Value)> = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error_at(open, "unterminated object")),
                Some(b'}') => {
                    self.pos += 1;
                    self.depth -= 1;
                    return Ok(Value::Object(pairs));
                }
                Some(b',') => {
                    self.pos += 1;
                }
                Some(b'"') => {
                    let key = self.parse_string()?;
                    self.skip_whitespace();
                    if self.peek() != Some(b':') {
                        return Err(self.error("expected ':' after object key"));
                    }
                    self.pos += 1;
                    let value = self.parse_value()?;
                    // Last write wins, but the key keeps its original slot.
                    match pairs.iter_mut().find(|(k, _)| *k == key) {
                        Some(existing) => existing.1 = value,
                        None => pairs.push((key, value)),
                    }
                }
                Some(_) => return Err(self.error("invalid object key")),
            }
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        let open = self.pos;
        self.enter(open)?;
        self.pos += 1;
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error_at(open, "unterminated array")),
                Some(b']') => {
                    self.pos += 1;
                    self.depth -= 1;
                    return Ok(Value::Array(items));
                }
                Some(b',') => {
                    self.pos += 1;
                }
                Some(_) => items.push(self.parse_value()?),
            }
        }
    }

    /// Exact, case-sensitive prefix match on `true`, `false`, `null`.
    fn parse_literal(&mut self) -> Result<Value> {
        let rest = self.remainder();
        if rest.starts_with("true") {
            self.pos += 4;
            Ok(Value::Bool(true))
        } else if rest.starts_with("false") {
            self.pos += 5;
            Ok(Value::Bool(false))
        } else if rest.starts_with("null") {
            self.pos += 4;
            Ok(Value::Null)
        } else {
            Err(self.error("invalid value"))
        }
    }

    /// Greedy scan over the numeric character class, then strict conversion.
    ///
    /// The span is classified as a float when it contains a `.` or an exponent
    /// marker, else as an integer, preserving the lexical Int/Float
    /// distinction through to emission.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        while let Some(b'0'..=b'9' | b'.' | b'-' | b'+' | b'e' | b'E') = self.peek() {
            self.pos += 1;
        }
        let span = &self.text[start..self.pos];
        if span.is_empty() {
            return Err(self.error_at(start, "invalid value"));
        }
        if span.bytes().any(|b| matches!(b, b'.' | b'e' | b'E')) {
            span.parse::<f64>()
                .map(Value::Float)
                .map_err(|_| self.error_at(start, "invalid number literal"))
        } else {
            span.parse::<i64>()
                .map(Value::Int)
                .map_err(|_| self.error_at(start, "invalid number literal"))
        }
    }

    /// Nesting guard, called on every `{` or `[`.
    fn enter(&mut self, position: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(RecastError::DepthExceeded {
                limit: self.max_depth,
                position,
            });
        }
        Ok(())
    }
}
