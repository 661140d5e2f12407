//! Strict parse of a completed stream.
//!
//! Once the host reports that a tool call has finished, its full argument
//! text is parsed without any truncation recovery. Unlike the streaming
//! path this one reports what is wrong, as diagnostics with byte spans.

use std::collections::HashMap;

use log::debug;
use serde_json::Value;

use inkstream_core::{Element, ElementKey, RecoveredSequence, identifier::DEFAULT_ID_FIELD};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    scan,
    span::Span,
};

/// Options for [`parse_complete`].
#[derive(Debug, Clone)]
pub struct ParseConfig {
    id_field: String,
}

impl ParseConfig {
    /// Create a config that identifies elements by `id_field`.
    pub fn new(id_field: impl Into<String>) -> Self {
        Self {
            id_field: id_field.into(),
        }
    }

    /// The field used to identify elements.
    pub fn id_field(&self) -> &str {
        &self.id_field
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ID_FIELD)
    }
}

/// The authoritative element sequence of a completed stream.
#[derive(Debug)]
pub struct CompletedArray {
    elements: RecoveredSequence,
    warnings: Vec<Diagnostic>,
}

impl CompletedArray {
    /// All elements, in array order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Advisory diagnostics that did not fail the parse.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Consume and return the elements.
    pub fn into_elements(self) -> RecoveredSequence {
        self.elements
    }
}

/// Parse the full text of a completed stream.
///
/// The text must be a JSON array whose entries are all objects. Elements
/// sharing an id produce warnings rather than errors.
///
/// # Errors
///
/// Returns a [`ParseError`] when the text is not valid JSON (`E100`), ends
/// early (`E101`), is not an array (`E200`), or has non-object entries
/// (`E201`, one diagnostic per entry).
///
/// # Examples
///
/// ```
/// use inkstream_parser::{ParseConfig, parse_complete};
///
/// let text = r#"[{"type":"rectangle","id":"r1"},{"type":"ellipse","id":"e1"}]"#;
/// let completed = parse_complete(text, &ParseConfig::default()).unwrap();
/// assert_eq!(completed.elements().len(), 2);
///
/// let err = parse_complete(r#"[{"type":"rect"#, &ParseConfig::default()).unwrap_err();
/// assert_eq!(err.to_string(), "error[E101]: unexpected end of input");
/// ```
pub fn parse_complete(text: &str, config: &ParseConfig) -> Result<CompletedArray, ParseError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| syntax_diagnostic(text, &err))?;

    let Value::Array(entries) = value else {
        return Err(Diagnostic::error(format!(
            "expected a JSON array of elements, found {}",
            describe(&value)
        ))
        .with_code(ErrorCode::E200)
        .with_label(trimmed_span(text), "not an array")
        .with_help("the tool argument must be a JSON array like `[{...}, {...}]`")
        .into());
    };

    let spans = scan::scan_entries(text).entries;
    let span_of = |idx: usize| spans.get(idx).copied();

    let mut collector = DiagnosticCollector::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for (idx, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            let mut diag = Diagnostic::error(format!(
                "element {idx} is {}, expected an object",
                describe(entry)
            ))
            .with_code(ErrorCode::E201);
            if let Some(span) = span_of(idx) {
                diag = diag.with_label(span, "not an object");
            }
            collector.emit(diag);
            continue;
        }

        let element = Element::new(entry.clone());
        let ElementKey::Id(id) = ElementKey::of(&element, idx, config.id_field()) else {
            continue;
        };
        if let Some(&first) = first_seen.get(&id) {
            let mut diag = Diagnostic::warning(format!("duplicate element id `{id}`"))
                .with_code(ErrorCode::W300)
                .with_help("a keyed renderer will treat the later element as an update");
            if let Some(span) = span_of(idx) {
                diag = diag.with_label(span, "reused here");
            }
            if let Some(span) = span_of(first) {
                diag = diag.with_secondary_label(span, "first used here");
            }
            collector.emit(diag);
        } else {
            first_seen.insert(id, idx);
        }
    }

    let warnings = collector.finish()?;
    debug!(count = entries.len(), warnings = warnings.len(); "Parsed completed array");

    Ok(CompletedArray {
        elements: entries.into_iter().map(Element::new).collect(),
        warnings,
    })
}

fn syntax_diagnostic(text: &str, err: &serde_json::Error) -> Diagnostic {
    if err.is_eof() {
        return Diagnostic::error("unexpected end of input")
            .with_code(ErrorCode::E101)
            .with_label(Span::new(text.len()..text.len()), "input ends here")
            .with_help("the stream ended before the array was closed");
    }

    // serde_json columns count bytes and point just past the offending byte.
    let offset = byte_offset(text, err.line(), err.column());
    Diagnostic::error(format!("invalid JSON: {err}"))
        .with_code(ErrorCode::E100)
        .with_label(char_span(text, offset.saturating_sub(1)), "here")
}

/// Span of the whole character containing byte `offset`.
fn char_span(text: &str, offset: usize) -> Span {
    let mut start = offset.min(text.len());
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let width = text[start..].chars().next().map_or(0, char::len_utf8);
    Span::new(start..start + width)
}

fn byte_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column).min(text.len())
}

fn trimmed_span(text: &str) -> Span {
    let start = text.len() - text.trim_start().len();
    let end = text.trim_end().len();
    Span::new(start..end)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
