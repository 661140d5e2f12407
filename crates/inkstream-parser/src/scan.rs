//! Depth-aware structural scan of (possibly truncated) JSON array text.
//!
//! The scanner walks the text byte by byte, tracking string and escape state
//! and bracket nesting, and records where each top-level array entry starts
//! and ends. It validates nothing: the strict `serde_json` parse that follows
//! is the authority on well-formedness.
//!
//! Structural characters are all ASCII, and UTF-8 continuation bytes never
//! collide with ASCII, so scanning bytes is safe for any `&str`.

use crate::span::Span;

/// Result of scanning an array's text.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct EntryScan {
    /// Entries terminated by a top-level `,` or the closing `]`.
    pub entries: Vec<Span>,

    /// Byte index of the last `}` that closed a top-level entry.
    pub last_object_close: Option<usize>,

    /// Whether the outer array's closing `]` was reached.
    pub closed: bool,
}

/// Scan `text`, which should start (after whitespace) with `[`.
pub(crate) fn scan_entries(text: &str) -> EntryScan {
    let mut scan = EntryScan::default();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut entry_start: Option<usize> = None;
    let mut entry_end = 0;

    for (idx, byte) in text.bytes().enumerate() {
        if in_string {
            entry_end = idx + 1;
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        if byte.is_ascii_whitespace() {
            continue;
        }

        match depth {
            0 => {
                if byte == b'[' {
                    depth = 1;
                }
            }
            1 => match byte {
                b',' | b']' => {
                    if let Some(start) = entry_start.take() {
                        scan.entries.push(Span::new(start..entry_end));
                    }
                    if byte == b']' {
                        scan.closed = true;
                        break;
                    }
                }
                _ => {
                    entry_start.get_or_insert(idx);
                    entry_end = idx + 1;
                    match byte {
                        b'"' => in_string = true,
                        b'{' | b'[' => depth += 1,
                        _ => {}
                    }
                }
            },
            _ => {
                entry_end = idx + 1;
                match byte {
                    b'"' => in_string = true,
                    b'{' | b'[' => depth += 1,
                    b'}' | b']' => {
                        depth -= 1;
                        if depth == 1 && byte == b'}' {
                            scan.last_object_close = Some(idx);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    scan
}
