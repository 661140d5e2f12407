//! Error codes for the final-parse diagnostics.
//!
//! Codes are grouped by what went wrong:
//! - `E1xx` - JSON syntax
//! - `E2xx` - Element array shape
//! - `W3xx` - Advisory warnings

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E1xx)
    // =========================================================================
    /// Invalid JSON.
    ///
    /// The text contains a character or token that is not valid JSON at
    /// that position.
    E100,

    /// Incomplete input.
    ///
    /// The text ended before the JSON value was complete. During streaming
    /// this is normal; after completion it means the tool call was cut off.
    E101,

    // =========================================================================
    // Shape Errors (E2xx)
    // =========================================================================
    /// Not an array.
    ///
    /// The text is valid JSON but its top-level value is not an array.
    E200,

    /// Element is not an object.
    ///
    /// An entry of the element array is a primitive or a nested array.
    E201,

    // =========================================================================
    // Warnings (W3xx)
    // =========================================================================
    /// Duplicate element id.
    ///
    /// Two elements share an id, so a keyed renderer will treat the later
    /// one as an update of the earlier one.
    W300,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::W300 => "W300",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "invalid JSON",
            ErrorCode::E101 => "incomplete input",
            ErrorCode::E200 => "not an array",
            ErrorCode::E201 => "element is not an object",
            ErrorCode::W300 => "duplicate element id",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
