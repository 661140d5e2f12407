//! Error and diagnostic system for the strict final parse.
//!
//! Streaming recovery never fails: it degrades to a shorter sequence.
//! Once a stream completes, however, the full text is parsed strictly and
//! problems are reported as [`Diagnostic`]s wrapped in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use inkstream_parser::error::{Diagnostic, ErrorCode};
//! # use inkstream_parser::Span;
//!
//! let diag = Diagnostic::error("expected a JSON array of elements, found an object")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(0..15), "not an array")
//!     .with_help("wrap the elements in `[` and `]`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
