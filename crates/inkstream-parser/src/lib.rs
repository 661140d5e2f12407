//! # Inkstream Parser
//!
//! Truncation-tolerant parsing of a JSON element array that is still being
//! streamed. Two pure functions run on every snapshot of the stream:
//!
//! 1. **Recover** - [`recover_elements`] (or any [`Recover`] strategy)
//!    extracts the complete leading elements from the truncated text.
//! 2. **Stabilize** - [`stable_prefix`] withholds the last recovered
//!    element, which the next chunk may still rewrite.
//!
//! When the stream completes, [`parse_complete`] parses the full text
//! strictly and reports problems as diagnostics.
//!
//! ## Usage
//!
//! ```
//! use inkstream_parser::{recover_elements, stable_prefix};
//!
//! let snapshot = r#"[{"type":"rectangle","id":"r1"},{"type":"ellipse","id":"e1"}"#;
//! let recovered = recover_elements(Some(snapshot));
//! let stable = stable_prefix(&recovered);
//!
//! assert_eq!(recovered.len(), 2);
//! assert_eq!(stable.len(), 1);
//! assert_eq!(stable[0].kind(), Some("rectangle"));
//! ```

pub mod error;

mod complete;
mod recover;
mod scan;
mod span;
mod stability;

pub use complete::{CompletedArray, ParseConfig, parse_complete};
pub use recover::{BraceScan, DepthScan, Recover, RecoveryStrategy, recover_elements};
pub use span::Span;
pub use stability::{stable_prefix, stable_prefix_or_empty};
