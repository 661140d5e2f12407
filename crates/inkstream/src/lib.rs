//! Inkstream - flicker-free rendering of diagrams streamed as JSON.
//!
//! A diagram's elements arrive as a JSON array in the arguments of a tool
//! call, one token chunk at a time. Inkstream turns every truncated snapshot
//! of that text into the elements that are safe to show, and turns changes
//! in that set into keyed render updates.
//!
//! - [`StreamBuffer`] accumulates the text of one tool call.
//! - [`StreamSession`] runs recovery and the stability filter on each
//!   update and talks to the injected [`Host`] and [`Render`] capabilities.
//! - [`DiagramDiff`] describes what a keyed renderer must change.
//!
//! The pure recovery functions live in [`inkstream_parser`] and are
//! re-exported here.

pub mod config;

mod buffer;
mod diff;
mod error;
mod host;
mod session;

pub use inkstream_core::{Element, ElementKey, element, identifier};
pub use inkstream_parser::{
    BraceScan, DepthScan, Recover, RecoveryStrategy, parse_complete, recover_elements,
    stable_prefix,
};

pub use buffer::{SnapshotUpdate, StreamBuffer};
pub use diff::DiagramDiff;
pub use error::InkstreamError;
pub use host::{Host, LogHost, Render};
pub use session::StreamSession;
