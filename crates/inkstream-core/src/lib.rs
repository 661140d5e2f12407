//! Inkstream Core Types
//!
//! This crate provides the foundational types shared by the Inkstream
//! crates. It includes:
//!
//! - **Elements**: Opaque diagram primitives decoded from JSON ([`element::Element`])
//! - **Identifiers**: Render keys derived from an element's id field ([`identifier::ElementKey`])

pub mod element;
pub mod identifier;

pub use element::{Element, RecoveredSequence, StableSequence};
pub use identifier::ElementKey;
