//! Per-tool-call accumulation of streamed text.

use log::debug;

/// Outcome of offering a snapshot to a [`StreamBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotUpdate {
    /// The snapshot extended the buffer.
    Extended,

    /// The snapshot equals the buffer.
    Unchanged,

    /// The snapshot is shorter or diverges; it was ignored.
    Stale,
}

/// The text received so far for one tool call.
///
/// The buffer only grows while a call is in progress. It is replaced
/// wholesale when a new call begins.
///
/// # Examples
///
/// ```
/// use inkstream::{SnapshotUpdate, StreamBuffer};
///
/// let mut buffer = StreamBuffer::new();
/// buffer.begin("call-1");
/// buffer.append(r#"[{"type":"rect"#);
///
/// assert_eq!(buffer.update(r#"[{"type":"rectangle"}"#), SnapshotUpdate::Extended);
/// assert_eq!(buffer.update("["), SnapshotUpdate::Stale);
/// assert_eq!(buffer.as_str(), r#"[{"type":"rectangle"}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StreamBuffer {
    call_id: Option<String>,
    text: String,
}

impl StreamBuffer {
    /// Create an empty buffer not yet bound to a call.
    pub fn new() -> Self {
        Self::default()
    }

    /// The call this buffer currently accumulates, if any.
    pub fn call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }

    /// The accumulated text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the accumulated text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether no text has been received for the current call.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Bind the buffer to `call_id`.
    ///
    /// Returns `true` and clears the text if this is a different call than
    /// the current one.
    pub fn begin(&mut self, call_id: &str) -> bool {
        if self.call_id.as_deref() == Some(call_id) {
            return false;
        }
        debug!(call_id, previous_len = self.text.len(); "Starting new stream buffer");
        self.call_id = Some(call_id.to_owned());
        self.text.clear();
        true
    }

    /// Append an increment.
    pub fn append(&mut self, chunk: &str) {
        self.text.push_str(chunk);
    }

    /// Offer a full snapshot of the text so far.
    ///
    /// Only snapshots that extend the current text are accepted.
    pub fn update(&mut self, snapshot: &str) -> SnapshotUpdate {
        match snapshot.strip_prefix(self.text.as_str()) {
            Some("") => SnapshotUpdate::Unchanged,
            Some(tail) => {
                self.text.push_str(tail);
                SnapshotUpdate::Extended
            }
            None => {
                debug!(
                    current_len = self.text.len(),
                    snapshot_len = snapshot.len();
                    "Ignoring stale snapshot"
                );
                SnapshotUpdate::Stale
            }
        }
    }

    /// Replace the text with the authoritative final text.
    pub fn finish(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}
