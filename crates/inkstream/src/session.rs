//! Driving recovery and rendering for a stream of tool-call snapshots.

use log::{Level, debug, info, trace, warn};

use inkstream_core::Element;
use inkstream_parser::{ParseConfig, Recover, RecoveryStrategy, parse_complete, stable_prefix};

use crate::{
    DiagramDiff, InkstreamError, StreamBuffer,
    buffer::SnapshotUpdate,
    config::AppConfig,
    host::{Host, Render},
};

/// Owns the stream buffer and the rendered state for one diagram.
///
/// Each update runs the recoverer and the stability filter over the whole
/// buffer and forwards a [`DiagramDiff`] to the renderer only when the
/// stable elements changed. Completion replaces everything with the result
/// of a strict parse.
///
/// # Examples
///
/// ```
/// use inkstream::{DiagramDiff, LogHost, Render, StreamSession, config::AppConfig};
///
/// #[derive(Default)]
/// struct Frames(Vec<String>);
///
/// impl Render for Frames {
///     fn apply(&mut self, diff: &DiagramDiff) {
///         self.0.push(diff.to_string());
///     }
/// }
///
/// let mut session = StreamSession::new(&AppConfig::default(), LogHost, Frames::default());
///
/// session.on_chunk("call-1", r#"[{"type":"rectangle","id":"r1"},"#);
/// session.on_chunk("call-1", r#"{"type":"ellipse","id":"e1"},{"ty"#);
/// assert_eq!(session.rendered().len(), 1);
///
/// let all = session
///     .on_tool_input("call-1", r#"[{"type":"rectangle","id":"r1"},{"type":"ellipse","id":"e1"}]"#)
///     .unwrap();
/// assert_eq!(all.len(), 2);
///
/// let (_, frames) = session.into_parts();
/// assert_eq!(frames.0, vec!["+1 ~0 -0", "+1 ~0 -0"]);
/// ```
#[derive(Debug)]
pub struct StreamSession<H, R> {
    host: H,
    renderer: R,
    strategy: RecoveryStrategy,
    parse_config: ParseConfig,
    buffer: StreamBuffer,
    rendered: Vec<Element>,
}

impl<H: Host, R: Render> StreamSession<H, R> {
    /// Create a session with injected host and renderer capabilities.
    pub fn new(config: &AppConfig, host: H, renderer: R) -> Self {
        Self {
            host,
            renderer,
            strategy: config.recovery().strategy(),
            parse_config: config.render().parse_config(),
            buffer: StreamBuffer::new(),
            rendered: Vec::new(),
        }
    }

    /// Handle a full snapshot of the partial tool input.
    ///
    /// Snapshots that do not extend the buffered text are ignored. Returns
    /// the diff that was rendered, if any.
    pub fn on_tool_input_partial(&mut self, call_id: &str, snapshot: &str) -> Option<DiagramDiff> {
        self.begin_call(call_id);
        match self.buffer.update(snapshot) {
            SnapshotUpdate::Extended => self.refresh(),
            SnapshotUpdate::Unchanged | SnapshotUpdate::Stale => None,
        }
    }

    /// Handle an increment of the partial tool input.
    ///
    /// Returns the diff that was rendered, if any.
    pub fn on_chunk(&mut self, call_id: &str, chunk: &str) -> Option<DiagramDiff> {
        self.begin_call(call_id);
        if chunk.is_empty() {
            return None;
        }
        self.buffer.append(chunk);
        self.refresh()
    }

    /// Handle the completed tool input.
    ///
    /// Parses `text` strictly, renders every element (including the last,
    /// which streaming withholds) and reports the final elements to the host.
    ///
    /// # Errors
    ///
    /// Returns [`InkstreamError::Parse`] if the completed text is not a JSON
    /// array of objects. The error is also sent to the host log, and the
    /// elements rendered while streaming this call stay on screen. A failed
    /// call that never streamed clears the previous call's diagram.
    pub fn on_tool_input(&mut self, call_id: &str, text: &str) -> Result<&[Element], InkstreamError> {
        // A call that never streamed is diffed straight against the previous
        // call's elements, so the renderer sees a single frame.
        let new_call = self.buffer.begin(call_id);
        self.buffer.finish(text);

        let completed = match parse_complete(text, &self.parse_config) {
            Ok(completed) => completed,
            Err(err) => {
                warn!(call_id, err:%; "Completed tool input failed to parse");
                self.host.send_log(Level::Error, &err.to_string());
                if new_call {
                    self.render(Vec::new());
                }
                return Err(InkstreamError::new_parse_error(err, text));
            }
        };

        for warning in completed.warnings() {
            warn!(call_id, warning:%; "Completed tool input has warnings");
            self.host.send_log(Level::Warn, &warning.to_string());
        }

        let elements = completed.into_elements();
        self.render(elements);
        self.host.update_model_context(&self.rendered);

        info!(call_id, count = self.rendered.len(); "Stream completed");
        Ok(&self.rendered)
    }

    /// Elements currently on screen.
    pub fn rendered(&self) -> &[Element] {
        &self.rendered
    }

    /// The buffered text of the current call.
    pub fn buffer(&self) -> &StreamBuffer {
        &self.buffer
    }

    /// The injected host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The injected renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Consume the session and return the injected capabilities.
    pub fn into_parts(self) -> (H, R) {
        (self.host, self.renderer)
    }

    /// Switch to `call_id`, clearing the diagram if it is a new call.
    fn begin_call(&mut self, call_id: &str) {
        if self.buffer.begin(call_id) && !self.rendered.is_empty() {
            debug!(call_id, cleared = self.rendered.len(); "New tool call, clearing diagram");
            self.render(Vec::new());
        }
    }

    /// Recompute the stable elements and render them if they changed.
    fn refresh(&mut self) -> Option<DiagramDiff> {
        let recovered = self.strategy.recover(Some(self.buffer.as_str()));
        let stable = stable_prefix(&recovered);
        trace!(
            buffered = self.buffer.len(),
            recovered = recovered.len(),
            stable = stable.len();
            "Recovered snapshot"
        );

        // A truncation point can make recovery find fewer elements than an
        // earlier snapshot did. Keep what is already on screen.
        if stable.len() < self.rendered.len() && self.rendered.starts_with(stable) {
            debug!(
                stable = stable.len(),
                rendered = self.rendered.len();
                "Recovery regressed, keeping rendered elements"
            );
            return None;
        }

        self.render(stable.to_vec())
    }

    /// Replace the rendered elements, applying the diff if there is one.
    fn render(&mut self, next: Vec<Element>) -> Option<DiagramDiff> {
        let diff = DiagramDiff::between(&self.rendered, &next, self.parse_config.id_field());
        self.rendered = next;
        if diff.is_empty() {
            return None;
        }

        debug!(diff:%; "Rendering diagram update");
        self.renderer.apply(&diff);
        Some(diff)
    }
}
