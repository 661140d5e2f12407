//! CLI logic for the Inkstream replay tool.
//!
//! The CLI reads a finished JSON element array and replays it as a token
//! stream, feeding fixed-size chunks through a [`StreamSession`] exactly as a
//! host would while a model is still writing. Every rendered frame is logged,
//! and the elements of the completed stream are written to the output file.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{debug, info};

use inkstream::{DiagramDiff, InkstreamError, LogHost, Render, StreamSession};

/// Counts and logs the frames produced during a replay.
#[derive(Debug, Default)]
struct FrameLog {
    frames: usize,
}

impl Render for FrameLog {
    fn apply(&mut self, diff: &DiagramDiff) {
        self.frames += 1;
        debug!(frame = self.frames, diff:%; "Frame rendered");
    }
}

/// Run the Inkstream CLI application
///
/// This function replays the input file through a streaming session
/// and writes the completed element array to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `InkstreamError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parse errors in the completed stream
/// - Export errors
pub fn run(args: &Args) -> Result<(), InkstreamError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        chunk_size = args.chunk_size.get();
        "Replaying diagram stream"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    let call_id = Path::new(&args.input)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "replay".to_string());

    let mut frame_log = FrameLog::default();
    let (json, count) = {
        let mut session = StreamSession::new(&app_config, LogHost, &mut frame_log);
        for chunk in char_chunks(&source, args.chunk_size.get()) {
            session.on_chunk(&call_id, chunk);
        }
        let elements = session.on_tool_input(&call_id, &source)?;
        (serde_json::to_string_pretty(elements)?, elements.len())
    };

    // Write output file
    fs::write(&args.output, json)?;

    info!(
        output_file = args.output,
        elements = count,
        frames = frame_log.frames;
        "Elements exported successfully"
    );

    Ok(())
}

/// Split `text` into chunks of `size` characters.
fn char_chunks(text: &str, size: usize) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .char_indices()
            .nth(size)
            .map_or(rest.len(), |(idx, _)| idx);
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}
