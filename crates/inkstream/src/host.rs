//! Capabilities a [`StreamSession`](crate::StreamSession) is given by its
//! embedding environment.
//!
//! The session never reaches for global state. Whatever surrounds it (a
//! chat host, a CLI, a test) passes in a [`Host`] for outbound calls and a
//! [`Render`] target for diagram updates.

use log::{Level, info, log};

use inkstream_core::Element;

use crate::DiagramDiff;

/// Outbound calls to the environment hosting the diagram.
pub trait Host {
    /// Forward a log message to the host.
    fn send_log(&mut self, level: Level, message: &str);

    /// Tell the host which elements the diagram now shows, once a stream
    /// has completed.
    fn update_model_context(&mut self, elements: &[Element]);
}

/// A keyed, incremental renderer.
pub trait Render {
    /// Apply one non-empty set of changes.
    fn apply(&mut self, diff: &DiagramDiff);
}

impl<T: Host + ?Sized> Host for &mut T {
    fn send_log(&mut self, level: Level, message: &str) {
        (**self).send_log(level, message);
    }

    fn update_model_context(&mut self, elements: &[Element]) {
        (**self).update_model_context(elements);
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    fn apply(&mut self, diff: &DiagramDiff) {
        (**self).apply(diff);
    }
}

/// A [`Host`] that forwards everything to the `log` facade.
///
/// Useful when there is no real host, e.g. when replaying a file.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHost;

impl Host for LogHost {
    fn send_log(&mut self, level: Level, message: &str) {
        log!(level, "{message}");
    }

    fn update_model_context(&mut self, elements: &[Element]) {
        info!(count = elements.len(); "Diagram context updated");
    }
}
