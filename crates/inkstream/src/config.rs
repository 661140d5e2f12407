//! Configuration types for streamed diagram rendering.
//!
//! All types implement [`serde::Deserialize`] for loading from external
//! sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining recovery and render settings.
//! - [`RecoveryConfig`] - Selects the [`RecoveryStrategy`] used while streaming.
//! - [`RenderConfig`] - Controls how rendered elements are identified.
//!
//! # Example
//!
//! ```
//! # use inkstream::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().id_field(), "id");
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use inkstream_core::identifier::DEFAULT_ID_FIELD;
use inkstream_parser::{ParseConfig, RecoveryStrategy};

use crate::InkstreamError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Recovery configuration section.
    #[serde(default)]
    recovery: RecoveryConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(recovery: RecoveryConfig, render: RenderConfig) -> Self {
        Self { recovery, render }
    }

    /// Returns the recovery configuration.
    pub fn recovery(&self) -> &RecoveryConfig {
        &self.recovery
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`InkstreamError::Config`] if the id field is empty.
    pub fn validate(&self) -> Result<(), InkstreamError> {
        if self.render.id_field.trim().is_empty() {
            return Err(InkstreamError::Config(
                "render.id_field must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Recovery settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecoveryConfig {
    /// Strategy used to recover elements from truncated snapshots.
    #[serde(default)]
    strategy: RecoveryStrategy,
}

impl RecoveryConfig {
    /// Creates a [`RecoveryConfig`] using `strategy`.
    pub fn new(strategy: RecoveryStrategy) -> Self {
        Self { strategy }
    }

    /// Returns the configured [`RecoveryStrategy`].
    pub fn strategy(&self) -> RecoveryStrategy {
        self.strategy
    }
}

/// Render settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Element field holding the render key.
    #[serde(default = "default_id_field")]
    id_field: String,
}

impl RenderConfig {
    /// Creates a [`RenderConfig`] keyed by `id_field`.
    pub fn new(id_field: impl Into<String>) -> Self {
        Self {
            id_field: id_field.into(),
        }
    }

    /// Returns the element field used as render key.
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// Returns the [`ParseConfig`] for the final strict parse.
    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::new(self.id_field.as_str())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ID_FIELD)
    }
}

fn default_id_field() -> String {
    DEFAULT_ID_FIELD.to_string()
}
