//! Configuration for ListBatch
//!
//! Centralized configuration with sensible defaults.

use crate::error::{BatchError, Result};
use crate::protocol::ErrorPolicy;

/// Default maximum number of methods per batch document
pub const DEFAULT_SEGMENT_CAP: usize = 500;

/// Main configuration for a batch accumulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Segmentation
    // -------------------------------------------------------------------------
    /// Maximum number of operations rendered into one document
    pub segment_cap: usize,

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------
    /// `OnError` attribute stamped on every document
    pub error_policy: ErrorPolicy,

    /// How targets, field names and field values are embedded in markup
    pub escape_mode: EscapeMode,
}

/// Escaping applied to caller-supplied text at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Embed text verbatim. Values containing `<` or `&` produce broken markup.
    #[default]
    Raw,

    /// Replace `& < > " '` with their entity references
    Xml,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segment_cap: DEFAULT_SEGMENT_CAP,
            error_policy: ErrorPolicy::default(),
            escape_mode: EscapeMode::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the configuration can drive an accumulator
    pub fn validate(&self) -> Result<()> {
        if self.segment_cap == 0 {
            return Err(BatchError::Config(
                "segment cap must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the maximum number of operations per document
    pub fn segment_cap(mut self, cap: usize) -> Self {
        self.config.segment_cap = cap;
        self
    }

    /// Set the error policy forwarded to the batch processor
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.config.error_policy = policy;
        self
    }

    /// Set the escape mode used while rendering
    pub fn escape_mode(mut self, mode: EscapeMode) -> Self {
        self.config.escape_mode = mode;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
