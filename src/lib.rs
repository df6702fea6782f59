//! # ListBatch
//!
//! Bounded batch accumulation for list-item operations:
//! - Create / update / delete requests queued in arrival order
//! - Accumulator-wide sequence ids that never repeat
//! - Overflow-driven segmentation at a fixed cap (default 500)
//! - One `<ows:Batch>` document per segment, submitted through an injected
//!   `Submitter`
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │          Caller (create_item / update_item / delete_item)   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ append
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   BatchAccumulator                           │
//! │        Segment 0 │ Segment 1 │ ... │ Segment N (active)      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ render
//!                       ▼
//!               ┌───────────────┐
//!               │   Documents   │  (protocol::codec)
//!               └───────┬───────┘
//!                       │ run, one call per document
//!                       ▼
//!               ┌───────────────┐
//!               │   Submitter   │  (external batch endpoint)
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod accumulator;
pub mod submit;
pub mod input;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BatchError, Result};
pub use config::{Config, EscapeMode};
pub use accumulator::{BatchAccumulator, Segment};
pub use protocol::{Document, ErrorPolicy, Field, Operation};
pub use submit::Submitter;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ListBatch
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
