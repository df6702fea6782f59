//! Method command definitions
//!
//! The `Cmd`, `ID` and `OnError` values written into batch documents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Command types understood by the batch processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodCommand {
    /// Create or update, depending on the row id
    Save,
    Delete,
}

impl MethodCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodCommand::Save => "Save",
            MethodCommand::Delete => "Delete",
        }
    }
}

impl fmt::Display for MethodCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row addressed by a method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowId {
    /// Sentinel for items that do not exist yet
    New,

    /// An existing item id
    Item(u32),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::New => f.write_str("New"),
            RowId::Item(id) => write!(f, "{}", id),
        }
    }
}

/// Run-wide directive for the batch processor
///
/// Purely descriptive: nothing in this crate branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Halt the document at the first failing method (`Return`)
    #[default]
    StopOnError,

    /// Keep processing past failing methods (`Continue`)
    ContinueOnError,
}

impl ErrorPolicy {
    /// Value of the `OnError` attribute
    pub fn wire_value(&self) -> &'static str {
        match self {
            ErrorPolicy::StopOnError => "Return",
            ErrorPolicy::ContinueOnError => "Continue",
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}
