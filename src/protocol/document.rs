//! Document definitions
//!
//! A rendered batch, ready to hand to a submitter.

use std::fmt;

use super::ErrorPolicy;

/// One rendered `<ows:Batch>` document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Policy stamped on the root element
    pub(crate) error_policy: ErrorPolicy,

    /// Number of `<Method>` elements in the body
    pub(crate) method_count: usize,

    /// Sequence id of the first method, if any
    pub(crate) first_sequence_id: Option<u64>,

    /// Full markup, declaration included
    pub(crate) xml: String,
}

impl Document {
    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    pub fn method_count(&self) -> usize {
        self.method_count
    }

    /// Whether the document carries no methods
    pub fn is_empty(&self) -> bool {
        self.method_count == 0
    }

    pub fn first_sequence_id(&self) -> Option<u64> {
        self.first_sequence_id
    }

    /// Get the markup
    pub fn as_str(&self) -> &str {
        &self.xml
    }

    pub fn into_string(self) -> String {
        self.xml
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.xml
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.xml)
    }
}
