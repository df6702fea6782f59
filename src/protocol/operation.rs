//! Operation definitions
//!
//! Represents list-item requests queued by callers.

use serde::{Deserialize, Serialize};

use super::{MethodCommand, RowId};

/// A single `name = value` assignment on a list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Internal field name
    pub name: String,

    /// Value as the batch processor expects to read it
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<K, V> From<(K, V)> for Field
where
    K: Into<String>,
    V: Into<String>,
{
    fn from((name, value): (K, V)) -> Self {
        Self::new(name, value)
    }
}

/// A queued list-item request
///
/// `target` is an opaque list identifier already resolved by the caller.
/// Field order is kept exactly as given, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    /// Add a new item
    Create {
        target: String,
        #[serde(default)]
        fields: Vec<Field>,
    },

    /// Overwrite fields on an existing item
    Update {
        target: String,
        id: u32,
        #[serde(default)]
        fields: Vec<Field>,
    },

    /// Remove an existing item
    Delete { target: String, id: u32 },
}

impl Operation {
    /// Build a create operation from any ordered pairs
    pub fn create<I, F>(target: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        Operation::Create {
            target: target.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Build an update operation from any ordered pairs
    pub fn update<I, F>(target: impl Into<String>, id: u32, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        Operation::Update {
            target: target.into(),
            id,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn delete(target: impl Into<String>, id: u32) -> Self {
        Operation::Delete {
            target: target.into(),
            id,
        }
    }

    /// The list this operation is addressed to
    pub fn target(&self) -> &str {
        match self {
            Operation::Create { target, .. }
            | Operation::Update { target, .. }
            | Operation::Delete { target, .. } => target,
        }
    }

    /// Get the `Cmd` value written for this operation
    pub fn command(&self) -> MethodCommand {
        match self {
            Operation::Create { .. } | Operation::Update { .. } => MethodCommand::Save,
            Operation::Delete { .. } => MethodCommand::Delete,
        }
    }

    /// Get the row written to the `ID` variable
    pub fn row_id(&self) -> RowId {
        match self {
            Operation::Create { .. } => RowId::New,
            Operation::Update { id, .. } | Operation::Delete { id, .. } => RowId::Item(*id),
        }
    }

    /// Field assignments (always empty for deletes)
    pub fn fields(&self) -> &[Field] {
        match self {
            Operation::Create { fields, .. } | Operation::Update { fields, .. } => fields,
            Operation::Delete { .. } => &[],
        }
    }
}

/// An operation stamped with its accumulator-wide sequence id
///
/// Rendered as one `<Method>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Unique across the whole accumulator, never reused
    pub sequence_id: u64,

    pub operation: Operation,
}
