//! Operation input
//!
//! Reads operations from JSON Lines for the command-line front end.
//!
//! ```text
//! {"op":"create","target":"LIST-GUID","fields":[{"name":"Title","value":"a"}]}
//! {"op":"update","target":"LIST-GUID","id":7,"fields":[...]}
//! {"op":"delete","target":"LIST-GUID","id":7}
//! ```

use std::io::BufRead;

use crate::error::{BatchError, Result};
use crate::protocol::Operation;

/// Parse every non-blank line as an `Operation`
///
/// Line numbers in errors are 1-based.
pub fn read_operations<R: BufRead>(reader: R) -> Result<Vec<Operation>> {
    let mut operations = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let operation = serde_json::from_str::<Operation>(trimmed).map_err(|e| {
            BatchError::Input {
                line: index + 1,
                message: e.to_string(),
            }
        })?;
        operations.push(operation);
    }

    Ok(operations)
}
