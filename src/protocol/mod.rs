//! Protocol Module
//!
//! Defines the batch document format consumed by the list batch processor.
//!
//! ## Document Layout
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ <?xml ...?>                                          │
//! │ <ows:Batch OnError="Return|Continue">                │
//! │ ┌──────────────────────────────────────────────────┐ │
//! │ │ <Method ID="seq">                                │ │
//! │ │   SetList · Cmd · ID · field SetVars...          │ │
//! │ └──────────────────────────────────────────────────┘ │
//! │   ... one Method per operation ...                   │
//! │ </ows:Batch>                                         │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ### Commands
//! - Create: `Cmd=Save`,   `ID=New`,  field SetVars
//! - Update: `Cmd=Save`,   `ID={id}`, field SetVars
//! - Delete: `Cmd=Delete`, `ID={id}`, no field SetVars

mod command;
mod operation;
mod document;
mod codec;

pub use command::{ErrorPolicy, MethodCommand, RowId};
pub use operation::{Field, Method, Operation};
pub use document::Document;
pub use codec::{
    escape_markup, render_document, render_method, BATCH_ELEMENT, FIELD_NAME_PREFIX,
    XML_DECLARATION,
};
