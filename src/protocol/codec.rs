//! Protocol codec
//!
//! Rendering functions for the batch wire format.
//!
//! ## Wire Format
//!
//! ### Document
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?><ows:Batch OnError="{policy}">{methods}</ows:Batch>
//! ```
//!
//! ### Method
//! ```text
//! <Method ID="{seq}">
//!   <SetList>{target}</SetList>
//!   <SetVar Name="Cmd">{Save|Delete}</SetVar>
//!   <SetVar Name="ID">{New|item id}</SetVar>
//!   {fields}
//! </Method>
//! ```
//! (shown indented; rendered without whitespace)
//!
//! ### Field
//! ```text
//! <SetVar Name="urn:schemas-microsoft-com:office:office#{name}">{value}</SetVar>
//! ```

use std::borrow::Cow;

use crate::config::EscapeMode;
use super::{Document, ErrorPolicy, Field, Method};

/// Declaration prepended to every document
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Root element name
pub const BATCH_ELEMENT: &str = "ows:Batch";

/// Namespace prefix on every field `SetVar` name
pub const FIELD_NAME_PREFIX: &str = "urn:schemas-microsoft-com:office:office#";

// =============================================================================
// Escaping
// =============================================================================

/// Escape markup-significant characters according to `mode`
///
/// Borrows the input when nothing needs replacing.
pub fn escape_markup(text: &str, mode: EscapeMode) -> Cow<'_, str> {
    if mode == EscapeMode::Raw || !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

// =============================================================================
// Method Rendering
// =============================================================================

/// Append one `<Method>` element to `out`
pub fn render_method(out: &mut String, method: &Method, mode: EscapeMode) {
    let operation = &method.operation;

    out.push_str("<Method ID=\"");
    out.push_str(&method.sequence_id.to_string());
    out.push_str("\">");

    out.push_str("<SetList>");
    out.push_str(&escape_markup(operation.target(), mode));
    out.push_str("</SetList>");

    out.push_str("<SetVar Name=\"Cmd\">");
    out.push_str(operation.command().as_str());
    out.push_str("</SetVar>");

    out.push_str("<SetVar Name=\"ID\">");
    out.push_str(&operation.row_id().to_string());
    out.push_str("</SetVar>");

    for field in operation.fields() {
        render_field(out, field, mode);
    }

    out.push_str("</Method>");
}

/// Append one field `<SetVar>` element to `out`
fn render_field(out: &mut String, field: &Field, mode: EscapeMode) {
    out.push_str("<SetVar Name=\"");
    out.push_str(FIELD_NAME_PREFIX);
    out.push_str(&escape_markup(&field.name, mode));
    out.push_str("\">");
    out.push_str(&escape_markup(&field.value, mode));
    out.push_str("</SetVar>");
}

// =============================================================================
// Document Rendering
// =============================================================================

/// Render a full batch document around `methods`
///
/// An empty slice still yields a well-formed document with no methods.
pub fn render_document(policy: ErrorPolicy, methods: &[Method], mode: EscapeMode) -> Document {
    let mut xml = String::with_capacity(96 + methods.len() * 192);

    xml.push_str(XML_DECLARATION);
    xml.push('<');
    xml.push_str(BATCH_ELEMENT);
    xml.push_str(" OnError=\"");
    xml.push_str(policy.wire_value());
    xml.push_str("\">");

    for method in methods {
        render_method(&mut xml, method, mode);
    }

    xml.push_str("</");
    xml.push_str(BATCH_ELEMENT);
    xml.push('>');

    Document {
        error_policy: policy,
        method_count: methods.len(),
        first_sequence_id: methods.first().map(|m| m.sequence_id),
        xml,
    }
}
