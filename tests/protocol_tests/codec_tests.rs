//! Codec Tests
//!
//! Tests for method and document rendering.

use listbatch::config::EscapeMode;
use listbatch::protocol::{
    escape_markup, render_document, render_method, ErrorPolicy, Field, Method, Operation,
    XML_DECLARATION,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn method(sequence_id: u64, operation: Operation) -> Method {
    Method {
        sequence_id,
        operation,
    }
}

fn render_one(m: &Method, mode: EscapeMode) -> String {
    let mut out = String::new();
    render_method(&mut out, m, mode);
    out
}

// =============================================================================
// Method Rendering Tests
// =============================================================================

#[test]
fn test_render_create() {
    let m = method(0, Operation::create("LIST-1", [("Title", "Hello")]));

    assert_eq!(
        render_one(&m, EscapeMode::Raw),
        "<Method ID=\"0\">\
         <SetList>LIST-1</SetList>\
         <SetVar Name=\"Cmd\">Save</SetVar>\
         <SetVar Name=\"ID\">New</SetVar>\
         <SetVar Name=\"urn:schemas-microsoft-com:office:office#Title\">Hello</SetVar>\
         </Method>"
    );
}

#[test]
fn test_render_update() {
    let m = method(
        41,
        Operation::update("LIST-1", 17, [("Title", "x"), ("Status", "Done")]),
    );

    assert_eq!(
        render_one(&m, EscapeMode::Raw),
        "<Method ID=\"41\">\
         <SetList>LIST-1</SetList>\
         <SetVar Name=\"Cmd\">Save</SetVar>\
         <SetVar Name=\"ID\">17</SetVar>\
         <SetVar Name=\"urn:schemas-microsoft-com:office:office#Title\">x</SetVar>\
         <SetVar Name=\"urn:schemas-microsoft-com:office:office#Status\">Done</SetVar>\
         </Method>"
    );
}

#[test]
fn test_render_delete_has_no_fields() {
    let m = method(3, Operation::delete("LIST-1", 5));

    assert_eq!(
        render_one(&m, EscapeMode::Raw),
        "<Method ID=\"3\">\
         <SetList>LIST-1</SetList>\
         <SetVar Name=\"Cmd\">Delete</SetVar>\
         <SetVar Name=\"ID\">5</SetVar>\
         </Method>"
    );
}

#[test]
fn test_render_create_without_fields() {
    let m = method(0, Operation::create("L", Vec::<Field>::new()));
    let out = render_one(&m, EscapeMode::Raw);

    assert!(out.ends_with("<SetVar Name=\"ID\">New</SetVar></Method>"));
}

#[test]
fn test_duplicate_fields_kept_in_order() {
    let m = method(
        0,
        Operation::create("L", [("A", "1"), ("B", "2"), ("A", "3")]),
    );
    let out = render_one(&m, EscapeMode::Raw);

    let first = out.find("#A\">1<").unwrap();
    let second = out.find("#B\">2<").unwrap();
    let third = out.find("#A\">3<").unwrap();
    assert!(first < second && second < third);
}

// =============================================================================
// Escaping Tests
// =============================================================================

#[test]
fn test_raw_mode_embeds_verbatim() {
    let m = method(0, Operation::create("L", [("Title", "a < b & c")]));
    let out = render_one(&m, EscapeMode::Raw);

    assert!(out.contains(">a < b & c</SetVar>"));
}

#[test]
fn test_xml_mode_escapes_values_names_and_targets() {
    let m = method(0, Operation::create("L&1", [("Q\"", "a < b & 'c' >")]));
    let out = render_one(&m, EscapeMode::Xml);

    assert!(out.contains("<SetList>L&amp;1</SetList>"));
    assert!(out.contains("office#Q&quot;\">"));
    assert!(out.contains(">a &lt; b &amp; &apos;c&apos; &gt;</SetVar>"));
}

#[test]
fn test_escape_borrows_clean_text() {
    use std::borrow::Cow;

    assert!(matches!(escape_markup("plain", EscapeMode::Xml), Cow::Borrowed(_)));
    assert!(matches!(escape_markup("a&b", EscapeMode::Raw), Cow::Borrowed(_)));
    assert_eq!(escape_markup("a&b", EscapeMode::Xml), "a&amp;b");
}

// =============================================================================
// Document Rendering Tests
// =============================================================================

#[test]
fn test_render_empty_document() {
    let doc = render_document(ErrorPolicy::StopOnError, &[], EscapeMode::Raw);

    assert_eq!(
        doc.as_str(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><ows:Batch OnError=\"Return\"></ows:Batch>"
    );
    assert!(doc.is_empty());
    assert_eq!(doc.method_count(), 0);
    assert_eq!(doc.first_sequence_id(), None);
}

#[test]
fn test_render_document_with_continue_policy() {
    let methods = vec![
        method(7, Operation::create("L", [("a", "1")])),
        method(8, Operation::delete("L", 2)),
    ];
    let doc = render_document(ErrorPolicy::ContinueOnError, &methods, EscapeMode::Raw);

    assert!(doc.as_str().starts_with(XML_DECLARATION));
    assert!(doc.as_str().contains("<ows:Batch OnError=\"Continue\">"));
    assert!(doc.as_str().ends_with("</Method></ows:Batch>"));
    assert_eq!(doc.method_count(), 2);
    assert_eq!(doc.first_sequence_id(), Some(7));
    assert_eq!(doc.error_policy(), ErrorPolicy::ContinueOnError);
    assert_eq!(doc.as_str().matches("<Method ID=").count(), 2);
}

#[test]
fn test_document_display_matches_markup() {
    let doc = render_document(ErrorPolicy::StopOnError, &[], EscapeMode::Raw);
    assert_eq!(doc.to_string(), doc.as_str());
    assert_eq!(doc.clone().into_string(), doc.as_str());
}
