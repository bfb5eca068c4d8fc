// file: src/render.rs
// description: console formatting for an extracted metadata record
// reference: fixed eight-field summary layout

use crate::models::MetadataRecord;

const NOT_FOUND: &str = "not found";

/// Format the metadata block. Resource lines appear only when the upstream
/// document actually carried the identifier; everything else falls back to
/// the "not found" sentinel.
pub fn format_record(record: &MetadataRecord) -> String {
    let mut out = String::new();

    push_field(&mut out, "AUTHOR", record.author.as_deref());
    push_resource(&mut out, record.author_resource.as_deref());
    push_field(&mut out, "PUBLISHER", record.publisher.as_deref());
    push_resource(&mut out, record.publisher_resource.as_deref());
    push_field(&mut out, "PUBLICATION DATE", record.publication_date.as_deref());
    push_field(&mut out, "NUMBER OF PAGES", record.pages.as_deref());
    push_field(&mut out, "GENRE", record.genre.as_deref());

    out.push_str(&format!(
        "- ABSTRACT: \n{}\n",
        record.abstract_text.as_deref().unwrap_or(NOT_FOUND)
    ));

    out
}

fn push_field(out: &mut String, label: &str, value: Option<&str>) {
    out.push_str(&format!("- {}: {}\n", label, value.unwrap_or(NOT_FOUND)));
}

fn push_resource(out: &mut String, value: Option<&str>) {
    if let Some(uri) = value {
        out.push_str(&format!("-> for more info see {}\n", uri));
    }
}
