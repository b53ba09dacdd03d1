// ABOUTME: Head-merge primitives: JSON-LD script replacement and meta tag upserts.
// ABOUTME: Tags are keyed by script type or meta name/property; same-key writes replace in place.

use dom_query::Document;

/// Selector for the document's structured-data script.
pub const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

/// Replace any existing JSON-LD script with a fresh one appended to head.
/// At most one such script exists afterwards. Returns false (with a warning)
/// when the document has no head element.
pub fn set_json_ld(doc: &Document, json: &str) -> bool {
    let head = doc.select_single("head");
    if !head.exists() {
        log::warn!("no <head> element; skipping JSON-LD injection");
        return false;
    }

    doc.select(JSON_LD_SELECTOR).remove();
    head.append_html(format!(
        r#"<script type="application/ld+json">{}</script>"#,
        json
    ));
    true
}

/// Update-or-append a `<meta name=…>` tag. Empty content skips the tag
/// entirely rather than writing an empty one.
pub fn upsert_meta_name(doc: &Document, name: &str, content: &str) -> bool {
    upsert_meta(doc, "name", name, content)
}

/// Update-or-append a `<meta property=…>` tag (Open Graph).
pub fn upsert_meta_property(doc: &Document, property: &str, content: &str) -> bool {
    upsert_meta(doc, "property", property, content)
}

fn upsert_meta(doc: &Document, key_attr: &str, key: &str, content: &str) -> bool {
    if content.is_empty() {
        return false;
    }

    let head = doc.select_single("head");
    if !head.exists() {
        log::warn!("no <head> element; skipping meta {}", key);
        return false;
    }

    let existing = doc.select(&format!("meta[{}='{}']", key_attr, key));
    if existing.exists() {
        existing.set_attr("content", content);
    } else {
        head.append_html(format!(
            r#"<meta {}="{}" content="{}">"#,
            key_attr,
            key,
            escape_attr(content)
        ));
    }
    true
}

/// Escape attribute value.
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
