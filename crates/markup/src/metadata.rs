// ABOUTME: Extraction of pre-existing metadata from a document head.
// ABOUTME: Scrapes title, description, author, and dcterms.date to pre-fill enhancer defaults.

use dom_query::Document;
use serde::{Deserialize, Serialize};

/// Metadata already present in the document, used to pre-fill prompts.
/// Missing values stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExistingMeta {
    pub title: String,
    pub description: String,
    pub author: String,
    pub date_published: String,
}

/// Helper to extract meta content by name attribute.
fn meta_content(doc: &Document, name: &str) -> Option<String> {
    let sel = doc.select(&format!("meta[name='{}']", name));
    let content = sel.attr("content")?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Scrape the known head locations: `<title>`, `meta[name=description]`,
/// `meta[name=author]`, `meta[name=dcterms.date]`.
pub fn extract_existing(doc: &Document) -> ExistingMeta {
    ExistingMeta {
        title: doc.select("title").text().trim().to_string(),
        description: meta_content(doc, "description").unwrap_or_default(),
        author: meta_content(doc, "author").unwrap_or_default(),
        date_published: meta_content(doc, "dcterms.date").unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_known_head_fields() {
        let html = r#"
            <!DOCTYPE html>
            <html>
            <head>
                <title>  Gradient Accumulation  </title>
                <meta name="description" content="How to accumulate gradients.">
                <meta name="author" content="Z. Author">
                <meta name="dcterms.date" content="2025-06-27">
            </head>
            <body></body>
            </html>
        "#;
        let doc = Document::from(html);

        let meta = extract_existing(&doc);
        assert_eq!(meta.title, "Gradient Accumulation");
        assert_eq!(meta.description, "How to accumulate gradients.");
        assert_eq!(meta.author, "Z. Author");
        assert_eq!(meta.date_published, "2025-06-27");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let doc = Document::from("<html><head></head><body></body></html>");
        assert_eq!(extract_existing(&doc), ExistingMeta::default());
    }

    #[test]
    fn whitespace_only_content_counts_as_missing() {
        let html = r#"<html><head><meta name="description" content="   "></head></html>"#;
        let doc = Document::from(html);
        assert_eq!(extract_existing(&doc).description, "");
    }
}
