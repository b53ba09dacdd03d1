// ABOUTME: Semantic restructurer: rewraps a content wrapper into main/article with sections.
// ABOUTME: Groups heading-delimited sibling runs into <section> and injects fixed JSON-LD.

use dom_query::{Document, NodeRef};
use serde_json::json;

use crate::dom::head::set_json_ld;
use crate::error::TransformError;

/// Where to find the content wrapper and which heading level bounds sections.
#[derive(Debug, Clone)]
pub struct RestructureOptions {
    /// Wrapper id tried first.
    pub wrapper_id: String,
    /// Wrapper class tried when the id does not match.
    pub wrapper_class: String,
    /// Heading level used as section boundaries.
    pub heading_level: u8,
}

impl Default for RestructureOptions {
    fn default() -> Self {
        Self {
            wrapper_id: "quarto-content".to_string(),
            wrapper_class: "page-columns".to_string(),
            heading_level: 2,
        }
    }
}

/// Page-level metadata for the fixed JSON-LD block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub headline: String,
    pub description: String,
    pub author_name: String,
    pub date_published: String,
    /// Canonical URL, written as mainEntityOfPage.
    pub page_url: String,
}

/// Rewrap the content wrapper's children into `<main><article>`, group
/// heading-delimited runs into `<section>` elements, replace the wrapper,
/// and append a JSON-LD script to the head.
///
/// Content before the first heading stays loose at the front of the
/// article. A document without a head element still restructures
/// successfully; only the JSON-LD step is skipped.
pub fn restructure(
    doc: &Document,
    opts: &RestructureOptions,
    meta: &PageMeta,
) -> Result<(), TransformError> {
    let by_id = doc.select_single(&format!("div#{}", opts.wrapper_id));
    let wrapper_sel = if by_id.exists() {
        by_id
    } else {
        doc.select_single(&format!("div.{}", opts.wrapper_class))
    };
    let Some(wrapper) = wrapper_sel.nodes().first() else {
        return Err(TransformError::no_content_wrapper(
            format!("div#{} / div.{}", opts.wrapper_id, opts.wrapper_class),
            "restructure",
        ));
    };

    let main_el = doc.tree.new_element("main");
    let article = doc.tree.new_element("article");
    main_el.append_child(&article);

    // Move (not copy) the wrapper's children, preserving order.
    for child in wrapper.children() {
        article.append_child(&child);
    }

    // Plan every section's run before mutating, so the walk can never
    // reach a section created for an earlier heading.
    let heading_tag = format!("h{}", opts.heading_level);
    let mut runs = Vec::new();
    for heading in collect_headings(&article, &heading_tag) {
        let mut next = heading.next_sibling();
        let mut run = vec![heading];
        while let Some(node) = next {
            if is_named(&node, &heading_tag) {
                break;
            }
            next = node.next_sibling();
            run.push(node);
        }
        runs.push(run);
    }
    for run in runs {
        let section = doc.tree.new_element("section");
        for node in run {
            section.append_child(&node);
        }
        article.append_child(&section);
    }

    // The wrapper itself is discarded, not serialized.
    wrapper.replace_with(&main_el);

    let mut ld = json!({
        "@context": "https://schema.org",
        "@type": "TechArticle",
        "headline": meta.headline,
        "description": meta.description,
        "author": { "@type": "Person", "name": meta.author_name },
        "datePublished": meta.date_published,
    });
    // An empty URL is omitted, like every other empty value.
    if !meta.page_url.is_empty() {
        ld["mainEntityOfPage"] = json!(meta.page_url);
    }
    if let Ok(json) = serde_json::to_string_pretty(&ld) {
        set_json_ld(doc, &json);
    }

    Ok(())
}

fn is_named(node: &NodeRef, name: &str) -> bool {
    node.node_name().map_or(false, |n| n.as_ref() == name)
}

/// Headings at the sectioning level anywhere under `node`, in document
/// order. Does not descend into the headings themselves.
fn collect_headings<'a>(node: &NodeRef<'a>, tag: &str) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    collect_headings_into(node, tag, &mut out);
    out
}

fn collect_headings_into<'a>(node: &NodeRef<'a>, tag: &str, out: &mut Vec<NodeRef<'a>>) {
    for child in node.children() {
        if is_named(&child, tag) {
            out.push(child);
        } else {
            collect_headings_into(&child, tag, out);
        }
    }
}
