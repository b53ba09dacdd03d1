// ABOUTME: Single-pass byte-level HTML minifier with an enumerated option set.
// ABOUTME: Strips comments, collapses whitespace, reduces boolean attrs, unquotes safe values.

use memchr::{memchr, memmem};

/// Minification switches. Defaults match the blog pipeline: everything on
/// except attribute unquoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifyOptions {
    /// Strip SGML comments.
    pub remove_comments: bool,
    /// Collapse whitespace runs in text to a single space.
    pub remove_empty_space: bool,
    /// Aggressively drop whitespace at text boundaries, including between
    /// inline elements.
    pub remove_all_empty_space: bool,
    /// Emit bare boolean attributes without ="value".
    pub reduce_boolean_attributes: bool,
    /// Drop quotes around attribute values that need none.
    pub remove_optional_attribute_quotes: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            remove_comments: true,
            remove_empty_space: true,
            remove_all_empty_space: true,
            reduce_boolean_attributes: true,
            remove_optional_attribute_quotes: false,
        }
    }
}

/// Elements whose content is copied verbatim, both for parsing correctness
/// (script/style raw text) and for whitespace significance (pre/textarea).
const RAW_TEXT_TAGS: &[&str] = &["script", "style", "pre", "textarea"];

/// Phrasing-level elements. Whitespace touching these is a word separator
/// and must survive aggressive collapsing; whitespace against block-level
/// tags is layout-only and is dropped.
const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "br", "cite", "code", "data", "dfn", "em", "i", "kbd", "mark",
    "q", "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var", "wbr",
];

const BOOLEAN_ATTRS: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "selected",
];

/// Minify an HTML document. Pure text-to-text; malformed markup passes
/// through best-effort, never fails.
pub fn minify(html: &str, opts: &MinifyOptions) -> String {
    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len());
    let mut i = 0;
    // True when the content just emitted (text or an inline tag) can carry
    // a word boundary into the next text run.
    let mut inline_left = false;

    while i < bytes.len() {
        if bytes[i] == b'<' {
            if bytes[i..].starts_with(b"<!--") {
                let end = memmem::find(&bytes[i + 4..], b"-->")
                    .map(|p| i + 4 + p + 3)
                    .unwrap_or(bytes.len());
                if !opts.remove_comments {
                    out.push_str(&html[i..end]);
                }
                i = end;
            } else if bytes[i..].starts_with(b"<!") || bytes[i..].starts_with(b"<?") {
                // Doctype / processing instruction: copy verbatim.
                let end = memchr(b'>', &bytes[i..])
                    .map(|p| i + p + 1)
                    .unwrap_or(bytes.len());
                out.push_str(&html[i..end]);
                i = end;
                inline_left = false;
            } else if let Some(tag) = parse_tag(html, i) {
                emit_tag(&tag, opts, &mut out);
                let is_raw = !tag.closing
                    && !tag.self_closing
                    && RAW_TEXT_TAGS.iter().any(|t| tag.name.eq_ignore_ascii_case(t));
                i = tag.end;
                inline_left = is_inline_tag(tag.name);
                if is_raw {
                    let close = find_closing_tag(bytes, i, tag.name);
                    out.push_str(&html[i..close]);
                    i = close;
                }
            } else {
                // A lone '<' that does not open a tag.
                out.push('<');
                i += 1;
                inline_left = true;
            }
        } else {
            let stop = memchr(b'<', &bytes[i..])
                .map(|p| i + p)
                .unwrap_or(bytes.len());
            let text = &html[i..stop];
            let inline_right = inline_tag_at(html, stop);
            push_text(text, opts, inline_left, inline_right, &mut out);
            if text.bytes().any(|b| !b.is_ascii_whitespace()) {
                inline_left = true;
            }
            i = stop;
        }
    }

    out
}

fn is_inline_tag(name: &str) -> bool {
    INLINE_TAGS.iter().any(|t| name.eq_ignore_ascii_case(t))
}

/// Whether the tag starting at `pos` (if any) is inline-level.
fn inline_tag_at(src: &str, pos: usize) -> bool {
    let bytes = src.as_bytes();
    if bytes.get(pos) != Some(&b'<') {
        return false;
    }
    let mut i = pos + 1;
    if bytes.get(i) == Some(&b'/') {
        i += 1;
    }
    let start = i;
    while i < bytes.len() && is_name_byte(bytes[i]) {
        i += 1;
    }
    i > start && is_inline_tag(&src[start..i])
}

struct RawTag<'a> {
    closing: bool,
    name: &'a str,
    attrs: Vec<RawAttr<'a>>,
    self_closing: bool,
    /// Byte offset just past the closing '>'.
    end: usize,
}

struct RawAttr<'a> {
    name: &'a str,
    /// Raw value text and its quote byte (0 for unquoted).
    value: Option<(&'a str, u8)>,
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b':'
}

/// Parse one tag starting at the '<' at `start`. Returns None when the
/// text is not actually a tag (stray '<') or the tag is unterminated; the
/// caller passes such input through unchanged.
fn parse_tag(src: &str, start: usize) -> Option<RawTag<'_>> {
    let bytes = src.as_bytes();
    let mut i = start + 1;

    let closing = bytes.get(i) == Some(&b'/');
    if closing {
        i += 1;
    }

    let name_start = i;
    while i < bytes.len() && is_name_byte(bytes[i]) {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name = &src[name_start..i];

    let mut attrs = Vec::new();
    let mut self_closing = false;
    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        match bytes.get(i)? {
            b'>' => {
                i += 1;
                break;
            }
            b'/' if bytes.get(i + 1) == Some(&b'>') => {
                self_closing = true;
                i += 2;
                break;
            }
            b'/' => {
                i += 1;
            }
            _ => {
                let attr_start = i;
                while i < bytes.len()
                    && !bytes[i].is_ascii_whitespace()
                    && !matches!(bytes[i], b'=' | b'>' | b'/')
                {
                    i += 1;
                }
                if i == attr_start {
                    i += 1;
                    continue;
                }
                let attr_name = &src[attr_start..i];

                while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                let value = if bytes.get(i) == Some(&b'=') {
                    i += 1;
                    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                        i += 1;
                    }
                    match bytes.get(i) {
                        Some(&q) if q == b'"' || q == b'\'' => {
                            i += 1;
                            let v_start = i;
                            while i < bytes.len() && bytes[i] != q {
                                i += 1;
                            }
                            let v = &src[v_start..i];
                            if i < bytes.len() {
                                i += 1;
                            }
                            Some((v, q))
                        }
                        Some(_) => {
                            let v_start = i;
                            while i < bytes.len()
                                && !bytes[i].is_ascii_whitespace()
                                && bytes[i] != b'>'
                            {
                                i += 1;
                            }
                            Some((&src[v_start..i], 0))
                        }
                        None => return None,
                    }
                } else {
                    None
                };
                attrs.push(RawAttr {
                    name: attr_name,
                    value,
                });
            }
        }
    }

    Some(RawTag {
        closing,
        name,
        attrs,
        self_closing,
        end: i,
    })
}

fn emit_tag(tag: &RawTag, opts: &MinifyOptions, out: &mut String) {
    out.push('<');
    if tag.closing {
        out.push('/');
    }
    out.push_str(tag.name);

    for attr in &tag.attrs {
        out.push(' ');
        out.push_str(attr.name);
        let Some((value, quote)) = attr.value else {
            continue;
        };
        if opts.reduce_boolean_attributes
            && is_boolean_attr(attr.name)
            && (value.is_empty() || value.eq_ignore_ascii_case(attr.name))
        {
            continue;
        }
        out.push('=');
        if quote == 0 || (opts.remove_optional_attribute_quotes && is_unquoted_safe(value)) {
            out.push_str(value);
        } else {
            out.push(quote as char);
            out.push_str(value);
            out.push(quote as char);
        }
    }

    if tag.self_closing {
        out.push_str("/>");
    } else {
        out.push('>');
    }
}

fn is_boolean_attr(name: &str) -> bool {
    BOOLEAN_ATTRS.iter().any(|b| name.eq_ignore_ascii_case(b))
}

fn is_unquoted_safe(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| {
            !b.is_ascii_whitespace() && !matches!(b, b'"' | b'\'' | b'=' | b'<' | b'>' | b'`')
        })
}

/// Find the start of `</name`, case-insensitively, from `from`.
fn find_closing_tag(bytes: &[u8], from: usize, name: &str) -> usize {
    let mut i = from;
    while let Some(p) = memchr(b'<', &bytes[i..]) {
        let pos = i + p;
        let name_end = pos + 2 + name.len();
        if bytes.get(pos + 1) == Some(&b'/')
            && name_end <= bytes.len()
            && bytes[pos + 2..name_end].eq_ignore_ascii_case(name.as_bytes())
            && bytes
                .get(name_end)
                .map_or(true, |b| *b == b'>' || b.is_ascii_whitespace())
        {
            return pos;
        }
        i = pos + 1;
    }
    bytes.len()
}

fn push_text(
    text: &str,
    opts: &MinifyOptions,
    inline_left: bool,
    inline_right: bool,
    out: &mut String,
) {
    if opts.remove_all_empty_space {
        let mut words = text.split_ascii_whitespace();
        let Some(first) = words.next() else {
            // A whitespace-only run separates words only between inline
            // content; between block tags it is layout indentation.
            if inline_left && inline_right {
                out.push(' ');
            }
            return;
        };
        if inline_left && text.starts_with(|c: char| c.is_ascii_whitespace()) {
            out.push(' ');
        }
        out.push_str(first);
        for word in words {
            out.push(' ');
            out.push_str(word);
        }
        if inline_right && text.ends_with(|c: char| c.is_ascii_whitespace()) {
            out.push(' ');
        }
    } else if opts.remove_empty_space {
        let mut last_ws = false;
        for ch in text.chars() {
            if ch.is_ascii_whitespace() {
                if !last_ws {
                    out.push(' ');
                }
                last_ws = true;
            } else {
                out.push(ch);
                last_ws = false;
            }
        }
    } else {
        out.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_comments_by_default() {
        let out = minify("<p>a</p><!-- note --><p>b</p>", &MinifyOptions::default());
        assert_eq!(out, "<p>a</p><p>b</p>");
    }

    #[test]
    fn keeps_comments_when_asked() {
        let opts = MinifyOptions {
            remove_comments: false,
            ..Default::default()
        };
        let out = minify("<p>a</p><!-- note --><p>b</p>", &opts);
        assert_eq!(out, "<p>a</p><!-- note --><p>b</p>");
    }

    #[test]
    fn collapses_all_empty_space_aggressively() {
        let html = "<div>\n    <p>  a \t b  </p>\n    <p>c</p>\n</div>";
        let out = minify(html, &MinifyOptions::default());
        assert_eq!(out, "<div><p>a b</p><p>c</p></div>");
    }

    #[test]
    fn keeps_word_spacing_around_inline_elements() {
        let html = "<p>text with <em>emphasis</em> inside.</p>";
        let out = minify(html, &MinifyOptions::default());
        assert_eq!(out, "<p>text with <em>emphasis</em> inside.</p>");
    }

    #[test]
    fn keeps_the_space_between_adjacent_inline_elements() {
        let html = "<p><em>a</em>   <strong>b</strong></p>";
        let out = minify(html, &MinifyOptions::default());
        assert_eq!(out, "<p><em>a</em> <strong>b</strong></p>");
    }

    #[test]
    fn plain_collapse_keeps_single_boundary_spaces() {
        let opts = MinifyOptions {
            remove_all_empty_space: false,
            ..Default::default()
        };
        let out = minify("<p>  a   b  </p>\n<p>c</p>", &opts);
        assert_eq!(out, "<p> a b </p> <p>c</p>");
    }

    #[test]
    fn reduces_boolean_attributes() {
        let html = r#"<input type="checkbox" checked="checked" disabled="" required="required">"#;
        let out = minify(html, &MinifyOptions::default());
        assert_eq!(out, r#"<input type="checkbox" checked disabled required>"#);
    }

    #[test]
    fn boolean_values_survive_when_reduction_is_off() {
        let opts = MinifyOptions {
            reduce_boolean_attributes: false,
            ..Default::default()
        };
        let out = minify(r#"<input checked="checked">"#, &opts);
        assert_eq!(out, r#"<input checked="checked">"#);
    }

    #[test]
    fn unquotes_only_safe_values() {
        let opts = MinifyOptions {
            remove_optional_attribute_quotes: true,
            ..Default::default()
        };
        let html = r#"<a href="/x/y" title="hello world" data-n="5">l</a>"#;
        let out = minify(html, &opts);
        assert_eq!(out, r#"<a href=/x/y title="hello world" data-n=5>l</a>"#);
    }

    #[test]
    fn quotes_are_kept_by_default() {
        let out = minify(r#"<a href="/x/y">l</a>"#, &MinifyOptions::default());
        assert_eq!(out, r#"<a href="/x/y">l</a>"#);
    }

    #[test]
    fn preserves_pre_and_script_content() {
        let html = "<pre>  keep\n  this  </pre><script>if (a < b) { f(\"</div>\"); }</script>";
        let out = minify(html, &MinifyOptions::default());
        assert_eq!(out, html);
    }

    #[test]
    fn doctype_passes_through() {
        let out = minify("<!DOCTYPE html>\n<html><body> </body></html>", &MinifyOptions::default());
        assert_eq!(out, "<!DOCTYPE html><html><body></body></html>");
    }

    #[test]
    fn malformed_markup_passes_through_best_effort() {
        let opts = MinifyOptions {
            remove_all_empty_space: false,
            ..Default::default()
        };
        let out = minify("<p>1 < 2 and more</p>", &opts);
        assert!(out.contains("1 < 2"));
    }

    #[test]
    fn single_quoted_values_keep_their_quote() {
        let out = minify(r#"<a href='/a"b'>l</a>"#, &MinifyOptions::default());
        assert_eq!(out, r#"<a href='/a"b'>l</a>"#);
    }

    fn element_names(doc: &Document) -> Vec<String> {
        doc.select("*")
            .nodes()
            .iter()
            .filter_map(|n| n.node_name().map(|s| s.to_string()))
            .collect()
    }

    fn normalized(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn minified_document_parses_to_an_equivalent_tree() {
        let html = r#"<!DOCTYPE html>
<html>
  <head>
    <title>A page</title>
    <!-- build marker -->
  </head>
  <body>
    <div id="quarto-content" class="page-columns">
      <h2>Heading one</h2>
      <p>Some  text with   <em>emphasis</em> inside.</p>
      <input type="checkbox" checked="checked">
      <h2>Heading two</h2>
      <pre>  indented
  block</pre>
    </div>
  </body>
</html>"#;

        let minified = minify(html, &MinifyOptions::default());
        let original = Document::from(html);
        let output = Document::from(minified.as_str());

        assert_eq!(element_names(&original), element_names(&output));
        // Text equivalence per element: block-boundary indentation is the
        // one thing aggressive collapsing is allowed to drop.
        for tag in ["h2", "p", "em", "pre"] {
            assert_eq!(
                normalized(&original.select(tag).text()),
                normalized(&output.select(tag).text()),
                "text mismatch in <{}>",
                tag
            );
        }
        assert_eq!(
            output
                .select("div#quarto-content")
                .attr("class")
                .unwrap()
                .to_string(),
            "page-columns"
        );
    }
}
