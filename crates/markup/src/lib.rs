// ABOUTME: Library for post-processing static blog HTML pages.
// ABOUTME: Re-exports restructuring, minification, SEO enhancement, and error types.

//! postpress-markup — document transforms for static blog HTML.
//!
//! Three independent transforms, each taking one parsed document and
//! producing a transformed document:
//!
//! - [`restructure`]: rewrap a content wrapper into `<main><article>` with
//!   heading-delimited `<section>` groups and a JSON-LD script.
//! - [`minify`]: text-to-text HTML minification.
//! - [`seo::apply`]: merge JSON-LD plus meta/Open Graph/Twitter tags into
//!   the document head.
//!
//! # Example
//!
//! ```
//! use dom_query::Document;
//! use postpress_markup::{restructure, PageMeta, RestructureOptions};
//!
//! let doc = Document::from(
//!     r#"<html><head></head><body>
//!     <div id="quarto-content"><h2>Intro</h2><p>text</p></div>
//!     </body></html>"#,
//! );
//! restructure(&doc, &RestructureOptions::default(), &PageMeta::default()).unwrap();
//! assert!(doc.select("main > article > section").exists());
//! ```

pub mod dom;
pub mod error;
pub mod files;
pub mod metadata;
pub mod minify;
pub mod schema;
pub mod seo;

pub use crate::dom::restructure::{restructure, PageMeta, RestructureOptions};
pub use crate::error::{ErrorCode, TransformError};
pub use crate::metadata::{extract_existing, ExistingMeta};
pub use crate::minify::{minify, MinifyOptions};
pub use crate::schema::{ArticleLd, ArticleType, Organization, Person};
pub use crate::seo::{build_json_ld, collect_record, AcceptDefaults, AnswerSource, SeoRecord};
