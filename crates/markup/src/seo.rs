// ABOUTME: SEO enhancer: metadata record collection, JSON-LD synthesis, and head merging.
// ABOUTME: The AnswerSource trait lets collection run interactively or fully parameterized.

use std::io;

use chrono::Local;
use dom_query::Document;
use serde::{Deserialize, Serialize};

use crate::dom::head::{set_json_ld, upsert_meta_name, upsert_meta_property};
use crate::metadata::ExistingMeta;
use crate::schema::{ArticleLd, ArticleType, Organization, Person, SCHEMA_ORG_CONTEXT};

/// Supplies answers for the metadata collection pass: an interactive
/// prompter, fixed defaults, or a scripted source in tests.
pub trait AnswerSource {
    /// Answer a free-form question. An implementation returning the default
    /// unchanged accepts it.
    fn ask(&mut self, label: &str, default: &str) -> io::Result<String>;

    /// Answer a yes/no question.
    fn confirm(&mut self, label: &str, default: bool) -> io::Result<bool>;
}

/// Accepts every default and declines the optional fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptDefaults;

impl AnswerSource for AcceptDefaults {
    fn ask(&mut self, _label: &str, default: &str) -> io::Result<String> {
        Ok(default.to_string())
    }

    fn confirm(&mut self, _label: &str, default: bool) -> io::Result<bool> {
        Ok(default)
    }
}

/// The completed metadata record, consumed to build JSON-LD and meta tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoRecord {
    pub article_type: ArticleType,
    pub headline: String,
    pub description: String,
    pub meta_description: String,
    pub keywords: String,
    pub author_name: String,
    pub author_url: String,
    pub date_published: String,
    pub date_modified: Option<String>,
    pub publisher_name: String,
    pub publisher_url: String,
    pub image_url: Option<String>,
}

impl SeoRecord {
    /// The meta description falls back to the article description.
    pub fn meta_description(&self) -> &str {
        if self.meta_description.is_empty() {
            &self.description
        } else {
            &self.meta_description
        }
    }

    /// `<meta name=…>` tags in write order. Empty values are skipped at
    /// merge time.
    pub fn meta_tags(&self) -> Vec<(&'static str, String)> {
        vec![
            ("description", self.meta_description().to_string()),
            ("author", self.author_name.clone()),
            ("keywords", self.keywords.clone()),
            ("robots", "index, follow".to_string()),
            ("viewport", "width=device-width, initial-scale=1.0".to_string()),
        ]
    }

    /// Open Graph tags, keyed by the `property` attribute.
    pub fn og_tags(&self) -> Vec<(&'static str, String)> {
        let mut tags = vec![
            ("og:title", self.headline.clone()),
            ("og:description", self.meta_description().to_string()),
            ("og:type", "article".to_string()),
            ("og:url", self.publisher_url.clone()),
        ];
        if let Some(image) = &self.image_url {
            tags.push(("og:image", image.clone()));
        }
        tags
    }

    /// Twitter Card tags, keyed by the `name` attribute.
    pub fn twitter_tags(&self) -> Vec<(&'static str, String)> {
        let mut tags = vec![
            ("twitter:card", "summary_large_image".to_string()),
            ("twitter:title", self.headline.clone()),
            ("twitter:description", self.meta_description().to_string()),
        ];
        if let Some(image) = &self.image_url {
            tags.push(("twitter:image", image.clone()));
        }
        tags
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Complete a metadata record, pre-filled from scraped values. Each field
/// has an explicit default: scraped value where one exists, a fixed
/// fallback otherwise. Publisher defaults to the author; the published
/// date defaults to today when the document carries none.
pub fn collect_record(
    existing: &ExistingMeta,
    source: &mut dyn AnswerSource,
) -> io::Result<SeoRecord> {
    let type_answer = source.ask(
        "Article type (TechArticle, BlogPosting, Article, NewsArticle)",
        ArticleType::default().as_str(),
    )?;
    // An unrecognized answer falls back to the default.
    let article_type = type_answer.parse().unwrap_or_default();

    let headline = source.ask("Article headline/title", &existing.title)?;
    let description = source.ask("Article description", &existing.description)?;
    let meta_description = source.ask(
        "Meta description (empty uses the article description)",
        &description,
    )?;
    let keywords = source.ask("Keywords (comma-separated)", "")?;

    let author_name = source.ask("Author name", &existing.author)?;
    let author_url = source.ask("Author URL", "")?;

    let default_date = if existing.date_published.is_empty() {
        today()
    } else {
        existing.date_published.clone()
    };
    let date_published = source.ask("Publication date (YYYY-MM-DD)", &default_date)?;

    let date_modified = if source.confirm("Add modified date?", false)? {
        Some(source.ask("Modified date (YYYY-MM-DD)", &today())?)
    } else {
        None
    };

    let publisher_name = source.ask("Publisher name", &author_name)?;
    let publisher_url = source.ask("Publisher URL", &author_url)?;

    let image_url = if source.confirm("Add article image URL?", false)? {
        let url = source.ask("Image URL", "")?;
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    } else {
        None
    };

    Ok(SeoRecord {
        article_type,
        headline,
        description,
        meta_description,
        keywords,
        author_name,
        author_url,
        date_published,
        date_modified,
        publisher_name,
        publisher_url,
        image_url,
    })
}

/// Synthesize the JSON-LD object. Optional keys are added only when present.
pub fn build_json_ld(record: &SeoRecord) -> ArticleLd {
    ArticleLd {
        context: SCHEMA_ORG_CONTEXT.to_string(),
        article_type: record.article_type,
        headline: record.headline.clone(),
        description: record.description.clone(),
        author: Person::new(&record.author_name, &record.author_url),
        publisher: Organization::new(&record.publisher_name, &record.publisher_url),
        date_published: record.date_published.clone(),
        date_modified: record.date_modified.clone(),
        image: record.image_url.clone(),
        keywords: if record.keywords.is_empty() {
            None
        } else {
            Some(record.keywords.clone())
        },
    }
}

/// Merge the record's JSON-LD and tag set into the document head.
/// Returns false when the document has no head element; everything is
/// skipped with a warning but the run is not aborted.
pub fn apply(doc: &Document, record: &SeoRecord) -> bool {
    if !doc.select("head").exists() {
        log::warn!("no <head> element; skipping SEO enhancement");
        return false;
    }

    if let Ok(json) = serde_json::to_string_pretty(&build_json_ld(record)) {
        set_json_ld(doc, &json);
    }
    for (name, content) in record.meta_tags() {
        upsert_meta_name(doc, name, &content);
    }
    for (property, content) in record.og_tags() {
        upsert_meta_property(doc, property, &content);
    }
    for (name, content) in record.twitter_tags() {
        upsert_meta_name(doc, name, &content);
    }
    true
}
