// ABOUTME: schema.org JSON-LD types emitted by the SEO enhancer.
// ABOUTME: ArticleType enum plus typed ArticleLd/Person/Organization structs with optional keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The schema.org `@context` value.
pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// schema.org article types the enhancer can emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleType {
    #[default]
    TechArticle,
    BlogPosting,
    Article,
    NewsArticle,
}

impl ArticleType {
    pub const ALL: [ArticleType; 4] = [
        ArticleType::TechArticle,
        ArticleType::BlogPosting,
        ArticleType::Article,
        ArticleType::NewsArticle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleType::TechArticle => "TechArticle",
            ArticleType::BlogPosting => "BlogPosting",
            ArticleType::Article => "Article",
            ArticleType::NewsArticle => "NewsArticle",
        }
    }
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown article type: {0}")]
pub struct UnknownArticleType(pub String);

impl FromStr for ArticleType {
    type Err = UnknownArticleType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleType::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| UnknownArticleType(s.to_string()))
    }
}

/// schema.org Person sub-object (article author).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Person {
    /// An empty url is omitted from the serialized object.
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            kind: "Person".to_string(),
            name: name.to_string(),
            url: if url.is_empty() {
                None
            } else {
                Some(url.to_string())
            },
        }
    }
}

/// schema.org Organization sub-object (publisher).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Organization {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            kind: "Organization".to_string(),
            name: name.to_string(),
            url: if url.is_empty() {
                None
            } else {
                Some(url.to_string())
            },
        }
    }
}

/// The JSON-LD object written by the SEO enhancer. Optional keys are only
/// serialized when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleLd {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub article_type: ArticleType,
    pub headline: String,
    pub description: String,
    pub author: Person,
    pub publisher: Organization,
    #[serde(rename = "datePublished")]
    pub date_published: String,
    #[serde(rename = "dateModified", skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}
