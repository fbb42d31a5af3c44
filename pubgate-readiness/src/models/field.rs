//! Closed field catalog and typed field-error mapping
//!
//! Every record field the wizard or the criteria refer to is a `FieldId`
//! variant. Field errors from the host form layer are keyed by `FieldId`, so
//! an unknown field name is rejected at the boundary (`FromStr`) instead of
//! being silently ignored.

use crate::models::content_record::{non_blank, ContentRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Title,
    Slug,
    Excerpt,
    Body,
    Client,
    Author,
    Category,
    FeaturedImage,
    Gallery,
    SeoTitle,
    SeoDescription,
    FocusKeyword,
    SemanticKeywords,
    Robots,
    CanonicalUrl,
    OgTitle,
    OgDescription,
    OgImage,
    TwitterTitle,
    TwitterDescription,
    TwitterCard,
    Tags,
    Faqs,
    Citations,
    Language,
    SitemapPriority,
    SitemapChangeFrequency,
    PublishAt,
}

impl FieldId {
    pub const ALL: [FieldId; 28] = [
        FieldId::Title,
        FieldId::Slug,
        FieldId::Excerpt,
        FieldId::Body,
        FieldId::Client,
        FieldId::Author,
        FieldId::Category,
        FieldId::FeaturedImage,
        FieldId::Gallery,
        FieldId::SeoTitle,
        FieldId::SeoDescription,
        FieldId::FocusKeyword,
        FieldId::SemanticKeywords,
        FieldId::Robots,
        FieldId::CanonicalUrl,
        FieldId::OgTitle,
        FieldId::OgDescription,
        FieldId::OgImage,
        FieldId::TwitterTitle,
        FieldId::TwitterDescription,
        FieldId::TwitterCard,
        FieldId::Tags,
        FieldId::Faqs,
        FieldId::Citations,
        FieldId::Language,
        FieldId::SitemapPriority,
        FieldId::SitemapChangeFrequency,
        FieldId::PublishAt,
    ];

    /// Stable snake_case key (matches the serde representation)
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::Title => "title",
            FieldId::Slug => "slug",
            FieldId::Excerpt => "excerpt",
            FieldId::Body => "body",
            FieldId::Client => "client",
            FieldId::Author => "author",
            FieldId::Category => "category",
            FieldId::FeaturedImage => "featured_image",
            FieldId::Gallery => "gallery",
            FieldId::SeoTitle => "seo_title",
            FieldId::SeoDescription => "seo_description",
            FieldId::FocusKeyword => "focus_keyword",
            FieldId::SemanticKeywords => "semantic_keywords",
            FieldId::Robots => "robots",
            FieldId::CanonicalUrl => "canonical_url",
            FieldId::OgTitle => "og_title",
            FieldId::OgDescription => "og_description",
            FieldId::OgImage => "og_image",
            FieldId::TwitterTitle => "twitter_title",
            FieldId::TwitterDescription => "twitter_description",
            FieldId::TwitterCard => "twitter_card",
            FieldId::Tags => "tags",
            FieldId::Faqs => "faqs",
            FieldId::Citations => "citations",
            FieldId::Language => "language",
            FieldId::SitemapPriority => "sitemap_priority",
            FieldId::SitemapChangeFrequency => "sitemap_change_frequency",
            FieldId::PublishAt => "publish_at",
        }
    }

    /// "Is set" predicate: non-null, non-blank string, non-empty list,
    /// identified object
    pub fn is_set(&self, record: &ContentRecord) -> bool {
        fn text(value: &Option<String>) -> bool {
            non_blank(value.as_deref()).is_some()
        }

        match self {
            FieldId::Title => text(&record.title),
            FieldId::Slug => text(&record.slug),
            FieldId::Excerpt => text(&record.excerpt),
            FieldId::Body => text(&record.body),
            FieldId::Client => record.client.as_ref().is_some_and(|c| c.is_identified()),
            FieldId::Author => record.author.as_ref().is_some_and(|a| a.is_identified()),
            FieldId::Category => text(&record.category),
            FieldId::FeaturedImage => record.featured_image.as_ref().is_some_and(|i| i.has_url()),
            FieldId::Gallery => record.gallery.iter().any(|i| i.has_url()),
            FieldId::SeoTitle => text(&record.seo_title),
            FieldId::SeoDescription => text(&record.seo_description),
            FieldId::FocusKeyword => text(&record.focus_keyword),
            FieldId::SemanticKeywords => record
                .semantic_keywords
                .iter()
                .any(|k| !k.trim().is_empty()),
            FieldId::Robots => text(&record.robots),
            FieldId::CanonicalUrl => text(&record.canonical_url),
            FieldId::OgTitle => text(&record.og_title),
            FieldId::OgDescription => text(&record.og_description),
            FieldId::OgImage => text(&record.og_image),
            FieldId::TwitterTitle => text(&record.twitter_title),
            FieldId::TwitterDescription => text(&record.twitter_description),
            FieldId::TwitterCard => text(&record.twitter_card),
            FieldId::Tags => record.tags.iter().any(|t| !t.trim().is_empty()),
            FieldId::Faqs => !record.faqs.is_empty(),
            FieldId::Citations => !record.citations.is_empty(),
            FieldId::Language => text(&record.language),
            FieldId::SitemapPriority => record.sitemap_priority.is_some(),
            FieldId::SitemapChangeFrequency => text(&record.sitemap_change_frequency),
            FieldId::PublishAt => record.publish_at.is_some(),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unknown field key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .iter()
            .copied()
            .find(|f| f.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Field-level error messages from the host form layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FieldId, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn messages(&self, field: FieldId) -> &[String] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// At least one message is mapped to `field`
    pub fn has_error(&self, field: FieldId) -> bool {
        !self.messages(field).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn clear(&mut self, field: FieldId) {
        self.0.remove(&field);
    }
}
