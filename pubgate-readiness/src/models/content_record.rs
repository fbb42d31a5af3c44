//! Content record supplied by the host editor
//!
//! The record is a partial, continuously edited document. Every field is
//! optional on the wire: missing keys, `null`, empty strings and empty arrays
//! all deserialize cleanly and are treated uniformly as "absent" by the
//! engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// An article-like document under edit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentRecord {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    /// Body text (markdown or light HTML)
    pub body: Option<String>,

    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub focus_keyword: Option<String>,
    pub robots: Option<String>,
    pub canonical_url: Option<String>,

    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_card: Option<String>,

    pub featured_image: Option<ImageRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub gallery: Vec<ImageRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub faqs: Vec<FaqEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub citations: Vec<Citation>,
    #[serde(deserialize_with = "null_as_default")]
    pub semantic_keywords: Vec<String>,

    /// Publishing organization
    pub client: Option<ClientRef>,
    pub author: Option<AuthorRef>,
    pub category: Option<String>,
    /// BCP 47 language tag, e.g. "en-GB"
    pub language: Option<String>,

    pub sitemap_priority: Option<f32>,
    pub sitemap_change_frequency: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub status: ContentStatus,
    pub publish_at: Option<DateTime<Utc>>,
}

/// Image reference (featured image, gallery entry)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageRef {
    pub url: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ImageRef {
    pub fn has_url(&self) -> bool {
        non_blank(self.url.as_deref()).is_some()
    }

    pub fn has_alt(&self) -> bool {
        non_blank(self.alt.as_deref()).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl FaqEntry {
    /// Both question and answer filled in
    pub fn is_complete(&self) -> bool {
        non_blank(self.question.as_deref()).is_some() && non_blank(self.answer.as_deref()).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Citation {
    pub url: Option<String>,
    pub title: Option<String>,
}

/// Publishing organization ("client")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientRef {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
}

impl ClientRef {
    pub fn is_identified(&self) -> bool {
        self.id.is_some() || non_blank(self.name.as_deref()).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorRef {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub url: Option<String>,
}

impl AuthorRef {
    pub fn is_identified(&self) -> bool {
        self.id.is_some() || non_blank(self.name.as_deref()).is_some()
    }
}

/// Editorial status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Scheduled,
    Published,
    Archived,
}

/// Trimmed text, or None when absent/blank
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// First non-blank value in priority order
pub fn first_non_blank<'a>(values: &[Option<&'a str>]) -> Option<&'a str> {
    values.iter().find_map(|v| non_blank(*v))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nulls_and_missing_keys_deserialize_as_absent() {
        let record: ContentRecord = serde_json::from_str(
            r#"{
                "title": null,
                "gallery": null,
                "tags": null,
                "status": null,
                "featuredImage": { "url": "", "alt": null }
            }"#,
        )
        .unwrap();

        assert!(record.title.is_none());
        assert!(record.gallery.is_empty());
        assert!(record.tags.is_empty());
        assert_eq!(record.status, ContentStatus::Draft);
        let image = record.featured_image.unwrap();
        assert!(!image.has_url());
        assert!(!image.has_alt());
    }

    #[test]
    fn test_camel_case_keys() {
        let record: ContentRecord = serde_json::from_str(
            r#"{ "seoTitle": "Hello", "canonicalUrl": "https://example.com/a", "sitemapPriority": 0.8 }"#,
        )
        .unwrap();
        assert_eq!(record.seo_title.as_deref(), Some("Hello"));
        assert_eq!(record.canonical_url.as_deref(), Some("https://example.com/a"));
        assert_eq!(record.sitemap_priority, Some(0.8));
    }

    #[test]
    fn test_non_blank_helpers() {
        assert_eq!(non_blank(Some("  hi ")), Some("hi"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(first_non_blank(&[None, Some(""), Some("b"), Some("c")]), Some("b"));
    }

    #[test]
    fn test_faq_completeness() {
        let partial = FaqEntry {
            question: Some("Why?".into()),
            answer: Some("  ".into()),
        };
        assert!(!partial.is_complete());
    }
}
