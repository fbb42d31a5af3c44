//! Saved validation snapshot
//!
//! On explicit save the host persists four artifacts: the JSON-LD string, a
//! head-metadata object, the validation report and the generation time. The
//! engine builds them; persisting them is the host's job.
//!
//! `record_graph` and `record_metadata` give hosts without their own
//! serializer a graph and metadata derived from the record.

use crate::models::content_record::{first_non_blank, non_blank};
use crate::models::ContentRecord;
use crate::structured_data::ValidationReport;
use chrono::{DateTime, Utc};
use pubgate_common::time;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSnapshot {
    pub json_ld: String,
    pub metadata: Value,
    pub report: ValidationReport,
    pub generated_at: DateTime<Utc>,
}

impl ValidationSnapshot {
    pub fn new(graph: &Value, metadata: Value, report: ValidationReport) -> Self {
        Self {
            json_ld: graph.to_string(),
            metadata,
            report,
            generated_at: time::now(),
        }
    }

    /// `generated_at` as stored alongside the cached artifacts
    pub fn generated_at_display(&self) -> String {
        time::format_timestamp(&self.generated_at)
    }
}

fn insert_text(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = non_blank(value) {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
}

/// Article graph derived from the record: Article plus publisher
/// Organization and author Person nodes where the record identifies them
pub fn record_graph(record: &ContentRecord) -> Value {
    let base = non_blank(record.canonical_url.as_deref()).unwrap_or("");
    let article_id = format!("{}#article", base);
    let publisher_id = format!("{}#publisher", base);
    let author_id = format!("{}#author", base);

    let mut article = Map::new();
    article.insert("@type".into(), json!("Article"));
    article.insert("@id".into(), json!(article_id));
    insert_text(
        &mut article,
        "headline",
        first_non_blank(&[record.seo_title.as_deref(), record.title.as_deref()]),
    );
    insert_text(
        &mut article,
        "description",
        first_non_blank(&[record.seo_description.as_deref(), record.excerpt.as_deref()]),
    );
    insert_text(&mut article, "url", record.canonical_url.as_deref());
    insert_text(&mut article, "inLanguage", record.language.as_deref());
    insert_text(&mut article, "articleSection", record.category.as_deref());
    if let Some(url) = record
        .featured_image
        .as_ref()
        .filter(|i| i.has_url())
        .and_then(|i| non_blank(i.url.as_deref()))
    {
        article.insert("image".into(), json!({ "@type": "ImageObject", "url": url }));
    }
    if let Some(published) = record.publish_at {
        article.insert("datePublished".into(), json!(published.to_rfc3339()));
    }
    let keywords: Vec<&str> = record
        .tags
        .iter()
        .chain(record.semantic_keywords.iter())
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();
    if !keywords.is_empty() {
        article.insert("keywords".into(), json!(keywords.join(", ")));
    }

    let mut nodes = Vec::new();

    if let Some(client) = record.client.as_ref().filter(|c| c.is_identified()) {
        let mut org = Map::new();
        org.insert("@type".into(), json!("Organization"));
        org.insert("@id".into(), json!(publisher_id));
        insert_text(&mut org, "name", client.name.as_deref());
        insert_text(&mut org, "url", client.website.as_deref());
        if let Some(logo) = non_blank(client.logo_url.as_deref()) {
            org.insert("logo".into(), json!({ "@type": "ImageObject", "url": logo }));
        }
        article.insert("publisher".into(), json!({ "@id": publisher_id }));
        nodes.push(Value::Object(org));
    }

    if let Some(author) = record.author.as_ref().filter(|a| a.is_identified()) {
        let mut person = Map::new();
        person.insert("@type".into(), json!("Person"));
        person.insert("@id".into(), json!(author_id));
        insert_text(&mut person, "name", author.name.as_deref());
        insert_text(&mut person, "description", author.bio.as_deref());
        insert_text(&mut person, "url", author.url.as_deref());
        article.insert("author".into(), json!({ "@id": author_id }));
        nodes.push(Value::Object(person));
    }

    let complete_faqs: Vec<Value> = record
        .faqs
        .iter()
        .filter(|f| f.is_complete())
        .map(|f| {
            json!({
                "@type": "Question",
                "name": f.question.as_deref().map(str::trim),
                "acceptedAnswer": { "@type": "Answer", "text": f.answer.as_deref().map(str::trim) }
            })
        })
        .collect();
    if !complete_faqs.is_empty() {
        nodes.push(json!({ "@type": "FAQPage", "mainEntity": complete_faqs }));
    }

    nodes.insert(0, Value::Object(article));
    json!({ "@context": "https://schema.org", "@graph": nodes })
}

/// Head metadata (title, description, robots, canonical, Open Graph,
/// Twitter) with the same fallbacks the social criteria apply
pub fn record_metadata(record: &ContentRecord) -> Value {
    let title = first_non_blank(&[record.seo_title.as_deref(), record.title.as_deref()]);
    let description = first_non_blank(&[record.seo_description.as_deref(), record.excerpt.as_deref()]);
    let featured = record
        .featured_image
        .as_ref()
        .and_then(|i| non_blank(i.url.as_deref()));
    let og_title = first_non_blank(&[record.og_title.as_deref(), title]);
    let og_description = first_non_blank(&[record.og_description.as_deref(), description]);

    json!({
        "title": title,
        "description": description,
        "robots": non_blank(record.robots.as_deref()),
        "canonical": non_blank(record.canonical_url.as_deref()),
        "openGraph": {
            "title": og_title,
            "description": og_description,
            "image": first_non_blank(&[record.og_image.as_deref(), featured]),
            "type": "article",
        },
        "twitter": {
            "card": non_blank(record.twitter_card.as_deref()).unwrap_or("summary"),
            "title": first_non_blank(&[record.twitter_title.as_deref(), og_title]),
            "description": first_non_blank(&[record.twitter_description.as_deref(), og_description]),
        },
    })
}
