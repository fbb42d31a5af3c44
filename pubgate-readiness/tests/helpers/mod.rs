//! Shared fixtures for pubgate-readiness integration tests

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use pubgate_readiness::models::{AuthorRef, Citation, ClientRef, FaqEntry, ImageRef};
use pubgate_readiness::ContentRecord;
use serde_json::{json, Value};

/// `n` space-separated words
pub fn words(n: usize) -> String {
    const VOCAB: [&str; 8] = ["readers", "scan", "clear", "pages", "before", "they", "commit", "time"];
    (0..n).map(|i| VOCAB[i % VOCAB.len()]).collect::<Vec<_>>().join(" ")
}

/// String of exactly `n` characters
pub fn chars(n: usize) -> String {
    "abcdefghij".chars().cycle().take(n).collect()
}

/// A record that satisfies every scoring criterion with the default config
pub fn complete_record() -> ContentRecord {
    let body = format!(
        "## Why readiness matters\n\n{}\n\n{}\n\n## Checking before publish\n\n{}",
        words(120),
        words(110),
        words(110)
    );

    ContentRecord {
        title: Some("Publishing checklists that editors actually use".into()),
        slug: Some("publishing-checklists-editors-use".into()),
        excerpt: Some("A practical walk through the checks worth running before any article goes live.".into()),
        body: Some(body),
        seo_title: Some(chars(55)),
        seo_description: Some(chars(150)),
        focus_keyword: Some("publishing checklist".into()),
        robots: Some("index, follow".into()),
        canonical_url: Some("https://example.com/publishing-checklists".into()),
        og_title: Some("Publishing checklists editors use".into()),
        og_description: Some("The checks worth running before an article goes live.".into()),
        og_image: Some("https://example.com/og.jpg".into()),
        twitter_title: Some("Publishing checklists".into()),
        twitter_description: Some("Checks worth running before publishing.".into()),
        twitter_card: Some("summary_large_image".into()),
        featured_image: Some(ImageRef {
            url: Some("https://example.com/hero.jpg".into()),
            alt: Some("Editor reviewing a checklist".into()),
            ..Default::default()
        }),
        tags: vec!["editorial".into(), "seo".into()],
        faqs: vec![FaqEntry {
            question: Some("How long does the check take?".into()),
            answer: Some("A few seconds per article.".into()),
        }],
        citations: vec![Citation {
            url: Some("https://developers.google.com/search/docs".into()),
            title: Some("Search documentation".into()),
        }],
        semantic_keywords: vec!["seo audit".into(), "editorial workflow".into(), "structured data".into()],
        client: Some(ClientRef {
            name: Some("Example Media".into()),
            logo_url: Some("https://example.com/logo.png".into()),
            website: Some("https://example.com".into()),
            ..Default::default()
        }),
        author: Some(AuthorRef {
            name: Some("Ada Writer".into()),
            bio: Some("Covers publishing tooling.".into()),
            url: Some("https://example.com/authors/ada".into()),
            ..Default::default()
        }),
        category: Some("Guides".into()),
        language: Some("en".into()),
        sitemap_priority: Some(0.8),
        sitemap_change_frequency: Some("weekly".into()),
        publish_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).single(),
        ..Default::default()
    }
}

/// Minimal article graph with no structural problems
pub fn article_graph() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": "A perfectly reasonable headline",
        "image": "https://example.com/hero.jpg",
        "datePublished": "2024-05-01T09:00:00Z",
        "dateModified": "2024-05-02T09:00:00Z",
        "author": { "@type": "Person", "name": "Ada Writer", "url": "https://example.com/authors/ada" },
        "publisher": {
            "@type": "Organization",
            "name": "Example Media",
            "url": "https://example.com",
            "logo": "https://example.com/logo.png"
        }
    })
}
