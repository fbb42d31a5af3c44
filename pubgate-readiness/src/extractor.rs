//! Field Extractor
//!
//! Derives the computed metrics every criterion reads: text lengths, presence
//! flags, body statistics, media/citation counts and a structured-data
//! summary. Absent, null, blank and empty values are all "absent"; nothing
//! here can fail.
//!
//! # Fallbacks
//! - Effective SEO title: `seo_title`, else `title`
//! - Effective description: `seo_description`, else `excerpt`
//! - Structured data: the supplied JSON-LD graph when present, otherwise the
//!   graph the record would serialize to (article from title + body,
//!   publisher from client, author from author)

use crate::config::ScoringConfig;
use crate::models::content_record::{first_non_blank, non_blank};
use crate::models::ContentRecord;
use crate::structured_data::graph::{self, GraphSummary};
use serde_json::Value;

/// Computed metrics for one record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    pub title: Option<String>,
    pub seo_title: Option<String>,
    /// `seo_title` falling back to `title`
    pub effective_title: Option<String>,
    pub title_length: usize,
    pub seo_description: Option<String>,
    /// `seo_description` falling back to `excerpt`
    pub effective_description: Option<String>,
    pub description_length: usize,
    pub excerpt_length: usize,
    pub focus_keyword: Option<String>,

    pub has_client: bool,
    pub has_author: bool,
    pub has_category: bool,

    pub word_count: usize,
    pub reading_time_minutes: u32,
    pub paragraph_word_counts: Vec<usize>,
    pub heading_count: usize,

    pub has_featured_image: bool,
    pub featured_image_has_alt: bool,
    pub featured_image_url: Option<String>,
    pub gallery_count: usize,
    pub gallery_missing_alt: usize,

    pub citation_count: usize,
    /// Citations with an absolute http(s) URL
    pub authoritative_citation_count: usize,
    pub complete_faq_count: usize,
    pub semantic_keyword_count: usize,
    pub tag_count: usize,

    pub canonical_url: Option<String>,
    pub robots: Option<String>,
    pub slug: Option<String>,
    pub language: Option<String>,
    pub sitemap_priority: Option<f32>,
    pub sitemap_change_frequency: Option<String>,

    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    /// `og_image` came from the featured image
    pub og_image_is_fallback: bool,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_card: Option<String>,

    /// A JSON-LD graph was supplied (as opposed to derived from the record)
    pub graph_supplied: bool,
    pub structured: GraphSummary,
}

/// Extract metrics from a record and, optionally, its generated JSON-LD graph
pub fn extract(record: &ContentRecord, graph: Option<&Value>, config: &ScoringConfig) -> ExtractedFields {
    let owned = |value: &Option<String>| non_blank(value.as_deref()).map(str::to_string);

    let title = owned(&record.title);
    let seo_title = owned(&record.seo_title);
    let effective_title = seo_title.clone().or_else(|| title.clone());
    let seo_description = owned(&record.seo_description);
    let excerpt = owned(&record.excerpt);
    let effective_description = seo_description.clone().or_else(|| excerpt.clone());

    let body = non_blank(record.body.as_deref()).unwrap_or("");
    let plain = strip_tags(body);
    let word_count = count_words(&plain);
    let paragraph_word_counts = paragraphs(body)
        .iter()
        .map(|p| count_words(&strip_tags(p)))
        .filter(|words| *words > 0)
        .collect();

    let featured = record.featured_image.as_ref().filter(|i| i.has_url());
    let gallery: Vec<_> = record.gallery.iter().filter(|i| i.has_url()).collect();

    let has_client = record.client.as_ref().is_some_and(|c| c.is_identified());
    let has_author = record.author.as_ref().is_some_and(|a| a.is_identified());

    let structured = match graph {
        Some(graph) => graph::summarize(graph),
        None => GraphSummary {
            has_article: effective_title.is_some() && word_count > 0,
            has_publisher: has_client,
            publisher_has_logo: has_client
                && record
                    .client
                    .as_ref()
                    .and_then(|c| non_blank(c.logo_url.as_deref()))
                    .is_some(),
            has_author_person: has_author,
            author_has_bio: record
                .author
                .as_ref()
                .and_then(|a| non_blank(a.bio.as_deref()))
                .is_some(),
            has_hero_image: featured.is_some(),
            headline: effective_title.clone(),
        },
    };

    let og_image = first_non_blank(&[
        record.og_image.as_deref(),
        featured.and_then(|i| i.url.as_deref()),
    ])
    .map(str::to_string);

    ExtractedFields {
        title_length: char_len(effective_title.as_deref()),
        description_length: char_len(effective_description.as_deref()),
        excerpt_length: char_len(excerpt.as_deref()),
        title,
        seo_title,
        effective_title,
        seo_description,
        effective_description,
        focus_keyword: owned(&record.focus_keyword),

        has_client,
        has_author,
        has_category: non_blank(record.category.as_deref()).is_some(),

        word_count,
        reading_time_minutes: reading_time(word_count, config.words_per_minute),
        paragraph_word_counts,
        heading_count: count_headings(body),

        has_featured_image: featured.is_some(),
        featured_image_has_alt: featured.is_some_and(|i| i.has_alt()),
        featured_image_url: featured.and_then(|i| owned(&i.url)),
        gallery_count: gallery.len(),
        gallery_missing_alt: gallery.iter().filter(|i| !i.has_alt()).count(),

        citation_count: record.citations.len(),
        authoritative_citation_count: record
            .citations
            .iter()
            .filter(|c| non_blank(c.url.as_deref()).is_some_and(is_absolute_http_url))
            .count(),
        complete_faq_count: record.faqs.iter().filter(|f| f.is_complete()).count(),
        semantic_keyword_count: record
            .semantic_keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .count(),
        tag_count: record.tags.iter().filter(|t| !t.trim().is_empty()).count(),

        canonical_url: owned(&record.canonical_url),
        robots: owned(&record.robots),
        slug: owned(&record.slug),
        language: owned(&record.language),
        sitemap_priority: record.sitemap_priority,
        sitemap_change_frequency: owned(&record.sitemap_change_frequency),

        og_title: owned(&record.og_title),
        og_description: owned(&record.og_description),
        og_image_is_fallback: og_image.is_some() && non_blank(record.og_image.as_deref()).is_none(),
        og_image,
        twitter_title: owned(&record.twitter_title),
        twitter_description: owned(&record.twitter_description),
        twitter_card: owned(&record.twitter_card),

        graph_supplied: graph.is_some(),
        structured,
    }
}

fn char_len(value: Option<&str>) -> usize {
    value.map(|s| s.chars().count()).unwrap_or(0)
}

/// Whole minutes, rounded up; zero only for an empty body
fn reading_time(words: usize, words_per_minute: usize) -> u32 {
    if words == 0 {
        return 0;
    }
    let wpm = words_per_minute.max(1);
    words.div_ceil(wpm) as u32
}

/// Absolute http(s) URL with a host
pub(crate) fn is_absolute_http_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some(),
        Err(_) => false,
    }
}

/// Drop anything between `<` and `>`
fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Whitespace-separated tokens carrying at least one letter or digit
fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .count()
}

/// Paragraphs split on blank lines and closing `</p>` tags; heading lines
/// are not paragraphs
fn paragraphs(body: &str) -> Vec<String> {
    let normalized = body.replace("\r\n", "\n").replace("</p>", "\n\n").replace("</P>", "\n\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .filter(|block| !is_heading_line(block))
        .map(str::to_string)
        .collect()
}

fn is_heading_line(line: &str) -> bool {
    let line = line.trim_start();
    if line.starts_with('#') {
        return line.trim_start_matches('#').starts_with(' ');
    }
    let lower = line.to_ascii_lowercase();
    ["<h1", "<h2", "<h3", "<h4", "<h5", "<h6"]
        .iter()
        .any(|tag| lower.starts_with(tag))
}

/// Markdown `#` headings plus HTML `<h1>`..`<h6>` tags
fn count_headings(body: &str) -> usize {
    let markdown = body
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            trimmed.starts_with('#') && trimmed.trim_start_matches('#').starts_with(' ')
        })
        .count();
    let lower = body.to_ascii_lowercase();
    let html = ["<h1", "<h2", "<h3", "<h4", "<h5", "<h6"]
        .iter()
        .map(|tag| lower.matches(tag).count())
        .sum::<usize>();
    markdown + html
}
