//! Technical scorer

use super::{CategoryScorer, Criterion, Outcome};
use crate::config::ScoringConfig;
use crate::extractor::ExtractedFields;
use crate::models::FieldId;
use crate::types::{CategoryId, Priority};

const SITEMAP_DOCS: &str = "https://www.sitemaps.org/protocol.html";

/// Values accepted by the sitemap `changefreq` element
pub const CHANGE_FREQUENCIES: &[&str] = &["always", "hourly", "daily", "weekly", "monthly", "yearly", "never"];

pub struct TechnicalScorer;

impl CategoryScorer for TechnicalScorer {
    fn category(&self) -> CategoryId {
        CategoryId::Technical
    }

    fn criteria(&self) -> &'static [Criterion] {
        CRITERIA
    }
}

const CRITERIA: &[Criterion] = &[
    Criterion {
        id: "tech-slug",
        label: "URL slug",
        priority: Priority::Critical,
        field: Some(FieldId::Slug),
        recommendation: "Set a URL slug for the article.",
        doc_link: None,
        check: check_slug_present,
    },
    Criterion {
        id: "tech-slug-format",
        label: "URL slug format",
        priority: Priority::Medium,
        field: Some(FieldId::Slug),
        recommendation: "Use lowercase letters, digits and single hyphens in the slug.",
        doc_link: Some("https://developers.google.com/search/docs/crawling-indexing/url-structure"),
        check: check_slug_format,
    },
    Criterion {
        id: "tech-sitemap-priority",
        label: "Sitemap priority",
        priority: Priority::Low,
        field: Some(FieldId::SitemapPriority),
        recommendation: "Set a sitemap priority between 0.0 and 1.0.",
        doc_link: Some(SITEMAP_DOCS),
        check: check_sitemap_priority,
    },
    Criterion {
        id: "tech-sitemap-changefreq",
        label: "Sitemap change frequency",
        priority: Priority::Low,
        field: Some(FieldId::SitemapChangeFrequency),
        recommendation: "Set how often this article is expected to change.",
        doc_link: Some(SITEMAP_DOCS),
        check: check_change_frequency,
    },
    Criterion {
        id: "tech-language",
        label: "Language tag",
        priority: Priority::Medium,
        field: Some(FieldId::Language),
        recommendation: "Set the content language as a BCP 47 tag such as \"en\" or \"en-GB\".",
        doc_link: None,
        check: check_language,
    },
    Criterion {
        id: "tech-category",
        label: "Category",
        priority: Priority::High,
        field: Some(FieldId::Category),
        recommendation: "File the article under a category.",
        doc_link: None,
        check: check_category,
    },
];

fn check_slug_present(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    match fields.slug.as_deref() {
        Some(slug) => Outcome::pass().current(slug),
        None => Outcome::fail("Slug is missing"),
    }
}

fn check_slug_format(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    let Some(slug) = fields.slug.as_deref() else {
        return Outcome::fail("No slug to check");
    };
    if is_well_formed_slug(slug) {
        Outcome::pass().current(slug)
    } else {
        Outcome::warn("Slug contains characters other than lowercase letters, digits and single hyphens")
            .current(slug)
            .target("lowercase-words-with-hyphens")
    }
}

/// `[a-z0-9]+(-[a-z0-9]+)*`
pub fn is_well_formed_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()))
}

fn check_sitemap_priority(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    match fields.sitemap_priority {
        None => Outcome::fail("Sitemap priority is not set"),
        Some(p) if (0.0..=1.0).contains(&p) => Outcome::pass().current(p),
        Some(p) => Outcome::warn("Sitemap priority must be between 0.0 and 1.0")
            .current(p)
            .target("0.0-1.0"),
    }
}

fn check_change_frequency(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    let Some(freq) = fields.sitemap_change_frequency.as_deref() else {
        return Outcome::fail("Sitemap change frequency is not set");
    };
    if CHANGE_FREQUENCIES.contains(&freq.to_ascii_lowercase().as_str()) {
        Outcome::pass().current(freq)
    } else {
        Outcome::warn(format!("\"{}\" is not a sitemap change frequency", freq))
            .current(freq)
            .target(CHANGE_FREQUENCIES.join(", "))
    }
}

fn check_language(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    let Some(tag) = fields.language.as_deref() else {
        return Outcome::fail("Language is not set");
    };
    if is_language_tag(tag) {
        Outcome::pass().current(tag)
    } else {
        Outcome::warn(format!("\"{}\" is not a valid language tag", tag)).current(tag)
    }
}

/// Primary subtag of 2-3 letters, then alphanumeric subtags of 1-8 chars
pub fn is_language_tag(tag: &str) -> bool {
    let mut parts = tag.split(['-', '_']);
    let primary_ok = parts
        .next()
        .is_some_and(|p| (2..=3).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphabetic()));
    primary_ok && parts.all(|p| (1..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphanumeric()))
}

fn check_category(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    if fields.has_category {
        Outcome::pass()
    } else {
        Outcome::fail("No category assigned")
    }
}
