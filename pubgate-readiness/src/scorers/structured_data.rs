//! Structured Data scorer
//!
//! Reads the `GraphSummary` built by the extractor. When no JSON-LD graph was
//! supplied the summary describes the graph the record would serialize to,
//! and passing items say so in their current value.

use super::{length_band, CategoryScorer, Criterion, Outcome};
use crate::config::ScoringConfig;
use crate::extractor::ExtractedFields;
use crate::models::FieldId;
use crate::types::{CategoryId, Priority};

const ARTICLE_DOCS: &str = "https://developers.google.com/search/docs/appearance/structured-data/article";

pub struct StructuredDataScorer;

impl CategoryScorer for StructuredDataScorer {
    fn category(&self) -> CategoryId {
        CategoryId::StructuredData
    }

    fn criteria(&self) -> &'static [Criterion] {
        CRITERIA
    }
}

const CRITERIA: &[Criterion] = &[
    Criterion {
        id: "sd-article",
        label: "Article node",
        priority: Priority::Critical,
        field: Some(FieldId::Title),
        recommendation: "Give the article a title and body so an Article node can be generated.",
        doc_link: Some(ARTICLE_DOCS),
        check: check_article,
    },
    Criterion {
        id: "sd-publisher",
        label: "Publisher organization",
        priority: Priority::High,
        field: Some(FieldId::Client),
        recommendation: "Assign the client that publishes this article.",
        doc_link: Some(ARTICLE_DOCS),
        check: check_publisher,
    },
    Criterion {
        id: "sd-publisher-logo",
        label: "Publisher logo",
        priority: Priority::Medium,
        field: Some(FieldId::Client),
        recommendation: "Upload a logo for the publishing client.",
        doc_link: Some(ARTICLE_DOCS),
        check: check_publisher_logo,
    },
    Criterion {
        id: "sd-author",
        label: "Author person",
        priority: Priority::High,
        field: Some(FieldId::Author),
        recommendation: "Assign an author so the article carries a Person node.",
        doc_link: Some(ARTICLE_DOCS),
        check: check_author,
    },
    Criterion {
        id: "sd-headline-length",
        label: "Headline length",
        priority: Priority::Medium,
        field: Some(FieldId::Title),
        recommendation: "Keep the headline within the length search engines display.",
        doc_link: Some(ARTICLE_DOCS),
        check: check_headline_length,
    },
];

fn source(fields: &ExtractedFields) -> &'static str {
    if fields.graph_supplied {
        "in graph"
    } else {
        "derived from record"
    }
}

fn check_article(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    if fields.structured.has_article {
        Outcome::pass().current(source(fields))
    } else {
        Outcome::fail("No Article node")
    }
}

fn check_publisher(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    if fields.structured.has_publisher {
        Outcome::pass().current(source(fields))
    } else {
        Outcome::fail("No publisher Organization node")
    }
}

fn check_publisher_logo(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    match (fields.structured.has_publisher, fields.structured.publisher_has_logo) {
        (_, true) => Outcome::pass().current(source(fields)),
        (true, false) => Outcome::fail("Publisher has no logo"),
        (false, false) => Outcome::fail("No publisher to carry a logo"),
    }
}

fn check_author(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    if fields.structured.has_author_person {
        Outcome::pass().current(source(fields))
    } else {
        Outcome::fail("No author Person node")
    }
}

fn check_headline_length(fields: &ExtractedFields, config: &ScoringConfig) -> Outcome {
    let Some(headline) = fields.structured.headline.as_deref() else {
        return Outcome::fail("No headline to measure").target(format!(
            "{}-{} characters",
            config.headline_min_length, config.headline_max_length
        ));
    };
    length_band(
        "Headline",
        headline.chars().count(),
        config.headline_min_length,
        config.headline_max_length,
    )
}
