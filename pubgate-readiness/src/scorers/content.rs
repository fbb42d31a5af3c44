//! Content scorer

use super::{CategoryScorer, Criterion, Outcome};
use crate::config::ScoringConfig;
use crate::extractor::ExtractedFields;
use crate::models::FieldId;
use crate::types::{CategoryId, Priority};

const HELPFUL_CONTENT_DOCS: &str =
    "https://developers.google.com/search/docs/fundamentals/creating-helpful-content";

pub struct ContentScorer;

impl CategoryScorer for ContentScorer {
    fn category(&self) -> CategoryId {
        CategoryId::Content
    }

    fn criteria(&self) -> &'static [Criterion] {
        CRITERIA
    }
}

const CRITERIA: &[Criterion] = &[
    Criterion {
        id: "content-body",
        label: "Body text",
        priority: Priority::Critical,
        field: Some(FieldId::Body),
        recommendation: "Write the article body.",
        doc_link: None,
        check: check_body,
    },
    Criterion {
        id: "content-word-count",
        label: "Word count",
        priority: Priority::High,
        field: Some(FieldId::Body),
        recommendation: "Expand the article so it covers the topic in depth.",
        doc_link: Some(HELPFUL_CONTENT_DOCS),
        check: check_word_count,
    },
    Criterion {
        id: "content-paragraph-length",
        label: "Paragraph length",
        priority: Priority::Low,
        field: Some(FieldId::Body),
        recommendation: "Split long paragraphs so the article is easy to scan.",
        doc_link: None,
        check: check_paragraph_length,
    },
    Criterion {
        id: "content-headings",
        label: "Subheadings",
        priority: Priority::Medium,
        field: Some(FieldId::Body),
        recommendation: "Structure the body with descriptive subheadings.",
        doc_link: None,
        check: check_headings,
    },
    Criterion {
        id: "content-citations",
        label: "Authoritative citations",
        priority: Priority::Medium,
        field: Some(FieldId::Citations),
        recommendation: "Cite at least one authoritative external source with a full URL.",
        doc_link: Some(HELPFUL_CONTENT_DOCS),
        check: check_citations,
    },
    Criterion {
        id: "content-excerpt",
        label: "Excerpt",
        priority: Priority::Medium,
        field: Some(FieldId::Excerpt),
        recommendation: "Write a short excerpt for listings and previews.",
        doc_link: None,
        check: check_excerpt,
    },
    Criterion {
        id: "content-semantic-keywords",
        label: "Semantic keywords",
        priority: Priority::Low,
        field: Some(FieldId::SemanticKeywords),
        recommendation: "List the related terms and entities this article covers.",
        doc_link: None,
        check: check_semantic_keywords,
    },
    Criterion {
        id: "content-faqs",
        label: "FAQ entries",
        priority: Priority::Low,
        field: Some(FieldId::Faqs),
        recommendation: "Answer the questions readers ask most in a short FAQ section.",
        doc_link: None,
        check: check_faqs,
    },
];

fn check_body(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    if fields.word_count > 0 {
        Outcome::pass().current(format!("{} min read", fields.reading_time_minutes))
    } else {
        Outcome::fail("Article body is empty")
    }
}

fn check_word_count(fields: &ExtractedFields, config: &ScoringConfig) -> Outcome {
    let target = format!("at least {} words", config.min_word_count);
    let outcome = match fields.word_count {
        0 => Outcome::fail("No body text to count"),
        n if n < config.min_word_count => Outcome::warn(format!(
            "Body has {} words, below the {} word minimum",
            n, config.min_word_count
        )),
        _ => Outcome::pass(),
    };
    outcome.current(format!("{} words", fields.word_count)).target(target)
}

fn check_paragraph_length(fields: &ExtractedFields, config: &ScoringConfig) -> Outcome {
    let target = format!("at most {} words per paragraph", config.max_paragraph_words);
    let Some(longest) = fields.paragraph_word_counts.iter().copied().max() else {
        return Outcome::fail("No paragraphs to assess").target(target);
    };
    let too_long = fields
        .paragraph_word_counts
        .iter()
        .filter(|words| **words > config.max_paragraph_words)
        .count();
    let outcome = if too_long > 0 {
        Outcome::warn(format!(
            "{} paragraph(s) exceed {} words",
            too_long, config.max_paragraph_words
        ))
    } else {
        Outcome::pass()
    };
    outcome.current(format!("longest paragraph {} words", longest)).target(target)
}

fn check_headings(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    if fields.heading_count > 0 {
        Outcome::pass().current(fields.heading_count)
    } else {
        Outcome::fail("Body has no subheadings")
    }
}

fn check_citations(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    match (fields.authoritative_citation_count, fields.citation_count) {
        (0, 0) => Outcome::fail("No citations"),
        (0, total) => Outcome::warn(format!(
            "{} citation(s) listed but none has an absolute http(s) URL",
            total
        )),
        (valid, _) => Outcome::pass().current(valid),
    }
}

fn check_excerpt(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    if fields.excerpt_length > 0 {
        Outcome::pass().current(format!("{} characters", fields.excerpt_length))
    } else {
        Outcome::fail("Excerpt is missing")
    }
}

fn check_semantic_keywords(fields: &ExtractedFields, config: &ScoringConfig) -> Outcome {
    let target = format!("at least {}", config.min_semantic_keywords);
    let outcome = match fields.semantic_keyword_count {
        0 => Outcome::fail("No semantic keywords"),
        n if n < config.min_semantic_keywords => Outcome::warn(format!(
            "{} semantic keyword(s), below the minimum of {}",
            n, config.min_semantic_keywords
        )),
        _ => Outcome::pass(),
    };
    outcome.current(fields.semantic_keyword_count).target(target)
}

fn check_faqs(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    if fields.complete_faq_count > 0 {
        Outcome::pass().current(fields.complete_faq_count)
    } else {
        Outcome::fail("No complete question and answer pairs")
    }
}
