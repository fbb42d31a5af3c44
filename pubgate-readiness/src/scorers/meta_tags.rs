//! Meta Tags scorer
//!
//! Title and description presence plus length bands (defaults: title 50-60,
//! description 120-160 characters), canonical URL, robots directive.

use super::{length_band, CategoryScorer, Criterion, Outcome};
use crate::config::ScoringConfig;
use crate::extractor::ExtractedFields;
use crate::models::FieldId;
use crate::types::{CategoryId, Priority};

const TITLE_DOCS: &str = "https://developers.google.com/search/docs/appearance/title-link";
const SNIPPET_DOCS: &str = "https://developers.google.com/search/docs/appearance/snippet";

pub struct MetaTagsScorer;

impl CategoryScorer for MetaTagsScorer {
    fn category(&self) -> CategoryId {
        CategoryId::MetaTags
    }

    fn criteria(&self) -> &'static [Criterion] {
        CRITERIA
    }
}

const CRITERIA: &[Criterion] = &[
    Criterion {
        id: "meta-title",
        label: "SEO title",
        priority: Priority::Critical,
        field: Some(FieldId::SeoTitle),
        recommendation: "Write an SEO title that states the page topic and includes the focus keyword.",
        doc_link: Some(TITLE_DOCS),
        check: check_title_present,
    },
    Criterion {
        id: "meta-title-length",
        label: "SEO title length",
        priority: Priority::Medium,
        field: Some(FieldId::SeoTitle),
        recommendation: "Keep the SEO title within the target length so search results do not truncate it.",
        doc_link: Some(TITLE_DOCS),
        check: check_title_length,
    },
    Criterion {
        id: "meta-description",
        label: "Meta description",
        priority: Priority::High,
        field: Some(FieldId::SeoDescription),
        recommendation: "Write a meta description that summarizes the page and invites the click.",
        doc_link: Some(SNIPPET_DOCS),
        check: check_description_present,
    },
    Criterion {
        id: "meta-description-length",
        label: "Meta description length",
        priority: Priority::Medium,
        field: Some(FieldId::SeoDescription),
        recommendation: "Keep the meta description within the target length.",
        doc_link: Some(SNIPPET_DOCS),
        check: check_description_length,
    },
    Criterion {
        id: "meta-canonical",
        label: "Canonical URL",
        priority: Priority::Medium,
        field: Some(FieldId::CanonicalUrl),
        recommendation: "Set an absolute canonical URL pointing at the preferred address of this page.",
        doc_link: Some("https://developers.google.com/search/docs/crawling-indexing/consolidate-duplicate-urls"),
        check: check_canonical,
    },
    Criterion {
        id: "meta-robots",
        label: "Robots directive",
        priority: Priority::Low,
        field: Some(FieldId::Robots),
        recommendation: "Set the robots directive explicitly (usually \"index, follow\").",
        doc_link: Some("https://developers.google.com/search/docs/crawling-indexing/robots-meta-tag"),
        check: check_robots,
    },
];

fn check_title_present(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    match (&fields.seo_title, &fields.title) {
        (Some(_), _) => Outcome::pass(),
        (None, Some(_)) => Outcome::warn("No SEO title set; search engines will fall back to the page title"),
        (None, None) => Outcome::fail("SEO title is missing"),
    }
}

fn check_title_length(fields: &ExtractedFields, config: &ScoringConfig) -> Outcome {
    if fields.effective_title.is_none() {
        return Outcome::fail("No title to measure")
            .target(format!("{}-{} characters", config.title_min_length, config.title_max_length));
    }
    length_band(
        "Title",
        fields.title_length,
        config.title_min_length,
        config.title_max_length,
    )
}

fn check_description_present(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    match (&fields.seo_description, &fields.effective_description) {
        (Some(_), _) => Outcome::pass(),
        (None, Some(_)) => Outcome::warn("No meta description set; the excerpt will be used instead"),
        (None, None) => Outcome::fail("Meta description is missing"),
    }
}

fn check_description_length(fields: &ExtractedFields, config: &ScoringConfig) -> Outcome {
    if fields.effective_description.is_none() {
        return Outcome::fail("No description to measure").target(format!(
            "{}-{} characters",
            config.description_min_length, config.description_max_length
        ));
    }
    length_band(
        "Description",
        fields.description_length,
        config.description_min_length,
        config.description_max_length,
    )
}

fn check_canonical(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    let Some(raw) = fields.canonical_url.as_deref() else {
        return Outcome::fail("Canonical URL is missing");
    };
    match url::Url::parse(raw) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Outcome::pass().current(raw),
        Ok(parsed) => Outcome::fail(format!(
            "Canonical URL uses the unsupported scheme \"{}\"",
            parsed.scheme()
        ))
        .current(raw),
        Err(e) => Outcome::fail(format!("Canonical URL could not be parsed: {}", e)).current(raw),
    }
}

fn check_robots(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    let Some(robots) = fields.robots.as_deref() else {
        return Outcome::fail("Robots directive is not set");
    };
    let lower = robots.to_ascii_lowercase();
    if lower.split(',').any(|d| d.trim() == "noindex" || d.trim() == "none") {
        Outcome::warn("Robots directive keeps this page out of search results").current(robots)
    } else {
        Outcome::pass().current(robots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract;
    use crate::models::ContentRecord;
    use crate::types::CheckStatus;

    fn score(record: &ContentRecord) -> crate::types::CategoryScore {
        let config = ScoringConfig::default();
        MetaTagsScorer.score(&extract(record, None, &config), &config)
    }

    fn item<'a>(score: &'a crate::types::CategoryScore, id: &str) -> &'a crate::types::ChecklistItem {
        score.items.iter().find(|i| i.id == id).unwrap()
    }

    #[test]
    fn test_empty_record_scores_zero() {
        let score = score(&ContentRecord::default());
        assert_eq!(score.percentage, 0);
        assert_eq!(item(&score, "meta-title").status, CheckStatus::Fail);
    }

    #[test]
    fn test_title_length_bands() {
        let mut record = ContentRecord {
            seo_title: Some("x".repeat(70)),
            ..Default::default()
        };
        let long = score(&record);
        let title = item(&long, "meta-title-length");
        assert!(matches!(title.status, CheckStatus::Warning | CheckStatus::Fail));
        assert!(title.reason.as_deref().unwrap().contains("60"));

        record.seo_title = Some("x".repeat(55));
        assert_eq!(item(&score(&record), "meta-title-length").status, CheckStatus::Pass);
    }

    #[test]
    fn test_description_in_band_passes() {
        let record = ContentRecord {
            seo_description: Some("d".repeat(150)),
            ..Default::default()
        };
        let score = score(&record);
        assert_eq!(item(&score, "meta-description").status, CheckStatus::Pass);
        assert_eq!(item(&score, "meta-description-length").status, CheckStatus::Pass);
    }

    #[test]
    fn test_excerpt_fallback_warns() {
        let record = ContentRecord {
            excerpt: Some("An excerpt".into()),
            ..Default::default()
        };
        assert_eq!(item(&score(&record), "meta-description").status, CheckStatus::Warning);
    }

    #[test]
    fn test_unparseable_canonical_fails_with_reason() {
        let record = ContentRecord {
            canonical_url: Some("not a url".into()),
            ..Default::default()
        };
        let score = score(&record);
        let canonical = item(&score, "meta-canonical");
        assert_eq!(canonical.status, CheckStatus::Fail);
        assert!(canonical.reason.as_deref().unwrap().contains("could not be parsed"));
    }

    #[test]
    fn test_noindex_robots_warns() {
        let record = ContentRecord {
            robots: Some("NoIndex, follow".into()),
            ..Default::default()
        };
        assert_eq!(item(&score(&record), "meta-robots").status, CheckStatus::Warning);
    }
}
