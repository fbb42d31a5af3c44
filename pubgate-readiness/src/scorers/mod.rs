//! Category Scorers
//!
//! Six independent scorers, each a static table of criteria evaluated
//! against `ExtractedFields`.
//!
//! # Scorers
//! 1. **meta_tags** - SEO title/description presence and length bands,
//!    canonical URL, robots directive
//! 2. **content** - body, word count, paragraph length, headings, citations
//! 3. **images** - featured image and alt text coverage
//! 4. **structured_data** - Article / publisher / author nodes, headline bounds
//! 5. **technical** - slug, sitemap hints, language tag, category
//! 6. **social** - Open Graph and Twitter Card fields with fallbacks
//!
//! Criteria are plain functions returning an `Outcome`. They never panic:
//! checks that can fail to evaluate (URL parsing, for one) report
//! `Fail` with the reason instead.

pub mod content;
pub mod images;
pub mod meta_tags;
pub mod social;
pub mod structured_data;
pub mod technical;

pub use content::ContentScorer;
pub use images::ImagesScorer;
pub use meta_tags::MetaTagsScorer;
pub use social::SocialScorer;
pub use structured_data::StructuredDataScorer;
pub use technical::TechnicalScorer;

use crate::config::ScoringConfig;
use crate::extractor::ExtractedFields;
use crate::models::FieldId;
use crate::types::{CategoryId, CategoryScore, CheckStatus, ChecklistItem, Priority};
use tracing::debug;

/// Result of one criterion check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: CheckStatus,
    pub reason: Option<String>,
    pub current_value: Option<String>,
    pub target_value: Option<String>,
}

impl Outcome {
    pub fn pass() -> Self {
        Self::with_status(CheckStatus::Pass, None)
    }

    /// Passed through a fallback; the note explains which
    pub fn info(reason: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Info, Some(reason.into()))
    }

    pub fn warn(reason: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Warning, Some(reason.into()))
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Fail, Some(reason.into()))
    }

    fn with_status(status: CheckStatus, reason: Option<String>) -> Self {
        Self {
            status,
            reason,
            current_value: None,
            target_value: None,
        }
    }

    pub fn current(mut self, value: impl ToString) -> Self {
        self.current_value = Some(value.to_string());
        self
    }

    pub fn target(mut self, value: impl ToString) -> Self {
        self.target_value = Some(value.to_string());
        self
    }

    pub fn passed(&self) -> bool {
        self.status.is_passing()
    }
}

/// One static criterion definition
pub struct Criterion {
    pub id: &'static str,
    pub label: &'static str,
    pub priority: Priority,
    pub field: Option<FieldId>,
    pub recommendation: &'static str,
    pub doc_link: Option<&'static str>,
    pub check: fn(&ExtractedFields, &ScoringConfig) -> Outcome,
}

impl Criterion {
    pub fn evaluate(
        &self,
        category: CategoryId,
        fields: &ExtractedFields,
        config: &ScoringConfig,
    ) -> ChecklistItem {
        let outcome = (self.check)(fields, config);
        ChecklistItem {
            id: self.id.to_string(),
            category,
            label: self.label.to_string(),
            status: outcome.status,
            priority: self.priority,
            recommendation: self.recommendation.to_string(),
            reason: outcome.reason,
            current_value: outcome.current_value,
            target_value: outcome.target_value,
            field: self.field,
            doc_link: self.doc_link.map(str::to_string),
        }
    }
}

/// A category's fixed battery of criteria
pub trait CategoryScorer: Send + Sync {
    fn category(&self) -> CategoryId;

    fn criteria(&self) -> &'static [Criterion];

    /// Run every criterion; one checklist item per criterion
    fn score(&self, fields: &ExtractedFields, config: &ScoringConfig) -> CategoryScore {
        let category = self.category();
        let items: Vec<ChecklistItem> = self
            .criteria()
            .iter()
            .map(|criterion| criterion.evaluate(category, fields, config))
            .collect();
        let score = CategoryScore::from_items(category, config.weights.weight(category), items);

        debug!(
            category = category.key(),
            passed = score.passed,
            total = score.total,
            percentage = score.percentage,
            "Category scored"
        );
        score
    }
}

/// All six scorers in reporting order
pub fn all_scorers() -> [&'static dyn CategoryScorer; 6] {
    [
        &MetaTagsScorer,
        &ContentScorer,
        &ImagesScorer,
        &StructuredDataScorer,
        &TechnicalScorer,
        &SocialScorer,
    ]
}

/// Score every category
pub fn score_categories(fields: &ExtractedFields, config: &ScoringConfig) -> Vec<CategoryScore> {
    all_scorers()
        .iter()
        .map(|scorer| scorer.score(fields, config))
        .collect()
}

/// Length band check shared by title/description/headline criteria. The
/// reason always names the violated bound.
pub(crate) fn length_band(what: &str, length: usize, min: usize, max: usize) -> Outcome {
    let outcome = if length < min {
        Outcome::warn(format!(
            "{} is {} characters, below the {} character minimum",
            what, length, min
        ))
    } else if length > max {
        Outcome::warn(format!(
            "{} is {} characters, above the {} character maximum",
            what, length, max
        ))
    } else {
        Outcome::pass()
    };
    outcome
        .current(format!("{} characters", length))
        .target(format!("{}-{} characters", min, max))
}
