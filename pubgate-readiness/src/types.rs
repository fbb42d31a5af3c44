//! Core scoring types
//!
//! Six category scorers each run a fixed battery of criteria and produce a
//! `CategoryScore`. Each criterion outcome becomes one `ChecklistItem`, so a
//! category's `items.len()` always equals its `total`.

use crate::models::FieldId;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Categories
// ============================================================================

/// Stable scoring category identifiers
///
/// Old consumer keys (e.g. the legacy "mobile" slot) are mapped through
/// `aliases`, never by renaming fields at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    MetaTags,
    Content,
    Images,
    StructuredData,
    Technical,
    Social,
}

impl CategoryId {
    pub const ALL: [CategoryId; 6] = [
        CategoryId::MetaTags,
        CategoryId::Content,
        CategoryId::Images,
        CategoryId::StructuredData,
        CategoryId::Technical,
        CategoryId::Social,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CategoryId::MetaTags => "meta_tags",
            CategoryId::Content => "content",
            CategoryId::Images => "images",
            CategoryId::StructuredData => "structured_data",
            CategoryId::Technical => "technical",
            CategoryId::Social => "social",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryId::MetaTags => "Meta Tags",
            CategoryId::Content => "Content",
            CategoryId::Images => "Images",
            CategoryId::StructuredData => "Structured Data",
            CategoryId::Technical => "Technical",
            CategoryId::Social => "Social",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Checklist items
// ============================================================================

/// Criterion result status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Criterion met
    Pass,
    /// Criterion met through a fallback or with a note; counts as passed
    Info,
    /// Present but outside the target band
    Warning,
    /// Missing or unusable
    Fail,
}

impl CheckStatus {
    /// Counts toward `CategoryScore::passed`
    pub fn is_passing(&self) -> bool {
        matches!(self, CheckStatus::Pass | CheckStatus::Info)
    }

    /// Warrants an entry in the actionable checklist
    pub fn is_actionable(&self) -> bool {
        matches!(self, CheckStatus::Warning | CheckStatus::Fail)
    }
}

/// Remediation priority; declaration order is urgency order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

/// One diagnostic derived from a criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub category: CategoryId,
    pub label: String,
    pub status: CheckStatus,
    pub priority: Priority,
    /// Remediation text
    pub recommendation: String,
    /// Why the criterion did not pass (or the fallback note for `Info`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<String>,
    /// Record field that fixes this item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldId>,
    /// External documentation link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_link: Option<String>,
}

// ============================================================================
// Category and overall scores
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: CategoryId,
    pub passed: usize,
    pub total: usize,
    /// `round(passed / total * 100)`, 100 when `total == 0`
    pub percentage: u8,
    /// Category weight
    pub max_score: u32,
    pub items: Vec<ChecklistItem>,
}

impl CategoryScore {
    pub fn from_items(category: CategoryId, max_score: u32, items: Vec<ChecklistItem>) -> Self {
        let passed = items.iter().filter(|i| i.status.is_passing()).count();
        let total = items.len();
        Self {
            category,
            passed,
            total,
            percentage: percentage(passed, total),
            max_score,
            items,
        }
    }
}

/// Integer percentage in 0..=100; an empty denominator counts as satisfied
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 100;
    }
    let ratio = part.min(whole) as f64 / whole as f64;
    (ratio * 100.0).round() as u8
}

/// Qualitative verdict for the overall percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// At or above the good threshold (80 by default)
    Good,
    /// Between the fair and good thresholds
    NeedsImprovement,
    /// Below the fair threshold (60 by default)
    Poor,
}

impl ScoreBand {
    pub fn key(&self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::NeedsImprovement => "needs_improvement",
            ScoreBand::Poor => "poor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Good => "Excellent / good",
            ScoreBand::NeedsImprovement => "Needs improvement",
            ScoreBand::Poor => "Poor",
        }
    }
}

/// Full scoring pipeline output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub categories: Vec<CategoryScore>,
    /// Weight-averaged category percentage
    pub overall: u8,
    pub band: ScoreBand,
    /// Criteria passed across all categories
    pub passed: usize,
    /// Criteria evaluated across all categories
    pub total: usize,
    pub word_count: usize,
    pub reading_time_minutes: u32,
}

impl ScoreResult {
    pub fn category(&self, id: CategoryId) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.category == id)
    }

    /// Every item across all categories, in category order
    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }
}

// ============================================================================
// Issue taxonomy
// ============================================================================

/// Classification of every readiness issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Criterion unmet; contributes to score and checklist only
    MissingField,
    /// Value present but outside its target band
    LengthOutOfBounds,
    /// Structured-data structural error; blocks publish
    SchemaStructureError,
    /// Structured-data recommendation; never blocks
    SchemaRecommendationWarning,
    /// External schema collaborator failed; surfaced as one warning
    ExternalValidatorUnavailable,
    /// JSON-LD input could not be parsed; blocks publish
    ParseError,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(status: CheckStatus) -> ChecklistItem {
        ChecklistItem {
            id: "x".into(),
            category: CategoryId::Content,
            label: "x".into(),
            status,
            priority: Priority::Medium,
            recommendation: String::new(),
            reason: None,
            current_value: None,
            target_value: None,
            field: None,
            doc_link: None,
        }
    }

    #[test]
    fn test_percentage_rounds_and_handles_empty() {
        assert_eq!(percentage(0, 0), 100);
        assert_eq!(percentage(0, 6), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(6, 6), 100);
    }

    #[test]
    fn test_category_score_counts_info_as_passed() {
        let score = CategoryScore::from_items(
            CategoryId::Social,
            10,
            vec![
                item(CheckStatus::Pass),
                item(CheckStatus::Info),
                item(CheckStatus::Warning),
                item(CheckStatus::Fail),
            ],
        );
        assert_eq!(score.passed, 2);
        assert_eq!(score.total, 4);
        assert_eq!(score.items.len(), score.total);
        assert_eq!(score.percentage, 50);
    }

    #[test]
    fn test_empty_category_is_fully_satisfied() {
        let score = CategoryScore::from_items(CategoryId::Images, 15, vec![]);
        assert_eq!(score.percentage, 100);
    }

    #[test]
    fn test_priority_order_is_urgency_order() {
        let mut priorities = vec![Priority::Low, Priority::Critical, Priority::Medium, Priority::High];
        priorities.sort();
        assert_eq!(
            priorities,
            vec![Priority::Critical, Priority::High, Priority::Medium, Priority::Low]
        );
    }

    #[test]
    fn test_category_serde_keys_match_key() {
        for category in CategoryId::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.key());
        }
    }
}
