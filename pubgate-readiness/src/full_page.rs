//! Full-Page Validator and publish gate
//!
//! Combines a `ScoreResult` and a `ValidationReport` into one verdict. Every
//! upstream issue lands in exactly one bucket:
//!
//! | Source | Condition | Bucket |
//! |--------|-----------|--------|
//! | checklist | `Fail`, critical priority | critical |
//! | checklist | `Fail`, high/medium | warnings |
//! | checklist | `Fail`, low | suggestions |
//! | checklist | `Warning`, critical/high | warnings |
//! | checklist | `Warning`, medium/low | suggestions |
//! | schema | error (structure or parse) | critical |
//! | schema | warning with a recommendation | suggestions |
//! | schema | other warning (incl. validator unavailable) | warnings |
//! | business rules | error | critical |
//! | business rules | warning | warnings |
//!
//! # Overall score
//! `round(0.8 * seo + 0.2 * sd)` where `sd = 100 - 25 * errors - 5 * warnings`
//! (clamped to 0..=100). Any structured-data error caps the result at 60.

use crate::error::PublishError;
use crate::models::FieldId;
use crate::structured_data::{ValidationIssue, ValidationReport};
use crate::types::{CategoryId, CheckStatus, ChecklistItem, IssueKind, Priority, ScoreBand, ScoreResult};
use serde::{Deserialize, Serialize};

const SEO_WEIGHT: f64 = 0.8;
const STRUCTURED_DATA_WEIGHT: f64 = 0.2;
const ERROR_PENALTY: u32 = 25;
const WARNING_PENALTY: u32 = 5;
/// Highest overall score while structured data has errors
pub const SCHEMA_ERROR_SCORE_CAP: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Suggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSource {
    Checklist,
    Schema,
    BusinessRules,
}

/// One classified readiness issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessIssue {
    pub message: String,
    pub kind: IssueKind,
    pub source: IssueSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

impl ReadinessIssue {
    fn from_item(item: &ChecklistItem) -> Self {
        let kind = match item.status {
            CheckStatus::Warning => IssueKind::LengthOutOfBounds,
            _ => IssueKind::MissingField,
        };
        let message = match &item.reason {
            Some(reason) => format!("{}: {}", item.label, reason),
            None => item.label.clone(),
        };
        Self {
            message,
            kind,
            source: IssueSource::Checklist,
            category: Some(item.category),
            field: item.field,
            path: None,
            fix: Some(item.recommendation.clone()),
        }
    }

    fn from_schema(issue: &ValidationIssue) -> Self {
        let path = match (&issue.path, &issue.property) {
            (Some(path), Some(property)) => Some(format!("{}.{}", path, property)),
            (Some(path), None) => Some(path.clone()),
            (None, property) => property.clone(),
        };
        Self {
            message: issue.message.clone(),
            kind: issue.kind,
            source: IssueSource::Schema,
            category: Some(CategoryId::StructuredData),
            field: None,
            path,
            fix: issue.fix.clone().or_else(|| issue.recommendation.clone()),
        }
    }

    fn from_business(message: &str, kind: IssueKind) -> Self {
        Self {
            message: message.to_string(),
            kind,
            source: IssueSource::BusinessRules,
            category: Some(CategoryId::StructuredData),
            field: None,
            path: None,
            fix: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueBuckets {
    pub critical: Vec<ReadinessIssue>,
    pub warnings: Vec<ReadinessIssue>,
    pub suggestions: Vec<ReadinessIssue>,
}

impl IssueBuckets {
    pub fn push(&mut self, severity: Severity, issue: ReadinessIssue) {
        match severity {
            Severity::Critical => self.critical.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Suggestion => self.suggestions.push(issue),
        }
    }

    pub fn total(&self) -> usize {
        self.critical.len() + self.warnings.len() + self.suggestions.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDataSummary {
    pub schema_errors: usize,
    pub schema_warnings: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSummary {
    pub score: u8,
    pub band: ScoreBand,
}

/// Publish-readiness verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullPageValidationResult {
    pub overall_score: u8,
    /// Exactly when `issues.critical` is empty
    pub can_publish: bool,
    pub issues: IssueBuckets,
    pub structured_data: StructuredDataSummary,
    pub seo: SeoSummary,
}

/// Severity of a checklist item; `None` for passing items
pub fn checklist_severity(item: &ChecklistItem) -> Option<Severity> {
    match (item.status, item.priority) {
        (CheckStatus::Pass | CheckStatus::Info, _) => None,
        (CheckStatus::Fail, Priority::Critical) => Some(Severity::Critical),
        (CheckStatus::Fail, Priority::High | Priority::Medium) => Some(Severity::Warning),
        (CheckStatus::Fail, Priority::Low) => Some(Severity::Suggestion),
        (CheckStatus::Warning, Priority::Critical | Priority::High) => Some(Severity::Warning),
        (CheckStatus::Warning, Priority::Medium | Priority::Low) => Some(Severity::Suggestion),
    }
}

fn schema_warning_severity(issue: &ValidationIssue) -> Severity {
    match issue.kind {
        IssueKind::ExternalValidatorUnavailable => Severity::Warning,
        _ if issue.recommendation.is_some() => Severity::Suggestion,
        _ => Severity::Warning,
    }
}

/// Classify and combine
pub fn validate_full_page(score: &ScoreResult, report: &ValidationReport) -> FullPageValidationResult {
    let mut issues = IssueBuckets::default();

    for item in score.items() {
        if let Some(severity) = checklist_severity(item) {
            issues.push(severity, ReadinessIssue::from_item(item));
        }
    }

    for error in &report.external.errors {
        issues.push(Severity::Critical, ReadinessIssue::from_schema(error));
    }
    for warning in &report.external.warnings {
        issues.push(schema_warning_severity(warning), ReadinessIssue::from_schema(warning));
    }

    for error in &report.business.errors {
        issues.push(
            Severity::Critical,
            ReadinessIssue::from_business(error, IssueKind::SchemaStructureError),
        );
    }
    for warning in &report.business.warnings {
        issues.push(
            Severity::Warning,
            ReadinessIssue::from_business(warning, IssueKind::SchemaRecommendationWarning),
        );
    }

    let structured_data = StructuredDataSummary {
        schema_errors: report.error_count(),
        schema_warnings: report.warning_count(),
    };

    FullPageValidationResult {
        overall_score: overall_score(score.overall, &structured_data),
        can_publish: issues.critical.is_empty(),
        issues,
        structured_data,
        seo: SeoSummary {
            score: score.overall,
            band: score.band,
        },
    }
}

fn overall_score(seo: u8, sd: &StructuredDataSummary) -> u8 {
    let penalty = ERROR_PENALTY
        .saturating_mul(sd.schema_errors as u32)
        .saturating_add(WARNING_PENALTY.saturating_mul(sd.schema_warnings as u32));
    let sd_score = 100u32.saturating_sub(penalty) as f64;
    let combined = (SEO_WEIGHT * f64::from(seo) + STRUCTURED_DATA_WEIGHT * sd_score)
        .round()
        .clamp(0.0, 100.0) as u8;
    if sd.schema_errors > 0 {
        combined.min(SCHEMA_ERROR_SCORE_CAP)
    } else {
        combined
    }
}

/// Hard gate consumed by the publish action
pub struct PublishGate;

impl PublishGate {
    /// `Err(Blocked)` with the critical count when anything blocks
    pub fn check(result: &FullPageValidationResult) -> Result<(), PublishError> {
        if result.can_publish {
            Ok(())
        } else {
            Err(PublishError::Blocked {
                count: result.issues.critical.len(),
            })
        }
    }
}
