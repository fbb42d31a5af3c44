//! Validation report types

use crate::types::IssueKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One schema-conformance finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub message: String,
    /// JSON path of the offending node, e.g. `@graph[1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// Suggested fix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
    /// Only set on warnings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn structure_error(message: impl Into<String>) -> Self {
        Self::new(message, IssueKind::SchemaStructureError)
    }

    pub fn recommendation_warning(message: impl Into<String>) -> Self {
        Self::new(message, IssueKind::SchemaRecommendationWarning)
    }

    pub fn new(message: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            message: message.into(),
            path: None,
            property: None,
            fix: None,
            recommendation: None,
            kind,
        }
    }

    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    pub fn fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn recommend(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}

/// What a `SchemaValidator` collaborator returns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaCheck {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

/// External schema conformance namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    pub valid: bool,
    pub timestamp: DateTime<Utc>,
}

impl ExternalResult {
    pub fn from_check(check: SchemaCheck, timestamp: DateTime<Utc>) -> Self {
        Self {
            valid: check.errors.is_empty(),
            errors: check.errors,
            warnings: check.warnings,
            timestamp,
        }
    }
}

/// Business rules namespace; plain messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Merged structured-data report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub external: ExternalResult,
    pub business: BusinessResult,
    /// No errors from either source
    pub valid: bool,
}

impl ValidationReport {
    pub fn new(external: ExternalResult, business: BusinessResult) -> Self {
        let valid = external.errors.is_empty() && business.errors.is_empty();
        Self {
            external,
            business,
            valid,
        }
    }

    pub fn error_count(&self) -> usize {
        self.external.errors.len() + self.business.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.external.warnings.len() + self.business.warnings.len()
    }

    /// Every error message from both sources
    pub fn error_messages(&self) -> impl Iterator<Item = &str> {
        self.external
            .errors
            .iter()
            .map(|i| i.message.as_str())
            .chain(self.business.errors.iter().map(String::as_str))
    }
}
