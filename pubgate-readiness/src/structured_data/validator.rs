//! Structured-Data Validator
//!
//! Merges the schema collaborator's findings with the business rules into one
//! `ValidationReport`. Never returns an error: a failed collaborator call
//! becomes a single report-level warning and malformed JSON-LD becomes a
//! critical parse issue.

use super::business_rules::check_business_rules;
use super::http::HttpSchemaValidator;
use super::report::{BusinessResult, ExternalResult, SchemaCheck, ValidationIssue, ValidationReport};
use super::schema_org::SchemaOrgRules;
use super::SchemaValidator;
use crate::config::ValidatorConfig;
use crate::types::IssueKind;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct StructuredDataValidator {
    schema: Arc<dyn SchemaValidator>,
    config: ValidatorConfig,
}

impl StructuredDataValidator {
    pub fn new(schema: Arc<dyn SchemaValidator>, config: ValidatorConfig) -> Self {
        Self { schema, config }
    }

    /// HTTP collaborator when an endpoint is configured, offline rules
    /// otherwise
    pub fn from_config(config: ValidatorConfig) -> Self {
        let schema: Arc<dyn SchemaValidator> = match config.endpoint.as_deref() {
            Some(endpoint) => match HttpSchemaValidator::new(endpoint, config.timeout_ms) {
                Ok(http) => Arc::new(http),
                Err(e) => {
                    warn!(error = %e, endpoint, "HTTP schema validator unavailable, using offline rules");
                    Arc::new(SchemaOrgRules::new())
                }
            },
            None => Arc::new(SchemaOrgRules::new()),
        };
        Self::new(schema, config)
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn collaborator(&self) -> &'static str {
        self.schema.name()
    }

    /// Validate a graph
    pub async fn validate(&self, graph: &Value) -> ValidationReport {
        let check = match self.schema.check(graph).await {
            Ok(check) => check,
            Err(e) => {
                warn!(validator = self.schema.name(), error = %e, "Schema validator failed; continuing with business rules");
                unavailable(&e.to_string())
            }
        };

        let report = ValidationReport::new(
            ExternalResult::from_check(check, Utc::now()),
            check_business_rules(graph, &self.config),
        );

        debug!(
            valid = report.valid,
            errors = report.error_count(),
            warnings = report.warning_count(),
            "Structured data validated"
        );
        report
    }

    /// Report for a run whose collaborator could not be consulted at all:
    /// business rules plus the single unavailable warning
    pub fn degraded_report(&self, graph: &Value, reason: &str) -> ValidationReport {
        ValidationReport::new(
            ExternalResult::from_check(unavailable(reason), Utc::now()),
            check_business_rules(graph, &self.config),
        )
    }

    /// Validate serialized JSON-LD; unparseable input is a critical issue
    pub async fn validate_str(&self, json_ld: &str) -> ValidationReport {
        match serde_json::from_str::<Value>(json_ld) {
            Ok(graph) => self.validate(&graph).await,
            Err(e) => {
                debug!(error = %e, "JSON-LD did not parse");
                parse_failure(&e)
            }
        }
    }
}

fn unavailable(reason: &str) -> SchemaCheck {
    SchemaCheck {
        errors: Vec::new(),
        warnings: vec![ValidationIssue::new(
            format!("External schema validation unavailable: {}", reason),
            IssueKind::ExternalValidatorUnavailable,
        )],
    }
}

/// Report for JSON-LD that is not valid JSON
pub fn parse_failure(err: &serde_json::Error) -> ValidationReport {
    let issue = ValidationIssue::new(
        format!("Structured data is not valid JSON: {}", err),
        IssueKind::ParseError,
    )
    .at(format!("line {}, column {}", err.line(), err.column()))
    .fix("Regenerate the structured data from the content record");

    ValidationReport::new(
        ExternalResult::from_check(
            SchemaCheck {
                errors: vec![issue],
                warnings: Vec::new(),
            },
            Utc::now(),
        ),
        BusinessResult::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use async_trait::async_trait;
    use serde_json::json;

    struct Failing;

    #[async_trait]
    impl SchemaValidator for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn check(&self, _graph: &Value) -> Result<SchemaCheck, ValidationError> {
            Err(ValidationError::Network("connection refused".into()))
        }
    }

    fn good_graph() -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": "A perfectly fine headline",
            "image": "https://example.com/a.jpg",
            "author": { "@type": "Person", "name": "Ada" },
            "publisher": { "@type": "Organization", "name": "X", "logo": "https://example.com/l.png" }
        })
    }

    #[tokio::test]
    async fn test_collaborator_failure_is_single_warning() {
        let validator = StructuredDataValidator::new(Arc::new(Failing), ValidatorConfig::default());
        let report = validator.validate(&good_graph()).await;

        assert!(report.valid);
        assert!(report.external.valid);
        assert_eq!(report.external.warnings.len(), 1);
        assert_eq!(report.external.warnings[0].kind, IssueKind::ExternalValidatorUnavailable);
        assert!(report.external.warnings[0].message.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_parse_error_is_critical_issue() {
        let validator = StructuredDataValidator::from_config(ValidatorConfig::default());
        let report = validator.validate_str("{ \"@type\": ").await;
        assert!(!report.valid);
        assert_eq!(report.external.errors.len(), 1);
        assert_eq!(report.external.errors[0].kind, IssueKind::ParseError);
    }

    #[tokio::test]
    async fn test_missing_hero_and_logo_invalidate_report() {
        let validator = StructuredDataValidator::from_config(ValidatorConfig {
            require_hero_image: true,
            require_publisher_logo: true,
            ..Default::default()
        });
        let report = validator
            .validate(&json!({
                "@context": "https://schema.org",
                "@type": "Article",
                "headline": "A perfectly fine headline",
                "author": { "@type": "Person", "name": "Ada" }
            }))
            .await;
        assert!(!report.valid);
        assert!(report
            .error_messages()
            .any(|m| m.contains("Hero image") || m.contains("logo")));
    }

    #[tokio::test]
    async fn test_offline_rules_by_default() {
        let validator = StructuredDataValidator::from_config(ValidatorConfig::default());
        assert_eq!(validator.collaborator(), "schema.org rules");
        let report = validator.validate(&good_graph()).await;
        assert!(report.business.errors.is_empty(), "{:?}", report.business.errors);
    }
}
