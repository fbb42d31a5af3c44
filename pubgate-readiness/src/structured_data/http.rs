//! HTTP schema validation client
//!
//! POSTs the JSON-LD graph to a validation service and expects a
//! `SchemaCheck` body back:
//!
//! ```json
//! { "errors": [{ "message": "...", "path": "@graph[0]", "property": "headline",
//!                "kind": "schema_structure_error" }],
//!   "warnings": [] }
//! ```
//!
//! Issues without a `kind` default to structure errors (errors) and
//! recommendation warnings (warnings).

use super::report::SchemaCheck;
use super::SchemaValidator;
use crate::error::ValidationError;
use crate::types::IssueKind;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use pubgate_common::time;

const USER_AGENT: &str = concat!("pubgate-readiness/", env!("CARGO_PKG_VERSION"));

/// Response issue as sent by the service; `kind` optional
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireIssue {
    message: String,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    property: Option<String>,
    #[serde(default)]
    fix: Option<String>,
    #[serde(default)]
    recommendation: Option<String>,
    #[serde(default)]
    kind: Option<IssueKind>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireCheck {
    errors: Vec<WireIssue>,
    warnings: Vec<WireIssue>,
}

impl WireIssue {
    fn into_issue(self, default_kind: IssueKind) -> super::ValidationIssue {
        super::ValidationIssue {
            message: self.message,
            path: self.path,
            property: self.property,
            fix: self.fix,
            recommendation: self.recommendation,
            kind: self.kind.unwrap_or(default_kind),
        }
    }
}

/// Remote schema validator
pub struct HttpSchemaValidator {
    http_client: reqwest::Client,
    endpoint: String,
    timeout_ms: u64,
}

impl HttpSchemaValidator {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> Result<Self, ValidationError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(time::millis_to_duration(timeout_ms))
            .build()
            .map_err(|e| ValidationError::Internal(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
            timeout_ms,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SchemaValidator for HttpSchemaValidator {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn check(&self, graph: &Value) -> Result<SchemaCheck, ValidationError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting structured data for validation");

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(graph)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ValidationError::Timeout(self.timeout_ms)
                } else {
                    ValidationError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ValidationError::Status(status.as_u16()));
        }

        let wire: WireCheck = response
            .json()
            .await
            .map_err(|e| ValidationError::Parse(e.to_string()))?;

        let check = SchemaCheck {
            errors: wire
                .errors
                .into_iter()
                .map(|i| i.into_issue(IssueKind::SchemaStructureError))
                .collect(),
            warnings: wire
                .warnings
                .into_iter()
                .map(|i| i.into_issue(IssueKind::SchemaRecommendationWarning))
                .collect(),
        };

        tracing::debug!(
            errors = check.errors.len(),
            warnings = check.warnings.len(),
            "Remote schema validation returned"
        );
        Ok(check)
    }
}
