//! Structured-data (JSON-LD) validation
//!
//! Two independent rule sets merged into one `ValidationReport`:
//! - **external**: a `SchemaValidator` collaborator (offline schema.org rules
//!   or a remote HTTP service)
//! - **business**: configurable house rules (`business_rules`)
//!
//! `scheduler` runs validations last-call-wins for hosts that revalidate on
//! every edit.

pub mod business_rules;
pub mod graph;
pub mod http;
pub mod report;
pub mod scheduler;
pub mod schema_org;
pub mod validator;

pub use business_rules::check_business_rules;
pub use http::HttpSchemaValidator;
pub use report::{BusinessResult, ExternalResult, SchemaCheck, ValidationIssue, ValidationReport};
pub use scheduler::{ScheduledOutcome, ValidationScheduler};
pub use schema_org::SchemaOrgRules;
pub use validator::StructuredDataValidator;

use crate::error::ValidationError;
use async_trait::async_trait;
use serde_json::Value;

/// External schema conformance collaborator
///
/// Implementations may do I/O; any failure is returned as a
/// `ValidationError` and downgraded to a report warning by
/// `StructuredDataValidator`.
#[async_trait]
pub trait SchemaValidator: Send + Sync {
    /// Name for logs
    fn name(&self) -> &'static str;

    async fn check(&self, graph: &Value) -> Result<SchemaCheck, ValidationError>;
}
