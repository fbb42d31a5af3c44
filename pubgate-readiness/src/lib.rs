//! pubgate-readiness library interface
//!
//! Pre-publication readiness engine for content records: six-category SEO
//! scoring, an actionable checklist, structured-data (JSON-LD) validation,
//! the full-page publish gate and wizard step completion.

pub mod aggregator;
pub mod aliases;
pub mod cache;
pub mod checklist;
pub mod config;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod full_page;
pub mod models;
pub mod offpage;
pub mod pipeline;
pub mod scorers;
pub mod snapshot;
pub mod structured_data;
pub mod types;
pub mod wizard;

pub use crate::config::EngineConfig;
pub use crate::engine::ReadinessEngine;
pub use crate::error::{PublishError, ValidationError};
pub use crate::full_page::{validate_full_page, FullPageValidationResult, PublishGate};
pub use crate::models::{ContentRecord, FieldErrors, FieldId};
pub use crate::pipeline::score;
pub use crate::structured_data::{SchemaValidator, StructuredDataValidator, ValidationReport};
pub use crate::types::{CategoryId, CategoryScore, CheckStatus, ChecklistItem, Priority, ScoreBand, ScoreResult};
