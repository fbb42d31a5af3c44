//! Readiness engine facade
//!
//! One handle per editing session: owns the configuration, the structured
//! data validator, the score cache, the wizard catalog and the event bus.

use crate::cache::ScoreCache;
use crate::checklist::{build_checklist, Checklist};
use crate::config::EngineConfig;
use crate::error::PublishError;
use crate::full_page::{validate_full_page, FullPageValidationResult, PublishGate};
use crate::models::{ContentRecord, FieldErrors};
use crate::offpage::{off_page_recommendations, OffPageGroup};
use crate::snapshot::{record_graph, record_metadata, ValidationSnapshot};
use crate::structured_data::{SchemaValidator, StructuredDataValidator, ValidationReport, ValidationScheduler};
use crate::types::ScoreResult;
use crate::wizard::{default_steps, StepCompletion, WizardState};
use pubgate_common::events::{EngineEvent, EventBus};
use pubgate_common::time;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ReadinessEngine {
    config: EngineConfig,
    validator: StructuredDataValidator,
    cache: ScoreCache,
    wizard: StepCompletion,
    events: EventBus,
}

impl ReadinessEngine {
    /// Engine with the schema collaborator chosen by `config.validator`
    pub fn new(config: EngineConfig) -> Self {
        let validator = StructuredDataValidator::from_config(config.validator.clone());
        Self::with_validator(config, validator)
    }

    /// Engine with a caller-supplied schema collaborator
    pub fn with_schema_validator(config: EngineConfig, schema: Arc<dyn SchemaValidator>) -> Self {
        let validator = StructuredDataValidator::new(schema, config.validator.clone());
        Self::with_validator(config, validator)
    }

    fn with_validator(config: EngineConfig, validator: StructuredDataValidator) -> Self {
        info!(
            collaborator = validator.collaborator(),
            progress_steps = config.wizard.progress_step_count,
            "Readiness engine ready"
        );
        Self {
            wizard: StepCompletion::new(default_steps(), &config.wizard),
            cache: ScoreCache::default(),
            events: EventBus::default(),
            validator,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Score a record (memoized by content hash)
    pub fn score(&self, record: &ContentRecord, graph: Option<&Value>) -> ScoreResult {
        let result = self.cache.score(record, graph, &self.config.scoring);
        self.events.emit_lossy(EngineEvent::ScoreComputed {
            record_id: record.id,
            overall: result.overall,
            band: result.band.key().to_string(),
            timestamp: time::now(),
        });
        result
    }

    pub fn checklist(&self, record: &ContentRecord, graph: Option<&Value>) -> Checklist {
        build_checklist(&self.score(record, graph))
    }

    pub fn off_page(&self, record: &ContentRecord) -> Vec<OffPageGroup> {
        off_page_recommendations(record)
    }

    pub async fn validate_structured_data(&self, graph: &Value) -> ValidationReport {
        self.validator.validate(graph).await
    }

    /// Validate serialized JSON-LD; unparseable input is reported, not raised
    pub async fn validate_json_ld(&self, json_ld: &str) -> ValidationReport {
        self.validator.validate_str(json_ld).await
    }

    /// Last-call-wins scheduler sharing this engine's validator and events
    pub fn scheduler(&self) -> ValidationScheduler {
        ValidationScheduler::new(self.validator.clone(), self.events.clone())
    }

    pub fn full_page(&self, score: &ScoreResult, report: &ValidationReport) -> FullPageValidationResult {
        validate_full_page(score, report)
    }

    /// Score, validate and combine ahead of a publish attempt. Scoring sees
    /// the caller's graph, exactly as the editor badge does; validation
    /// falls back to the graph derived from the record. A failed validator
    /// call is downgraded to a warning inside the report.
    pub async fn prepare_publish(&self, record: &ContentRecord, graph: Option<&Value>) -> FullPageValidationResult {
        let score = self.score(record, graph);
        let report = match graph {
            Some(graph) => self.validator.validate(graph).await,
            None => self.validator.validate(&record_graph(record)).await,
        };
        validate_full_page(&score, &report)
    }

    /// Publish gate: the verdict when publishable, `Blocked` otherwise
    pub async fn publish(
        &self,
        record: &ContentRecord,
        graph: Option<&Value>,
    ) -> Result<FullPageValidationResult, PublishError> {
        let result = self.prepare_publish(record, graph).await;
        if let Err(e) = PublishGate::check(&result) {
            warn!(record_id = ?record.id, critical = result.issues.critical.len(), "Publish blocked");
            self.events.emit_lossy(EngineEvent::PublishBlocked {
                record_id: record.id,
                critical_count: result.issues.critical.len(),
                timestamp: time::now(),
            });
            return Err(e);
        }
        info!(record_id = ?record.id, overall = result.overall_score, "Publish allowed");
        Ok(result)
    }

    /// Artifacts for the host to persist on save. Never waits on the schema
    /// collaborator: the host passes the latest report it holds (usually the
    /// scheduler's), otherwise the business rules alone are recorded.
    pub fn snapshot(
        &self,
        record: &ContentRecord,
        graph: Option<&Value>,
        latest_report: Option<ValidationReport>,
    ) -> ValidationSnapshot {
        let graph = graph.cloned().unwrap_or_else(|| record_graph(record));
        let report = latest_report
            .unwrap_or_else(|| self.validator.degraded_report(&graph, "not run before save"));
        ValidationSnapshot::new(&graph, record_metadata(record), report)
    }

    pub fn wizard(&self) -> &StepCompletion {
        &self.wizard
    }

    pub fn wizard_state(&self, active: usize, record: &ContentRecord, errors: &FieldErrors) -> WizardState {
        self.wizard.state(active, record, errors)
    }
}

impl Default for ReadinessEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
