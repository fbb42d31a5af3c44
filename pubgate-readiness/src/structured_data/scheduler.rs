//! Last-call-wins validation scheduling
//!
//! Every submission takes the next generation number and cancels the token of
//! the run before it. A run that is cancelled, or that finishes after a newer
//! run has started, reports `Superseded` and its report is dropped, so a host
//! never replaces a fresher report with a stale one.

use super::report::ValidationReport;
use super::validator::StructuredDataValidator;
use pubgate_common::events::{EngineEvent, EventBus};
use pubgate_common::time;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Result of one scheduled validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledOutcome {
    /// Latest run; its report is current
    Completed {
        generation: u64,
        report: ValidationReport,
    },
    /// A newer run started before this one finished
    Superseded { generation: u64, latest_generation: u64 },
}

impl ScheduledOutcome {
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            ScheduledOutcome::Completed { report, .. } => Some(report),
            ScheduledOutcome::Superseded { .. } => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, ScheduledOutcome::Superseded { .. })
    }
}

pub struct ValidationScheduler {
    validator: StructuredDataValidator,
    events: EventBus,
    generation: AtomicU64,
    in_flight: Mutex<Option<CancellationToken>>,
}

impl ValidationScheduler {
    pub fn new(validator: StructuredDataValidator, events: EventBus) -> Self {
        Self {
            validator,
            events,
            generation: AtomicU64::new(0),
            in_flight: Mutex::new(None),
        }
    }

    /// Generation of the most recent submission (0 before the first)
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Validate `graph`, superseding any run still in flight
    pub async fn submit(&self, graph: Value) -> ScheduledOutcome {
        let token = CancellationToken::new();
        // Generation and token are swapped under one lock so the newest
        // generation always owns the live token
        let generation = {
            let mut in_flight = self.in_flight.lock().await;
            if let Some(previous) = in_flight.replace(token.clone()) {
                previous.cancel();
            }
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        self.events.emit_lossy(EngineEvent::ValidationStarted {
            generation,
            timestamp: time::now(),
        });
        debug!(generation, "Validation started");

        let report = tokio::select! {
            _ = token.cancelled() => None,
            report = self.validator.validate(&graph) => Some(report),
        };

        let latest_generation = self.latest_generation();
        match report {
            Some(report) if latest_generation == generation => {
                self.events.emit_lossy(EngineEvent::ValidationCompleted {
                    generation,
                    valid: report.valid,
                    error_count: report.error_count(),
                    warning_count: report.warning_count(),
                    timestamp: time::now(),
                });
                ScheduledOutcome::Completed { generation, report }
            }
            _ => {
                warn!(generation, latest_generation, "Validation superseded; result discarded");
                self.events.emit_lossy(EngineEvent::ValidationSuperseded {
                    generation,
                    latest_generation,
                    timestamp: time::now(),
                });
                ScheduledOutcome::Superseded {
                    generation,
                    latest_generation,
                }
            }
        }
    }

    /// Cancel the run in flight, if any
    pub async fn cancel(&self) {
        if let Some(token) = self.in_flight.lock().await.take() {
            token.cancel();
        }
    }
}
