//! Engine events and the broadcast EventBus
//!
//! Hosts (editor UI, CLI, background jobs) subscribe to learn when a score was
//! recomputed, when a structured-data validation run finished or was
//! superseded, and when a publish attempt was refused.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Readiness engine event types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineEvent {
    /// A content record was scored
    ScoreComputed {
        /// Record identifier, when the host assigned one
        record_id: Option<Uuid>,
        /// Overall percentage (0-100)
        overall: u8,
        /// Qualitative band key ("good", "needs_improvement", "poor")
        band: String,
        timestamp: DateTime<Utc>,
    },

    /// A structured-data validation run was started
    ValidationStarted {
        generation: u64,
        timestamp: DateTime<Utc>,
    },

    /// A validation run finished and its report is current
    ValidationCompleted {
        generation: u64,
        valid: bool,
        error_count: usize,
        warning_count: usize,
        timestamp: DateTime<Utc>,
    },

    /// A validation run was cancelled or its result discarded because a
    /// newer run started
    ValidationSuperseded {
        generation: u64,
        latest_generation: u64,
        timestamp: DateTime<Utc>,
    },

    /// A publish attempt was refused by the readiness gate
    PublishBlocked {
        record_id: Option<Uuid>,
        critical_count: usize,
        timestamp: DateTime<Utc>,
    },
}

/// Central event distribution bus
///
/// Wraps `tokio::sync::broadcast`: publishing never blocks, slow subscribers
/// observe `Lagged` instead of stalling the producer.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<EngineEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new EventBus buffering up to `capacity` events
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self {
            tx,
            capacity: capacity.max(1),
        }
    }

    /// Subscribe to all future events
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.tx.subscribe()
    }

    /// Emit an event; `Err` when nobody is subscribed
    #[allow(clippy::result_large_err)]
    pub fn emit(
        &self,
        event: EngineEvent,
    ) -> Result<usize, broadcast::error::SendError<EngineEvent>> {
        self.tx.send(event)
    }

    /// Emit an event, ignoring the no-subscriber case
    pub fn emit_lossy(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }

    /// Current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(100)
    }
}
