//! Step Completion Engine
//!
//! Tracks per-step field completion for the multi-step authoring wizard,
//! independently of scoring.

pub mod catalog;
pub mod completion;

pub use catalog::{default_steps, StepConfig};
pub use completion::{overall_progress, step_status, validate_step, StepStatus, StepValidation};

use crate::config::WizardConfig;
use crate::models::{ContentRecord, FieldErrors};
use serde::{Deserialize, Serialize};

/// Whole-wizard view for one record state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub steps: Vec<StepView>,
    /// Mean completion of the leading `progress_step_count` steps
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepView {
    pub id: String,
    pub label: String,
    pub status: StepStatus,
    pub validation: StepValidation,
}

/// Step catalog plus progress configuration
#[derive(Debug, Clone)]
pub struct StepCompletion {
    steps: Vec<StepConfig>,
    progress_step_count: usize,
}

impl StepCompletion {
    pub fn new(steps: Vec<StepConfig>, config: &WizardConfig) -> Self {
        Self {
            steps,
            progress_step_count: config.progress_step_count,
        }
    }

    pub fn steps(&self) -> &[StepConfig] {
        &self.steps
    }

    /// Validation for 1-based `step`
    pub fn validate(&self, step: u32, record: &ContentRecord, errors: &FieldErrors) -> Option<StepValidation> {
        self.steps
            .iter()
            .find(|s| s.step == step)
            .map(|s| validate_step(s, record, errors))
    }

    pub fn validate_all(&self, record: &ContentRecord, errors: &FieldErrors) -> Vec<StepValidation> {
        self.steps
            .iter()
            .map(|s| validate_step(s, record, errors))
            .collect()
    }

    /// Statuses and progress with the step at `active` (0-based) open
    pub fn state(&self, active: usize, record: &ContentRecord, errors: &FieldErrors) -> WizardState {
        let validations = self.validate_all(record, errors);
        let progress = overall_progress(&validations, self.progress_step_count);
        let steps = self
            .steps
            .iter()
            .zip(validations)
            .enumerate()
            .map(|(index, (config, validation))| StepView {
                id: config.id.clone(),
                label: config.label.clone(),
                status: step_status(index, active, &validation),
                validation,
            })
            .collect();
        WizardState { steps, progress }
    }
}

impl Default for StepCompletion {
    fn default() -> Self {
        Self::new(default_steps(), &WizardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_on_fresh_record() {
        let wizard = StepCompletion::default();
        let state = wizard.state(1, &ContentRecord::default(), &FieldErrors::new());
        let statuses: Vec<StepStatus> = state.steps.iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![
                StepStatus::Warning,
                StepStatus::Active,
                StepStatus::Pending,
                StepStatus::Pending,
                StepStatus::Pending,
                StepStatus::Pending
            ]
        );
        // Review step (100%) is outside the five counted steps
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn test_validate_unknown_step() {
        let wizard = StepCompletion::default();
        assert!(wizard
            .validate(42, &ContentRecord::default(), &FieldErrors::new())
            .is_none());
    }
}
