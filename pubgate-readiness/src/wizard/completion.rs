//! Step completion and derived step status
//!
//! `validate_step` is a pure function of (step, record, field errors). Step
//! status is derived from the active step index on every call and never
//! stored.

use super::catalog::StepConfig;
use crate::models::{ContentRecord, FieldErrors};
use crate::types::percentage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepValidation {
    pub step: u32,
    pub completed_fields: usize,
    pub total_fields: usize,
    /// Number of required fields
    pub required_fields: usize,
    pub completed_required_fields: usize,
    pub has_errors: bool,
    /// `"<field>: <message>"` for every mapped error on this step's fields
    pub errors: Vec<String>,
    pub completion_percentage: u8,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Active,
    Completed,
    Warning,
    Error,
    Pending,
}

pub fn validate_step(step: &StepConfig, record: &ContentRecord, errors: &FieldErrors) -> StepValidation {
    let completed_required_fields = step
        .required_fields
        .iter()
        .filter(|field| field.is_set(record))
        .count();
    let completed_fields = step.fields().filter(|field| field.is_set(record)).count();
    let total_fields = step.fields().count();

    let messages: Vec<String> = step
        .fields()
        .flat_map(|field| {
            errors
                .messages(field)
                .iter()
                .map(move |message| format!("{}: {}", field, message))
        })
        .collect();
    let has_errors = !messages.is_empty();

    StepValidation {
        step: step.step,
        completed_fields,
        total_fields,
        required_fields: step.required_fields.len(),
        completed_required_fields,
        has_errors,
        errors: messages,
        completion_percentage: percentage(completed_fields, total_fields),
        is_valid: completed_required_fields == step.required_fields.len() && !has_errors,
    }
}

/// Status of the step at `index` (0-based) while `active` is open
pub fn step_status(index: usize, active: usize, validation: &StepValidation) -> StepStatus {
    if index == active {
        StepStatus::Active
    } else if index > active {
        StepStatus::Pending
    } else if validation.has_errors {
        StepStatus::Error
    } else if validation.completed_required_fields < validation.required_fields {
        StepStatus::Warning
    } else {
        StepStatus::Completed
    }
}

/// Mean completion of the first `step_count` steps, rounded. 100 when no
/// step is counted.
pub fn overall_progress(validations: &[StepValidation], step_count: usize) -> u8 {
    let counted = &validations[..step_count.min(validations.len())];
    if counted.is_empty() {
        return 100;
    }
    let sum: u32 = counted.iter().map(|v| u32::from(v.completion_percentage)).sum();
    (f64::from(sum) / counted.len() as f64).round() as u8
}
