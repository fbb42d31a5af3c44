//! Actionable checklist
//!
//! Every `Warning`/`Fail` item across the six categories, grouped by category
//! (reporting order) and sorted within a group by priority, failures before
//! warnings at equal priority. Passing and `Info` items are left out.

use crate::types::{CategoryId, CheckStatus, ChecklistItem, ScoreResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistGroup {
    pub category: CategoryId,
    pub label: String,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub groups: Vec<ChecklistGroup>,
}

impl Checklist {
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Flat list in display order
    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }
}

/// Build the checklist; categories with nothing to fix are omitted
pub fn build_checklist(result: &ScoreResult) -> Checklist {
    let groups = result
        .categories
        .iter()
        .filter_map(|category| {
            let mut items: Vec<ChecklistItem> = category
                .items
                .iter()
                .filter(|item| item.status.is_actionable())
                .cloned()
                .collect();
            if items.is_empty() {
                return None;
            }
            items.sort_by_key(|item| (item.priority, status_rank(item.status)));
            Some(ChecklistGroup {
                category: category.category,
                label: category.category.label().to_string(),
                items,
            })
        })
        .collect();

    Checklist { groups }
}

fn status_rank(status: CheckStatus) -> u8 {
    match status {
        CheckStatus::Fail => 0,
        CheckStatus::Warning => 1,
        CheckStatus::Info => 2,
        CheckStatus::Pass => 3,
    }
}
