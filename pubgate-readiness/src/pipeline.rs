//! Scoring pipeline: extract -> six scorers -> aggregate

use crate::aggregator::aggregate;
use crate::config::ScoringConfig;
use crate::extractor::extract;
use crate::models::ContentRecord;
use crate::scorers::score_categories;
use crate::types::ScoreResult;
use serde_json::Value;
use tracing::debug;

/// Score a content record, optionally against its generated JSON-LD graph.
///
/// Pure: identical inputs always give identical output.
pub fn score(record: &ContentRecord, graph: Option<&Value>, config: &ScoringConfig) -> ScoreResult {
    let fields = extract(record, graph, config);
    let categories = score_categories(&fields, config);
    let aggregate = aggregate(&categories, config);

    debug!(
        overall = aggregate.overall,
        band = aggregate.band.key(),
        passed = aggregate.passed,
        total = aggregate.total,
        words = fields.word_count,
        "Record scored"
    );

    ScoreResult {
        categories,
        overall: aggregate.overall,
        band: aggregate.band,
        passed: aggregate.passed,
        total: aggregate.total,
        word_count: fields.word_count,
        reading_time_minutes: fields.reading_time_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryId, CheckStatus, ScoreBand};

    #[test]
    fn test_empty_record_is_poor() {
        let result = score(&ContentRecord::default(), None, &ScoringConfig::default());
        assert_eq!(result.categories.len(), 6);
        assert_eq!(result.band, ScoreBand::Poor);
        assert_eq!(result.total, result.items().count());

        let meta = result.category(CategoryId::MetaTags).unwrap();
        assert_eq!(meta.percentage, 0);
        assert!(meta
            .items
            .iter()
            .any(|i| i.id == "meta-title" && i.status == CheckStatus::Fail));
    }

    #[test]
    fn test_deterministic() {
        let record = ContentRecord {
            title: Some("A title".into()),
            body: Some("Some words here".into()),
            ..Default::default()
        };
        let config = ScoringConfig::default();
        assert_eq!(score(&record, None, &config), score(&record, None, &config));
    }
}
