//! Aggregator
//!
//! Combines the six category scores into one overall percentage and a band.
//!
//! # Formula
//! `overall = round(sum(weight_c * pct_c) / sum(weight_c))`, the category
//! weights being the configured `maxScore` values. When every weight is zero
//! the categories are averaged with equal weight; with no categories the
//! result is 100 (nothing left to satisfy).
//!
//! Each category percentage is non-decreasing in its passed count and the
//! weights are fixed, so turning a failing criterion into a passing one never
//! lowers the overall percentage.
//!
//! # Bands
//! - Good: overall >= `good_threshold` (80)
//! - NeedsImprovement: overall >= `fair_threshold` (60)
//! - Poor: below that

use crate::config::ScoringConfig;
use crate::types::{CategoryScore, ScoreBand};
use serde::{Deserialize, Serialize};

/// Overall verdict across categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateScore {
    pub overall: u8,
    pub band: ScoreBand,
    pub passed: usize,
    pub total: usize,
}

/// Combine category scores
pub fn aggregate(scores: &[CategoryScore], config: &ScoringConfig) -> AggregateScore {
    let overall = weighted_percentage(scores);
    AggregateScore {
        overall,
        band: band_for(overall, config),
        passed: scores.iter().map(|s| s.passed).sum(),
        total: scores.iter().map(|s| s.total).sum(),
    }
}

fn weighted_percentage(scores: &[CategoryScore]) -> u8 {
    if scores.is_empty() {
        return 100;
    }

    let weight_sum: u64 = scores.iter().map(|s| u64::from(s.max_score)).sum();
    let (numerator, denominator) = if weight_sum == 0 {
        let sum: u64 = scores.iter().map(|s| u64::from(s.percentage)).sum();
        (sum as f64, scores.len() as f64)
    } else {
        let sum: u64 = scores
            .iter()
            .map(|s| u64::from(s.max_score) * u64::from(s.percentage))
            .sum();
        (sum as f64, weight_sum as f64)
    };

    (numerator / denominator).round().clamp(0.0, 100.0) as u8
}

/// Band for an overall percentage
pub fn band_for(overall: u8, config: &ScoringConfig) -> ScoreBand {
    if overall >= config.good_threshold {
        ScoreBand::Good
    } else if overall >= config.fair_threshold {
        ScoreBand::NeedsImprovement
    } else {
        ScoreBand::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{percentage, CategoryId};

    fn category(category: CategoryId, passed: usize, total: usize, weight: u32) -> CategoryScore {
        CategoryScore {
            category,
            passed,
            total,
            percentage: percentage(passed, total),
            max_score: weight,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_weighted_average() {
        let config = ScoringConfig::default();
        let scores = vec![
            category(CategoryId::MetaTags, 4, 4, 30),
            category(CategoryId::Content, 0, 4, 10),
        ];
        let result = aggregate(&scores, &config);
        assert_eq!(result.overall, 75);
        assert_eq!(result.band, ScoreBand::NeedsImprovement);
        assert_eq!((result.passed, result.total), (4, 8));
    }

    #[test]
    fn test_zero_weights_fall_back_to_equal_average() {
        let config = ScoringConfig::default();
        let scores = vec![
            category(CategoryId::MetaTags, 1, 1, 0),
            category(CategoryId::Content, 1, 2, 0),
        ];
        assert_eq!(aggregate(&scores, &config).overall, 75);
    }

    #[test]
    fn test_no_categories_is_fully_satisfied() {
        let result = aggregate(&[], &ScoringConfig::default());
        assert_eq!(result.overall, 100);
        assert_eq!(result.band, ScoreBand::Good);
    }

    #[test]
    fn test_band_boundaries() {
        let config = ScoringConfig::default();
        assert_eq!(band_for(80, &config), ScoreBand::Good);
        assert_eq!(band_for(79, &config), ScoreBand::NeedsImprovement);
        assert_eq!(band_for(60, &config), ScoreBand::NeedsImprovement);
        assert_eq!(band_for(59, &config), ScoreBand::Poor);
    }

    #[test]
    fn test_monotonic_when_one_more_criterion_passes() {
        let config = ScoringConfig::default();
        for passed in 0..5 {
            let before = vec![
                category(CategoryId::MetaTags, passed, 5, 20),
                category(CategoryId::Social, 1, 3, 10),
            ];
            let after = vec![
                category(CategoryId::MetaTags, passed + 1, 5, 20),
                category(CategoryId::Social, 1, 3, 10),
            ];
            assert!(aggregate(&after, &config).overall >= aggregate(&before, &config).overall);
        }
    }
}
