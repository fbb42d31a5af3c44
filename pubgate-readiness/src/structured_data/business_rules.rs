//! Publishing business rules over a JSON-LD graph
//!
//! Configurable house rules layered on top of schema conformance. Results are
//! plain messages.
//!
//! | Rule | Error when | Otherwise |
//! |------|-----------|-----------|
//! | Article node | absent | |
//! | Headline | missing, or longer than `max_headline_length` | warning when shorter than `min_headline_length` |
//! | Hero image | absent and `require_hero_image` | warning when absent |
//! | Publisher | absent | |
//! | Publisher logo | absent and `require_publisher_logo` | warning when absent |
//! | Author bio | absent and `require_author_bio` | |

use super::graph::{summarize, GraphSummary};
use super::report::BusinessResult;
use crate::config::ValidatorConfig;
use serde_json::Value;

pub fn check_business_rules(graph: &Value, config: &ValidatorConfig) -> BusinessResult {
    evaluate(&summarize(graph), config)
}

fn evaluate(summary: &GraphSummary, config: &ValidatorConfig) -> BusinessResult {
    let mut result = BusinessResult::default();

    if !summary.has_article {
        result
            .errors
            .push("No Article node found; the page will not be eligible for article rich results".into());
    }

    match summary.headline.as_deref().map(|h| h.chars().count()) {
        None => result.errors.push("Headline is missing".into()),
        Some(len) if len > config.max_headline_length => result.errors.push(format!(
            "Headline is {} characters, above the {} character maximum",
            len, config.max_headline_length
        )),
        Some(len) if len < config.min_headline_length => result.warnings.push(format!(
            "Headline is {} characters, below the {} character minimum",
            len, config.min_headline_length
        )),
        Some(_) => {}
    }

    if !summary.has_hero_image {
        if config.require_hero_image {
            result
                .errors
                .push("Hero image is required but the article has no image".into());
        } else {
            result.warnings.push("Article has no hero image".into());
        }
    }

    if !summary.has_publisher {
        result.errors.push("Publisher organization is missing".into());
    }
    if !summary.publisher_has_logo {
        if config.require_publisher_logo {
            result.errors.push("Publisher logo is required but missing".into());
        } else {
            result.warnings.push("Publisher has no logo".into());
        }
    }

    if config.require_author_bio && !summary.author_has_bio {
        result.errors.push("Author bio is required but missing".into());
    }

    result
}
