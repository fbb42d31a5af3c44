//! Social scorer
//!
//! Open Graph and Twitter Card fields. An unset field that falls back to the
//! primary title, description or featured image still passes, reported as
//! `Info` so the author can see which value will be shared.

use super::{CategoryScorer, Criterion, Outcome};
use crate::config::ScoringConfig;
use crate::extractor::ExtractedFields;
use crate::models::FieldId;
use crate::types::{CategoryId, Priority};

const OG_DOCS: &str = "https://ogp.me/";
const TWITTER_DOCS: &str = "https://developer.x.com/en/docs/x-for-websites/cards/overview/markup";

/// Card types Twitter/X understands
pub const TWITTER_CARD_TYPES: &[&str] = &["summary", "summary_large_image", "app", "player"];

pub struct SocialScorer;

impl CategoryScorer for SocialScorer {
    fn category(&self) -> CategoryId {
        CategoryId::Social
    }

    fn criteria(&self) -> &'static [Criterion] {
        CRITERIA
    }
}

const CRITERIA: &[Criterion] = &[
    Criterion {
        id: "social-og-title",
        label: "Open Graph title",
        priority: Priority::Medium,
        field: Some(FieldId::OgTitle),
        recommendation: "Write a share title tuned for social feeds.",
        doc_link: Some(OG_DOCS),
        check: check_og_title,
    },
    Criterion {
        id: "social-og-description",
        label: "Open Graph description",
        priority: Priority::Medium,
        field: Some(FieldId::OgDescription),
        recommendation: "Write a share description tuned for social feeds.",
        doc_link: Some(OG_DOCS),
        check: check_og_description,
    },
    Criterion {
        id: "social-og-image",
        label: "Open Graph image",
        priority: Priority::High,
        field: Some(FieldId::OgImage),
        recommendation: "Set a share image (1200x630 works across networks).",
        doc_link: Some(OG_DOCS),
        check: check_og_image,
    },
    Criterion {
        id: "social-twitter-card",
        label: "Twitter card type",
        priority: Priority::Low,
        field: Some(FieldId::TwitterCard),
        recommendation: "Choose a Twitter card type, usually \"summary_large_image\".",
        doc_link: Some(TWITTER_DOCS),
        check: check_twitter_card,
    },
    Criterion {
        id: "social-twitter-title",
        label: "Twitter title",
        priority: Priority::Low,
        field: Some(FieldId::TwitterTitle),
        recommendation: "Set a Twitter title or an Open Graph title to fall back to.",
        doc_link: Some(TWITTER_DOCS),
        check: check_twitter_title,
    },
    Criterion {
        id: "social-twitter-description",
        label: "Twitter description",
        priority: Priority::Low,
        field: Some(FieldId::TwitterDescription),
        recommendation: "Set a Twitter description or an Open Graph description to fall back to.",
        doc_link: Some(TWITTER_DOCS),
        check: check_twitter_description,
    },
];

/// Pass when set, `Info` when a fallback exists, `Fail` otherwise
fn with_fallback(what: &str, own: Option<&str>, fallback: Option<(&str, &str)>) -> Outcome {
    match (own, fallback) {
        (Some(value), _) => Outcome::pass().current(value),
        (None, Some((from, value))) => {
            Outcome::info(format!("{} not set; the {} will be shared", what, from)).current(value)
        }
        (None, None) => Outcome::fail(format!("{} is missing and nothing to fall back to", what)),
    }
}

fn check_og_title(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    with_fallback(
        "Open Graph title",
        fields.og_title.as_deref(),
        fields.effective_title.as_deref().map(|t| ("page title", t)),
    )
}

fn check_og_description(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    with_fallback(
        "Open Graph description",
        fields.og_description.as_deref(),
        fields.effective_description.as_deref().map(|d| ("meta description", d)),
    )
}

fn check_og_image(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    match fields.og_image.as_deref() {
        Some(url) if fields.og_image_is_fallback => {
            Outcome::info("Open Graph image not set; the featured image will be shared").current(url)
        }
        Some(url) => Outcome::pass().current(url),
        None => Outcome::fail("No Open Graph image and no featured image"),
    }
}

fn check_twitter_card(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    let target = TWITTER_CARD_TYPES.join(", ");
    match fields.twitter_card.as_deref() {
        None => Outcome::info("Card type not set; \"summary\" is assumed").current("summary"),
        Some(card) if TWITTER_CARD_TYPES.contains(&card) => Outcome::pass().current(card),
        Some(card) => Outcome::warn(format!("\"{}\" is not a Twitter card type", card))
            .current(card)
            .target(target),
    }
}

fn check_twitter_title(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    let fallback = fields
        .og_title
        .as_deref()
        .map(|t| ("Open Graph title", t))
        .or_else(|| fields.effective_title.as_deref().map(|t| ("page title", t)));
    with_fallback("Twitter title", fields.twitter_title.as_deref(), fallback)
}

fn check_twitter_description(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    let fallback = fields
        .og_description
        .as_deref()
        .map(|d| ("Open Graph description", d))
        .or_else(|| fields.effective_description.as_deref().map(|d| ("meta description", d)));
    with_fallback("Twitter description", fields.twitter_description.as_deref(), fallback)
}
