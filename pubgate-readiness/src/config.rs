//! Engine configuration
//!
//! Loaded from TOML through `pubgate_common::config`; every table and key is
//! optional and falls back to the compiled defaults below.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [scoring]
//! good_threshold = 80
//! min_word_count = 600
//!
//! [scoring.weights]
//! content = 30
//!
//! [validator]
//! require_author_bio = true
//! endpoint = "http://localhost:8088/validate"
//!
//! [wizard]
//! progress_step_count = 5
//! ```

use crate::types::CategoryId;
use pubgate_common::config::{load_toml_config, resolve_config_path, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub logging: LoggingConfig,
    pub scoring: ScoringConfig,
    pub validator: ValidatorConfig,
    pub wizard: WizardConfig,
}

impl EngineConfig {
    /// Resolve and load the config file (CLI > env > user config > defaults)
    pub fn load(cli_path: Option<&Path>) -> pubgate_common::Result<Self> {
        let path = resolve_config_path(cli_path);
        load_toml_config(path.as_deref())
    }
}

/// Scoring thresholds and category weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Per-category weight, reported as `maxScore`
    pub weights: CategoryWeights,
    /// Overall percentage at or above which the band is "good"
    pub good_threshold: u8,
    /// Overall percentage at or above which the band is "needs improvement"
    pub fair_threshold: u8,
    /// Minimum body word count
    pub min_word_count: usize,
    /// Paragraphs longer than this many words are flagged
    pub max_paragraph_words: usize,
    /// Reading speed used for the reading-time estimate
    pub words_per_minute: usize,
    pub title_min_length: usize,
    pub title_max_length: usize,
    pub description_min_length: usize,
    pub description_max_length: usize,
    pub headline_min_length: usize,
    pub headline_max_length: usize,
    /// Minimum semantic keywords before the keyword check passes
    pub min_semantic_keywords: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: CategoryWeights::default(),
            good_threshold: 80,
            fair_threshold: 60,
            min_word_count: 300,
            max_paragraph_words: 150,
            words_per_minute: 200,
            title_min_length: 50,
            title_max_length: 60,
            description_min_length: 120,
            description_max_length: 160,
            headline_min_length: 10,
            headline_max_length: 110,
            min_semantic_keywords: 3,
        }
    }
}

/// Category weights; the overall score is the weight-averaged category
/// percentage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub meta_tags: u32,
    pub content: u32,
    pub images: u32,
    pub structured_data: u32,
    pub technical: u32,
    pub social: u32,
}

impl CategoryWeights {
    pub fn weight(&self, category: CategoryId) -> u32 {
        match category {
            CategoryId::MetaTags => self.meta_tags,
            CategoryId::Content => self.content,
            CategoryId::Images => self.images,
            CategoryId::StructuredData => self.structured_data,
            CategoryId::Technical => self.technical,
            CategoryId::Social => self.social,
        }
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            meta_tags: 20,
            content: 25,
            images: 15,
            structured_data: 15,
            technical: 15,
            social: 10,
        }
    }
}

/// Structured-data validator options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub require_publisher_logo: bool,
    pub require_hero_image: bool,
    pub require_author_bio: bool,
    pub min_headline_length: usize,
    pub max_headline_length: usize,
    /// HTTP schema validation service; the offline schema.org rules are used
    /// when unset
    pub endpoint: Option<String>,
    /// Request timeout for the HTTP collaborator
    pub timeout_ms: u64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            require_publisher_logo: true,
            require_hero_image: true,
            require_author_bio: false,
            min_headline_length: 10,
            max_headline_length: 110,
            endpoint: None,
            timeout_ms: 5000,
        }
    }
}

/// Authoring wizard options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Number of leading steps averaged into overall progress. The trailing
    /// review step is excluded with the default catalog.
    pub progress_step_count: usize,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            progress_step_count: 5,
        }
    }
}
