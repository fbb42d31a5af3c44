//! Static step catalog for the authoring wizard

use crate::models::FieldId;
use serde::{Deserialize, Serialize};

/// One wizard step: which fields it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepConfig {
    /// 1-based position
    pub step: u32,
    pub id: String,
    pub label: String,
    pub description: String,
    pub required_fields: Vec<FieldId>,
    #[serde(default)]
    pub optional_fields: Vec<FieldId>,
}

impl StepConfig {
    pub fn new(step: u32, id: &str, label: &str, description: &str) -> Self {
        Self {
            step,
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            required_fields: Vec::new(),
            optional_fields: Vec::new(),
        }
    }

    pub fn required(mut self, fields: &[FieldId]) -> Self {
        self.required_fields = fields.to_vec();
        self
    }

    pub fn optional(mut self, fields: &[FieldId]) -> Self {
        self.optional_fields = fields.to_vec();
        self
    }

    /// Required then optional
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.required_fields
            .iter()
            .chain(self.optional_fields.iter())
            .copied()
    }
}

/// Default six-step catalog; the last step is the review step
pub fn default_steps() -> Vec<StepConfig> {
    use FieldId::*;

    vec![
        StepConfig::new(1, "basics", "Basics", "Title, URL and ownership")
            .required(&[Title, Slug, Client, Author, Category])
            .optional(&[Language]),
        StepConfig::new(2, "content", "Content", "Body, excerpt and supporting material")
            .required(&[Body, Excerpt])
            .optional(&[Tags, Faqs, Citations]),
        StepConfig::new(3, "media", "Media", "Featured image and gallery")
            .required(&[FeaturedImage])
            .optional(&[Gallery]),
        StepConfig::new(4, "seo", "SEO", "Search appearance and indexing")
            .required(&[SeoTitle, SeoDescription])
            .optional(&[
                FocusKeyword,
                SemanticKeywords,
                Robots,
                CanonicalUrl,
                SitemapPriority,
                SitemapChangeFrequency,
            ]),
        StepConfig::new(5, "social", "Social & publishing", "Share previews and schedule")
            .optional(&[
                OgTitle,
                OgDescription,
                OgImage,
                TwitterTitle,
                TwitterDescription,
                TwitterCard,
                PublishAt,
            ]),
        StepConfig::new(6, "review", "Review", "Check readiness and publish"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_steps_numbered_in_order() {
        let steps = default_steps();
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.step as usize, i + 1);
        }
        assert_eq!(steps.last().unwrap().id, "review");
    }

    #[test]
    fn test_each_field_owned_by_at_most_one_step() {
        let mut seen = HashSet::new();
        for step in default_steps() {
            for field in step.fields() {
                assert!(seen.insert(field), "{} listed twice", field);
            }
        }
    }
}
