//! Images scorer

use super::{CategoryScorer, Criterion, Outcome};
use crate::config::ScoringConfig;
use crate::extractor::ExtractedFields;
use crate::models::FieldId;
use crate::types::{CategoryId, Priority};

const IMAGE_DOCS: &str = "https://developers.google.com/search/docs/appearance/google-images";

pub struct ImagesScorer;

impl CategoryScorer for ImagesScorer {
    fn category(&self) -> CategoryId {
        CategoryId::Images
    }

    fn criteria(&self) -> &'static [Criterion] {
        CRITERIA
    }
}

const CRITERIA: &[Criterion] = &[
    Criterion {
        id: "images-featured",
        label: "Featured image",
        priority: Priority::High,
        field: Some(FieldId::FeaturedImage),
        recommendation: "Add a featured image; it is reused for social previews and structured data.",
        doc_link: Some(IMAGE_DOCS),
        check: check_featured,
    },
    Criterion {
        id: "images-featured-alt",
        label: "Featured image alt text",
        priority: Priority::High,
        field: Some(FieldId::FeaturedImage),
        recommendation: "Describe the featured image in its alt text.",
        doc_link: Some(IMAGE_DOCS),
        check: check_featured_alt,
    },
    Criterion {
        id: "images-gallery-alt",
        label: "Gallery alt text",
        priority: Priority::Medium,
        field: Some(FieldId::Gallery),
        recommendation: "Give every gallery image descriptive alt text.",
        doc_link: Some(IMAGE_DOCS),
        check: check_gallery_alt,
    },
];

fn check_featured(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    match fields.featured_image_url.as_deref() {
        Some(url) => Outcome::pass().current(url),
        None => Outcome::fail("No featured image"),
    }
}

fn check_featured_alt(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    if !fields.has_featured_image {
        Outcome::fail("No featured image to describe")
    } else if fields.featured_image_has_alt {
        Outcome::pass()
    } else {
        Outcome::fail("Featured image has no alt text")
    }
}

fn check_gallery_alt(fields: &ExtractedFields, _config: &ScoringConfig) -> Outcome {
    if fields.gallery_count == 0 {
        return Outcome::info("No gallery images");
    }
    let described = fields.gallery_count - fields.gallery_missing_alt;
    let outcome = if fields.gallery_missing_alt == 0 {
        Outcome::pass()
    } else {
        Outcome::warn(format!(
            "{} of {} gallery images have no alt text",
            fields.gallery_missing_alt, fields.gallery_count
        ))
    };
    outcome
        .current(format!("{}/{} described", described, fields.gallery_count))
        .target(format!("{}/{} described", fields.gallery_count, fields.gallery_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract;
    use crate::models::{ContentRecord, ImageRef};
    use crate::types::CheckStatus;

    fn image(url: &str, alt: Option<&str>) -> ImageRef {
        ImageRef {
            url: Some(url.into()),
            alt: alt.map(str::to_string),
            ..Default::default()
        }
    }

    fn statuses(record: &ContentRecord) -> Vec<CheckStatus> {
        let config = ScoringConfig::default();
        ImagesScorer
            .score(&extract(record, None, &config), &config)
            .items
            .iter()
            .map(|i| i.status)
            .collect()
    }

    #[test]
    fn test_no_images() {
        assert_eq!(
            statuses(&ContentRecord::default()),
            vec![CheckStatus::Fail, CheckStatus::Fail, CheckStatus::Info]
        );
    }

    #[test]
    fn test_featured_without_alt_and_partial_gallery() {
        let record = ContentRecord {
            featured_image: Some(image("https://cdn.example.com/a.jpg", None)),
            gallery: vec![
                image("https://cdn.example.com/b.jpg", Some("B")),
                image("https://cdn.example.com/c.jpg", Some("  ")),
            ],
            ..Default::default()
        };
        assert_eq!(
            statuses(&record),
            vec![CheckStatus::Pass, CheckStatus::Fail, CheckStatus::Warning]
        );
    }

    #[test]
    fn test_fully_described_images_pass() {
        let record = ContentRecord {
            featured_image: Some(image("https://cdn.example.com/a.jpg", Some("Hero"))),
            gallery: vec![image("https://cdn.example.com/b.jpg", Some("B"))],
            ..Default::default()
        };
        assert_eq!(statuses(&record), vec![CheckStatus::Pass; 3]);
    }
}
