//! End-to-end readiness properties: scoring, checklist, structured data,
//! full-page verdict and wizard completion run together on real records.

mod helpers;

use helpers::{chars, complete_record};
use pubgate_readiness::checklist::build_checklist;
use pubgate_readiness::config::{ScoringConfig, ValidatorConfig};
use pubgate_readiness::models::{AuthorRef, ClientRef};
use pubgate_readiness::snapshot::record_graph;
use pubgate_readiness::wizard::StepCompletion;
use pubgate_readiness::{
    score, validate_full_page, CategoryId, CheckStatus, ContentRecord, FieldErrors, FieldId, ReadinessEngine,
    ScoreBand, ScoreResult, StructuredDataValidator,
};

fn scored(record: &ContentRecord) -> ScoreResult {
    score(record, None, &ScoringConfig::default())
}

fn item<'a>(result: &'a ScoreResult, id: &str) -> &'a pubgate_readiness::ChecklistItem {
    result
        .items()
        .find(|i| i.id == id)
        .unwrap_or_else(|| panic!("no item {}", id))
}

fn sample_records() -> Vec<ContentRecord> {
    let complete = complete_record();
    vec![
        ContentRecord::default(),
        ContentRecord {
            title: Some("Only a title".into()),
            ..Default::default()
        },
        ContentRecord {
            body: complete.body.clone(),
            tags: complete.tags.clone(),
            ..Default::default()
        },
        ContentRecord {
            featured_image: None,
            twitter_card: Some("huge".into()),
            slug: Some("Not A Slug".into()),
            ..complete.clone()
        },
        complete,
    ]
}

#[test]
fn test_category_percentage_matches_passed_over_total() {
    for record in sample_records() {
        let result = scored(&record);
        assert_eq!(result.categories.len(), CategoryId::ALL.len());
        for category in &result.categories {
            assert!(category.percentage <= 100);
            assert_eq!(category.items.len(), category.total);
            let expected = if category.total == 0 {
                100
            } else {
                (category.passed as f64 / category.total as f64 * 100.0).round() as u8
            };
            assert_eq!(category.percentage, expected, "{:?}", category.category);
        }
    }
}

#[test]
fn test_complete_record_scores_full_marks() {
    let result = scored(&complete_record());
    assert_eq!(result.overall, 100, "{:#?}", build_checklist(&result));
    assert_eq!(result.band, ScoreBand::Good);
    assert!(build_checklist(&result).is_empty());
}

type Fill = fn(&mut ContentRecord, &ContentRecord);

fn fill_step(name: &'static str, fill: Fill) -> (&'static str, Fill) {
    (name, fill)
}

#[test]
fn test_filling_fields_never_lowers_overall() {
    let complete = complete_record();
    let steps = [
        fill_step("title", |r, c| r.title = c.title.clone()),
        fill_step("slug", |r, c| r.slug = c.slug.clone()),
        fill_step("body", |r, c| r.body = c.body.clone()),
        fill_step("excerpt", |r, c| r.excerpt = c.excerpt.clone()),
        fill_step("seo_title", |r, c| r.seo_title = c.seo_title.clone()),
        fill_step("seo_description", |r, c| r.seo_description = c.seo_description.clone()),
        fill_step("canonical_url", |r, c| r.canonical_url = c.canonical_url.clone()),
        fill_step("robots", |r, c| r.robots = c.robots.clone()),
        fill_step("featured_image", |r, c| r.featured_image = c.featured_image.clone()),
        fill_step("client", |r, c| r.client = c.client.clone()),
        fill_step("author", |r, c| r.author = c.author.clone()),
        fill_step("category", |r, c| r.category = c.category.clone()),
        fill_step("language", |r, c| r.language = c.language.clone()),
        fill_step("citations", |r, c| r.citations = c.citations.clone()),
        fill_step("faqs", |r, c| r.faqs = c.faqs.clone()),
        fill_step("semantic_keywords", |r, c| r.semantic_keywords = c.semantic_keywords.clone()),
        fill_step("og_title", |r, c| r.og_title = c.og_title.clone()),
        fill_step("og_image", |r, c| r.og_image = c.og_image.clone()),
        fill_step("twitter_card", |r, c| r.twitter_card = c.twitter_card.clone()),
        fill_step("sitemap_priority", |r, c| r.sitemap_priority = c.sitemap_priority),
    ];

    let mut record = ContentRecord::default();
    let mut previous = scored(&record).overall;
    for (name, fill) in &steps {
        fill(&mut record, &complete);
        let overall = scored(&record).overall;
        assert!(overall >= previous, "setting {} lowered overall {} -> {}", name, previous, overall);
        previous = overall;
    }
}

#[test]
fn test_empty_record_meta_tags_zero_with_failing_title() {
    let record = ContentRecord {
        title: Some(String::new()),
        excerpt: Some(String::new()),
        ..Default::default()
    };
    let result = scored(&record);
    let meta = result.category(CategoryId::MetaTags).unwrap();
    assert_eq!(meta.percentage, 0);
    assert_eq!(item(&result, "meta-title").status, CheckStatus::Fail);
    assert!(build_checklist(&result).items().any(|i| i.id == "meta-title"));
}

#[test]
fn test_description_inside_band_passes() {
    let record = ContentRecord {
        seo_description: Some(chars(150)),
        ..Default::default()
    };
    let result = scored(&record);
    assert_eq!(item(&result, "meta-description").status, CheckStatus::Pass);
    assert_eq!(item(&result, "meta-description-length").status, CheckStatus::Pass);
}

#[test]
fn test_title_length_bound_is_reported() {
    let long = scored(&ContentRecord {
        seo_title: Some(chars(70)),
        ..Default::default()
    });
    let title = item(&long, "meta-title-length");
    assert!(matches!(title.status, CheckStatus::Warning | CheckStatus::Fail));
    assert!(title.reason.as_deref().unwrap_or_default().contains("60"));

    let fits = scored(&ContentRecord {
        seo_title: Some(chars(55)),
        ..Default::default()
    });
    assert_eq!(item(&fits, "meta-title-length").status, CheckStatus::Pass);
}

#[tokio::test]
async fn test_missing_hero_and_logo_invalidate_structured_data() {
    let record = ContentRecord {
        featured_image: None,
        client: Some(ClientRef {
            name: Some("Example Media".into()),
            ..Default::default()
        }),
        ..complete_record()
    };
    let validator = StructuredDataValidator::from_config(ValidatorConfig {
        require_hero_image: true,
        require_publisher_logo: true,
        ..Default::default()
    });

    let report = validator.validate(&record_graph(&record)).await;
    assert!(!report.valid);
    assert!(report
        .error_messages()
        .any(|m| m.to_lowercase().contains("hero image") || m.to_lowercase().contains("logo")));
}

#[tokio::test]
async fn test_full_page_accounts_for_every_upstream_issue() {
    let validator = StructuredDataValidator::from_config(ValidatorConfig {
        require_author_bio: true,
        ..Default::default()
    });

    for record in sample_records() {
        let score = scored(&record);
        let report = validator.validate(&record_graph(&record)).await;
        let result = validate_full_page(&score, &report);

        let upstream = score.items().filter(|i| i.status.is_actionable()).count()
            + report.error_count()
            + report.warning_count();
        assert_eq!(result.issues.total(), upstream);
        assert_eq!(result.can_publish, result.issues.critical.is_empty());
    }
}

#[tokio::test]
async fn test_publish_gate_ignores_warnings_and_suggestions() {
    let engine = ReadinessEngine::default();

    let complete = engine.prepare_publish(&complete_record(), None).await;
    assert!(complete.can_publish, "{:#?}", complete.issues.critical);

    // Weak social fields are warnings at most; publishing stays open
    let weaker = ContentRecord {
        twitter_card: Some("huge".into()),
        sitemap_change_frequency: Some("fortnightly".into()),
        ..complete_record()
    };
    let result = engine.prepare_publish(&weaker, None).await;
    assert!(result.issues.critical.is_empty());
    assert!(!result.issues.warnings.is_empty() || !result.issues.suggestions.is_empty());
    assert!(result.can_publish);
    assert!(engine.publish(&weaker, None).await.is_ok());

    let blocked = engine.publish(&ContentRecord::default(), None).await;
    assert!(blocked.is_err());
}

#[test]
fn test_step_validation_is_pure_and_valid_means_complete() {
    let wizard = StepCompletion::default();
    let record = ContentRecord {
        title: Some("Title".into()),
        author: Some(AuthorRef {
            name: Some("Ada".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let mut errors = FieldErrors::new();
    errors.insert(FieldId::Body, "Body contains a broken link");

    for step in wizard.steps() {
        let first = wizard.validate(step.step, &record, &errors).unwrap();
        let second = wizard.validate(step.step, &record, &errors).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.is_valid,
            first.completed_required_fields == first.required_fields && !first.has_errors
        );
    }

    let content = wizard.validate(2, &record, &errors).unwrap();
    assert!(content.has_errors);
    assert!(!content.is_valid);
}

#[test]
fn test_complete_record_completes_every_required_field() {
    let wizard = StepCompletion::default();
    for validation in wizard.validate_all(&complete_record(), &FieldErrors::new()) {
        assert!(validation.is_valid, "step {} incomplete", validation.step);
    }
}

#[tokio::test]
async fn test_publish_score_matches_editor_score() {
    let engine = ReadinessEngine::default();
    for record in sample_records() {
        let editor = engine.score(&record, None);
        let publish = engine.prepare_publish(&record, None).await;
        assert_eq!(publish.seo.score, editor.overall, "{:?}", record.title);
        assert_eq!(publish.seo.band, editor.band);
    }
}
