//! Off-page recommendations
//!
//! Advisory guidance for work that happens away from the page itself. These
//! are never scored; they are tailored by a few record facts (tags, citations,
//! social fields, FAQs) so the list stays relevant.

use crate::models::content_record::non_blank;
use crate::models::ContentRecord;
use crate::types::Priority;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OffPageCategory {
    LinkBuilding,
    SocialSignals,
    ContentDistribution,
    AuthorityBuilding,
}

impl OffPageCategory {
    pub const ALL: [OffPageCategory; 4] = [
        OffPageCategory::LinkBuilding,
        OffPageCategory::SocialSignals,
        OffPageCategory::ContentDistribution,
        OffPageCategory::AuthorityBuilding,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OffPageCategory::LinkBuilding => "Link building",
            OffPageCategory::SocialSignals => "Social signals",
            OffPageCategory::ContentDistribution => "Content distribution",
            OffPageCategory::AuthorityBuilding => "Authority building",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffPageRecommendation {
    pub id: String,
    pub category: OffPageCategory,
    pub title: String,
    pub priority: Priority,
    /// Ordered actionable steps
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffPageGroup {
    pub category: OffPageCategory,
    pub label: String,
    pub recommendations: Vec<OffPageRecommendation>,
}

fn rec(id: &str, category: OffPageCategory, title: &str, priority: Priority, steps: &[&str]) -> OffPageRecommendation {
    OffPageRecommendation {
        id: id.to_string(),
        category,
        title: title.to_string(),
        priority,
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

/// Recommendations for a record, grouped in category order and sorted by
/// priority within each group
pub fn off_page_recommendations(record: &ContentRecord) -> Vec<OffPageGroup> {
    use OffPageCategory::*;

    let has_tags = record.tags.iter().any(|t| !t.trim().is_empty());
    let has_citations = !record.citations.is_empty();
    let has_social = non_blank(record.og_title.as_deref()).is_some()
        || non_blank(record.twitter_title.as_deref()).is_some();
    let has_faqs = record.faqs.iter().any(|f| f.is_complete());
    let has_author = record.author.as_ref().is_some_and(|a| a.is_identified());

    let mut all = vec![
        rec(
            "offpage-internal-links",
            LinkBuilding,
            "Link to this article from related pages",
            Priority::High,
            &[
                "Find two or three existing articles on the same topic",
                "Add a contextual link from each to this article",
                "Use descriptive anchor text rather than \"click here\"",
            ],
        ),
        rec(
            "offpage-outreach",
            LinkBuilding,
            "Reach out to sites you reference",
            if has_citations { Priority::Medium } else { Priority::Low },
            &[
                "List the sources cited in the article",
                "Let each source know they were referenced",
                "Offer the article as a resource for their readers",
            ],
        ),
        rec(
            "offpage-social-share",
            SocialSignals,
            "Share on the client's social channels",
            if has_social { Priority::Medium } else { Priority::High },
            &[
                "Prepare a post per network using the share title and image",
                "Schedule posts for each network's peak hours",
                "Reply to comments during the first day",
            ],
        ),
        rec(
            "offpage-newsletter",
            ContentDistribution,
            "Feature the article in the next newsletter",
            Priority::Medium,
            &[
                "Write a two-sentence teaser",
                "Link with campaign tracking parameters",
            ],
        ),
        rec(
            "offpage-author-profile",
            AuthorityBuilding,
            "Strengthen the author's public profile",
            if has_author { Priority::Low } else { Priority::Medium },
            &[
                "Keep the author bio and headshot current",
                "Link the author page to their professional profiles",
            ],
        ),
    ];

    if has_tags {
        all.push(rec(
            "offpage-communities",
            ContentDistribution,
            "Post in communities that follow these topics",
            Priority::Low,
            &[
                "Find forums or groups matching the article tags",
                "Read each community's self-promotion rules",
                "Contribute a summary rather than a bare link",
            ],
        ));
    }
    if has_faqs {
        all.push(rec(
            "offpage-answer-questions",
            AuthorityBuilding,
            "Answer the FAQ questions where people ask them",
            Priority::Low,
            &[
                "Search Q&A sites for the questions in the FAQ",
                "Answer in full and cite the article where it adds detail",
            ],
        ));
    }

    OffPageCategory::ALL
        .iter()
        .map(|category| {
            let mut recommendations: Vec<OffPageRecommendation> =
                all.iter().filter(|r| r.category == *category).cloned().collect();
            recommendations.sort_by_key(|r| r.priority);
            OffPageGroup {
                category: *category,
                label: category.label().to_string(),
                recommendations,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::models::FaqEntry;
    use crate::pipeline::score;

    #[test]
    fn test_all_four_categories_present() {
        let groups = off_page_recommendations(&ContentRecord::default());
        let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, OffPageCategory::ALL.to_vec());
        assert!(groups.iter().flat_map(|g| &g.recommendations).all(|r| !r.steps.is_empty()));
    }

    #[test]
    fn test_tailored_by_record() {
        let record = ContentRecord {
            tags: vec!["rust".into()],
            faqs: vec![FaqEntry {
                question: Some("Why?".into()),
                answer: Some("Because.".into()),
            }],
            ..Default::default()
        };
        let ids: Vec<String> = off_page_recommendations(&record)
            .into_iter()
            .flat_map(|g| g.recommendations)
            .map(|r| r.id)
            .collect();
        assert!(ids.contains(&"offpage-communities".to_string()));
        assert!(ids.contains(&"offpage-answer-questions".to_string()));
    }

    #[test]
    fn test_never_changes_the_score() {
        let record = ContentRecord {
            tags: vec!["rust".into()],
            ..Default::default()
        };
        let config = ScoringConfig::default();
        let before = score(&record, None, &config);
        let _ = off_page_recommendations(&record);
        assert_eq!(before, score(&record, None, &config));
    }
}
