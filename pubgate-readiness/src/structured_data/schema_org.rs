//! Offline schema.org shape rules
//!
//! The default `SchemaValidator`. Checks the graph envelope (`@context`),
//! every node's `@type`, required and recommended properties for the node
//! types an article graph contains, duplicate `@id`s and `@id` references
//! that point at no node.

use super::graph::{self, has_value, node_types, reference_id};
use super::report::{SchemaCheck, ValidationIssue};
use super::SchemaValidator;
use crate::error::ValidationError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;

struct TypeRules {
    types: &'static [&'static str],
    required: &'static [&'static str],
    recommended: &'static [(&'static str, &'static str)],
}

const TYPE_RULES: &[TypeRules] = &[
    TypeRules {
        types: graph::ARTICLE_TYPES,
        required: &["headline", "author"],
        recommended: &[
            ("image", "Add an image so the article is eligible for rich results"),
            ("datePublished", "Add datePublished in ISO 8601 format"),
            ("publisher", "Reference the publishing Organization"),
            ("dateModified", "Add dateModified when the article is updated"),
        ],
    },
    TypeRules {
        types: graph::PUBLISHER_TYPES,
        required: &["name"],
        recommended: &[
            ("logo", "Add a logo ImageObject to the publisher"),
            ("url", "Add the publisher's home page URL"),
        ],
    },
    TypeRules {
        types: &["Person"],
        required: &["name"],
        recommended: &[("url", "Link the author to a profile page")],
    },
    TypeRules {
        types: &["FAQPage"],
        required: &["mainEntity"],
        recommended: &[],
    },
    TypeRules {
        types: &["BreadcrumbList"],
        required: &["itemListElement"],
        recommended: &[],
    },
    TypeRules {
        types: &["WebPage"],
        required: &[],
        recommended: &[("name", "Name the WebPage"), ("url", "Give the WebPage its URL")],
    },
];

/// schema.org conformance without any network access
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaOrgRules;

impl SchemaOrgRules {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous rule evaluation; never fails
    pub fn evaluate(&self, graph: &Value) -> SchemaCheck {
        let mut check = SchemaCheck::default();

        check_context(graph, &mut check);

        let nodes = graph::nodes(graph);
        if nodes.is_empty() {
            check.errors.push(
                ValidationIssue::structure_error("Structured data contains no nodes")
                    .at("$")
                    .fix("Emit an object or an @graph array of schema.org nodes"),
            );
            return check;
        }

        let mut ids = HashSet::new();
        for (path, node) in &nodes {
            if let Some(id) = node.get("@id").and_then(Value::as_str) {
                if !ids.insert(id) {
                    check.errors.push(
                        ValidationIssue::structure_error(format!("Duplicate @id \"{}\"", id))
                            .at(path.clone())
                            .property("@id"),
                    );
                }
            }
        }

        for (path, node) in &nodes {
            check_node(path, node, &ids, &mut check);
        }
        check
    }
}

#[async_trait]
impl SchemaValidator for SchemaOrgRules {
    fn name(&self) -> &'static str {
        "schema.org rules"
    }

    async fn check(&self, graph: &Value) -> Result<SchemaCheck, ValidationError> {
        Ok(self.evaluate(graph))
    }
}

fn check_context(graph: &Value, check: &mut SchemaCheck) {
    let context = match graph {
        Value::Object(map) => map.get("@context"),
        Value::Array(items) => items.iter().find_map(|node| node.get("@context")),
        _ => return,
    };
    match context.and_then(Value::as_str) {
        Some(ctx) if ctx.contains("schema.org") => {}
        Some(ctx) => check.errors.push(
            ValidationIssue::structure_error(format!("Unsupported @context \"{}\"", ctx))
                .at("$")
                .property("@context")
                .fix("Use \"https://schema.org\""),
        ),
        None => check.errors.push(
            ValidationIssue::structure_error("Missing @context")
                .at("$")
                .property("@context")
                .fix("Add \"@context\": \"https://schema.org\""),
        ),
    }
}

fn check_node(path: &str, node: &Value, ids: &HashSet<&str>, check: &mut SchemaCheck) {
    let types = node_types(node);
    if types.is_empty() {
        check.errors.push(
            ValidationIssue::structure_error("Node has no @type")
                .at(path)
                .property("@type"),
        );
    }

    for rules in TYPE_RULES.iter().filter(|r| types.iter().any(|t| r.types.contains(t))) {
        for property in rules.required {
            if !has_value(node, property) {
                check.errors.push(
                    ValidationIssue::structure_error(format!(
                        "{} is missing required property \"{}\"",
                        types.join("/"),
                        property
                    ))
                    .at(path)
                    .property(*property),
                );
            }
        }
        for (property, recommendation) in rules.recommended {
            if !has_value(node, property) {
                check.warnings.push(
                    ValidationIssue::recommendation_warning(format!(
                        "{} is missing recommended property \"{}\"",
                        types.join("/"),
                        property
                    ))
                    .at(path)
                    .property(*property)
                    .recommend(*recommendation),
                );
            }
        }
    }

    if let Value::Object(map) = node {
        for (property, value) in map.iter().filter(|(k, _)| !k.starts_with('@')) {
            for target in references(value) {
                if !ids.contains(target) {
                    check.errors.push(
                        ValidationIssue::structure_error(format!(
                            "\"{}\" references unknown node \"{}\"",
                            property, target
                        ))
                        .at(path)
                        .property(property.clone())
                        .fix("Embed the node or add a node with this @id to the graph"),
                    );
                }
            }
        }
    }
}

/// `@id` targets of bare references in a property value
fn references(value: &Value) -> Vec<&str> {
    match value {
        Value::Array(items) => items.iter().filter_map(reference_id).collect(),
        other => reference_id(other).into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IssueKind;
    use serde_json::json;

    fn complete_graph() -> Value {
        json!({
            "@context": "https://schema.org",
            "@graph": [
                {
                    "@type": "Article",
                    "@id": "#article",
                    "headline": "Readable articles",
                    "image": "https://example.com/hero.jpg",
                    "datePublished": "2024-05-01",
                    "dateModified": "2024-05-02",
                    "author": { "@id": "#author" },
                    "publisher": { "@id": "#org" }
                },
                {
                    "@type": "Organization",
                    "@id": "#org",
                    "name": "Example",
                    "url": "https://example.com",
                    "logo": { "@type": "ImageObject", "url": "https://example.com/logo.png" }
                },
                { "@type": "Person", "@id": "#author", "name": "Ada", "url": "https://example.com/ada" }
            ]
        })
    }

    #[test]
    fn test_complete_graph_is_clean() {
        let check = SchemaOrgRules.evaluate(&complete_graph());
        assert!(check.errors.is_empty(), "{:?}", check.errors);
        assert!(check.warnings.is_empty(), "{:?}", check.warnings);
    }

    #[test]
    fn test_missing_required_and_dangling_reference() {
        let graph = json!({
            "@context": "https://schema.org",
            "@graph": [
                { "@type": "BlogPosting", "author": { "@id": "#nobody" } },
                { "name": "untyped" }
            ]
        });
        let check = SchemaOrgRules.evaluate(&graph);
        let messages: Vec<&str> = check.errors.iter().map(|e| e.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("\"headline\"")));
        assert!(messages.iter().any(|m| m.contains("unknown node \"#nobody\"")));
        assert!(messages.iter().any(|m| m.contains("no @type")));
        assert!(check.errors.iter().all(|e| e.kind == IssueKind::SchemaStructureError));
        assert_eq!(check.errors[0].path.as_deref(), Some("@graph[0]"));
    }

    #[test]
    fn test_recommendations_are_warnings() {
        let graph = json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": "Example"
        });
        let check = SchemaOrgRules.evaluate(&graph);
        assert!(check.errors.is_empty());
        assert_eq!(check.warnings.len(), 2);
        assert!(check.warnings.iter().all(|w| w.recommendation.is_some()));
    }

    #[test]
    fn test_missing_context_and_empty_graph() {
        let check = SchemaOrgRules.evaluate(&json!({ "@graph": [] }));
        assert_eq!(check.errors.len(), 2);

        let check = SchemaOrgRules.evaluate(&json!("not a graph"));
        assert_eq!(check.errors.len(), 1);
    }

    #[test]
    fn test_duplicate_ids() {
        let graph = json!({
            "@context": "https://schema.org",
            "@graph": [
                { "@type": "Person", "@id": "#a", "name": "A" , "url": "https://a" },
                { "@type": "Person", "@id": "#a", "name": "B" , "url": "https://b" }
            ]
        });
        let check = SchemaOrgRules.evaluate(&graph);
        assert_eq!(check.errors.len(), 1);
        assert!(check.errors[0].message.contains("Duplicate"));
    }
}
