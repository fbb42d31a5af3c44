//! JSON-LD graph navigation
//!
//! Accepts the three shapes serializers emit: a root object with an `@graph`
//! array, a bare array of nodes, or a single node object.

use serde_json::Value;

/// Node types counted as the primary article
pub const ARTICLE_TYPES: &[&str] = &["Article", "BlogPosting", "NewsArticle", "TechArticle"];
/// Node types accepted as a publisher
pub const PUBLISHER_TYPES: &[&str] = &["Organization", "NewsMediaOrganization", "Corporation"];

/// Top-level nodes paired with their JSON path
pub fn nodes(graph: &Value) -> Vec<(String, &Value)> {
    match graph {
        Value::Object(map) => match map.get("@graph") {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_object())
                .map(|(i, v)| (format!("@graph[{}]", i), v))
                .collect(),
            _ => vec![("$".to_string(), graph)],
        },
        Value::Array(items) => items
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_object())
            .map(|(i, v)| (format!("[{}]", i), v))
            .collect(),
        _ => Vec::new(),
    }
}

/// Values of `@type` (string or array of strings)
pub fn node_types(node: &Value) -> Vec<&str> {
    match node.get("@type") {
        Some(Value::String(t)) => vec![t.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

pub fn has_any_type(node: &Value, types: &[&str]) -> bool {
    node_types(node).iter().any(|t| types.contains(t))
}

/// First top-level node with one of `types`
pub fn find_by_type<'a>(graph: &'a Value, types: &[&str]) -> Option<&'a Value> {
    nodes(graph)
        .into_iter()
        .map(|(_, node)| node)
        .find(|node| has_any_type(node, types))
}

/// A bare `{"@id": ...}` object pointing at another node
pub fn reference_id(value: &Value) -> Option<&str> {
    let map = value.as_object()?;
    if map.len() == 1 {
        map.get("@id").and_then(Value::as_str)
    } else {
        None
    }
}

/// Follow a property value to the node it denotes: an embedded object is
/// returned as-is, a reference is looked up by `@id`, the first element of
/// an array is used
pub fn resolve<'a>(graph: &'a Value, value: &'a Value) -> Option<&'a Value> {
    match value {
        Value::Array(items) => items.first().and_then(|first| resolve(graph, first)),
        Value::Object(_) => match reference_id(value) {
            Some(id) => nodes(graph)
                .into_iter()
                .map(|(_, node)| node)
                .find(|node| node.get("@id").and_then(Value::as_str) == Some(id)),
            None => Some(value),
        },
        _ => None,
    }
}

/// Non-blank string property
pub fn text<'a>(node: &'a Value, property: &str) -> Option<&'a str> {
    node.get(property)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Property holds something usable: non-blank string, non-empty array, or object
pub fn has_value(node: &Value, property: &str) -> bool {
    match node.get(property) {
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        Some(Value::Number(_)) | Some(Value::Bool(_)) => true,
        _ => false,
    }
}

/// Image-ish property has a usable URL (string, ImageObject with url or
/// contentUrl, or array of either)
pub fn image_url<'a>(graph: &'a Value, value: &'a Value) -> Option<&'a str> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim()),
        Value::Array(items) => items.iter().find_map(|item| image_url(graph, item)),
        Value::Object(_) => {
            let node = resolve(graph, value)?;
            text(node, "url").or_else(|| text(node, "contentUrl"))
        }
        _ => None,
    }
}

/// What the scorers need to know about a graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphSummary {
    pub has_article: bool,
    pub has_publisher: bool,
    pub publisher_has_logo: bool,
    pub has_author_person: bool,
    pub author_has_bio: bool,
    pub has_hero_image: bool,
    pub headline: Option<String>,
}

/// Summarize a graph. The publisher/author are followed from the article
/// node; free-standing Organization/Person nodes count when the article does
/// not name one.
pub fn summarize(graph: &Value) -> GraphSummary {
    let article = find_by_type(graph, ARTICLE_TYPES);

    let publisher = article
        .and_then(|a| a.get("publisher"))
        .and_then(|p| resolve(graph, p))
        .or_else(|| find_by_type(graph, PUBLISHER_TYPES));

    let author = article
        .and_then(|a| a.get("author"))
        .and_then(|p| resolve(graph, p))
        .filter(|node| has_any_type(node, &["Person"]))
        .or_else(|| find_by_type(graph, &["Person"]));

    GraphSummary {
        has_article: article.is_some(),
        has_publisher: publisher.is_some(),
        publisher_has_logo: publisher
            .and_then(|p| p.get("logo"))
            .and_then(|logo| image_url(graph, logo))
            .is_some(),
        has_author_person: author.is_some(),
        author_has_bio: author.and_then(|a| text(a, "description")).is_some(),
        has_hero_image: article
            .and_then(|a| a.get("image"))
            .and_then(|img| image_url(graph, img))
            .is_some(),
        headline: article.and_then(|a| text(a, "headline")).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_graph() -> Value {
        json!({
            "@context": "https://schema.org",
            "@graph": [
                {
                    "@type": "BlogPosting",
                    "@id": "https://example.com/a#article",
                    "headline": "How we ship readable articles",
                    "image": { "@type": "ImageObject", "url": "https://example.com/hero.jpg" },
                    "author": { "@id": "https://example.com/#ada" },
                    "publisher": { "@id": "https://example.com/#org" }
                },
                {
                    "@type": "Organization",
                    "@id": "https://example.com/#org",
                    "name": "Example",
                    "logo": "https://example.com/logo.png"
                },
                {
                    "@type": ["Person"],
                    "@id": "https://example.com/#ada",
                    "name": "Ada",
                    "description": "Editor"
                }
            ]
        })
    }

    #[test]
    fn test_nodes_handles_all_shapes() {
        assert_eq!(nodes(&sample_graph()).len(), 3);
        assert_eq!(nodes(&json!([{ "@type": "Article" }, 3])).len(), 1);
        assert_eq!(nodes(&json!({ "@type": "Article" })).len(), 1);
        assert!(nodes(&json!("nope")).is_empty());
    }

    #[test]
    fn test_resolve_follows_references() {
        let graph = sample_graph();
        let reference = json!({ "@id": "https://example.com/#org" });
        let org = resolve(&graph, &reference).unwrap();
        assert_eq!(text(org, "name"), Some("Example"));

        let dangling = json!({ "@id": "https://example.com/#missing" });
        assert!(resolve(&graph, &dangling).is_none());
    }

    #[test]
    fn test_summarize_complete_graph() {
        let summary = summarize(&sample_graph());
        assert!(summary.has_article);
        assert!(summary.has_publisher);
        assert!(summary.publisher_has_logo);
        assert!(summary.has_author_person);
        assert!(summary.author_has_bio);
        assert!(summary.has_hero_image);
        assert_eq!(summary.headline.as_deref(), Some("How we ship readable articles"));
    }

    #[test]
    fn test_summarize_empty_graph() {
        assert_eq!(summarize(&json!({})), GraphSummary::default());
    }
}
