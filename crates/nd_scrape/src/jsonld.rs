use scraper::{Html, Selector};
use serde_json::Value;

/// Author names from the document's JSON-LD metadata blocks, in document
/// order.
pub fn extract_authors(document: &Html) -> Vec<String> {
    let mut authors = Vec::new();
    for node in ld_nodes(document) {
        collect_authors(&node, &mut authors);
    }
    authors
}

/// The first `datePublished` value found in JSON-LD metadata.
pub fn extract_published_at(document: &Html) -> Option<String> {
    for node in ld_nodes(document) {
        let date = node
            .get("datePublished")
            .and_then(|d| d.as_str())
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if date.is_some() {
            return date;
        }
    }
    None
}

fn ld_nodes(document: &Html) -> Vec<Value> {
    let mut nodes = Vec::new();
    if let Ok(selector) = Selector::parse("script[type='application/ld+json']") {
        for script in document.select(&selector) {
            let text = script.text().collect::<String>();
            if let Ok(json) = serde_json::from_str::<Value>(text.trim()) {
                flatten(json, &mut nodes);
            }
        }
    }
    nodes
}

// JSON-LD wraps article nodes in top-level arrays or @graph containers.
fn flatten(json: Value, nodes: &mut Vec<Value>) {
    match json {
        Value::Array(items) => {
            for item in items {
                flatten(item, nodes);
            }
        }
        Value::Object(ref obj) => {
            if let Some(graph) = obj.get("@graph").cloned() {
                flatten(graph, nodes);
            }
            nodes.push(json);
        }
        _ => {}
    }
}

fn collect_authors(node: &Value, authors: &mut Vec<String>) {
    match node.get("author") {
        Some(Value::Array(arr)) => {
            for author in arr {
                push_author(author, authors);
            }
        }
        Some(author) => push_author(author, authors),
        None => {}
    }
}

fn push_author(author: &Value, authors: &mut Vec<String>) {
    let name = match author {
        Value::Object(obj) => obj.get("name").and_then(|n| n.as_str()),
        Value::String(s) => Some(s.as_str()),
        _ => None,
    };

    if let Some(name) = name {
        let name = name.trim();
        if !name.is_empty() {
            authors.push(name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(ld: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><head><script type="application/ld+json">{}</script></head></html>"#,
            ld
        ))
    }

    #[test]
    fn test_author_array() {
        let doc = document(r#"{"author": [{"name": "Jane Reporter"}, {"name": "John Byline"}]}"#);
        assert_eq!(extract_authors(&doc), vec!["Jane Reporter", "John Byline"]);
    }

    #[test]
    fn test_author_object() {
        let doc = document(r#"{"author": {"name": "Jane Reporter"}}"#);
        assert_eq!(extract_authors(&doc), vec!["Jane Reporter"]);
    }

    #[test]
    fn test_author_string() {
        let doc = document(r#"{"author": " Jane Reporter "}"#);
        assert_eq!(extract_authors(&doc), vec!["Jane Reporter"]);
    }

    #[test]
    fn test_graph_container() {
        let doc = document(
            r#"{"@graph": [{"@type": "NewsArticle", "author": {"name": "Jane Reporter"}, "datePublished": "2024-04-02T09:30:00Z"}]}"#,
        );
        assert_eq!(extract_authors(&doc), vec!["Jane Reporter"]);
        assert_eq!(
            extract_published_at(&doc).as_deref(),
            Some("2024-04-02T09:30:00Z")
        );
    }

    #[test]
    fn test_no_metadata() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert!(extract_authors(&doc).is_empty());
        assert!(extract_published_at(&doc).is_none());
    }
}
