use nd_core::Enrichment;
use scraper::{Html, Selector};

use crate::jsonld;

/// Paragraph containers tried in order; the first selector with any
/// non-empty text wins.
const BODY_SELECTORS: &[&str] = &["article p", "main p", "p"];

/// Pull the enrichment fields out of a fetched page. Pure; all network work
/// happens before this is called.
pub fn parse_page(html: &str) -> Enrichment {
    let document = Html::parse_document(html);

    let full_content = extract_body(&document);
    let author = jsonld::extract_authors(&document)
        .into_iter()
        .next()
        .or_else(|| extract_meta_author(&document));
    let published_at =
        jsonld::extract_published_at(&document).or_else(|| extract_meta_published(&document));

    Enrichment {
        full_content,
        author,
        published_at,
    }
}

fn extract_body(document: &Html) -> Option<String> {
    for raw in BODY_SELECTORS {
        if let Ok(selector) = Selector::parse(raw) {
            let paragraphs: Vec<String> = document
                .select(&selector)
                .map(|el| el.text().collect::<String>().trim().to_string())
                .filter(|text| !text.is_empty())
                .collect();

            if !paragraphs.is_empty() {
                return Some(paragraphs.join("\n\n"));
            }
        }
    }
    None
}

fn extract_meta_author(document: &Html) -> Option<String> {
    let selector = Selector::parse("meta[name='author']").ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|author| author.trim().to_string())
        .filter(|author| !author.is_empty())
}

fn extract_meta_published(document: &Html) -> Option<String> {
    if let Ok(selector) = Selector::parse("meta[property='article:published_time']") {
        if let Some(content) = document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
        {
            let content = content.trim();
            if !content.is_empty() {
                return Some(content.to_string());
            }
        }
    }

    let selector = Selector::parse("time[datetime]").ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("datetime"))
        .map(|datetime| datetime.trim().to_string())
        .filter(|datetime| !datetime.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_with_jsonld() {
        let html = r#"
            <html><head>
            <script type="application/ld+json">
            {
                "@type": "NewsArticle",
                "author": [{"name": "Jane Reporter"}],
                "datePublished": "2024-04-02T09:30:00Z"
            }
            </script>
            </head><body>
            <article>
                <p>First paragraph.</p>
                <p>Second paragraph.</p>
            </article>
            </body></html>
        "#;

        let enrichment = parse_page(html);
        assert_eq!(
            enrichment.full_content.as_deref(),
            Some("First paragraph.\n\nSecond paragraph.")
        );
        assert_eq!(enrichment.author.as_deref(), Some("Jane Reporter"));
        assert_eq!(
            enrichment.published_at.as_deref(),
            Some("2024-04-02T09:30:00Z")
        );
    }

    #[test]
    fn test_parse_page_meta_fallbacks() {
        let html = r#"
            <html><head>
            <meta name="author" content="John Byline">
            <meta property="article:published_time" content="2024-04-02T09:30:00+00:00">
            </head><body>
            <p>Body text outside any article element.</p>
            </body></html>
        "#;

        let enrichment = parse_page(html);
        assert_eq!(
            enrichment.full_content.as_deref(),
            Some("Body text outside any article element.")
        );
        assert_eq!(enrichment.author.as_deref(), Some("John Byline"));
        assert_eq!(
            enrichment.published_at.as_deref(),
            Some("2024-04-02T09:30:00+00:00")
        );
    }

    #[test]
    fn test_parse_page_time_element_fallback() {
        let html = r#"
            <html><body>
            <time datetime="2024-04-02">April 2</time>
            <p>Text.</p>
            </body></html>
        "#;

        let enrichment = parse_page(html);
        assert_eq!(enrichment.published_at.as_deref(), Some("2024-04-02"));
    }

    #[test]
    fn test_parse_page_empty_document() {
        let enrichment = parse_page("<html><body><div>no paragraphs</div></body></html>");
        assert!(enrichment.full_content.is_none());
        assert!(enrichment.author.is_none());
        assert!(enrichment.published_at.is_none());
    }

    #[test]
    fn test_article_paragraphs_win_over_page_paragraphs() {
        let html = r#"
            <html><body>
            <p>Navigation cruft.</p>
            <article><p>The story itself.</p></article>
            </body></html>
        "#;

        let enrichment = parse_page(html);
        assert_eq!(enrichment.full_content.as_deref(), Some("The story itself."));
    }
}
