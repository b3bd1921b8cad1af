//! Paragraph extraction from article HTML

use scraper::{Html, Selector};

/// Text of every `<p>` element, in document order
///
/// Markup is stripped, including nested inline elements, and the text nodes
/// are concatenated as rendered. Broken markup is parsed leniently; a page
/// with no paragraphs yields an empty list.
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let Ok(paragraph) = Selector::parse("p") else {
        return Vec::new();
    };

    Html::parse_document(html)
        .select(&paragraph)
        .map(|p| p.text().collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_in_document_order() {
        let html = r#"
            <html><body>
              <div class="mw-parser-output">
                <p>First.</p>
                <table><tr><td><p>Inside a table.</p></td></tr></table>
                <p>Third.</p>
              </div>
            </body></html>
        "#;

        let paragraphs = extract_paragraphs(html);
        assert_eq!(paragraphs, vec!["First.", "Inside a table.", "Third."]);
    }

    #[test]
    fn test_nested_inline_markup_is_flattened() {
        let html = r#"<p><b>Charles Michel</b> (born <span>21 December 1975</span>) is a
            <a href="/wiki/Belgium">Belgian</a> politician.<sup class="reference"><a>[1]</a></sup></p>"#;

        let paragraphs = extract_paragraphs(html);
        assert_eq!(paragraphs.len(), 1);
        assert!(paragraphs[0].starts_with("Charles Michel (born 21 December 1975) is a"));
        assert!(paragraphs[0].ends_with("Belgian politician.[1]"));
    }

    #[test]
    fn test_whitespace_is_kept_as_rendered() {
        let paragraphs = extract_paragraphs("<p>\n  spaced\tout  \n</p>");
        assert_eq!(paragraphs, vec!["\n  spaced\tout  \n"]);
    }

    #[test]
    fn test_no_paragraphs() {
        assert!(extract_paragraphs("<div>No paragraphs here</div>").is_empty());
        assert!(extract_paragraphs("").is_empty());
    }

    #[test]
    fn test_unclosed_markup_is_tolerated() {
        let paragraphs = extract_paragraphs("<p>one<p>two<div>");
        assert_eq!(paragraphs, vec!["one", "two"]);
    }
}
