// ABOUTME: Text and attribute helpers over parsed HTML documents.
// ABOUTME: Mirrors "::text" style selection: first/all descendant text nodes, direct text, and attributes.

use scraper::{ElementRef, Html, Node, Selector};

/// Every descendant text node of every element matching `selector`, in
/// document order. Whitespace-only nodes are kept.
pub fn text_nodes(doc: &Html, selector: &Selector) -> Vec<String> {
    doc.select(selector)
        .flat_map(|el| el.text())
        .map(str::to_string)
        .collect()
}

/// The first descendant text node with visible content.
pub fn first_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .flat_map(|el| el.text())
        .find(|t| !t.trim().is_empty())
        .map(str::to_string)
}

/// The first direct-child text node with visible content, skipping text
/// nested in child elements.
pub fn first_own_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .flat_map(own_text_nodes)
        .find(|t| !t.trim().is_empty())
        .map(str::to_string)
}

/// The trimmed value of `attr` on the first matching element that has it.
pub fn first_attr(doc: &Html, selector: &Selector, attr: &str) -> Option<String> {
    doc.select(selector)
        .filter_map(|el| el.value().attr(attr))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

fn own_text_nodes<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    el.children().filter_map(|child| match child.value() {
        Node::Text(text) => Some(&**text),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <div class="desc"><p>Oil on <b>canvas</b></p>
        <p>  </p><p>30 x 40 cm</p></div>
        <span id="price">GBP 1,000 <em>incl. fees</em></span>
        <img id="hero" src=" /a.jpg ">
    "#;

    fn sel(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    #[test]
    fn test_text_nodes_in_document_order() {
        let doc = Html::parse_document(SAMPLE);
        let nodes = text_nodes(&doc, &sel(".desc"));
        let visible: Vec<&str> = nodes
            .iter()
            .map(|s| s.as_str())
            .filter(|s| !s.trim().is_empty())
            .collect();
        assert_eq!(visible, vec!["Oil on ", "canvas", "30 x 40 cm"]);
    }

    #[test]
    fn test_first_text_skips_blank_nodes() {
        let doc = Html::parse_document(SAMPLE);
        assert_eq!(first_text(&doc, &sel(".desc")).as_deref(), Some("Oil on "));
        assert_eq!(first_text(&doc, &sel(".missing")), None);
    }

    #[test]
    fn test_own_text_ignores_children() {
        let doc = Html::parse_document(SAMPLE);
        assert_eq!(
            first_own_text(&doc, &sel("#price")).as_deref(),
            Some("GBP 1,000 ")
        );
    }

    #[test]
    fn test_first_attr_trims() {
        let doc = Html::parse_document(SAMPLE);
        assert_eq!(first_attr(&doc, &sel("#hero"), "src").as_deref(), Some("/a.jpg"));
        assert_eq!(first_attr(&doc, &sel("#hero"), "alt"), None);
    }
}
