// src/core/page.rs
// Best-effort DOM queries. A bad selector or a missing node is `None`, never an error.

use scraper::{ElementRef, Html, Selector};
use super::sanitize::normalize_ws;

pub struct Page {
    doc: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self { doc: Html::parse_document(html) }
    }

    fn select<'a>(&'a self, css: &str) -> Vec<ElementRef<'a>> {
        match Selector::parse(css) {
            Ok(sel) => self.doc.select(&sel).collect(),
            Err(_) => {
                logd!("Page: invalid selector {css:?}");
                Vec::new()
            }
        }
    }

    /// Visible text of the first match.
    pub fn text(&self, css: &str) -> Option<String> {
        self.select(css).first().map(inner_text).filter(|t| !t.is_empty())
    }

    /// Attribute of the first match.
    pub fn attr(&self, css: &str, name: &str) -> Option<String> {
        self.select(css).first().and_then(|el| attr_of(el, name))
    }

    pub fn all_text(&self, css: &str) -> Vec<String> {
        self.select(css).iter().map(inner_text).collect()
    }

    /// One entry per match, `None` where the attribute is absent.
    pub fn all_attr(&self, css: &str, name: &str) -> Vec<Option<String>> {
        self.select(css).iter().map(|el| attr_of(el, name)).collect()
    }
}

fn inner_text(el: &ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Attribute lookup that also answers prefixed names (`xlink:href`):
/// html5ever files those under their namespace with the bare local name.
fn attr_of(el: &ElementRef<'_>, name: &str) -> Option<String> {
    let local = name.rsplit(':').next().unwrap_or(name);
    el.value()
        .attr(name)
        .or_else(|| el.value().attrs().find(|(k, _)| *k == local).map(|(_, v)| v))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <html><body>
          <h1>  Ann
             Lee </h1>
          <svg><g></g><g><image xlink:href="https://cdn/p.jpg"></image></g></svg>
          <ul><li data-x="1">a</li><li>b</li><li data-x="3">c</li></ul>
        </body></html>
    "#;

    #[test]
    fn text_is_whitespace_normalized() {
        let p = Page::parse(DOC);
        assert_eq!(p.text("h1").as_deref(), Some("Ann Lee"));
        assert_eq!(p.text("h2"), None);
    }

    #[test]
    fn prefixed_svg_attribute_resolves() {
        let p = Page::parse(DOC);
        assert_eq!(p.attr("svg image", "xlink:href").as_deref(), Some("https://cdn/p.jpg"));
    }

    #[test]
    fn all_attr_keeps_positions() {
        let p = Page::parse(DOC);
        assert_eq!(
            p.all_attr("li", "data-x"),
            vec![Some(s!("1")), None, Some(s!("3"))]
        );
        assert_eq!(p.all_text("li"), vec!["a", "b", "c"]);
    }

    #[test]
    fn invalid_selector_is_a_miss() {
        let p = Page::parse(DOC);
        assert_eq!(p.text("li[["), None);
        assert!(p.all_text("::nope(").is_empty());
    }
}
