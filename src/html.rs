//! # HTML Builder
//!
//! A closure-based builder for a tiny element tree:
//!
//! ```
//! use collection_patterns::html::html;
//!
//! let page = html(|root| {
//!     root.head(|head| {
//!         head.title("My Page");
//!     });
//!     root.body(|body| {
//!         body.h1("Welcome").p("This is a paragraph");
//!     });
//! });
//! assert_eq!(
//!     page.to_string(),
//!     "<html><head><title>My Page</title></head>\
//!      <body><h1>Welcome</h1><p>This is a paragraph</p></body></html>"
//! );
//! ```
//!
//! Text content is escaped on render; element names are written as given.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    content: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_content(name, "")
    }

    pub fn with_content(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Append `child` and hand back a mutable reference to it.
    pub fn append(&mut self, child: Element) -> &mut Element {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// Append a new element named `name`, filled in by `init`.
    pub fn element(&mut self, name: &str, init: impl FnOnce(&mut Element)) -> &mut Self {
        init(self.append(Element::new(name)));
        self
    }

    /// Append a leaf element holding `content`.
    pub fn text(&mut self, name: &str, content: impl Into<String>) -> &mut Self {
        self.append(Element::with_content(name, content));
        self
    }

    pub fn head(&mut self, init: impl FnOnce(&mut Element)) -> &mut Self {
        self.element("head", init)
    }

    pub fn body(&mut self, init: impl FnOnce(&mut Element)) -> &mut Self {
        self.element("body", init)
    }

    pub fn title(&mut self, content: impl Into<String>) -> &mut Self {
        self.text("title", content)
    }

    pub fn h1(&mut self, content: impl Into<String>) -> &mut Self {
        self.text("h1", content)
    }

    pub fn p(&mut self, content: impl Into<String>) -> &mut Self {
        self.text("p", content)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>{}", self.name, html_escape::encode_text(&self.content))?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.name)
    }
}

/// Build an `<html>` root.
pub fn html(init: impl FnOnce(&mut Element)) -> Element {
    let mut root = Element::new("html");
    init(&mut root);
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nesting_order() {
        let page = html(|root| {
            root.body(|body| {
                body.p("one").p("two");
            });
        });
        assert_eq!(page.children().len(), 1);
        assert_eq!(page.children()[0].name(), "body");
        assert_eq!(page.children()[0].children().len(), 2);
        assert_eq!(page.to_string(), "<html><body><p>one</p><p>two</p></body></html>");
    }

    #[test]
    fn test_empty_root() {
        assert_eq!(html(|_| {}).to_string(), "<html></html>");
    }

    #[test]
    fn test_content_is_escaped() {
        let page = html(|root| {
            root.p("1 < 2 & 3 > 2");
        });
        assert_eq!(page.to_string(), "<html><p>1 &lt; 2 &amp; 3 &gt; 2</p></html>");
    }

    #[test]
    fn test_custom_element() {
        let page = html(|root| {
            root.element("div", |div| {
                div.text("span", "hi");
            });
        });
        assert_eq!(page.to_string(), "<html><div><span>hi</span></div></html>");
    }
}
