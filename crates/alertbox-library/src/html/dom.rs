use std::fmt::{self, Debug, Display, Formatter};

use ecow::{EcoString, EcoVec};

use crate::diag::{bail, ConfigError, StrResult};

/// A child of an HTML element.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum HtmlNode {
    /// Plain text, escaped when encoded.
    Text(EcoString),
    /// Trusted markup, written out verbatim.
    Raw(EcoString),
    /// Another element.
    Element(HtmlElement),
}

impl HtmlNode {
    /// Create a plain text node.
    pub fn text(text: impl Into<EcoString>) -> Self {
        Self::Text(text.into())
    }

    /// Create a node of pre-escaped markup.
    pub fn raw(markup: impl Into<EcoString>) -> Self {
        Self::Raw(markup.into())
    }
}

impl From<HtmlElement> for HtmlNode {
    fn from(element: HtmlElement) -> Self {
        Self::Element(element)
    }
}

/// An HTML element.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct HtmlElement {
    /// The HTML tag.
    pub tag: HtmlTag,
    /// The element's attributes.
    pub attrs: HtmlAttrs,
    /// The element's children.
    pub children: Vec<HtmlNode>,
}

impl HtmlElement {
    /// Create a new, blank element without attributes or children.
    pub fn new(tag: impl Into<HtmlTag>) -> Self {
        Self {
            tag: tag.into(),
            attrs: HtmlAttrs::default(),
            children: vec![],
        }
    }

    /// Attach children to the element.
    ///
    /// Note: This overwrites potential previous children.
    pub fn with_children(mut self, children: Vec<HtmlNode>) -> Self {
        self.children = children;
        self
    }

    /// Add an attribute to the element.
    pub fn with_attr(
        mut self,
        key: impl Into<EcoString>,
        value: impl Into<EcoString>,
    ) -> Self {
        self.attrs.push(key, value);
        self
    }
}

/// The tag of an HTML element.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct HtmlTag(pub EcoString);

impl HtmlTag {
    /// Resolves the tag to a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a void tag whose element may not have children.
    pub fn is_void(&self) -> bool {
        matches!(
            self.as_str(),
            "area"
                | "base"
                | "br"
                | "col"
                | "embed"
                | "hr"
                | "img"
                | "input"
                | "link"
                | "meta"
                | "param"
                | "source"
                | "track"
                | "wbr"
        )
    }
}

impl Debug for HtmlTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for HtmlTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

impl<S> From<S> for HtmlTag
where
    S: Into<EcoString>,
{
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

/// Attributes of an HTML element, in the order they are written out.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct HtmlAttrs(pub EcoVec<(EcoString, EcoString)>);

impl HtmlAttrs {
    /// Append an attribute, even if one with the same name exists.
    pub fn push(&mut self, key: impl Into<EcoString>, value: impl Into<EcoString>) {
        self.0.push((key.into(), value.into()));
    }

    /// Set an attribute, replacing an existing one in place or appending it.
    pub fn set(&mut self, key: impl Into<EcoString>, value: impl Into<EcoString>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter().position(|(k, _)| *k == key) {
            Some(i) => self.0.make_mut()[i].1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// The value of the first attribute with the given name.
    pub fn get(&self, key: &str) -> Option<&EcoString> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate over the attributes in order.
    pub fn iter(&self) -> impl Iterator<Item = (&EcoString, &EcoString)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    /// The number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Checks that a string can be written out as an attribute name.
///
/// https://html.spec.whatwg.org/multipage/syntax.html#attributes-2
pub fn check_attr_name(name: &str) -> StrResult<()> {
    let valid = !name.is_empty()
        && name.chars().all(|c| {
            !c.is_ascii_whitespace()
                && !c.is_control()
                && !matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
        });
    if !valid {
        bail!(ConfigError::InvalidAttrName(name.into()));
    }
    Ok(())
}
