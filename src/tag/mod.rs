//! Head-fragment descriptors and serialization.
//!
//! A [`HeadTag`] is one childless element destined for the document
//! `<head>`: a tag name, ordered attributes, and a self-closing flag.
//! Serialization lives here too so the document stage (and tests) can
//! render a head block without knowing how the tags were produced.

use std::borrow::Cow;
use std::fmt::{self, Write};

// =============================================================================
// Attribute Escaping
// =============================================================================

/// Characters that require escaping inside a double-quoted attribute.
const ESCAPE_CHARS: [char; 4] = ['<', '>', '&', '"'];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        _ => None,
    }
}

/// Escape attribute values.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

// =============================================================================
// Head Tag
// =============================================================================

/// One head fragment: an element with ordered attributes and no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    name: String,
    attrs: Vec<(String, String)>,
    self_closing: bool,
}

impl HeadTag {
    /// Create an empty tag.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            self_closing: false,
        }
    }

    /// `<link rel=.. href=..>` shorthand.
    pub fn link(rel: &str, href: impl Into<String>, self_closing: bool) -> Self {
        let mut tag = Self::new("link");
        tag.self_closing = self_closing;
        tag.set_attr("rel", rel);
        tag.set_attr("href", href);
        tag
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Set an attribute, replacing any previous value in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value.into(),
            None => self.attrs.push((name, value.into())),
        }
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl fmt::Display for HeadTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"{}\"", escape_attr(value))?;
        }
        f.write_str(if self.self_closing { "/>" } else { ">" })
    }
}

/// Serialize a head block in document order.
pub fn render_head(tags: &[HeadTag]) -> String {
    let mut out = String::new();
    for tag in tags {
        let _ = write!(out, "{tag}");
    }
    out
}
