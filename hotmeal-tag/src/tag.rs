//! Named tags.
//!
//! A [`Tag`] is a name, raw content, and an owned [`Attributes`] store. Two
//! method families operate on it:
//!
//! - `with_*` methods take `&self` and return an independent copy
//! - verbs (`attr`, `class`, `prepend`, `append`) mutate in place and return
//!   `&mut Self` for chaining
//!
//! Content is never escaped: callers pass markup they already trust. Names and
//! attributes are escaped on output.

use std::fmt::{self, Write};

use crate::attributes::{AttrKey, AttrValue, Attributes};
use crate::format::{escape_into, format_attributes};
use crate::trace;

/// Tag names that render without content or end tag.
pub const SELF_CLOSING_TAGS: &[&str] = &[
    "area", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Check if a tag name is self-closing. The match is exact.
pub fn is_self_closing(name: &str) -> bool {
    SELF_CLOSING_TAGS.contains(&name)
}

/// A named markup element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    content: String,
    prepend: String,
    append: String,
    attributes: Attributes,
    level: Option<i64>,
    render_empty_tag: bool,
}

impl Tag {
    /// Create a tag with content and no attributes.
    pub fn new(name: impl Into<String>, content: impl fmt::Display) -> Self {
        Self::builder(name).content(content).build()
    }

    /// Create a tag without content.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::builder(name).build()
    }

    /// Start building a tag.
    pub fn builder(name: impl Into<String>) -> TagBuilder {
        TagBuilder::new(name)
    }

    /// The tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy with the given name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.name = name.into();
        new
    }

    /// The content including everything prepended and appended.
    pub fn content(&self) -> String {
        let mut out =
            String::with_capacity(self.prepend.len() + self.content.len() + self.append.len());
        out.push_str(&self.prepend);
        out.push_str(&self.content);
        out.push_str(&self.append);
        out
    }

    /// Returns a copy with the given content. Prepended and appended content is
    /// not carried over.
    pub fn with_content(&self, content: impl fmt::Display) -> Self {
        let mut new = self.clone();
        new.content = content.to_string();
        new.prepend.clear();
        new.append.clear();
        new
    }

    /// The depth hint, if any. Not interpreted by rendering.
    pub fn level(&self) -> Option<i64> {
        self.level
    }

    /// Returns a copy with the given depth hint.
    pub fn with_level(&self, level: i64) -> Self {
        let mut new = self.clone();
        new.level = Some(level);
        new
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Returns a copy that owns `attributes` instead of this tag's attributes.
    pub fn with_attributes(&self, attributes: Attributes) -> Self {
        Self {
            name: self.name.clone(),
            content: self.content.clone(),
            prepend: self.prepend.clone(),
            append: self.append.clone(),
            attributes,
            level: self.level,
            render_empty_tag: self.render_empty_tag,
        }
    }

    /// Returns a copy with one attribute set.
    pub fn with_attr(&self, name: impl Into<AttrKey>, value: impl Into<AttrValue>) -> Self {
        let mut new = self.clone();
        new.attributes.set(name, value);
        new
    }

    /// Whether the tag renders when its content is empty.
    pub fn renders_empty_tag(&self) -> bool {
        self.render_empty_tag
    }

    /// Set an attribute, overwriting any previous value.
    ///
    /// Pass `()` for a boolean attribute.
    pub fn attr(&mut self, name: impl Into<AttrKey>, value: impl Into<AttrValue>) -> &mut Self {
        self.attributes.set(name, value);
        self
    }

    /// Add a class. Repeated calls accumulate.
    pub fn class(&mut self, value: impl Into<AttrValue>) -> &mut Self {
        self.attributes.add("class", value);
        self
    }

    /// Prepend content. The most recent call ends up next to the content.
    pub fn prepend(&mut self, html: impl fmt::Display) -> &mut Self {
        let _ = write!(self.prepend, "{html}");
        self
    }

    /// Append content after anything appended before.
    pub fn append(&mut self, html: impl fmt::Display) -> &mut Self {
        let _ = write!(self.append, "{html}");
        self
    }

    pub fn is_self_closing(&self) -> bool {
        is_self_closing(&self.name)
    }

    /// The opening tag with its attributes.
    pub fn open(&self) -> String {
        let mut out = String::from("<");
        escape_into(&mut out, &self.name);
        out.push_str(&format_attributes(&self.attributes, true));
        out.push('>');
        out
    }

    /// The end tag.
    ///
    /// This is produced for self-closing names too; only [`render`](Self::render)
    /// leaves it out.
    pub fn close(&self) -> String {
        let mut out = String::from("</");
        escape_into(&mut out, &self.name);
        out.push('>');
        out
    }

    /// Render the whole tag.
    pub fn render(&self) -> String {
        let content = self.content();

        if !self.render_empty_tag && content.is_empty() {
            trace!(name = %self.name, "skipping empty tag");
            return String::new();
        }

        if self.is_self_closing() {
            return self.open();
        }

        let mut out = self.open();
        out.push_str(&content);
        out.push_str(&self.close());
        out
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Builder for [`Tag`].
///
/// ```
/// use hotmeal_tag::{Attributes, Tag};
///
/// let mut attrs = Attributes::new();
/// attrs.set("id", "intro");
///
/// let tag = Tag::builder("p")
///     .content("hello")
///     .attributes(attrs)
///     .level(1)
///     .build();
/// assert_eq!(tag.render(), r#"<p id="intro">hello</p>"#);
/// ```
#[derive(Debug, Clone)]
pub struct TagBuilder {
    name: String,
    content: String,
    attributes: Attributes,
    level: Option<i64>,
    render_empty_tag: bool,
}

impl TagBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: String::new(),
            attributes: Attributes::new(),
            level: None,
            render_empty_tag: true,
        }
    }

    /// Set the raw content.
    pub fn content(mut self, content: impl fmt::Display) -> Self {
        self.content = content.to_string();
        self
    }

    /// Set the attributes.
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the depth hint.
    pub fn level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    /// Whether to render the tag when its content is empty (default: true).
    pub fn render_empty_tag(mut self, render_empty_tag: bool) -> Self {
        self.render_empty_tag = render_empty_tag;
        self
    }

    pub fn build(self) -> Tag {
        Tag {
            name: self.name,
            content: self.content,
            prepend: String::new(),
            append: String::new(),
            attributes: self.attributes,
            level: self.level,
            render_empty_tag: self.render_empty_tag,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
