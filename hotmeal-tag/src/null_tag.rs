//! Name-less tags.
//!
//! A [`NullTag`] carries already-built markup through APIs that expect a tag.
//! It has no name, renders no open or end tag, and always renders its content
//! verbatim.

use std::fmt;

use crate::attributes::{AttrKey, AttrValue, Attributes};
use crate::tag::Tag;

/// A tag without a name that renders only its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullTag {
    inner: Tag,
}

impl NullTag {
    /// Wrap content. The content is not escaped.
    pub fn new(content: impl fmt::Display) -> Self {
        Self {
            inner: Tag::new("", content),
        }
    }

    /// Wrap content with a depth hint.
    pub fn at_level(content: impl fmt::Display, level: i64) -> Self {
        Self {
            inner: Tag::builder("").content(content).level(level).build(),
        }
    }

    /// Always empty.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Returns a copy. The name stays empty whatever is passed.
    pub fn with_name(&self, _name: impl Into<String>) -> Self {
        self.clone()
    }

    pub fn content(&self) -> String {
        self.inner.content()
    }

    pub fn with_content(&self, content: impl fmt::Display) -> Self {
        Self {
            inner: self.inner.with_content(content),
        }
    }

    pub fn level(&self) -> Option<i64> {
        self.inner.level()
    }

    pub fn with_level(&self, level: i64) -> Self {
        Self {
            inner: self.inner.with_level(level),
        }
    }

    /// Attributes are kept but never rendered.
    pub fn attributes(&self) -> &Attributes {
        self.inner.attributes()
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        self.inner.attributes_mut()
    }

    pub fn with_attributes(&self, attributes: Attributes) -> Self {
        Self {
            inner: self.inner.with_attributes(attributes),
        }
    }

    pub fn with_attr(&self, name: impl Into<AttrKey>, value: impl Into<AttrValue>) -> Self {
        Self {
            inner: self.inner.with_attr(name, value),
        }
    }

    pub fn attr(&mut self, name: impl Into<AttrKey>, value: impl Into<AttrValue>) -> &mut Self {
        self.inner.attr(name, value);
        self
    }

    pub fn class(&mut self, value: impl Into<AttrValue>) -> &mut Self {
        self.inner.class(value);
        self
    }

    pub fn prepend(&mut self, html: impl fmt::Display) -> &mut Self {
        self.inner.prepend(html);
        self
    }

    pub fn append(&mut self, html: impl fmt::Display) -> &mut Self {
        self.inner.append(html);
        self
    }

    /// Always false: the empty name is not a self-closing name.
    pub fn is_self_closing(&self) -> bool {
        false
    }

    pub fn open(&self) -> String {
        String::new()
    }

    pub fn close(&self) -> String {
        String::new()
    }

    /// The content, verbatim. Empty content renders as an empty string.
    pub fn render(&self) -> String {
        self.content()
    }
}

impl Default for NullTag {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for NullTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
