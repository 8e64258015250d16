//! Tag creation.
//!
//! [`TagFactory::create_tag`] returns an [`AnyTag`]: an empty name yields the
//! [`AnyTag::Null`] variant rather than a named tag, and the return type says
//! so.

use std::fmt;

use crate::attributes::{AttrKey, AttrValue, Attributes};
use crate::null_tag::NullTag;
use crate::tag::Tag;
use crate::trace;

/// Creates tags with shared settings.
#[derive(Clone, Debug)]
pub struct TagFactory {
    /// Whether created tags render when their content is empty (default: true).
    /// Does not apply to null tags, which always render their content.
    pub render_empty_tags: bool,
}

impl Default for TagFactory {
    fn default() -> Self {
        Self {
            render_empty_tags: true,
        }
    }
}

impl TagFactory {
    /// Create a factory with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Created tags render nothing when their content is empty.
    pub fn skip_empty_tags(mut self) -> Self {
        self.render_empty_tags = false;
        self
    }

    /// Create a tag.
    ///
    /// An empty `name` yields [`AnyTag::Null`] built from `content` and
    /// `level`; `attributes` are kept on it but never rendered.
    pub fn create_tag(
        &self,
        name: &str,
        content: impl fmt::Display,
        attributes: Option<Attributes>,
        level: Option<i64>,
    ) -> AnyTag {
        if name.is_empty() {
            trace!("empty tag name, creating null tag");
            let mut null = NullTag::new(content);
            if let Some(level) = level {
                null = null.with_level(level);
            }
            if let Some(attributes) = attributes {
                null = null.with_attributes(attributes);
            }
            return AnyTag::Null(null);
        }

        let mut builder = Tag::builder(name)
            .content(content)
            .render_empty_tag(self.render_empty_tags);
        if let Some(attributes) = attributes {
            builder = builder.attributes(attributes);
        }
        if let Some(level) = level {
            builder = builder.level(level);
        }
        AnyTag::Tag(builder.build())
    }

    /// Wrap existing markup in a null tag. The content is not escaped.
    pub fn create_tag_from_content(&self, content: impl fmt::Display) -> NullTag {
        NullTag::new(content)
    }
}

/// Either a named [`Tag`] or a [`NullTag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyTag {
    Tag(Tag),
    Null(NullTag),
}

impl AnyTag {
    /// Returns true for the null variant.
    pub fn is_null(&self) -> bool {
        matches!(self, AnyTag::Null(_))
    }

    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            AnyTag::Tag(tag) => Some(tag),
            AnyTag::Null(_) => None,
        }
    }

    pub fn as_null_tag(&self) -> Option<&NullTag> {
        match self {
            AnyTag::Tag(_) => None,
            AnyTag::Null(null) => Some(null),
        }
    }

    pub fn into_tag(self) -> Option<Tag> {
        match self {
            AnyTag::Tag(tag) => Some(tag),
            AnyTag::Null(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AnyTag::Tag(tag) => tag.name(),
            AnyTag::Null(null) => null.name(),
        }
    }

    pub fn content(&self) -> String {
        match self {
            AnyTag::Tag(tag) => tag.content(),
            AnyTag::Null(null) => null.content(),
        }
    }

    pub fn level(&self) -> Option<i64> {
        match self {
            AnyTag::Tag(tag) => tag.level(),
            AnyTag::Null(null) => null.level(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            AnyTag::Tag(tag) => tag.attributes(),
            AnyTag::Null(null) => null.attributes(),
        }
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            AnyTag::Tag(tag) => tag.attributes_mut(),
            AnyTag::Null(null) => null.attributes_mut(),
        }
    }

    pub fn attr(&mut self, name: impl Into<AttrKey>, value: impl Into<AttrValue>) -> &mut Self {
        self.attributes_mut().set(name, value);
        self
    }

    pub fn class(&mut self, value: impl Into<AttrValue>) -> &mut Self {
        self.attributes_mut().add("class", value);
        self
    }

    pub fn prepend(&mut self, html: impl fmt::Display) -> &mut Self {
        match self {
            AnyTag::Tag(tag) => {
                tag.prepend(html);
            }
            AnyTag::Null(null) => {
                null.prepend(html);
            }
        }
        self
    }

    pub fn append(&mut self, html: impl fmt::Display) -> &mut Self {
        match self {
            AnyTag::Tag(tag) => {
                tag.append(html);
            }
            AnyTag::Null(null) => {
                null.append(html);
            }
        }
        self
    }

    pub fn is_self_closing(&self) -> bool {
        match self {
            AnyTag::Tag(tag) => tag.is_self_closing(),
            AnyTag::Null(null) => null.is_self_closing(),
        }
    }

    pub fn open(&self) -> String {
        match self {
            AnyTag::Tag(tag) => tag.open(),
            AnyTag::Null(null) => null.open(),
        }
    }

    pub fn close(&self) -> String {
        match self {
            AnyTag::Tag(tag) => tag.close(),
            AnyTag::Null(null) => null.close(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            AnyTag::Tag(tag) => tag.render(),
            AnyTag::Null(null) => null.render(),
        }
    }
}

impl From<Tag> for AnyTag {
    fn from(tag: Tag) -> Self {
        AnyTag::Tag(tag)
    }
}

impl From<NullTag> for AnyTag {
    fn from(null: NullTag) -> Self {
        AnyTag::Null(null)
    }
}

impl fmt::Display for AnyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
