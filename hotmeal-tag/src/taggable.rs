//! Holding a tag on behalf of another value.

use std::ops::{Deref, DerefMut};

use crate::tag::Tag;

/// Something that carries exactly one [`Tag`].
///
/// Implement it by keeping a `Tag` field, or wrap a value in [`Tagged`].
pub trait Taggable {
    /// Replace the held tag.
    fn set_tag(&mut self, tag: Tag) -> &mut Self;

    /// The held tag.
    fn tag(&self) -> &Tag;

    /// The held tag, mutably.
    fn tag_mut(&mut self) -> &mut Tag;
}

/// A value paired with a tag.
///
/// Derefs to the wrapped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged<T> {
    value: T,
    tag: Tag,
}

impl<T> Tagged<T> {
    pub fn new(value: T, tag: Tag) -> Self {
        Self { value, tag }
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, Tag) {
        (self.value, self.tag)
    }
}

impl<T> Taggable for Tagged<T> {
    fn set_tag(&mut self, tag: Tag) -> &mut Self {
        self.tag = tag;
        self
    }

    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn tag_mut(&mut self) -> &mut Tag {
        &mut self.tag
    }
}

impl<T> Deref for Tagged<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Tagged<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}
