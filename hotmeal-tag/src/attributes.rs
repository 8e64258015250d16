//! Ordered attribute storage.
//!
//! [`Attributes`] keeps `(key, value)` pairs in insertion order. Overwriting an
//! existing key keeps its original position, so rendering order never depends
//! on how often an attribute was touched.
//!
//! # Example
//!
//! ```rust
//! use hotmeal_tag::{AttrValue, Attributes};
//!
//! let mut attrs = Attributes::new();
//! attrs.add("class", "card").add("class", "active").set("hidden", ());
//!
//! assert_eq!(attrs.get("class"), Some(&AttrValue::from(vec!["card", "active"])));
//! assert_eq!(attrs.render(), r#" class="card active" hidden"#);
//! ```

use indexmap::IndexMap;
use std::fmt;

use crate::format::format_attributes;

/// Key of an attribute entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, facet::Facet)]
#[repr(u8)]
pub enum AttrKey {
    /// A regular attribute name such as `class` or `data-id`.
    Name(String),
    /// A positional entry. Its value is rendered on its own, which is how
    /// value-only boolean attributes like `readonly` are supplied without a name.
    Index(usize),
}

impl AttrKey {
    /// Returns the attribute name, or `None` for positional entries.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            AttrKey::Name(name) => Some(name),
            AttrKey::Index(_) => None,
        }
    }
}

impl From<&str> for AttrKey {
    fn from(name: &str) -> Self {
        AttrKey::Name(name.to_string())
    }
}

impl From<String> for AttrKey {
    fn from(name: String) -> Self {
        AttrKey::Name(name)
    }
}

impl From<&String> for AttrKey {
    fn from(name: &String) -> Self {
        AttrKey::Name(name.clone())
    }
}

impl From<usize> for AttrKey {
    fn from(index: usize) -> Self {
        AttrKey::Index(index)
    }
}

impl fmt::Display for AttrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrKey::Name(name) => write!(f, "{name}"),
            AttrKey::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Value of an attribute entry.
///
/// The shape decides how the attribute renders, see [`crate::format_attributes`].
#[derive(Debug, Clone, PartialEq, Eq, facet::Facet)]
#[repr(u8)]
pub enum AttrValue {
    /// No value: renders as a boolean attribute (`required`).
    Absent,
    /// A single string value.
    Scalar(String),
    /// An ordered list of values. Accumulates through [`Attributes::add`].
    List(Vec<String>),
    /// An ordered string map, rendered as a JSON object.
    Map(IndexMap<String, String>),
}

impl AttrValue {
    /// Build a [`AttrValue::List`] from anything string-like.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttrValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a [`AttrValue::Map`] from `(key, value)` pairs, keeping their order.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        AttrValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns true for [`AttrValue::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, AttrValue::Absent)
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            AttrValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, String>> {
        match self {
            AttrValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Coerce into a list: absent is empty, a scalar is a single item, a map
    /// contributes its values.
    pub fn into_list(self) -> Vec<String> {
        match self {
            AttrValue::Absent => Vec::new(),
            AttrValue::Scalar(s) => vec![s],
            AttrValue::List(items) => items,
            AttrValue::Map(entries) => entries.into_values().collect(),
        }
    }

    /// Flat text form used for positional entries. `None` when absent.
    pub fn to_text(&self) -> Option<String> {
        match self {
            AttrValue::Absent => None,
            AttrValue::Scalar(s) => Some(s.clone()),
            AttrValue::List(items) => Some(items.join(" ")),
            AttrValue::Map(entries) => {
                Some(entries.values().map(String::as_str).collect::<Vec<_>>().join(" "))
            }
        }
    }

    /// Combine a stored value with an added one.
    ///
    /// Two maps merge key by key (incoming wins, existing positions stay).
    /// Anything else is coerced to lists and concatenated.
    fn combine(self, incoming: AttrValue) -> AttrValue {
        match (self, incoming) {
            (AttrValue::Map(mut existing), AttrValue::Map(incoming)) => {
                existing.extend(incoming);
                AttrValue::Map(existing)
            }
            (existing, incoming) => {
                let mut items = existing.into_list();
                items.extend(incoming.into_list());
                AttrValue::List(items)
            }
        }
    }
}

impl Default for AttrValue {
    fn default() -> Self {
        AttrValue::Absent
    }
}

impl From<()> for AttrValue {
    fn from(_: ()) -> Self {
        AttrValue::Absent
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Scalar(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Scalar(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        AttrValue::Scalar(s.clone())
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(items: Vec<String>) -> Self {
        AttrValue::List(items)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(items: Vec<&str>) -> Self {
        AttrValue::list(items)
    }
}

impl From<&[&str]> for AttrValue {
    fn from(items: &[&str]) -> Self {
        AttrValue::list(items.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for AttrValue {
    fn from(items: [&str; N]) -> Self {
        AttrValue::list(items)
    }
}

impl From<IndexMap<String, String>> for AttrValue {
    fn from(entries: IndexMap<String, String>) -> Self {
        AttrValue::Map(entries)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Absent, Into::into)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(n: $ty) -> Self {
                    AttrValue::Scalar(n.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u32, u64, usize);

/// An ordered collection of attributes.
///
/// Keys are unique. [`set`](Self::set) overwrites, [`add`](Self::add)
/// accumulates. Nothing here fails: any name and any value are accepted and
/// only escaped when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    /// Ordered list of (key, value) pairs
    entries: Vec<(AttrKey, AttrValue)>,
}

impl Attributes {
    /// Create a new empty attribute collection.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if an attribute exists, even when its value is absent.
    pub fn has(&self, key: impl Into<AttrKey>) -> bool {
        self.position(&key.into()).is_some()
    }

    /// Get an attribute value by key.
    pub fn get(&self, key: impl Into<AttrKey>) -> Option<&AttrValue> {
        let key = key.into();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Set an attribute value. If the attribute already exists its value is
    /// replaced in place, otherwise it is appended.
    pub fn set(&mut self, key: impl Into<AttrKey>, value: impl Into<AttrValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(pos) => self.entries[pos].1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Add an attribute value.
    ///
    /// A new key is stored as is. For an existing key the stored and the
    /// incoming values are both coerced to lists and concatenated, which is
    /// how repeated `class` additions accumulate.
    pub fn add(&mut self, key: impl Into<AttrKey>, value: impl Into<AttrValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(pos) => {
                let existing = std::mem::take(&mut self.entries[pos].1);
                self.entries[pos].1 = existing.combine(value);
            }
            None => self.entries.push((key, value)),
        }
        self
    }

    /// [`add`](Self::add) every entry, in iteration order.
    pub fn merge<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<AttrKey>,
        V: Into<AttrValue>,
    {
        for (key, value) in entries {
            self.add(key, value);
        }
        self
    }

    /// Append a positional entry, keyed one past the highest existing index.
    pub fn push(&mut self, value: impl Into<AttrValue>) -> &mut Self {
        let next = self
            .entries
            .iter()
            .filter_map(|(k, _)| match k {
                AttrKey::Index(i) => Some(i + 1),
                AttrKey::Name(_) => None,
            })
            .max()
            .unwrap_or(0);
        self.entries.push((AttrKey::Index(next), value.into()));
        self
    }

    /// Remove an attribute. Returns the old value if it existed.
    pub fn remove(&mut self, key: impl Into<AttrKey>) -> Option<AttrValue> {
        let pos = self.position(&key.into())?;
        Some(self.entries.remove(pos).1)
    }

    /// All entries, in order.
    pub fn all(&self) -> &[(AttrKey, AttrValue)] {
        &self.entries
    }

    /// Iterate over all entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttrKey, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Render with a leading space, ready to follow a tag name.
    /// Empty when there are no attributes.
    pub fn render(&self) -> String {
        format_attributes(self, true)
    }

    /// Render without the leading space.
    pub fn render_without_space(&self) -> String {
        format_attributes(self, false)
    }

    fn position(&self, key: &AttrKey) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<AttrKey>,
    V: Into<AttrValue>,
{
    /// Later duplicates overwrite earlier ones in place.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(Attributes::new().is_empty());

        let mut attrs = Attributes::new();
        attrs.set("data-foo", "1");
        assert!(!attrs.is_empty());
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_has_absent_value() {
        let mut attrs = Attributes::new();
        assert!(!attrs.has("data-foo"));

        attrs.set("data-foo", ());
        assert!(attrs.has("data-foo"));
        assert_eq!(attrs.get("data-foo"), Some(&AttrValue::Absent));
        assert_eq!(attrs.get("data-bar"), None);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut attrs = Attributes::new();
        attrs.set("class", "foo").set("id", "x").set("class", "bar");

        assert_eq!(attrs.get("class"), Some(&AttrValue::from("bar")));
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.render(), r#" class="bar" id="x""#);
    }

    #[test]
    fn test_add_first_keeps_shape() {
        let mut attrs = Attributes::new();
        attrs.add("class", "bar");
        assert_eq!(attrs.get("class"), Some(&AttrValue::from("bar")));
    }

    #[test]
    fn test_add_accumulates() {
        let mut attrs = Attributes::new();
        attrs.add("class", "bar").add("class", "foo");
        assert_eq!(attrs.get("class"), Some(&AttrValue::from(vec!["bar", "foo"])));

        attrs.add("class", vec!["baz", "bar"]);
        assert_eq!(
            attrs.get("class"),
            Some(&AttrValue::from(vec!["bar", "foo", "baz", "bar"]))
        );
    }

    #[test]
    fn test_add_onto_absent() {
        let mut attrs = Attributes::new();
        attrs.set("data-x", ()).add("data-x", "a");
        assert_eq!(attrs.get("data-x"), Some(&AttrValue::from(vec!["a"])));
    }

    #[test]
    fn test_add_merges_maps() {
        let mut attrs = Attributes::new();
        attrs
            .add("data-cfg", AttrValue::map([("a", "1"), ("b", "2")]))
            .add("data-cfg", AttrValue::map([("c", "3"), ("a", "9")]));

        assert_eq!(
            attrs.get("data-cfg"),
            Some(&AttrValue::map([("a", "9"), ("b", "2"), ("c", "3")]))
        );
    }

    #[test]
    fn test_add_map_and_scalar() {
        let mut attrs = Attributes::new();
        attrs
            .add("data-cfg", AttrValue::map([("a", "1")]))
            .add("data-cfg", "2");
        assert_eq!(attrs.get("data-cfg"), Some(&AttrValue::from(vec!["1", "2"])));
    }

    #[test]
    fn test_merge() {
        let mut attrs = Attributes::new();
        attrs.merge([("class", "bar")]);
        attrs.merge([("class", vec!["foo"])]);
        assert_eq!(attrs.get("class"), Some(&AttrValue::from(vec!["bar", "foo"])));
    }

    #[test]
    fn test_all_order() {
        let mut attrs = Attributes::new();
        attrs.merge([("class", "bar")]);
        attrs.set("data-foo", "2");

        assert_eq!(
            attrs.all(),
            &[
                (AttrKey::from("class"), AttrValue::from("bar")),
                (AttrKey::from("data-foo"), AttrValue::from("2")),
            ]
        );
    }

    #[test]
    fn test_push_positional() {
        let mut attrs = Attributes::new();
        attrs.set("id", "a").push("readonly").push("disabled");

        assert_eq!(attrs.get(0usize), Some(&AttrValue::from("readonly")));
        assert_eq!(attrs.get(1usize), Some(&AttrValue::from("disabled")));
        assert_eq!(attrs.render(), r#" id="a" readonly disabled"#);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut attrs: Attributes = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(attrs.remove("b"), Some(AttrValue::from("2")));
        assert_eq!(attrs.remove("b"), None);
        assert_eq!(attrs.render_without_space(), r#"a="1" c="3""#);
    }

    #[test]
    fn test_from_iter_last_wins_in_place() {
        let attrs: Attributes = [("class", "first"), ("id", "x"), ("class", "second")]
            .into_iter()
            .collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.to_string(), r#" class="second" id="x""#);
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(AttrValue::from(None::<&str>), AttrValue::Absent);
        assert_eq!(AttrValue::from(Some("x")), AttrValue::Scalar("x".into()));
        assert_eq!(AttrValue::from(42u32), AttrValue::Scalar("42".into()));
        assert_eq!(AttrValue::from(["a", "b"]).as_list().map(<[String]>::len), Some(2));
        assert!(AttrValue::from(()).is_absent());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = Attributes::new();
        a.set("id", "a");
        let mut b = a.clone();
        b.set("id", "b").add("class", "x");

        assert_eq!(a.get("id"), Some(&AttrValue::from("a")));
        assert!(!a.has("class"));
    }
}
