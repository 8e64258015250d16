//! HTML tag building with ordered attributes and strict escaping.
//!
//! hotmeal-tag provides:
//! - **Attributes**: an insertion-ordered store with overwrite (`set`) and
//!   accumulate (`add`) semantics
//! - **Formatting**: attribute rendering for booleans, scalars, class lists,
//!   and JSON payloads, with every name and value escaped
//! - **Tags**: named tags with copy (`with_*`) and mutate (`attr`, `class`,
//!   `prepend`, `append`) methods, self-closing names, and empty-tag suppression
//! - **Null tags**: name-less tags that carry pre-built markup
//!
//! # Example
//!
//! ```rust
//! use hotmeal_tag::{AttrValue, Tag, TagFactory};
//!
//! let mut p = Tag::new("p", "html");
//! p.attr("readonly", ()).attr("data-foo", "bar");
//! assert_eq!(p.render(), r#"<p readonly data-foo="bar">html</p>"#);
//!
//! // List values under other names render as JSON
//! p.attr("data-ids", AttrValue::list(["1", "2"]));
//! assert_eq!(p.open(), r#"<p readonly data-foo="bar" data-ids='[&quot;1&quot;,&quot;2&quot;]'>"#);
//!
//! // An empty name gives a null tag, which renders its content as is
//! let raw = TagFactory::new().create_tag("", "<hr>", None, None);
//! assert!(raw.is_null());
//! assert_eq!(raw.to_string(), "<hr>");
//! ```

mod tracing_macros;
#[allow(unused_imports)]
pub(crate) use tracing_macros::{debug, trace};

pub mod attributes;
pub mod error;
pub mod factory;
pub mod format;
pub mod null_tag;
pub mod tag;
pub mod taggable;

pub use attributes::{AttrKey, AttrValue, Attributes};
pub use error::CreateTagError;
pub use factory::{AnyTag, TagFactory};
pub use format::{escape, escape_into, format_attributes};
pub use null_tag::NullTag;
pub use tag::{SELF_CLOSING_TAGS, Tag, TagBuilder, is_self_closing};
pub use taggable::{Taggable, Tagged};
