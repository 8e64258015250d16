//! Attribute formatting and escaping.
//!
//! [`format_attributes`] turns an [`Attributes`] snapshot into the text that
//! sits inside an opening tag:
//!
//! - Absent values render as boolean attributes (`required`)
//! - Scalars render double-quoted (`data-foo="bar"`)
//! - A `class` list is deduplicated and space-joined (`class="a b"`)
//! - Any other list or map renders as JSON, single-quoted (`data-x='[...]'`)
//! - Positional entries render their value alone (`readonly`)
//!
//! Every name and value goes through [`escape`].

use crate::attributes::{AttrKey, AttrValue, Attributes};
use crate::debug;

/// Escape text for use in markup.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with entities. Entities already present
/// in the input are escaped again, so `&amp;` becomes `&amp;amp;`.
///
/// ```
/// assert_eq!(hotmeal_tag::escape("<p>lorem</p>"), "&lt;p&gt;lorem&lt;/p&gt;");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Escape `text` onto the end of `out`. See [`escape`].
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
}

/// Format attributes for an opening tag.
///
/// Returns an empty string when there are no attributes. Otherwise the
/// formatted attributes are separated by single spaces, and prefixed with one
/// space when `leading_space` is set.
pub fn format_attributes(attributes: &Attributes, leading_space: bool) -> String {
    if attributes.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for (key, value) in attributes.iter() {
        let start = out.len();
        if !out.is_empty() || leading_space {
            out.push(' ');
        }
        let before_token = out.len();
        write_attr(&mut out, key, value);
        if out.len() == before_token {
            // nothing written, drop the separator
            out.truncate(start);
        }
    }
    out
}

fn write_attr(out: &mut String, key: &AttrKey, value: &AttrValue) {
    let name = match key {
        AttrKey::Index(_) => {
            if let Some(text) = value.to_text() {
                escape_into(out, &text);
            }
            return;
        }
        AttrKey::Name(name) => name.as_str(),
    };

    match value {
        AttrValue::Absent => escape_into(out, name),
        AttrValue::List(items) if name == "class" => {
            let mut classes: Vec<&str> = Vec::with_capacity(items.len());
            for item in items {
                if !classes.contains(&item.as_str()) {
                    classes.push(item);
                }
            }
            write_quoted(out, name, &classes.join(" "), '"');
        }
        AttrValue::List(_) | AttrValue::Map(_) => {
            write_quoted(out, name, &to_json(value), '\'');
        }
        AttrValue::Scalar(text) => write_quoted(out, name, text, '"'),
    }
}

fn write_quoted(out: &mut String, name: &str, value: &str, quote: char) {
    escape_into(out, name);
    out.push('=');
    out.push(quote);
    escape_into(out, value);
    out.push(quote);
}

/// Compact JSON for list and map payloads. Maps keep insertion order.
fn to_json(value: &AttrValue) -> String {
    let json = match value {
        AttrValue::List(items) => facet_json::to_string(items).map_err(|e| format!("{e:?}")),
        AttrValue::Map(entries) => facet_json::to_string(entries).map_err(|e| format!("{e:?}")),
        AttrValue::Absent | AttrValue::Scalar(_) => return String::new(),
    };
    match json {
        Ok(json) => json,
        Err(_err) => {
            debug!(error = %_err, "could not serialize attribute payload");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<p>lorem</p>"), "&lt;p&gt;lorem&lt;/p&gt;");
        assert_eq!(escape("Say \"hi\" & 'bye'"), "Say &quot;hi&quot; &amp; &#039;bye&#039;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_escape_double_encodes_entities() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
        assert_eq!(escape("&lt;b&gt;"), "&amp;lt;b&amp;gt;");
    }

    #[test]
    fn test_empty_attributes() {
        let attrs = Attributes::new();
        assert_eq!(format_attributes(&attrs, true), "");
        assert_eq!(format_attributes(&attrs, false), "");
    }

    #[test]
    fn test_leading_space() {
        let mut attrs = Attributes::new();
        attrs.set("id", "main").set("hidden", ());

        let with = format_attributes(&attrs, true);
        let without = format_attributes(&attrs, false);
        assert_eq!(without, "id=\"main\" hidden");
        assert_eq!(with, format!(" {without}"));
    }

    #[test]
    fn test_class_list_dedup_keeps_storage() {
        let mut attrs = Attributes::new();
        attrs.set("class", vec!["bar", "bar", "foo"]);

        assert_eq!(format_attributes(&attrs, false), "class=\"bar foo\"");
        assert_eq!(
            attrs.get("class"),
            Some(&AttrValue::from(vec!["bar", "bar", "foo"]))
        );
    }

    #[test]
    fn test_list_renders_as_json() {
        let mut attrs = Attributes::new();
        attrs.add("data-foo", "bar").add("data-foo", "foo");

        assert_eq!(
            format_attributes(&attrs, true),
            " data-foo='[&quot;bar&quot;,&quot;foo&quot;]'"
        );
    }

    #[test]
    fn test_map_renders_as_json() {
        let mut colors = IndexMap::new();
        colors.insert("red".to_string(), "Red".to_string());

        let mut attrs = Attributes::new();
        attrs.set("class", vec!["red"]).set("data-colors", colors);

        assert_eq!(
            format_attributes(&attrs, true),
            " class=\"red\" data-colors='{&quot;red&quot;:&quot;Red&quot;}'"
        );
    }

    #[test]
    fn test_map_keeps_insertion_order() {
        let mut attrs = Attributes::new();
        attrs.set("data-x", AttrValue::map([("z", "1"), ("a", "2")]));

        assert_eq!(
            format_attributes(&attrs, false),
            "data-x='{&quot;z&quot;:&quot;1&quot;,&quot;a&quot;:&quot;2&quot;}'"
        );
    }

    #[test]
    fn test_positional_entries() {
        let mut attrs = Attributes::new();
        attrs
            .set("class", "name")
            .set("data-foo", "")
            .set("required", ())
            .set(1usize, "readonly")
            .set("data-bar", AttrValue::map([("key", "value")]));

        assert_eq!(
            format_attributes(&attrs, true),
            " class=\"name\" data-foo=\"\" required readonly data-bar='{&quot;key&quot;:&quot;value&quot;}'"
        );
    }

    #[test]
    fn test_positional_absent_is_skipped() {
        let mut attrs = Attributes::new();
        attrs.set(0usize, ()).set("id", "x");
        assert_eq!(format_attributes(&attrs, true), " id=\"x\"");

        let mut only = Attributes::new();
        only.set(0usize, ());
        assert_eq!(format_attributes(&only, true), "");
    }

    #[test]
    fn test_names_and_values_are_escaped() {
        let mut attrs = Attributes::new();
        attrs.set("title", "<p>lorem</p>").set("x\"y", ());

        assert_eq!(
            format_attributes(&attrs, false),
            "title=\"&lt;p&gt;lorem&lt;/p&gt;\" x&quot;y"
        );
    }
}
