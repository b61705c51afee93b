//! HTML attribute maps.

use crate::html_escape;

/// A single attribute value.
///
/// Text values render as `name="value"`. A `true` flag renders as
/// `name="name"` and a `false` flag is omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Plain text value.
    Text(String),
    /// Boolean attribute such as `disabled` or `multiple`.
    Flag(bool),
}

impl AttrValue {
    /// Returns whether the value counts as set.
    ///
    /// Empty text, `"0"` and a `false` flag are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty() && s != "0",
            Self::Flag(b) => *b,
        }
    }

    /// Returns the text value, if this is not a flag.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<usize> for AttrValue {
    fn from(value: usize) -> Self {
        Self::Text(value.to_string())
    }
}

/// Insertion-ordered attributes for an element.
///
/// Setting an existing key replaces its value in place, so the rendered
/// order is the order keys were first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Gets a text attribute.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_text)
    }

    /// Returns whether the attribute is present, whatever its value.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes an attribute and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Appends a class to the `class` attribute, creating it if needed.
    pub fn append_class(&mut self, class: &str) {
        if class.is_empty() {
            return;
        }
        let merged = match self.get_text("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set("class", merged);
    }

    /// Returns whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders the attributes as an HTML attribute string.
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .filter_map(|(k, v)| match v {
                AttrValue::Text(text) => Some(format!(r#"{k}="{}""#, html_escape(text))),
                AttrValue::Flag(true) => Some(format!(r#"{k}="{k}""#)),
                AttrValue::Flag(false) => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Renders the attributes with a leading space, or nothing when empty.
    pub(crate) fn to_html_suffix(&self) -> String {
        let html = self.to_html();
        if html.is_empty() {
            html
        } else {
            format!(" {html}")
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}
