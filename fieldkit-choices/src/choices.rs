//! The resolved choice set and its derived views.
//!
//! `Choices` wraps the ordered value→text map a resolution produces. Every
//! derived operation is a pure view over that map; only `average` builds a
//! replacement set, and it consumes the original.

use std::fmt;

use indexmap::IndexMap;

use crate::collect;
use crate::error::Result;
use crate::text;

/// Argument adapter for membership checks that accept either a single key
/// or a list of keys.
pub trait KeyArgs {
    fn into_keys(self) -> Vec<String>;
}

impl KeyArgs for &str {
    fn into_keys(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl KeyArgs for String {
    fn into_keys(self) -> Vec<String> {
        vec![self]
    }
}

impl KeyArgs for &[&str] {
    fn into_keys(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> KeyArgs for [&str; N] {
    fn into_keys(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl KeyArgs for &[String] {
    fn into_keys(self) -> Vec<String> {
        self.to_vec()
    }
}

impl KeyArgs for Vec<String> {
    fn into_keys(self) -> Vec<String> {
        self
    }
}

/// An ordered value→text mapping resolved for one field instance.
///
/// Built fresh on every resolution, never persisted. Key comparisons are
/// case-sensitive throughout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choices {
    map: IndexMap<String, String>,
}

impl Choices {
    pub fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Insert a resolved pair; a later duplicate value overwrites.
    pub fn insert(&mut self, value: String, text: String) {
        self.map.insert(value, text);
    }

    /// The text stored under `value`.
    pub fn get(&self, value: &str) -> Option<&str> {
        self.map.get(value).map(String::as_str)
    }

    /// The value whose text equals `text`; first matching position wins.
    pub fn value_of(&self, text: &str) -> Option<&str> {
        self.map
            .iter()
            .find(|(_, t)| *t == text)
            .map(|(v, _)| v.as_str())
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.map.iter()
    }

    /// All values, in resolution order.
    pub fn values(&self) -> Vec<String> {
        self.map.keys().cloned().collect()
    }

    /// All texts, in resolution order.
    pub fn texts(&self) -> Vec<String> {
        self.map.values().cloned().collect()
    }

    /// The texts, or the values when `values` is true.
    pub fn to_vec(&self, values: bool) -> Vec<String> {
        if values {
            self.values()
        } else {
            self.texts()
        }
    }

    /// The texts mapped through a transform, in order.
    pub fn map_texts(&self, f: impl Fn(&str) -> String) -> Vec<String> {
        self.map.values().map(|t| f(t)).collect()
    }

    /// Texts joined with a separator. `", "` is the conventional default,
    /// used by the [`fmt::Display`] impl.
    pub fn join(&self, separator: &str) -> String {
        self.texts().join(separator)
    }

    /// Values joined with a separator.
    pub fn join_values(&self, separator: &str) -> String {
        self.values().join(separator)
    }

    /// True iff `key` is non-empty and appears among the values or texts.
    pub fn has(&self, key: &str) -> bool {
        !key.is_empty() && (self.map.contains_key(key) || self.map.values().any(|t| t == key))
    }

    /// True iff at least one of `keys` appears among the values or texts.
    pub fn has_any<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        keys.iter().any(|k| self.has(k.as_ref()))
    }

    /// True iff every one of `keys` appears among the values or texts.
    /// An empty list is vacuously satisfied.
    pub fn has_all<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        keys.iter().all(|k| self.has(k.as_ref()))
    }

    /// [`has_all`](Self::has_all), accepting a single key or a list.
    pub fn includes(&self, keys: impl KeyArgs) -> bool {
        self.has_all(&keys.into_keys())
    }

    /// Negation of [`includes`](Self::includes).
    pub fn excludes(&self, keys: impl KeyArgs) -> bool {
        !self.includes(keys)
    }

    /// Elements of `required` absent from the full entry set (values and
    /// texts together), in `required` order.
    pub fn missing<S: AsRef<str>>(&self, required: &[S]) -> Vec<String> {
        let have: Vec<String> = self
            .map
            .keys()
            .chain(self.map.values())
            .cloned()
            .collect();
        let required: Vec<String> = required.iter().map(|s| s.as_ref().to_string()).collect();
        collect::missing(&have, &required)
    }

    /// Replace the whole set with one synthetic entry holding the numeric
    /// mean of the texts, formatted to `decimals` places.
    ///
    /// Fails if the set is empty or any text does not parse as a number.
    pub fn average(self, decimals: usize) -> Result<Choices> {
        let mean = collect::average(&self.texts(), decimals)?;
        let mut map = IndexMap::with_capacity(1);
        map.insert("average".to_string(), format!("{mean:.decimals$}"));
        Ok(Choices { map })
    }

    /// Generic accessor used by filtering: `"text"` yields the item
    /// itself, `"value"` the reverse lookup of the item, anything else
    /// nothing. A delimiter splits the result into tokens.
    pub fn attribute(
        &self,
        item: &str,
        attribute: &str,
        split_on: Option<&str>,
    ) -> Option<Vec<String>> {
        let raw = match attribute {
            "text" => item.to_string(),
            "value" => self.value_of(item)?.to_string(),
            _ => return None,
        };
        Some(match split_on {
            Some(delimiter) => text::split(&raw, delimiter),
            None => vec![raw],
        })
    }

    fn map_texts_with(&self, f: impl Fn(&str) -> String) -> Choices {
        Choices {
            map: self
                .map
                .iter()
                .map(|(value, text)| (value.clone(), f(text)))
                .collect(),
        }
    }

    // Case transforms rebuild the map applying the conversion to the text
    // side; values are stable identifiers and stay untouched.

    pub fn lower(&self) -> Choices {
        self.map_texts_with(text::lower)
    }

    pub fn upper(&self) -> Choices {
        self.map_texts_with(text::upper)
    }

    pub fn ucfirst(&self) -> Choices {
        self.map_texts_with(text::ucfirst)
    }

    pub fn ucwords(&self) -> Choices {
        self.map_texts_with(text::ucwords)
    }

    pub fn slug(&self) -> Choices {
        self.map_texts_with(text::slug)
    }

    pub fn snake(&self) -> Choices {
        self.map_texts_with(text::snake)
    }

    pub fn studly(&self) -> Choices {
        self.map_texts_with(text::studly)
    }

    pub fn camel(&self) -> Choices {
        self.map_texts_with(text::camel)
    }

    pub fn camel_to_kebab(&self) -> Choices {
        self.map_texts_with(text::camel_to_kebab)
    }

    pub fn kebab(&self) -> Choices {
        self.map_texts_with(text::kebab)
    }

    pub fn kebab_to_camel(&self) -> Choices {
        self.map_texts_with(text::kebab_to_camel)
    }
}

impl fmt::Display for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(", "))
    }
}

impl From<IndexMap<String, String>> for Choices {
    fn from(map: IndexMap<String, String>) -> Self {
        Self { map }
    }
}

impl FromIterator<(String, String)> for Choices {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Choices {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a> IntoIterator for &'a Choices {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}
