//! Raw stored field state.

use crate::text;

/// One stored field: its blueprint key and the raw delimited value.
///
/// Nested fields carry the key of the parent structure field, whose
/// blueprint node holds their real definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub value: String,
    pub context: Option<String>,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            context: None,
        }
    }

    /// A field nested inside a structure field.
    pub fn nested(
        key: impl Into<String>,
        value: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            context: Some(context.into()),
        }
    }

    /// The stored selection keys: the raw value split on commas.
    pub fn selection(&self) -> Vec<String> {
        text::split(&self.value, ",")
    }
}
