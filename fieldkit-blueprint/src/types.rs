//! Core blueprint and option-source types.
//!
//! All types serialize to/from YAML via serde. A blueprint describes the
//! fields of one content type; each field may carry an option source that
//! says where its selectable choices come from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{BlueprintError, Result};

/// A single selectable option: canonical value plus display text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Raw option material, in either of the two shapes blueprints and
/// providers produce: a list of value/text records, or an already-flat
/// value→text association.
///
/// Consumers normalize this into a single ordered map at the boundary and
/// never branch on the shape again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OptionList {
    Records(Vec<SelectOption>),
    Map(IndexMap<String, String>),
}

impl OptionList {
    pub fn len(&self) -> usize {
        match self {
            OptionList::Records(records) => records.len(),
            OptionList::Map(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for OptionList {
    fn default() -> Self {
        OptionList::Records(Vec::new())
    }
}

/// Where a field's options come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum OptionSource {
    /// Inline list defined in the blueprint itself.
    Static { options: OptionList },
    /// Host-side query expression evaluated against the current model.
    Query { query: String },
    /// Remote endpoint returning option records.
    Api { url: String },
    /// Host-computed provider, addressed by name.
    Computed { derive: String },
}

impl OptionSource {
    /// The kebab-case tag of this source, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            OptionSource::Static { .. } => "static",
            OptionSource::Query { .. } => "query",
            OptionSource::Api { .. } => "api",
            OptionSource::Computed { .. } => "computed",
        }
    }
}

/// The type of a field — determines how stored selection keys are
/// interpreted during resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Select,
    Multiselect,
    Checkboxes,
    Radio,
    Tags,
    Toggle,
    /// Selection keys are the values themselves; texts are looked up.
    Color,
    /// Composite field carrying nested field definitions.
    Structure,
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Text
    }
}

/// A field definition inside a blueprint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionSource>,
    /// Nested field definitions. Populated for `Structure` fields, which
    /// don't give their children blueprint nodes of their own.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDef>,
}

impl FieldDef {
    /// Look up a nested field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A blueprint — the schema document for one content type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blueprint {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl Blueprint {
    /// Parse a blueprint from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Get a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get a field definition nested inside a parent field.
    pub fn field_in(&self, parent: &str, name: &str) -> Option<&FieldDef> {
        self.field(parent).and_then(|p| p.field(name))
    }

    /// The effective definition for a field, honoring nesting context.
    ///
    /// With a context, the parent field's blueprint node holds the true
    /// definition of the nested field. Without one, the field's own node
    /// is used.
    pub fn lookup(&self, name: &str, context: Option<&str>) -> Result<&FieldDef> {
        let found = match context {
            Some(parent) => self.field_in(parent, name),
            None => self.field(name),
        };
        found.ok_or_else(|| BlueprintError::FieldNotFound {
            name: name.to_string(),
        })
    }
}
