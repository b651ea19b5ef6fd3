//! Choice resolution — turning stored selection keys into an ordered
//! value→text mapping.
//!
//! The resolver orchestrates blueprint lookup, provider fetch and
//! normalization, then hands off to a pure core that matches each
//! selection key against the option map.

use fieldkit_blueprint::{Blueprint, FieldDef, FieldType};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::choices::Choices;
use crate::error::{ChoicesError, Result};
use crate::field::Field;
use crate::options;
use crate::provider::OptionProvider;
use crate::text;

/// Resolves stored selection keys against a field's configured options.
pub struct ChoiceResolver<P> {
    provider: P,
}

impl<P: OptionProvider> ChoiceResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolve a stored field against its blueprint.
    ///
    /// A field with no blueprint node, or a node defining no options,
    /// resolves to an empty choice set rather than an error. Provider
    /// failures on dynamic sources propagate.
    pub async fn resolve_field(
        &self,
        blueprint: &Blueprint,
        field: &Field,
        include_all: bool,
    ) -> Result<Choices> {
        let def = match blueprint.lookup(&field.key, field.context.as_deref()) {
            Ok(def) => def,
            Err(e) => {
                debug!(field = %field.key, %e, "no blueprint node, resolving to empty");
                return Ok(Choices::new());
            }
        };
        self.resolve(def, &field.selection(), include_all).await
    }

    /// Resolve selection keys against one field definition.
    pub async fn resolve(
        &self,
        def: &FieldDef,
        keys: &[String],
        include_all: bool,
    ) -> Result<Choices> {
        let Some(source) = &def.options else {
            debug!(field = %def.name, "field defines no options");
            return Ok(Choices::new());
        };
        let list = self.provider.options(source).await?;
        debug!(
            field = %def.name,
            source = source.kind(),
            options = list.len(),
            "options resolved"
        );
        let options = options::normalize(list);
        Ok(resolve_keys(&options, def.type_, keys, include_all))
    }
}

/// The pure resolution core, over an already-normalized option map.
///
/// With `include_all` the whole option map is the result and `keys` are
/// ignored. Otherwise each key resolves in order; duplicate resolved
/// values overwrite earlier ones. Color fields whose key has no option
/// text are dropped rather than aborting the resolution.
pub fn resolve_keys(
    options: &IndexMap<String, String>,
    field_type: FieldType,
    keys: &[String],
    include_all: bool,
) -> Choices {
    if include_all {
        return Choices::from(options.clone());
    }
    let mut choices = Choices::new();
    for key in keys {
        let (value, text) = if field_type == FieldType::Color {
            match resolve_color_key(options, key) {
                Ok(pair) => pair,
                Err(e) => {
                    warn!(%key, %e, "dropping unresolvable color selection");
                    continue;
                }
            }
        } else {
            resolve_key(options, key)
        };
        choices.insert(value, text);
    }
    choices
}

/// Resolve one selection key: match by text first, then by value, then
/// fall back to treating the key as an orphaned label.
fn resolve_key(options: &IndexMap<String, String>, key: &str) -> (String, String) {
    if let Some((value, _)) = options.iter().find(|(_, text)| *text == key) {
        (value.clone(), key.to_string())
    } else if let Some(text) = options.get(key) {
        (key.to_string(), text.clone())
    } else {
        (text::slug(key), key.to_string())
    }
}

/// Resolve a color selection key, whose stored form is the option value
/// itself. The text must exist in the option map.
pub fn resolve_color_key(
    options: &IndexMap<String, String>,
    key: &str,
) -> Result<(String, String)> {
    match options.get(key) {
        Some(text) => Ok((key.to_string(), text.clone())),
        None => Err(ChoicesError::UnknownColor {
            key: key.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticProvider;
    use async_trait::async_trait;
    use fieldkit_blueprint::{OptionList, OptionSource, SelectOption};

    fn fruit_options() -> IndexMap<String, String> {
        IndexMap::from([
            ("a".to_string(), "Apple".to_string()),
            ("b".to_string(), "Banana".to_string()),
        ])
    }

    fn keys(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn include_all_returns_full_map_regardless_of_keys() {
        let options = fruit_options();
        let choices = resolve_keys(&options, FieldType::Select, &keys(&["x", "y"]), true);
        assert_eq!(choices.values(), vec!["a", "b"]);
        assert_eq!(choices.texts(), vec!["Apple", "Banana"]);

        let same = resolve_keys(&options, FieldType::Select, &[], true);
        assert_eq!(choices, same);
    }

    #[test]
    fn empty_selection_resolves_to_empty() {
        let options = fruit_options();
        let choices = resolve_keys(&options, FieldType::Multiselect, &[], false);
        assert!(choices.is_empty());
    }

    #[test]
    fn text_match_then_fallback() {
        let options = fruit_options();
        let choices = resolve_keys(
            &options,
            FieldType::Multiselect,
            &keys(&["Apple", "c"]),
            false,
        );
        assert_eq!(choices.get("a"), Some("Apple"));
        assert_eq!(choices.get("c"), Some("c"));
        assert_eq!(choices.len(), 2);
    }

    #[test]
    fn value_match_uses_option_text() {
        let options = fruit_options();
        let choices = resolve_keys(&options, FieldType::Select, &keys(&["b"]), false);
        assert_eq!(choices.get("b"), Some("Banana"));
    }

    #[test]
    fn text_match_takes_precedence_over_value_match() {
        // "b" is both the text of option "a" and a value of its own.
        let options = IndexMap::from([
            ("a".to_string(), "b".to_string()),
            ("b".to_string(), "Bee".to_string()),
        ]);
        let choices = resolve_keys(&options, FieldType::Select, &keys(&["b"]), false);
        assert_eq!(choices.get("a"), Some("b"));
        assert!(choices.get("b").is_none());
    }

    #[test]
    fn orphaned_key_falls_back_to_slugged_entry() {
        let options = fruit_options();
        let choices = resolve_keys(
            &options,
            FieldType::Tags,
            &keys(&["Deep Purple"]),
            false,
        );
        assert_eq!(choices.get("deep-purple"), Some("Deep Purple"));
    }

    #[test]
    fn empty_options_sends_every_key_to_fallback() {
        let options = IndexMap::new();
        let choices = resolve_keys(
            &options,
            FieldType::Tags,
            &keys(&["One", "Two Words"]),
            false,
        );
        assert_eq!(choices.values(), vec!["one", "two-words"]);
        assert_eq!(choices.texts(), vec!["One", "Two Words"]);
    }

    #[test]
    fn duplicate_resolved_values_overwrite() {
        let options = fruit_options();
        // "Apple" text-matches to value "a"; "a" value-matches to the same.
        let choices = resolve_keys(
            &options,
            FieldType::Multiselect,
            &keys(&["Apple", "a"]),
            false,
        );
        assert_eq!(choices.len(), 1);
        assert_eq!(choices.get("a"), Some("Apple"));
    }

    #[test]
    fn color_key_is_the_value_itself() {
        let options = IndexMap::from([
            ("#ff0000".to_string(), "Red".to_string()),
            ("#00ff00".to_string(), "Green".to_string()),
        ]);
        let choices = resolve_keys(&options, FieldType::Color, &keys(&["#ff0000"]), false);
        assert_eq!(choices.get("#ff0000"), Some("Red"));
    }

    #[test]
    fn unknown_color_key_is_dropped() {
        let options = IndexMap::from([("#ff0000".to_string(), "Red".to_string())]);
        let choices = resolve_keys(
            &options,
            FieldType::Color,
            &keys(&["#ff0000", "#0000ff"]),
            false,
        );
        assert_eq!(choices.len(), 1);
        assert!(choices.get("#0000ff").is_none());
    }

    #[test]
    fn resolve_color_key_surfaces_the_error() {
        let options = IndexMap::from([("#ff0000".to_string(), "Red".to_string())]);
        let err = resolve_color_key(&options, "#0000ff").unwrap_err();
        assert!(matches!(err, ChoicesError::UnknownColor { .. }));
    }

    #[test]
    fn resolution_round_trips_through_include_all() {
        let options = fruit_options();
        let resolved = resolve_keys(
            &options,
            FieldType::Multiselect,
            &keys(&["Apple", "b", "stale"]),
            false,
        );

        let as_map: IndexMap<String, String> = resolved.clone().into_iter().collect();
        let again = resolve_keys(&as_map, FieldType::Multiselect, &[], true);
        assert_eq!(resolved, again);
    }

    fn blueprint() -> Blueprint {
        Blueprint::from_yaml(
            r#"
name: article
fields:
  - name: category
    type: select
    options:
      source: static
      options:
        - value: tech
          text: Technology
        - value: design
          text: Design
  - name: title
    type: text
  - name: related
    type: multiselect
    options:
      source: query
      query: site.children.published
  - name: slides
    type: structure
    fields:
      - name: alignment
        type: radio
        options:
          source: static
          options:
            left: Left
            center: Center
"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn resolve_field_through_static_provider() {
        let resolver = ChoiceResolver::new(StaticProvider);
        let field = Field::new("category", "tech, Design");
        let choices = resolver
            .resolve_field(&blueprint(), &field, false)
            .await
            .unwrap();
        assert_eq!(choices.get("tech"), Some("Technology"));
        assert_eq!(choices.get("design"), Some("Design"));
    }

    #[tokio::test]
    async fn resolve_field_include_all_ignores_stored_value() {
        let resolver = ChoiceResolver::new(StaticProvider);
        let field = Field::new("category", "tech");
        let choices = resolver
            .resolve_field(&blueprint(), &field, true)
            .await
            .unwrap();
        assert_eq!(choices.texts(), vec!["Technology", "Design"]);
    }

    #[tokio::test]
    async fn missing_blueprint_node_resolves_to_empty() {
        let resolver = ChoiceResolver::new(StaticProvider);
        let field = Field::new("nonexistent", "tech");
        let choices = resolver
            .resolve_field(&blueprint(), &field, false)
            .await
            .unwrap();
        assert!(choices.is_empty());
    }

    #[tokio::test]
    async fn field_without_options_resolves_to_empty() {
        let resolver = ChoiceResolver::new(StaticProvider);
        let field = Field::new("title", "My Article");
        let choices = resolver
            .resolve_field(&blueprint(), &field, false)
            .await
            .unwrap();
        assert!(choices.is_empty());
    }

    #[tokio::test]
    async fn nested_field_resolves_through_parent_context() {
        let resolver = ChoiceResolver::new(StaticProvider);
        let field = Field::nested("alignment", "center", "slides");
        let choices = resolver
            .resolve_field(&blueprint(), &field, false)
            .await
            .unwrap();
        assert_eq!(choices.get("center"), Some("Center"));
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let resolver = ChoiceResolver::new(StaticProvider);
        let field = Field::new("related", "some-page");
        let err = resolver
            .resolve_field(&blueprint(), &field, false)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ChoicesError::UnresolvedSource { kind: "query" }
        ));
    }

    /// Provider double that answers query sources with a fixed page list.
    struct QueryDouble;

    #[async_trait]
    impl OptionProvider for QueryDouble {
        async fn options(&self, source: &OptionSource) -> Result<OptionList> {
            match source {
                OptionSource::Query { .. } => Ok(OptionList::Records(vec![
                    SelectOption::new("about", "About Us"),
                    SelectOption::new("contact", "Contact"),
                ])),
                other => Err(ChoicesError::UnresolvedSource { kind: other.kind() }),
            }
        }
    }

    #[tokio::test]
    async fn dynamic_source_resolves_through_provider_double() {
        let resolver = ChoiceResolver::new(QueryDouble);
        let field = Field::new("related", "about, archive");
        let choices = resolver
            .resolve_field(&blueprint(), &field, false)
            .await
            .unwrap();
        assert_eq!(choices.get("about"), Some("About Us"));
        assert_eq!(choices.get("archive"), Some("archive"));
    }
}
