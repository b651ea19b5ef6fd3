//! Normalization of raw option material into one ordered map.

use fieldkit_blueprint::OptionList;
use indexmap::IndexMap;

use crate::text;

/// Collapse raw option material into an ordered value→text map.
///
/// Record lists fold in order, last write wins on duplicate values. A
/// record whose value equals its text only ever carried a label, so its
/// key becomes the slug of that text. Flat maps pass through unchanged.
pub fn normalize(list: OptionList) -> IndexMap<String, String> {
    match list {
        OptionList::Map(map) => map,
        OptionList::Records(records) => {
            let mut map = IndexMap::with_capacity(records.len());
            for option in records {
                let key = if option.value == option.text {
                    text::slug(&option.text)
                } else {
                    option.value
                };
                map.insert(key, option.text);
            }
            map
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldkit_blueprint::SelectOption;

    #[test]
    fn records_fold_in_order() {
        let list = OptionList::Records(vec![
            SelectOption::new("a", "Apple"),
            SelectOption::new("b", "Banana"),
        ]);
        let map = normalize(list);
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(map["a"], "Apple");
    }

    #[test]
    fn label_only_record_gets_slugged_key() {
        let list = OptionList::Records(vec![SelectOption::new("Red", "Red")]);
        let map = normalize(list);
        assert_eq!(map.get("red"), Some(&"Red".to_string()));
        assert!(map.get("Red").is_none());
    }

    #[test]
    fn duplicate_values_last_write_wins() {
        let list = OptionList::Records(vec![
            SelectOption::new("a", "First"),
            SelectOption::new("a", "Second"),
        ]);
        let map = normalize(list);
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], "Second");
    }

    #[test]
    fn slug_collisions_accepted() {
        let list = OptionList::Records(vec![
            SelectOption::new("Deep Red", "Deep Red"),
            SelectOption::new("deep red", "deep red"),
        ]);
        let map = normalize(list);
        assert_eq!(map.len(), 1);
        assert_eq!(map["deep-red"], "deep red");
    }

    #[test]
    fn flat_map_passes_through() {
        let mut inner = IndexMap::new();
        inner.insert("x".to_string(), "Ex".to_string());
        inner.insert("y".to_string(), "Why".to_string());
        let map = normalize(OptionList::Map(inner.clone()));
        assert_eq!(map, inner);
    }
}
