use serde::{Deserialize, Serialize};

use super::FilterCriteria;

/// A named snapshot of filter criteria, reusable for the lifetime of the
/// page session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedFilterConfig {
    pub name: String,
    pub criteria: FilterCriteria,
}

/// Saved configurations in insertion order. The name is the key: saving under
/// an existing name overwrites that entry in place instead of appending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterConfigStore {
    configs: Vec<SavedFilterConfig>,
}

impl FilterConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `criteria` under `name`. A name that trims to empty is ignored.
    /// Name comparison is exact (case-sensitive) after trimming.
    pub fn save(&mut self, name: &str, criteria: &FilterCriteria) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(existing) = self.configs.iter_mut().find(|c| c.name == name) {
            existing.criteria = criteria.clone();
        } else {
            self.configs.push(SavedFilterConfig {
                name: name.to_string(),
                criteria: criteria.clone(),
            });
        }
    }

    /// Criteria stored under exactly `name`, if any.
    pub fn get(&self, name: &str) -> Option<&FilterCriteria> {
        self.configs
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.criteria)
    }

    /// Configuration names in insertion order, stable across overwrites.
    pub fn names(&self) -> Vec<String> {
        self.configs.iter().map(|c| c.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::FilterDimension;

    fn criteria_with(product_types: &[&str]) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        criteria.set(
            FilterDimension::ProductType,
            product_types.iter().map(|v| v.to_string()).collect(),
        );
        criteria
    }

    #[test]
    fn blank_or_whitespace_name_is_ignored() {
        let mut store = FilterConfigStore::new();
        store.save("", &criteria_with(&["Wrist Flex"]));
        store.save("   ", &criteria_with(&["Wrist Flex"]));

        assert!(store.is_empty());
    }

    #[test]
    fn names_are_trimmed_and_listed_in_insertion_order() {
        let mut store = FilterConfigStore::new();
        store.save("  Urgent  ", &criteria_with(&["Wrist Flex"]));
        store.save("Late", &criteria_with(&["AC Joint Pad"]));

        assert_eq!(store.names(), ["Urgent", "Late"]);
        assert_eq!(store.get("Urgent"), Some(&criteria_with(&["Wrist Flex"])));
    }

    #[test]
    fn saving_an_existing_name_overwrites_in_place() {
        let mut store = FilterConfigStore::new();
        store.save("FastTrack", &criteria_with(&["Wrist Flex"]));
        store.save("Other", &criteria_with(&["AC Joint Pad"]));
        store.save("FastTrack", &criteria_with(&["Ringed Thumb Splint"]));

        assert_eq!(store.len(), 2);
        assert_eq!(store.names(), ["FastTrack", "Other"]);
        assert_eq!(
            store.get("FastTrack"),
            Some(&criteria_with(&["Ringed Thumb Splint"]))
        );
    }

    #[test]
    fn lookup_is_case_sensitive_and_misses_return_none() {
        let mut store = FilterConfigStore::new();
        store.save("FastTrack", &criteria_with(&["Wrist Flex"]));

        assert!(store.get("fasttrack").is_none());
        assert!(store.get("missing").is_none());
    }
}
