use serde::{Deserialize, Serialize};

use crate::domain::a001_work_order::WorkOrder;

pub mod config;

pub use config::{FilterConfigStore, SavedFilterConfig};

/// The three filterable dimensions of a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDimension {
    ProductType,
    DigitalStatus,
    PhysicalStatus,
}

/// Per-dimension allow-lists for the catalog table. An empty list places no
/// restriction on its dimension.
///
/// Two instances are alive at any time: the committed criteria driving the
/// visible table, and the pending criteria being edited in the filter dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "productTypes")]
    pub product_types: Vec<String>,

    #[serde(rename = "digitalStatuses")]
    pub digital_statuses: Vec<String>,

    #[serde(rename = "physicalStatuses")]
    pub physical_statuses: Vec<String>,
}

impl FilterCriteria {
    /// Replace the selected values of one dimension.
    pub fn set(&mut self, dimension: FilterDimension, values: Vec<String>) {
        match dimension {
            FilterDimension::ProductType => self.product_types = values,
            FilterDimension::DigitalStatus => self.digital_statuses = values,
            FilterDimension::PhysicalStatus => self.physical_statuses = values,
        }
    }

    pub fn get(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::ProductType => &self.product_types,
            FilterDimension::DigitalStatus => &self.digital_statuses,
            FilterDimension::PhysicalStatus => &self.physical_statuses,
        }
    }

    /// True when no dimension restricts anything.
    pub fn is_empty(&self) -> bool {
        self.product_types.is_empty()
            && self.digital_statuses.is_empty()
            && self.physical_statuses.is_empty()
    }

    /// Number of dimensions carrying at least one selected value.
    pub fn active_dimension_count(&self) -> usize {
        [
            &self.product_types,
            &self.digital_statuses,
            &self.physical_statuses,
        ]
        .iter()
        .filter(|values| !values.is_empty())
        .count()
    }

    /// Visibility rule: selected values within a dimension are alternatives
    /// (OR), while all dimensions must hold at once (AND). An empty dimension
    /// matches every record.
    pub fn matches(&self, order: &WorkOrder) -> bool {
        dimension_matches(&self.product_types, &order.product_type)
            && dimension_matches(&self.digital_statuses, &order.digital_status)
            && dimension_matches(&self.physical_statuses, &order.physical_status)
    }
}

fn dimension_matches(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|s| s == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, product_type: &str, digital: &str, physical: &str) -> WorkOrder {
        WorkOrder {
            id: id.to_string(),
            product_type: product_type.to_string(),
            component_status: "0/0/0".to_string(),
            digital_status: digital.to_string(),
            physical_status: physical.to_string(),
            print_by: "2025-10-07".to_string(),
            ship_by: "2025-10-09".to_string(),
            parts: Vec::new(),
            component_details: Vec::new(),
        }
    }

    fn selected(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_criteria_match_every_record() {
        let criteria = FilterCriteria::default();
        let wrist = order("30002", "Wrist Flex", "Internally Approved", "Quality Approved");
        let joint = order("30001", "AC Joint Pad", "Submitted", "Started");

        assert!(criteria.is_empty());
        assert!(criteria.matches(&wrist));
        assert!(criteria.matches(&joint));
    }

    #[test]
    fn values_within_a_dimension_are_alternatives() {
        let mut criteria = FilterCriteria::default();
        criteria.set(
            FilterDimension::ProductType,
            selected(&["Wrist Flex", "AC Joint Pad"]),
        );

        assert!(criteria.matches(&order(
            "30002",
            "Wrist Flex",
            "Internally Approved",
            "Quality Approved"
        )));
        assert!(criteria.matches(&order("30001", "AC Joint Pad", "Submitted", "Started")));
        assert!(!criteria.matches(&order(
            "30003",
            "Ringed Thumb Splint",
            "Assigned",
            "Sufficient Blueprints"
        )));
    }

    #[test]
    fn dimensions_must_all_hold_at_once() {
        let mut criteria = FilterCriteria::default();
        criteria.set(FilterDimension::ProductType, selected(&["Wrist Flex"]));
        criteria.set(
            FilterDimension::DigitalStatus,
            selected(&["Internally Approved"]),
        );
        criteria.set(
            FilterDimension::PhysicalStatus,
            selected(&["Quality Approved"]),
        );

        // All three dimensions satisfied.
        assert!(criteria.matches(&order(
            "30002",
            "Wrist Flex",
            "Internally Approved",
            "Quality Approved"
        )));
        // Physical status misses while the others hold.
        assert!(!criteria.matches(&order(
            "30000",
            "Wrist Flex",
            "Internally Approved",
            "Insufficient Blueprints"
        )));
    }

    #[test]
    fn set_replaces_rather_than_extends() {
        let mut criteria = FilterCriteria::default();
        criteria.set(FilterDimension::DigitalStatus, selected(&["Submitted"]));
        criteria.set(FilterDimension::DigitalStatus, selected(&["Assigned"]));

        assert_eq!(criteria.get(FilterDimension::DigitalStatus), ["Assigned"]);
    }

    #[test]
    fn active_dimension_count_ignores_empty_dimensions() {
        let mut criteria = FilterCriteria::default();
        assert_eq!(criteria.active_dimension_count(), 0);

        criteria.set(FilterDimension::ProductType, selected(&["Wrist Flex"]));
        criteria.set(FilterDimension::PhysicalStatus, selected(&["Started"]));
        assert_eq!(criteria.active_dimension_count(), 2);
    }
}
