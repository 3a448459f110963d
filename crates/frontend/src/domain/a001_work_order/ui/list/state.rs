use std::collections::HashSet;

use contracts::domain::a001_work_order::WorkOrder;
use contracts::shared::filters::{FilterConfigStore, FilterCriteria, FilterDimension};
use leptos::prelude::*;

/// All mutable state behind the work-order list page, held in a single
/// `RwSignal` owned by the page component. Every UI event funnels into one of
/// the command methods below, which keeps the leptos wiring free of filter
/// logic and makes the transitions testable without a DOM.
#[derive(Clone, Debug, Default)]
pub struct WorkOrderListState {
    /// Criteria currently applied to the table.
    pub committed: FilterCriteria,

    /// Criteria being edited in the filter dialog. Survives dialog
    /// close/reopen until applied or cleared.
    pub pending: FilterCriteria,

    /// Content of the configuration-name field.
    pub config_name: String,

    /// Name picked in the saved-configuration selector. May name no stored
    /// configuration; the page renders it as-is.
    pub selected_config: Option<String>,

    pub configs: FilterConfigStore,

    /// Checked rows, by work-order id. Nothing consumes this yet beyond the
    /// toolbar counter.
    pub selected_ids: HashSet<String>,
}

impl WorkOrderListState {
    /// Replace one dimension of the pending criteria.
    pub fn set_pending(&mut self, dimension: FilterDimension, values: Vec<String>) {
        self.pending.set(dimension, values);
    }

    /// Promote the pending criteria to the committed set driving the table.
    pub fn commit(&mut self) {
        self.committed = self.pending.clone();
    }

    /// Commit the pending criteria and, when the name field is non-blank,
    /// save them under that name (overwriting an existing configuration of
    /// the same name).
    pub fn apply(&mut self) {
        self.commit();
        self.configs.save(&self.config_name, &self.committed);
        log::debug!(
            "applied filters, {} active dimension(s)",
            self.committed.active_dimension_count()
        );
    }

    /// Reset both criteria sets and the configuration UI state. Stored
    /// configurations survive.
    pub fn clear(&mut self) {
        self.pending = FilterCriteria::default();
        self.committed = FilterCriteria::default();
        self.config_name.clear();
        self.selected_config = None;
    }

    /// Load a saved configuration into the pending criteria; the table only
    /// changes once a commit follows. An empty name resets the selection
    /// marker. An unknown name is recorded as selected and otherwise ignored.
    pub fn load_config(&mut self, name: &str) {
        if name.is_empty() {
            self.selected_config = None;
            return;
        }
        self.selected_config = Some(name.to_string());
        match self.configs.get(name) {
            Some(criteria) => {
                self.pending = criteria.clone();
                self.config_name = name.to_string();
            }
            None => log::debug!("no saved configuration named {name:?}"),
        }
    }

    /// Records passing the committed criteria, in catalog order.
    pub fn visible(&self, all: &[WorkOrder]) -> Vec<WorkOrder> {
        all.iter()
            .filter(|order| self.committed.matches(order))
            .cloned()
            .collect()
    }

    pub fn toggle_selected(&mut self, id: String, checked: bool) {
        if checked {
            self.selected_ids.insert(id);
        } else {
            self.selected_ids.remove(&id);
        }
    }

    /// Check or uncheck a batch of ids (the currently visible rows).
    pub fn set_selected(&mut self, ids: Vec<String>, checked: bool) {
        if checked {
            self.selected_ids.extend(ids);
        } else {
            for id in &ids {
                self.selected_ids.remove(id);
            }
        }
    }
}

pub fn create_state() -> RwSignal<WorkOrderListState> {
    RwSignal::new(WorkOrderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_work_order::data::sample_work_orders;

    fn ids(orders: &[WorkOrder]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    fn values(list: &[&str]) -> Vec<String> {
        list.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn unfiltered_state_shows_the_whole_catalog() {
        let state = WorkOrderListState::default();
        let orders = sample_work_orders();

        assert_eq!(state.visible(&orders).len(), orders.len());
    }

    #[test]
    fn pending_edits_do_not_affect_the_table_until_commit() {
        let mut state = WorkOrderListState::default();
        let orders = sample_work_orders();

        state.set_pending(FilterDimension::ProductType, values(&["Wrist Flex"]));
        assert_eq!(state.visible(&orders).len(), orders.len());

        state.commit();
        assert_eq!(ids(&state.visible(&orders)), ["30002"]);
    }

    #[test]
    fn commit_is_idempotent() {
        let mut state = WorkOrderListState::default();
        let orders = sample_work_orders();

        state.set_pending(
            FilterDimension::DigitalStatus,
            values(&["Internally Approved"]),
        );
        state.commit();
        let first_visible = state.visible(&orders);
        let after_first = ids(&first_visible);

        state.commit();
        assert_eq!(ids(&state.visible(&orders)), after_first);
    }

    #[test]
    fn conflicting_dimensions_yield_an_empty_visible_set() {
        let mut state = WorkOrderListState::default();
        let orders = sample_work_orders();

        // No catalog entry is a "Wrist Flex" with digital status "Assigned".
        state.set_pending(FilterDimension::ProductType, values(&["Wrist Flex"]));
        state.set_pending(FilterDimension::DigitalStatus, values(&["Assigned"]));
        state.set_pending(FilterDimension::PhysicalStatus, values(&["Started"]));
        state.commit();

        assert!(state.visible(&orders).is_empty());
    }

    #[test]
    fn apply_commits_and_saves_under_the_entered_name() {
        let mut state = WorkOrderListState::default();

        state.config_name = "FastTrack".to_string();
        state.set_pending(FilterDimension::ProductType, values(&["Wrist Flex"]));
        state.apply();

        assert_eq!(state.committed, state.pending);
        assert_eq!(state.configs.names(), ["FastTrack"]);
        assert_eq!(state.configs.get("FastTrack"), Some(&state.committed));
    }

    #[test]
    fn apply_without_a_name_commits_but_saves_nothing() {
        let mut state = WorkOrderListState::default();

        state.config_name = "   ".to_string();
        state.set_pending(FilterDimension::PhysicalStatus, values(&["Started"]));
        state.apply();

        assert_eq!(state.committed.physical_statuses, ["Started"]);
        assert!(state.configs.is_empty());
    }

    #[test]
    fn load_round_trips_saved_criteria_into_pending_only() {
        let mut state = WorkOrderListState::default();
        let orders = sample_work_orders();

        state.config_name = "FastTrack".to_string();
        state.set_pending(FilterDimension::ProductType, values(&["Wrist Flex"]));
        state.apply();

        // Move on to different, unsaved criteria.
        state.config_name.clear();
        state.set_pending(FilterDimension::ProductType, Vec::new());
        state.set_pending(FilterDimension::DigitalStatus, values(&["Submitted"]));
        state.apply();
        assert_eq!(state.configs.len(), 1);

        state.load_config("FastTrack");
        assert_eq!(state.pending.product_types, ["Wrist Flex"]);
        assert!(state.pending.digital_statuses.is_empty());
        assert_eq!(state.config_name, "FastTrack");
        assert_eq!(state.selected_config.as_deref(), Some("FastTrack"));
        // The table still reflects the previously committed criteria.
        assert_eq!(state.committed.digital_statuses, ["Submitted"]);
        assert_eq!(ids(&state.visible(&orders)), ["30001"]);

        state.commit();
        assert_eq!(ids(&state.visible(&orders)), ["30002"]);
    }

    #[test]
    fn loading_an_unknown_name_only_records_the_marker() {
        let mut state = WorkOrderListState::default();

        state.set_pending(FilterDimension::ProductType, values(&["AC Joint Pad"]));
        state.load_config("Ghost");

        assert_eq!(state.selected_config.as_deref(), Some("Ghost"));
        assert_eq!(state.pending.product_types, ["AC Joint Pad"]);
        assert!(state.config_name.is_empty());

        state.load_config("");
        assert!(state.selected_config.is_none());
    }

    #[test]
    fn clear_resets_filters_but_keeps_saved_configurations() {
        let mut state = WorkOrderListState::default();
        let orders = sample_work_orders();

        state.config_name = "FastTrack".to_string();
        state.set_pending(FilterDimension::ProductType, values(&["Wrist Flex"]));
        state.apply();
        state.load_config("FastTrack");

        state.clear();
        assert!(state.pending.is_empty());
        assert!(state.committed.is_empty());
        assert!(state.config_name.is_empty());
        assert!(state.selected_config.is_none());
        assert_eq!(state.visible(&orders).len(), orders.len());
        assert_eq!(state.configs.names(), ["FastTrack"]);
    }

    #[test]
    fn selection_tracks_single_and_bulk_toggles() {
        let mut state = WorkOrderListState::default();

        state.toggle_selected("30000".to_string(), true);
        state.toggle_selected("30001".to_string(), true);
        state.toggle_selected("30000".to_string(), false);
        assert!(state.selected_ids.contains("30001"));
        assert!(!state.selected_ids.contains("30000"));

        state.set_selected(vec!["30002".to_string(), "30003".to_string()], true);
        assert_eq!(state.selected_ids.len(), 3);

        state.set_selected(vec!["30001".to_string(), "30002".to_string()], false);
        assert_eq!(state.selected_ids.len(), 1);
        assert!(state.selected_ids.contains("30003"));
    }
}
