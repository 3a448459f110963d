use contracts::domain::a001_work_order::{DIGITAL_STATUSES, PHYSICAL_STATUSES, PRODUCT_TYPES};
use contracts::shared::filters::FilterDimension;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::ui::{Input as UiInput, MultiSelect, Select as UiSelect};

use super::state::WorkOrderListState;

fn to_options(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Dialog for editing the pending filter criteria and managing named filter
/// configurations. Closing without applying keeps the pending edits, so the
/// dialog resumes where it was left.
#[component]
pub fn FilterConfigDialog(
    /// Dialog visibility.
    open: RwSignal<bool>,
    /// Page state holding pending criteria and the configuration store.
    state: RwSignal<WorkOrderListState>,
) -> impl IntoView {
    let config_names = Signal::derive(move || state.with(|s| s.configs.names()));
    let selected_config =
        Signal::derive(move || state.with(|s| s.selected_config.clone().unwrap_or_default()));
    let config_name = Signal::derive(move || state.with(|s| s.config_name.clone()));

    let pending_product_types =
        Signal::derive(move || state.with(|s| s.pending.product_types.clone()));
    let pending_digital_statuses =
        Signal::derive(move || state.with(|s| s.pending.digital_statuses.clone()));
    let pending_physical_statuses =
        Signal::derive(move || state.with(|s| s.pending.physical_statuses.clone()));

    let handle_clear = move |_| {
        state.update(|s| s.clear());
    };

    let handle_cancel = move |_| {
        open.set(false);
    };

    let handle_apply = move |_| {
        state.update(|s| s.apply());
        open.set(false);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Create or Load Configuration"</DialogTitle>
                    <DialogContent>
                        <Show when=move || !config_names.get().is_empty()>
                            <UiSelect
                                label="Saved Configurations"
                                value=selected_config
                                options=config_names
                                placeholder="Select a configuration to load"
                                on_change=Callback::new(move |name: String| {
                                    state.update(|s| s.load_config(&name));
                                })
                            />
                        </Show>

                        <UiInput
                            label="Configuration Name"
                            value=config_name
                            placeholder="Enter or update configuration name"
                            on_input=Callback::new(move |value: String| {
                                state.update(|s| s.config_name = value);
                            })
                        />

                        <div style="display: flex; gap: 24px; flex-wrap: wrap; margin-top: 12px;">
                            <MultiSelect
                                label="Prod Type"
                                options=to_options(PRODUCT_TYPES)
                                selected=pending_product_types
                                on_change=Callback::new(move |values: Vec<String>| {
                                    state.update(|s| {
                                        s.set_pending(FilterDimension::ProductType, values)
                                    });
                                })
                            />

                            <MultiSelect
                                label="Digital Product Status"
                                options=to_options(DIGITAL_STATUSES)
                                selected=pending_digital_statuses
                                on_change=Callback::new(move |values: Vec<String>| {
                                    state.update(|s| {
                                        s.set_pending(FilterDimension::DigitalStatus, values)
                                    });
                                })
                            />

                            <MultiSelect
                                label="Physical Product Status"
                                options=to_options(PHYSICAL_STATUSES)
                                selected=pending_physical_statuses
                                on_change=Callback::new(move |values: Vec<String>| {
                                    state.update(|s| {
                                        s.set_pending(FilterDimension::PhysicalStatus, values)
                                    });
                                })
                            />
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <div style="display: flex; justify-content: space-between; width: 100%;">
                            <Button appearance=ButtonAppearance::Secondary on_click=handle_clear>
                                "Clear Filters"
                            </Button>
                            <div style="display: flex; gap: 8px;">
                                <Button appearance=ButtonAppearance::Subtle on_click=handle_cancel>
                                    "Cancel"
                                </Button>
                                <Button appearance=ButtonAppearance::Primary on_click=handle_apply>
                                    "Apply Filters"
                                </Button>
                            </div>
                        </div>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
