use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

/// Select-all checkbox for the table header.
///
/// Shows unchecked / indeterminate / checked depending on how many of the
/// visible rows are selected, and reports "select all visible" (`true`) or
/// "deselect all visible" (`false`) through `on_change`.
#[component]
pub fn TableHeaderCheckbox(
    /// Ids of the currently visible rows.
    #[prop(into)]
    visible_ids: Signal<Vec<String>>,

    /// Currently selected ids.
    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// Callback on change: true = select all visible, false = deselect.
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state = Signal::derive(move || {
        let ids = visible_ids.get();
        let sel = selected.get();

        if ids.is_empty() {
            return HeaderCheckboxState::Unchecked;
        }

        let selected_count = ids.iter().filter(|id| sel.contains(*id)).count();
        if selected_count == 0 {
            HeaderCheckboxState::Unchecked
        } else if selected_count == ids.len() {
            HeaderCheckboxState::Checked
        } else {
            HeaderCheckboxState::Indeterminate
        }
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // The indeterminate flag only exists as a DOM property.
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(
                    checkbox_state.get(),
                    HeaderCheckboxState::Indeterminate
                ));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false>
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                style="cursor: pointer;"
                prop:checked=move || matches!(checkbox_state.get(), HeaderCheckboxState::Checked)
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </TableHeaderCell>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum HeaderCheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}
