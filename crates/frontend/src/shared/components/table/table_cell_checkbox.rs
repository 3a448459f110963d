use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Checkbox cell for selecting a single table row.
///
/// Reflects membership of `item_id` in the selected set, stops click
/// propagation so row-level handlers do not fire, and reports
/// `(id, checked)` through `on_change`.
#[component]
pub fn TableCellCheckbox(
    /// Id of the row this cell belongs to.
    #[prop(into)]
    item_id: String,

    /// Currently selected ids.
    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// Callback on change: (item_id, checked).
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let item_id_for_checked = item_id.clone();
    let item_id_for_change = item_id.clone();

    view! {
        <TableCell on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                style="cursor: pointer;"
                prop:checked=move || selected.get().contains(&item_id_for_checked)
                on:change=move |ev| {
                    on_change.run((item_id_for_change.clone(), event_target_checked(&ev)));
                }
            />
        </TableCell>
    }
}
