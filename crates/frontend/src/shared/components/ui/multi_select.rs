use leptos::prelude::*;

/// Multi-value selector rendered as a checkbox list, one row per known
/// option. Toggling a row reports the full updated selection through
/// `on_change`; selection order follows click order.
#[component]
pub fn MultiSelect(
    /// Label text shown above the list.
    #[prop(into)]
    label: String,
    /// Fixed option vocabulary for this dimension.
    options: Vec<String>,
    /// Currently selected values.
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Callback with the full selection after a toggle.
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let toggle = move |option: String| {
        let mut values = selected.get();
        if let Some(idx) = values.iter().position(|v| v == &option) {
            values.remove(idx);
        } else {
            values.push(option);
        }
        on_change.run(values);
    };

    view! {
        <div class="form__group" style="min-width: 220px; display: flex; flex-direction: column; gap: 4px;">
            <label class="form__label" style="font-size: 13px; font-weight: 500;">{label}</label>
            <div
                class="field-list"
                style="display: flex; flex-direction: column; gap: 4px; border: 1px solid #ddd; border-radius: 4px; padding: 8px;"
            >
                <For
                    each=move || options.clone()
                    key=|opt| opt.clone()
                    children=move |opt: String| {
                        let for_checked = opt.clone();
                        let for_change = opt.clone();
                        let is_checked =
                            move || selected.get().iter().any(|v| v == &for_checked);
                        view! {
                            <label
                                class="field-item"
                                style="display: flex; align-items: center; gap: 6px; cursor: pointer; user-select: none; font-size: 14px;"
                            >
                                <input
                                    type="checkbox"
                                    class="field-checkbox"
                                    style="cursor: pointer;"
                                    prop:checked=is_checked
                                    on:change=move |_| toggle(for_change.clone())
                                />
                                <span class="field-label">{opt}</span>
                            </label>
                        }
                    }
                />
            </div>
        </div>
    }
}
