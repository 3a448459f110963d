use leptos::prelude::*;

/// Single-value selector. Options double as their display labels; the empty
/// string stands for "nothing selected" and maps to the placeholder row.
#[component]
pub fn Select(
    /// Label text (omitted when empty).
    #[prop(optional, into)]
    label: String,
    /// Currently selected value.
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler, called with the newly selected value.
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Option values.
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Text of the empty-value option rendered first.
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let has_label = !label.is_empty();

    view! {
        <div class="form__group" style="display: flex; flex-direction: column; gap: 4px;">
            {has_label
                .then(|| view! {
                    <label class="form__label" style="font-size: 13px; font-weight: 500;">
                        {label.clone()}
                    </label>
                })}
            <select
                class="form__select"
                style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; background: white;"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|opt| opt.clone()
                    children=move |opt: String| {
                        let for_selected = opt.clone();
                        let opt_value = opt.clone();
                        let is_selected = move || value.get() == for_selected;
                        view! {
                            <option value=opt_value selected=is_selected>
                                {opt}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
