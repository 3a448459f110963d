use leptos::prelude::*;

/// Text input with a label. The caller owns the value; edits are reported
/// through `on_input`.
#[component]
pub fn Input(
    /// Label text shown above the field.
    #[prop(into)]
    label: String,
    /// Current value.
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler.
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form__group" style="display: flex; flex-direction: column; gap: 4px; margin-bottom: 12px;">
            <label class="form__label" style="font-size: 13px; font-weight: 500;">{label}</label>
            <input
                type="text"
                class="form__input"
                style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                prop:value=move || value.get()
                placeholder=placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
