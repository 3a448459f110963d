use leptos::prelude::*;

/// Hover tooltip showing one line per entry above the wrapped content.
/// Inline-styled so it needs no stylesheet support.
#[component]
pub fn Tooltip(
    /// Lines of the hover panel.
    lines: Vec<String>,
    children: Children,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <span
            style="position: relative; display: inline-block; cursor: help;"
            on:mouseenter=move |_| set_visible.set(true)
            on:mouseleave=move |_| set_visible.set(false)
        >
            {children()}
            {move || {
                if visible.get() {
                    view! {
                        <span style="position: absolute; bottom: calc(100% + 6px); left: 0; z-index: 100; background: #333; color: #fff; padding: 6px 10px; border-radius: 4px; font-size: 13px; line-height: 1.5; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.25);">
                            {lines
                                .iter()
                                .map(|line| {
                                    view! {
                                        <span style="display: block; white-space: nowrap;">
                                            {line.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </span>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </span>
    }
}
