use crate::domain::a001_work_order::ui::WorkOrderList;
use leptos::prelude::*;

/// Root component. The application is a single page, so no router or tab
/// shell sits between the mount point and the list.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main style="max-width: 1100px; margin: 0 auto; padding: 24px; font-family: sans-serif;">
            <WorkOrderList />
        </main>
    }
}
