pub mod filter_dialog;
pub mod state;

use contracts::domain::a001_work_order::WorkOrder;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_work_order::data::sample_work_orders;
use crate::domain::a001_work_order::status::{digital_status_color, physical_status_color};
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::tooltip::Tooltip;
use crate::shared::components::ui::Select as UiSelect;
use crate::shared::date_utils::format_date;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;

use filter_dialog::FilterConfigDialog;
use state::create_state;

impl CsvExportable for WorkOrder {
    fn headers() -> Vec<&'static str> {
        vec![
            "Prod ID",
            "Prod Type",
            "Component Status",
            "Dig Prod Status",
            "Phys Prod Status",
            "Print By Date",
            "Ship By Date",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.product_type.clone(),
            self.component_status.clone(),
            self.digital_status.clone(),
            self.physical_status.clone(),
            self.print_by.clone(),
            self.ship_by.clone(),
        ]
    }
}

/// Work-order catalog page: a filterable table with row selection, CSV
/// export of the visible rows, and a dialog for building and saving named
/// filter configurations.
#[component]
pub fn WorkOrderList() -> impl IntoView {
    let state = create_state();
    let orders = StoredValue::new(sample_work_orders());
    let dialog_open = RwSignal::new(false);

    let visible_orders = move || orders.with_value(|all| state.with(|s| s.visible(all)));

    let visible_ids = Signal::derive(move || {
        visible_orders()
            .iter()
            .map(|o| o.id.clone())
            .collect::<Vec<_>>()
    });
    let selected_signal = Signal::derive(move || state.with(|s| s.selected_ids.clone()));
    let config_names = Signal::derive(move || state.with(|s| s.configs.names()));
    let selected_config =
        Signal::derive(move || state.with(|s| s.selected_config.clone().unwrap_or_default()));
    let active_filters =
        Signal::derive(move || state.with(|s| s.committed.active_dimension_count()));

    let toggle_selection = move |(id, checked): (String, bool)| {
        state.update(|s| s.toggle_selected(id, checked));
    };

    let toggle_all_visible = move |checked: bool| {
        let ids = visible_ids.get();
        state.update(|s| s.set_selected(ids, checked));
    };

    let handle_export = move |_| {
        let data = visible_orders();
        let filename = format!(
            "work_orders_{}.csv",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = export_to_csv(&data, &filename) {
            log::error!("CSV export failed: {}", e);
        }
    };

    view! {
        <div class="page page--list">
            <div class="page__header" style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;">
                <div class="page__header-left" style="display: flex; align-items: center; gap: 10px;">
                    <h1 class="page__title" style="margin: 0; font-size: 22px;">"Work Orders"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || visible_orders().len().to_string()}
                    </Badge>
                </div>

                <div class="page__header-right">
                    <Space>
                        <Show when=move || !config_names.get().is_empty()>
                            <UiSelect
                                value=selected_config
                                options=config_names
                                placeholder="Select Configuration"
                                on_change=Callback::new(move |name: String| {
                                    state.update(|s| s.load_config(&name));
                                })
                            />
                        </Show>

                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=handle_export
                            disabled=Signal::derive(move || visible_orders().is_empty())
                        >
                            {icon("download")}
                            " CSV"
                        </Button>

                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| dialog_open.set(true)
                        >
                            {icon("filter")}
                            " Configure Filters"
                        </Button>

                        {move || {
                            let count = active_filters.get();
                            if count > 0 {
                                view! {
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                        {count.to_string()}
                                    </Badge>
                                }
                                    .into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                    </Space>
                </div>
            </div>

            <div style="margin-bottom: 8px; display: flex; gap: 15px; font-size: 14px; color: #666;">
                <span>
                    "Total: "
                    <strong style="color: #333;">{move || visible_orders().len()}</strong>
                </span>
                <span>
                    "Selected: "
                    <strong style="color: #2196F3;">{move || selected_signal.get().len()}</strong>
                </span>
            </div>

            <Show
                when=move || !visible_orders().is_empty()
                fallback=|| view! {
                    <div class="empty-state" style="padding: 48px; text-align: center; color: #888; border: 1px solid #eee; border-radius: 4px;">
                        "No work orders match the current filters."
                    </div>
                }
            >
                <Table attr:style="width: 100%; min-width: 900px;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                visible_ids=visible_ids
                                selected=selected_signal
                                on_change=Callback::new(toggle_all_visible)
                            />
                            <TableHeaderCell min_width=90.0>"Prod ID"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"Prod Type"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Component Status"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"Dig Prod Status"</TableHeaderCell>
                            <TableHeaderCell min_width=170.0>"Phys Prod Status"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Print By Date"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Ship By Date"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible_orders()
                            key=|order| order.id.clone()
                            children=move |order: WorkOrder| {
                                let dig_color = digital_status_color(&order.digital_status);
                                let phys_color = physical_status_color(&order.physical_status);
                                view! {
                                    <TableRow>
                                        <TableCellCheckbox
                                            item_id=order.id.clone()
                                            selected=selected_signal
                                            on_change=Callback::new(toggle_selection)
                                        />

                                        <TableCell>
                                            <TableCellLayout>{order.id.clone()}</TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout>
                                                <Tooltip lines=order.parts.clone()>
                                                    <span>{order.product_type.clone()}</span>
                                                </Tooltip>
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout>
                                                <Tooltip lines=order.component_details.clone()>
                                                    <span>{order.component_status.clone()}</span>
                                                </Tooltip>
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge appearance=BadgeAppearance::Tint color=dig_color>
                                                    {order.digital_status.clone()}
                                                </Badge>
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge appearance=BadgeAppearance::Tint color=phys_color>
                                                    {order.physical_status.clone()}
                                                </Badge>
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout>{format_date(&order.print_by)}</TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout>{format_date(&order.ship_by)}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>

            <FilterConfigDialog open=dialog_open state=state />
        </div>
    }
}
