//=============================================================================
// File: src/components/grid_toolbar.rs
//=============================================================================
use api::transaction_record::TransactionField;
use dioxus::prelude::*;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;

use crate::compat;
use crate::components::data_grid::TransactionGrid;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Checkbox;
use crate::grid::column::ColumnDef;
use crate::grid::ExportFile;

fn save(file: ExportFile) {
    spawn(async move {
        let name = file.file_name;
        match compat::save_file(file).await {
            Ok(()) => info!("Saved {}", name),
            Err(e) => error!("Failed to save {}: {}", name, e),
        }
    });
}

/// Export buttons and one visibility checkbox per column.
#[component]
pub fn GridToolbar(columns: Vec<ColumnDef>, presenter: Signal<TransactionGrid>) -> Element {
    let hidden = presenter.read().hidden_columns().clone();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 0.75rem;",
            Button {
                on_click: move |_| {
                    if let Some(file) = presenter.read().export_spreadsheet() {
                        save(file);
                    }
                },
                "Download Excel export file"
            }
            Button {
                button_type: ButtonType::Secondary,
                on_click: move |_| {
                    if let Some(file) = presenter.read().export_csv() {
                        save(file);
                    }
                },
                "Download CSV export file"
            }
        }
        fieldset {
            style: "display: flex; flex-wrap: wrap; margin-bottom: 0.75rem;",
            for column in columns {
                ColumnToggle {
                    key: "{column.field}",
                    label: column.header.to_string(),
                    field: column.field,
                    checked: !hidden.contains(column.field),
                    presenter,
                }
            }
        }
    }
}

#[component]
fn ColumnToggle(
    label: String,
    field: TransactionField,
    checked: bool,
    presenter: Signal<TransactionGrid>,
) -> Element {
    rsx! {
        Checkbox {
            label,
            checked,
            on_change: move |visible: bool| {
                presenter.with_mut(|p| p.toggle_column_visibility(field, visible));
            },
        }
    }
}
