//=============================================================================
// File: src/components/data_grid.rs
//=============================================================================
use api::transaction_record::TransactionField;
use api::transaction_record::TransactionRecord;
use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::pico::Select;
use crate::grid::column::ColumnDef;
use crate::grid::filter::ColumnFilter;
use crate::grid::GridModel;
use crate::presenter::GridPresenter;

pub type TransactionGrid = GridPresenter<GridModel>;

#[component]
fn SortableHeader(column: ColumnDef, presenter: Signal<TransactionGrid>) -> Element {
    let direction = presenter
        .read()
        .grid()
        .and_then(|g| g.sort_direction(column.field));
    let arrow_char = direction.map(|d| d.arrow()).unwrap_or("\u{00A0}");

    rsx! {
        th {
            style: format!("{}{}", "position: sticky; top: 0; background: var(--pico-card-background-color); z-index: 20; cursor: pointer; white-space: nowrap; ", column.header_style()),
            onclick: move |_| {
                presenter.with_mut(|p| {
                    if let Some(grid) = p.grid_mut() {
                        grid.cycle_sort(column.field);
                    }
                });
            },
            "{column.header}"
            span {
                style: "display: inline-block; width: 1.2em; text-align: right;",
                "{arrow_char}"
            }
        }
    }
}

#[component]
fn FilterCell(field: TransactionField, presenter: Signal<TransactionGrid>) -> Element {
    let Some(filter) = presenter.read().grid().and_then(|g| g.filter(field)) else {
        return rsx! { th {} };
    };

    // Applies an edit to a copy of the column's filter and stores it back.
    let mut edit = move |change: Box<dyn FnOnce(&mut ColumnFilter)>| {
        presenter.with_mut(|p| {
            if let Some(grid) = p.grid_mut() {
                if let Some(mut filter) = grid.filter(field) {
                    change(&mut filter);
                    grid.set_filter(field, filter);
                }
            }
        });
    };

    rsx! {
        th {
            style: "vertical-align: top; font-weight: normal;",
            Select {
                options: filter.condition_options(),
                selected: filter.condition_id(),
                on_change: move |id: String| edit(Box::new(move |f: &mut ColumnFilter| f.set_condition(&id))),
            }
            if filter.needs_operand() {
                input {
                    r#type: "text",
                    placeholder: "Filter...",
                    style: "margin-bottom: 0.25rem; padding: 2px 4px; font-size: 0.8rem; height: auto;",
                    value: "{filter.value()}",
                    oninput: move |evt| {
                        let value = evt.value();
                        edit(Box::new(move |f: &mut ColumnFilter| f.set_value(value)));
                    },
                }
            }
            if let Some(value_to) = filter.value_to() {
                input {
                    r#type: "text",
                    placeholder: "To",
                    style: "margin-bottom: 0; padding: 2px 4px; font-size: 0.8rem; height: auto;",
                    value: "{value_to}",
                    oninput: move |evt| {
                        let value = evt.value();
                        edit(Box::new(move |f: &mut ColumnFilter| f.set_value_to(value)));
                    },
                }
            }
        }
    }
}

#[component]
fn GridRow(record: TransactionRecord, columns: Vec<ColumnDef>) -> Element {
    rsx! {
        tr {
            for column in columns {
                td {
                    title: column.tooltip_field.map(|f| record.get(f).to_string()),
                    style: "white-space: nowrap; font-family: var(--pico-font-family-monospace); font-size: 0.85rem;",
                    "{record.get(column.field)}"
                }
            }
        }
    }
}

/// Renders the grid held by `presenter`. Until the grid exists an empty
/// table is rendered, and `on_ready` fires once it is mounted.
#[component]
pub fn DataGrid(presenter: Signal<TransactionGrid>, on_ready: EventHandler<()>) -> Element {
    let presenter_ref = presenter.read();
    let Some(grid) = presenter_ref.grid() else {
        return rsx! {
            table {
                onmounted: move |_| on_ready.call(()),
            }
        };
    };

    let columns: Vec<ColumnDef> = grid.visible_columns().into_iter().copied().collect();
    let rows: Vec<TransactionRecord> = grid.displayed_rows().into_iter().cloned().collect();
    let total = grid.row_count();
    drop(presenter_ref);

    rsx! {
        div {
            style: "overflow-x: auto;",
            table {
                class: "striped",
                thead {
                    tr {
                        for column in columns.iter().copied() {
                            SortableHeader { key: "{column.field}", column, presenter }
                        }
                    }
                    tr {
                        for column in columns.iter() {
                            FilterCell { key: "filter-{column.field}", field: column.field, presenter }
                        }
                    }
                }
                tbody {
                    for (i, record) in rows.iter().enumerate() {
                        GridRow { key: "{i}-{record.hash}", record: record.clone(), columns: columns.clone() }
                    }
                }
            }
        }
        if rows.is_empty() {
            EmptyState {
                title: "No Rows To Show".to_string(),
                description: (total > 0).then(|| format!("All {} transactions are filtered out.", total)),
            }
        } else {
            small {
                style: "color: var(--pico-muted-color);",
                "Showing {rows.len()} of {total} transactions"
            }
        }
    }
}
