// File: src/screens/transactions.rs

use std::fmt::Display;

use api::transaction_record::gas_used_series;
use api::transaction_record::GasUsedPoint;
use api::transaction_record::TransactionRecord;
use dioxus::prelude::*;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;

use crate::components::data_grid::DataGrid;
use crate::components::data_grid::TransactionGrid;
use crate::components::grid_toolbar::GridToolbar;
use crate::components::pico::Card;
use crate::grid::column::TRANSACTION_COLUMNS;
use crate::grid::GridModel;

/// Rows and gas series to publish after a fetch. A failed fetch is logged
/// and publishes nothing.
fn fetched_state<E: Display>(
    result: Result<Vec<TransactionRecord>, E>,
) -> Option<(Vec<TransactionRecord>, Vec<GasUsedPoint>)> {
    match result {
        Ok(records) => {
            info!("Fetched {} transactions", records.len());
            let series = gas_used_series(&records);
            Some((records, series))
        }
        Err(e) => {
            error!("Error fetching transactions: {}", e);
            None
        }
    }
}

/// Creates the grid once the table is mounted, seeded with whatever rows
/// already arrived.
fn ready_grid(presenter: &mut TransactionGrid, rows: &[TransactionRecord]) {
    let grid = GridModel::new(&TRANSACTION_COLUMNS, rows.to_vec());
    info!("Grid ready with {} rows", grid.row_count());
    presenter.on_grid_ready(grid);
}

#[component]
pub fn TransactionsScreen() -> Element {
    let mut row_data = use_signal(Vec::<TransactionRecord>::new);
    // Kept for a gas usage chart; not rendered yet.
    let mut gas_used_chart_data = use_signal(Vec::<GasUsedPoint>::new);
    let mut presenter = use_signal(TransactionGrid::new);

    // Fetched once on mount.
    use_future(move || async move {
        if let Some((records, series)) = fetched_state(api::account_transactions().await) {
            gas_used_chart_data.set(series);
            row_data.set(records);
        }
    });

    use_effect(move || {
        let rows = row_data();
        presenter.with_mut(|p| p.set_row_data(rows));
    });

    let on_ready = move |_: ()| {
        let rows = row_data.peek();
        presenter.with_mut(|p| ready_grid(p, &rows));
    };

    rsx! {
        Card {
            h3 { "Transactions" }
            GridToolbar {
                columns: TRANSACTION_COLUMNS.to_vec(),
                presenter,
            }
            DataGrid { presenter, on_ready }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TableProvider;

    fn records(blocks: &[&str]) -> Vec<TransactionRecord> {
        blocks
            .iter()
            .map(|b| TransactionRecord {
                block_number: b.to_string(),
                gas_used: "21000".into(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn failed_fetch_publishes_nothing() {
        assert_eq!(fetched_state::<String>(Err("rate limited".into())), None);
    }

    #[test]
    fn fetch_publishes_rows_and_series_in_order() {
        let (rows, series) = fetched_state::<String>(Ok(records(&["2", "1"]))).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].block_number, "2");
        assert_eq!(series[1].gas_used, "21000");
    }

    #[test]
    fn rows_before_ready_seed_the_grid() {
        let mut presenter = TransactionGrid::new();
        let (rows, _) = fetched_state::<String>(Ok(records(&["1", "2", "3"]))).unwrap();

        // The effect fires before the table mounts and is dropped.
        presenter.set_row_data(rows.clone());
        assert!(presenter.grid().is_none());

        ready_grid(&mut presenter, &rows);
        assert_eq!(presenter.grid().unwrap().displayed_row_count(), 3);
    }

    #[test]
    fn rows_after_ready_reach_the_grid() {
        let mut presenter = TransactionGrid::new();
        ready_grid(&mut presenter, &[]);
        assert_eq!(presenter.grid().unwrap().displayed_row_count(), 0);

        let (rows, _) = fetched_state::<String>(Ok(records(&["1", "2"]))).unwrap();
        presenter.set_row_data(rows);
        assert_eq!(presenter.grid().unwrap().displayed_row_count(), 2);
    }

    #[test]
    fn failed_fetch_leaves_an_empty_grid() {
        let mut presenter = TransactionGrid::new();
        ready_grid(&mut presenter, &[]);
        assert!(fetched_state::<String>(Err("timeout".into())).is_none());
        assert_eq!(presenter.grid().unwrap().displayed_row_count(), 0);
        assert_eq!(presenter.export_spreadsheet(), None);
    }
}
