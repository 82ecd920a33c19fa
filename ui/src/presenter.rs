//! User actions on the transaction grid: the two exports and column toggles.

use api::transaction_record::TransactionField;
use api::transaction_record::TransactionRecord;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::warn;

use crate::grid::ExportFile;
use crate::grid::TableProvider;

/// Field ids the user has hidden, in the order they were hidden.
///
/// Mirrors the table's own visibility state; the table stays authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenColumns(Vec<TransactionField>);

impl HiddenColumns {
    /// Records a visibility change: visible fields are removed, hidden
    /// fields are added once.
    pub fn apply(&mut self, field: TransactionField, visible: bool) {
        if visible {
            self.0.retain(|f| *f != field);
        } else if !self.contains(field) {
            self.0.push(field);
        }
    }

    pub fn contains(&self, field: TransactionField) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Holds the grid handle once the table reports ready, plus the
/// hidden-columns mirror.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPresenter<P> {
    grid: Option<P>,
    hidden_columns: HiddenColumns,
}

impl<P> Default for GridPresenter<P> {
    fn default() -> Self {
        Self {
            grid: None,
            hidden_columns: HiddenColumns::default(),
        }
    }
}

impl<P: TableProvider> GridPresenter<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the table has initialized. Earlier actions are no-ops.
    pub fn on_grid_ready(&mut self, grid: P) {
        self.grid = Some(grid);
    }

    pub fn grid(&self) -> Option<&P> {
        self.grid.as_ref()
    }

    pub fn grid_mut(&mut self) -> Option<&mut P> {
        self.grid.as_mut()
    }

    pub fn hidden_columns(&self) -> &HiddenColumns {
        &self.hidden_columns
    }

    /// Forwards fresh rows to the table, if there is one yet.
    pub fn set_row_data(&mut self, rows: Vec<TransactionRecord>) {
        if let Some(grid) = self.grid.as_mut() {
            grid.set_row_data(rows);
        }
    }

    /// CSV of what is on screen. Zero displayed rows still yields the header.
    pub fn export_csv(&self) -> Option<ExportFile> {
        let Some(grid) = self.grid.as_ref() else {
            warn!("Grid or Grid API is not available.");
            return None;
        };

        match grid.export_data_as_csv() {
            Ok(file) => Some(file),
            Err(e) => {
                error!("CSV export failed: {}", e);
                None
            }
        }
    }

    /// Spreadsheet of what is on screen, only when at least one row shows.
    pub fn export_spreadsheet(&self) -> Option<ExportFile> {
        let grid = match self.grid.as_ref() {
            Some(grid) if grid.displayed_row_count() > 0 => grid,
            _ => {
                warn!("No data available for export.");
                return None;
            }
        };

        match grid.export_data_as_spreadsheet() {
            Ok(file) => Some(file),
            Err(e) => {
                error!("Spreadsheet export failed: {}", e);
                None
            }
        }
    }

    /// Shows or hides a column and keeps the mirror in step.
    pub fn toggle_column_visibility(&mut self, field: TransactionField, visible: bool) {
        if let Some(grid) = self.grid.as_mut() {
            grid.set_column_visible(field, visible);
            self.hidden_columns.apply(field, visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::column::TRANSACTION_COLUMNS;
    use crate::grid::ExportError;
    use crate::grid::GridModel;

    fn ready_presenter(rows: Vec<TransactionRecord>) -> GridPresenter<GridModel> {
        let mut presenter = GridPresenter::new();
        presenter.on_grid_ready(GridModel::new(&TRANSACTION_COLUMNS, rows));
        presenter
    }

    fn one_row() -> Vec<TransactionRecord> {
        vec![TransactionRecord {
            block_number: "100".into(),
            hash: "0xabc".into(),
            gas_used: "21000".into(),
            ..Default::default()
        }]
    }

    #[test]
    fn mirror_has_set_semantics() {
        let mut hidden = HiddenColumns::default();
        hidden.apply(TransactionField::Gas, false);
        hidden.apply(TransactionField::Hash, false);
        hidden.apply(TransactionField::Gas, false);
        assert_eq!(
            hidden,
            HiddenColumns(vec![TransactionField::Gas, TransactionField::Hash])
        );

        hidden.apply(TransactionField::Gas, true);
        assert!(!hidden.contains(TransactionField::Gas));
        assert_eq!(hidden, HiddenColumns(vec![TransactionField::Hash]));

        hidden.apply(TransactionField::To, true);
        assert_eq!(hidden, HiddenColumns(vec![TransactionField::Hash]));
    }

    #[test]
    fn actions_before_ready_do_nothing() {
        let mut presenter = GridPresenter::<GridModel>::new();
        assert!(presenter.grid().is_none());
        assert_eq!(presenter.export_csv(), None);
        assert_eq!(presenter.export_spreadsheet(), None);

        presenter.toggle_column_visibility(TransactionField::Hash, false);
        assert!(presenter.hidden_columns().is_empty());

        presenter.set_row_data(one_row());
        assert!(presenter.grid().is_none());
    }

    #[test]
    fn toggling_updates_grid_and_mirror() {
        let mut presenter = ready_presenter(one_row());

        presenter.toggle_column_visibility(TransactionField::Hash, false);
        assert!(presenter.hidden_columns().contains(TransactionField::Hash));
        let grid = presenter.grid().unwrap();
        assert!(!grid.is_column_visible(TransactionField::Hash));
        assert_eq!(grid.visible_columns().len(), 7);

        presenter.toggle_column_visibility(TransactionField::Hash, true);
        assert!(presenter.hidden_columns().is_empty());
        assert!(presenter.grid().unwrap().is_column_visible(TransactionField::Hash));
    }

    #[test]
    fn csv_export_with_no_rows_is_header_only() {
        let presenter = ready_presenter(Vec::new());
        let file = presenter.export_csv().expect("csv export should run");
        let text = String::from_utf8(file.bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn spreadsheet_export_needs_displayed_rows() {
        let mut presenter = ready_presenter(Vec::new());
        assert_eq!(presenter.export_spreadsheet(), None);

        presenter.set_row_data(one_row());
        let file = presenter.export_spreadsheet().expect("spreadsheet export should run");
        assert_eq!(file.file_name, "export.xml");

        // Filtered down to nothing counts as no data.
        let grid = presenter.grid_mut().unwrap();
        let mut filter = grid.filter(TransactionField::BlockNumber).unwrap();
        filter.set_value("999".into());
        grid.set_filter(TransactionField::BlockNumber, filter);
        assert_eq!(presenter.export_spreadsheet(), None);
    }

    #[test]
    fn export_reflects_hidden_columns() {
        let mut presenter = ready_presenter(one_row());
        presenter.toggle_column_visibility(TransactionField::To, false);

        let csv = String::from_utf8(presenter.export_csv().unwrap().bytes).unwrap();
        assert!(!csv.contains("\"To\""));
        assert!(csv.contains("\"100\",\"0xabc\""));
    }

    /// A table that always fails to serialize.
    struct BrokenTable;

    impl TableProvider for BrokenTable {
        fn set_row_data(&mut self, _rows: Vec<TransactionRecord>) {}

        fn displayed_row_count(&self) -> usize {
            1
        }

        fn set_column_visible(&mut self, _field: TransactionField, _visible: bool) {}

        fn export_data_as_csv(&self) -> Result<ExportFile, ExportError> {
            Err(std::io::Error::other("disk on fire").into())
        }

        fn export_data_as_spreadsheet(&self) -> Result<ExportFile, ExportError> {
            Err(std::io::Error::other("disk on fire").into())
        }
    }

    #[test]
    fn serializer_failures_are_swallowed() {
        let mut presenter = GridPresenter::new();
        presenter.on_grid_ready(BrokenTable);
        assert_eq!(presenter.export_csv(), None);
        assert_eq!(presenter.export_spreadsheet(), None);
    }
}
