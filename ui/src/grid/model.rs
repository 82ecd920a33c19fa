use std::collections::BTreeMap;

use api::transaction_record::TransactionField;
use api::transaction_record::TransactionRecord;

use super::column::ColumnDef;
use super::export;
use super::export::ExportError;
use super::export::ExportFile;
use super::filter::ColumnFilter;
use super::sort;
use super::sort::SortDirection;
use super::sort::SortModel;
use super::TableProvider;

#[derive(Debug, Clone, PartialEq)]
struct ColumnState {
    def: ColumnDef,
    visible: bool,
}

/// The in-crate table: row data plus per-column visibility, one sort and
/// any number of column filters.
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    columns: Vec<ColumnState>,
    rows: Vec<TransactionRecord>,
    sort: Option<SortModel>,
    filters: BTreeMap<TransactionField, ColumnFilter>,
}

impl GridModel {
    pub fn new(columns: &[ColumnDef], rows: Vec<TransactionRecord>) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|def| ColumnState { def: *def, visible: true })
                .collect(),
            rows,
            sort: None,
            filters: BTreeMap::new(),
        }
    }

    pub fn column_defs(&self) -> impl Iterator<Item = &ColumnDef> + '_ {
        self.columns.iter().map(|c| &c.def)
    }

    pub fn visible_columns(&self) -> Vec<&ColumnDef> {
        self.columns
            .iter()
            .filter(|c| c.visible)
            .map(|c| &c.def)
            .collect()
    }

    pub fn is_column_visible(&self, field: TransactionField) -> bool {
        self.columns
            .iter()
            .any(|c| c.def.field == field && c.visible)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows after filtering, in sort order.
    pub fn displayed_rows(&self) -> Vec<&TransactionRecord> {
        let mut rows: Vec<&TransactionRecord> = self
            .rows
            .iter()
            .filter(|row| {
                self.filters
                    .iter()
                    .all(|(field, filter)| filter.matches(row.get(*field)))
            })
            .collect();

        if let Some(s) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = sort::compare_cells(s.kind, a.get(s.field), b.get(s.field));
                match s.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }

    pub fn sort(&self) -> Option<SortModel> {
        self.sort
    }

    pub fn sort_direction(&self, field: TransactionField) -> Option<SortDirection> {
        self.sort.filter(|s| s.field == field).map(|s| s.direction)
    }

    /// Advances the sort of `field` one step, as a header click does.
    pub fn cycle_sort(&mut self, field: TransactionField) {
        if let Some(def) = self.column_def(field) {
            self.sort = sort::next_sort(self.sort, field, def.filter);
        }
    }

    /// The column's filter, or a fresh inactive one.
    pub fn filter(&self, field: TransactionField) -> Option<ColumnFilter> {
        self.filters
            .get(&field)
            .cloned()
            .or_else(|| self.column_def(field).map(|def| ColumnFilter::new(def.filter)))
    }

    pub fn set_filter(&mut self, field: TransactionField, filter: ColumnFilter) {
        if self.column_def(field).is_none() {
            return;
        }
        self.filters.insert(field, filter);
    }

    fn column_def(&self, field: TransactionField) -> Option<&ColumnDef> {
        self.column_defs().find(|def| def.field == field)
    }
}

impl TableProvider for GridModel {
    fn set_row_data(&mut self, rows: Vec<TransactionRecord>) {
        self.rows = rows;
    }

    fn displayed_row_count(&self) -> usize {
        self.displayed_rows().len()
    }

    fn set_column_visible(&mut self, field: TransactionField, visible: bool) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.def.field == field) {
            column.visible = visible;
        }
    }

    fn export_data_as_csv(&self) -> Result<ExportFile, ExportError> {
        export::to_csv(&self.visible_columns(), &self.displayed_rows())
    }

    fn export_data_as_spreadsheet(&self) -> Result<ExportFile, ExportError> {
        export::to_spreadsheet(&self.visible_columns(), &self.displayed_rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::column::TRANSACTION_COLUMNS;

    fn record(block: &str, gas_used: &str, function_name: &str) -> TransactionRecord {
        TransactionRecord {
            block_number: block.into(),
            hash: format!("0x{}", block),
            gas_used: gas_used.into(),
            function_name: function_name.into(),
            ..Default::default()
        }
    }

    fn sample_grid() -> GridModel {
        GridModel::new(
            &TRANSACTION_COLUMNS,
            vec![
                record("102", "52000", "transfer(address,uint256)"),
                record("100", "21000", ""),
                record("101", "130000", "approve(address,uint256)"),
            ],
        )
    }

    fn blocks(grid: &GridModel) -> Vec<&str> {
        grid.displayed_rows()
            .iter()
            .map(|r| r.block_number.as_str())
            .collect()
    }

    #[test]
    fn displays_every_row_in_source_order() {
        let grid = sample_grid();
        assert_eq!(grid.displayed_row_count(), 3);
        assert_eq!(blocks(&grid), ["102", "100", "101"]);
        assert_eq!(grid.visible_columns().len(), 8);
    }

    #[test]
    fn single_record_maps_to_columns() {
        let grid = GridModel::new(
            &TRANSACTION_COLUMNS,
            vec![TransactionRecord {
                block_number: "100".into(),
                hash: "0xabc".into(),
                gas_used: "21000".into(),
                ..Default::default()
            }],
        );

        let rows = grid.displayed_rows();
        assert_eq!(rows.len(), 1);
        let cells: Vec<&str> = grid
            .visible_columns()
            .iter()
            .map(|c| rows[0].get(c.field))
            .collect();
        assert_eq!(cells, ["100", "0xabc", "", "", "", "", "21000", ""]);
    }

    #[test]
    fn sorting_numbers_both_ways() {
        let mut grid = sample_grid();
        grid.cycle_sort(TransactionField::GasUsed);
        assert_eq!(blocks(&grid), ["100", "102", "101"]);
        assert_eq!(
            grid.sort_direction(TransactionField::GasUsed),
            Some(SortDirection::Ascending)
        );

        grid.cycle_sort(TransactionField::GasUsed);
        assert_eq!(blocks(&grid), ["101", "102", "100"]);

        grid.cycle_sort(TransactionField::GasUsed);
        assert_eq!(grid.sort(), None);
        assert_eq!(blocks(&grid), ["102", "100", "101"]);
    }

    #[test]
    fn filters_combine() {
        let mut grid = sample_grid();
        let mut gas = grid.filter(TransactionField::GasUsed).unwrap();
        gas.set_condition("greaterThan");
        gas.set_value("30000".into());
        grid.set_filter(TransactionField::GasUsed, gas);
        assert_eq!(blocks(&grid), ["102", "101"]);

        let mut name = grid.filter(TransactionField::FunctionName).unwrap();
        name.set_value("approve".into());
        grid.set_filter(TransactionField::FunctionName, name);
        assert_eq!(blocks(&grid), ["101"]);
    }

    #[test]
    fn filters_apply_to_hidden_columns() {
        let mut grid = sample_grid();
        let mut name = grid.filter(TransactionField::FunctionName).unwrap();
        name.set_condition("blank");
        grid.set_filter(TransactionField::FunctionName, name);
        grid.set_column_visible(TransactionField::FunctionName, false);

        assert_eq!(blocks(&grid), ["100"]);
        assert!(!grid.is_column_visible(TransactionField::FunctionName));
    }

    #[test]
    fn hiding_and_showing_columns() {
        let mut grid = sample_grid();
        grid.set_column_visible(TransactionField::Hash, false);
        assert_eq!(grid.visible_columns().len(), 7);
        assert!(grid
            .visible_columns()
            .iter()
            .all(|c| c.field != TransactionField::Hash));

        grid.set_column_visible(TransactionField::Hash, true);
        assert_eq!(grid.visible_columns()[1].field, TransactionField::Hash);
    }

    #[test]
    fn replacing_rows_keeps_sort_and_filters() {
        let mut grid = sample_grid();
        grid.cycle_sort(TransactionField::BlockNumber);
        grid.set_row_data(vec![record("9", "1", ""), record("8", "1", "")]);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(blocks(&grid), ["8", "9"]);
    }

    #[test]
    fn exports_follow_the_view() {
        let mut grid = sample_grid();
        grid.set_column_visible(TransactionField::Hash, false);
        grid.cycle_sort(TransactionField::BlockNumber);

        let csv = String::from_utf8(grid.export_data_as_csv().unwrap().bytes).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(!lines[0].contains("\"Hash\""));
        assert!(lines[1].starts_with("\"100\",\"\""));

        let xml = String::from_utf8(grid.export_data_as_spreadsheet().unwrap().bytes).unwrap();
        assert_eq!(xml.matches("<Row>").count(), 4);
    }
}
