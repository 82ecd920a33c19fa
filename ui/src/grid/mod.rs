//! The transaction table: column definitions, filtering, sorting and export.
//!
//! Screens talk to the table through [`TableProvider`] so the in-crate
//! [`GridModel`] can be swapped for another table implementation.

pub mod column;
pub mod export;
pub mod filter;
pub mod model;
pub mod sort;

use api::transaction_record::TransactionField;
use api::transaction_record::TransactionRecord;

pub use export::ExportError;
pub use export::ExportFile;
pub use model::GridModel;

/// What the presenter needs from a table implementation.
pub trait TableProvider {
    /// Replaces all rows. Filters and sort are kept.
    fn set_row_data(&mut self, rows: Vec<TransactionRecord>);

    /// Rows left after the current filters.
    fn displayed_row_count(&self) -> usize;

    fn set_column_visible(&mut self, field: TransactionField, visible: bool);

    /// Displayed rows and visible columns as CSV.
    fn export_data_as_csv(&self) -> Result<ExportFile, ExportError>;

    /// Displayed rows and visible columns as a spreadsheet.
    fn export_data_as_spreadsheet(&self) -> Result<ExportFile, ExportError>;
}
