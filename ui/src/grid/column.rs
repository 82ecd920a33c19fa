//! Static column definitions of the transaction grid.

use api::transaction_record::TransactionField;

/// How a column's cells are compared when filtering and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Number,
    Text,
}

/// Maps a header to a record field plus its filter kind and sizing hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub header: &'static str,
    pub field: TransactionField,
    pub filter: FilterKind,
    /// Field shown as the cell's hover text.
    pub tooltip_field: Option<TransactionField>,
    pub resizable: bool,
    /// Pixels.
    pub min_width: Option<u32>,
    /// Pixels.
    pub width: Option<u32>,
}

impl ColumnDef {
    const fn new(header: &'static str, field: TransactionField, filter: FilterKind) -> Self {
        Self {
            header,
            field,
            filter,
            tooltip_field: None,
            resizable: false,
            min_width: None,
            width: None,
        }
    }

    /// Inline css for the header cell.
    pub fn header_style(&self) -> String {
        let mut style = String::new();
        if let Some(w) = self.width {
            style.push_str(&format!("width: {}px; ", w));
        }
        if let Some(w) = self.min_width {
            style.push_str(&format!("min-width: {}px; ", w));
        }
        if self.resizable {
            style.push_str("resize: horizontal; overflow: auto; ");
        }
        style
    }
}

pub const TRANSACTION_COLUMNS: [ColumnDef; 8] = [
    ColumnDef {
        tooltip_field: Some(TransactionField::Hash),
        ..ColumnDef::new("Block Number", TransactionField::BlockNumber, FilterKind::Number)
    },
    ColumnDef::new("Hash", TransactionField::Hash, FilterKind::Text),
    ColumnDef::new("To", TransactionField::To, FilterKind::Text),
    ColumnDef::new("Value", TransactionField::Value, FilterKind::Number),
    ColumnDef::new("Gas", TransactionField::Gas, FilterKind::Number),
    ColumnDef::new("Gas Price", TransactionField::GasPrice, FilterKind::Number),
    ColumnDef::new("Gas Used", TransactionField::GasUsed, FilterKind::Number),
    ColumnDef {
        resizable: true,
        min_width: Some(200),
        width: Some(250),
        ..ColumnDef::new("Function Name", TransactionField::FunctionName, FilterKind::Text)
    },
];
