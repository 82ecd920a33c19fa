use std::cmp::Ordering;

use api::transaction_record::TransactionField;

use super::column::FilterKind;
use super::filter::parse_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The single active sort of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortModel {
    pub field: TransactionField,
    pub kind: FilterKind,
    pub direction: SortDirection,
}

/// Next sort after a header click on `field`: ascending, then descending,
/// then unsorted. Clicking another column starts it at ascending.
pub fn next_sort(
    current: Option<SortModel>,
    field: TransactionField,
    kind: FilterKind,
) -> Option<SortModel> {
    match current {
        Some(sort) if sort.field == field => match sort.direction {
            SortDirection::Ascending => Some(SortModel {
                direction: SortDirection::Descending,
                ..sort
            }),
            SortDirection::Descending => None,
        },
        _ => Some(SortModel {
            field,
            kind,
            direction: SortDirection::Ascending,
        }),
    }
}

/// Compares two cells. Number cells that do not parse order before all
/// numbers.
pub fn compare_cells(kind: FilterKind, a: &str, b: &str) -> Ordering {
    match kind {
        FilterKind::Number => parse_number(a).cmp(&parse_number(b)),
        FilterKind::Text => a.cmp(b),
    }
}
