//! Per-column filter conditions for number and text columns.

use std::cmp::Ordering;
use std::str::FromStr;

use num_bigint::BigInt;
use strum::IntoEnumIterator;

use super::column::FilterKind;

/// Parses a cell or operand as an integer. Explorer values are decimal
/// integer strings that routinely exceed 64 bits (wei).
pub fn parse_number(s: &str) -> Option<BigInt> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIter, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum NumberCondition {
    #[default]
    Equals,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    InRange,
    Blank,
    NotBlank,
}

impl NumberCondition {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Equals => "Equals",
            Self::NotEqual => "Does not equal",
            Self::LessThan => "Less than",
            Self::LessThanOrEqual => "Less than or equal to",
            Self::GreaterThan => "Greater than",
            Self::GreaterThanOrEqual => "Greater than or equal to",
            Self::InRange => "Between",
            Self::Blank => "Blank",
            Self::NotBlank => "Not blank",
        }
    }

    pub fn needs_operand(&self) -> bool {
        !matches!(self, Self::Blank | Self::NotBlank)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIter, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum TextCondition {
    #[default]
    Contains,
    NotContains,
    Equals,
    NotEqual,
    StartsWith,
    EndsWith,
    Blank,
    NotBlank,
}

impl TextCondition {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contains => "Contains",
            Self::NotContains => "Does not contain",
            Self::Equals => "Equals",
            Self::NotEqual => "Does not equal",
            Self::StartsWith => "Begins with",
            Self::EndsWith => "Ends with",
            Self::Blank => "Blank",
            Self::NotBlank => "Not blank",
        }
    }

    pub fn needs_operand(&self) -> bool {
        !matches!(self, Self::Blank | Self::NotBlank)
    }
}

/// A filter on one column, holding the operands as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnFilter {
    Number {
        condition: NumberCondition,
        value: String,
        /// Upper bound for [`NumberCondition::InRange`].
        value_to: String,
    },
    Text {
        condition: TextCondition,
        value: String,
    },
}

impl ColumnFilter {
    /// An inactive filter with the kind's default condition.
    pub fn new(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Number => Self::Number {
                condition: NumberCondition::default(),
                value: String::new(),
                value_to: String::new(),
            },
            FilterKind::Text => Self::Text {
                condition: TextCondition::default(),
                value: String::new(),
            },
        }
    }

    /// Whether the filter currently restricts anything. Filters with missing
    /// or unparseable operands are ignored rather than hiding every row.
    pub fn is_active(&self) -> bool {
        match self {
            Self::Number {
                condition,
                value,
                value_to,
            } => match condition {
                NumberCondition::Blank | NumberCondition::NotBlank => true,
                NumberCondition::InRange => {
                    parse_number(value).is_some() && parse_number(value_to).is_some()
                }
                _ => parse_number(value).is_some(),
            },
            Self::Text { condition, value } => !condition.needs_operand() || !value.is_empty(),
        }
    }

    /// `(id, label)` of every condition valid for this filter's kind.
    pub fn condition_options(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            Self::Number { .. } => NumberCondition::iter()
                .map(|c| (<&'static str>::from(c), c.label()))
                .collect(),
            Self::Text { .. } => TextCondition::iter()
                .map(|c| (<&'static str>::from(c), c.label()))
                .collect(),
        }
    }

    pub fn condition_id(&self) -> &'static str {
        match self {
            Self::Number { condition, .. } => condition.into(),
            Self::Text { condition, .. } => condition.into(),
        }
    }

    /// Switches condition by id, keeping the operands. Unknown ids are ignored.
    pub fn set_condition(&mut self, id: &str) {
        match self {
            Self::Number { condition, .. } => {
                if let Ok(c) = NumberCondition::from_str(id) {
                    *condition = c;
                }
            }
            Self::Text { condition, .. } => {
                if let Ok(c) = TextCondition::from_str(id) {
                    *condition = c;
                }
            }
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Number { value, .. } | Self::Text { value, .. } => value,
        }
    }

    pub fn set_value(&mut self, new_value: String) {
        match self {
            Self::Number { value, .. } | Self::Text { value, .. } => *value = new_value,
        }
    }

    /// The upper bound, present only while a number filter is a range.
    pub fn value_to(&self) -> Option<&str> {
        match self {
            Self::Number {
                condition: NumberCondition::InRange,
                value_to,
                ..
            } => Some(value_to.as_str()),
            _ => None,
        }
    }

    pub fn set_value_to(&mut self, new_value: String) {
        if let Self::Number { value_to, .. } = self {
            *value_to = new_value;
        }
    }

    pub fn needs_operand(&self) -> bool {
        match self {
            Self::Number { condition, .. } => condition.needs_operand(),
            Self::Text { condition, .. } => condition.needs_operand(),
        }
    }

    /// Tests one cell. Inactive filters match everything.
    pub fn matches(&self, cell: &str) -> bool {
        if !self.is_active() {
            return true;
        }
        match self {
            Self::Number {
                condition,
                value,
                value_to,
            } => number_matches(*condition, value, value_to, cell),
            Self::Text { condition, value } => text_matches(*condition, value, cell),
        }
    }
}

fn number_matches(condition: NumberCondition, value: &str, value_to: &str, cell: &str) -> bool {
    let blank = cell.trim().is_empty();
    match condition {
        NumberCondition::Blank => blank,
        NumberCondition::NotBlank => !blank,
        NumberCondition::InRange => {
            match (parse_number(cell), parse_number(value), parse_number(value_to)) {
                (Some(cell), Some(from), Some(to)) => cell > from && cell < to,
                _ => false,
            }
        }
        _ => match (parse_number(cell), parse_number(value)) {
            (Some(cell), Some(operand)) => ordering_matches(condition, cell.cmp(&operand)),
            _ => false,
        },
    }
}

fn ordering_matches(condition: NumberCondition, ordering: Ordering) -> bool {
    match condition {
        NumberCondition::Equals => ordering == Ordering::Equal,
        NumberCondition::NotEqual => ordering != Ordering::Equal,
        NumberCondition::LessThan => ordering == Ordering::Less,
        NumberCondition::LessThanOrEqual => ordering != Ordering::Greater,
        NumberCondition::GreaterThan => ordering == Ordering::Greater,
        NumberCondition::GreaterThanOrEqual => ordering != Ordering::Less,
        _ => false,
    }
}

fn text_matches(condition: TextCondition, value: &str, cell: &str) -> bool {
    let cell = cell.to_lowercase();
    let value = value.to_lowercase();
    match condition {
        TextCondition::Contains => cell.contains(&value),
        TextCondition::NotContains => !cell.contains(&value),
        TextCondition::Equals => cell == value,
        TextCondition::NotEqual => cell != value,
        TextCondition::StartsWith => cell.starts_with(&value),
        TextCondition::EndsWith => cell.ends_with(&value),
        TextCondition::Blank => cell.trim().is_empty(),
        TextCondition::NotBlank => !cell.trim().is_empty(),
    }
}
