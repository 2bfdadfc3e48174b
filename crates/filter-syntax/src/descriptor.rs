//! Parsed filter descriptors and their value types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Operators reachable from the compact syntax. Absence of an operator
/// token in the input means [`FilterOperator::Equal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    Equal,
    NotEqual,
    In,
    NotIn,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
}

impl FilterOperator {
    /// Maps an operator token, case-insensitively. `None` means the token
    /// is not an operator and belongs to the field name.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "NEQ" => Some(FilterOperator::NotEqual),
            "IN" => Some(FilterOperator::In),
            "NOTIN" => Some(FilterOperator::NotIn),
            "GT" => Some(FilterOperator::GreaterThan),
            "GE" => Some(FilterOperator::GreaterOrEqual),
            "LT" => Some(FilterOperator::LessThan),
            "LE" => Some(FilterOperator::LessOrEqual),
            _ => None,
        }
    }

    pub fn is_multi_valued(&self) -> bool {
        matches!(self, FilterOperator::In | FilterOperator::NotIn)
    }
}

/// The type a scalar token was inferred as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Numeric,
    Date,
    Text,
}

/// One inferred scalar value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
}

impl Scalar {
    pub fn kind(&self) -> ValueKind {
        match self {
            Scalar::Number(_) => ValueKind::Numeric,
            Scalar::Date(_) => ValueKind::Date,
            Scalar::Text(_) => ValueKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    Scalar(Scalar),
    /// IN/NOTIN lists; each element is inferred independently.
    List(Vec<Scalar>),
}

/// One parsed filter: `(field, operator, value, declared kind)` plus the
/// original fragment text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDescriptor {
    pub field: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
    /// For lists this is the kind of the *first* inferred element; later
    /// elements keep their own inferred types.
    pub kind: ValueKind,
    /// The fragment exactly as it appeared in the input.
    pub raw: String,
}
