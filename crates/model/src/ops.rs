//! Operation models: the pre-rendering representation of statements.

use crate::expr::{Expression, SqlValue};
use crate::field::{Field, OrderByField};
use crate::table::Table;
use serde::{Deserialize, Serialize};

/// A SELECT intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub tables: Vec<Table>,

    /// Explicit select list; empty renders as `*`.
    pub fields: Vec<Field>,

    /// Top-level WHERE sequence. The last entry's connector is normalized
    /// to `None` at render time, not at construction.
    pub filter: Vec<Expression>,

    pub order_by: Vec<OrderByField>,

    pub distinct: bool,

    /// When set, the GROUP BY list is re-derived from `fields` with output
    /// aliases stripped. Mutually exclusive with `distinct`.
    pub group_by: bool,
}

/// One `column = value` pair in an INSERT or UPDATE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub column: String,
    pub value: SqlValue,
}

impl Assignment {
    pub fn new(column: &str, value: SqlValue) -> Self {
        Assignment {
            column: column.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    pub table: Table,
    pub assignments: Vec<Assignment>,
    /// Optional SELECT used as the value source instead of a VALUES list.
    pub source: Option<Box<Select>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub table: Table,
    pub assignments: Vec<Assignment>,
    pub filter: Vec<Expression>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub table: Table,
    pub filter: Vec<Expression>,
}
