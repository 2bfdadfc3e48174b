//! Typed field references used in select lists, ordering and expressions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregateFunction {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A field qualified by a table alias, optionally renamed in the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayField {
    pub name: String,
    pub table_alias: Option<String>,
    /// Output alias emitted after the `AS` marker.
    pub output_alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateField {
    /// Column name, or `*` for COUNT(*)-style aggregates.
    pub name: String,
    pub function: AggregateFunction,
    pub table_alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderByField {
    pub name: String,
    pub table_alias: Option<String>,
    pub direction: SortDirection,
}

/// The closed set of field shapes the renderer dispatches over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Field {
    Plain(String),
    Display(DisplayField),
    Aggregate(AggregateField),
    OrderBy(OrderByField),
}

impl Field {
    pub fn display(name: &str, table_alias: Option<&str>, output_alias: Option<&str>) -> Self {
        Field::Display(DisplayField {
            name: name.to_string(),
            table_alias: table_alias.map(str::to_string),
            output_alias: output_alias.map(str::to_string),
        })
    }

    pub fn aggregate(name: &str, function: AggregateFunction, table_alias: Option<&str>) -> Self {
        Field::Aggregate(AggregateField {
            name: name.to_string(),
            function,
            table_alias: table_alias.map(str::to_string),
        })
    }
}

impl OrderByField {
    pub fn new(name: &str, table_alias: Option<&str>, direction: SortDirection) -> Self {
        OrderByField {
            name: name.to_string(),
            table_alias: table_alias.map(str::to_string),
            direction,
        }
    }
}
