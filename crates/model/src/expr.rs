//! Boolean expression trees attached to WHERE-capable operations.

use crate::field::Field;
use crate::ops::Select;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Comparison and membership operators understood by the dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    In,
    NotIn,
    Like,
    NotLike,
    IsNull,
    IsNotNull,
    Between,
    NotBetween,
}

/// The boolean linkage trailing an expression in a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connector {
    And,
    Or,
    #[default]
    None,
}

/// The closed set of operand shapes a condition can compare against.
///
/// Numbers, text, booleans and dates render as literals; `List` backs
/// IN/BETWEEN operands; `Select` renders as a parenthesized subquery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Field(Field),
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Null,
    List(Vec<SqlValue>),
    Select(Box<Select>),
}

/// A single `field <operator> operand` comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub left: Field,
    pub operator: Operator,
    pub value: SqlValue,
    pub connector: Connector,
}

/// A parenthesized, ordered sequence of expressions sharing one trailing
/// connector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpressionGroup {
    pub items: Vec<Expression>,
    pub connector: Connector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Simple(FilterCondition),
    Group(ExpressionGroup),
}

impl Expression {
    pub fn simple(left: Field, operator: Operator, value: SqlValue, connector: Connector) -> Self {
        Expression::Simple(FilterCondition {
            left,
            operator,
            value,
            connector,
        })
    }

    pub fn group(items: Vec<Expression>, connector: Connector) -> Self {
        Expression::Group(ExpressionGroup { items, connector })
    }
}
