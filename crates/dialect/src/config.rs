//! Construction-time configuration for one database product.

use model::expr::Operator;
use model::field::AggregateFunction;
use std::collections::HashMap;

/// Identifier quoting: none, one character used on both sides, or an
/// opening/closing pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    None,
    Same(char),
    Pair(char, char),
}

/// Everything the renderer needs to know about a database product.
///
/// Built once when the dialect is constructed and read-only afterward;
/// variants start from [`DialectConfig::ansi`] and merge their overrides
/// over it.
#[derive(Debug, Clone)]
pub struct DialectConfig {
    pub name: &'static str,

    pub identifier_quotes: QuoteStyle,

    /// Character wrapping string and date literals; occurrences inside a
    /// value are escaped by doubling.
    pub literal_quote: char,

    /// chrono pattern for the date half of a datetime literal.
    pub date_format: &'static str,

    /// chrono pattern for the time half of a datetime literal.
    pub time_format: &'static str,

    /// Inserted around the raw table name before quoting.
    pub table_prefix: Option<&'static str>,
    pub table_suffix: Option<&'static str>,

    /// Advisory only; exposed for callers, never enforced by the renderer.
    pub reserved_words: Vec<&'static str>,

    /// Session-setup statements emitted before the main statement.
    pub pre_statements: Vec<String>,

    /// Statements emitted after the main statement.
    pub post_statements: Vec<String>,

    pub terminator: &'static str,

    /// Operator syntax templates. Templates may contain the placeholders
    /// `{value}`, `{value1}` and `{value2}`; comparison operators take no
    /// placeholder and have their operand appended.
    pub operators: HashMap<Operator, String>,

    /// Aggregate syntax templates, each with a `{value}` placeholder.
    pub aggregates: HashMap<AggregateFunction, String>,
}

impl DialectConfig {
    /// The ANSI baseline every variant composes over.
    pub fn ansi() -> Self {
        let operators = [
            (Operator::Equal, "="),
            (Operator::NotEqual, "<>"),
            (Operator::GreaterThan, ">"),
            (Operator::GreaterOrEqual, ">="),
            (Operator::LessThan, "<"),
            (Operator::LessOrEqual, "<="),
            (Operator::In, "IN ({value})"),
            (Operator::NotIn, "NOT IN ({value})"),
            (Operator::Like, "LIKE {value}"),
            (Operator::NotLike, "NOT LIKE {value}"),
            (Operator::IsNull, "IS NULL"),
            (Operator::IsNotNull, "IS NOT NULL"),
            (Operator::Between, "BETWEEN {value1} AND {value2}"),
            (Operator::NotBetween, "NOT BETWEEN {value1} AND {value2}"),
        ]
        .into_iter()
        .map(|(op, tpl)| (op, tpl.to_string()))
        .collect();

        let aggregates = [
            (AggregateFunction::Count, "COUNT({value})"),
            (AggregateFunction::Sum, "SUM({value})"),
            (AggregateFunction::Avg, "AVG({value})"),
            (AggregateFunction::Min, "MIN({value})"),
            (AggregateFunction::Max, "MAX({value})"),
        ]
        .into_iter()
        .map(|(func, tpl)| (func, tpl.to_string()))
        .collect();

        DialectConfig {
            name: "ANSI",
            identifier_quotes: QuoteStyle::Same('"'),
            literal_quote: '\'',
            date_format: "%Y-%m-%d",
            time_format: "%H:%M:%S",
            table_prefix: None,
            table_suffix: None,
            reserved_words: Vec::new(),
            pre_statements: Vec::new(),
            post_statements: Vec::new(),
            terminator: ";",
            operators,
            aggregates,
        }
    }

    /// Merges one operator syntax override over the defaults.
    pub fn with_operator(mut self, operator: Operator, template: &str) -> Self {
        self.operators.insert(operator, template.to_string());
        self
    }

    /// Merges one aggregate syntax override over the defaults.
    pub fn with_aggregate(mut self, function: AggregateFunction, template: &str) -> Self {
        self.aggregates.insert(function, template.to_string());
        self
    }
}
