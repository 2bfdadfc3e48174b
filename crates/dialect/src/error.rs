use model::expr::Operator;
use model::field::AggregateFunction;
use thiserror::Error;

/// All errors raised while rendering an operation to SQL.
///
/// Every variant is fatal to the compile call: a failed render yields no
/// usable partial SQL and nothing is retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("statement requires at least one table")]
    MissingTable,

    #[error("statement requires at least one assignment")]
    MissingAssignments,

    #[error("DISTINCT and GROUP BY cannot be combined")]
    ConflictingOptions,

    #[error("GROUP BY requires an explicit field list")]
    InvalidGroupByUsage,

    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("no syntax configured for operator {0:?}")]
    UnsupportedOperator(Operator),

    #[error("no syntax configured for aggregate {0:?}")]
    UnsupportedAggregate(AggregateFunction),

    #[error("BETWEEN requires exactly two values, got {0}")]
    MalformedBetweenValue(String),

    #[error("INSERT from SELECT requires a source select")]
    MissingSelectSource,
}
