//! Identifier, table, field and value formatting.

use crate::config::{DialectConfig, QuoteStyle};
use crate::error::RenderError;
use crate::render::{Renderer, select};
use chrono::NaiveDateTime;
use model::expr::SqlValue;
use model::field::{AggregateField, Field, SortDirection};
use model::table::Table;

/// Fixed marker emitted before any alias text. Aliases are validated like
/// identifiers but emitted raw, so the marker plus validation is what keeps
/// a caller from smuggling extra SQL through an alias.
const ALIAS_MARKER: &str = " AS ";

/// Datetime sentinel that renders as the `NULL` token instead of a literal.
pub fn null_date() -> NaiveDateTime {
    NaiveDateTime::MIN
}

/// Validates a raw name against the configured quote characters and wraps it.
///
/// With no quoting configured the name must not contain blank spaces.
pub fn quote_identifier(config: &DialectConfig, name: &str) -> Result<String, RenderError> {
    validate_identifier(config, name)?;
    Ok(match config.identifier_quotes {
        QuoteStyle::None => name.to_string(),
        QuoteStyle::Same(q) => format!("{q}{name}{q}"),
        QuoteStyle::Pair(open, close) => format!("{open}{name}{close}"),
    })
}

fn validate_identifier(config: &DialectConfig, name: &str) -> Result<(), RenderError> {
    let bad = match config.identifier_quotes {
        QuoteStyle::None => name.contains(' '),
        QuoteStyle::Same(q) => name.contains(q),
        QuoteStyle::Pair(open, close) => name.contains(open) || name.contains(close),
    };
    if bad {
        return Err(RenderError::InvalidIdentifier(name.to_string()));
    }
    Ok(())
}

/// Formats a table reference. The dialect's name prefix/suffix wrap the raw
/// name before quoting; the alias is only emitted when `with_alias` is set.
pub fn format_table(
    config: &DialectConfig,
    table: &Table,
    with_alias: bool,
) -> Result<String, RenderError> {
    let mut raw = table.name.clone();
    if let Some(prefix) = config.table_prefix {
        raw.insert_str(0, prefix);
    }
    if let Some(suffix) = config.table_suffix {
        raw.push_str(suffix);
    }

    let mut out = match &table.schema {
        Some(schema) => format!(
            "{}.{}",
            quote_identifier(config, schema)?,
            quote_identifier(config, &raw)?
        ),
        None => quote_identifier(config, &raw)?,
    };

    if with_alias && let Some(alias) = &table.alias {
        validate_identifier(config, alias)?;
        out.push_str(ALIAS_MARKER);
        out.push_str(alias);
    }
    Ok(out)
}

/// Formats a quoted name, qualified by a table alias when one is present.
pub fn format_qualified(
    config: &DialectConfig,
    name: &str,
    table_alias: Option<&str>,
) -> Result<String, RenderError> {
    let quoted = quote_identifier(config, name)?;
    match table_alias {
        Some(alias) => {
            validate_identifier(config, alias)?;
            Ok(format!("{alias}.{quoted}"))
        }
        None => Ok(quoted),
    }
}

/// Renders one field reference; the match over [`Field`] is exhaustive.
pub fn format_field(config: &DialectConfig, field: &Field) -> Result<String, RenderError> {
    match field {
        Field::Plain(name) => quote_identifier(config, name),
        Field::Display(display) => {
            let mut out =
                format_qualified(config, &display.name, display.table_alias.as_deref())?;
            if let Some(alias) = &display.output_alias {
                validate_identifier(config, alias)?;
                out.push_str(ALIAS_MARKER);
                out.push_str(alias);
            }
            Ok(out)
        }
        Field::Aggregate(aggregate) => format_aggregate(config, aggregate),
        Field::OrderBy(order) => {
            let mut out = format_qualified(config, &order.name, order.table_alias.as_deref())?;
            if order.direction == SortDirection::Desc {
                out.push_str(" DESC");
            }
            Ok(out)
        }
    }
}

fn format_aggregate(
    config: &DialectConfig,
    aggregate: &AggregateField,
) -> Result<String, RenderError> {
    let template = config
        .aggregates
        .get(&aggregate.function)
        .ok_or(RenderError::UnsupportedAggregate(aggregate.function))?;
    let inner = if aggregate.name == "*" {
        "*".to_string()
    } else {
        format_qualified(config, &aggregate.name, aggregate.table_alias.as_deref())?
    };
    Ok(template.replace("{value}", &inner))
}

/// Renders one operand as literal SQL text; the match over [`SqlValue`] is
/// exhaustive, so there is no stringify fallback for unknown shapes.
pub fn format_value(config: &DialectConfig, value: &SqlValue) -> Result<String, RenderError> {
    match value {
        SqlValue::Field(field) => format_field(config, field),
        SqlValue::Text(text) => Ok(quote_literal(config, text)),
        SqlValue::Int(n) => Ok(n.to_string()),
        SqlValue::Float(n) => Ok(n.to_string()),
        SqlValue::Bool(b) => Ok(if *b { "1" } else { "0" }.to_string()),
        SqlValue::DateTime(dt) => {
            if *dt == null_date() {
                return Ok("NULL".to_string());
            }
            let pattern = format!("{} {}", config.date_format, config.time_format);
            Ok(quote_literal(config, &dt.format(&pattern).to_string()))
        }
        SqlValue::Null => Ok("NULL".to_string()),
        SqlValue::List(items) => {
            let rendered = items
                .iter()
                .map(|item| format_value(config, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rendered.join(", "))
        }
        SqlValue::Select(op) => {
            let mut sub = Renderer::new(config);
            select::render(op, None, &mut sub)?;
            Ok(format!("({})", sub.finish()))
        }
    }
}

/// Wraps a string in the literal quote, doubling the quote inside the value.
fn quote_literal(config: &DialectConfig, text: &str) -> String {
    let q = config.literal_quote;
    let doubled: String = format!("{q}{q}");
    format!("{q}{}{q}", text.replace(q, &doubled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::field::AggregateFunction;

    #[test]
    fn test_quote_identifier_rejects_embedded_quote() {
        let config = DialectConfig::ansi();
        let err = quote_identifier(&config, "us\"ers").unwrap_err();
        assert_eq!(err, RenderError::InvalidIdentifier("us\"ers".to_string()));
    }

    #[test]
    fn test_unquoted_identifier_rejects_blank_space() {
        let mut config = DialectConfig::ansi();
        config.identifier_quotes = QuoteStyle::None;
        assert!(quote_identifier(&config, "users").is_ok());
        assert!(matches!(
            quote_identifier(&config, "use rs"),
            Err(RenderError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_pair_quoting_rejects_either_bracket() {
        let mut config = DialectConfig::ansi();
        config.identifier_quotes = QuoteStyle::Pair('[', ']');
        assert_eq!(quote_identifier(&config, "users").unwrap(), "[users]");
        assert!(quote_identifier(&config, "use]rs").is_err());
        assert!(quote_identifier(&config, "[users").is_err());
    }

    #[test]
    fn test_format_table_with_schema_prefix_and_alias() {
        let mut config = DialectConfig::ansi();
        config.table_prefix = Some("app_");
        let table = Table::new("users").with_schema("public").with_alias("u");
        assert_eq!(
            format_table(&config, &table, true).unwrap(),
            "\"public\".\"app_users\" AS u"
        );
        assert_eq!(
            format_table(&config, &table, false).unwrap(),
            "\"public\".\"app_users\""
        );
    }

    #[test]
    fn test_table_alias_is_validated_like_an_identifier() {
        let config = DialectConfig::ansi();
        let table = Table::new("users").with_alias("u\" WHERE 1=1 --");
        assert!(matches!(
            format_table(&config, &table, true),
            Err(RenderError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_string_literal_doubles_embedded_quote() {
        let config = DialectConfig::ansi();
        let rendered = format_value(&config, &SqlValue::Text("O'Brien".to_string())).unwrap();
        assert_eq!(rendered, "'O''Brien'");
    }

    #[test]
    fn test_boolean_renders_as_one_or_zero() {
        let config = DialectConfig::ansi();
        assert_eq!(format_value(&config, &SqlValue::Bool(true)).unwrap(), "1");
        assert_eq!(format_value(&config, &SqlValue::Bool(false)).unwrap(), "0");
    }

    #[test]
    fn test_minimum_date_renders_as_null() {
        let config = DialectConfig::ansi();
        let rendered = format_value(&config, &SqlValue::DateTime(null_date())).unwrap();
        assert_eq!(rendered, "NULL");
    }

    #[test]
    fn test_datetime_combines_date_and_time_patterns() {
        let config = DialectConfig::ansi();
        let dt = chrono::NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(13, 45, 30)
            .unwrap();
        let rendered = format_value(&config, &SqlValue::DateTime(dt)).unwrap();
        assert_eq!(rendered, "'2024-03-09 13:45:30'");
    }

    #[test]
    fn test_list_renders_comma_joined() {
        let config = DialectConfig::ansi();
        let list = SqlValue::List(vec![
            SqlValue::Int(1),
            SqlValue::Text("x".to_string()),
            SqlValue::Bool(true),
        ]);
        assert_eq!(format_value(&config, &list).unwrap(), "1, 'x', 1");
    }

    #[test]
    fn test_aggregate_star_is_not_quoted() {
        let config = DialectConfig::ansi();
        let field = Field::aggregate("*", AggregateFunction::Count, None);
        assert_eq!(format_field(&config, &field).unwrap(), "COUNT(*)");
    }

    #[test]
    fn test_aggregate_with_qualified_column() {
        let config = DialectConfig::ansi();
        let field = Field::aggregate("amount", AggregateFunction::Sum, Some("o"));
        assert_eq!(format_field(&config, &field).unwrap(), "SUM(o.\"amount\")");
    }

    #[test]
    fn test_missing_aggregate_template_is_reported() {
        let mut config = DialectConfig::ansi();
        config.aggregates.remove(&AggregateFunction::Avg);
        let field = Field::aggregate("amount", AggregateFunction::Avg, None);
        assert_eq!(
            format_field(&config, &field).unwrap_err(),
            RenderError::UnsupportedAggregate(AggregateFunction::Avg)
        );
    }

    #[test]
    fn test_display_field_with_output_alias() {
        let config = DialectConfig::ansi();
        let field = Field::display("name", Some("u"), Some("user_name"));
        assert_eq!(
            format_field(&config, &field).unwrap(),
            "u.\"name\" AS user_name"
        );
    }
}
