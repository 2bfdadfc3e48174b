//! Renders boolean expression trees into WHERE-clause text.
//!
//! Connector normalization is positional: the last item of the top-level
//! sequence and the last child of every group render no trailing connector,
//! whatever their `connector` field says. The input tree is never mutated,
//! so callers may share one tree across concurrent renders.

use crate::error::RenderError;
use crate::render::{Renderer, value};
use model::expr::{Connector, Expression, FilterCondition, Operator, SqlValue};

/// Renders a sequence of expressions, one per line, at the given indent
/// level.
pub fn render_sequence(
    r: &mut Renderer,
    items: &[Expression],
    level: usize,
) -> Result<(), RenderError> {
    for (i, item) in items.iter().enumerate() {
        render_item(r, item, level, i + 1 == items.len())?;
    }
    Ok(())
}

fn render_item(
    r: &mut Renderer,
    item: &Expression,
    level: usize,
    is_last: bool,
) -> Result<(), RenderError> {
    match item {
        Expression::Simple(condition) => {
            r.newline();
            r.indent(level);
            let left = value::format_field(r.config, &condition.left)?;
            let operation = format_operation(r, condition)?;
            r.sql.push_str(&left);
            r.sql.push(' ');
            r.sql.push_str(&operation);
            push_connector(r, condition.connector, is_last);
        }
        Expression::Group(group) => {
            // An empty group is skipped entirely.
            if group.items.is_empty() {
                return Ok(());
            }
            r.newline();
            r.indent(level);
            r.sql.push('(');
            for (i, child) in group.items.iter().enumerate() {
                render_item(r, child, level + 1, i + 1 == group.items.len())?;
            }
            r.newline();
            r.indent(level);
            r.sql.push(')');
            push_connector(r, group.connector, is_last);
        }
    }
    Ok(())
}

fn push_connector(r: &mut Renderer, connector: Connector, is_last: bool) {
    let effective = if is_last { Connector::None } else { connector };
    match effective {
        Connector::And => r.sql.push_str(" AND"),
        Connector::Or => r.sql.push_str(" OR"),
        Connector::None => {}
    }
}

/// Substitutes the operand into the dialect's operator template.
fn format_operation(r: &Renderer, condition: &FilterCondition) -> Result<String, RenderError> {
    let template = r
        .config
        .operators
        .get(&condition.operator)
        .ok_or(RenderError::UnsupportedOperator(condition.operator))?;

    match condition.operator {
        // Comparisons carry no placeholder; the operand is appended.
        Operator::Equal
        | Operator::NotEqual
        | Operator::GreaterThan
        | Operator::GreaterOrEqual
        | Operator::LessThan
        | Operator::LessOrEqual => {
            let operand = value::format_value(r.config, &condition.value)?;
            Ok(format!("{template} {operand}"))
        }

        Operator::In | Operator::NotIn | Operator::Like | Operator::NotLike => {
            let operand = value::format_value(r.config, &condition.value)?;
            Ok(template.replace("{value}", &operand))
        }

        // Null checks take no operand at all.
        Operator::IsNull | Operator::IsNotNull => Ok(template.clone()),

        Operator::Between | Operator::NotBetween => {
            let SqlValue::List(bounds) = &condition.value else {
                return Err(RenderError::MalformedBetweenValue(
                    "a non-list operand".to_string(),
                ));
            };
            if bounds.len() != 2 {
                return Err(RenderError::MalformedBetweenValue(bounds.len().to_string()));
            }
            let low = value::format_value(r.config, &bounds[0])?;
            let high = value::format_value(r.config, &bounds[1])?;
            Ok(template.replace("{value1}", &low).replace("{value2}", &high))
        }
    }
}
