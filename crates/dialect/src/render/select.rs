//! Renders SELECT and SELECT ... INTO statements.

use crate::error::RenderError;
use crate::render::{Render, Renderer, expr, value};
use model::field::Field;
use model::ops::Select;
use model::table::Table;

impl Render for Select {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        render(self, None, r)
    }
}

/// Shared body for SELECT and SELECT INTO; `into` carries the destination
/// table when present.
pub fn render(op: &Select, into: Option<&Table>, r: &mut Renderer) -> Result<(), RenderError> {
    if op.tables.is_empty() {
        return Err(RenderError::MissingTable);
    }
    if op.distinct && op.group_by {
        return Err(RenderError::ConflictingOptions);
    }
    if op.group_by && op.fields.is_empty() {
        return Err(RenderError::InvalidGroupByUsage);
    }

    // 1. SELECT list
    r.sql.push_str("SELECT ");
    if op.distinct {
        r.sql.push_str("DISTINCT ");
    }
    if op.fields.is_empty() {
        r.sql.push('*');
    } else {
        for (i, field) in op.fields.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.sql.push_str(&value::format_field(r.config, field)?);
        }
    }

    // 2. INTO; the destination's alias is never rendered
    if let Some(dest) = into {
        r.newline();
        r.sql.push_str("INTO ");
        r.sql.push_str(&value::format_table(r.config, dest, false)?);
    }

    // 3. FROM, one table per line
    r.newline();
    r.sql.push_str("FROM ");
    for (i, table) in op.tables.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(",\n");
        }
        r.sql.push_str(&value::format_table(r.config, table, true)?);
    }

    // 4. WHERE
    if !op.filter.is_empty() {
        r.newline();
        r.sql.push_str("WHERE");
        expr::render_sequence(r, &op.filter, 1)?;
    }

    // 5. GROUP BY, re-derived from the select list with aliases stripped
    if op.group_by {
        render_group_by(op, r)?;
    }

    // 6. ORDER BY, trailing DESC only when descending
    if !op.order_by.is_empty() {
        r.newline();
        r.sql.push_str("ORDER BY ");
        for (i, order) in op.order_by.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.sql
                .push_str(&value::format_field(r.config, &Field::OrderBy(order.clone()))?);
        }
    }

    Ok(())
}

fn render_group_by(op: &Select, r: &mut Renderer) -> Result<(), RenderError> {
    // Aggregates never appear in the grouping list.
    let mut columns = Vec::new();
    for field in &op.fields {
        match field {
            Field::Plain(name) => columns.push(value::quote_identifier(r.config, name)?),
            Field::Display(display) => columns.push(value::format_qualified(
                r.config,
                &display.name,
                display.table_alias.as_deref(),
            )?),
            Field::OrderBy(order) => columns.push(value::format_qualified(
                r.config,
                &order.name,
                order.table_alias.as_deref(),
            )?),
            Field::Aggregate(_) => {}
        }
    }
    // A select list of nothing but aggregates leaves no column to group on.
    if columns.is_empty() {
        return Err(RenderError::InvalidGroupByUsage);
    }
    r.newline();
    r.sql.push_str("GROUP BY ");
    r.sql.push_str(&columns.join(", "));
    Ok(())
}
