//! Renders INSERT statements, with VALUES or a SELECT source.

use crate::error::RenderError;
use crate::render::{Render, Renderer, select, value};
use model::ops::Insert;

impl Render for Insert {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        if self.table.name.is_empty() {
            return Err(RenderError::MissingTable);
        }
        if self.assignments.is_empty() {
            return Err(RenderError::MissingAssignments);
        }

        // 1. INSERT INTO table (...); the table alias is always cleared
        render_head(self, r)?;
        render_columns(self, r)?;

        // 2. VALUES (...)
        r.newline();
        r.sql.push_str("VALUES (");
        for (i, assignment) in self.assignments.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.sql
                .push_str(&value::format_value(r.config, &assignment.value)?);
        }
        r.sql.push(')');
        Ok(())
    }
}

/// Renders `INSERT INTO <table> [(columns)]` followed by the source select.
pub fn render_from_select(op: &Insert, r: &mut Renderer) -> Result<(), RenderError> {
    if op.table.name.is_empty() {
        return Err(RenderError::MissingTable);
    }
    let Some(source) = &op.source else {
        return Err(RenderError::MissingSelectSource);
    };

    render_head(op, r)?;
    if !op.assignments.is_empty() {
        render_columns(op, r)?;
    }
    r.newline();
    select::render(source, None, r)
}

fn render_head(op: &Insert, r: &mut Renderer) -> Result<(), RenderError> {
    r.sql.push_str("INSERT INTO ");
    r.sql
        .push_str(&value::format_table(r.config, &op.table, false)?);
    Ok(())
}

fn render_columns(op: &Insert, r: &mut Renderer) -> Result<(), RenderError> {
    r.sql.push_str(" (");
    for (i, assignment) in op.assignments.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(", ");
        }
        r.sql
            .push_str(&value::quote_identifier(r.config, &assignment.column)?);
    }
    r.sql.push(')');
    Ok(())
}
