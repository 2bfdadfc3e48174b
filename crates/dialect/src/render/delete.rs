//! Renders DELETE statements.

use crate::error::RenderError;
use crate::render::{Render, Renderer, expr, value};
use model::ops::Delete;

impl Render for Delete {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        if self.table.name.is_empty() {
            return Err(RenderError::MissingTable);
        }

        r.sql.push_str("DELETE FROM ");
        r.sql
            .push_str(&value::format_table(r.config, &self.table, true)?);

        if !self.filter.is_empty() {
            r.newline();
            r.sql.push_str("WHERE");
            expr::render_sequence(r, &self.filter, 1)?;
        }
        Ok(())
    }
}
