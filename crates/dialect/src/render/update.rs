//! Renders UPDATE statements.

use crate::error::RenderError;
use crate::render::{Render, Renderer, expr, value};
use model::ops::Update;

impl Render for Update {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError> {
        if self.table.name.is_empty() {
            return Err(RenderError::MissingTable);
        }
        if self.assignments.is_empty() {
            return Err(RenderError::MissingAssignments);
        }

        // 1. UPDATE table
        r.sql.push_str("UPDATE ");
        r.sql
            .push_str(&value::format_table(r.config, &self.table, true)?);

        // 2. SET column = value, ...
        r.newline();
        r.sql.push_str("SET ");
        for (i, assignment) in self.assignments.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.sql
                .push_str(&value::quote_identifier(r.config, &assignment.column)?);
            r.sql.push_str(" = ");
            r.sql
                .push_str(&value::format_value(r.config, &assignment.value)?);
        }

        // 3. WHERE
        if !self.filter.is_empty() {
            r.newline();
            r.sql.push_str("WHERE");
            expr::render_sequence(r, &self.filter, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialectConfig;
    use model::expr::{Connector, Expression, Operator, SqlValue};
    use model::ops::Assignment;
    use model::table;

    #[test]
    fn test_render_update_with_where() {
        let op = Update {
            table: table!("users"),
            assignments: vec![
                Assignment::new("name", SqlValue::Text("Bob".to_string())),
                Assignment::new("age", SqlValue::Int(41)),
            ],
            filter: vec![Expression::simple(
                model::field("id"),
                Operator::Equal,
                SqlValue::Int(7),
                Connector::None,
            )],
        };
        let config = DialectConfig::ansi();
        let mut r = Renderer::new(&config);
        op.render(&mut r).unwrap();
        assert_eq!(
            r.finish(),
            "UPDATE \"users\"\nSET \"name\" = 'Bob', \"age\" = 41\nWHERE\n  \"id\" = 7"
        );
    }

    #[test]
    fn test_update_without_where_renders_no_where_keyword() {
        let op = Update {
            table: table!("users"),
            assignments: vec![Assignment::new("active", SqlValue::Bool(false))],
            filter: Vec::new(),
        };
        let config = DialectConfig::ansi();
        let mut r = Renderer::new(&config);
        op.render(&mut r).unwrap();
        assert_eq!(r.finish(), "UPDATE \"users\"\nSET \"active\" = 0");
    }

    #[test]
    fn test_update_requires_assignments() {
        let op = Update {
            table: table!("users"),
            ..Default::default()
        };
        let config = DialectConfig::ansi();
        let mut r = Renderer::new(&config);
        assert_eq!(
            op.render(&mut r).unwrap_err(),
            RenderError::MissingAssignments
        );
    }
}
