//! The `Dialect` trait: per-database configuration plus compile entry points.
//!
//! The default methods are the base compiler; a variant overrides one only
//! where its SQL genuinely differs (e.g. SQLite synthesizing SELECT INTO as
//! CREATE TABLE AS SELECT).

use crate::config::DialectConfig;
use crate::error::RenderError;
use crate::render::{Render, Renderer, insert, select, value};
use model::ops::{Delete, Insert, Select, Update};
use model::table::Table;
use tracing::debug;

pub trait Dialect: Send + Sync {
    fn config(&self) -> &DialectConfig;

    fn name(&self) -> &str {
        self.config().name
    }

    fn select(&self, op: &Select) -> Result<String, RenderError> {
        let mut r = Renderer::new(self.config());
        op.render(&mut r)?;
        debug!(dialect = self.name(), "rendered SELECT");
        Ok(r.finish())
    }

    fn select_into(&self, op: &Select, into: &Table) -> Result<String, RenderError> {
        let mut r = Renderer::new(self.config());
        select::render(op, Some(into), &mut r)?;
        debug!(dialect = self.name(), "rendered SELECT INTO");
        Ok(r.finish())
    }

    fn insert(&self, op: &Insert) -> Result<String, RenderError> {
        let mut r = Renderer::new(self.config());
        op.render(&mut r)?;
        debug!(dialect = self.name(), "rendered INSERT");
        Ok(r.finish())
    }

    fn insert_from_select(&self, op: &Insert) -> Result<String, RenderError> {
        let mut r = Renderer::new(self.config());
        insert::render_from_select(op, &mut r)?;
        debug!(dialect = self.name(), "rendered INSERT from SELECT");
        Ok(r.finish())
    }

    fn update(&self, op: &Update) -> Result<String, RenderError> {
        let mut r = Renderer::new(self.config());
        op.render(&mut r)?;
        debug!(dialect = self.name(), "rendered UPDATE");
        Ok(r.finish())
    }

    fn delete(&self, op: &Delete) -> Result<String, RenderError> {
        let mut r = Renderer::new(self.config());
        op.render(&mut r)?;
        debug!(dialect = self.name(), "rendered DELETE");
        Ok(r.finish())
    }

    /// Joins the dialect's pre-statements, the main statement and its
    /// post-statements, each closed by the statement terminator.
    fn wrap_statement(&self, statement: &str) -> String {
        let config = self.config();
        let mut parts =
            Vec::with_capacity(config.pre_statements.len() + config.post_statements.len() + 1);
        for pre in &config.pre_statements {
            parts.push(format!("{pre}{}", config.terminator));
        }
        parts.push(format!("{statement}{}", config.terminator));
        for post in &config.post_statements {
            parts.push(format!("{post}{}", config.terminator));
        }
        parts.join("\n")
    }
}

/// Shared by variants that lack native SELECT INTO: renders the select on
/// its own and wraps it in CREATE TABLE ... AS.
pub(crate) fn select_into_as_create_table(
    dialect: &dyn Dialect,
    op: &Select,
    into: &Table,
) -> Result<String, RenderError> {
    let dest = value::format_table(dialect.config(), into, false)?;
    let select_sql = dialect.select(op)?;
    Ok(format!("CREATE TABLE {dest} AS\n{select_sql}"))
}
