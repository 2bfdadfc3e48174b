//! Core rendering trait and context for converting operation models to SQL.

use crate::config::DialectConfig;
use crate::error::RenderError;

pub mod delete;
pub mod expr;
pub mod insert;
pub mod select;
pub mod update;
pub mod value;

/// A trait for any model node that can be rendered into SQL text.
pub trait Render {
    fn render(&self, r: &mut Renderer) -> Result<(), RenderError>;
}

/// Accumulates the SQL text during rendering and gives the render
/// functions access to the dialect configuration.
pub struct Renderer<'a> {
    pub sql: String,
    pub config: &'a DialectConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a DialectConfig) -> Self {
        Self {
            sql: String::new(),
            config,
        }
    }

    /// Consumes the renderer and returns the final SQL string.
    pub fn finish(self) -> String {
        self.sql
    }

    /// Starts a new line unless the buffer is still empty.
    pub fn newline(&mut self) {
        if !self.sql.is_empty() {
            self.sql.push('\n');
        }
    }

    /// Pushes two spaces per nesting level.
    pub fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.sql.push_str("  ");
        }
    }
}
