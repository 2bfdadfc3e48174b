//! Dialect-driven SQL rendering.
//!
//! A [`Dialect`] pairs a per-database [`DialectConfig`] (quoting, literal
//! formats, operator/aggregate syntax, pre/post statements) with the render
//! logic that turns an operation model from the `model` crate into SQL text.
//! Rendering is a pure, synchronous transformation; a dialect instance is a
//! plain configuration value the caller constructs and owns.

pub mod config;
pub mod dialect;
pub mod error;
pub mod render;
pub mod variants;

pub use config::{DialectConfig, QuoteStyle};
pub use dialect::Dialect;
pub use error::RenderError;
