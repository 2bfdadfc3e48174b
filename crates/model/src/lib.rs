//! Shared data model for the SQL rendering toolkit.
//!
//! Operation models (`Select`, `Insert`, `Update`, `Delete`), typed field
//! references and boolean expression trees. All of these are plain values
//! assembled by the caller per compile request and handed to a dialect for
//! rendering; nothing in here holds long-lived state.

use crate::expr::SqlValue;
use crate::field::Field;

pub mod expr;
pub mod field;
pub mod macros;
pub mod ops;
pub mod table;

pub fn field(name: &str) -> Field {
    Field::Plain(name.to_string())
}

pub fn text(val: &str) -> SqlValue {
    SqlValue::Text(val.to_string())
}
