//! Compact filter-string syntax.
//!
//! Turns strings like `"age gt=30;name=John;ids in=(1,2,3)"` into an
//! ordered list of typed [`FilterDescriptor`]s. An external adapter converts
//! descriptors into WHERE expression trees; this crate only parses and
//! infers value types. Parsing never fails: fragments without an `=` are
//! dropped silently.

pub mod descriptor;
pub mod parser;

pub use descriptor::{FilterDescriptor, FilterOperator, FilterValue, Scalar, ValueKind};
pub use parser::parse;
