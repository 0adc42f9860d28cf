//! Type definitions for names, column types and column definitions.
//!
//! - [`Name`]: a table, database or column name (dotted, aliased or raw)
//! - [`IntoName`]: conversion trait for names
//! - [`ColumnType`]: SQL column types (INT, VARCHAR, ENUM, ...)
//! - [`ColumnDef`]: column definition for CREATE TABLE

mod column_def;
mod column_type;
mod name;

pub use column_def::ColumnDef;
pub use column_type::ColumnType;
pub use name::{IntoName, Name};
