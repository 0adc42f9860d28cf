//! SQL Backend implementations
//!
//! This module provides the SQL generation backend for MySQL-dialect DDL.

use crate::{
	error::Result,
	query::{
		CreateDatabaseStatement, CreateTableStatement, DropDatabaseStatement, DropTableStatement,
	},
	value::Value,
};

mod mysql;
mod sql_writer;

pub use mysql::MySqlQueryBuilder;
pub use sql_writer::SqlWriter;

/// Query builder trait for generating SQL from DDL statements
///
/// # Implementations
///
/// - [`MySqlQueryBuilder`] - MySQL backend
///
/// # Examples
///
/// ```rust
/// use reinhardt_ddl::prelude::*;
///
/// let builder = MySqlQueryBuilder::new();
/// let mut stmt = Query::drop_database();
/// stmt.name("shop");
///
/// assert_eq!(builder.build_drop_database(&stmt).unwrap(), "DROP DATABASE `shop`;");
/// ```
pub trait QueryBuilder {
	/// Build DROP TABLE statement
	///
	/// # Errors
	///
	/// Fails when no table name was set or a name segment is empty.
	fn build_drop_table(&self, stmt: &DropTableStatement) -> Result<String>;

	/// Build CREATE TABLE statement
	///
	/// # Errors
	///
	/// Fails when no table name was set, no columns were added, or a column
	/// definition is incomplete.
	fn build_create_table(&self, stmt: &CreateTableStatement) -> Result<String>;

	/// Build DROP DATABASE statement
	fn build_drop_database(&self, stmt: &DropDatabaseStatement) -> Result<String>;

	/// Build CREATE DATABASE statement
	///
	/// # Errors
	///
	/// Fails when no database name was set or the character set or
	/// collation is not a bare name.
	fn build_create_database(&self, stmt: &CreateDatabaseStatement) -> Result<String>;

	/// Escape an identifier
	///
	/// # Arguments
	///
	/// * `ident` - The identifier to escape
	///
	/// # Returns
	///
	/// The escaped identifier with backend-specific quoting
	fn escape_identifier(&self, ident: &str) -> String;

	/// Format a value as an inline SQL literal
	///
	/// # Errors
	///
	/// Fails for values that have no SQL literal, such as NaN.
	fn format_value(&self, value: &Value) -> Result<String>;
}
