//! CREATE TABLE statement builder
//!
//! This module provides the `CreateTableStatement` type for building SQL CREATE TABLE queries.

use crate::{
	backend::QueryBuilder,
	error::Result,
	types::{ColumnDef, IntoName, Name},
};

use super::traits::QueryStatementBuilder;

/// CREATE TABLE statement builder
///
/// This struct provides a fluent API for constructing CREATE TABLE queries.
///
/// # Examples
///
/// ```rust
/// use reinhardt_ddl::prelude::*;
///
/// let mut query = Query::create_table();
/// query
///     .table("users")
///     .if_not_exists()
///     .col(
///         ColumnDef::new("id")
///             .column_type(ColumnType::Int { size: Some(11), unsigned: true })
///             .not_null(true)
///             .auto_increment(true)
///             .primary_key(true),
///     )
///     .col(ColumnDef::new("name").column_type(ColumnType::Varchar(100)));
///
/// assert_eq!(
///     query.to_sql().unwrap(),
///     "CREATE TABLE IF NOT EXISTS `users` (\
///      `id` INT(11) UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY, \
///      `name` VARCHAR(100));"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTableStatement {
	pub(crate) table: Option<Name>,
	pub(crate) columns: Vec<ColumnDef>,
	pub(crate) if_not_exists: bool,
}

impl CreateTableStatement {
	/// Create a new CREATE TABLE statement
	pub fn new() -> Self {
		Self::default()
	}

	/// Take the ownership of data in the current [`CreateTableStatement`]
	pub fn take(&mut self) -> Self {
		std::mem::take(self)
	}

	/// Set the table to create
	pub fn table<T>(&mut self, table: T) -> &mut Self
	where
		T: IntoName,
	{
		self.table = Some(table.into_name());
		self
	}

	/// Set the table to create as a raw expression
	pub fn table_raw<S: Into<String>>(&mut self, expression: S) -> &mut Self {
		self.table = Some(Name::raw(expression));
		self
	}

	/// Add IF NOT EXISTS clause
	pub fn if_not_exists(&mut self) -> &mut Self {
		self.if_not_exists = true;
		self
	}

	/// Add a column definition
	pub fn col(&mut self, column: ColumnDef) -> &mut Self {
		self.columns.push(column);
		self
	}

	/// Add multiple column definitions
	pub fn cols<I>(&mut self, columns: I) -> &mut Self
	where
		I: IntoIterator<Item = ColumnDef>,
	{
		self.columns.extend(columns);
		self
	}

	/// Column definitions in declaration order
	pub fn columns(&self) -> &[ColumnDef] {
		&self.columns
	}
}

impl QueryStatementBuilder for CreateTableStatement {
	fn build_any(&self, query_builder: &dyn QueryBuilder) -> Result<String> {
		query_builder.build_create_table(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::ColumnType;
	use rstest::rstest;

	#[rstest]
	fn test_create_table_new() {
		let stmt = CreateTableStatement::new();

		assert!(stmt.table.is_none());
		assert!(stmt.columns.is_empty());
		assert!(!stmt.if_not_exists);
	}

	#[rstest]
	fn test_create_table_keeps_column_order() {
		// Arrange
		let mut stmt = CreateTableStatement::new();

		// Act
		stmt.table("users")
			.col(ColumnDef::new("id").column_type(ColumnType::Int {
				size: None,
				unsigned: false,
			}))
			.cols([
				ColumnDef::new("name").column_type(ColumnType::Text),
				ColumnDef::new("born").column_type(ColumnType::Date),
			]);

		// Assert
		let names: Vec<String> = stmt
			.columns()
			.iter()
			.map(|c| c.name().display_name())
			.collect();
		assert_eq!(names, ["id", "name", "born"]);
	}

	#[rstest]
	fn test_create_table_take() {
		// Arrange
		let mut stmt = CreateTableStatement::new();
		stmt.table("users")
			.if_not_exists()
			.col(ColumnDef::new("id"));

		// Act
		let taken = stmt.take();

		// Assert
		assert!(stmt.table.is_none());
		assert!(stmt.columns.is_empty());
		assert!(!stmt.if_not_exists);
		assert_eq!(taken.columns.len(), 1);
		assert!(taken.if_not_exists);
	}
}
