//! DROP TABLE statement builder
//!
//! This module provides the `DropTableStatement` type for building SQL DROP TABLE queries.

use crate::{
	backend::QueryBuilder,
	error::Result,
	types::{IntoName, Name},
};

use super::traits::QueryStatementBuilder;

/// DROP TABLE statement builder
///
/// # Examples
///
/// ```rust
/// use reinhardt_ddl::prelude::*;
///
/// // DROP TABLE `users`;
/// let mut query = Query::drop_table();
/// query.table("users");
/// assert_eq!(query.to_sql().unwrap(), "DROP TABLE `users`;");
///
/// // DROP TABLE IF EXISTS `users`;
/// let mut query = Query::drop_table();
/// query.table("users").if_exists();
/// assert_eq!(query.to_sql().unwrap(), "DROP TABLE IF EXISTS `users`;");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropTableStatement {
	pub(crate) table: Option<Name>,
	pub(crate) if_exists: bool,
}

impl DropTableStatement {
	/// Create a new DROP TABLE statement
	pub fn new() -> Self {
		Self::default()
	}

	/// Take the ownership of data in the current [`DropTableStatement`]
	pub fn take(&mut self) -> Self {
		std::mem::take(self)
	}

	/// Set the table to drop
	pub fn table<T>(&mut self, table: T) -> &mut Self
	where
		T: IntoName,
	{
		self.table = Some(table.into_name());
		self
	}

	/// Set the table to drop as a raw expression
	pub fn table_raw<S: Into<String>>(&mut self, expression: S) -> &mut Self {
		self.table = Some(Name::raw(expression));
		self
	}

	/// Add IF EXISTS clause
	pub fn if_exists(&mut self) -> &mut Self {
		self.if_exists = true;
		self
	}
}

impl QueryStatementBuilder for DropTableStatement {
	fn build_any(&self, query_builder: &dyn QueryBuilder) -> Result<String> {
		query_builder.build_drop_table(self)
	}
}
