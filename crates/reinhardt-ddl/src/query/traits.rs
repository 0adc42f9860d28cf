//! Statement traits
//!
//! This module defines the trait shared by every DDL statement.

use std::fmt::Debug;

use crate::{
	backend::{MySqlQueryBuilder, QueryBuilder},
	error::Result,
};

/// Trait for building DDL statements
///
/// Every statement can be rendered through any [`QueryBuilder`] backend.
pub trait QueryStatementBuilder: Debug {
	/// Render this statement with the given backend.
	///
	/// # Examples
	///
	/// ```rust
	/// use reinhardt_ddl::prelude::*;
	///
	/// let mut stmt = Query::drop_table();
	/// stmt.table("users").if_exists();
	///
	/// let sql = stmt.build_any(&MySqlQueryBuilder::new()).unwrap();
	/// assert_eq!(sql, "DROP TABLE IF EXISTS `users`;");
	/// ```
	fn build_any(&self, query_builder: &dyn QueryBuilder) -> Result<String>;

	/// Render this statement with a concrete backend.
	///
	/// This is a convenience method that wraps `build_any()`.
	fn build<T: QueryBuilder>(&self, query_builder: T) -> Result<String>
	where
		Self: Sized,
	{
		self.build_any(&query_builder)
	}

	/// Render this statement with the default MySQL backend and settings.
	fn to_sql(&self) -> Result<String> {
		self.build_any(&MySqlQueryBuilder::new())
	}
}
