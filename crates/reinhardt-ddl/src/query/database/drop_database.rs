//! DROP DATABASE statement builder

use crate::{
	backend::QueryBuilder,
	error::Result,
	query::traits::QueryStatementBuilder,
	types::{IntoName, Name},
};

/// DROP DATABASE statement builder
///
/// # Examples
///
/// ```rust
/// use reinhardt_ddl::prelude::*;
///
/// let mut query = Query::drop_database();
/// query.name("shop").if_exists();
/// assert_eq!(query.to_sql().unwrap(), "DROP DATABASE IF EXISTS `shop`;");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropDatabaseStatement {
	pub(crate) database_name: Option<Name>,
	pub(crate) if_exists: bool,
}

impl DropDatabaseStatement {
	/// Create a new DROP DATABASE statement
	pub fn new() -> Self {
		Self::default()
	}

	/// Take the ownership of data in the current [`DropDatabaseStatement`]
	pub fn take(&mut self) -> Self {
		std::mem::take(self)
	}

	/// Set the database name
	pub fn name<N>(&mut self, name: N) -> &mut Self
	where
		N: IntoName,
	{
		self.database_name = Some(name.into_name());
		self
	}

	/// Set the database name as a raw expression
	pub fn name_raw<S: Into<String>>(&mut self, expression: S) -> &mut Self {
		self.database_name = Some(Name::raw(expression));
		self
	}

	/// Add IF EXISTS clause
	pub fn if_exists(&mut self) -> &mut Self {
		self.if_exists = true;
		self
	}
}

impl QueryStatementBuilder for DropDatabaseStatement {
	fn build_any(&self, query_builder: &dyn QueryBuilder) -> Result<String> {
		query_builder.build_drop_database(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_drop_database_new() {
		let stmt = DropDatabaseStatement::new();

		assert!(stmt.database_name.is_none());
		assert!(!stmt.if_exists);
	}

	#[rstest]
	fn test_drop_database_raw_name() {
		// Arrange
		let mut stmt = DropDatabaseStatement::new();

		// Act
		stmt.name_raw("tenant_42");

		// Assert
		assert_eq!(stmt.database_name, Some(Name::raw("tenant_42")));
	}
}
