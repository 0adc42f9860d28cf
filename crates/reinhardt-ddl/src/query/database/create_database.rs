//! CREATE DATABASE statement builder

use crate::{
	backend::QueryBuilder,
	error::Result,
	query::traits::QueryStatementBuilder,
	types::{IntoName, Name},
};

/// CREATE DATABASE statement builder
///
/// # Examples
///
/// ```rust
/// use reinhardt_ddl::prelude::*;
///
/// let mut query = Query::create_database();
/// query
///     .name("shop")
///     .if_not_exists()
///     .character_set("utf8mb4")
///     .collate("utf8mb4_unicode_ci");
///
/// assert_eq!(
///     query.to_sql().unwrap(),
///     "CREATE DATABASE IF NOT EXISTS `shop` CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci;"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDatabaseStatement {
	pub(crate) database_name: Option<Name>,
	pub(crate) if_not_exists: bool,
	pub(crate) character_set: Option<String>,
	pub(crate) collate: Option<String>,
}

impl CreateDatabaseStatement {
	/// Create a new CREATE DATABASE statement
	pub fn new() -> Self {
		Self::default()
	}

	/// Take the ownership of data in the current [`CreateDatabaseStatement`]
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

	/// Add IF NOT EXISTS clause
	pub fn if_not_exists(&mut self) -> &mut Self {
		self.if_not_exists = true;
		self
	}

	/// Set the default character set
	pub fn character_set<S: Into<String>>(&mut self, charset: S) -> &mut Self {
		self.character_set = Some(charset.into());
		self
	}

	/// Set the default collation
	pub fn collate<S: Into<String>>(&mut self, collation: S) -> &mut Self {
		self.collate = Some(collation.into());
		self
	}
}

impl QueryStatementBuilder for CreateDatabaseStatement {
	fn build_any(&self, query_builder: &dyn QueryBuilder) -> Result<String> {
		query_builder.build_create_database(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_create_database_new() {
		let stmt = CreateDatabaseStatement::new();

		assert!(stmt.database_name.is_none());
		assert!(!stmt.if_not_exists);
		assert!(stmt.character_set.is_none());
		assert!(stmt.collate.is_none());
	}

	#[rstest]
	fn test_create_database_options() {
		// Arrange
		let mut stmt = CreateDatabaseStatement::new();

		// Act
		stmt.name("shop").character_set("utf8mb4");

		// Assert
		assert_eq!(stmt.database_name, Some(Name::parse("shop")));
		assert_eq!(stmt.character_set.as_deref(), Some("utf8mb4"));
		assert!(stmt.collate.is_none());
	}
}
