//! Fluent migration builder
//!
//! [`Migration`] is a single builder that can render any of the supported
//! DDL statements. The last statement selector called (`drop_table`,
//! `create_table`, `drop_database`, `create_database`) decides what is
//! rendered; selecting a statement clears everything configured before it.
//!
//! Column type and constraint methods apply to the most recently added
//! column:
//!
//! ```rust
//! use reinhardt_ddl::prelude::*;
//!
//! let mut migration = Migration::new();
//! migration
//!     .create_table("users")
//!     .if_not_exists()
//!     .column("id")
//!     .int(Some(11), true)
//!     .not_null()
//!     .auto_increment()
//!     .primary_key()
//!     .column("status")
//!     .enum_of(["active", "banned"])
//!     .default("active");
//!
//! assert_eq!(
//!     migration.to_sql().unwrap(),
//!     "CREATE TABLE IF NOT EXISTS `users` (\
//!      `id` INT(11) UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY, \
//!      `status` ENUM('active', 'banned') DEFAULT 'active');"
//! );
//! ```

use std::fmt;

use crate::{
	backend::{MySqlQueryBuilder, QueryBuilder},
	error::{DdlError, Result},
	query::{
		CreateDatabaseStatement, CreateTableStatement, DropDatabaseStatement, DropTableStatement,
		traits::QueryStatementBuilder,
	},
	settings::DdlSettings,
	types::{ColumnDef, ColumnType, IntoName, Name},
	value::Value,
};

/// Which DDL template a [`Migration`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementType {
	/// `DROP TABLE [IF EXISTS] <name>`
	#[default]
	DropTable,
	/// `CREATE TABLE [IF NOT EXISTS] <name> (<columns>)`
	CreateTable,
	/// `DROP DATABASE [IF EXISTS] <name>`
	DropDatabase,
	/// `CREATE DATABASE [IF NOT EXISTS] <name>`
	CreateDatabase,
}

impl StatementType {
	/// SQL keywords of this statement, used in logs and error messages.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::DropTable => "DROP TABLE",
			Self::CreateTable => "CREATE TABLE",
			Self::DropDatabase => "DROP DATABASE",
			Self::CreateDatabase => "CREATE DATABASE",
		}
	}
}

/// A statement assembled by a [`Migration`].
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
	/// DROP TABLE
	DropTable(DropTableStatement),
	/// CREATE TABLE
	CreateTable(CreateTableStatement),
	/// DROP DATABASE
	DropDatabase(DropDatabaseStatement),
	/// CREATE DATABASE
	CreateDatabase(CreateDatabaseStatement),
}

impl QueryStatementBuilder for Statement {
	fn build_any(&self, query_builder: &dyn QueryBuilder) -> Result<String> {
		match self {
			Self::DropTable(stmt) => query_builder.build_drop_table(stmt),
			Self::CreateTable(stmt) => query_builder.build_create_table(stmt),
			Self::DropDatabase(stmt) => query_builder.build_drop_database(stmt),
			Self::CreateDatabase(stmt) => query_builder.build_create_database(stmt),
		}
	}
}

/// Fluent DDL builder.
///
/// # Examples
///
/// ```rust
/// use reinhardt_ddl::prelude::*;
///
/// let sql = Migration::new().drop_table("users").if_exists().to_sql().unwrap();
/// assert_eq!(sql, "DROP TABLE IF EXISTS `users`;");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Migration {
	statement_type: StatementType,
	target: Option<Name>,
	if_exists: bool,
	if_not_exists: bool,
	character_set: Option<String>,
	collate: Option<String>,
	columns: Vec<ColumnDef>,
	/// First column method called while no column existed
	misplaced: Option<&'static str>,
	settings: DdlSettings,
}

impl Migration {
	/// Create a new builder with default settings
	pub fn new() -> Self {
		Default::default()
	}

	/// Create a new builder with the given settings
	pub fn with_settings(settings: DdlSettings) -> Self {
		Self {
			settings,
			..Default::default()
		}
	}

	/// Settings used by [`to_sql`](QueryStatementBuilder::to_sql)
	pub fn settings(&self) -> &DdlSettings {
		&self.settings
	}

	/// Currently selected statement type
	pub fn statement_type(&self) -> StatementType {
		self.statement_type
	}

	/// Columns added so far
	pub fn columns(&self) -> &[ColumnDef] {
		&self.columns
	}

	fn select(&mut self, statement_type: StatementType, target: Name) -> &mut Self {
		*self = Self {
			statement_type,
			target: Some(target),
			settings: std::mem::take(&mut self.settings),
			..Default::default()
		};
		self
	}

	/// Select `DROP TABLE <name>`
	pub fn drop_table<T: IntoName>(&mut self, table: T) -> &mut Self {
		self.select(StatementType::DropTable, table.into_name())
	}

	/// Select `DROP TABLE` with a raw table expression
	pub fn drop_table_raw<S: Into<String>>(&mut self, expression: S) -> &mut Self {
		self.select(StatementType::DropTable, Name::raw(expression))
	}

	/// Select `CREATE TABLE <name>`
	pub fn create_table<T: IntoName>(&mut self, table: T) -> &mut Self {
		self.select(StatementType::CreateTable, table.into_name())
	}

	/// Select `CREATE TABLE` with a raw table expression
	pub fn create_table_raw<S: Into<String>>(&mut self, expression: S) -> &mut Self {
		self.select(StatementType::CreateTable, Name::raw(expression))
	}

	/// Select `DROP DATABASE <name>`
	pub fn drop_database<T: IntoName>(&mut self, database: T) -> &mut Self {
		self.select(StatementType::DropDatabase, database.into_name())
	}

	/// Select `DROP DATABASE` with a raw database expression
	pub fn drop_database_raw<S: Into<String>>(&mut self, expression: S) -> &mut Self {
		self.select(StatementType::DropDatabase, Name::raw(expression))
	}

	/// Select `CREATE DATABASE <name>`
	pub fn create_database<T: IntoName>(&mut self, database: T) -> &mut Self {
		self.select(StatementType::CreateDatabase, database.into_name())
	}

	/// Select `CREATE DATABASE` with a raw database expression
	pub fn create_database_raw<S: Into<String>>(&mut self, expression: S) -> &mut Self {
		self.select(StatementType::CreateDatabase, Name::raw(expression))
	}

	/// Add IF EXISTS (DROP statements)
	pub fn if_exists(&mut self) -> &mut Self {
		self.if_exists = true;
		self
	}

	/// Add IF NOT EXISTS (CREATE statements)
	pub fn if_not_exists(&mut self) -> &mut Self {
		self.if_not_exists = true;
		self
	}

	/// Default character set (CREATE DATABASE)
	pub fn character_set<S: Into<String>>(&mut self, charset: S) -> &mut Self {
		self.character_set = Some(charset.into());
		self
	}

	/// Default collation (CREATE DATABASE)
	pub fn collate<S: Into<String>>(&mut self, collation: S) -> &mut Self {
		self.collate = Some(collation.into());
		self
	}

	/// Append a column
	pub fn column<T: IntoName>(&mut self, name: T) -> &mut Self {
		self.columns.push(ColumnDef::new(name));
		self
	}

	/// Append a column whose definition is a raw expression
	pub fn column_raw<S: Into<String>>(&mut self, expression: S) -> &mut Self {
		self.columns.push(ColumnDef::raw(expression));
		self
	}

	fn last_column(&mut self, method: &'static str) -> Option<&mut ColumnDef> {
		if self.columns.is_empty() && self.misplaced.is_none() {
			tracing::warn!(method, "column method called before any column was added");
			self.misplaced = Some(method);
		}
		self.columns.last_mut()
	}

	fn set_type(&mut self, method: &'static str, column_type: ColumnType) -> &mut Self {
		if let Some(column) = self.last_column(method) {
			if let Some(previous) = &column.column_type {
				tracing::warn!(
					column = %column.name.display_name(),
					previous = previous.keyword(),
					new = column_type.keyword(),
					"column type overwritten"
				);
			}
			column.column_type = Some(column_type);
		}
		self
	}

	/// Set an arbitrary column type on the last column
	pub fn column_type(&mut self, column_type: ColumnType) -> &mut Self {
		self.set_type("column_type", column_type)
	}

	/// `INT[(size)] [UNSIGNED]`
	pub fn int(&mut self, size: Option<u32>, unsigned: bool) -> &mut Self {
		self.set_type("int", ColumnType::Int { size, unsigned })
	}

	/// `BIGINT[(size)] [UNSIGNED]`
	pub fn big_int(&mut self, size: Option<u32>, unsigned: bool) -> &mut Self {
		self.set_type("big_int", ColumnType::BigInt { size, unsigned })
	}

	/// `TINYINT[(size)] [UNSIGNED]`
	pub fn tiny_int(&mut self, size: Option<u32>, unsigned: bool) -> &mut Self {
		self.set_type("tiny_int", ColumnType::TinyInt { size, unsigned })
	}

	/// `SMALLINT[(size)] [UNSIGNED]`
	pub fn small_int(&mut self, size: Option<u32>, unsigned: bool) -> &mut Self {
		self.set_type("small_int", ColumnType::SmallInt { size, unsigned })
	}

	/// `MEDIUMINT[(size)] [UNSIGNED]`
	pub fn medium_int(&mut self, size: Option<u32>, unsigned: bool) -> &mut Self {
		self.set_type("medium_int", ColumnType::MediumInt { size, unsigned })
	}

	/// `FLOAT[(precision[, scale])]`
	pub fn float(&mut self, precision: Option<u32>, scale: Option<u32>) -> &mut Self {
		self.set_type("float", ColumnType::Float { precision, scale })
	}

	/// `DOUBLE[(precision[, scale])]`
	pub fn double(&mut self, precision: Option<u32>, scale: Option<u32>) -> &mut Self {
		self.set_type("double", ColumnType::Double { precision, scale })
	}

	/// `DECIMAL[(precision[, scale])]`
	pub fn decimal(&mut self, precision: Option<u32>, scale: Option<u32>) -> &mut Self {
		self.set_type("decimal", ColumnType::Decimal { precision, scale })
	}

	/// `TEXT`
	pub fn text(&mut self) -> &mut Self {
		self.set_type("text", ColumnType::Text)
	}

	/// `TINYTEXT`
	pub fn tiny_text(&mut self) -> &mut Self {
		self.set_type("tiny_text", ColumnType::TinyText)
	}

	/// `CHAR(size)`
	pub fn char(&mut self, size: u32) -> &mut Self {
		self.set_type("char", ColumnType::Char(size))
	}

	/// `VARCHAR(size)`
	pub fn varchar(&mut self, size: u32) -> &mut Self {
		self.set_type("varchar", ColumnType::Varchar(size))
	}

	/// `ENUM(...)` with each value rendered as a literal
	pub fn enum_of<I, V>(&mut self, values: I) -> &mut Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		self.set_type("enum_of", ColumnType::enumeration(values))
	}

	/// `SET(...)` with each value rendered as a literal
	pub fn set_of<I, V>(&mut self, values: I) -> &mut Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		self.set_type("set_of", ColumnType::set(values))
	}

	/// `TIME`
	pub fn time(&mut self) -> &mut Self {
		self.set_type("time", ColumnType::Time)
	}

	/// `YEAR`
	pub fn year(&mut self) -> &mut Self {
		self.set_type("year", ColumnType::Year)
	}

	/// `DATE`
	pub fn date(&mut self) -> &mut Self {
		self.set_type("date", ColumnType::Date)
	}

	/// `DATETIME`
	pub fn datetime(&mut self) -> &mut Self {
		self.set_type("datetime", ColumnType::DateTime)
	}

	/// `TIMESTAMP`
	pub fn timestamp(&mut self) -> &mut Self {
		self.set_type("timestamp", ColumnType::Timestamp)
	}

	/// `NOT NULL` on the last column
	pub fn not_null(&mut self) -> &mut Self {
		if let Some(column) = self.last_column("not_null") {
			column.not_null = Some(true);
		}
		self
	}

	/// Explicit `NULL` on the last column
	pub fn nullable(&mut self) -> &mut Self {
		if let Some(column) = self.last_column("nullable") {
			column.not_null = Some(false);
		}
		self
	}

	/// `DEFAULT <literal>` on the last column
	pub fn default<V: Into<Value>>(&mut self, value: V) -> &mut Self {
		if let Some(column) = self.last_column("default") {
			column.default = Some(value.into());
		}
		self
	}

	/// `AUTO_INCREMENT` on the last column
	pub fn auto_increment(&mut self) -> &mut Self {
		if let Some(column) = self.last_column("auto_increment") {
			column.auto_increment = true;
		}
		self
	}

	/// `UNIQUE` on the last column
	pub fn unique(&mut self) -> &mut Self {
		if let Some(column) = self.last_column("unique") {
			column.unique = true;
		}
		self
	}

	/// `PRIMARY KEY` on the last column
	pub fn primary_key(&mut self) -> &mut Self {
		if let Some(column) = self.last_column("primary_key") {
			column.primary_key = true;
		}
		self
	}

	/// `COMMENT '<text>'` on the last column
	pub fn comment<S: Into<String>>(&mut self, comment: S) -> &mut Self {
		if let Some(column) = self.last_column("comment") {
			column.comment = Some(comment.into());
		}
		self
	}

	/// Assemble the selected statement.
	///
	/// Fails with [`DdlError::NoColumn`] if a column method was called
	/// before any column existed.
	pub fn statement(&self) -> Result<Statement> {
		if let Some(method) = self.misplaced {
			return Err(DdlError::NoColumn { method });
		}

		let statement = match self.statement_type {
			StatementType::DropTable => Statement::DropTable(DropTableStatement {
				table: self.target.clone(),
				if_exists: self.if_exists,
			}),
			StatementType::CreateTable => Statement::CreateTable(CreateTableStatement {
				table: self.target.clone(),
				columns: self.columns.clone(),
				if_not_exists: self.if_not_exists,
			}),
			StatementType::DropDatabase => Statement::DropDatabase(DropDatabaseStatement {
				database_name: self.target.clone(),
				if_exists: self.if_exists,
			}),
			StatementType::CreateDatabase => {
				Statement::CreateDatabase(CreateDatabaseStatement {
					database_name: self.target.clone(),
					if_not_exists: self.if_not_exists,
					character_set: self.character_set.clone(),
					collate: self.collate.clone(),
				})
			}
		};
		Ok(statement)
	}
}

impl QueryStatementBuilder for Migration {
	fn build_any(&self, query_builder: &dyn QueryBuilder) -> Result<String> {
		self.statement()?.build_any(query_builder)
	}

	fn to_sql(&self) -> Result<String> {
		self.build_any(&MySqlQueryBuilder::with_settings(self.settings.clone()))
	}
}

/// Renders the SQL, or nothing if the statement is incomplete.
impl fmt::Display for Migration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.to_sql() {
			Ok(sql) => f.write_str(&sql),
			Err(err) => {
				tracing::warn!(error = %err, "migration rendered as empty string");
				Ok(())
			}
		}
	}
}
