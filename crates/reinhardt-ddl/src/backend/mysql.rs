//! MySQL query builder backend
//!
//! This module implements the DDL generation backend for MySQL.

use std::sync::LazyLock;

use regex::Regex;

use super::{QueryBuilder, SqlWriter};
use crate::{
	error::{DdlError, Result},
	query::{
		CreateDatabaseStatement, CreateTableStatement, DropDatabaseStatement, DropTableStatement,
	},
	settings::DdlSettings,
	types::{ColumnDef, ColumnType, Name},
	value::Value,
};

/// Character set and collation names
static OPTION_TOKEN_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("option token pattern is valid"));

/// MySQL query builder
///
/// This struct implements DDL generation for MySQL, using the following conventions:
/// - Identifiers: Backticks (`` `table_name` ``)
/// - Literals: Inlined, never bound as parameters
///
/// # Examples
///
/// ```rust
/// use reinhardt_ddl::prelude::*;
///
/// let builder = MySqlQueryBuilder::new();
/// let mut stmt = Query::drop_table();
/// stmt.table("users").if_exists();
///
/// assert_eq!(builder.build_drop_table(&stmt).unwrap(), "DROP TABLE IF EXISTS `users`;");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MySqlQueryBuilder {
	settings: DdlSettings,
}

impl MySqlQueryBuilder {
	/// Create a new MySQL query builder
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a MySQL query builder with custom settings
	pub fn with_settings(settings: DdlSettings) -> Self {
		Self { settings }
	}

	/// Escape an identifier for MySQL
	///
	/// MySQL uses backticks for identifiers. A lone `*` is left unquoted.
	///
	/// # Returns
	///
	/// The escaped identifier (e.g., `` `user` ``)
	fn escape_iden(&self, ident: &str) -> String {
		if ident == "*" {
			return ident.to_string();
		}
		format!(
			"`{}`",
			self.settings.escape_style.escape_identifier(ident)
		)
	}

	fn write_segment(&self, writer: &mut SqlWriter, segment: &str) -> Result<()> {
		if segment.is_empty() {
			return Err(DdlError::EmptyIdentifier);
		}
		writer.push_identifier(segment, |s| self.escape_iden(s));
		Ok(())
	}

	/// Write a table, database or column name
	fn write_name(&self, writer: &mut SqlWriter, name: &Name) -> Result<()> {
		match name {
			Name::Qualified { segments, alias } => {
				writer.try_push_list(segments, ".", |w, segment| {
					self.write_segment(w, segment)
				})?;
				if let Some(alias) = alias {
					writer.push_keyword("AS");
					writer.push_space();
					self.write_segment(writer, alias)?;
				}
			}
			Name::Raw(expression) if expression.trim().is_empty() => {
				return Err(DdlError::EmptyIdentifier);
			}
			Name::Raw(expression) => writer.push(expression),
		}
		Ok(())
	}

	fn write_target(
		&self,
		writer: &mut SqlWriter,
		name: Option<&Name>,
		statement: &'static str,
	) -> Result<()> {
		let name = name.ok_or(DdlError::MissingName { statement })?;
		writer.push_space();
		self.write_name(writer, name)
	}

	/// Write a column type, e.g. `INT(11) UNSIGNED` or `ENUM('a', 'b')`
	fn write_column_type(&self, writer: &mut SqlWriter, column_type: &ColumnType) -> Result<()> {
		writer.push(column_type.keyword());
		match column_type {
			ColumnType::TinyInt { size, unsigned }
			| ColumnType::SmallInt { size, unsigned }
			| ColumnType::MediumInt { size, unsigned }
			| ColumnType::Int { size, unsigned }
			| ColumnType::BigInt { size, unsigned } => {
				if let Some(size) = size {
					writer.push(&format!("({})", size));
				}
				if *unsigned {
					writer.push_keyword("UNSIGNED");
				}
			}
			ColumnType::Float { precision, scale }
			| ColumnType::Double { precision, scale }
			| ColumnType::Decimal { precision, scale } => match (precision, scale) {
				(Some(precision), Some(scale)) => {
					writer.push(&format!("({}, {})", precision, scale));
				}
				(Some(precision), None) => writer.push(&format!("({})", precision)),
				// Scale alone has no meaning
				(None, _) => {}
			},
			ColumnType::Char(size) | ColumnType::Varchar(size) => {
				writer.push(&format!("({})", size));
			}
			ColumnType::Enum(values) | ColumnType::Set(values) => {
				if values.is_empty() {
					return Err(DdlError::EmptyValueList {
						type_name: column_type.keyword(),
					});
				}
				writer.push("(");
				writer.try_push_list(values, ", ", |w, value| {
					w.push(&self.format_value(value)?);
					Ok(())
				})?;
				writer.push(")");
			}
			ColumnType::Text
			| ColumnType::TinyText
			| ColumnType::Time
			| ColumnType::Year
			| ColumnType::Date
			| ColumnType::DateTime
			| ColumnType::Timestamp => {}
		}
		Ok(())
	}

	/// Write a column definition for CREATE TABLE
	fn write_column_def(&self, writer: &mut SqlWriter, column: &ColumnDef) -> Result<()> {
		if let Name::Qualified { alias: Some(_), .. } = &column.name {
			return Err(DdlError::AliasedColumn {
				column: column.name.display_name(),
			});
		}
		self.write_name(writer, &column.name)?;

		match &column.column_type {
			Some(column_type) => {
				writer.push_space();
				self.write_column_type(writer, column_type)?;
			}
			None if column.name.is_raw() => {}
			None => {
				return Err(DdlError::MissingColumnType {
					column: column.name.display_name(),
				});
			}
		}

		match column.not_null {
			Some(true) => writer.push_keyword("NOT NULL"),
			Some(false) => writer.push_keyword("NULL"),
			None => {}
		}

		if let Some(default) = &column.default {
			writer.push_keyword("DEFAULT");
			writer.push_space();
			writer.push(&self.format_value(default)?);
		}

		if column.auto_increment {
			writer.push_keyword("AUTO_INCREMENT");
		}

		if column.unique {
			writer.push_keyword("UNIQUE");
		}

		if column.primary_key {
			writer.push_keyword("PRIMARY KEY");
		}

		if let Some(comment) = &column.comment {
			writer.push_keyword("COMMENT");
			writer.push_space();
			writer.push(&self.settings.escape_style.quote_string(comment));
		}

		Ok(())
	}

	/// Write `<keyword> <token>`, rejecting anything but a bare name
	fn write_option(
		&self,
		writer: &mut SqlWriter,
		keyword: &'static str,
		value: &str,
	) -> Result<()> {
		if !OPTION_TOKEN_RE.is_match(value) {
			return Err(DdlError::InvalidOption {
				option: keyword,
				value: value.to_string(),
			});
		}
		writer.push_keyword(keyword);
		writer.push_space();
		writer.push(value);
		Ok(())
	}

	fn finish(&self, writer: SqlWriter, statement: &'static str) -> String {
		let mut sql = writer.into_string();
		if self.settings.terminate_statements {
			sql.push(';');
		}
		tracing::debug!(statement, len = sql.len(), "rendered DDL statement");
		sql
	}
}

impl QueryBuilder for MySqlQueryBuilder {
	fn build_drop_table(&self, stmt: &DropTableStatement) -> Result<String> {
		let mut writer = SqlWriter::new();

		writer.push("DROP TABLE");
		if stmt.if_exists {
			writer.push_keyword("IF EXISTS");
		}
		self.write_target(&mut writer, stmt.table.as_ref(), "DROP TABLE")?;

		Ok(self.finish(writer, "DROP TABLE"))
	}

	fn build_create_table(&self, stmt: &CreateTableStatement) -> Result<String> {
		let mut writer = SqlWriter::new();

		writer.push("CREATE TABLE");
		if stmt.if_not_exists {
			writer.push_keyword("IF NOT EXISTS");
		}
		self.write_target(&mut writer, stmt.table.as_ref(), "CREATE TABLE")?;

		if stmt.columns.is_empty() {
			return Err(DdlError::NoColumns {
				table: stmt
					.table
					.as_ref()
					.map(Name::display_name)
					.unwrap_or_default(),
			});
		}

		writer.push(" (");
		writer.try_push_list(&stmt.columns, ", ", |w, column| {
			self.write_column_def(w, column)
		})?;
		writer.push(")");

		Ok(self.finish(writer, "CREATE TABLE"))
	}

	fn build_drop_database(&self, stmt: &DropDatabaseStatement) -> Result<String> {
		let mut writer = SqlWriter::new();

		writer.push("DROP DATABASE");
		if stmt.if_exists {
			writer.push_keyword("IF EXISTS");
		}
		self.write_target(&mut writer, stmt.database_name.as_ref(), "DROP DATABASE")?;

		Ok(self.finish(writer, "DROP DATABASE"))
	}

	fn build_create_database(&self, stmt: &CreateDatabaseStatement) -> Result<String> {
		let mut writer = SqlWriter::new();

		writer.push("CREATE DATABASE");
		if stmt.if_not_exists {
			writer.push_keyword("IF NOT EXISTS");
		}
		self.write_target(&mut writer, stmt.database_name.as_ref(), "CREATE DATABASE")?;

		if let Some(charset) = &stmt.character_set {
			self.write_option(&mut writer, "CHARACTER SET", charset)?;
		}

		if let Some(collation) = &stmt.collate {
			self.write_option(&mut writer, "COLLATE", collation)?;
		}

		Ok(self.finish(writer, "CREATE DATABASE"))
	}

	fn escape_identifier(&self, ident: &str) -> String {
		self.escape_iden(ident)
	}

	fn format_value(&self, value: &Value) -> Result<String> {
		value.to_sql_literal(self.settings.escape_style)
	}
}
