//! Error types for DDL statement building

use thiserror::Error;

/// Errors raised while assembling or rendering a DDL statement.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DdlError {
	/// The statement was rendered before a table or database name was set.
	#[error("{statement} requires a target name")]
	MissingName { statement: &'static str },

	/// A column type or constraint method was called before any column was added.
	#[error("`{method}` called before any column was added")]
	NoColumn { method: &'static str },

	/// A named column has no data type.
	#[error("Column {column} has no data type")]
	MissingColumnType { column: String },

	/// CREATE TABLE was rendered without columns.
	#[error("CREATE TABLE {table} has no columns")]
	NoColumns { table: String },

	/// ENUM or SET was given an empty list of values.
	#[error("{type_name} requires at least one value")]
	EmptyValueList { type_name: &'static str },

	/// An identifier segment is empty (e.g. `schema.` or ` AS alias`).
	#[error("Empty identifier")]
	EmptyIdentifier,

	/// A column name carries an ` AS ` alias, which column definitions cannot have.
	#[error("Column {column} cannot have an alias")]
	AliasedColumn { column: String },

	/// A statement option is not a bare token (e.g. `CHARACTER SET utf8; ...`).
	#[error("Invalid {option} value: {value:?}")]
	InvalidOption { option: &'static str, value: String },

	/// NaN or an infinity cannot be written as a SQL literal.
	#[error("Non-finite value {value} has no SQL literal")]
	NonFiniteValue { value: String },

	/// Settings could not be parsed.
	#[error("Invalid settings: {0}")]
	InvalidSettings(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DdlError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_error_messages() {
		// Arrange
		let missing = DdlError::MissingName {
			statement: "DROP TABLE",
		};
		let no_column = DdlError::NoColumn { method: "varchar" };
		let empty = DdlError::EmptyValueList { type_name: "ENUM" };

		// Act & Assert
		assert_eq!(missing.to_string(), "DROP TABLE requires a target name");
		assert_eq!(
			no_column.to_string(),
			"`varchar` called before any column was added"
		);
		assert_eq!(empty.to_string(), "ENUM requires at least one value");
	}
}
