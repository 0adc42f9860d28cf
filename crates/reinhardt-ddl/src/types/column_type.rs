//! Column data types.

use crate::value::Value;

/// SQL column types.
///
/// The set mirrors the MySQL type family: integer types carry an optional
/// display size and an unsigned flag, floating types carry optional
/// precision and scale, fixed string types carry a required size, and
/// ENUM/SET carry their member values.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ColumnType {
	/// TINYINT[(size)] [UNSIGNED]
	TinyInt { size: Option<u32>, unsigned: bool },
	/// SMALLINT[(size)] [UNSIGNED]
	SmallInt { size: Option<u32>, unsigned: bool },
	/// MEDIUMINT[(size)] [UNSIGNED]
	MediumInt { size: Option<u32>, unsigned: bool },
	/// INT[(size)] [UNSIGNED]
	Int { size: Option<u32>, unsigned: bool },
	/// BIGINT[(size)] [UNSIGNED]
	BigInt { size: Option<u32>, unsigned: bool },
	/// FLOAT[(precision[, scale])]
	Float {
		precision: Option<u32>,
		scale: Option<u32>,
	},
	/// DOUBLE[(precision[, scale])]
	Double {
		precision: Option<u32>,
		scale: Option<u32>,
	},
	/// DECIMAL[(precision[, scale])]
	Decimal {
		precision: Option<u32>,
		scale: Option<u32>,
	},
	/// TEXT
	Text,
	/// TINYTEXT
	TinyText,
	/// CHAR(size)
	Char(u32),
	/// VARCHAR(size)
	Varchar(u32),
	/// ENUM('a', 'b', ...)
	Enum(Vec<Value>),
	/// SET('a', 'b', ...)
	Set(Vec<Value>),
	/// TIME
	Time,
	/// YEAR
	Year,
	/// DATE
	Date,
	/// DATETIME
	DateTime,
	/// TIMESTAMP
	Timestamp,
}

impl ColumnType {
	/// The SQL keyword of this type.
	pub fn keyword(&self) -> &'static str {
		match self {
			Self::TinyInt { .. } => "TINYINT",
			Self::SmallInt { .. } => "SMALLINT",
			Self::MediumInt { .. } => "MEDIUMINT",
			Self::Int { .. } => "INT",
			Self::BigInt { .. } => "BIGINT",
			Self::Float { .. } => "FLOAT",
			Self::Double { .. } => "DOUBLE",
			Self::Decimal { .. } => "DECIMAL",
			Self::Text => "TEXT",
			Self::TinyText => "TINYTEXT",
			Self::Char(_) => "CHAR",
			Self::Varchar(_) => "VARCHAR",
			Self::Enum(_) => "ENUM",
			Self::Set(_) => "SET",
			Self::Time => "TIME",
			Self::Year => "YEAR",
			Self::Date => "DATE",
			Self::DateTime => "DATETIME",
			Self::Timestamp => "TIMESTAMP",
		}
	}

	/// Build an ENUM type from any iterable of values.
	pub fn enumeration<I, V>(values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		Self::Enum(values.into_iter().map(Into::into).collect())
	}

	/// Build a SET type from any iterable of values.
	pub fn set<I, V>(values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		Self::Set(values.into_iter().map(Into::into).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ColumnType::BigInt { size: Some(20), unsigned: true }, "BIGINT")]
	#[case(ColumnType::Decimal { precision: None, scale: None }, "DECIMAL")]
	#[case(ColumnType::set(["a"]), "SET")]
	#[case(ColumnType::DateTime, "DATETIME")]
	fn test_keyword(#[case] column_type: ColumnType, #[case] expected: &str) {
		assert_eq!(column_type.keyword(), expected);
	}

	#[rstest]
	fn test_enumeration_converts_values() {
		// Arrange & Act
		let column_type = ColumnType::enumeration(["draft", "published"]);

		// Assert
		assert_eq!(
			column_type,
			ColumnType::Enum(vec![Value::from("draft"), Value::from("published")])
		);
	}
}
