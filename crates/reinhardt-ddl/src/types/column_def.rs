//! Column definitions for CREATE TABLE.

use crate::{
	types::{ColumnType, IntoName, Name},
	value::Value,
};

/// Column definition for CREATE TABLE
///
/// This struct holds a column's name, its type and its inline constraints.
///
/// # Examples
///
/// ```rust
/// use reinhardt_ddl::types::{ColumnDef, ColumnType};
///
/// // `id` INT(11) UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY
/// let id_col = ColumnDef::new("id")
///     .column_type(ColumnType::Int { size: Some(11), unsigned: true })
///     .not_null(true)
///     .auto_increment(true)
///     .primary_key(true);
///
/// // `name` VARCHAR(100) NOT NULL
/// let name_col = ColumnDef::new("name")
///     .column_type(ColumnType::Varchar(100))
///     .not_null(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
	pub(crate) name: Name,
	pub(crate) column_type: Option<ColumnType>,
	/// `Some(true)` renders NOT NULL, `Some(false)` renders NULL
	pub(crate) not_null: Option<bool>,
	pub(crate) default: Option<Value>,
	pub(crate) auto_increment: bool,
	pub(crate) unique: bool,
	pub(crate) primary_key: bool,
	pub(crate) comment: Option<String>,
}

impl ColumnDef {
	/// Create a new column definition
	pub fn new<T>(name: T) -> Self
	where
		T: IntoName,
	{
		Self::with_name(name.into_name())
	}

	/// Create a column whose definition is a raw SQL expression
	pub fn raw<S: Into<String>>(expression: S) -> Self {
		Self::with_name(Name::raw(expression))
	}

	fn with_name(name: Name) -> Self {
		Self {
			name,
			column_type: None,
			not_null: None,
			default: None,
			auto_increment: false,
			unique: false,
			primary_key: false,
			comment: None,
		}
	}

	/// Set the column type
	pub fn column_type(mut self, column_type: ColumnType) -> Self {
		self.column_type = Some(column_type);
		self
	}

	/// Set NOT NULL (`true`) or explicit NULL (`false`)
	pub fn not_null(mut self, not_null: bool) -> Self {
		self.not_null = Some(not_null);
		self
	}

	/// Set DEFAULT value
	pub fn default<V: Into<Value>>(mut self, value: V) -> Self {
		self.default = Some(value.into());
		self
	}

	/// Set AUTO_INCREMENT attribute
	pub fn auto_increment(mut self, auto_increment: bool) -> Self {
		self.auto_increment = auto_increment;
		self
	}

	/// Set UNIQUE constraint
	pub fn unique(mut self, unique: bool) -> Self {
		self.unique = unique;
		self
	}

	/// Set PRIMARY KEY constraint
	pub fn primary_key(mut self, primary_key: bool) -> Self {
		self.primary_key = primary_key;
		self
	}

	/// Set column comment
	pub fn comment<S: Into<String>>(mut self, comment: S) -> Self {
		self.comment = Some(comment.into());
		self
	}

	/// Column name
	pub fn name(&self) -> &Name {
		&self.name
	}

	/// Column type, if one was set
	pub fn get_column_type(&self) -> Option<&ColumnType> {
		self.column_type.as_ref()
	}
}
