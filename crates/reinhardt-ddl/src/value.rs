//! Literal values used in DDL statements (ENUM/SET members, column defaults).

use crate::{
	error::{DdlError, Result},
	settings::EscapeStyle,
};

/// A literal value.
///
/// Values are rendered inline with [`Value::to_sql_literal`]. Text that is
/// exactly `?` or starts with `:` is treated as a bind placeholder and
/// passed through unquoted, so rendered statements can serve as
/// parameterized templates.
///
/// ```rust
/// use reinhardt_ddl::Value;
/// use reinhardt_ddl::settings::EscapeStyle;
///
/// let style = EscapeStyle::default();
/// assert_eq!(Value::Null.to_sql_literal(style).unwrap(), "NULL");
/// assert_eq!(Value::from(true).to_sql_literal(style).unwrap(), "TRUE");
/// assert_eq!(Value::from("?").to_sql_literal(style).unwrap(), "?");
/// assert_eq!(Value::from("O'Brien").to_sql_literal(style).unwrap(), "'O\\'Brien'");
/// assert!(Value::from(f64::NAN).to_sql_literal(style).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
	/// SQL `NULL`
	#[default]
	Null,
	/// Boolean value
	Bool(bool),
	/// Signed integer
	Int(i64),
	/// Unsigned integer
	Unsigned(u64),
	/// 32-bit floating point
	Float(f32),
	/// 64-bit floating point
	Double(f64),
	/// Text value
	String(String),
}

impl Value {
	/// Returns `true` for `?` and `:name` placeholders.
	#[must_use]
	pub fn is_placeholder(&self) -> bool {
		match self {
			Self::String(s) => s == "?" || s.starts_with(':'),
			_ => false,
		}
	}

	/// Render this value as a SQL literal.
	///
	/// # Errors
	///
	/// NaN and infinities fail with [`DdlError::NonFiniteValue`].
	pub fn to_sql_literal(&self, style: EscapeStyle) -> Result<String> {
		let literal = match self {
			Self::Null => "NULL".to_string(),
			Self::Bool(true) => "TRUE".to_string(),
			Self::Bool(false) => "FALSE".to_string(),
			Self::Int(v) => v.to_string(),
			Self::Unsigned(v) => v.to_string(),
			Self::Float(v) => finite(f64::from(*v), v)?,
			Self::Double(v) => finite(*v, v)?,
			Self::String(s) if self.is_placeholder() => s.clone(),
			Self::String(s) => style.quote_string(s),
		};
		Ok(literal)
	}
}

fn finite<T: ToString>(check: f64, value: &T) -> Result<String> {
	if check.is_finite() {
		Ok(value.to_string())
	} else {
		Err(DdlError::NonFiniteValue {
			value: value.to_string(),
		})
	}
}

macro_rules! impl_from_signed {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					Self::Int(i64::from(v))
				}
			}
		)*
	};
}

macro_rules! impl_from_unsigned {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					Self::Unsigned(u64::from(v))
				}
			}
		)*
	};
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

impl From<f32> for Value {
	fn from(v: f32) -> Self {
		Self::Float(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Self::Double(v)
	}
}

impl From<char> for Value {
	fn from(v: char) -> Self {
		Self::String(v.to_string())
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Self::String(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Self::String(v)
	}
}

impl From<&String> for Value {
	fn from(v: &String) -> Self {
		Self::String(v.clone())
	}
}

impl<T> From<Option<T>> for Value
where
	T: Into<Value>,
{
	fn from(v: Option<T>) -> Self {
		v.map_or(Self::Null, Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Value::Null, "NULL")]
	#[case(Value::from(Option::<i32>::None), "NULL")]
	#[case(Value::from(true), "TRUE")]
	#[case(Value::from(false), "FALSE")]
	#[case(Value::from(42i32), "42")]
	#[case(Value::from(-7i64), "-7")]
	#[case(Value::from(18_446_744_073_709_551_615u64), "18446744073709551615")]
	#[case(Value::from(1.5f64), "1.5")]
	#[case(Value::from(1.0f64), "1")]
	#[case(Value::from(0.25f32), "0.25")]
	fn test_non_text_literals(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(value.to_sql_literal(EscapeStyle::Backslash).unwrap(), expected);
	}

	#[rstest]
	#[case("?", "?")]
	#[case(":name", ":name")]
	#[case(":", ":")]
	#[case("??", "'??'")]
	#[case("a:b", "'a:b'")]
	fn test_placeholders_pass_through(#[case] input: &str, #[case] expected: &str) {
		// Arrange
		let value = Value::from(input);

		// Act
		let literal = value.to_sql_literal(EscapeStyle::Backslash).unwrap();

		// Assert
		assert_eq!(literal, expected);
	}

	#[rstest]
	fn test_text_escaping_backslash_style() {
		let value = Value::from("O'Brien");

		assert_eq!(
			value.to_sql_literal(EscapeStyle::Backslash).unwrap(),
			"'O\\'Brien'"
		);
	}

	#[rstest]
	fn test_text_escaping_doubled_style() {
		let value = Value::from("O'Brien");

		assert_eq!(
			value.to_sql_literal(EscapeStyle::Doubled).unwrap(),
			"'O''Brien'"
		);
	}

	#[rstest]
	fn test_option_some_converts_inner() {
		let value = Value::from(Some("draft"));

		assert_eq!(value, Value::String("draft".to_string()));
	}

	#[rstest]
	fn test_only_text_is_placeholder() {
		assert!(Value::from("?").is_placeholder());
		assert!(!Value::from(1i32).is_placeholder());
		assert!(!Value::Null.is_placeholder());
	}

	#[rstest]
	#[case(Value::from(f64::NAN), "NaN")]
	#[case(Value::from(f64::INFINITY), "inf")]
	#[case(Value::from(f64::NEG_INFINITY), "-inf")]
	#[case(Value::from(f32::NAN), "NaN")]
	fn test_non_finite_floats_are_rejected(#[case] value: Value, #[case] rendered: &str) {
		// Act
		let result = value.to_sql_literal(EscapeStyle::Backslash);

		// Assert
		assert!(matches!(
			result,
			Err(DdlError::NonFiniteValue { value }) if value == rendered
		));
	}
}
