//! Rendering settings
//!
//! [`DdlSettings`] controls how identifiers and string literals are escaped
//! and whether rendered statements end with `;`. Settings can be built in
//! code or loaded from TOML:
//!
//! ```rust
//! use reinhardt_ddl::settings::{DdlSettings, EscapeStyle};
//!
//! let settings = DdlSettings::from_toml_str(
//!     r#"
//!     escape_style = "doubled"
//!     terminate_statements = false
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.escape_style, EscapeStyle::Doubled);
//! assert!(!settings.terminate_statements);
//! ```

use serde::Deserialize;

use crate::error::Result;

/// How delimiter characters inside identifiers and string literals are escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeStyle {
	/// Prefix with a backslash: `` `a\`b` `` and `'O\'Brien'`.
	#[default]
	Backslash,
	/// Double the delimiter: `` `a``b` `` and `'O''Brien'`.
	Doubled,
}

impl EscapeStyle {
	/// Escape backticks inside an identifier (without the surrounding backticks).
	pub fn escape_identifier(self, ident: &str) -> String {
		match self {
			Self::Backslash => ident.replace('`', "\\`"),
			Self::Doubled => ident.replace('`', "``"),
		}
	}

	/// Quote a string literal, escaping embedded quotes.
	///
	/// In backslash style embedded backslashes are doubled as well so the
	/// literal cannot be terminated early.
	pub fn quote_string(self, s: &str) -> String {
		let escaped = match self {
			Self::Backslash => s.replace('\\', "\\\\").replace('\'', "\\'"),
			Self::Doubled => s.replace('\'', "''"),
		};
		format!("'{}'", escaped)
	}
}

/// Settings applied when rendering statements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DdlSettings {
	/// Escape style for identifiers and string literals
	pub escape_style: EscapeStyle,
	/// Append `;` to every rendered statement
	pub terminate_statements: bool,
}

impl DdlSettings {
	/// Parse settings from a TOML document. Missing keys take their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Set the escape style
	pub fn escape_style(mut self, escape_style: EscapeStyle) -> Self {
		self.escape_style = escape_style;
		self
	}

	/// Enable or disable the trailing `;`
	pub fn terminate_statements(mut self, terminate: bool) -> Self {
		self.terminate_statements = terminate;
		self
	}
}

impl Default for DdlSettings {
	fn default() -> Self {
		Self {
			escape_style: EscapeStyle::Backslash,
			terminate_statements: true,
		}
	}
}
