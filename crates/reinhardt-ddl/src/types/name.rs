//! Compiled identifier names.
//!
//! This module provides types for referencing tables, databases and columns:
//!
//! - [`Name`]: a dotted, optionally aliased identifier or a raw expression
//! - [`IntoName`]: conversion trait for names

use std::sync::LazyLock;

use regex::Regex;

static ALIAS_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)\s+as\s+").expect("alias pattern is valid"));
static DOT_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\s*\.\s*").expect("dot pattern is valid"));

/// Maximum number of dotted segments (`database.schema.table`).
const MAX_SEGMENTS: usize = 3;

/// An identifier as written by the caller.
///
/// Qualified names are split into segments when constructed and quoted
/// segment by segment when rendered. Raw names are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Name {
	/// Dotted identifier with an optional alias (e.g. `db.users AS u`)
	Qualified {
		/// Dotted segments, outermost first
		segments: Vec<String>,
		/// Alias following `AS`
		alias: Option<String>,
	},
	/// Raw SQL expression, never quoted
	Raw(String),
}

impl Name {
	/// Parse a name, splitting on `.` and on a case-insensitive ` AS `.
	///
	/// # Example
	///
	/// ```rust
	/// use reinhardt_ddl::types::Name;
	///
	/// let name = Name::parse("shop . orders as o");
	/// assert_eq!(
	///     name,
	///     Name::Qualified {
	///         segments: vec!["shop".to_string(), "orders".to_string()],
	///         alias: Some("o".to_string()),
	///     }
	/// );
	/// ```
	pub fn parse(name: &str) -> Self {
		let (base, alias) = match ALIAS_RE.splitn(name, 2).collect::<Vec<_>>().as_slice() {
			[base, alias] => (*base, Some(*alias).filter(|a| !a.is_empty())),
			_ => (name, None),
		};

		Self::Qualified {
			segments: DOT_RE
				.splitn(base, MAX_SEGMENTS)
				.map(str::to_string)
				.collect(),
			alias: alias.map(str::to_string),
		}
	}

	/// Create a raw name that is emitted verbatim.
	pub fn raw<S: Into<String>>(expression: S) -> Self {
		Self::Raw(expression.into())
	}

	/// Returns `true` for raw expressions.
	pub fn is_raw(&self) -> bool {
		matches!(self, Self::Raw(_))
	}

	/// The unquoted text of this name, used in logs and error messages.
	pub fn display_name(&self) -> String {
		match self {
			Self::Qualified { segments, alias } => {
				let base = segments.join(".");
				match alias {
					Some(alias) => format!("{} AS {}", base, alias),
					None => base,
				}
			}
			Self::Raw(expression) => expression.clone(),
		}
	}
}

/// Conversion trait for names.
pub trait IntoName {
	/// Convert this type into a [`Name`].
	fn into_name(self) -> Name;
}

impl IntoName for Name {
	fn into_name(self) -> Name {
		self
	}
}

impl IntoName for &str {
	fn into_name(self) -> Name {
		Name::parse(self)
	}
}

impl IntoName for String {
	fn into_name(self) -> Name {
		Name::parse(&self)
	}
}

impl IntoName for &String {
	fn into_name(self) -> Name {
		Name::parse(self)
	}
}

// (schema, table)
impl<S, T> IntoName for (S, T)
where
	S: Into<String>,
	T: Into<String>,
{
	fn into_name(self) -> Name {
		Name::Qualified {
			segments: vec![self.0.into(), self.1.into()],
			alias: None,
		}
	}
}
