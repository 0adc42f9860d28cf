//! Common fixtures for DDL rendering tests

// Each test binary compiles common.rs separately, causing unused code warnings.
#![allow(dead_code, unreachable_pub)]

use rstest::fixture;

use reinhardt_ddl::prelude::*;

/// Builder with default settings (backslash escapes, `;` terminator)
#[fixture]
pub fn mysql() -> MySqlQueryBuilder {
	MySqlQueryBuilder::new()
}

/// Builder using doubled-delimiter escapes
#[fixture]
pub fn mysql_doubled() -> MySqlQueryBuilder {
	MySqlQueryBuilder::with_settings(DdlSettings::default().escape_style(EscapeStyle::Doubled))
}

/// Builder that leaves statements unterminated
#[fixture]
pub fn mysql_unterminated() -> MySqlQueryBuilder {
	MySqlQueryBuilder::with_settings(DdlSettings::default().terminate_statements(false))
}

/// `id INT(11) UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY`
pub fn id_column() -> ColumnDef {
	ColumnDef::new("id")
		.column_type(ColumnType::Int {
			size: Some(11),
			unsigned: true,
		})
		.not_null(true)
		.auto_increment(true)
		.primary_key(true)
}
