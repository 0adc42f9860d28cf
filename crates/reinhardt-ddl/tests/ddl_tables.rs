//! Table operations tests
//!
//! Tests for CREATE/DROP TABLE rendering including:
//! - IF EXISTS / IF NOT EXISTS
//! - Qualified, aliased and raw table names
//! - Column types and constraints
//! - Error cases

use rstest::rstest;

use reinhardt_ddl::prelude::*;

mod common;
use common::{id_column, mysql, mysql_unterminated};

#[rstest]
fn test_drop_table_basic(mysql: MySqlQueryBuilder) {
	// Arrange
	let mut stmt = Query::drop_table();
	stmt.table("users");

	// Act
	let sql = mysql.build_drop_table(&stmt).unwrap();

	// Assert
	assert_eq!(sql, "DROP TABLE `users`;");
}

#[rstest]
fn test_drop_table_if_exists(mysql: MySqlQueryBuilder) {
	let mut stmt = Query::drop_table();
	stmt.table("users").if_exists();

	assert_eq!(
		mysql.build_drop_table(&stmt).unwrap(),
		"DROP TABLE IF EXISTS `users`;"
	);
}

#[rstest]
#[case("shop.users", "`shop`.`users`")]
#[case("shop . users", "`shop`.`users`")]
#[case("db.public.users", "`db`.`public`.`users`")]
#[case("users AS u", "`users` AS `u`")]
#[case("users as u", "`users` AS `u`")]
#[case("shop.users AS u", "`shop`.`users` AS `u`")]
fn test_drop_table_name_forms(
	mysql: MySqlQueryBuilder,
	#[case] name: &str,
	#[case] expected: &str,
) {
	let mut stmt = Query::drop_table();
	stmt.table(name);

	assert_eq!(
		mysql.build_drop_table(&stmt).unwrap(),
		format!("DROP TABLE {};", expected)
	);
}

#[rstest]
fn test_drop_table_raw(mysql: MySqlQueryBuilder) {
	let mut stmt = Query::drop_table();
	stmt.table_raw("users, sessions");

	assert_eq!(
		mysql.build_drop_table(&stmt).unwrap(),
		"DROP TABLE users, sessions;"
	);
}

#[rstest]
fn test_drop_table_unterminated(mysql_unterminated: MySqlQueryBuilder) {
	let mut stmt = Query::drop_table();
	stmt.table("users");

	assert_eq!(
		mysql_unterminated.build_drop_table(&stmt).unwrap(),
		"DROP TABLE `users`"
	);
}

#[rstest]
fn test_create_table_full(mysql: MySqlQueryBuilder) {
	// Arrange
	let mut stmt = Query::create_table();
	stmt.table("users")
		.if_not_exists()
		.col(id_column())
		.col(
			ColumnDef::new("email")
				.column_type(ColumnType::Varchar(255))
				.not_null(true)
				.unique(true),
		)
		.col(
			ColumnDef::new("role")
				.column_type(ColumnType::enumeration(["admin", "member"]))
				.default("member"),
		)
		.col(
			ColumnDef::new("score")
				.column_type(ColumnType::Float {
					precision: Some(7),
					scale: Some(4),
				})
				.default(0.5),
		)
		.col(
			ColumnDef::new("bio")
				.column_type(ColumnType::Text)
				.not_null(false)
				.comment("Free-form profile text"),
		);

	// Act
	let sql = stmt.build(mysql).unwrap();

	// Assert
	assert_eq!(
		sql,
		"CREATE TABLE IF NOT EXISTS `users` (\
		 `id` INT(11) UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY, \
		 `email` VARCHAR(255) NOT NULL UNIQUE, \
		 `role` ENUM('admin', 'member') DEFAULT 'member', \
		 `score` FLOAT(7, 4) DEFAULT 0.5, \
		 `bio` TEXT NULL COMMENT 'Free-form profile text');"
	);
}

#[rstest]
fn test_create_table_temporal_columns(mysql: MySqlQueryBuilder) {
	let mut stmt = Query::create_table();
	stmt.table("events")
		.col(ColumnDef::new("at_time").column_type(ColumnType::Time))
		.col(ColumnDef::new("at_year").column_type(ColumnType::Year))
		.col(ColumnDef::new("on_date").column_type(ColumnType::Date))
		.col(ColumnDef::new("at").column_type(ColumnType::DateTime))
		.col(
			ColumnDef::new("created")
				.column_type(ColumnType::Timestamp)
				.default(Value::from(":now")),
		);

	assert_eq!(
		mysql.build_create_table(&stmt).unwrap(),
		"CREATE TABLE `events` (`at_time` TIME, `at_year` YEAR, `on_date` DATE, \
		 `at` DATETIME, `created` TIMESTAMP DEFAULT :now);"
	);
}

#[rstest]
fn test_create_table_raw_column(mysql: MySqlQueryBuilder) {
	let mut stmt = Query::create_table();
	stmt.table("t")
		.col(ColumnDef::raw("`legacy` BLOB"))
		.col(ColumnDef::raw("`flag`").column_type(ColumnType::TinyInt {
			size: Some(1),
			unsigned: false,
		}));

	assert_eq!(
		mysql.build_create_table(&stmt).unwrap(),
		"CREATE TABLE `t` (`legacy` BLOB, `flag` TINYINT(1));"
	);
}

#[rstest]
fn test_create_table_take_resets_builder(mysql: MySqlQueryBuilder) {
	// Arrange
	let mut stmt = Query::create_table();
	stmt.table("t").col(ColumnDef::new("a").column_type(ColumnType::Text));

	// Act
	let taken = stmt.take();

	// Assert
	assert_eq!(
		mysql.build_create_table(&taken).unwrap(),
		"CREATE TABLE `t` (`a` TEXT);"
	);
	assert!(stmt.columns().is_empty());
}

#[rstest]
fn test_create_table_without_columns(mysql: MySqlQueryBuilder) {
	let mut stmt = Query::create_table();
	stmt.table("users");

	let err = mysql.build_create_table(&stmt).unwrap_err();

	assert_eq!(err.to_string(), "CREATE TABLE users has no columns");
}

#[rstest]
fn test_create_table_column_without_type(mysql: MySqlQueryBuilder) {
	let mut stmt = Query::create_table();
	stmt.table("users").col(ColumnDef::new("id"));

	assert!(matches!(
		mysql.build_create_table(&stmt),
		Err(DdlError::MissingColumnType { column }) if column == "id"
	));
}

#[rstest]
fn test_create_table_empty_enum(mysql: MySqlQueryBuilder) {
	let mut stmt = Query::create_table();
	stmt.table("users")
		.col(ColumnDef::new("role").column_type(ColumnType::Enum(Vec::new())));

	assert!(matches!(
		mysql.build_create_table(&stmt),
		Err(DdlError::EmptyValueList { type_name: "ENUM" })
	));
}

#[rstest]
fn test_drop_table_without_name(mysql: MySqlQueryBuilder) {
	let stmt = Query::drop_table();

	assert!(matches!(
		mysql.build_drop_table(&stmt),
		Err(DdlError::MissingName {
			statement: "DROP TABLE"
		})
	));
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn test_create_table_non_finite_default(mysql: MySqlQueryBuilder, #[case] default: f64) {
	// Arrange
	let mut stmt = Query::create_table();
	stmt.table("t").col(
		ColumnDef::new("f")
			.column_type(ColumnType::Float {
				precision: None,
				scale: None,
			})
			.default(default),
	);

	// Act
	let result = mysql.build_create_table(&stmt);

	// Assert
	assert!(matches!(result, Err(DdlError::NonFiniteValue { .. })));
}

#[rstest]
fn test_create_table_non_finite_enum_member(mysql: MySqlQueryBuilder) {
	let mut stmt = Query::create_table();
	stmt.table("t")
		.col(ColumnDef::new("level").column_type(ColumnType::enumeration([1.0, f64::NAN])));

	assert!(matches!(
		mysql.build_create_table(&stmt),
		Err(DdlError::NonFiniteValue { .. })
	));
}

#[rstest]
fn test_create_table_aliased_column(mysql: MySqlQueryBuilder) {
	let mut stmt = Query::create_table();
	stmt.table("t")
		.col(ColumnDef::new("a as b").column_type(ColumnType::Int {
			size: None,
			unsigned: false,
		}));

	let err = mysql.build_create_table(&stmt).unwrap_err();

	assert_eq!(err.to_string(), "Column a AS b cannot have an alias");
}
