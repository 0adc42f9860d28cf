//! # reinhardt-ddl
//!
//! A fluent DDL builder for MySQL-dialect schema statements.
//!
//! This crate renders DROP/CREATE TABLE and DROP/CREATE DATABASE statements
//! as plain SQL strings, quoting identifiers with backticks and inlining
//! column defaults as literals.
//!
//! ## Features
//!
//! - **Table operations** - DROP TABLE and CREATE TABLE with typed column definitions
//! - **Database operations** - DROP DATABASE and CREATE DATABASE with charset/collation
//! - **Column types** - integer, floating, string, ENUM/SET and temporal types
//! - **Column constraints** - NOT NULL, DEFAULT, AUTO_INCREMENT, UNIQUE, PRIMARY KEY, COMMENT
//! - **Name quoting** - dotted names, ` AS ` aliases and raw expressions
//! - **Settings** - escape style and statement terminator, loadable from TOML
//!
//! ## Architecture
//!
//! - [`value`]: Literal values ([`Value`]) rendered inline
//! - [`types`]: Names ([`Name`]), column types ([`ColumnType`]) and column definitions ([`ColumnDef`])
//! - [`query`]: Statement builders and the fluent [`Migration`] builder
//! - [`backend`]: SQL generation ([`MySqlQueryBuilder`])
//! - [`settings`]: Rendering settings ([`DdlSettings`])
//! - [`error`]: Error type ([`DdlError`])
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_ddl::prelude::*;
//!
//! let mut migration = Migration::new();
//! migration
//!     .create_table("orders")
//!     .column("id")
//!     .big_int(None, true)
//!     .auto_increment()
//!     .primary_key()
//!     .column("total")
//!     .decimal(Some(10), Some(2))
//!     .not_null()
//!     .default(0)
//!     .column("note")
//!     .text()
//!     .nullable();
//!
//! assert_eq!(
//!     migration.to_string(),
//!     "CREATE TABLE `orders` (\
//!      `id` BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY, \
//!      `total` DECIMAL(10, 2) NOT NULL DEFAULT 0, \
//!      `note` TEXT NULL);"
//! );
//!
//! migration.drop_table("orders").if_exists();
//! assert_eq!(migration.to_string(), "DROP TABLE IF EXISTS `orders`;");
//! ```
//!
//! ## Statement Builders
//!
//! Each statement also has its own builder, rendered through a backend:
//!
//! ```rust
//! use reinhardt_ddl::prelude::*;
//!
//! let mut stmt = Query::create_database();
//! stmt.name("shop").if_not_exists().character_set("utf8mb4");
//!
//! let builder = MySqlQueryBuilder::new();
//! assert_eq!(
//!     builder.build_create_database(&stmt).unwrap(),
//!     "CREATE DATABASE IF NOT EXISTS `shop` CHARACTER SET utf8mb4;"
//! );
//! ```

// Core modules
pub mod error;
pub mod settings;
pub mod types;
pub mod value;

// Statement builders
pub mod query;

// Backend implementations
pub mod backend;

/// Prelude module for convenient imports.
///
/// ```rust
/// use reinhardt_ddl::prelude::*;
/// ```
pub mod prelude {
	// Backend builders
	pub use crate::backend::{MySqlQueryBuilder, QueryBuilder, SqlWriter};
	// Errors and settings
	pub use crate::error::DdlError;
	pub use crate::settings::{DdlSettings, EscapeStyle};
	// DDL statement builders
	pub use crate::query::{
		CreateDatabaseStatement, CreateTableStatement, DropDatabaseStatement, DropTableStatement,
		Migration, Query, QueryStatementBuilder, Statement, StatementType,
	};
	// Type system
	pub use crate::types::{ColumnDef, ColumnType, IntoName, Name};
	// Value system
	pub use crate::value::Value;
}

// Re-export commonly used types at crate root
pub use prelude::*;
