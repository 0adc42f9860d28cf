//! DDL statement builders
//!
//! # Table Operations
//!
//! - Create Table: [`CreateTableStatement`]
//! - Drop Table: [`DropTableStatement`]
//!
//! # Database Operations
//!
//! - Create Database: [`CreateDatabaseStatement`]
//! - Drop Database: [`DropDatabaseStatement`]
//!
//! # Fluent Builder
//!
//! - Migration: [`Migration`], a single builder covering all of the above
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_ddl::prelude::*;
//!
//! let mut drop = Query::drop_table();
//! drop.table("users").if_exists();
//! assert_eq!(drop.to_sql().unwrap(), "DROP TABLE IF EXISTS `users`;");
//!
//! let mut create = Query::create_database();
//! create.name("shop");
//! assert_eq!(create.to_sql().unwrap(), "CREATE DATABASE `shop`;");
//! ```

pub mod create_table;
pub mod database;
pub mod drop_table;
pub mod migration;
pub mod traits;

pub use create_table::CreateTableStatement;
pub use database::{CreateDatabaseStatement, DropDatabaseStatement};
pub use drop_table::DropTableStatement;
pub use migration::{Migration, Statement, StatementType};
pub use traits::QueryStatementBuilder;

/// Shorthand for constructing any DDL statement
#[derive(Debug, Clone)]
pub struct Query;

impl Query {
	/// Construct a new [`CreateTableStatement`]
	pub fn create_table() -> CreateTableStatement {
		CreateTableStatement::new()
	}

	/// Construct a new [`DropTableStatement`]
	pub fn drop_table() -> DropTableStatement {
		DropTableStatement::new()
	}

	/// Construct a new [`CreateDatabaseStatement`]
	pub fn create_database() -> CreateDatabaseStatement {
		CreateDatabaseStatement::new()
	}

	/// Construct a new [`DropDatabaseStatement`]
	pub fn drop_database() -> DropDatabaseStatement {
		DropDatabaseStatement::new()
	}

	/// Construct a new [`Migration`] builder
	pub fn migration() -> Migration {
		Migration::new()
	}
}
