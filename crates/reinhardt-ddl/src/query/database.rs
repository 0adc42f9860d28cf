//! Database DDL statement builders
//!
//! This module provides builders for database management operations:
//! - CREATE DATABASE
//! - DROP DATABASE

mod create_database;
mod drop_database;

pub use create_database::CreateDatabaseStatement;
pub use drop_database::DropDatabaseStatement;
