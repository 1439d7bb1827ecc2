//! # Database Driver Family
//!
//! Connection, record and query-builder objects for MySQL, PostgreSQL and
//! Oracle. Nothing here touches a real database; every operation returns a
//! fixed description of what a driver would have done.
//!
//! ## Usage
//!
//! ```rust
//! use factory_recipe::database::{factory_for, DatabaseKind};
//!
//! let factory = factory_for(DatabaseKind::PostgreSql);
//!
//! assert_eq!(factory.db_connection().set_connection(), "PostgreSQL DB connected");
//! assert_eq!(factory.db_record().add_record(), "Record added to PostgreSQL DB");
//! assert_eq!(
//!     factory.db_query_builder().query(),
//!     "PostgreSQL DB query was executed successfully"
//! );
//! ```

mod factories;
pub mod kind;
mod products;

pub use factories::{MySqlFactory, OracleFactory, PostgreSqlFactory};
pub use kind::DatabaseKind;

use factory_framework::FamilyFactory;
use std::fmt::Debug;

/// Opens a connection. Returns `"{engine} DB connected"`.
pub trait Connection: Debug + Send + Sync {
    fn set_connection(&self) -> String;

    fn variation(&self) -> DatabaseKind;
}

/// Inserts a record. Returns `"Record added to {engine} DB"`.
pub trait Record: Debug + Send + Sync {
    fn add_record(&self) -> String;

    fn variation(&self) -> DatabaseKind;
}

/// Runs a query. Returns `"{engine} DB query was executed successfully"`.
pub trait QueryBuilder: Debug + Send + Sync {
    fn query(&self) -> String;

    fn variation(&self) -> DatabaseKind;
}

/// Abstract factory for a database driver family.
pub trait DatabaseFactory: FamilyFactory<Variation = DatabaseKind> {
    fn db_connection(&self) -> Box<dyn Connection>;

    fn db_record(&self) -> Box<dyn Record>;

    fn db_query_builder(&self) -> Box<dyn QueryBuilder>;
}

/// Returns the concrete factory for `kind`.
pub fn factory_for(kind: DatabaseKind) -> Box<dyn DatabaseFactory> {
    match kind {
        DatabaseKind::MySql => Box::new(MySqlFactory),
        DatabaseKind::PostgreSql => Box::new(PostgreSqlFactory),
        DatabaseKind::Oracle => Box::new(OracleFactory),
    }
}
