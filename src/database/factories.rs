//! Concrete driver factories, one per engine.

use super::products::{
    MySqlConnection, MySqlQueryBuilder, MySqlRecord, OracleConnection, OracleQueryBuilder,
    OracleRecord, PostgreSqlConnection, PostgreSqlQueryBuilder, PostgreSqlRecord,
};
use super::{Connection, DatabaseFactory, DatabaseKind, QueryBuilder, Record};
use factory_framework::FamilyFactory;
use tracing::debug;

/// Produces MySQL driver objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlFactory;

impl FamilyFactory for MySqlFactory {
    type Variation = DatabaseKind;

    fn variation(&self) -> DatabaseKind {
        DatabaseKind::MySql
    }
}

impl DatabaseFactory for MySqlFactory {
    fn db_connection(&self) -> Box<dyn Connection> {
        debug!(engine = %self.variation(), "Creating connection");
        Box::new(MySqlConnection)
    }

    fn db_record(&self) -> Box<dyn Record> {
        debug!(engine = %self.variation(), "Creating record");
        Box::new(MySqlRecord)
    }

    fn db_query_builder(&self) -> Box<dyn QueryBuilder> {
        debug!(engine = %self.variation(), "Creating query builder");
        Box::new(MySqlQueryBuilder)
    }
}

/// Produces PostgreSQL driver objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgreSqlFactory;

impl FamilyFactory for PostgreSqlFactory {
    type Variation = DatabaseKind;

    fn variation(&self) -> DatabaseKind {
        DatabaseKind::PostgreSql
    }
}

impl DatabaseFactory for PostgreSqlFactory {
    fn db_connection(&self) -> Box<dyn Connection> {
        debug!(engine = %self.variation(), "Creating connection");
        Box::new(PostgreSqlConnection)
    }

    fn db_record(&self) -> Box<dyn Record> {
        debug!(engine = %self.variation(), "Creating record");
        Box::new(PostgreSqlRecord)
    }

    fn db_query_builder(&self) -> Box<dyn QueryBuilder> {
        debug!(engine = %self.variation(), "Creating query builder");
        Box::new(PostgreSqlQueryBuilder)
    }
}

/// Produces Oracle driver objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleFactory;

impl FamilyFactory for OracleFactory {
    type Variation = DatabaseKind;

    fn variation(&self) -> DatabaseKind {
        DatabaseKind::Oracle
    }
}

impl DatabaseFactory for OracleFactory {
    fn db_connection(&self) -> Box<dyn Connection> {
        debug!(engine = %self.variation(), "Creating connection");
        Box::new(OracleConnection)
    }

    fn db_record(&self) -> Box<dyn Record> {
        debug!(engine = %self.variation(), "Creating record");
        Box::new(OracleRecord)
    }

    fn db_query_builder(&self) -> Box<dyn QueryBuilder> {
        debug!(engine = %self.variation(), "Creating query builder");
        Box::new(OracleQueryBuilder)
    }
}
