//! Concrete driver objects, one type per (kind, engine) pair.

use super::{Connection, DatabaseKind, QueryBuilder, Record};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MySqlConnection;

impl Connection for MySqlConnection {
    fn set_connection(&self) -> String {
        "MySQL DB connected".to_string()
    }

    fn variation(&self) -> DatabaseKind {
        DatabaseKind::MySql
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MySqlRecord;

impl Record for MySqlRecord {
    fn add_record(&self) -> String {
        "Record added to MySQL DB".to_string()
    }

    fn variation(&self) -> DatabaseKind {
        DatabaseKind::MySql
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MySqlQueryBuilder;

impl QueryBuilder for MySqlQueryBuilder {
    fn query(&self) -> String {
        "MySQL DB query was executed successfully".to_string()
    }

    fn variation(&self) -> DatabaseKind {
        DatabaseKind::MySql
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PostgreSqlConnection;

impl Connection for PostgreSqlConnection {
    fn set_connection(&self) -> String {
        "PostgreSQL DB connected".to_string()
    }

    fn variation(&self) -> DatabaseKind {
        DatabaseKind::PostgreSql
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PostgreSqlRecord;

impl Record for PostgreSqlRecord {
    fn add_record(&self) -> String {
        "Record added to PostgreSQL DB".to_string()
    }

    fn variation(&self) -> DatabaseKind {
        DatabaseKind::PostgreSql
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PostgreSqlQueryBuilder;

impl QueryBuilder for PostgreSqlQueryBuilder {
    fn query(&self) -> String {
        "PostgreSQL DB query was executed successfully".to_string()
    }

    fn variation(&self) -> DatabaseKind {
        DatabaseKind::PostgreSql
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct OracleConnection;

impl Connection for OracleConnection {
    fn set_connection(&self) -> String {
        "Oracle DB connected".to_string()
    }

    fn variation(&self) -> DatabaseKind {
        DatabaseKind::Oracle
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct OracleRecord;

impl Record for OracleRecord {
    fn add_record(&self) -> String {
        "Record added to Oracle DB".to_string()
    }

    fn variation(&self) -> DatabaseKind {
        DatabaseKind::Oracle
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct OracleQueryBuilder;

impl QueryBuilder for OracleQueryBuilder {
    fn query(&self) -> String {
        "Oracle DB query was executed successfully".to_string()
    }

    fn variation(&self) -> DatabaseKind {
        DatabaseKind::Oracle
    }
}
