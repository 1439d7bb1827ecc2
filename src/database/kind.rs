//! The database engines a driver family can target.

use factory_framework::{parse_variation, FrameworkError, Variation};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Database engine. Connection, record and query-builder objects only work
/// together when they target the same engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseKind {
    #[serde(rename = "MySQL")]
    MySql,
    #[serde(rename = "PostgreSQL")]
    PostgreSql,
    #[serde(rename = "Oracle")]
    Oracle,
}

impl Variation for DatabaseKind {
    const FAMILY: &'static str = "database";

    fn all() -> &'static [Self] {
        &[DatabaseKind::MySql, DatabaseKind::PostgreSql, DatabaseKind::Oracle]
    }

    fn name(&self) -> &'static str {
        match self {
            DatabaseKind::MySql => "MySQL",
            DatabaseKind::PostgreSql => "PostgreSQL",
            DatabaseKind::Oracle => "Oracle",
        }
    }
}

impl Display for DatabaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatabaseKind {
    type Err = FrameworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variation(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(DatabaseKind::MySql.to_string(), "MySQL");
        assert_eq!(DatabaseKind::PostgreSql.to_string(), "PostgreSQL");
        assert_eq!(DatabaseKind::Oracle.to_string(), "Oracle");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("postgresql".parse::<DatabaseKind>().unwrap(), DatabaseKind::PostgreSql);
        assert_eq!("MYSQL".parse::<DatabaseKind>().unwrap(), DatabaseKind::MySql);

        let err = "SQLite".parse::<DatabaseKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown database variation: SQLite");
    }
}
