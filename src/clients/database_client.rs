//! # Database Client
//!
//! Client code for the database driver family: connect, add a record, run a
//! query. Works with any [`DatabaseFactory`].
use crate::database::DatabaseFactory;
use factory_framework::{FamilyFactory, FrameworkError};
use std::io::Write;
use tracing::instrument;

/// Returns the connection, record and query results, in that order.
#[instrument(name = "database_client", skip_all, fields(engine = %factory.variation()))]
pub fn database_lines(factory: &dyn DatabaseFactory) -> Vec<String> {
    vec![
        factory.db_connection().set_connection(),
        factory.db_record().add_record(),
        factory.db_query_builder().query(),
    ]
}

/// Writes [`database_lines`] to `out`, one per line.
pub fn database_client(
    factory: &dyn DatabaseFactory,
    out: &mut dyn Write,
) -> Result<(), FrameworkError> {
    for line in database_lines(factory) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
