//! Shared helpers for backend integration tests.

mod cluster_skip;

pub use cluster_skip::handle_cluster_setup_failure;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

/// Render a `postgres` error with its SQLSTATE and server message.
///
/// The plain `Display` output collapses server errors to `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    match error.as_db_error() {
        Some(db_error) => {
            let mut summary = format!(
                "postgres error {:?}: {}",
                db_error.code(),
                db_error.message()
            );
            if let Some(detail) = db_error.detail() {
                summary.push_str("; detail: ");
                summary.push_str(detail);
            }
            summary
        }
        None => error.to_string(),
    }
}

/// Drop and recreate `name`, returning its connection URL.
///
/// Uses `postgres` directly since `DROP DATABASE` cannot run inside a
/// transaction.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    // One statement per call: a multi-statement batch is an implicit transaction.
    for statement in [
        format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"),
        format!("CREATE DATABASE \"{name}\""),
    ] {
        client
            .batch_execute(&statement)
            .map_err(|err| format_postgres_error(&err))?;
    }
    Ok(cluster.connection().database_url(name))
}
