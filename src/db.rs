use std::time::Duration;

use migration::Migrator;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;

use crate::error::AppResult;

const FILE_PRAGMAS: [&str; 2] = ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL"];

// Long enough that the pool never recycles the in-memory connection.
const MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:")
}

fn connect_options(database_url: &str) -> ConnectOptions {
    let mut opts = ConnectOptions::new(database_url);
    opts.sqlx_logging(false);
    if is_in_memory(database_url) {
        // Every pooled connection to :memory: opens its own empty database,
        // and closing the only one drops the data with it.
        opts.max_connections(1)
            .min_connections(1)
            .max_lifetime(MEMORY_CONN_LIFETIME)
            .idle_timeout(MEMORY_CONN_LIFETIME);
    }
    opts
}

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let db = Database::connect(connect_options(database_url)).await?;

    if !is_in_memory(database_url) {
        for pragma in FILE_PRAGMAS {
            db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string()))
                .await?;
        }
    }

    Migrator::up(&db, None).await?;
    tracing::debug!(url = %database_url, "schema ensured");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_pool_keeps_its_single_connection() {
        let opts = connect_options("sqlite::memory:");

        assert_eq!(opts.get_max_connections(), Some(1));
        assert_eq!(opts.get_min_connections(), Some(1));
        assert_eq!(opts.get_max_lifetime(), Some(MEMORY_CONN_LIFETIME));
        assert_eq!(opts.get_idle_timeout(), Some(MEMORY_CONN_LIFETIME));
    }

    #[test]
    fn file_pool_uses_default_limits() {
        let opts = connect_options("sqlite://movie_catalog.db?mode=rwc");

        assert_eq!(opts.get_max_connections(), None);
        assert_eq!(opts.get_max_lifetime(), None);
    }
}
