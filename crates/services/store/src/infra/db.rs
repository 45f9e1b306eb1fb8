//! Database connection and initialization.

use std::collections::HashSet;

use sea_orm::{
    ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use sea_orm_migration::{seaql_migrations, MigratorTrait};

use super::migrations::Migrator;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect and run pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(database_url).await?;
        db.run_migrations().await?;
        tracing::info!("Database connected and migrations applied");

        Ok(db)
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(database_url: &str) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(connect_options(database_url)).await?;
        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// List every known migration with its applied status.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        let applied: HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect())
    }

    /// Drop every table and run all migrations again.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }
}

/// An in-memory SQLite database lives inside a single connection, so the
/// pool must never open a second one.
fn connect_options(database_url: &str) -> ConnectOptions {
    let mut options = ConnectOptions::new(database_url.to_string());
    options.sqlx_logging(false);
    if is_in_memory(database_url) {
        options.max_connections(1).min_connections(1);
    }
    options
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.starts_with("sqlite") && database_url.contains(":memory:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_sqlite() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://:memory:"));
        assert!(!is_in_memory("sqlite://blog.db3?mode=rwc"));
        assert!(!is_in_memory("postgres://localhost/:memory:"));
    }

    #[tokio::test]
    async fn connect_applies_all_migrations() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        let status = db.migration_status().await.unwrap();
        assert_eq!(status.len(), 2);
        assert!(status.iter().all(|(_, applied)| *applied));
    }

    #[tokio::test]
    async fn rollback_marks_last_migration_pending() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.rollback_migration().await.unwrap();

        let status = db.migration_status().await.unwrap();
        assert!(status[0].1);
        assert!(!status[1].1);
    }
}
