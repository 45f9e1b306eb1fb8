//! Store Library
//!
//! Data access for users and posts: SeaORM entities, schema migrations and
//! the repository traits the HTTP layer depends on. Repositories are thin
//! pass-throughs to query-builder calls; every failure surfaces as
//! `AppError::Database`.

pub mod infra;
pub mod repository;

use tracing::info;

pub use crate::infra::{Database, Migrator};
pub use crate::repository::{PostRepository, PostStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use crate::repository::{MockPostRepository, MockUserRepository};

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    database_url: &str,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(database_url).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
