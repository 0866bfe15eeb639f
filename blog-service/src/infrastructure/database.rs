use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::migrate::{Migrate, Migrator};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MigrationStatus {
    pub(crate) current_version: Option<i64>,
    pub(crate) pending: usize,
}

pub(crate) async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .context("failed to connect to database")?;

    info!(max_connections, "database pool ready");
    Ok(pool)
}

pub(crate) async fn run_migrations(pool: &PgPool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("failed to apply migrations")?;
    info!("migrations applied");
    Ok(())
}

/// Reverts the most recently applied migration. Returns its version, or
/// `None` when nothing is applied.
pub(crate) async fn revert_last_migration(pool: &PgPool) -> Result<Option<i64>> {
    let applied = applied_versions(pool).await?;
    let Some((&latest, rest)) = applied.split_last() else {
        info!("no migrations to revert");
        return Ok(None);
    };
    let target = rest.last().copied().unwrap_or(0);

    MIGRATOR
        .undo(pool, target)
        .await
        .with_context(|| format!("failed to revert migration {latest}"))?;
    info!(version = latest, "migration reverted");
    Ok(Some(latest))
}

pub(crate) async fn migration_status(pool: &PgPool) -> Result<MigrationStatus> {
    let applied = applied_versions(pool).await?;
    let known = MIGRATOR
        .iter()
        .filter(|migration| !migration.migration_type.is_down_migration())
        .map(|migration| migration.version);

    Ok(status_from_versions(&applied, known))
}

async fn applied_versions(pool: &PgPool) -> Result<Vec<i64>> {
    let mut conn = pool
        .acquire()
        .await
        .context("failed to acquire connection for migrations")?;
    conn.ensure_migrations_table()
        .await
        .context("failed to prepare migrations table")?;

    let mut versions: Vec<i64> = conn
        .list_applied_migrations()
        .await
        .context("failed to list applied migrations")?
        .into_iter()
        .map(|migration| migration.version)
        .collect();
    versions.sort_unstable();
    Ok(versions)
}

fn status_from_versions(applied: &[i64], known: impl Iterator<Item = i64>) -> MigrationStatus {
    MigrationStatus {
        current_version: applied.iter().max().copied(),
        pending: known.filter(|version| !applied.contains(version)).count(),
    }
}
