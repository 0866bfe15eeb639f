use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::blog_service::BlogService;
use data::repositories::postgres::post_repository::PostgresPostRepository;
use infrastructure::database::{create_pool, migration_status, revert_last_migration, run_migrations};
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[derive(Debug, Parser)]
#[command(name = "blog-service", version, about = "Content service: serves ListPosts over gRPC")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage the database schema.
    Migrate {
        #[arg(value_enum)]
        direction: MigrationDirection,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MigrationDirection {
    /// Apply all pending migrations.
    Up,
    /// Revert the latest applied migration.
    Down,
    /// Print the current schema version.
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url, settings.db_max_connections).await?;

    let result = match cli.command {
        Some(Command::Migrate { direction }) => migrate(&pool, direction).await,
        None => {
            let repo = PostgresPostRepository::new(pool.clone());
            let blog_service = Arc::new(BlogService::new(repo, settings.page_size));
            let state = AppState::new(blog_service);

            server::run_grpc(&settings, state, shutdown_signal()).await
        }
    };

    pool.close().await;
    result
}

async fn migrate(pool: &sqlx::PgPool, direction: MigrationDirection) -> Result<()> {
    info!(?direction, "running migrations");
    match direction {
        MigrationDirection::Up => run_migrations(pool).await?,
        MigrationDirection::Down => match revert_last_migration(pool).await? {
            Some(version) => println!("Reverted: {version}"),
            None => println!("Nothing to revert"),
        },
        MigrationDirection::Status => {
            let status = migration_status(pool).await?;
            match status.current_version {
                Some(version) => println!("Version: {version}"),
                None => println!("Version: no migrations applied"),
            }
            println!("Pending: {}", status.pending);
        }
    }
    println!("Done");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command, MigrationDirection};

    #[test]
    fn no_arguments_runs_server() {
        let cli = Cli::try_parse_from(["blog-service"]).expect("must parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn migrate_accepts_known_directions() {
        for (arg, expected) in [
            ("up", MigrationDirection::Up),
            ("down", MigrationDirection::Down),
            ("status", MigrationDirection::Status),
        ] {
            let cli = Cli::try_parse_from(["blog-service", "migrate", arg]).expect("must parse");
            match cli.command {
                Some(Command::Migrate { direction }) => {
                    assert_eq!(format!("{direction:?}"), format!("{expected:?}"))
                }
                None => panic!("expected migrate command"),
            }
        }
    }

    #[test]
    fn migrate_rejects_unknown_direction() {
        assert!(Cli::try_parse_from(["blog-service", "migrate", "sideways"]).is_err());
        assert!(Cli::try_parse_from(["blog-service", "migrate"]).is_err());
    }
}
