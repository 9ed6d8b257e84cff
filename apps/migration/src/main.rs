//! Schema initialization CLI.
//!
//! Drops whatever exists and recreates the `user` and `post` tables.
//! Destructive on purpose; meant for fresh setups and tests.

use migration::{Migrator, MigratorTrait};
use sea_orm_migration::sea_orm::{Database, DbErr};

const DEFAULT_DATABASE_URL: &str = "sqlite://blog.db?mode=rwc";

#[tokio::main]
async fn main() -> Result<(), DbErr> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let db = Database::connect(&url).await?;

    Migrator::fresh(&db).await?;

    println!("Initialized the database.");

    Ok(())
}
