use anyhow::Result;
use sqlx::{Pool, Sqlite, migrate::MigrateDatabase, sqlite::SqlitePoolOptions};
use std::time::Duration;

pub mod ingredient_store;
pub mod machine_store;
pub mod recipe_store;
pub mod score_store;
pub mod settings_profile_store;
pub mod store;
pub mod tables;
pub mod user_store;

pub use ingredient_store::IngredientStore;
pub use machine_store::MachineStore;
pub use recipe_store::RecipeStore;
pub use score_store::ScoreStore;
pub use settings_profile_store::SettingsProfileStore;
pub use store::{Creatable, Deletable, Editable, Listable};
pub use user_store::UserStore;

use tables::{
    IngredientTable, MachineTable, RecipeTable, ScoreTable, SettingsProfileTable, UserTable,
};

pub type DbPool = Pool<Sqlite>;

/// Initialize the database connection pool
///
/// Connections stay open for the lifetime of the pool, so an in-memory
/// database keeps its contents between calls.
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    // Create the database if it doesn't exist
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        Sqlite::create_database(database_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await?;

    setup_database(&pool).await?;

    tracing::info!("Database ready at {}", database_url);
    Ok(pool)
}

/// Set up the database schema
pub async fn setup_database(pool: &DbPool) -> Result<()> {
    sqlx::query("PRAGMA foreign_keys = ON;").execute(pool).await?;

    // Score before User: User references it
    for statement in [
        ScoreTable::create_table(),
        UserTable::create_table(),
        RecipeTable::create_table(),
        IngredientTable::create_table(),
        MachineTable::create_table(),
        SettingsProfileTable::create_table(),
    ] {
        sqlx::query(&statement).execute(pool).await?;
    }

    Ok(())
}

/// Insert the settings profiles every installation starts with, if the
/// settings table is empty.
pub async fn seed_settings_profiles(pool: &DbPool) -> Result<()> {
    let count: (i64,) = sqlx::query_as(&format!(
        "SELECT COUNT(*) FROM {}",
        SettingsProfileTable::TABLE_NAME
    ))
    .fetch_one(pool)
    .await?;

    if count.0 > 0 {
        return Ok(());
    }

    let insert = format!(
        "INSERT INTO {} ({}, {}, {}, {}) VALUES (?, 0, 14, 'Arial')",
        SettingsProfileTable::TABLE_NAME,
        SettingsProfileTable::COLUMN_NAME,
        SettingsProfileTable::COLUMN_DARK_MODE,
        SettingsProfileTable::COLUMN_FONT_SIZE,
        SettingsProfileTable::COLUMN_FONT_FAMILY
    );

    for name in SettingsProfileTable::SEEDED_PROFILES {
        sqlx::query(&insert).bind(name).execute(pool).await?;
    }

    tracing::info!(
        "Seeded {} settings profiles",
        SettingsProfileTable::SEEDED_PROFILES.len()
    );
    Ok(())
}
