use crate::migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::{MigratorTrait, SchemaManager};

use crate::error::BotError;

pub async fn init(database_url: &str) -> Result<DatabaseConnection, BotError> {
    let mut opt = ConnectOptions::new(database_url.to_owned());
    opt.sqlx_logging_level(log::LevelFilter::Debug);
    let connection = Database::connect(opt).await?;
    log::info!("Connected to database...");

    let schema_manager = SchemaManager::new(&connection);
    Migrator::up(&connection, None).await?;
    if !schema_manager.has_table("user_forms").await? {
        return Err(BotError::Config(
            "user_forms table is missing after migrations".to_string(),
        ));
    }
    log::info!("Applied migrations...");

    Ok(connection)
}
