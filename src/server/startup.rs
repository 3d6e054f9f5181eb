use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    service::identity::{IdentityResolver, RobloxIdentityResolver},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the identity resolver shared by the bot and the REST facade.
///
/// The HTTP client does not follow redirects and gives up after the configured
/// identity timeout.
///
/// # Returns
/// - `Ok(Arc<dyn IdentityResolver>)` - Resolver against the configured users API
/// - `Err(AppError::IdentityErr)` - HTTP client could not be built
pub fn build_identity_resolver(config: &Config) -> Result<Arc<dyn IdentityResolver>, AppError> {
    let http_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.identity_timeout)
        .build()
        .map_err(crate::server::error::identity::IdentityError::from)?;

    Ok(Arc::new(RobloxIdentityResolver::new(
        http_client,
        config.roblox_users_api_url.clone(),
    )))
}
