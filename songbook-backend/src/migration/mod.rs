use color_eyre::eyre::eyre;
use concat_string::concat_string;
use diesel::deserialize::QueryableByName;
use diesel::{sql_types, Connection};
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use url::Url;

use crate::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

const MAINTENANCE_DATABASE: &str = "postgres";

pub async fn run(database_url: &str) -> Result<(), Error> {
    let database_url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut async_wrapper =
            <AsyncConnectionWrapper<AsyncPgConnection> as Connection>::establish(&database_url)
                .map_err(|error| eyre!("Could not connect to the database: {error}"))?;

        for migration in async_wrapper
            .pending_migrations(MIGRATIONS)
            .map_err(|error| eyre!("Could not get pending migration(s): {error}"))?
        {
            tracing::info!(pending_migration =% migration.name());
            async_wrapper
                .run_migration(&migration)
                .map_err(|error| eyre!("Could not run migration: {error}"))?;
        }
        tracing::info!("migration done");
        Ok::<_, Error>(())
    })
    .await
    .map_err(|error| eyre!("Could not spawn migration thread: {error}"))?
}

#[derive(QueryableByName)]
struct Exists {
    #[diesel(sql_type = sql_types::Bool)]
    found: bool,
}

fn split_database_url(database_url: &str) -> Result<(String, String), Error> {
    let mut url =
        Url::parse(database_url).map_err(|_| Error::InvalidParameter("Invalid database url"))?;
    let name = url.path().trim_start_matches('/').to_owned();
    if name.is_empty() {
        return Err(Error::InvalidParameter("Database url does not contain a database name"));
    }
    url.set_path(MAINTENANCE_DATABASE);
    Ok((url.to_string(), name))
}

/// Creates the database named by `database_url` if the server does not have it yet.
pub async fn create_database(database_url: &str) -> Result<(), Error> {
    let (maintenance_url, name) = split_database_url(database_url)?;
    let mut conn = AsyncPgConnection::establish(&maintenance_url)
        .await
        .map_err(|error| eyre!("Could not connect to the maintenance database: {error}"))?;

    let Exists { found } =
        diesel::sql_query("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1) AS found")
            .bind::<sql_types::Text, _>(name.as_str())
            .get_result(&mut conn)
            .await?;
    if found {
        tracing::debug!(database = %name, "database exists");
    } else {
        diesel::sql_query(concat_string!("CREATE DATABASE \"", name.replace('"', "\"\""), "\";"))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %name, "database created");
    }
    Ok(())
}
