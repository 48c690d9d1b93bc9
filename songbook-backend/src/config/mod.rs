mod database;
pub mod integration;
pub mod log;
mod server;

pub use database::Database;
use figment::providers::{Env, Serialized};
use figment::Figment;
pub use integration::Integration;
pub use log::Log;
use serde::Deserialize;
pub use server::Server;
use songbook_api::constant;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    pub database: Database,
    pub integration: Integration,
    pub log: Log,
}

impl Config {
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Env::prefixed(constant::ENV_PREFIX).split("__"))
            .join(Serialized::default("server", Server::default()))
            .join(Serialized::default("database.create_if_missing", true))
            .join(Serialized::default("integration", Integration::default()))
            .join(Serialized::default("log", Log::default()))
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
