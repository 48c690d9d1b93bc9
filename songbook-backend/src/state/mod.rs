use std::sync::Arc;

use axum::extract::FromRef;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::database::Database;
use crate::integration::{enrichment, Informant};
use crate::Error;

#[derive(Clone, FromRef)]
pub struct App {
    pub catalog: Catalog,
    pub informant: Arc<dyn Informant>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let database = Database::new(&config.database)?;
        let informant = enrichment::Client::new(&config.integration.enrichment)?;
        Ok(Self { catalog: Catalog::new(Arc::new(database)), informant: Arc::new(informant) })
    }
}
