use std::sync::Arc;

use songbook_api::common::Page;
use songbook_api::song::Song;

use crate::orm::songs;
use crate::storage::{Filter, Storage};
use crate::Error;

/// Song operations exposed to the request handlers.
///
/// Each call is forwarded to the underlying [`Storage`] as is. Enrichment of new songs happens
/// before [`Catalog::add`] is reached.
#[derive(Clone)]
pub struct Catalog {
    storage: Arc<dyn Storage>,
}

impl Catalog {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn list(&self, filter: Filter<'_>, page: Page) -> Result<Vec<Song>, Error> {
        self.storage.list(filter, page).await
    }

    pub async fn add(&self, data: songs::Data<'_>) -> Result<i64, Error> {
        self.storage.insert(data).await
    }

    pub async fn delete(&self, id: i64) -> Result<usize, Error> {
        self.storage.delete(id).await
    }

    pub async fn update(&self, id: i64, data: songs::Data<'_>) -> Result<usize, Error> {
        self.storage.update(id, data).await
    }

    pub async fn get(&self, id: i64) -> Result<Song, Error> {
        self.storage.get(id).await
    }
}
