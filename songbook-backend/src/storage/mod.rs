use songbook_api::common::Page;
use songbook_api::song::Song;

use crate::orm::songs;
use crate::Error;

/// Equality filters for listing. `None` leaves the column unconstrained.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filter<'a> {
    pub group: Option<&'a str>,
    pub name: Option<&'a str>,
}

impl<'a> Filter<'a> {
    pub fn new(group: &'a str, name: &'a str) -> Self {
        Self {
            group: Some(group).filter(|group| !group.is_empty()),
            name: Some(name).filter(|name| !name.is_empty()),
        }
    }
}

/// Row-level access to the `songs` table. Every method is a single statement.
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn list(&self, filter: Filter<'_>, page: Page) -> Result<Vec<Song>, Error>;

    /// Returns the identifier assigned to the new row.
    async fn insert(&self, data: songs::Data<'_>) -> Result<i64, Error>;

    /// Returns the number of deleted rows.
    async fn delete(&self, id: i64) -> Result<usize, Error>;

    /// Replaces every column but the identifier. Returns the number of updated rows.
    async fn update(&self, id: i64, data: songs::Data<'_>) -> Result<usize, Error>;

    async fn get(&self, id: i64) -> Result<Song, Error>;
}
