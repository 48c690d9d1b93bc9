use std::sync::Arc;

use fake::{Fake, Faker};
use rstest::fixture;
use songbook_api::song::Song;

use super::{informant, storage};
use crate::catalog::Catalog;
use crate::integration::enrichment;
use crate::orm::songs;
use crate::state::App;

pub struct Mock {
    storage: Arc<storage::Memory>,
    catalog: Catalog,
    informant: Arc<informant::Mock>,
}

#[bon::bon]
impl Mock {
    pub fn new(info: Option<enrichment::Info>) -> Self {
        let storage = Arc::new(storage::Memory::default());
        Self {
            catalog: Catalog::new(storage.clone()),
            storage,
            informant: Arc::new(informant::Mock::new(info)),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn informant(&self) -> &informant::Mock {
        &self.informant
    }

    pub fn state(&self) -> App {
        App { catalog: self.catalog.clone(), informant: self.informant.clone() }
    }

    #[builder]
    pub async fn add_song(
        &self,
        #[builder(into, default = Faker.fake::<String>())] group: String,
        #[builder(into, default = Faker.fake::<String>())] name: String,
        #[builder(into, default = Faker.fake::<String>())] text: String,
    ) -> &Self {
        self.catalog
            .add(songs::Data {
                group_name: group.into(),
                name: name.into(),
                release_date: Faker.fake::<String>().into(),
                text: text.into(),
                link: Faker.fake::<String>().into(),
            })
            .await
            .unwrap();
        self
    }

    /// Songs in insertion order.
    pub async fn songs(&self) -> Vec<Song> {
        self.storage.rows().await
    }

    pub async fn song(&self, index: usize) -> Song {
        self.songs().await.swap_remove(index)
    }
}

#[fixture]
pub async fn mock(
    #[default(0)] n_song: usize,
    #[default(Some(Faker.fake()))] info: Option<enrichment::Info>,
) -> Mock {
    let mock = Mock::new(info);
    for _ in 0..n_song {
        mock.add_song().call().await;
    }
    mock
}
