use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use songbook_api::common::Page;
use songbook_api::song::Song;

use super::Database;
use crate::orm::songs;
use crate::storage::{Filter, Storage};
use crate::Error;

#[async_trait::async_trait]
impl Storage for Database {
    async fn list(&self, filter: Filter<'_>, page: Page) -> Result<Vec<Song>, Error> {
        // No row can live past `i64::MAX`, so such a page is empty.
        let Some(offset) = page.offset().and_then(|offset| i64::try_from(offset).ok()) else {
            return Ok(vec![]);
        };
        let limit = i64::try_from(page.limit()).unwrap_or(i64::MAX);

        let mut query = songs::table.select(songs::Song::as_select()).order_by(songs::id).into_boxed();
        if let Some(group) = filter.group {
            query = query.filter(songs::group_name.eq(group));
        }
        if let Some(name) = filter.name {
            query = query.filter(songs::name.eq(name));
        }

        Ok(query
            .limit(limit)
            .offset(offset)
            .get_results(&mut self.get().await?)
            .await?
            .into_iter()
            .map(Song::from)
            .collect())
    }

    async fn insert(&self, data: songs::Data<'_>) -> Result<i64, Error> {
        diesel::insert_into(songs::table)
            .values(data)
            .returning(songs::id)
            .get_result(&mut self.get().await?)
            .await
            .map_err(Error::from)
    }

    async fn delete(&self, id: i64) -> Result<usize, Error> {
        diesel::delete(songs::table.filter(songs::id.eq(id)))
            .execute(&mut self.get().await?)
            .await
            .map_err(Error::from)
    }

    async fn update(&self, id: i64, data: songs::Data<'_>) -> Result<usize, Error> {
        diesel::update(songs::table.filter(songs::id.eq(id)))
            .set(data)
            .execute(&mut self.get().await?)
            .await
            .map_err(Error::from)
    }

    async fn get(&self, id: i64) -> Result<Song, Error> {
        songs::table
            .filter(songs::id.eq(id))
            .select(songs::Song::as_select())
            .get_result(&mut self.get().await?)
            .await
            .optional()?
            .map(Song::from)
            .ok_or(Error::NotFound("Song not found"))
    }
}

#[cfg(all(test, database_env))]
mod tests {
    use std::borrow::Cow;

    use fake::{Fake, Faker};
    use rstest::rstest;

    use super::*;
    use crate::test::database;

    fn data<'a>(group: &'a str, name: &'a str, text: &'a str) -> songs::Data<'a> {
        songs::Data {
            group_name: group.into(),
            name: name.into(),
            release_date: Cow::Owned(Faker.fake()),
            text: text.into(),
            link: Cow::Owned(Faker.fake()),
        }
    }

    #[tokio::test]
    async fn test_insert_get() {
        let mock = database::Mock::new().await;
        let database = mock.database();

        let id = database.insert(data("Muse", "Uprising", "a\n\nb")).await.unwrap();
        assert!(id > 0);

        let song = database.get(id).await.unwrap();
        assert_eq!(song.id, id);
        assert_eq!(song.group, "Muse");
        assert_eq!(song.name, "Uprising");
        assert_eq!(song.text, "a\n\nb");
    }

    #[tokio::test]
    async fn test_get_missing() {
        let mock = database::Mock::new().await;
        assert!(matches!(mock.database().get(1).await, Err(Error::NotFound(_))));
    }

    #[rstest]
    #[case(Filter { group: Some("Muse"), name: None }, 1, 10, 3)]
    #[case(Filter { group: Some("Muse"), name: None }, 2, 2, 1)]
    #[case(Filter { group: Some("Muse"), name: Some("Uprising") }, 1, 10, 2)]
    #[case(Filter { group: None, name: Some("Uprising") }, 1, 10, 3)]
    #[case(Filter { group: None, name: None }, 1, 10, 5)]
    #[case(Filter { group: Some("Queen"), name: None }, 1, 10, 0)]
    #[case(Filter { group: None, name: None }, 3, 2, 1)]
    #[case(Filter { group: Some("Muse"), name: None }, 1, 99_999_999_999, 3)]
    #[case(Filter { group: None, name: None }, 5_000_000_000, 1, 0)]
    #[case(Filter { group: None, name: None }, u64::MAX, u64::MAX, 0)]
    #[tokio::test]
    async fn test_list(
        #[case] filter: Filter<'static>,
        #[case] page: u64,
        #[case] limit: u64,
        #[case] n_song: usize,
    ) {
        let mock = database::Mock::new().await;
        let database = mock.database();
        for (group, name) in [
            ("Muse", "Uprising"),
            ("Muse", "Starlight"),
            ("Muse", "Uprising"),
            ("Placebo", "Uprising"),
            ("Placebo", "Every You Every Me"),
        ] {
            database.insert(data(group, name, "")).await.unwrap();
        }

        let songs = database.list(filter, Page::new(page, limit).unwrap()).await.unwrap();
        assert_eq!(songs.len(), n_song);
        assert!(songs.iter().all(|song| filter.group.is_none_or(|group| song.group == group)));
        assert!(songs.iter().all(|song| filter.name.is_none_or(|name| song.name == name)));
        assert!(songs.windows(2).all(|songs| songs[0].id < songs[1].id));
    }

    #[tokio::test]
    async fn test_delete() {
        let mock = database::Mock::new().await;
        let database = mock.database();

        let id = database.insert(data("Muse", "Uprising", "")).await.unwrap();
        assert_eq!(database.delete(id).await.unwrap(), 1);
        assert_eq!(database.delete(id).await.unwrap(), 0);
        assert!(matches!(database.get(id).await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_replaces_every_field() {
        let mock = database::Mock::new().await;
        let database = mock.database();

        let id = database.insert(data("Muse", "Uprising", "a\n\nb")).await.unwrap();
        let replacement = songs::Data {
            group_name: "Placebo".into(),
            name: "Bitter End".into(),
            release_date: "".into(),
            text: "".into(),
            link: "".into(),
        };
        assert_eq!(database.update(id, replacement).await.unwrap(), 1);
        assert_eq!(database.update(id + 1, data("Muse", "Uprising", "")).await.unwrap(), 0);

        let song = database.get(id).await.unwrap();
        assert_eq!(song.id, id);
        assert_eq!(song.group, "Placebo");
        assert_eq!(song.name, "Bitter End");
        assert!(song.release_date.is_empty());
        assert!(song.text.is_empty());
        assert!(song.link.is_empty());
    }
}
