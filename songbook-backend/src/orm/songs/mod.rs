use std::borrow::Cow;

use diesel::prelude::*;

pub use crate::schema::songs::{self, *};

/// Every column but the identifier. Used for inserts and full-row replacements.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = songs, check_for_backend(crate::orm::Type))]
pub struct Data<'a> {
    pub group_name: Cow<'a, str>,
    pub name: Cow<'a, str>,
    pub release_date: Cow<'a, str>,
    pub text: Cow<'a, str>,
    pub link: Cow<'a, str>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = songs, check_for_backend(crate::orm::Type))]
pub struct Song {
    pub id: i64,
    pub group_name: String,
    pub name: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

impl From<Song> for songbook_api::song::Song {
    fn from(value: Song) -> Self {
        Self {
            id: value.id,
            group: value.group_name,
            name: value.name,
            release_date: value.release_date,
            text: value.text,
            link: value.link,
        }
    }
}

#[cfg(test)]
impl Data<'_> {
    pub fn into_song(self, song_id: i64) -> songbook_api::song::Song {
        songbook_api::song::Song {
            id: song_id,
            group: self.group_name.into_owned(),
            name: self.name.into_owned(),
            release_date: self.release_date.into_owned(),
            text: self.text.into_owned(),
            link: self.link.into_owned(),
        }
    }
}
