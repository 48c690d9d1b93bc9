pub mod add;
pub mod delete;
pub mod get_text;
pub mod list;
pub mod update;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct Song {
    pub id: i64,
    pub group: String,
    pub name: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}
