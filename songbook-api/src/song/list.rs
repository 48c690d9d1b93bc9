use serde::{Deserialize, Serialize};

use super::Song;
use crate::common::{Endpoint, Pagination};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Response {
    pub songs: Vec<Song>,
}

impl Endpoint for Request {
    const PATH: &'static str = "/songs";

    type Response = Response;
}
