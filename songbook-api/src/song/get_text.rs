use serde::{Deserialize, Serialize};

use crate::common::{Endpoint, Pagination};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Request {
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub group: String,
    pub song: String,
    pub verses: Vec<String>,
    pub total: usize,
}

impl Endpoint for Request {
    const PATH: &'static str = "/songs/{id}/text";

    type Response = Response;
}
