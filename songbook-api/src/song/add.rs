use serde::{Deserialize, Serialize};

use crate::common::{Endpoint, Envelope};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct Request {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub song: String,
}

pub type Response = Envelope;

impl Endpoint for Request {
    const PATH: &'static str = "/songs";

    type Response = Response;
}
