use serde::{Deserialize, Serialize};

use crate::common::{Endpoint, Envelope};

/// The song is addressed by the `{id}` path segment only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Request;

pub type Response = Envelope;

impl Endpoint for Request {
    const PATH: &'static str = "/songs/{id}";

    type Response = Response;
}
