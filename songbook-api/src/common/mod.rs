pub mod envelope;
pub mod pagination;

pub use envelope::{Envelope, Status};
pub use pagination::{Page, Pagination};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub trait Endpoint {
    const PATH: &'static str;

    type Response: Serialize + DeserializeOwned;
}
