use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::Error;

/// The `{id}` path segment of a song route. Only positive integers are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongId(pub i64);

impl SongId {
    fn parse(value: &str) -> Result<Self, Error> {
        value
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or(Error::InvalidParameter("Invalid song id"))
    }
}

impl<S> FromRequestParts<S> for SongId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| Error::InvalidParameter("Invalid song id"))?;
        Self::parse(&id)
    }
}
