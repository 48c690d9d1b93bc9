use axum::extract::State;
use axum::Json;
use songbook_api::common::Envelope;
pub use songbook_api::song::delete::{Request, Response};

use crate::catalog::Catalog;
use crate::http::extract::SongId;
use crate::Error;

#[tracing::instrument(skip(catalog))]
pub async fn handler(catalog: &Catalog, id: i64) -> Result<Response, Error> {
    if catalog.delete(id).await? == 0 {
        Err(Error::NotFound("Song not found"))
    } else {
        Ok(Envelope::success())
    }
}

pub async fn json_handler(
    State(catalog): State<Catalog>,
    SongId(id): SongId,
) -> Result<Json<Response>, Error> {
    handler(&catalog, id).await.map(Json)
}
