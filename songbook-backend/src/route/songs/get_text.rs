use std::num::NonZeroU64;

use axum::extract::State;
use axum::Json;
use axum_extra::extract::{Query, WithRejection};
pub use songbook_api::song::get_text::{Request, Response};

use crate::catalog::Catalog;
use crate::http::extract::SongId;
use crate::lyrics::Verses;
use crate::Error;

pub const DEFAULT_LIMIT: NonZeroU64 = NonZeroU64::new(3).unwrap();

#[tracing::instrument(skip(catalog))]
pub async fn handler(catalog: &Catalog, id: i64, request: Request) -> Result<Response, Error> {
    let song = catalog.get(id).await?;

    let verses = Verses::split(&song.text);
    let total = verses.total();
    let page = verses
        .page(request.pagination.resolve(DEFAULT_LIMIT))
        .ok_or(Error::NotFound("No verses found for this page"))?
        .iter()
        .map(|verse| (*verse).to_owned())
        .collect();

    Ok(Response { group: song.group, song: song.name, verses: page, total })
}

pub async fn json_handler(
    State(catalog): State<Catalog>,
    SongId(id): SongId,
    WithRejection(Query(request), _): WithRejection<Query<Request>, Error>,
) -> Result<Json<Response>, Error> {
    handler(&catalog, id, request).await.map(Json)
}
