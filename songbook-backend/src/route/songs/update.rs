use axum::extract::State;
use axum::Json;
use axum_extra::extract::WithRejection;
use songbook_api::common::Envelope;
pub use songbook_api::song::update::{Request, Response};

use crate::catalog::Catalog;
use crate::http::extract::SongId;
use crate::orm::songs;
use crate::Error;

#[tracing::instrument(skip(catalog))]
pub async fn handler(catalog: &Catalog, id: i64, request: Request) -> Result<Response, Error> {
    let Request { group, song, release_date, text, link } = request;
    if group.is_empty() || song.is_empty() {
        return Err(Error::InvalidParameter("Group and song fields are required"));
    }

    let data = songs::Data {
        group_name: group.into(),
        name: song.into(),
        release_date: release_date.into(),
        text: text.into(),
        link: link.into(),
    };
    if catalog.update(id, data).await? == 0 {
        Err(Error::NotFound("Song not found"))
    } else {
        Ok(Envelope::success())
    }
}

pub async fn json_handler(
    State(catalog): State<Catalog>,
    SongId(id): SongId,
    WithRejection(Json(request), _): WithRejection<Json<Request>, Error>,
) -> Result<Json<Response>, Error> {
    handler(&catalog, id, request).await.map(Json)
}
