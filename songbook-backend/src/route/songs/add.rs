use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use axum_extra::extract::WithRejection;
use songbook_api::common::Envelope;
pub use songbook_api::song::add::{Request, Response};

use crate::catalog::Catalog;
use crate::integration::{enrichment, Informant};
use crate::orm::songs;
use crate::Error;

#[tracing::instrument(skip(catalog, informant))]
pub async fn handler(
    catalog: &Catalog,
    informant: &dyn Informant,
    request: Request,
) -> Result<Response, Error> {
    let Request { group, song } = request;
    if group.is_empty() || song.is_empty() {
        return Err(Error::InvalidParameter("Group and song fields are required"));
    }

    let enrichment::Info { release_date, text, link } = informant.info(&group, &song).await?;
    let id = catalog
        .add(songs::Data {
            group_name: group.into(),
            name: song.into(),
            release_date: release_date.into(),
            text: text.into(),
            link: link.into(),
        })
        .await?;
    tracing::info!(id, "song added");

    Ok(Envelope::success())
}

pub async fn json_handler(
    State(catalog): State<Catalog>,
    State(informant): State<Arc<dyn Informant>>,
    WithRejection(Json(request), _): WithRejection<Json<Request>, Error>,
) -> Result<Json<Response>, Error> {
    handler(&catalog, informant.as_ref(), request).await.map(Json)
}
