use std::num::NonZeroU64;

use axum::extract::State;
use axum::Json;
use axum_extra::extract::{Query, WithRejection};
pub use songbook_api::song::list::{Request, Response};

use crate::catalog::Catalog;
use crate::storage::Filter;
use crate::Error;

pub const DEFAULT_LIMIT: NonZeroU64 = NonZeroU64::new(10).unwrap();

#[tracing::instrument(skip(catalog))]
pub async fn handler(catalog: &Catalog, request: Request) -> Result<Response, Error> {
    let Request { group, name, pagination } = request;
    if group.is_empty() || name.is_empty() {
        return Err(Error::InvalidParameter("Group and name parameters are required"));
    }

    let songs = catalog.list(Filter::new(&group, &name), pagination.resolve(DEFAULT_LIMIT)).await?;
    if songs.is_empty() { Err(Error::NotFound("No songs found")) } else { Ok(Response { songs }) }
}

pub async fn json_handler(
    State(catalog): State<Catalog>,
    WithRejection(Query(request), _): WithRejection<Query<Request>, Error>,
) -> Result<Json<Response>, Error> {
    handler(&catalog, request).await.map(Json)
}
