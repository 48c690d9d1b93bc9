pub mod add;
pub mod delete;
pub mod get_text;
pub mod list;
pub mod update;

use axum::routing::{get, put};
use axum::Router;
use songbook_api::common::Endpoint;

use crate::state::App;

pub fn router() -> Router<App> {
    Router::new()
        .route(list::Request::PATH, get(list::json_handler).post(add::json_handler))
        .route(delete::Request::PATH, put(update::json_handler).delete(delete::json_handler))
        .route(get_text::Request::PATH, get(get_text::json_handler))
}
