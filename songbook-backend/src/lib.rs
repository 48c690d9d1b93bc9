pub mod catalog;
pub mod config;
pub mod database;
mod error;
pub mod http;
pub mod integration;
pub mod lyrics;
pub mod migration;
pub mod orm;
pub mod route;
mod schema;
pub mod state;
pub mod storage;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
pub use error::Error;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

#[cfg(test)]
mod test;

pub fn router(app: state::App, config: &config::Server) -> Router {
    Router::new()
        .merge(route::songs::router())
        .with_state(app)
        .layer(CatchPanicLayer::custom(Error::from_panic))
        .layer(axum::middleware::from_fn_with_state(config.request_timeout, http::timeout))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();
            tracing::info_span!(
                "request", method = %request.method(), uri = %request.uri(), request_id
            )
        }))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

pub fn build(config: &config::Config) -> Result<Router, Error> {
    Ok(router(state::App::new(config)?, &config.server))
}

pub fn init_tracing(config: &config::Log) -> Result<(), color_eyre::Report> {
    let format = match (config.format, config.time) {
        (config::log::Format::Plain, true) => tracing_subscriber::fmt::layer().boxed(),
        (config::log::Format::Plain, false) => {
            tracing_subscriber::fmt::layer().without_time().boxed()
        }
        (config::log::Format::Json, true) => tracing_subscriber::fmt::layer().json().boxed(),
        (config::log::Format::Json, false) => {
            tracing_subscriber::fmt::layer().json().without_time().boxed()
        }
    };

    tracing_subscriber::registry()
        .with(format)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(config.directives()))?,
        )
        .with(tracing_error::ErrorLayer::default())
        .try_init()?;
    Ok(())
}
