use mimalloc::MiMalloc;
use songbook_api::constant;
use songbook_backend::{build, config, init_tracing, migration};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), color_eyre::Report> {
    color_eyre::install()?;

    let config = config::Config::new()?;
    init_tracing(&config.log)?;
    tracing::info!(server_version =% constant::SERVER_VERSION);
    tracing::info!("{config:#?}");

    if config.database.create_if_missing {
        migration::create_database(&config.database.url).await?;
    }
    migration::run(&config.database.url).await?;

    let listener = tokio::net::TcpListener::bind(config.server.to_socket_addr()).await?;
    tracing::info!(address =% listener.local_addr()?, "listening");
    axum::serve(listener, build(&config)?).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(?error, "could not listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(?error, "could not listen for sigterm");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutting down");
}
