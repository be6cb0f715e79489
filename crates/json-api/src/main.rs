//! Product Catalog JSON API Server

use std::process;

use salvo::prelude::*;
use thiserror::Error;
use tracing::{error, info};

use catalog_app::context::{AppContext, AppInitError};

use crate::{
    auth::ApiKey,
    config::ServerConfig,
    observability::{Observability, ObservabilityError},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod config;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to initialise observability: {0}")]
    Observability(#[from] ObservabilityError),

    #[error("failed to initialise app context: {0}")]
    App(#[from] AppInitError),
}

/// Product Catalog JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    let observability = match Observability::init(&config) {
        Ok(observability) => observability,
        Err(init_error) => {
            #[expect(
                clippy::print_stderr,
                reason = "the subscriber failed to install, so tracing output goes nowhere"
            )]
            {
                eprintln!("{}", StartupError::from(init_error));
            }

            process::exit(1);
        }
    };

    if let Err(startup_error) = serve(config).await {
        error!("{startup_error}");
        observability.shutdown();

        process::exit(1);
    }

    observability.shutdown();
}

async fn serve(config: ServerConfig) -> Result<(), StartupError> {
    let app = AppContext::from_database_url(
        &config.database.database_url,
        config.database.max_connections,
    )
    .await?;

    let state = State::shared(app, ApiKey::new(&config.auth.api_key));

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;
    let server = Server::new(listener);
    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router::app_service(state)).await;

    info!("server stopped");

    Ok(())
}
