pub mod handlers;
pub mod types;

use crate::{Result, config::Config, dispatch::Dispatcher};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use handlers::{AppState, INFERENCE_UNAVAILABLE_MESSAGE, SERVER_ERROR_MESSAGE};
pub use types::{SendRequest, SendResponse};

pub fn router(dispatcher: Dispatcher) -> Router {
    let app_state = AppState {
        dispatcher: Arc::new(dispatcher),
    };

    Router::new()
        .route("/send", post(handlers::send))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let dispatcher = Dispatcher::from_config(&config)?;
    info!(
        "Forwarding chat to {} (model {}), geocoding via {}",
        config.inference.url, config.inference.model, config.geocoding.url
    );

    let app = router(dispatcher);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
