use log::*;
use tokio::net::TcpListener;

pub use self::error::{Error, Result};
pub use service::AppState;

mod controller;
mod error;
mod extractors;
mod params;
mod response;
pub mod router;

/// Binds the configured interface and port and serves the API until the
/// process is stopped.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let address = format!(
        "{}:{}",
        app_state.config.interface(),
        app_state.config.port
    );
    let router = router::define_routes(app_state);

    let listener = TcpListener::bind(&address).await?;
    info!("Zoom Meeting SDK auth endpoint listening on http://{address}");

    axum::serve(listener, router).await
}
