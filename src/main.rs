use log::*;
use service::{config::Config, logging::Logger, AppState};

#[tokio::main]
async fn main() {
    let config = Config::new();

    if let Err(err) = Logger::init_logger(&config) {
        eprintln!("Failed to start logger: {err}");
    }

    info!(
        "Starting Zoom Meeting SDK auth endpoint v{}",
        env!("CARGO_PKG_VERSION")
    );
    if config.zoom_meeting_host_key().is_none() || config.zoom_meeting_host_secret().is_none() {
        warn!("ZOOM_MEETING_HOST_KEY or ZOOM_MEETING_HOST_SECRET is not set; signing will fail");
    }

    let app_state = AppState::new(config);

    if let Err(err) = web::init_server(app_state).await {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
