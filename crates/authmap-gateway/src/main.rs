//! AuthMap gateway binary.
//!
//! - Loads `AUTHMAP_CONFIG` (default `authmap.yaml`) with strict parsing
//! - Compiles route policies; an invalid policy aborts startup
//! - Serves the demo routes behind the role gate

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use authmap_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = config::config_path_from_env();
    let cfg = config::load_from_file(&path)?;
    let listen: SocketAddr = cfg.server.listen.parse()?;

    let state = app_state::AppState::new(cfg)?;
    let routes = state.routes().len();
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, routes, "authmap-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
