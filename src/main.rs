use std::net::SocketAddr;

use clap::Parser;
use tracing::{info, warn};

use satplot::config::Credentials;
use satplot::satplot_errors::SatplotError;
use satplot::server::router;
use satplot::spacetrack::{SpaceTrackClient, DEFAULT_BASE_URL};

/// Serve altitude/inclination visualizations for Space-Track payloads.
#[derive(Parser, Debug)]
#[command(name = "satplot", version, about)]
struct Args {
    /// Address to bind the HTTP server on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Space-Track API root.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<(), SatplotError> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let credentials = Credentials::from_env();
    if credentials.identity.is_empty() {
        warn!("USERNAME is not set, Space-Track logins will fail");
    }

    let provider = SpaceTrackClient::new(credentials).with_base_url(args.base_url);
    let app = router(provider);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(address = %args.bind, "serving satellite plots");
    axum::serve(listener, app).await?;
    Ok(())
}
