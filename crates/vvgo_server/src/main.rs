use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use vvgo_server::{VvgoConfig, build_state, create_router, init_logging};

#[derive(Parser, Debug)]
#[command(author, version, about = "VVGO website backend", long_about = None)]
struct Args {
    /// TOML configuration file; environment variables override its values
    #[arg(short, long, env = "VVGO_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configuration
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => VvgoConfig::from_file(path)?,
        None => VvgoConfig::default(),
    };
    config.apply_env();
    if let Some(listen) = args.listen {
        config.server.listen_address = listen;
    }

    init_logging(&config.server.log_level, config.server.json_logs)?;

    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.listen_address).await?;
    info!(address = %config.server.listen_address, "Starting VVGO server");
    axum::serve(listener, app).await?;

    Ok(())
}
