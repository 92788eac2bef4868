//! ChemLab HTTP API server binary.

use anyhow::Result;
use clap::Parser;

use chemlab_server::{Server, ServerConfig};

/// ChemLab experiment API server.
#[derive(Parser, Debug)]
#[command(name = "chemlab-server", version, about)]
struct Args {
    /// Host to listen on.
    #[arg(long, default_value = "0.0.0.0", env = "CHEMLAB_HOST")]
    host: String,

    /// Port to listen on.
    #[arg(short, long, default_value = "8080", env = "CHEMLAB_PORT")]
    port: u16,

    /// Disable permissive CORS.
    #[arg(long)]
    no_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = ServerConfig {
        addr: format!("{}:{}", args.host, args.port).parse()?,
        cors: !args.no_cors,
    };

    Server::new(config).run().await
}
