use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use agrigenius::config::ServerConfig;
use agrigenius::server::{AppState, create_router};
use agrigenius::store::{MemStore, Store, seed_demo_data};

#[derive(Parser)]
#[command(name = "agrigenius")]
#[command(about = "A farming assistant server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, short, default_value = "8080")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("agrigenius=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = ServerConfig { host, port };

            // The store lives here, at the composition root, and is handed to
            // the router; nothing else holds a reference to it.
            let store: Arc<dyn Store> = Arc::new(MemStore::new());
            seed_demo_data(store.as_ref())?;

            info!("Seeded demo data");

            let state = Arc::new(AppState { store });

            let app = create_router(state);
            let addr = config.socket_addr()?;

            info!("Starting server on {}", addr);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
