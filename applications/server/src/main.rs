/// Finetune Server - catalog query service
use clap::{Parser, Subcommand};
use finetune_core::TrackQuery;
use finetune_server::{api, config::ServerConfig, state::AppState};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "finetune-server")]
#[command(about = "Finetune catalog query server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print catalog tracks matching a filter
    List {
        /// Genre name, "All" for no genre filter
        #[arg(short, long)]
        genre: Option<String>,
        /// Case-insensitive text matched against title and composer
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finetune_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::List { genre, search } => {
            list_tracks(genre.as_deref(), search.as_deref()).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Finetune Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let catalog = Arc::new(config.catalog.build_catalog()?);
    tracing::info!("Catalog loaded with {} tracks", catalog.len());

    // Build router
    let app = api::router(AppState::new(catalog));

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn list_tracks(genre: Option<&str>, search: Option<&str>) -> anyhow::Result<()> {
    let config = ServerConfig::load(None)?;
    let catalog = config.catalog.build_catalog()?;

    let tracks = catalog.query(&TrackQuery::new(genre, search));

    println!("Tracks:");
    for track in &tracks {
        println!(
            "  {:>2}  {} - {} [{}, {}]",
            track.id.get(),
            track.composer,
            track.title,
            track.genre,
            track.duration
        );
    }
    println!("{} of {} tracks", tracks.len(), catalog.len());

    Ok(())
}
