/// Site Server - blog API and static site host
use clap::{Parser, Subcommand};
use site_server::{config::ServerConfig, create_router, state::AppState};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "site-server")]
#[command(about = "Personal site server: blog API and static front end", long_about = None)]
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
    /// Apply database migrations and exit
    Migrate {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Migrate { config } => {
            migrate(config).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Site Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = site_storage::create_pool(&config.storage.database_url).await?;
    site_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    let app_state = AppState::new(pool);
    let app = create_router(app_state, config.web.dir.as_deref());

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

async fn migrate(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    let pool = site_storage::create_pool(&config.storage.database_url).await?;
    site_storage::run_migrations(&pool).await?;

    let count = site_storage::posts::count_posts(&pool).await?;
    println!("Migrations applied ({count} posts stored)");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
