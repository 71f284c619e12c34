use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use space_rangers::auth::UserDirectory;
use space_rangers::cli::{ClientArgs, MissionCommands, run_missions};
use space_rangers::config::ServerConfig;
use space_rangers::server::{AppState, create_router};
use space_rangers::store::{JsonFileStorage, MissionStore};

#[derive(Parser)]
#[command(name = "space-rangers")]
#[command(about = "Mission board server and client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Serve {
        /// TOML config file (host, port, data_file)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long, short)]
        port: Option<u16>,

        /// JSON file holding the missions
        #[arg(long)]
        data_file: Option<PathBuf>,
    },

    /// Work with missions on a running server
    Missions {
        #[command(flatten)]
        client: ClientArgs,

        #[command(subcommand)]
        command: MissionCommands,
    },
}

fn load_config(
    config: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    data_file: Option<PathBuf>,
) -> anyhow::Result<ServerConfig> {
    let mut config = match config {
        Some(path) => ServerConfig::from_file(&path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data_file) = data_file {
        config.data_file = data_file;
    }

    Ok(config)
}

async fn run_serve(config: ServerConfig) -> anyhow::Result<()> {
    let store = MissionStore::open(JsonFileStorage::new(&config.data_file))?;
    info!(
        "Loaded {} missions from {}",
        store.len(),
        config.data_file.display()
    );

    let state = Arc::new(AppState::new(Arc::new(store), UserDirectory::default()));

    let app = create_router(state);
    let addr = config.socket_addr()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("space_rangers=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            data_file,
        } => {
            let config = load_config(config, host, port, data_file)?;
            run_serve(config).await?;
        }
        Commands::Missions { client, command } => {
            // The blocking HTTP client must not run on a runtime worker.
            tokio::task::spawn_blocking(move || run_missions(&client, command)).await??;
        }
    }

    Ok(())
}
