use anyhow::Context;
use clap::Parser;
use kanban_board_server::{init_tracing, open_context, serve, ConfigOverrides, ServerConfig, StorageKind};
use std::path::PathBuf;

/// Serve kanban boards over HTTP
#[derive(Debug, Parser)]
#[command(name = "kanban-board-server", version, about)]
struct Cli {
    /// Config file (TOML, YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding board documents
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Storage backend
    #[arg(long, value_enum)]
    storage: Option<StorageKind>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            storage: self.storage,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref(), &cli.overrides())
        .context("failed to load configuration")?;
    init_tracing(&config.log);

    let ctx = open_context(&config)
        .await
        .with_context(|| format!("failed to open board store in {}", config.data_dir.display()))?;

    serve(&config, ctx).await
}
