use std::{net::IpAddr, path::PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use storefront_config::{TestingConfig, DEFAULT_CONFIG_PATH};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Graphql { host, port } => {
            let config = storefront_config::load(&cli.config).context("Failed to load config")?;
            let (host, port) = bind_address(host, port, &config.testing);
            storefront_testing::start_server(host, port).await?
        }
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Config files to load, later files override earlier ones
    #[arg(
        short,
        long,
        env = "STOREFRONT_CONFIG",
        value_delimiter = ':',
        default_value = DEFAULT_CONFIG_PATH,
        global = true
    )]
    config: Vec<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the storefront graphql testing server
    Graphql {
        /// Overrides `testing.host` of the config
        #[arg(long)]
        host: Option<IpAddr>,
        /// Overrides `testing.port` of the config
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn bind_address(host: Option<IpAddr>, port: Option<u16>, config: &TestingConfig) -> (IpAddr, u16) {
    (host.unwrap_or(config.host), port.unwrap_or(config.port))
}
