/* src/cli/core/src/main.rs */

mod export;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use placard_server::{PlacardApp, PlacardConfig, find_config, load_config};
use placard_server_axum::IntoAxumRouter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
  name = "placard",
  version,
  about = "Localized under-construction site with JSON-LD metadata"
)]
struct Cli {
  /// Enable info-level logging (otherwise RUST_LOG applies)
  #[arg(short, long, global = true)]
  verbose: bool,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the placeholder site over HTTP
  Serve {
    /// Path to placard.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override server.port
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Pre-render every locale into static HTML
  Build {
    /// Path to placard.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    out: PathBuf,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, PlacardConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_config(&cwd)?
    }
  };
  let config = load_config(&path)?;
  Ok((path, config))
}

fn init_tracing(verbose: bool) {
  let filter = if verbose { EnvFilter::new("info") } else { EnvFilter::from_default_env() };
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn run(cli: Cli) -> Result<()> {
  match cli.command {
    Command::Serve { config, port } => {
      let (config_path, mut config) = resolve_config(config)?;
      if let Some(port) = port {
        config.server.port = port;
      }
      ui::banner("serve");
      ui::arrow(&format!("config {}", config_path.display()));
      let app = PlacardApp::from_config(&config)?;
      ui::ok(&format!("{} locales, default={}", app.locales().len(), app.default_locale()));
      app.serve(&config.addr()).await.map_err(|e| anyhow::anyhow!("{e}"))?;
    }
    Command::Build { config, out } => {
      let (config_path, config) = resolve_config(config)?;
      ui::banner("build");
      ui::arrow(&format!("config {}", config_path.display()));
      let app = PlacardApp::from_config(&config)?;
      let files = export::export_site(&app, &out)?;
      for file in &files {
        ui::detail_ok(&format!(
          "{}  {}({}){}",
          file.path.display(),
          ui::DIM,
          ui::format_size(file.size),
          ui::RESET
        ));
      }
      ui::ok(&format!("exported {} files to {}", files.len(), out.display()));
    }
  }
  Ok(())
}

#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  if let Err(err) = run(cli).await {
    ui::fail(&format!("{err:#}"));
    std::process::exit(1);
  }
}
