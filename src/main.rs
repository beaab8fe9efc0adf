use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use distro_probe::app::component_factory::{ComponentFactory, Config};
use distro_probe::infra::ConcreteComponentFactory;
use distro_probe::{DetectionContext, Distribution};
use itertools::Itertools;
use tokio_util::sync::CancellationToken;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Detect the Linux distribution and distribution family of this host.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Probe release files under this root instead of `/`
    #[arg(long)]
    sysroot: Option<PathBuf>,

    /// Give up on the whole detection after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Never fall back to running `lsb_release -a`
    #[arg(long)]
    no_command_fallback: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let mut config = match &cli.config {
        Some(path) => load_config(path).await?,
        None => Config::default(),
    };
    if cli.sysroot.is_some() {
        config.sysroot = cli.sysroot.clone();
    }
    config.disable_command_fallback |= cli.no_command_fallback;

    let detector = ConcreteComponentFactory
        .create_detector(config)
        .map_err(|e| format!("invalid configuration: {e}"))?;

    let token = CancellationToken::new();
    tokio::spawn({
        let token = token.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        }
    });

    let mut ctx = DetectionContext::with_cancellation(token);
    if let Some(ms) = cli.timeout_ms {
        ctx = ctx.with_timeout(Duration::from_millis(ms));
    }

    let distribution = detector.detect(&ctx).await.map_err(|e| e.to_string())?;

    if cli.json {
        let json = serde_json::to_string_pretty(&distribution).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        print_summary(&distribution);
    }

    Ok(())
}

async fn load_config(path: &Path) -> Result<Config, String> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("unable to read {}: {e}", path.display()))?;

    serde_json::from_str(&contents)
        .map_err(|e| format!("unable to parse {}: {e}", path.display()))
}

fn print_summary(distribution: &Distribution) {
    let rows = [
        ("name", distribution.to_string()),
        ("id", distribution.id().to_string()),
        ("id_like", distribution.id_like().iter().join(" ")),
        ("version_id", distribution.version_id().to_string()),
        ("codename", distribution.version_codename().to_string()),
        ("build_id", distribution.build_id().to_string()),
        ("family", distribution.family().to_string()),
        ("source", distribution.source().to_string()),
    ];

    for (label, value) in rows.iter().filter(|(_, value)| !value.is_empty()) {
        println!("{label:<11}{value}");
    }
}
