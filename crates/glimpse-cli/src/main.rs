//! Glimpse CLI - Single entrypoint for the screenshot exchange
//!
//! Wires the capture service, the exchange hub and a headless client
//! together so captures can be requested from the terminal.

use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use glimpse_capture::CaptureService;
use glimpse_core::{AccessProtocol, CaptureSettings, MessageCatalog, ServerEvent};
use glimpse_exchange::{
    ExchangeChannel, MonitoredEndpoint, ScreenshotExchangeClient, ScreenshotExchangeHub,
    TracingRenderer,
};

#[derive(Parser)]
#[command(author, version, about = "Real-time endpoint screenshot exchange", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "GLIMPSE_LOG_LEVEL", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request an endpoint screenshot and wait for the result
    Request(RequestCommand),
    /// Check whether the configured capture provider is usable
    Check(CheckCommand),
}

#[derive(Args)]
struct RequestCommand {
    /// Protocol to capture (http or https)
    protocol: String,

    /// Host of the monitored endpoint
    #[arg(long)]
    host: String,

    /// Port of the monitored endpoint
    #[arg(long)]
    port: u16,

    /// Actor name attached to the request
    #[arg(long, default_value = "cli")]
    actor: String,

    /// Capture provider: local, remote or noop
    #[arg(long, default_value = "local")]
    provider: String,

    /// Base URL of the remote capture service (remote provider only)
    #[arg(long, default_value = "")]
    service_url: String,

    /// Directory captured images are written to
    #[arg(long, default_value = "./static")]
    storage_dir: String,
}

#[derive(Args)]
struct CheckCommand {
    /// Capture provider: local, remote or noop
    #[arg(long, default_value = "local")]
    provider: String,

    /// Base URL of the remote capture service (remote provider only)
    #[arg(long, default_value = "")]
    service_url: String,
}

fn init_tracing(log_level: &str) {
    // If RUST_LOG is set the user wants full control; otherwise scope the
    // level to our own crates
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new(format!(
            "glimpse_cli={level},glimpse_exchange={level},glimpse_capture={level},glimpse_core={level}",
            level = log_level
        )),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run_request(cmd: RequestCommand) -> anyhow::Result<()> {
    let protocol: AccessProtocol = cmd.protocol.parse()?;

    let settings = CaptureSettings {
        enabled: true,
        provider: cmd.provider,
        service_url: cmd.service_url,
        storage_dir: cmd.storage_dir,
    };
    let capture =
        CaptureService::from_settings(settings).context("failed to configure capture service")?;
    if !capture.is_provider_available().await {
        warn!(
            "capture provider '{}' may not be available",
            capture.provider_name()
        );
    }

    let (channel, requests) = ExchangeChannel::create(16);

    let hub = ScreenshotExchangeHub::new(
        channel.clone(),
        Arc::new(capture),
        MonitoredEndpoint::new(cmd.host, cmd.port),
    );
    tokio::spawn(async move { hub.serve(requests).await });

    let client = Arc::new(ScreenshotExchangeClient::new(
        cmd.actor,
        channel.clone(),
        Arc::new(TracingRenderer::default()),
        MessageCatalog::new(),
    ));
    let pump = client.clone();
    tokio::spawn(async move { pump.run().await });

    // Watch the room ourselves to know when the capture lands
    let mut events = channel.subscribe();
    channel.mark_ready();

    client.request_screenshot(protocol).await?;

    loop {
        match events.recv().await {
            Ok(ServerEvent::ScreenshotCompleted {
                protocol: done,
                locator,
                title,
            }) if done == protocol => {
                match locator {
                    Some(locator) => info!(%locator, %title, "capture finished"),
                    None => info!("capture finished without an image"),
                }
                return Ok(());
            }
            Ok(_) => continue,
            Err(e) => {
                return Err(anyhow::Error::from(e)
                    .context("exchange closed before the capture finished"))
            }
        }
    }
}

async fn run_check(cmd: CheckCommand) -> anyhow::Result<()> {
    let settings = CaptureSettings {
        provider: cmd.provider,
        service_url: cmd.service_url,
        ..CaptureSettings::default()
    };
    let capture = CaptureService::from_settings(settings)?;

    let available = capture.is_provider_available().await;
    info!(
        provider = capture.provider_name(),
        available, "capture provider check"
    );
    if !available {
        anyhow::bail!(
            "capture provider '{}' is not available",
            capture.provider_name()
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Request(cmd) => run_request(cmd).await,
        Commands::Check(cmd) => run_check(cmd).await,
    }
}
