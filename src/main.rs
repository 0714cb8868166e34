#![deny(
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # Fortnite Stats

pub mod cli_options;
pub mod config;
pub mod logger;
pub mod report;
pub mod setup;

use crate::{
    cli_options::CliOptions,
    config::Config,
    report::Report,
};
use anyhow::Context as _;
use std::time::{
    Duration,
    Instant,
};
use tokio::runtime::Builder as RuntimeBuilder;
use tracing::{
    debug,
    info,
};

const TOKIO_RT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Data from the setup function
struct SetupData {
    tokio_rt: tokio::runtime::Runtime,
    config: Config,
}

/// Pre-main setup
fn setup(cli_options: &CliOptions) -> anyhow::Result<SetupData> {
    let tokio_rt = RuntimeBuilder::new_multi_thread()
        .enable_all()
        .thread_name("fortnite-stats-tokio-worker")
        .build()
        .context("failed to start tokio runtime")?;

    let config = setup::load_config(&cli_options.config).context("failed to load config")?;

    logger::setup().context("failed to initialize logger")?;

    Ok(SetupData { tokio_rt, config })
}

/// The main entry.
///
/// Config errors are printed to the stderr, as the logger is not initialized yet.
fn main() -> anyhow::Result<()> {
    // This line MUST run first.
    // It is needed to exit early if the options are invalid,
    // and this will NOT run destructors if it does so.
    let cli_options: CliOptions = argh::from_env();

    let setup_data = setup(&cli_options)?;
    real_main(cli_options, setup_data)
}

/// The actual entry point
fn real_main(cli_options: CliOptions, setup_data: SetupData) -> anyhow::Result<()> {
    let ret = setup_data
        .tokio_rt
        .block_on(async_main(cli_options, setup_data.config));

    let shutdown_start = Instant::now();
    debug!(
        "shutting down tokio runtime (shutdown timeout is {:?})...",
        TOKIO_RT_SHUTDOWN_TIMEOUT
    );
    setup_data
        .tokio_rt
        .shutdown_timeout(TOKIO_RT_SHUTDOWN_TIMEOUT);
    debug!("shutdown tokio runtime in {:?}", shutdown_start.elapsed());

    ret
}

/// The async entry
async fn async_main(cli_options: CliOptions, config: Config) -> anyhow::Result<()> {
    let http = reqwest::Client::builder()
        .timeout(config.timeout())
        .build()
        .context("failed to build http client")?;

    let mut client = fortnite_tracker::Client::with_http_client(http, config.api_key());
    if let Some(base_url) = config.base_url() {
        client = client.with_base_url(base_url);
    }

    info!(
        "looking up `{}` on `{}`...",
        cli_options.display_name, cli_options.platform
    );
    let stats = client
        .get_stats(&cli_options.platform, &cli_options.display_name)
        .await
        .with_context(|| {
            format!(
                "failed to get stats for `{}` on `{}`",
                cli_options.display_name, cli_options.platform
            )
        })?;

    let report = Report::new(&stats, cli_options.matches);
    print!("{report}");

    Ok(())
}
