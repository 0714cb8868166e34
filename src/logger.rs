use anyhow::Context;
use tracing_subscriber::{
    filter::{
        EnvFilter,
        LevelFilter,
    },
    layer::SubscriberExt,
};

/// Try to setup a logger.
///
/// Logs go to the stderr so they do not mix with the report.
/// `RUST_LOG` directives are applied on top of the default `info` level.
pub fn setup() -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()
        .context("invalid `RUST_LOG`")?;
    let stderr_formatting_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(stderr_formatting_layer);

    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;

    Ok(())
}
