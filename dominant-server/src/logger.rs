use tracing_subscriber::{
    fmt::{self},
    layer::SubscriberExt,
    Layer, Registry,
};

use crate::config::{LoggerConfig, LoggerFormat};

pub fn init_logger(opts: &LoggerConfig) -> anyhow::Result<()> {
    // the core library logs through `log`, forward it into tracing
    tracing_log::LogTracer::init()?;

    let env_filter = tracing_subscriber::EnvFilter::try_new(&opts.level)?;

    let stdout_layer = match opts.format {
        LoggerFormat::Pretty => fmt::Layer::default().pretty().boxed(),
        LoggerFormat::Json => fmt::Layer::default().json().boxed(),
        LoggerFormat::Compact => fmt::Layer::default().compact().boxed(),
    };

    let subscriber = Registry::default()
        .with(stdout_layer)
        .with(env_filter)
        .with(tracing_error::ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
