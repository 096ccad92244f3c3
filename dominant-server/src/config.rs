use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use dominant::PipelineConfig;

#[derive(Parser, Debug)]
#[command(name = "dominant-server")]
#[command(about = "Serve the dominant color of remote images over HTTP", long_about = None)]
#[command(version)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "DOMINANT_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "DOMINANT_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Width images are shrunk to before counting colors
    #[arg(long, env = "DOMINANT_RESIZE_WIDTH", value_name = "PIXELS", default_value_t = dominant::image::DEFAULT_WIDTH)]
    pub resize_width: u32,

    /// Timeout for downloading an image
    #[arg(long, env = "DOMINANT_FETCH_TIMEOUT_SECS", value_name = "SECONDS", default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    /// Log filter, e.g. `info` or `dominant=debug,info`
    #[arg(long, env = "DOMINANT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "DOMINANT_LOG_FORMAT", value_enum, default_value_t = LoggerFormat::Compact)]
    pub log_format: LoggerFormat,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LoggerFormat {
    Pretty,
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub pipeline: PipelineConfig,
    pub logger: LoggerConfig,
}

impl Args {
    pub fn into_config(self) -> Result<ServerConfig> {
        if self.resize_width == 0 {
            anyhow::bail!("Resize width must be at least 1 pixel");
        }

        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("Fetch timeout must be at least 1 second");
        }

        Ok(ServerConfig {
            addr: SocketAddr::new(self.host, self.port),
            pipeline: PipelineConfig {
                resize_width: self.resize_width,
                fetch_timeout: Duration::from_secs(self.fetch_timeout_secs),
                ..PipelineConfig::default()
            },
            logger: LoggerConfig {
                format: self.log_format,
                level: self.log_level,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Args::try_parse_from(["dominant-server"])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.pipeline.resize_width, 100);
        assert_eq!(config.pipeline.fetch_timeout, Duration::from_secs(30));
        assert_eq!(config.logger.format, LoggerFormat::Compact);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Args::try_parse_from([
            "dominant-server",
            "--host",
            "127.0.0.1",
            "-p",
            "9000",
            "--resize-width",
            "64",
            "--log-format",
            "json",
        ])
        .unwrap()
        .into_config()
        .unwrap();
        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert_eq!(config.pipeline.resize_width, 64);
        assert_eq!(config.logger.format, LoggerFormat::Json);
    }

    #[test]
    fn zero_width_is_rejected() {
        let args = Args::try_parse_from(["dominant-server", "--resize-width", "0"]).unwrap();
        assert!(args.into_config().is_err());
    }
}
