//! fetch → decode → resize → analyze

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::{dominant_color, Color};
use crate::error::{ColorError, ProcessingError};
use crate::fetch::{Fetcher, ImageUrl};
use crate::image::{self, ResizeTarget};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub resize_width: u32,
    #[serde(with = "duration_secs")]
    pub fetch_timeout: Duration,
    pub user_agent: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            resize_width: image::DEFAULT_WIDTH,
            fetch_timeout: Duration::from_secs(30),
            user_agent: concat!("dominant/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

/// Stateless between runs; every call allocates its own buffers.
#[derive(Debug, Clone)]
pub struct Pipeline {
    fetcher: Fetcher,
    resize: ResizeTarget,
}

impl Pipeline {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            fetcher: Fetcher::new(config.fetch_timeout, config.user_agent.clone()),
            resize: ResizeTarget::width(config.resize_width.max(1)),
        }
    }

    /// Validate `raw_url` then run the full pipeline on it.
    pub fn run_str(&self, raw_url: &str) -> Result<Color, ColorError> {
        let url = ImageUrl::parse(raw_url)?;
        self.run(&url)
    }

    pub fn run(&self, url: &ImageUrl) -> Result<Color, ColorError> {
        let data = self.fetcher.fetch(url)?;
        let color = self.analyze_bytes(&data)?;
        log::info!("Dominant color of {url} is {color}");
        Ok(color)
    }

    /// Everything after the fetch: decode, normalise, resize, count.
    pub fn analyze_bytes(&self, data: &[u8]) -> Result<Color, ColorError> {
        let decoded = image::decode(data)?;
        let grid = image::to_grid(decoded);
        let small = image::resize(&grid, self.resize)?;

        dominant_color(&small).ok_or_else(|| ProcessingError::EmptyImage.into())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(&PipelineConfig::default())
    }
}
