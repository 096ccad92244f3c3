pub mod color;
pub mod error;
pub mod fetch;
pub mod image;
pub mod pipeline;

// Re-export commonly used types
pub use color::{dominant_color, Color, Histogram};
pub use error::{ColorError, DecodeError, ErrorKind, FetchError, InputError, ProcessingError};
pub use fetch::{Fetcher, ImageUrl};
pub use pipeline::{Pipeline, PipelineConfig};
