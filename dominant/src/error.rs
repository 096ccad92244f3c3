//! Error taxonomy for the color pipeline

/// Whether a failure is the caller's fault or ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UserError,
    ServerError,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("url parameter is missing")]
    Missing,

    #[error("invalid URL")]
    Invalid(#[source] url::ParseError),

    #[error("invalid URL: unsupported scheme `{0}`")]
    UnsupportedScheme(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to fetch image: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read image data: {0}")]
    Read(#[source] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to decode image: no supported image format matched")]
    UnsupportedFormat,
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("failed to process image: image has no pixels")]
    EmptyImage,

    #[error("failed to resize image: {0}")]
    Resize(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

impl ColorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ColorError::Input(_) => ErrorKind::UserError,
            ColorError::Fetch(_) | ColorError::Decode(_) | ColorError::Processing(_) => {
                ErrorKind::ServerError
            }
        }
    }
}
