//! Error types.
//!
//! Only two things can fail: loading a config and fetching card images.
//! Misuse of the game controller is never an error; it is reported as an
//! ignored outcome instead.

use thiserror::Error;

/// The image source could not produce a usable pool.
#[derive(Error, Debug)]
pub enum ImageFetchError {
    #[error("image request failed: {0}")]
    Request(Box<reqwest::Error>),

    #[error("image source responded with HTTP {0}")]
    Status(u16),

    #[error("malformed image listing: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("image listing contained no images")]
    Empty,
}

impl From<reqwest::Error> for ImageFetchError {
    fn from(error: reqwest::Error) -> Self {
        ImageFetchError::Request(Box::new(error))
    }
}

/// A configuration file could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
