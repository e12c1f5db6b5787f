//! HTTP image source backed by a character listing endpoint.
//!
//! The endpoint answers a GET with
//!
//! ```json
//! { "info": { ... }, "results": [ { "id": 1, "image": "https://..." }, ... ] }
//! ```
//!
//! Only `results[].image` is used. The request is made once and never
//! retried.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use tracing::{debug, warn};

use super::source::ImageSource;
use crate::cards::ImageRef;
use crate::core::{GameConfig, ImageFetchError};

#[derive(Debug, Deserialize)]
struct CharacterPage {
    results: Vec<CharacterEntry>,
}

#[derive(Debug, Deserialize)]
struct CharacterEntry {
    image: String,
}

/// Extract image URLs from a listing body.
pub fn parse_character_page(body: &str) -> Result<Vec<ImageRef>, ImageFetchError> {
    let page: CharacterPage = serde_json::from_str(body)?;
    let images: Vec<ImageRef> = page
        .results
        .into_iter()
        .map(|entry| ImageRef::from(entry.image))
        .collect();

    if images.is_empty() {
        return Err(ImageFetchError::Empty);
    }
    Ok(images)
}

/// Fetches the image pool over HTTP.
#[derive(Clone, Debug)]
pub struct HttpImageSource {
    client: Client,
    endpoint: String,
}

impl HttpImageSource {
    /// Build a client using the endpoint and timeout from `config`.
    pub fn new(config: &GameConfig) -> Result<Self, ImageFetchError> {
        let client = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self {
            client,
            endpoint: config.image_endpoint.clone(),
        })
    }

    /// The URL that will be requested.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ImageSource for HttpImageSource {
    fn fetch_images(&self) -> Result<Vec<ImageRef>, ImageFetchError> {
        debug!(endpoint = %self.endpoint, "fetching images");

        let resp = self
            .client
            .get(&self.endpoint)
            .header(USER_AGENT, concat!("memory-pairs/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, %status, "image listing request rejected");
            return Err(ImageFetchError::Status(status.as_u16()));
        }

        let body = resp.text()?;
        let images = parse_character_page(&body)?;
        debug!(count = images.len(), "images fetched");
        Ok(images)
    }
}
