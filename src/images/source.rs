//! The image source seam.

use crate::cards::ImageRef;
use crate::core::ImageFetchError;

/// Base URL for placeholder faces. Character avatars are served as
/// `<base>/<id>.jpeg` with ids starting at 1.
pub const PLACEHOLDER_BASE: &str = "https://rickandmortyapi.com/api/character/avatar";

/// Anything that can supply a pool of card faces.
///
/// Called once per session; the pool is reused for every restart.
pub trait ImageSource {
    /// Fetch the image pool.
    ///
    /// Implementations return `ImageFetchError::Empty` rather than an
    /// empty pool.
    fn fetch_images(&self) -> Result<Vec<ImageRef>, ImageFetchError>;
}

/// In-memory image source.
#[derive(Clone, Debug, Default)]
pub struct StaticImageSource {
    images: Vec<ImageRef>,
}

impl StaticImageSource {
    /// Serve a fixed list of images.
    #[must_use]
    pub fn new(images: Vec<ImageRef>) -> Self {
        Self { images }
    }

    /// `count` distinct avatar URLs, for playing without the listing request.
    #[must_use]
    pub fn placeholder(count: usize) -> Self {
        Self::new(
            (1..=count)
                .map(|id| ImageRef::new(format!("{PLACEHOLDER_BASE}/{id}.jpeg")))
                .collect(),
        )
    }
}

impl ImageSource for StaticImageSource {
    fn fetch_images(&self) -> Result<Vec<ImageRef>, ImageFetchError> {
        if self.images.is_empty() {
            return Err(ImageFetchError::Empty);
        }
        Ok(self.images.clone())
    }
}
