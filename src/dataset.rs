use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Not a valid directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Not a recognized plane name: {0}")]
    UnknownPlane(String),

    #[error("Index {index} out of bounds for dataset of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("Not a 3-dimensional volume: got {0} dimensions")]
    NotAVolume(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// An indexable collection of viewer items.
///
/// A dataset has a length and serves one item per integer index. Items may
/// be produced lazily, so `get` is fallible: an index outside
/// `0..len()` yields [`DatasetError::OutOfBounds`], and whatever the
/// collection does to materialize an item can fail on its own terms.
pub trait Dataset {
    /// The type of a single item served by the dataset.
    type Item;

    /// Number of items in the dataset.
    fn len(&self) -> usize;

    /// Fetch the item at `index`.
    fn get(&self, index: usize) -> Result<Self::Item, DatasetError>;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
