use crate::convert;
use crate::dataset::{Dataset, DatasetError};

use image::ImageReader;
use ndarray::Array3;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// A sorted snapshot of the image files in one directory.
///
/// The directory is scanned once at construction: immediate children only,
/// subdirectories skipped, and every remaining entry kept if its *content*
/// sniffs as a recognized image format. The kept names are sorted so the
/// ordering is deterministic regardless of how the filesystem lists them.
/// Images are decoded lazily, one file read per [`Dataset::get`].
pub struct FolderDataset {
    directory: PathBuf,
    image_names: Vec<String>,
}

impl FolderDataset {
    /// Scan `directory` and keep the names of its image files.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotADirectory`] if the path does not exist or
    /// is not a directory, and propagates any I/O failure while reading
    /// entries or sniffing their content.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let directory = directory.as_ref();
        if !directory.is_dir() {
            return Err(DatasetError::NotADirectory(directory.to_path_buf()));
        }

        let mut image_names = Vec::new();
        for entry in fs::read_dir(directory)? {
            let path = entry?.path();
            if path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if Self::sniffs_as_image(&path)? {
                image_names.push(name.to_owned());
            }
        }
        image_names.sort();

        Ok(Self {
            directory: directory.to_path_buf(),
            image_names,
        })
    }

    /// Content-based type check; the file extension plays no part.
    fn sniffs_as_image(path: &Path) -> Result<bool, DatasetError> {
        let reader = BufReader::new(fs::File::open(path)?);
        Ok(ImageReader::new(reader).with_guessed_format()?.format().is_some())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The kept file names, sorted lexicographically.
    pub fn image_names(&self) -> &[String] {
        &self.image_names
    }

    /// Directory-joined path of the image at `index`.
    pub fn filepath(&self, index: usize) -> Result<PathBuf, DatasetError> {
        Ok(self.directory.join(self.name(index)?))
    }

    /// The name at `index` with its last four characters removed.
    ///
    /// Assumes a dot plus a three-letter extension; a longer extension such
    /// as `.jpeg` leaves part of it behind, and a name of four or fewer
    /// characters comes back empty.
    pub fn file_format(&self, index: usize) -> Result<&str, DatasetError> {
        Ok(strip_format_suffix(self.name(index)?))
    }

    fn name(&self, index: usize) -> Result<&str, DatasetError> {
        self.image_names
            .get(index)
            .map(String::as_str)
            .ok_or(DatasetError::OutOfBounds {
                index,
                len: self.image_names.len(),
            })
    }
}

impl Dataset for FolderDataset {
    type Item = Array3<u8>;

    fn len(&self) -> usize {
        self.image_names.len()
    }

    /// Read and decode the image at `index` into a pixel array.
    fn get(&self, index: usize) -> Result<Self::Item, DatasetError> {
        let bytes = fs::read(self.filepath(index)?)?;
        convert::decode_image(&bytes)
    }
}

fn strip_format_suffix(name: &str) -> &str {
    let cut = name.char_indices().rev().nth(3).map_or(0, |(index, _)| index);
    &name[..cut]
}
