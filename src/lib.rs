//! # slice-dataset
//!
//! Dataset abstractions for interactive image and volume slice viewers.
//!
//! Two independent collections implement the [`Dataset`] capability, a
//! length plus integer-indexed random access:
//!  - [`FolderDataset`] takes a one-time snapshot of the image files in a
//!    directory (recognized by sniffing their content, never the file
//!    extension), keeps the names in sorted order and decodes a file into a
//!    pixel array on demand.
//!  - [`VolumeDataset`] wraps a 3D intensity array, normalizes it once at
//!    construction using the original extrema and serves 2D slices along a
//!    plane that can be switched at runtime:
//!     - `yz` — free axis 0
//!     - `xz` — free axis 1
//!     - `xy` — free axis 2
//!
//! All operations are synchronous and in-memory apart from the one file read
//! per image fetch. Failures surface immediately as [`DatasetError`]; nothing
//! is retried or recovered internally, which suits a single-user viewer where
//! the UI layer reports errors.
//!
//! # Examples
//!
//! ## Serving slices of a volume
//!
//! ```
//! use ndarray::Array3;
//! use slice_dataset::{Dataset, Plane, VolumeDataset};
//!
//! let gradient = Array3::from_shape_fn((4, 8, 16), |(z, y, x)| (x + y + z) as f32);
//! let mut volume = VolumeDataset::new(gradient);
//!
//! assert_eq!(volume.plane(), Plane::Yz);
//! assert_eq!(volume.len(), 4);
//!
//! volume.set_plane(Plane::Xy);
//! assert_eq!(volume.len(), 16);
//! let slice = volume.get(7).expect("index is within the xy extent");
//! assert_eq!(slice.dim(), (4, 8));
//! ```
//!
//! ## Browsing a directory of images
//!
//! ```no_run
//! use slice_dataset::{Dataset, FolderDataset};
//!
//! let folder = FolderDataset::new("images")
//!     .expect("should have scanned the image directory");
//! for name in folder.image_names() {
//!     println!("{name}");
//! }
//! let pixels = folder.get(0).expect("should have decoded the first image");
//! ```

pub mod dataset;
pub mod enums;
pub mod folder_dataset;
pub mod volume_dataset;

mod convert;

pub use dataset::{Dataset, DatasetError};
pub use enums::Plane;
pub use folder_dataset::FolderDataset;
pub use volume_dataset::VolumeDataset;
