use crate::convert;
use crate::dataset::{Dataset, DatasetError};
use crate::enums::Plane;

use ndarray::{Array2, Array3, ArrayD, ArrayView2, Ix3, s};

/// A 3D volume served as 2D slices along a selectable plane.
///
/// The volume is normalized once at construction from its original extrema;
/// those extrema stay available through [`min`](Self::min) and
/// [`max`](Self::max). Switching the plane remaps indexing immediately and
/// never touches the data.
#[derive(Debug)]
pub struct VolumeDataset {
    volume: Array3<f32>,
    min: f32,
    max: f32,
    plane: Plane,
}

impl VolumeDataset {
    pub fn new(volume: Array3<f32>) -> Self {
        let (min, max) = convert::min_max(&volume);
        let volume = convert::normalize(volume, min, max);
        Self {
            volume,
            min,
            max,
            plane: Plane::default(),
        }
    }

    /// Build from a dynamically-shaped array.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotAVolume`] if the array is not
    /// 3-dimensional.
    pub fn from_dyn(volume: ArrayD<f32>) -> Result<Self, DatasetError> {
        let ndim = volume.ndim();
        let volume = volume
            .into_dimensionality::<Ix3>()
            .map_err(|_| DatasetError::NotAVolume(ndim))?;
        Ok(Self::new(volume))
    }

    /// The currently selected slicing plane.
    pub fn plane(&self) -> Plane {
        self.plane
    }

    pub fn set_plane(&mut self, plane: Plane) {
        self.plane = plane;
    }

    /// Select the slicing plane by name (`"yz"`, `"xz"` or `"xy"`).
    ///
    /// An unrecognized name leaves the current plane untouched.
    pub fn set_plane_by_name(&mut self, name: &str) -> Result<(), DatasetError> {
        self.plane = name.parse()?;
        Ok(())
    }

    /// Smallest intensity of the volume before normalization.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Largest intensity of the volume before normalization.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Dimensions of the volume as `(axis 0, axis 1, axis 2)`.
    pub fn dim(&self) -> (usize, usize, usize) {
        self.volume.dim()
    }

    /// Borrowed 2D slice with the free axis fixed at `index`.
    pub fn slice(&self, index: usize) -> Result<ArrayView2<'_, f32>, DatasetError> {
        let len = self.len();
        if index >= len {
            return Err(DatasetError::OutOfBounds { index, len });
        }
        let slice = match self.plane {
            Plane::Yz => self.volume.slice(s![index, .., ..]),
            Plane::Xz => self.volume.slice(s![.., index, ..]),
            Plane::Xy => self.volume.slice(s![.., .., index]),
        };
        Ok(slice)
    }
}

impl Dataset for VolumeDataset {
    type Item = Array2<f32>;

    fn len(&self) -> usize {
        self.volume.shape()[self.plane.free_axis()]
    }

    fn get(&self, index: usize) -> Result<Self::Item, DatasetError> {
        Ok(self.slice(index)?.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> Array3<f32> {
        Array3::from_shape_fn((2, 3, 4), |(z, y, x)| (z * 12 + y * 4 + x) as f32)
    }

    #[test]
    fn slices_follow_the_free_axis() {
        let mut dataset = VolumeDataset::new(gradient());
        let max = 23.0;

        assert_eq!(dataset.plane(), Plane::Yz);
        assert_eq!(dataset.len(), 2);
        let slice = dataset.get(1).unwrap();
        assert_eq!(slice.dim(), (3, 4));
        assert_eq!(slice[[0, 0]], 12.0 / max);
        assert_eq!(slice[[2, 3]], 23.0 / max);

        dataset.set_plane(Plane::Xz);
        assert_eq!(dataset.len(), 3);
        let slice = dataset.get(2).unwrap();
        assert_eq!(slice.dim(), (2, 4));
        assert_eq!(slice[[0, 0]], 8.0 / max);
        assert_eq!(slice[[1, 1]], 21.0 / max);

        dataset.set_plane(Plane::Xy);
        assert_eq!(dataset.len(), 4);
        let slice = dataset.get(3).unwrap();
        assert_eq!(slice.dim(), (2, 3));
        assert_eq!(slice[[0, 0]], 3.0 / max);
        assert_eq!(slice[[1, 2]], 23.0 / max);
    }

    #[test]
    fn repeated_reads_are_identical() {
        let dataset = VolumeDataset::new(gradient());
        assert_eq!(dataset.get(1).unwrap(), dataset.get(1).unwrap());
        assert_eq!(dataset.min(), 0.0);
        assert_eq!(dataset.max(), 23.0);
    }

    #[test]
    fn unknown_plane_name_leaves_selection_untouched() {
        let mut dataset = VolumeDataset::new(gradient());
        dataset.set_plane_by_name("xy").unwrap();
        assert_eq!(dataset.len(), 4);

        let err = dataset.set_plane_by_name("zz").unwrap_err();
        assert!(matches!(err, DatasetError::UnknownPlane(name) if name == "zz"));
        assert_eq!(dataset.plane(), Plane::Xy);
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn out_of_bounds_index_is_reported() {
        let dataset = VolumeDataset::new(gradient());
        let err = dataset.get(2).unwrap_err();
        assert!(matches!(err, DatasetError::OutOfBounds { index: 2, len: 2 }));
    }

    #[test]
    fn dynamic_input_must_be_three_dimensional() {
        let flat = ArrayD::zeros(ndarray::IxDyn(&[3, 4]));
        let err = VolumeDataset::from_dyn(flat).unwrap_err();
        assert!(matches!(err, DatasetError::NotAVolume(2)));

        let cube = ArrayD::zeros(ndarray::IxDyn(&[2, 3, 4]));
        let dataset = VolumeDataset::from_dyn(cube).unwrap();
        assert_eq!(dataset.dim(), (2, 3, 4));
    }
}
