use crate::dataset::DatasetError;
use ndarray::Array3;

/// Decode raw image bytes into a `(height, width, channel)` RGB pixel array.
pub(crate) fn decode_image(bytes: &[u8]) -> Result<Array3<u8>, DatasetError> {
    let rgb = image::load_from_memory(bytes)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Array3::from_shape_fn(
        (height as usize, width as usize, 3),
        |(y, x, channel)| rgb.get_pixel(x as u32, y as u32)[channel],
    ))
}

pub(crate) fn min_max(volume: &Array3<f32>) -> (f32, f32) {
    volume
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &value| {
            (min.min(value), max.max(value))
        })
}

/// Rescale intensities linearly into `[0, 1]` using the given extrema.
/// A volume without spread maps to all zeros.
pub(crate) fn normalize(volume: Array3<f32>, min: f32, max: f32) -> Array3<f32> {
    let range = max - min;
    if range > 0.0 {
        volume.mapv_into(|value| (value - min) / range)
    } else {
        Array3::zeros(volume.dim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    #[test]
    fn decoded_pixels_keep_row_major_layout() {
        let image = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 7]));
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png).unwrap();

        let array = decode_image(bytes.get_ref()).unwrap();
        assert_eq!(array.dim(), (2, 3, 3));
        assert_eq!(array[[0, 0, 0]], 0);
        assert_eq!(array[[1, 2, 0]], 2);
        assert_eq!(array[[1, 2, 1]], 1);
        assert_eq!(array[[0, 1, 2]], 7);
    }

    #[test]
    fn decode_rejects_non_image_bytes() {
        assert!(matches!(
            decode_image(b"just some text"),
            Err(DatasetError::Image(_))
        ));
    }

    #[test]
    fn normalization_spans_the_unit_interval() {
        let volume = Array3::from_shape_fn((2, 2, 2), |(z, y, x)| (z * 4 + y * 2 + x) as f32);
        let (min, max) = min_max(&volume);
        assert_eq!((min, max), (0.0, 7.0));

        let normalized = normalize(volume, min, max);
        assert_relative_eq!(normalized[[0, 0, 0]], 0.0);
        assert_relative_eq!(normalized[[1, 1, 1]], 1.0);
        assert_relative_eq!(normalized[[0, 1, 0]], 2.0 / 7.0);
    }

    #[test]
    fn constant_volumes_normalize_to_zero() {
        let volume = Array3::from_elem((2, 3, 4), 42.0);
        let (min, max) = min_max(&volume);
        let normalized = normalize(volume, min, max);
        assert!(normalized.iter().all(|&value| value == 0.0));
    }
}
