use ndarray::Array3;
use slice_dataset::{Dataset, Plane, VolumeDataset};

fn main() {
    let gradient = Array3::from_shape_fn((64, 96, 128), |(z, y, x)| (x + y + z) as f32);
    let mut volume = VolumeDataset::new(gradient);

    for plane in Plane::ALL {
        volume.set_plane(plane);
        let slice = volume
            .get(volume.len() / 2)
            .expect("middle index is always within the plane extent");
        let (height, width) = slice.dim();
        let pixels: Vec<u8> = slice.iter().map(|&value| (value * 255.0) as u8).collect();
        let image = image::GrayImage::from_raw(width as u32, height as u32, pixels)
            .expect("pixel buffer matches the slice dimensions");
        image
            .save(format!("slice_{plane}.png"))
            .expect("should have written the slice image");
    }
}
