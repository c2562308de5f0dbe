use image::error::ImageError;
use image::{GenericImageView, ImageReader};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::ConvertError;
use crate::types::AnnotationSet;

/// Read and parse a VIA annotation file into an [`AnnotationSet`].
///
/// The JSON is parsed directly from the file stream instead of loading the
/// whole document into a string first.
pub fn read_annotation_set(path: &Path) -> Result<AnnotationSet, ConvertError> {
    let file = File::open(path)?;
    let set = serde_json::from_reader(BufReader::new(file))?;
    Ok(set)
}

/// Decode the image at `path` and return its (width, height) in pixels.
///
/// A missing file or an unrecognizable/invalid image maps to
/// [`ConvertError::ImageUnreadable`]; an I/O failure while sniffing or
/// decoding the bytes maps to [`ConvertError::ImageCorrupted`].
pub fn probe_image_dimensions(path: &Path) -> Result<(u32, u32), ConvertError> {
    let reader = ImageReader::open(path).map_err(|_| ConvertError::ImageUnreadable {
        path: path.to_path_buf(),
    })?;
    let reader = reader
        .with_guessed_format()
        .map_err(|_| ConvertError::ImageCorrupted {
            path: path.to_path_buf(),
        })?;
    match reader.decode() {
        Ok(image) => Ok(image.dimensions()),
        Err(ImageError::IoError(_)) => Err(ConvertError::ImageCorrupted {
            path: path.to_path_buf(),
        }),
        Err(_) => Err(ConvertError::ImageUnreadable {
            path: path.to_path_buf(),
        }),
    }
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .progress_chars("#>-"),
    );
    pb
}
