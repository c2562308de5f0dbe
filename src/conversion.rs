use log::{debug, warn};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ConvertError;
use crate::io::{ensure_dest_dir, label_file_path};
use crate::types::{ImageRecord, LabelIndex, ProcessingStats, ShapeAttributes};
use crate::utils::{create_progress_bar, probe_image_dimensions, read_annotation_set};

/// Convert a VIA annotation file into per-image YOLO label files.
///
/// Reads the annotation document at `json_path`, decodes each referenced
/// image under `images_dir` for its dimensions, and writes one `.txt` file
/// per image with at least one region into `dest`. Records whose image is
/// missing or unreadable are skipped with a warning; an unknown label or a
/// region without the configured attribute aborts the run.
pub fn convert(
    json_path: &Path,
    images_dir: &Path,
    dest: &Path,
    attribute: &str,
    label_index: &LabelIndex,
) -> Result<ProcessingStats, ConvertError> {
    let set = read_annotation_set(json_path)?;
    ensure_dest_dir(dest)?;

    let mut stats = ProcessingStats::new();
    let pb = create_progress_bar(set.len() as u64, "Convert");
    for (key, record) in set.records() {
        debug!("Processing record {}", key);
        process_record(record, images_dir, dest, attribute, label_index, &mut stats)?;
        pb.inc(1);
    }
    pb.finish_with_message("Conversion complete");

    Ok(stats)
}

/// Process a single image record, writing its label file.
fn process_record(
    record: &ImageRecord,
    images_dir: &Path,
    dest: &Path,
    attribute: &str,
    label_index: &LabelIndex,
    stats: &mut ProcessingStats,
) -> Result<(), ConvertError> {
    stats.increment_total();

    // No regions: no label file at all, as opposed to an empty one.
    if record.regions.is_empty() {
        stats.increment_skipped_empty();
        return Ok(());
    }

    let image_path = images_dir.join(&record.filename);
    let (image_width, image_height) = match probe_image_dimensions(&image_path) {
        Ok(dimensions) => dimensions,
        Err(ConvertError::ImageUnreadable { .. }) => {
            warn!("The image {} does not exist.", record.filename);
            stats.increment_skipped_missing_image();
            return Ok(());
        }
        Err(ConvertError::ImageCorrupted { .. }) => {
            warn!("Image {} corrupted.", record.filename);
            stats.increment_skipped_corrupted_image();
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let output_path = label_file_path(dest, &record.filename);
    for region in &record.regions {
        // The label file is recreated (truncating) on every region
        // iteration, so only the last rectangle written survives and a
        // trailing non-rectangular region leaves the file empty.
        let mut file = File::create(&output_path)?;
        match region.shape_attributes {
            ShapeAttributes::Rect {
                x,
                y,
                width,
                height,
            } => {
                let label = region.region_attributes.get(attribute).ok_or_else(|| {
                    ConvertError::MissingAttribute {
                        attribute: attribute.to_string(),
                        image: record.filename.clone(),
                    }
                })?;
                let class_id =
                    *label_index
                        .get(label)
                        .ok_or_else(|| ConvertError::UnknownLabel {
                            label: label.clone(),
                            image: record.filename.clone(),
                        })?;
                let (x_center, y_center, width_norm, height_norm) =
                    normalized_bbox(x, y, width, height, image_width, image_height);
                file.write_all(
                    format_label_line(class_id, x_center, y_center, width_norm, height_norm)
                        .as_bytes(),
                )?;
                stats.increment_converted();
            }
            ShapeAttributes::Other => {
                warn!(
                    "Region from image {} contains a non-rectangular region.",
                    record.filename
                );
                stats.increment_non_rect();
            }
        }
    }

    Ok(())
}

/// Convert a pixel box to a normalized center-coordinate bounding box.
pub fn normalized_bbox(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    image_width: u32,
    image_height: u32,
) -> (f64, f64, f64, f64) {
    let x_center = (x + width / 2.0) / image_width as f64;
    let y_center = (y + height / 2.0) / image_height as f64;
    let width_norm = width / image_width as f64;
    let height_norm = height / image_height as f64;

    (x_center, y_center, width_norm, height_norm)
}

/// Format one YOLO label line: class id plus four normalized fields,
/// space-separated, without a trailing newline.
pub fn format_label_line(
    class_id: u32,
    x_center: f64,
    y_center: f64,
    width: f64,
    height: f64,
) -> String {
    format!("{} {} {} {} {}", class_id, x_center, y_center, width, height)
}
