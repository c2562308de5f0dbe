use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

/// Mapping from a class label string to the integer id consumed by YOLO.
pub type LabelIndex = HashMap<String, u32>;

// The geometry of an annotated region. VIA tags `shape_attributes` with a
// `name` field; only rectangles carry the pixel box that YOLO consumes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "name")]
pub enum ShapeAttributes {
    #[serde(rename = "rect")]
    Rect { x: f64, y: f64, width: f64, height: f64 },
    /// Any non-rectangular shape (polygon, circle, ellipse, point, polyline).
    #[serde(other)]
    Other,
}

impl ShapeAttributes {
    pub fn is_rect(&self) -> bool {
        matches!(self, ShapeAttributes::Rect { .. })
    }
}

// One annotated region within an image: its geometry plus the free-form
// attributes assigned in the annotator, one of which holds the class label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Region {
    pub shape_attributes: ShapeAttributes,
    pub region_attributes: HashMap<String, String>,
}

// The annotation information of a single image. VIA exports extra fields
// (`size`, `file_attributes`, ...) which are ignored here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRecord {
    pub filename: String,
    pub regions: Vec<Region>,
}

/// A full VIA export: record key to [`ImageRecord`], kept in document order.
#[derive(Debug, Clone, Default)]
pub struct AnnotationSet {
    records: Vec<(String, ImageRecord)>,
}

impl AnnotationSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in the order they appear in the JSON document.
    pub fn records(&self) -> impl Iterator<Item = (&str, &ImageRecord)> {
        self.records.iter().map(|(key, record)| (key.as_str(), record))
    }
}

// A derived HashMap would lose the document order of the top-level map, so
// the records are collected through a map visitor instead.
impl<'de> Deserialize<'de> for AnnotationSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AnnotationSetVisitor;

        impl<'de> Visitor<'de> for AnnotationSetVisitor {
            type Value = AnnotationSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of record keys to image records")
            }

            fn visit_map<V>(self, mut map: V) -> Result<AnnotationSet, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut records = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, ImageRecord>()? {
                    records.push(entry);
                }
                Ok(AnnotationSet { records })
            }
        }

        deserializer.deserialize_map(AnnotationSetVisitor)
    }
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone)]
pub struct ProcessingStats {
    pub total_records: usize,
    pub converted_regions: usize,
    pub skipped_empty: usize,
    pub skipped_missing_image: usize,
    pub skipped_corrupted_image: usize,
    pub non_rect_regions: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_total(&mut self) {
        self.total_records += 1;
    }

    pub fn increment_converted(&mut self) {
        self.converted_regions += 1;
    }

    pub fn increment_skipped_empty(&mut self) {
        self.skipped_empty += 1;
    }

    pub fn increment_skipped_missing_image(&mut self) {
        self.skipped_missing_image += 1;
    }

    pub fn increment_skipped_corrupted_image(&mut self) {
        self.skipped_corrupted_image += 1;
    }

    pub fn increment_non_rect(&mut self) {
        self.non_rect_regions += 1;
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Total records processed: {}", self.total_records);
        log::info!("Regions converted: {}", self.converted_regions);
        log::info!("Skipped (no regions): {}", self.skipped_empty);
        log::info!("Skipped (missing image file): {}", self.skipped_missing_image);
        log::info!(
            "Skipped (corrupted image file): {}",
            self.skipped_corrupted_image
        );
        log::info!("Non-rectangular regions: {}", self.non_rect_regions);

        let total_skipped = self.skipped_missing_image + self.skipped_corrupted_image;
        if total_skipped > 0 {
            log::warn!(
                "Total skipped records: {} (missing image: {}, corrupted image: {})",
                total_skipped,
                self.skipped_missing_image,
                self.skipped_corrupted_image
            );
        }
    }
}
