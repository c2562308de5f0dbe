//! Error types for the conversion pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting VIA annotations to YOLO labels.
///
/// `ImageUnreadable` and `ImageCorrupted` are recoverable: the record is
/// skipped with a warning. Every other variant aborts the run.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed annotation JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image file missing, or not decodable as an image
    #[error("image not found or not decodable: {path:?}")]
    ImageUnreadable {
        /// Path where the image was expected
        path: PathBuf,
    },

    /// Image file failed to read at the byte level while decoding
    #[error("image corrupted: {path:?}")]
    ImageCorrupted {
        /// Path of the corrupted image
        path: PathBuf,
    },

    /// Label string not present in the label index
    #[error("unknown label '{label}' in image {image}")]
    UnknownLabel {
        /// The label that has no class id
        label: String,
        /// The image whose region referenced it
        image: String,
    },

    /// Region lacks the configured attribute key
    #[error("region in image {image} has no '{attribute}' attribute")]
    MissingAttribute {
        /// The attribute name that was looked up
        attribute: String,
        /// The image whose region lacked it
        image: String,
    },
}
