use clap::Parser;
use std::path::PathBuf;

use crate::types::LabelIndex;

/// Command-line arguments for converting VIA JSON annotations to YOLO labels.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
#[command(
    after_help = "Example:\n  via2yolo --images images/ --json via_export.json --dest labels/ \\\n    --attribute class --labels '{\"cat\":0,\"dog\":1}'"
)]
pub struct Args {
    /// Path to the folder of source images
    #[arg(long = "images")]
    pub images: PathBuf,

    /// Path to the VIA annotation JSON file
    #[arg(long = "json")]
    pub json: PathBuf,

    /// Destination folder for the generated label files
    #[arg(long = "dest")]
    pub dest: PathBuf,

    /// Region attribute name holding the class label
    #[arg(long = "attribute")]
    pub attribute: String,

    /// JSON object mapping label names to class ids, e.g. '{"cat":0,"dog":1}'
    #[arg(long = "labels", value_parser = parse_label_index)]
    pub labels: LabelIndex,
}

// Parse the --labels argument as a JSON object literal. Non-negative ids
// are enforced by the target type.
pub fn parse_label_index(s: &str) -> Result<LabelIndex, String> {
    serde_json::from_str(s)
        .map_err(|e| format!("LABELS must be a JSON object of label names to non-negative ids: {e}"))
}
