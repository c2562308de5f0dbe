use std::fs;
use std::path::{Path, PathBuf};

/// Ensure the destination directory exists, creating it if needed.
///
/// Unlike a dataset export tree, `dest` is a user-supplied folder: existing
/// contents are left in place.
pub fn ensure_dest_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        log::info!("Creating destination directory {:?}", path);
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Map an image filename to its label file path under `dest`.
///
/// The image basename has its extension replaced with `.txt`, so
/// `crops/a.b.jpg` becomes `<dest>/a.b.txt`.
pub fn label_file_path(dest: &Path, image_filename: &str) -> PathBuf {
    let stem = Path::new(image_filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| image_filename.to_string());
    dest.join(format!("{}.txt", sanitize_filename::sanitize(stem)))
}
