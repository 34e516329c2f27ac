use crate::constants::PNG_EXTENSION;
use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collects every `.png` file under `input_dir`.
///
/// Paths are returned as `input_dir` joined with their relative path, in
/// file-name order, so they can be mirrored under an output directory.
/// A missing `input_dir`, or one that is not a directory, yields an empty
/// list; an error while walking an existing tree is returned to the caller.
pub fn collect_png_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        crate::verbose!("Input is not a directory: {:?}", input_dir);
        return Ok(Vec::new());
    }

    let mut png_files = Vec::new();
    for entry in WalkDir::new(input_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_png_file(path) {
            png_files.push(path.to_path_buf());
        }
    }

    Ok(png_files)
}

/// Exact, case-sensitive match on the `png` extension.
pub fn is_png_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext == PNG_EXTENSION)
        .unwrap_or(false)
}
