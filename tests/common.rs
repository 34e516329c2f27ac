#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes a PNG full of pseudo-random pixels so the encoder has real work to do.
pub fn write_test_png(path: &Path, width: u32, height: u32) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    let img = RgbaImage::from_fn(width, height, |x, y| {
        let mut v = x.wrapping_mul(0x9E37_79B1) ^ y.wrapping_mul(0x85EB_CA77);
        v ^= v >> 15;
        v = v.wrapping_mul(0x2C1B_3C6D);
        v ^= v >> 12;
        Rgba([v as u8, (v >> 8) as u8, (v >> 16) as u8, 255])
    });
    img.save(path).unwrap();
    path.to_path_buf()
}

/// A file that claims to be a PNG but is not.
pub fn write_corrupt_png(path: &Path) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"\x89PNG\r\n\x1a\nthis is not really a png").unwrap();
    path.to_path_buf()
}

/// icons/logo.png, icons/small/favicon.png, banner.png and a stray .txt
pub fn create_asset_tree(root: &Path) -> Vec<PathBuf> {
    let files = vec![
        write_test_png(&root.join("banner.png"), 120, 80),
        write_test_png(&root.join("icons").join("logo.png"), 64, 64),
        write_test_png(&root.join("icons").join("small").join("favicon.png"), 33, 17),
    ];
    fs::write(root.join("icons").join("README.txt"), b"not an image").unwrap();
    files
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn relative_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}
