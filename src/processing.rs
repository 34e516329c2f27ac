use crate::constants::{DEFAULT_SCALE_FACTOR, OXIPNG_PRESET, ZOPFLI_ITERATIONS};
use crate::error::{ResizeError, Result};
use crate::utils::calculate_reduction;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use oxipng::{Deflaters, Options};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct ResizeOptions {
    pub scale: f64,
    pub atomic: bool,
}

impl ResizeOptions {
    pub fn new(scale: Option<f64>, atomic: bool) -> Result<Self> {
        let scale = scale.unwrap_or(DEFAULT_SCALE_FACTOR);
        if !(scale > 0.0 && scale <= 1.0) {
            return Err(ResizeError::InvalidScale(scale));
        }

        Ok(Self { scale, atomic })
    }
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE_FACTOR,
            atomic: false,
        }
    }
}

/// Outcome of a successfully resized file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub original_dimensions: (u32, u32),
    pub new_dimensions: (u32, u32),
    pub original_size: u64,
    pub compressed_size: u64,
}

impl FileReport {
    pub fn reduction_percent(&self) -> f64 {
        calculate_reduction(self.original_size, self.compressed_size)
    }
}

/// Target dimensions for `scale`, truncated toward zero on each axis.
///
/// # Example
/// ```
/// use png_halve::scaled_dimensions;
///
/// assert_eq!(scaled_dimensions(101, 37, 0.5), (50, 18));
/// ```
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let w = (width as f64 * scale).floor() as u32;
    let h = (height as f64 * scale).floor() as u32;
    (w, h)
}

/// Runs one file through the whole pipeline:
/// measure -> decode -> resample -> encode -> write -> measure
///
/// # Arguments
/// * `input_root` - Directory the batch was started from
/// * `input_file` - PNG file under `input_root`
/// * `output_dir` - Mirror root, or `None` to overwrite `input_file`
/// * `options` - Scale factor and write strategy
///
/// # Returns
/// * `Ok(FileReport)` - Dimensions and byte sizes before and after
/// * `Err(ResizeError)` - If any step fails; the caller decides whether to continue
///
/// The original size is read before anything is written so in-place runs
/// report a real reduction.
pub fn process_png_file(
    input_root: &Path,
    input_file: &Path,
    output_dir: Option<&Path>,
    options: &ResizeOptions,
) -> Result<FileReport> {
    let original_size = fs::metadata(input_file)?.len();

    let img = load_image(input_file)?;
    let original_dimensions = img.dimensions();
    let resized = resize_image(&img, options)?;
    drop(img);
    let new_dimensions = resized.dimensions();

    let output_path = resolve_output_path(input_root, input_file, output_dir)?;
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| ResizeError::DirectoryCreationFailed(parent.to_path_buf(), e))?;
    }

    let encoded = encode_png(&resized)?;
    let compressed_size = write_output(&output_path, &encoded, options.atomic)?;

    Ok(FileReport {
        input: input_file.to_path_buf(),
        output: output_path,
        original_dimensions,
        new_dimensions,
        original_size,
        compressed_size,
    })
}

/// Decodes an image, sniffing the format from its content rather than its name.
pub fn load_image(input_path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;
    crate::verbose!(
        "Decoded {:?}: {}x{} {:?}",
        input_path,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// Resamples with Lanczos3 to `scaled_dimensions`. Fails rather than
/// producing an empty image when an axis would truncate to zero.
pub fn resize_image(img: &DynamicImage, options: &ResizeOptions) -> Result<DynamicImage> {
    let (width, height) = img.dimensions();
    let (new_w, new_h) = scaled_dimensions(width, height, options.scale);
    if new_w == 0 || new_h == 0 {
        return Err(ResizeError::ZeroDimensions(width, height, new_w, new_h));
    }

    crate::verbose!("Resizing {}x{} -> {}x{}", width, height, new_w, new_h);
    Ok(img.resize_exact(new_w, new_h, FilterType::Lanczos3))
}

/// Decides where a processed file goes.
///
/// With an output directory the path relative to `input_root` is mirrored
/// under it; without one the input file itself is the target.
pub fn resolve_output_path(
    input_root: &Path,
    input_file: &Path,
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    match output_dir {
        None => Ok(input_file.to_path_buf()),
        Some(dir) => {
            let relative = input_file
                .strip_prefix(input_root)
                .map_err(|_| ResizeError::OutsideInputRoot(input_file.to_path_buf()))?;
            Ok(dir.join(relative))
        }
    }
}

/// Encodes at the highest zlib level, then hands the stream to oxipng for a
/// lossless size pass with zopfli.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut encoded = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut encoded, CompressionType::Best, PngFilterType::Adaptive);
    img.write_with_encoder(encoder)?;

    let mut oxipng_options = Options::from_preset(OXIPNG_PRESET);
    oxipng_options.deflate = Deflaters::Zopfli {
        iterations: ZOPFLI_ITERATIONS,
    };

    let optimized = oxipng::optimize_from_memory(&encoded, &oxipng_options)
        .map_err(|e| ResizeError::PngOptimization(e.to_string()))?;
    crate::verbose!(
        "Encoded {} bytes, optimized to {} bytes",
        encoded.len(),
        optimized.len()
    );

    Ok(optimized)
}

/// Writes `bytes` to `path` and returns the size on disk.
///
/// A plain write truncates the target first, so a failure partway through an
/// in-place run can leave the original damaged. With `atomic` the bytes go to
/// a temporary file next to the target which is then renamed over it; an
/// existing target's permissions carry over to the replacement.
pub fn write_output(path: &Path, bytes: &[u8], atomic: bool) -> Result<u64> {
    if atomic {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut temp_file = NamedTempFile::new_in(dir)?;
        // temp files are created 0600; keep whatever mode the target had
        if let Ok(metadata) = fs::metadata(path) {
            temp_file.as_file().set_permissions(metadata.permissions())?;
        }
        temp_file.write_all(bytes)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| ResizeError::Io(e.error))?;
    } else {
        fs::write(path, bytes)?;
    }

    Ok(fs::metadata(path)?.len())
}
