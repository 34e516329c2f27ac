use crate::constants::PROGRESS_BAR_TEMPLATE;
use crate::discovery::collect_png_files;
use crate::error::{ResizeError, Result};
use crate::logger::is_quiet;
use crate::processing::{process_png_file, FileReport, ResizeOptions};
use crate::utils::{calculate_reduction, format_kb, print_file_report};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of one discovered file, kept in discovery order.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<FileReport>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&ResizeError> {
        self.result.as_ref().err()
    }
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub found: usize,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn reports(&self) -> impl Iterator<Item = &FileReport> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn total_original_size(&self) -> u64 {
        self.reports().map(|r| r.original_size).sum()
    }

    pub fn total_compressed_size(&self) -> u64 {
        self.reports().map(|r| r.compressed_size).sum()
    }
}

/// Halves and recompresses every PNG under `input_dir`, one file at a time.
///
/// # Arguments
/// * `input_dir` - Root searched recursively for `.png` files
/// * `output_dir` - Where to mirror results; `None` overwrites the originals
/// * `options` - Scale factor and write strategy
///
/// # Returns
/// * `Ok(BatchSummary)` - One outcome per discovered file, failures included
/// * `Err(ResizeError)` - Only if the directory walk itself fails
///
/// Per-file failures are reported and recorded but never stop the batch.
/// When nothing is found the function returns before touching the filesystem.
pub fn resize_png_images(
    input_dir: &Path,
    output_dir: Option<&Path>,
    options: &ResizeOptions,
) -> Result<BatchSummary> {
    crate::info!("🚀 Starting PNG resize...");
    crate::info!("📁 Input: {:?}", input_dir);
    match output_dir {
        Some(dir) => crate::info!("📁 Output: {:?}", dir),
        None => crate::info!("📁 Output: in place (originals are overwritten)"),
    }

    let start_time = Instant::now();

    let png_files = collect_png_files(input_dir)?;
    let total_files = png_files.len();

    if total_files == 0 {
        crate::info!("⚠️  No PNG files found: {:?}", input_dir);
        return Ok(BatchSummary::default());
    }

    crate::info!("📊 Found {} PNG files", total_files);

    let progress = if is_quiet() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(total_files as u64)
    };
    if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
        progress.set_style(style);
    }

    let mut outcomes = Vec::with_capacity(total_files);
    for png_file in png_files {
        progress.set_message(png_file.display().to_string());
        let result = process_png_file(input_dir, &png_file, output_dir, options);

        progress.suspend(|| match &result {
            Ok(report) => print_file_report(report),
            Err(e) => {
                crate::error!("Failed to process {:?}: {}", png_file, e);
            }
        });
        progress.inc(1);

        outcomes.push(FileOutcome {
            path: png_file,
            result,
        });
    }

    progress.finish_and_clear();

    let summary = BatchSummary {
        found: total_files,
        outcomes,
    };

    let total_before = summary.total_original_size();
    let total_after = summary.total_compressed_size();

    crate::info!("\n📊 Resize Summary:");
    crate::info!("  📁 Files found: {}", summary.found);
    crate::info!("  ✅ Succeeded: {}", summary.succeeded());
    crate::info!("  ❌ Failed: {}", summary.failed());
    crate::info!("  📊 Total original size: {}", format_kb(total_before));
    crate::info!("  📈 Total compressed size: {}", format_kb(total_after));
    crate::info!(
        "  🎯 Overall reduction: {:.1}%",
        calculate_reduction(total_before, total_after)
    );
    crate::info!("  ⏱️  Total time: {:?}", start_time.elapsed());

    if summary.failed() > 0 {
        crate::warn!("{} of {} files could not be processed", summary.failed(), summary.found);
    }

    Ok(summary)
}
