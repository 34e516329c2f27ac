//! Size arithmetic and report printing shared by the per-file and batch paths.

use crate::constants::{
    BYTES_PER_KB, COMPRESSED_SIZE_PREFIX, ORIGINAL_SIZE_PREFIX, REDUCTION_PREFIX,
};
use crate::processing::FileReport;

/// Format a byte count as kilobytes with two decimals (e.g. "12.50 KB")
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / BYTES_PER_KB)
}

/// Calculate the size reduction as a percentage
///
/// # Arguments
/// * `original_size` - Original file size in bytes
/// * `new_size` - Resulting file size in bytes
///
/// # Returns
/// * `(1 - new/original) * 100`; positive means the file shrank, negative
///   means it grew. Zero when the original was empty.
pub fn calculate_reduction(original_size: u64, new_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    (1.0 - new_size as f64 / original_size as f64) * 100.0
}

/// Print the per-file block: path, both dimensions, both sizes and the reduction
pub fn print_file_report(report: &FileReport) {
    let (orig_w, orig_h) = report.original_dimensions;
    let (new_w, new_h) = report.new_dimensions;

    crate::info!("\n🖼️  Processing: {:?}", report.input);
    crate::info!("  📏 Original dimensions: {}x{}", orig_w, orig_h);
    crate::info!("  📐 Resized dimensions: {}x{}", new_w, new_h);
    crate::info!("  {} {}", ORIGINAL_SIZE_PREFIX, format_kb(report.original_size));
    crate::info!("  {} {}", COMPRESSED_SIZE_PREFIX, format_kb(report.compressed_size));
    crate::info!("  {} {:.1}%", REDUCTION_PREFIX, report.reduction_percent());

    if report.output != report.input {
        crate::verbose!("Written to {:?}", report.output);
    }
}
