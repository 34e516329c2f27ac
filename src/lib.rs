pub mod batch;
pub mod cli;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod logger;
pub mod processing;
pub mod utils;

pub use batch::{resize_png_images, BatchSummary, FileOutcome};
pub use discovery::{collect_png_files, is_png_file};
pub use error::{ResizeError, Result};
pub use processing::{
    encode_png, load_image, process_png_file, resize_image, resolve_output_path,
    scaled_dimensions, write_output, FileReport, ResizeOptions,
};
pub use utils::{calculate_reduction, format_kb};
