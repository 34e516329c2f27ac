use std::num::NonZeroU8;

/// Directory processed when no input is given on the command line.
pub const DEFAULT_INPUT_DIR: &str = "public/assets/img";

/// Both axes are multiplied by this factor and truncated toward zero.
pub const DEFAULT_SCALE_FACTOR: f64 = 0.5;

pub const PNG_EXTENSION: &str = "png";

// Zopfli already dominates the cost; higher presets only add filter trials.
pub const OXIPNG_PRESET: u8 = 4;
pub const ZOPFLI_ITERATIONS: NonZeroU8 = match NonZeroU8::new(15) {
    Some(n) => n,
    None => panic!("zopfli iterations must be non-zero"),
};

pub const BYTES_PER_KB: f64 = 1024.0;

pub const PROGRESS_BAR_TEMPLATE: &str = "{bar:40.cyan/blue} {pos}/{len} {wide_msg}";

// Common output message prefixes
pub const ORIGINAL_SIZE_PREFIX: &str = "📊 Original size:";
pub const COMPRESSED_SIZE_PREFIX: &str = "📈 Compressed size:";
pub const REDUCTION_PREFIX: &str = "🎯 Reduction:";
