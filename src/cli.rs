use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_SCALE_FACTOR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "png-halve",
    about = "Halve every PNG under a directory and recompress it losslessly",
    long_about = "png-halve walks a directory tree, scales each PNG to half its width and height \
                  with Lanczos resampling, and re-encodes it with maximum PNG compression plus an \
                  oxipng optimization pass. Files are overwritten in place unless an output \
                  directory is given.\n\n\
                  The optimization pass uses zopfli, which trades speed for size: expect large \
                  images to take seconds each.",
    version,
    after_help = "EXAMPLES:\n  \
    png-halve\n  \
    png-halve ./assets/img -o ./assets/img_compressed\n  \
    png-halve ./assets/img --atomic -q"
)]
pub struct Args {
    #[arg(
        default_value = DEFAULT_INPUT_DIR,
        help = "Directory searched recursively for .png files"
    )]
    pub input: PathBuf,

    #[arg(
        short = 'o',
        long,
        help = "Mirror results under this directory instead of overwriting",
        long_help = "Write each result under this directory at the same relative path it had \
                     under the input directory. Missing directories are created. \
                     Without this option the original files are overwritten."
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 's',
        long,
        default_value_t = DEFAULT_SCALE_FACTOR,
        help = "Scale factor applied to both axes (0 < scale <= 1)",
        long_help = "Scale factor applied to width and height. Results are truncated toward zero, \
                     so a 101x101 image becomes 50x50 at the default of 0.5."
    )]
    pub scale: f64,

    #[arg(
        long,
        help = "Write through a temporary file and rename it into place",
        long_help = "Encode into a temporary file in the destination directory and rename it over \
                     the target. Protects originals from truncation if a write fails partway."
    )]
    pub atomic: bool,

    #[arg(short = 'q', long, conflicts_with = "verbose", help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print decoder and encoder details")]
    pub verbose: bool,
}
