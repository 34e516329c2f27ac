use anyhow::Context;
use clap::Parser;
use png_halve::cli::Args;
use png_halve::{resize_png_images, ResizeOptions};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    png_halve::logger::init(args.quiet, args.verbose);

    let options = ResizeOptions::new(Some(args.scale), args.atomic)?;

    // Per-file failures are already reported; only a failed walk ends up here.
    resize_png_images(&args.input, args.output.as_deref(), &options)
        .with_context(|| format!("failed to resize PNG files under {:?}", args.input))?;

    Ok(())
}
