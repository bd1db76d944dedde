use std::path::PathBuf;

use clap::Parser;

/// Generate a terminal color palette from an image.
#[derive(Parser, Debug)]
#[command(name = "tinct", version, about)]
pub struct Args {
    /// Path to the input image
    pub image: PathBuf,

    /// Write the palette to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print colored swatches alongside the hex codes
    #[arg(long, conflicts_with = "output")]
    pub preview: bool,
}
