use anyhow::{Context, Result};
use clap::Parser;

use tinct::cli::Args;
use tinct::pipeline;
use tinct::pipeline::extract::{distinct_colors, load_thumbnail};

fn main() -> Result<()> {
    let args = Args::parse();

    let thumbnail = load_thumbnail(&args.image)?;
    let colors = distinct_colors(&thumbnail);
    let palette = pipeline::generate_palette(&colors)
        .with_context(|| format!("failed to derive a palette from {}", args.image.display()))?;

    if let Some(path) = &args.output {
        palette.write_to(path)?;
    } else if args.preview {
        print!("{}", palette.render_preview());
    } else {
        print!("{}", palette.serialize());
    }
    Ok(())
}
