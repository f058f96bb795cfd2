use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod icon_gen;
mod png;

#[derive(Debug, Parser)]
#[clap(
    name = "placeholder-icons",
    about = "Generate solid-color placeholder PNG icons for application scaffolding"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "./icons")]
    output: PathBuf,

    /// Square icon sizes to generate, in pixels.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = vec![32, 128, 256, 512]
    )]
    sizes: Vec<u32>,

    /// The fill color for the icons (CSS color format).
    #[clap(short, long, value_name = "COLOR", default_value = "#1b4f8c")]
    color: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(args)
}
