use crate::png::{self, Rgb};
use crate::Args;
use anyhow::{Context, Result};
use std::fs;
use std::str::FromStr;

pub fn generate_icons(args: Args) -> Result<()> {
    let color = parse_color(&args.color)?;

    // Ensure the output directory exists
    fs::create_dir_all(&args.output).context("Can't create output directory")?;

    println!("Generating placeholder icons...");
    for &size in &args.sizes {
        // 512 doubles as the generic icon, matching desktop icon conventions
        let filename = if size == 512 {
            "icon.png".to_string()
        } else {
            format!("{size}x{size}.png")
        };

        let buf = png::encode(size, size, color)
            .with_context(|| format!("Failed to encode {filename}"))?;
        fs::write(args.output.join(&filename), buf)
            .with_context(|| format!("Failed to write {filename}"))?;
        println!("  ✓ Generated {filename}");
    }

    Ok(())
}

/// Parse a CSS color string into the encoder's opaque RGB fill.
fn parse_color(color: &str) -> Result<Rgb> {
    let srgb = css_color::Srgb::from_str(color).map_err(|_| {
        anyhow::anyhow!("Invalid color: {color} (expected a CSS color such as \"#1b4f8c\")")
    })?;

    Ok(Rgb {
        r: (srgb.red * 255.).round() as u8,
        g: (srgb.green * 255.).round() as u8,
        b: (srgb.blue * 255.).round() as u8,
    })
}
