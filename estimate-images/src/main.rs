//! Recommend the number of labeled images for detector fine-tuning.
//!
//! Applies the standard proportion sample-size equation per class and
//! reports the binding recommendation. The statistics live in the
//! `ml-sampling` crate; this binary is argument parsing and printing.
//!
//! # Usage
//!
//! ```text
//! estimate-images --class-boxes header:1,body:2,footer:1
//! estimate-images --margin 0.03 --confidence 0.99
//! estimate-images --current-images 120 --format json
//! ```

use anyhow::Result;
use clap::Parser;
use ml_sampling::{estimate, ClassSpec, EstimationParams};

/// Compute the recommended number of labeled images for detector
/// fine-tuning using the standard proportion sample size equation.
#[derive(Parser)]
#[command(name = "estimate-images")]
#[command(about = "Estimate labeled-image requirements for fine-tuning", long_about = None)]
#[command(version)]
struct Cli {
    /// Comma-separated class:boxes_per_image pairs. Use values >= 1
    /// when multiple instances of a class appear per image.
    #[arg(long, default_value = "header:1,body:1,footer:1")]
    class_boxes: String,

    /// Two-sided confidence level; values of 1 or more are read as
    /// percentages.
    #[arg(long, default_value_t = 0.95)]
    confidence: f64,

    /// Desired margin of error as a fraction (0.05 == +/-5%).
    #[arg(long, default_value_t = 0.05)]
    margin: f64,

    /// Assumed per-class detection rate; 0.5 gives the most
    /// conservative (largest) sample size.
    #[arg(long, default_value_t = 0.5)]
    base_rate: f64,

    /// Report the worst-case margin achieved by N labeled images.
    #[arg(long)]
    current_images: Option<u64>,

    /// Output format
    #[arg(long, default_value = "pretty")]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let classes = ClassSpec::parse(&cli.class_boxes)?;
    let params = EstimationParams {
        confidence: cli.confidence,
        margin: cli.margin,
        base_rate: cli.base_rate,
        current_images: cli.current_images,
    };

    let result = estimate(&classes, &params)?;
    match cli.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => print!("{}", result.to_report()),
    }

    Ok(())
}
