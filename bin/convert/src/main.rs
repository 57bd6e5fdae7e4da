//! Convert a color between RGB and YCbCr and print the three resulting
//! channels. With no arguments it converts the RGB color `0 0 3`.

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use ycbcr::{parse_channels, Rgb8, YCbCr8};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Three channel values in 0..=255, separated by commas or spaces.
    #[arg(num_args = 1.., default_values = ["0", "0", "3"])]
    channels: Vec<String>,
    /// Treat the input as YCbCr and print RGB.
    #[arg(long, short)]
    inverse: bool,
    /// Use the floating point BT.601 model instead of fixed-point arithmetic.
    #[arg(long, short)]
    reference: bool,
    /// Log more to stderr. Repeat for more detail. RUST_LOG overrides.
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Run the conversion and return the line to print.
    fn run(&self) -> anyhow::Result<String> {
        let input = self.channels.join(" ");
        let channels =
            parse_channels(&input).with_context(|| format!("could not read channels from {input:?}"))?;

        let output = match (self.inverse, self.reference) {
            (false, false) => Rgb8::from(channels).to_ycbcr().to_string(),
            (false, true) => Rgb8::from(channels).to_ycbcr_reference().to_string(),
            (true, false) => {
                let (rgb, clamped) = YCbCr8::from(channels).to_rgb_clamped();
                if !clamped.is_empty() {
                    tracing::info!(?clamped, "input is outside of the RGB gamut");
                }
                rgb.to_string()
            }
            (true, true) => YCbCr8::from(channels).to_rgb_reference().to_string(),
        };

        Ok(output)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?cli, "parsed arguments");

    println!("{}", cli.run()?);

    Ok(())
}
