use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::tty::IsTty;
use hexblend_core::{blend, clamp_alpha, Color};

use crate::render::{write_report, RenderSettings, Sample};

mod render;

/// Blend two hex colors and preview the result with terminal swatches.
#[derive(Parser, Debug)]
#[command(name = "hexblend")]
#[command(about = "Blend one hex color into another")]
struct Args {
    /// First color as six hex digits, without the leading '#'
    color1: String,

    /// Second color as six hex digits, without the leading '#'
    color2: String,

    /// Weight of the first color, from 0.0 to 1.0 (unparseable text counts as 0)
    #[arg(allow_hyphen_values = true)]
    ratio: String,

    /// Width of each color swatch in terminal cells
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=16))]
    swatch_width: u8,

    /// Print swatches without terminal colors (implied when stdout is not a terminal)
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn render_settings(&self, stdout_is_tty: bool) -> RenderSettings {
        RenderSettings {
            swatch_width: self.swatch_width,
            color: stdout_is_tty && !self.no_color,
        }
    }
}

/// Parses the ratio argument. Malformed text is treated as 0.
fn parse_ratio(text: &str) -> f64 {
    text.parse().unwrap_or_else(|e| {
        log::debug!("Ratio {:?} is not a number ({}), using 0", text, e);
        0.0
    })
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let hex1 = format!("#{}", args.color1);
    let hex2 = format!("#{}", args.color2);

    let color1 = Color::from_hex(&hex1)?;
    let color2 = Color::from_hex(&hex2)?;
    log::debug!("Decoded {} as {:?} and {} as {:?}", hex1, color1, hex2, color2);

    let alpha = parse_ratio(&args.ratio);
    log::debug!("Blend ratio {} (effective {})", alpha, clamp_alpha(alpha));

    let blended = blend(color1, color2, alpha);
    log::debug!("Blended result {:?}", blended);

    let stdout = io::stdout();
    let settings = args.render_settings(stdout.is_tty());
    log::debug!("Render settings {:?}", settings);

    let mut out = stdout.lock();
    write_report(
        &mut out,
        &settings,
        &Sample::new(hex1, color1),
        &Sample::new(hex2, color2),
        alpha,
        &Sample::new(blended.to_hex(), blended),
    )
    .context("failed to write blend report")?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
