//! Terminal output for a blend: colored swatches next to each hex code.

use std::fmt;
use std::io::{self, Write};

use crossterm::style::{self, Stylize};
use hexblend_core::Color;

/// Presentation options gathered from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Number of terminal cells per swatch
    pub swatch_width: u8,
    /// Emit ANSI background colors; plain spaces otherwise
    pub color: bool,
}

/// A color together with the hex code shown next to its swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub label: String,
    pub color: Color,
}

impl Sample {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// A block of terminal cells filled with a color.
pub struct Swatch<'a> {
    color: Color,
    settings: &'a RenderSettings,
}

impl<'a> Swatch<'a> {
    pub fn new(color: Color, settings: &'a RenderSettings) -> Self {
        Self { color, settings }
    }
}

impl fmt::Display for Swatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = " ".repeat(self.settings.swatch_width as usize);
        if self.settings.color {
            write!(f, "{}", cells.on(terminal_color(self.color)))
        } else {
            f.write_str(&cells)
        }
    }
}

fn terminal_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Six decimals for finite ratios; infinities and NaN are shown as `+Inf`,
/// `-Inf` and `NaN`.
fn format_alpha(alpha: f64) -> String {
    if alpha.is_nan() {
        "NaN".to_string()
    } else if alpha.is_infinite() {
        if alpha > 0.0 { "+Inf" } else { "-Inf" }.to_string()
    } else {
        format!("{:.6}", alpha)
    }
}

fn annotated(sample: &Sample, settings: &RenderSettings) -> String {
    format!("{} {}", Swatch::new(sample.color, settings), sample.label)
}

/// Writes the blend summary: a header line naming both inputs and the
/// ratio, a blank line, then one swatch line per input and the result.
pub fn write_report<W: Write>(
    out: &mut W,
    settings: &RenderSettings,
    first: &Sample,
    second: &Sample,
    alpha: f64,
    result: &Sample,
) -> io::Result<()> {
    let first_shown = annotated(first, settings);
    let second_shown = annotated(second, settings);

    writeln!(
        out,
        "Blending ({}) into ({}) with alpha={}",
        first_shown,
        second_shown,
        format_alpha(alpha)
    )?;
    writeln!(out)?;
    writeln!(out, "{}", first_shown)?;
    writeln!(out, "{}", second_shown)?;
    writeln!(out, "{}", annotated(result, settings))?;
    out.flush()
}
