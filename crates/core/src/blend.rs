use crate::Color;

/// Clamps a blend ratio into `[0.0, 1.0]`. NaN is treated as `0.0`.
pub fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        return 0.0;
    }
    alpha.clamp(0.0, 1.0)
}

/// Blends `color1` into `color2` with an alpha value.
///
/// - alpha = 0.0 returns `color2`
/// - alpha = 1.0 returns `color1`
/// - alpha = 0.6 returns `color1` mixed 60% into `color2`
///
/// Alpha outside `[0.0, 1.0]` is clamped. Each channel is computed as
/// `c1 * alpha + c2 * (1 - alpha)` and truncated toward zero, not rounded.
/// Float error in that sum can land just below an integer, so a channel may
/// come out one less than both inputs when alpha is not a dyadic fraction.
pub fn blend(color1: Color, color2: Color, alpha: f64) -> Color {
    let alpha = clamp_alpha(alpha);

    Color {
        r: blend_channel(color1.r, color2.r, alpha),
        g: blend_channel(color1.g, color2.g, alpha),
        b: blend_channel(color1.b, color2.b, alpha),
    }
}

fn blend_channel(start: u8, end: u8, alpha: f64) -> u8 {
    // `as` truncates toward zero
    (start as f64 * alpha + end as f64 * (1.0 - alpha)) as u8
}

impl Color {
    /// Method form of [`blend`]: mixes `self` into `other`.
    pub fn blend(&self, other: &Color, alpha: f64) -> Color {
        blend(*self, *other, alpha)
    }
}
