//! Score heatmap color mapping.
//!
//! Maps a score within a week's [min, max] range onto a linear blend between
//! two theme colors, and picks a light or dark text color so the cell stays
//! readable on either end of the gradient.

/// RGBA color with channels in 0-255 and alpha in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellColor {
    /// CSS color string for the cell background.
    pub background: String,
    /// Contrast-safe text color (light or dark constant).
    pub text_color: String,
}

pub const LIGHT_TEXT: &str = "#f8fafc";
pub const DARK_TEXT: &str = "#0f172a";

/// Backgrounds darker than this luminance get the light text constant.
const LUMINANCE_THRESHOLD: f64 = 0.55;

fn hex_channel(text: &str) -> Option<f64> {
    u8::from_str_radix(text, 16).ok().map(f64::from)
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
pub fn parse_color(text: &str) -> Option<Rgba> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        return match hex.len() {
            3 => {
                let mut chars = hex.chars();
                let (r, g, b) = (chars.next()?, chars.next()?, chars.next()?);
                Some(Rgba {
                    r: hex_channel(&format!("{r}{r}"))?,
                    g: hex_channel(&format!("{g}{g}"))?,
                    b: hex_channel(&format!("{b}{b}"))?,
                    a: 1.0,
                })
            }
            6 | 8 => Some(Rgba {
                r: hex_channel(&hex[0..2])?,
                g: hex_channel(&hex[2..4])?,
                b: hex_channel(&hex[4..6])?,
                a: if hex.len() == 8 {
                    hex_channel(&hex[6..8])? / 255.0
                } else {
                    1.0
                },
            }),
            _ => None,
        };
    }

    let body = text
        .strip_prefix("rgba")
        .or_else(|| text.strip_prefix("rgb"))?
        .trim()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let r: f64 = parts[0].parse().ok()?;
    let g: f64 = parts[1].parse().ok()?;
    let b: f64 = parts[2].parse().ok()?;
    let a: f64 = match parts.get(3) {
        Some(p) => p.parse().ok()?,
        None => 1.0,
    };
    if [r, g, b].iter().any(|c| !c.is_finite() || *c < 0.0 || *c > 255.0) {
        return None;
    }
    Some(Rgba {
        r,
        g,
        b,
        a: a.clamp(0.0, 1.0),
    })
}

fn lerp(low: f64, high: f64, t: f64) -> f64 {
    low + (high - low) * t
}

/// Relative luminance of the background, sRGB weights on 0-1 channels.
fn luminance(c: &Rgba) -> f64 {
    (0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b) / 255.0
}

fn to_css(c: &Rgba) -> String {
    let r = c.r.round() as u8;
    let g = c.g.round() as u8;
    let b = c.b.round() as u8;
    if (c.a - 1.0).abs() < f64::EPSILON {
        format!("rgb({}, {}, {})", r, g, b)
    } else {
        format!("rgba({}, {}, {}, {})", r, g, b, (c.a * 100.0).round() / 100.0)
    }
}

/// Map a score within [min, max] to a blended cell color.
///
/// The blend ratio is `(score - min) / (max - min)`, clamped to [0, 1]; a
/// zero-width range pins it at 0.5. Returns `None` when the score is not
/// finite or either endpoint color fails to parse.
pub fn color_for(
    score: f64,
    min_score: f64,
    max_score: f64,
    low_color: &str,
    high_color: &str,
) -> Option<CellColor> {
    if !score.is_finite() {
        return None;
    }
    let low = parse_color(low_color)?;
    let high = parse_color(high_color)?;

    let range = max_score - min_score;
    let ratio = if range == 0.0 || !range.is_finite() {
        0.5
    } else {
        ((score - min_score) / range).clamp(0.0, 1.0)
    };

    let blended = Rgba {
        r: lerp(low.r, high.r, ratio),
        g: lerp(low.g, high.g, ratio),
        b: lerp(low.b, high.b, ratio),
        a: lerp(low.a, high.a, ratio),
    };

    let text_color = if luminance(&blended) < LUMINANCE_THRESHOLD {
        LIGHT_TEXT
    } else {
        DARK_TEXT
    };

    Some(CellColor {
        background: to_css(&blended),
        text_color: text_color.to_string(),
    })
}
