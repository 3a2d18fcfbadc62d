//! Betting-line normalization.
//!
//! Spreadsheet exports carry lines as numbers ("-3.5"), signed decimal
//! strings, or strings ending in a vulgar-fraction glyph ("−3½"). Everything
//! funnels through [`normalize_line`] into a canonical finite number with at
//! most 3 decimal digits, and [`format_line`] renders the canonical display
//! form.

use crate::dataset::RawValue;

/// Placeholder shown when a line is absent or unparseable.
pub const LINE_PLACEHOLDER: &str = "—";

/// Vulgar fractions that appear in line strings, with their numeric values.
const FRACTION_GLYPHS: [(char, f64); 7] = [
    ('¼', 0.25),
    ('½', 0.5),
    ('¾', 0.75),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

/// Fold non-breaking spaces and unicode minus/dash variants, collapse runs of
/// whitespace, and trim.
fn clean_line_text(raw: &str) -> String {
    let folded: String = raw
        .chars()
        .map(|c| match c {
            '\u{a0}' => ' ',
            // unicode minus, en dash, em dash
            '\u{2212}' | '\u{2013}' | '\u{2014}' => '-',
            other => other,
        })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a raw line value to a canonical number.
///
/// - finite numbers pass through unchanged
/// - strings are cleaned, an optional trailing fraction glyph is split off,
///   and the remainder is parsed as a float; the glyph's value is added back
///   with the sign of the string (leading `-` makes it negative)
/// - anything else is `None`
///
/// String-parsed results are rounded to 3 decimal places.
pub fn normalize_line(raw: &RawValue) -> Option<f64> {
    if let Some(n) = raw.as_number() {
        return Some(n);
    }
    let text = raw.as_text()?;
    let cleaned = clean_line_text(text);
    if cleaned.is_empty() {
        return None;
    }

    let mut base_text = cleaned.as_str();
    let mut fraction: Option<f64> = None;
    if let Some(last) = base_text.chars().last() {
        if let Some(&(glyph, value)) = FRACTION_GLYPHS.iter().find(|(g, _)| *g == last) {
            fraction = Some(value);
            base_text = base_text[..base_text.len() - glyph.len_utf8()].trim_end();
        }
    }

    let negative = cleaned.starts_with('-');
    let base = match base_text.parse::<f64>() {
        Ok(n) => n,
        // "½" alone, or "-½": no numeric base, glyph carries the value
        Err(_) if fraction.is_some() => 0.0,
        Err(_) => return None,
    };

    let sign = if negative { -1.0 } else { 1.0 };
    let value = base + sign * fraction.unwrap_or(0.0);
    if !value.is_finite() {
        return None;
    }
    Some((value * 1000.0).round() / 1000.0)
}

/// Render a line for display: up to 3 decimals, trailing zeros stripped,
/// `+` prefix on positive values. Unparseable input falls back to the raw
/// text, or the placeholder when nothing is present.
pub fn format_line(raw: &RawValue) -> String {
    match normalize_line(raw) {
        Some(value) => {
            let mut s = format!("{:.3}", value.abs());
            while s.ends_with('0') {
                s.pop();
            }
            if s.ends_with('.') {
                s.pop();
            }
            if value > 0.0 {
                format!("+{}", s)
            } else if value < 0.0 {
                format!("-{}", s)
            } else {
                s
            }
        }
        None => raw
            .display_string()
            .unwrap_or_else(|| LINE_PLACEHOLDER.to_string()),
    }
}
