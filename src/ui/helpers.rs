use ratatui::style::Color;

use crate::color::parse_css_color;

/// Neutral fill shown while the candidate is not a recognized color (#eee).
pub const FALLBACK_BG: Color = Color::Rgb(0xEE, 0xEE, 0xEE);

/// Label color inside the preview box (#222), readable on light fills.
pub const PREVIEW_FG: Color = Color::Rgb(0x22, 0x22, 0x22);

/// Resolve a candidate to a terminal color, if it names one.
pub fn candidate_color(candidate: &str) -> Option<Color> {
    parse_css_color(candidate).map(|(r, g, b)| Color::Rgb(r, g, b))
}
