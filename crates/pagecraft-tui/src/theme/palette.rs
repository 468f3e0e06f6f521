//! Color palette for the editor UI

use ratatui::style::Color;

// --- Background layers ---
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent
pub const CONTRAST_FG: Color = Color::Black; // Foreground on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Success notices
pub const STATUS_RED: Color = Color::Red; // Error notices
pub const STATUS_YELLOW: Color = Color::Yellow; // Busy indicators, key hints

/// Parse a `#rrggbb` hex string into a terminal color.
///
/// Section records store their background and text colors as hex strings.
/// Anything that does not parse falls back to the default foreground.
pub fn from_hex(hex: &str) -> Color {
    let digits = match hex.strip_prefix('#') {
        Some(d) if d.len() == 6 => d,
        _ => return Color::Reset,
    };
    let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
    match (parse(0..2), parse(2..4), parse(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}
