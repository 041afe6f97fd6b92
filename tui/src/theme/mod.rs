//! Theme and Colors
//!
//! Deep-indigo gradient for the hero and contact sections, black for the
//! rest, purple accents.
//!
//! All palette colors are RGB so entrance transitions can fade them in from
//! the section background.

use ratatui::style::Color;

// ============================================================================
// Backgrounds
// ============================================================================

/// Gradient start (top-left of the hero)
pub const GRADIENT_START: Color = Color::Rgb(15, 12, 41);

/// Gradient middle
pub const GRADIENT_MID: Color = Color::Rgb(48, 43, 99);

/// Gradient end
pub const GRADIENT_END: Color = Color::Rgb(36, 36, 62);

/// Plain sections
pub const PAGE_BLACK: Color = Color::Rgb(0, 0, 0);

/// Navigation bar (black at 70%)
pub const NAV_BG: Color = Color::Rgb(18, 18, 22);

// ============================================================================
// Foregrounds
// ============================================================================

pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);

/// Secondary text on cards and footer
pub const TEXT_MUTED: Color = Color::Rgb(161, 161, 170);

/// Hover / focus accent (purple-400)
pub const ACCENT: Color = Color::Rgb(192, 132, 252);

/// Form border (purple-700)
pub const ACCENT_DEEP: Color = Color::Rgb(126, 34, 206);

/// Button fill
pub const BUTTON_BG: Color = Color::Rgb(24, 24, 27);

/// Form panel and inputs
pub const PANEL_BG: Color = Color::Rgb(250, 250, 250);
pub const PANEL_TEXT: Color = Color::Rgb(9, 9, 11);
pub const PLACEHOLDER: Color = Color::Rgb(113, 113, 122);
pub const INPUT_BG: Color = Color::Rgb(228, 228, 231);

/// Separator lines
pub const SEPARATOR: Color = Color::Rgb(31, 41, 55);

pub const ERROR_RED: Color = Color::Rgb(239, 68, 68);

pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);

// ============================================================================
// Blending
// ============================================================================

/// Mix `to` over `from` by `amount` (0.0 = `from`, 1.0 = `to`)
pub fn blend(from: Color, to: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * amount).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if amount >= 0.5 => to,
        _ => from,
    }
}
