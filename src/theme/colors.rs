//! Colors - Kairos Theme Colors

use gpui::{rgb, Rgba};

/// Kairos color palette - All colors are accessed via associated functions
pub struct KairosColors;

impl KairosColors {
    // Brand colors
    /// Primary accent - Blue
    pub fn accent() -> Rgba { rgb(0x3b82f6) }
    /// Secondary accent - Violet (logo gradient tail)
    pub fn accent_violet() -> Rgba { rgb(0x8b5cf6) }

    // Background colors
    /// Main background - Dark slate
    pub fn background() -> Rgba { rgb(0x0f172a) }
    /// Raised surface (cards, form panel)
    pub fn surface() -> Rgba { rgb(0x1e293b) }
    /// Header and footer background
    pub fn chrome_bg() -> Rgba { rgb(0x0b1120) }
    /// Inset panel on a surface
    pub fn inset_bg() -> Rgba { rgb(0x16213a) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0xffffff) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x94a3b8) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x64748b) }
    /// Dark text on light surfaces
    pub fn text_on_light() -> Rgba { rgb(0x0f172a) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0x24324a) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x3b82f6) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0x131c30) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0x2b3a55) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x475569) }

    // Chart colors
    /// Chart bar
    pub fn chart_bar() -> Rgba { rgb(0x334155) }
    /// Chart bar for the latest point
    pub fn chart_bar_highlight() -> Rgba { rgb(0x00ff00) }
}
