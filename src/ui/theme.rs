//! Color palettes for MovieTUI
//!
//! One palette per theme preference; the marquee-amber accent stays the
//! same idea across both, re-tuned for contrast on each background.

use ratatui::style::{Color, Modifier, Style};

use crate::models::ThemePreference;

/// Resolved color palette for the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Slightly offset background for panels and the status bar
    pub surface: Color,
    /// Primary accent (titles, focused elements)
    pub primary: Color,
    /// Default text
    pub text: Color,
    /// Muted text
    pub dim: Color,
    /// Unfocused borders
    pub border: Color,
    /// Error text
    pub error: Color,
    /// High-rating indicator
    pub success: Color,
    /// Mid-rating indicator
    pub warning: Color,
    /// Favorite marker
    pub favorite: Color,
}

impl Palette {
    /// Dark palette (default)
    pub const fn dark() -> Self {
        Self {
            background: Color::Rgb(0x14, 0x12, 0x1a),
            surface: Color::Rgb(0x1e, 0x1c, 0x28),
            primary: Color::Rgb(0xff, 0xc4, 0x3d),
            text: Color::Rgb(0xe8, 0xe6, 0xe3),
            dim: Color::Rgb(0x8a, 0x87, 0x96),
            border: Color::Rgb(0x3a, 0x38, 0x48),
            error: Color::Rgb(0xff, 0x5c, 0x5c),
            success: Color::Rgb(0x7d, 0xd8, 0x7d),
            warning: Color::Rgb(0xff, 0xb3, 0x4d),
            favorite: Color::Rgb(0xff, 0x6e, 0x9c),
        }
    }

    /// Light palette
    pub const fn light() -> Self {
        Self {
            background: Color::Rgb(0xfa, 0xf7, 0xf2),
            surface: Color::Rgb(0xef, 0xea, 0xe2),
            primary: Color::Rgb(0x8a, 0x5d, 0x00),
            text: Color::Rgb(0x2a, 0x28, 0x24),
            dim: Color::Rgb(0x6e, 0x69, 0x61),
            border: Color::Rgb(0xc9, 0xc2, 0xb6),
            error: Color::Rgb(0xb3, 0x26, 0x26),
            success: Color::Rgb(0x2e, 0x7d, 0x32),
            warning: Color::Rgb(0x9a, 0x5b, 0x00),
            favorite: Color::Rgb(0xb0, 0x2e, 0x5c),
        }
    }

    /// Palette for a theme preference
    pub fn for_preference(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Muted text
    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Selected list entry
    pub fn highlighted(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent marker style
    pub fn accent(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Error style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Loading indicator style
    pub fn loading(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Normal/unfocused border
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Focused border
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Search input style
    pub fn input(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    /// Keybinding hint style
    pub fn keybind(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Status bar style
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    /// Favorite marker style
    pub fn favorite(&self) -> Style {
        Style::default().fg(self.favorite).add_modifier(Modifier::BOLD)
    }

    /// Rating style graded by value; missing ratings render muted
    pub fn rating(&self, rating: Option<f32>) -> Style {
        match rating {
            Some(r) if r >= 7.0 => Style::default().fg(self.success),
            Some(r) if r >= 5.0 => Style::default().fg(self.warning),
            Some(_) => Style::default().fg(self.dim),
            None => Style::default().fg(self.dim),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Calculate relative luminance for a color (used in contrast ratio)
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Calculate contrast ratio between two colors
/// Returns a value between 1 (same color) and 21 (black/white)
/// WCAG AA requires >= 4.5:1 for normal text, >= 3:1 for large text
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Check if a foreground/background pair meets WCAG AA for normal text
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// Check if a foreground/background pair meets WCAG AA for large text
pub fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 3.0
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}
