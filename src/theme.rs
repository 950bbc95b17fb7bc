//! Colour palette and style helpers
//!
//! All colours are true-colour so that transitions can blend them toward
//! the background.

use crate::model::WorkoutCategory;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

pub const BG: Color = Color::Rgb(9, 9, 11);
pub const SURFACE: Color = Color::Rgb(24, 24, 27);
pub const SURFACE_RAISED: Color = Color::Rgb(39, 39, 42);
pub const BORDER: Color = Color::Rgb(63, 63, 70);
pub const MUTED: Color = Color::Rgb(113, 113, 122);
pub const SUBTLE: Color = Color::Rgb(82, 82, 91);
pub const TEXT: Color = Color::Rgb(250, 250, 250);
pub const TEXT_DIM: Color = Color::Rgb(161, 161, 170);
pub const BLACK: Color = Color::Rgb(0, 0, 0);

pub const LIME: Color = Color::Rgb(163, 230, 53);
pub const ORANGE: Color = Color::Rgb(249, 115, 22);
pub const CYAN: Color = Color::Rgb(34, 211, 238);
pub const ROSE: Color = Color::Rgb(244, 63, 94);
pub const GOLD: Color = Color::Rgb(234, 179, 8);
pub const SILVER: Color = Color::Rgb(161, 161, 170);
pub const BRONZE: Color = Color::Rgb(180, 83, 9);
/// Lime-tinted surface behind the viewer's leaderboard row
pub const HIGHLIGHT: Color = Color::Rgb(26, 36, 14);

/// Blend `color` toward the background; `opacity` 1.0 leaves it untouched
pub fn fade(color: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (color, BG) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mix = |c: u8, base: u8| {
                (f32::from(base) + (f32::from(c) - f32::from(base)) * opacity).round() as u8
            };
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        }
        (other, _) => other,
    }
}

/// Apply `fade` to both colours of a style
pub fn fade_style(style: Style, opacity: f32) -> Style {
    let mut faded = style;
    if let Some(fg) = style.fg {
        faded = faded.fg(fade(fg, opacity));
    }
    if let Some(bg) = style.bg {
        faded = faded.bg(fade(bg, opacity));
    }
    faded
}

/// Badge style per workout category as (foreground, background)
pub fn category_colors(category: WorkoutCategory) -> (Color, Color) {
    match category {
        WorkoutCategory::Amrap => (BLACK, LIME),
        WorkoutCategory::ForTime => (BLACK, ORANGE),
        WorkoutCategory::Emom => (BLACK, CYAN),
        WorkoutCategory::Strength => (TEXT, ROSE),
    }
}

pub fn category_badge(category: WorkoutCategory) -> Style {
    let (fg, bg) = category_colors(category);
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

/// Leaderboard rank badge: podium colours for 1-3, neutral otherwise
pub fn rank_colors(rank: u32) -> (Color, Color) {
    match rank {
        1 => (BLACK, GOLD),
        2 => (BLACK, SILVER),
        3 => (TEXT, BRONZE),
        _ => (MUTED, SURFACE_RAISED),
    }
}

pub fn accent_bold() -> Style {
    Style::default().fg(LIME).add_modifier(Modifier::BOLD)
}

pub fn key_hint() -> Style {
    Style::default().fg(BLACK).bg(LIME).add_modifier(Modifier::BOLD)
}

/// Pad `text` on the left so it occupies `width` terminal columns
pub fn pad_left(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(width - used), text)
    }
}

/// Cut `text` to at most `width` columns, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(LIME, 1.0), LIME);
        assert_eq!(fade(LIME, 0.0), BG);
        assert_eq!(fade(LIME, 5.0), LIME);
    }

    #[test]
    fn test_fade_leaves_named_colors() {
        assert_eq!(fade(Color::Red, 0.0), Color::Red);
    }

    #[test]
    fn test_rank_colors() {
        assert_eq!(rank_colors(1), (BLACK, GOLD));
        assert_eq!(rank_colors(3), (TEXT, BRONZE));
        assert_eq!(rank_colors(4), rank_colors(17));
    }

    #[test]
    fn test_category_badges_are_distinct() {
        let colors: Vec<_> = WorkoutCategory::all().iter().map(|c| category_colors(*c)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_pad_left_counts_wide_glyphs() {
        assert_eq!(pad_left("★5", 4), "  ★5");
        assert_eq!(pad_left("longer", 2), "longer");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Deadlift Day", 20), "Deadlift Day");
        assert_eq!(truncate("Deadlift Day", 6), "Deadl…");
        assert_eq!(truncate("abc", 0), "");
    }
}
