//! Movie detail overlay
//!
//! Full record for a single movie, rendered as a centered popup over the
//! current section, with the favorite action reflecting membership.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::MovieDetail;
use crate::ui::cards::{NO_POSTER_PLACEHOLDER, NO_RATING_PLACEHOLDER};
use crate::ui::Palette;

/// Favorite action label for the detail view
pub fn favorite_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "♥ Remove from Favorites"
    } else {
        "♡ Add to Favorites"
    }
}

/// Field value with the fixed placeholder for missing data
fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NO_RATING_PLACEHOLDER)
}

/// Render the detail popup
pub fn render_detail(
    frame: &mut Frame,
    area: Rect,
    detail: &MovieDetail,
    is_favorite: bool,
    palette: &Palette,
) {
    let popup_width = 72.min(area.width.saturating_sub(4));
    let popup_height = 20.min(area.height.saturating_sub(2));

    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let rating_text = detail
        .rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| NO_RATING_PLACEHOLDER.to_string());

    let labelled = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), palette.dimmed()),
            Span::styled(value, palette.text()),
        ])
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("★ ", palette.rating(detail.rating)),
            Span::styled(rating_text, palette.rating(detail.rating)),
            Span::raw("  "),
            Span::styled(format!("({})", detail.year), palette.dimmed()),
        ]),
        Line::from(""),
        labelled("Genre", field(&detail.genre).to_string()),
        labelled("Released", field(&detail.released).to_string()),
        labelled("Runtime", field(&detail.runtime).to_string()),
        labelled("Director", field(&detail.director).to_string()),
        labelled("Language", field(&detail.language).to_string()),
        labelled("Cast", field(&detail.actors).to_string()),
        Line::from(""),
        Line::from(Span::styled(field(&detail.plot).to_string(), palette.text())),
        Line::from(""),
        Line::from(Span::styled(
            detail
                .poster
                .clone()
                .unwrap_or_else(|| NO_POSTER_PLACEHOLDER.to_string()),
            palette.dimmed(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" v ", palette.keybind()),
            Span::styled(favorite_label(is_favorite), palette.favorite()),
            Span::raw("   "),
            Span::styled(" ESC ", palette.keybind()),
            Span::styled("Close", palette.dimmed()),
        ]),
    ];

    if is_favorite {
        lines.insert(
            0,
            Line::from(Span::styled("♥ in your favorites", palette.favorite())),
        );
    }

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(palette.border_focused())
                .title(Span::styled(format!(" {} ", detail.title), palette.title()))
                .style(ratatui::style::Style::default().bg(palette.surface)),
        );

    frame.render_widget(popup, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_label_phrasing() {
        assert_eq!(favorite_label(true), "♥ Remove from Favorites");
        assert_eq!(favorite_label(false), "♡ Add to Favorites");
    }

    #[test]
    fn test_field_placeholder_for_missing() {
        assert_eq!(field(&None), NO_RATING_PLACEHOLDER);
        assert_eq!(field(&Some("Tim Burton".to_string())), "Tim Burton");
    }
}
