//! Movie card lists
//!
//! Pure card construction from summary records plus the favorite-id set,
//! and the ratatui list rendered from those cards. Missing optional
//! fields render fixed placeholder tokens, never blanks.

use std::collections::HashSet;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::MovieSummary;
use crate::ui::Palette;

/// Placeholder shown when the upstream has no poster for a movie
pub const NO_POSTER_PLACEHOLDER: &str = "no poster";
/// Placeholder shown when the upstream has no rating for a movie
pub const NO_RATING_PLACEHOLDER: &str = "N/A";

/// Visual description of one movie card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub rating: Option<f32>,
    pub rating_text: String,
    pub poster: String,
    pub is_favorite: bool,
}

/// Build card descriptions for a list of movies
///
/// Pure transformation: favorite state comes from the passed id set, and
/// sentinel-missing poster/rating values are substituted with placeholders.
pub fn build_cards(movies: &[MovieSummary], favorite_ids: &HashSet<String>) -> Vec<Card> {
    movies
        .iter()
        .map(|movie| Card {
            imdb_id: movie.imdb_id.clone(),
            title: movie.title.clone(),
            year: movie.year.clone(),
            rating: movie.rating,
            rating_text: movie
                .rating
                .map(|r| format!("{:.1}", r))
                .unwrap_or_else(|| NO_RATING_PLACEHOLDER.to_string()),
            poster: movie
                .poster
                .clone()
                .unwrap_or_else(|| NO_POSTER_PLACEHOLDER.to_string()),
            is_favorite: favorite_ids.contains(&movie.imdb_id),
        })
        .collect()
}

/// Render a card list panel with the given title
pub fn render_card_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    cards: &[Card],
    selected: usize,
    empty_text: &str,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border())
        .title(Span::styled(format!(" {} ({}) ", title, cards.len()), palette.title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if cards.is_empty() {
        let empty = Paragraph::new(empty_text)
            .style(palette.dimmed())
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| card_item(card, i == selected, palette))
        .collect();

    let list = List::new(items).style(palette.text());
    frame.render_widget(list, inner);
}

/// Build the two-line list item for one card
fn card_item<'a>(card: &'a Card, is_selected: bool, palette: &Palette) -> ListItem<'a> {
    let marker = if is_selected { "▸ " } else { "  " };
    let heart = if card.is_favorite { "♥ " } else { "♡ " };

    let main = Line::from(vec![
        Span::styled(
            marker,
            if is_selected { palette.accent() } else { palette.dimmed() },
        ),
        Span::styled(
            heart,
            if card.is_favorite { palette.favorite() } else { palette.dimmed() },
        ),
        Span::styled(
            card.title.as_str(),
            if is_selected { palette.highlighted() } else { palette.text() },
        ),
        Span::styled(format!(" ({})", card.year), palette.dimmed()),
        Span::raw(" "),
        Span::styled(format!("★ {}", card.rating_text), palette.rating(card.rating)),
    ]);

    let poster = Line::from(vec![
        Span::raw("    "),
        Span::styled(card.poster.as_str(), palette.dimmed()),
    ]);

    ListItem::new(vec![main, poster])
}
