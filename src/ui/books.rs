use ratatui::{
    style::{Modifier, Style},
    text::{Line as RatatuiLine, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, COVER_WIDTH, Focus};
use crate::catalog::{Item, RatingStyle};

use super::shared::{format_price, truncate_text};
use super::theme;

/// Two lines per book, in catalog order. Hidden books keep their rows.
pub fn build_book_list(app: &App, width: usize) -> Vec<RatatuiLine<'static>> {
    let mut lines = Vec::with_capacity(app.collection.len() * 2);
    for (index, item) in app.collection.items().iter().enumerate() {
        let is_selected = index == app.selected;
        let is_favorite = app.collection.is_favorite(item.id());
        let [title, rating] = build_book_row(item, is_selected, is_favorite, app.focus, width);
        lines.push(title);
        lines.push(rating);
    }
    lines
}

fn build_book_row(
    item: &Item,
    is_selected: bool,
    is_favorite: bool,
    focus: Focus,
    width: usize,
) -> [RatatuiLine<'static>; 2] {
    let entry = item.entry();
    let hidden = item.is_hidden();
    let (cover_top, cover_bottom) = cover_spans(hidden, is_favorite);

    let text_style = if hidden {
        Style::default()
            .fg(theme::TEXT_MUTED)
            .add_modifier(Modifier::DIM)
    } else if is_selected {
        Style::default()
            .fg(theme::BOOKS_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let cursor = if is_selected {
        let color = if focus == Focus::Books {
            theme::BOOKS_PRIMARY
        } else {
            theme::TEXT_MUTED
        };
        Span::styled(format!("{} ", theme::GLYPH_CURSOR), Style::default().fg(color))
    } else {
        Span::raw("  ")
    };

    let price = format_price(entry.price);
    let lead = COVER_WIDTH + 1 + 2;
    let title_width = width.saturating_sub(lead + price.width() + 1);
    let title = truncate_text(&entry.name, title_width);
    let padding = width.saturating_sub(lead + title.width() + price.width());
    let price_style = if hidden {
        text_style
    } else {
        Style::default().fg(theme::PRICE)
    };

    let mut top = cover_top;
    top.push(Span::raw(" "));
    top.push(cursor);
    top.push(Span::styled(title, text_style));
    top.push(Span::raw(" ".repeat(padding)));
    top.push(Span::styled(price, price_style));

    let mut bottom = cover_bottom;
    bottom.push(Span::raw("   "));
    let track = width
        .saturating_sub(lead + 5)
        .min(theme::RATING_TRACK_MAX);
    bottom.extend(rating_bar(item.rating_style(), track, hidden));
    bottom.push(Span::styled(
        format!(" {:.1}", entry.rating),
        Style::default().fg(theme::TEXT_MUTED),
    ));

    [RatatuiLine::from(top), RatatuiLine::from(bottom)]
}

/// The cover doubles as the favorite marker and the filter marker.
fn cover_spans(hidden: bool, is_favorite: bool) -> (Vec<Span<'static>>, Vec<Span<'static>>) {
    let favorite = Span::styled(theme::GLYPH_FAVORITE, Style::default().fg(theme::FAVORITE));

    if hidden {
        let dim = Style::default()
            .fg(theme::TEXT_MUTED)
            .add_modifier(Modifier::DIM);
        let middle = if is_favorite {
            favorite
        } else {
            Span::styled(theme::GLYPH_COVER_HIDDEN, dim)
        };
        let top = vec![
            Span::styled(theme::GLYPH_COVER_HIDDEN, dim),
            middle,
            Span::styled(theme::GLYPH_COVER_HIDDEN, dim),
        ];
        let bottom = vec![Span::styled(theme::GLYPH_COVER_HIDDEN.repeat(COVER_WIDTH), dim)];
        return (top, bottom);
    }

    let frame = Style::default().fg(theme::BORDER_MUTED);
    let (left, right) = theme::GLYPH_COVER_TOP;
    let middle = if is_favorite {
        favorite
    } else {
        Span::styled(theme::GLYPH_COVER_PLAIN, frame)
    };
    let top = vec![Span::styled(left, frame), middle, Span::styled(right, frame)];
    let bottom = vec![Span::styled(theme::GLYPH_COVER_BOTTOM, frame)];
    (top, bottom)
}

fn rating_bar(style: RatingStyle, track: usize, hidden: bool) -> Vec<Span<'static>> {
    let filled = style.filled_cells(track);
    let empty_style = Style::default().fg(theme::TEXT_MUTED);

    let mut spans = Vec::with_capacity(2);
    if filled > 0 {
        let fill_style = match style.background() {
            Some(_) if hidden => Style::default().fg(theme::TEXT_MUTED),
            Some(gradient) => {
                let (top, bottom) = theme::gradient_colors(gradient);
                Style::default().fg(top).bg(bottom)
            }
            None => empty_style,
        };
        spans.push(Span::styled(theme::GLYPH_RATING_FILL.repeat(filled), fill_style));
    }
    spans.push(Span::styled(
        theme::GLYPH_RATING_EMPTY.repeat(track - filled),
        empty_style,
    ));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, Details};
    use ratatui::style::Color;

    fn item(rating: f64) -> Item {
        Item::new(CatalogEntry {
            id: 1,
            name: "Dune".to_string(),
            price: 12.0,
            rating,
            image: None,
            details: Details::from([("adults", false)]),
        })
    }

    fn text(line: &RatatuiLine<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn row_has_cover_title_and_price() {
        let [top, bottom] = build_book_row(&item(8.0), false, false, Focus::Books, 40);
        let top = text(&top);
        assert!(top.starts_with("┌─┐"));
        assert!(top.contains("Dune"));
        assert!(top.ends_with("$12.00"));
        assert_eq!(top.width(), 40);
        assert!(text(&bottom).starts_with("└─┘"));
        assert!(text(&bottom).ends_with(" 8.0"));
    }

    #[test]
    fn favorite_shows_heart_on_cover() {
        let [top, _] = build_book_row(&item(8.0), false, true, Focus::Books, 40);
        assert!(text(&top).starts_with("┌♥┐"));
    }

    #[test]
    fn hidden_book_has_blank_cover() {
        let mut item = item(8.0);
        item.apply_filters(&["adults"]);
        let [top, bottom] = build_book_row(&item, false, false, Focus::Books, 40);
        assert!(text(&top).starts_with("░░░"));
        assert!(text(&bottom).starts_with("░░░"));
    }

    #[test]
    fn rating_bar_uses_band_gradient() {
        let spans = rating_bar(RatingStyle::from_rating(9.5), 20, false);
        assert_eq!(spans[0].content.as_ref(), "▀".repeat(19));
        assert_eq!(spans[0].style.fg, Some(Color::Rgb(0xff, 0x00, 0x84)));
        assert_eq!(spans[0].style.bg, Some(Color::Rgb(0xff, 0x00, 0x84)));
        assert_eq!(spans[1].content.as_ref(), "·");
    }

    #[test]
    fn low_band_keeps_two_stops() {
        let spans = rating_bar(RatingStyle::from_rating(3.0), 10, false);
        assert_eq!(spans[0].style.fg, Some(Color::Rgb(0xfe, 0xfc, 0xea)));
        assert_eq!(spans[0].style.bg, Some(Color::Rgb(0xf1, 0xda, 0x36)));
    }

    #[test]
    fn zero_rating_is_an_empty_track() {
        let spans = rating_bar(RatingStyle::from_rating(0.0), 10, false);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content.as_ref(), "·".repeat(10));
    }
}
