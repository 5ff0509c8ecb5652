//! Project Card and Gallery Grid Views
//!
//! A card's appearance differs along fixed presentational dimensions
//! (border weight, title emphasis) according to its highlight flag; the
//! card itself holds no state and makes no decisions beyond that
//! mapping. `grid_layout` is shared with the hover hit-testing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::{icon_glyph, wrap};
use crate::presentation::view_models::ProjectCardViewModel;

const COLUMN_GAP: u16 = 2;
const TWO_COLUMN_MIN_WIDTH: u16 = 70;

pub struct ProjectCardView<'a> {
    model: &'a ProjectCardViewModel,
}

impl<'a> ProjectCardView<'a> {
    pub fn new(model: &'a ProjectCardViewModel) -> Self {
        Self { model }
    }

    pub fn height(model: &ProjectCardViewModel, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        let desc_lines = wrap(&model.description, inner).len() as u16;
        let tag_lines = wrap(&tags_text(model), inner).len() as u16;
        // borders + title + blank + description + blank + tags + focus + link
        2 + 1 + 1 + desc_lines + 1 + tag_lines + 1 + 1
    }
}

fn tags_text(model: &ProjectCardViewModel) -> String {
    model
        .tags
        .iter()
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(" ")
}

impl<'a> Widget for ProjectCardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_type = if self.model.is_active {
            BorderType::Thick
        } else {
            BorderType::Plain
        };
        let border_style = if self.model.is_active {
            Style::default()
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let title_style = if self.model.is_active {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let mut lines = Vec::new();
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", icon_glyph(&self.model.icon))),
            Span::styled(self.model.title.clone(), title_style),
            Span::styled(" \u{2197}", Style::default().add_modifier(Modifier::DIM)),
        ]));
        lines.push(Line::default());

        for text in wrap(&self.model.description, inner.width) {
            lines.push(Line::from(Span::styled(
                text,
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
        lines.push(Line::default());

        for text in wrap(&tags_text(self.model), inner.width) {
            lines.push(Line::from(Span::raw(text)));
        }

        lines.push(Line::from(vec![
            Span::styled("FOCUS", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" \u{b7} "),
            Span::raw(self.model.focus.clone()),
        ]));
        lines.push(Line::from(Span::styled(
            self.model.link.clone(),
            Style::default().add_modifier(Modifier::DIM | Modifier::UNDERLINED),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Positions of every card within `area`, by card index. Two columns on
/// wide terminals, one otherwise; row height follows the taller card.
/// Returns the rects and the total height consumed.
pub fn grid_layout(cards: &[ProjectCardViewModel], area: Rect) -> (Vec<(Rect, usize)>, u16) {
    if cards.is_empty() {
        return (Vec::new(), 0);
    }

    let columns = if area.width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    };
    let card_width = (area.width.saturating_sub(COLUMN_GAP * (columns - 1))) / columns;

    let mut rects = Vec::with_capacity(cards.len());
    let mut y = area.y;

    for row in cards.chunks(columns as usize) {
        let row_start = rects.len();
        let row_height = row
            .iter()
            .map(|card| ProjectCardView::height(card, card_width))
            .max()
            .unwrap_or(0);

        for (col, _) in row.iter().enumerate() {
            rects.push((
                Rect {
                    x: area.x + (card_width + COLUMN_GAP) * col as u16,
                    y,
                    width: card_width,
                    height: row_height,
                },
                row_start + col,
            ));
        }
        y += row_height + 1;
    }

    let total = (y - area.y).saturating_sub(1);
    (rects, total)
}

pub struct ProjectGridView<'a> {
    cards: &'a [ProjectCardViewModel],
}

impl<'a> ProjectGridView<'a> {
    pub fn new(cards: &'a [ProjectCardViewModel]) -> Self {
        Self { cards }
    }

    pub fn height(cards: &[ProjectCardViewModel], width: u16) -> u16 {
        let probe = Rect {
            x: 0,
            y: 0,
            width: width.max(1),
            height: u16::MAX,
        };
        grid_layout(cards, probe).1
    }
}

impl<'a> Widget for ProjectGridView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (rects, _) = grid_layout(self.cards, area);
        for (rect, idx) in rects {
            ProjectCardView::new(&self.cards[idx]).render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, description: &str) -> ProjectCardViewModel {
        ProjectCardViewModel {
            id,
            title: format!("Project {}", id),
            category: "Web Dev".to_string(),
            description: description.to_string(),
            tags: vec!["A".to_string(), "B".to_string()],
            focus: "Focus".to_string(),
            icon: "code".to_string(),
            link: "https://example.com".to_string(),
            is_active: false,
        }
    }

    #[test]
    fn test_two_columns_on_wide_area() {
        let cards = vec![card(1, "short"), card(2, "short"), card(3, "short")];
        let (rects, _) = grid_layout(&cards, Rect::new(0, 0, 80, 200));

        assert_eq!(rects[0].0.y, rects[1].0.y);
        assert!(rects[1].0.x > rects[0].0.x);
        assert!(rects[2].0.y > rects[0].0.y);
    }

    #[test]
    fn test_single_column_on_narrow_area() {
        let cards = vec![card(1, "short"), card(2, "short")];
        let (rects, _) = grid_layout(&cards, Rect::new(0, 0, 50, 200));

        assert_eq!(rects[0].0.x, rects[1].0.x);
        assert!(rects[1].0.y > rects[0].0.y);
    }

    #[test]
    fn test_row_height_follows_taller_card() {
        let long = "a long description that will wrap onto several lines once the card \
                    width gets divided into two columns of a standard terminal";
        let cards = vec![card(1, "short"), card(2, long)];
        let (rects, total) = grid_layout(&cards, Rect::new(0, 0, 80, 200));

        assert_eq!(rects[0].0.height, rects[1].0.height);
        assert_eq!(total, rects[0].0.height);
    }

    #[test]
    fn test_empty_gallery_consumes_no_height() {
        let (rects, total) = grid_layout(&[], Rect::new(0, 0, 80, 200));
        assert!(rects.is_empty());
        assert_eq!(total, 0);
    }
}
