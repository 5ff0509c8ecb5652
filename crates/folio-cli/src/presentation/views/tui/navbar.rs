//! Navigation Bar View
//!
//! Pinned above the scrolling content. The compact form (after the page
//! has been scrolled past the threshold) collapses the padding rows.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::NavBarViewModel;

pub struct NavBarView<'a> {
    model: &'a NavBarViewModel,
}

impl<'a> NavBarView<'a> {
    pub fn new(model: &'a NavBarViewModel) -> Self {
        Self { model }
    }

    pub fn height(compact: bool) -> u16 {
        if compact {
            2
        } else {
            4
        }
    }
}

impl<'a> Widget for NavBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::BOTTOM);
        let inner = block.inner(area);
        block.render(area, buf);

        let text_row = if self.model.compact {
            inner
        } else {
            // Tall form keeps a padding row above and below the text
            Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            }
        };

        let links = self.model.links.join("  \u{b7}  ");
        let left = format!("\u{25c6} {}", self.model.name);
        let pad = (text_row.width as usize)
            .saturating_sub(left.chars().count() + links.chars().count() + 2);

        let line = Line::from(vec![
            Span::styled(left, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(pad.max(1))),
            Span::styled(links, Style::default().add_modifier(Modifier::DIM)),
        ]);

        Paragraph::new(line).render(text_row, buf);
    }
}
