//! Hero Section View

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::wrap;
use crate::presentation::view_models::HeroViewModel;

pub struct HeroView<'a> {
    model: &'a HeroViewModel,
}

impl<'a> HeroView<'a> {
    pub fn new(model: &'a HeroViewModel) -> Self {
        Self { model }
    }

    pub fn height(model: &HeroViewModel, width: u16) -> u16 {
        // headline badge + blank + tagline lines + blank + intro lines
        let intro_lines = wrap(&model.intro, width).len() as u16;
        1 + 1 + model.tagline.len() as u16 + 1 + intro_lines
    }
}

impl<'a> Widget for HeroView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            format!("\u{25cf} {}", self.model.headline.to_uppercase()),
            Style::default().add_modifier(Modifier::DIM | Modifier::BOLD),
        )));
        lines.push(Line::default());

        for (idx, part) in self.model.tagline.iter().enumerate() {
            let style = if idx == 0 {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD | Modifier::DIM)
            };
            lines.push(Line::from(Span::styled(part.clone(), style)));
        }
        lines.push(Line::default());

        for text in wrap(&self.model.intro, area.width) {
            lines.push(Line::from(Span::styled(
                text,
                Style::default().add_modifier(Modifier::DIM),
            )));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
