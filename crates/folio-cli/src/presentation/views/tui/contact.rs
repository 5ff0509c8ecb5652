//! Contact Footer View

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{icon_glyph, wrap};
use crate::presentation::view_models::ContactViewModel;

pub struct ContactView<'a> {
    model: &'a ContactViewModel,
}

impl<'a> ContactView<'a> {
    pub fn new(model: &'a ContactViewModel) -> Self {
        Self { model }
    }

    pub fn height(model: &ContactViewModel, width: u16) -> u16 {
        let outro_lines = wrap(&model.outro, width).len() as u16;
        let quote_lines = wrap(&model.quote, width.saturating_sub(2)).len() as u16;
        let resume_lines = if model.resume.is_some() { 1 } else { 0 };
        // heading + blank + outro + blank + links + resume + blank + quote + blank + footer
        1 + 1 + outro_lines + 1 + model.links.len() as u16 + resume_lines + 1 + quote_lines + 1 + 1
    }
}

impl<'a> Widget for ContactView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            "Ready to Contribute",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        for text in wrap(&self.model.outro, area.width) {
            lines.push(Line::from(Span::styled(
                text,
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
        lines.push(Line::default());

        for link in &self.model.links {
            lines.push(Line::from(vec![
                Span::raw(format!("{} {}", icon_glyph(&link.icon), link.label)),
                Span::styled(
                    format!("  {}", link.href),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]));
        }
        if let Some(resume) = &self.model.resume {
            lines.push(Line::from(vec![
                Span::raw(format!("\u{2913} Resume ({})", resume.suggested_name)),
                Span::styled(
                    format!("  {}", resume.href),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]));
        }
        lines.push(Line::default());

        for (idx, text) in wrap(&self.model.quote, area.width.saturating_sub(2))
            .into_iter()
            .enumerate()
        {
            let prefix = if idx == 0 { "\u{201c}" } else { "  " };
            lines.push(Line::from(Span::styled(
                format!("{}{}", prefix, text),
                Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
            )));
        }
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            self.model.footer.clone(),
            Style::default().add_modifier(Modifier::DIM),
        )));

        Paragraph::new(lines).render(area, buf);
    }
}
