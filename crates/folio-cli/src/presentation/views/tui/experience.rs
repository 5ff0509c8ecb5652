//! Experience Timeline View
//!
//! Static rows in fixed catalog order. No interaction, no highlight.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::wrap;
use crate::presentation::view_models::ExperienceRowViewModel;

pub struct ExperienceView<'a> {
    rows: &'a [ExperienceRowViewModel],
}

impl<'a> ExperienceView<'a> {
    pub fn new(rows: &'a [ExperienceRowViewModel]) -> Self {
        Self { rows }
    }

    fn row_height(row: &ExperienceRowViewModel, width: u16) -> u16 {
        let desc_lines = wrap(&row.description, width.saturating_sub(2)).len() as u16;
        // role line + org line + description + connector row
        let connector = if row.is_last { 0 } else { 1 };
        2 + desc_lines + connector
    }

    pub fn height(rows: &[ExperienceRowViewModel], width: u16) -> u16 {
        // heading + blank + rows
        2 + rows
            .iter()
            .map(|row| Self::row_height(row, width))
            .sum::<u16>()
    }
}

impl<'a> Widget for ExperienceView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            "Leadership & Organization",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        for row in self.rows {
            lines.push(Line::from(vec![
                Span::raw("\u{25cf} "),
                Span::styled(
                    row.role.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", row.period),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::raw(timeline_margin(row)),
                Span::raw(row.org.clone()),
            ]));
            for text in wrap(&row.description, area.width.saturating_sub(2)) {
                lines.push(Line::from(vec![
                    Span::raw(timeline_margin(row)),
                    Span::styled(text, Style::default().add_modifier(Modifier::DIM)),
                ]));
            }
            if !row.is_last {
                lines.push(Line::from(Span::styled(
                    "\u{2502}",
                    Style::default().add_modifier(Modifier::DIM),
                )));
            }
        }

        Paragraph::new(lines).render(area, buf);
    }
}

fn timeline_margin(row: &ExperienceRowViewModel) -> &'static str {
    if row.is_last {
        "  "
    } else {
        "\u{2502} "
    }
}
