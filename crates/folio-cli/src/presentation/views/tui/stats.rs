//! Quick Stats View
//!
//! One bordered row of value/label pairs in equal-width columns.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatViewModel;

pub struct StatsView<'a> {
    stats: &'a [StatViewModel],
}

impl<'a> StatsView<'a> {
    pub fn new(stats: &'a [StatViewModel]) -> Self {
        Self { stats }
    }

    pub fn height() -> u16 {
        // top border + value row + label row + bottom border
        4
    }
}

impl<'a> Widget for StatsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.stats.is_empty() {
            return;
        }

        let block = Block::default().borders(Borders::TOP | Borders::BOTTOM);
        let inner = block.inner(area);
        block.render(area, buf);

        let constraints: Vec<Constraint> = self
            .stats
            .iter()
            .map(|_| Constraint::Ratio(1, self.stats.len() as u32))
            .collect();
        let columns = Layout::horizontal(constraints).split(inner);

        for (stat, column) in self.stats.iter().zip(columns.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    stat.value.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    stat.label.to_uppercase(),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ];
            Paragraph::new(lines).render(*column, buf);
        }
    }
}
