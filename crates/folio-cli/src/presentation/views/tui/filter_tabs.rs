//! Gallery Filter Tabs View
//!
//! The navigation control for the project gallery. `tab_layout` is
//! shared with the click hit-testing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::FilterTabViewModel;

const TAB_GAP: u16 = 1;

fn tab_text(tab: &FilterTabViewModel) -> String {
    format!(" {} ", tab.label)
}

/// Positions of every tab within `area`, in tab order.
pub fn tab_layout(tabs: &[FilterTabViewModel], area: Rect) -> Vec<(Rect, &str)> {
    let mut rects = Vec::with_capacity(tabs.len());
    let mut x = area.x;

    for tab in tabs {
        let width = (tab_text(tab).chars().count() as u16).min(area.width);
        rects.push((
            Rect {
                x,
                y: area.y,
                width,
                height: 1,
            },
            tab.label.as_str(),
        ));
        x += width + TAB_GAP;
    }
    rects
}

pub struct FilterTabsView<'a> {
    tabs: &'a [FilterTabViewModel],
}

impl<'a> FilterTabsView<'a> {
    pub fn new(tabs: &'a [FilterTabViewModel]) -> Self {
        Self { tabs }
    }

    pub fn height() -> u16 {
        1
    }
}

impl<'a> Widget for FilterTabsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for ((rect, _), tab) in tab_layout(self.tabs, area).into_iter().zip(self.tabs) {
            let style = if tab.is_active {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            Paragraph::new(Line::from(Span::styled(tab_text(tab), style))).render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_lay_out_in_order() {
        let tabs = vec![
            FilterTabViewModel {
                label: "All".to_string(),
                is_active: true,
            },
            FilterTabViewModel {
                label: "Web Dev".to_string(),
                is_active: false,
            },
        ];
        let rects = tab_layout(&tabs, Rect::new(0, 0, 40, 1));

        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].1, "All");
        assert_eq!(rects[1].1, "Web Dev");
        assert!(rects[1].0.x > rects[0].0.x + rects[0].0.width - 1);
    }
}
