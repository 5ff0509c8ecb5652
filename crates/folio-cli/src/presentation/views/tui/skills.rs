//! Skill Badges View
//!
//! Chips laid out left to right, wrapping to the next row when a chip
//! would overflow. `badge_layout` is shared with the hover hit-testing
//! so the rects the pointer sees are exactly the rects that got drawn.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::icon_glyph;
use crate::presentation::view_models::SkillBadgeViewModel;

const CHIP_GAP: u16 = 2;

fn chip_text(badge: &SkillBadgeViewModel) -> String {
    format!("[ {} {} ]", icon_glyph(&badge.icon), badge.name)
}

fn chip_width(badge: &SkillBadgeViewModel) -> u16 {
    chip_text(badge).chars().count() as u16
}

/// Positions of every badge chip within `area`, in ordinal order.
pub fn badge_layout(badges: &[SkillBadgeViewModel], area: Rect) -> Vec<(Rect, usize)> {
    let mut rects = Vec::with_capacity(badges.len());
    let mut x = area.x;
    let mut y = area.y;

    for badge in badges {
        let width = chip_width(badge).min(area.width);
        if x + width > area.x + area.width && x > area.x {
            x = area.x;
            y += 1;
        }
        rects.push((
            Rect {
                x,
                y,
                width,
                height: 1,
            },
            badge.ordinal,
        ));
        x += width + CHIP_GAP;
    }
    rects
}

pub struct SkillBadgesView<'a> {
    badges: &'a [SkillBadgeViewModel],
}

impl<'a> SkillBadgesView<'a> {
    pub fn new(badges: &'a [SkillBadgeViewModel]) -> Self {
        Self { badges }
    }

    pub fn height(badges: &[SkillBadgeViewModel], width: u16) -> u16 {
        // section title + blank + chip rows
        let probe = Rect {
            x: 0,
            y: 0,
            width: width.max(1),
            height: u16::MAX,
        };
        let rows = badge_layout(badges, probe)
            .last()
            .map(|(rect, _)| rect.y + 1)
            .unwrap_or(0);
        2 + rows
    }
}

impl<'a> Widget for SkillBadgesView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(Span::styled(
            "Technical Proficiency",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(title).render(
            Rect {
                height: 1,
                ..area
            },
            buf,
        );

        let chip_area = Rect {
            x: area.x,
            y: area.y + 2,
            width: area.width,
            height: area.height.saturating_sub(2),
        };

        for (rect, ordinal) in badge_layout(self.badges, chip_area) {
            let badge = &self.badges[ordinal];
            let style = if badge.is_active {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            Paragraph::new(Line::from(Span::styled(chip_text(badge), style))).render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(ordinal: usize, name: &str) -> SkillBadgeViewModel {
        SkillBadgeViewModel {
            ordinal,
            name: name.to_string(),
            icon: "code".to_string(),
            is_active: false,
        }
    }

    #[test]
    fn test_chips_wrap_to_next_row() {
        let badges = vec![badge(0, "Python"), badge(1, "SQL"), badge(2, "Excel")];
        let area = Rect::new(0, 0, 16, 10);

        let rects = badge_layout(&badges, area);
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].0.y, 0);
        // Second chip does not fit next to the first on a 16-cell row
        assert!(rects[1].0.y > 0 || rects[1].0.x > rects[0].0.x);
        let max_y = rects.iter().map(|(r, _)| r.y).max().unwrap();
        assert!(max_y >= 1);
    }

    #[test]
    fn test_layout_keeps_ordinal_association() {
        let badges = vec![badge(0, "A"), badge(1, "B")];
        let area = Rect::new(0, 0, 80, 10);

        let rects = badge_layout(&badges, area);
        assert_eq!(rects[0].1, 0);
        assert_eq!(rects[1].1, 1);
        assert_eq!(rects[0].0.y, rects[1].0.y);
    }
}
