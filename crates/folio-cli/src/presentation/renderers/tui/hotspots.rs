//! Pointer hit-testing for the scrollable page.
//!
//! Every interactive rect drawn into the document buffer is recorded
//! here in document coordinates; the app translates pointer positions
//! by the current scroll offset before lookup.

use folio_types::ProjectId;
use ratatui::layout::Rect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hotspot {
    ProjectCard(ProjectId),
    SkillBadge(usize),
    FilterTab(String),
}

#[derive(Debug, Default)]
pub struct Hotspots {
    spots: Vec<(Rect, Hotspot)>,
}

impl Hotspots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rect, spot: Hotspot) {
        self.spots.push((rect, spot));
    }

    /// The hotspot under a document-coordinate position, if any. Later
    /// entries win, matching paint order.
    pub fn at(&self, x: u16, y: u16) -> Option<&Hotspot> {
        self.spots
            .iter()
            .rev()
            .find(|(rect, _)| {
                x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
            })
            .map(|(_, spot)| spot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_inside_and_outside() {
        let mut hotspots = Hotspots::new();
        hotspots.push(
            Rect::new(2, 3, 10, 2),
            Hotspot::ProjectCard(ProjectId::new(7)),
        );

        assert_eq!(
            hotspots.at(2, 3),
            Some(&Hotspot::ProjectCard(ProjectId::new(7)))
        );
        assert_eq!(
            hotspots.at(11, 4),
            Some(&Hotspot::ProjectCard(ProjectId::new(7)))
        );
        assert_eq!(hotspots.at(12, 3), None);
        assert_eq!(hotspots.at(2, 5), None);
    }

    #[test]
    fn test_later_entries_win() {
        let mut hotspots = Hotspots::new();
        hotspots.push(Rect::new(0, 0, 10, 10), Hotspot::SkillBadge(0));
        hotspots.push(Rect::new(4, 4, 2, 2), Hotspot::SkillBadge(1));

        assert_eq!(hotspots.at(5, 5), Some(&Hotspot::SkillBadge(1)));
        assert_eq!(hotspots.at(1, 1), Some(&Hotspot::SkillBadge(0)));
    }
}
