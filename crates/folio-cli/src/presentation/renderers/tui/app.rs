//! The interactive page.
//!
//! One controller owns all view state. Input is translated into
//! [`ViewEvent`]s and applied synchronously; after every event the
//! screen ViewModel is rebuilt and redrawn. The page is composed into
//! an off-screen document buffer once per frame, and the viewport rows
//! under the navbar are blitted from it at the current scroll offset.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

use super::hotspots::{Hotspot, Hotspots};
use crate::presentation::presenters::build_screen;
use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::tui::{
    contact::ContactView,
    experience::ExperienceView,
    filter_tabs::{tab_layout, FilterTabsView},
    hero::HeroView,
    navbar::NavBarView,
    project_card::{grid_layout, ProjectGridView},
    skills::{badge_layout, SkillBadgesView},
    stats::StatsView,
};
use folio_engine::{Controller, Filter, ViewEvent};
use folio_types::Catalog;

/// Horizontal page margin inside the content viewport
const PAGE_MARGIN: u16 = 1;
/// Rows scrolled per mouse wheel notch
const WHEEL_STEP: u16 = 3;

pub struct TuiApp {
    controller: Controller,
    scroll: u16,
    max_scroll: u16,
    viewport_height: u16,
    content_origin: (u16, u16),
    hotspots: Hotspots,
    should_quit: bool,
}

impl TuiApp {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            controller: Controller::new(catalog),
            scroll: 0,
            max_scroll: 0,
            viewport_height: 0,
            content_origin: (0, 0),
            hotspots: Hotspots::new(),
            should_quit: false,
        }
    }

    pub fn finished(&self) -> bool {
        self.should_quit
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let screen = build_screen(&self.controller);
        let area = f.area();

        let nav_height = NavBarView::height(screen.navbar.compact).min(area.height);
        let nav_area = Rect {
            height: nav_height,
            ..area
        };
        let content = Rect {
            y: area.y + nav_height,
            height: area.height.saturating_sub(nav_height),
            ..area
        };

        NavBarView::new(&screen.navbar).render(nav_area, f.buffer_mut());

        let (document, hotspots) = build_document(&screen, content.width);
        let doc_height = document.area.height;

        self.max_scroll = doc_height.saturating_sub(content.height);
        self.scroll = self.scroll.min(self.max_scroll);
        self.viewport_height = content.height;
        self.content_origin = (content.x, content.y);
        self.hotspots = hotspots;

        let buf = f.buffer_mut();
        for row in 0..content.height {
            let src_y = row + self.scroll;
            if src_y >= doc_height {
                break;
            }
            for col in 0..content.width {
                if let Some(src) = document.cell((col, src_y)) {
                    if let Some(dst) = buf.cell_mut((content.x + col, content.y + row)) {
                        *dst = src.clone();
                    }
                }
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }

            KeyCode::Tab | KeyCode::Right => self.cycle_filter(1),
            KeyCode::BackTab | KeyCode::Left => self.cycle_filter(-1),

            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(self.viewport_height as i32),
            KeyCode::PageUp => self.scroll_by(-(self.viewport_height as i32)),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(self.max_scroll),

            KeyCode::Char(']') => self.hover_project(1),
            KeyCode::Char('[') => self.hover_project(-1),
            KeyCode::Char('}') => self.hover_skill(1),
            KeyCode::Char('{') => self.hover_skill(-1),

            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP as i32),
            MouseEventKind::ScrollUp => self.scroll_by(-(WHEEL_STEP as i32)),
            MouseEventKind::Moved => {
                if let Some(spot) = self.hotspot_under(mouse.column, mouse.row) {
                    match spot {
                        Hotspot::ProjectCard(id) => {
                            self.controller.apply(ViewEvent::ProjectHovered(id));
                        }
                        Hotspot::SkillBadge(ordinal) => {
                            self.controller.apply(ViewEvent::SkillHovered(ordinal));
                        }
                        Hotspot::FilterTab(_) => {}
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(Hotspot::FilterTab(token)) =
                    self.hotspot_under(mouse.column, mouse.row)
                {
                    self.controller
                        .apply(ViewEvent::FilterChanged(Filter::from_token(&token)));
                }
            }
            _ => {}
        }
    }

    /// Translate a screen position into document coordinates and look up
    /// the interactive rect beneath it.
    fn hotspot_under(&self, column: u16, row: u16) -> Option<Hotspot> {
        let (origin_x, origin_y) = self.content_origin;
        if row < origin_y || column < origin_x {
            return None;
        }
        let doc_y = (row - origin_y).checked_add(self.scroll)?;
        self.hotspots.at(column - origin_x, doc_y).cloned()
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll as i32) as u16;
        self.scroll_to(next);
    }

    fn scroll_to(&mut self, offset: u16) {
        self.scroll = offset.min(self.max_scroll);
        self.controller
            .apply(ViewEvent::ScrollOffsetChanged(self.scroll));
    }

    fn cycle_filter(&mut self, direction: i32) {
        let tokens = Filter::known_tokens();
        let current = self.controller.state().active_filter.to_string();
        // An unknown token is not in the tab list; step from the sentinel.
        let position = tokens.iter().position(|t| *t == current).unwrap_or(0) as i32;
        let count = tokens.len() as i32;
        let next = (position + direction).rem_euclid(count) as usize;
        self.controller
            .apply(ViewEvent::FilterChanged(Filter::from_token(tokens[next])));
    }

    /// Keyboard counterpart of pointer hover over the gallery.
    fn hover_project(&mut self, direction: i32) {
        let visible: Vec<_> = self
            .controller
            .visible_projects()
            .iter()
            .map(|p| p.id)
            .collect();
        if visible.is_empty() {
            return;
        }
        let position = self
            .controller
            .active_project()
            .and_then(|id| visible.iter().position(|v| *v == id))
            .unwrap_or(0) as i32;
        let next = (position + direction).clamp(0, visible.len() as i32 - 1) as usize;
        self.controller
            .apply(ViewEvent::ProjectHovered(visible[next]));
    }

    fn hover_skill(&mut self, direction: i32) {
        let count = self.controller.catalog().skills.len();
        if count == 0 {
            return;
        }
        let position = self.controller.active_skill().unwrap_or(0) as i32;
        let next = (position + direction).clamp(0, count as i32 - 1) as usize;
        self.controller.apply(ViewEvent::SkillHovered(next));
    }

    #[cfg(test)]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }
}

/// Compose the full page into an off-screen buffer and record the
/// interactive rects in document coordinates.
fn build_document(screen: &ScreenViewModel, width: u16) -> (Buffer, Hotspots) {
    let x = PAGE_MARGIN;
    let w = width.saturating_sub(PAGE_MARGIN * 2).max(20);

    let hero_h = HeroView::height(&screen.hero, w);
    let stats_h = StatsView::height();
    let skills_h = SkillBadgesView::height(&screen.skills, w);
    // gallery header: title + blank + tabs
    let header_h = 2 + FilterTabsView::height();
    let grid_h = ProjectGridView::height(&screen.projects, w);
    let exp_h = ExperienceView::height(&screen.experiences, w);
    let contact_h = ContactView::height(&screen.contact, w);

    let doc_height = hero_h
        + 1
        + stats_h
        + 1
        + skills_h
        + 1
        + header_h
        + 1
        + grid_h
        + 1
        + exp_h
        + 1
        + contact_h
        + 1;

    let mut buf = Buffer::empty(Rect::new(0, 0, width, doc_height));
    let mut hotspots = Hotspots::new();
    let mut y = 0;

    HeroView::new(&screen.hero).render(Rect::new(x, y, w, hero_h), &mut buf);
    y += hero_h + 1;

    StatsView::new(&screen.stats).render(Rect::new(x, y, w, stats_h), &mut buf);
    y += stats_h + 1;

    let skills_area = Rect::new(x, y, w, skills_h);
    SkillBadgesView::new(&screen.skills).render(skills_area, &mut buf);
    let chip_area = Rect::new(x, y + 2, w, skills_h.saturating_sub(2));
    for (rect, ordinal) in badge_layout(&screen.skills, chip_area) {
        hotspots.push(rect, Hotspot::SkillBadge(ordinal));
    }
    y += skills_h + 1;

    Paragraph::new(Line::from(Span::styled(
        "Featured Projects",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .render(Rect::new(x, y, w, 1), &mut buf);
    let tabs_area = Rect::new(x, y + 2, w, 1);
    FilterTabsView::new(&screen.filter_tabs).render(tabs_area, &mut buf);
    for (rect, token) in tab_layout(&screen.filter_tabs, tabs_area) {
        hotspots.push(rect, Hotspot::FilterTab(token.to_string()));
    }
    y += header_h + 1;

    let grid_area = Rect::new(x, y, w, grid_h);
    ProjectGridView::new(&screen.projects).render(grid_area, &mut buf);
    for (rect, idx) in grid_layout(&screen.projects, grid_area).0 {
        hotspots.push(
            rect,
            Hotspot::ProjectCard(folio_types::ProjectId::new(screen.projects[idx].id)),
        );
    }
    y += grid_h + 1;

    ExperienceView::new(&screen.experiences).render(Rect::new(x, y, w, exp_h), &mut buf);
    y += exp_h + 1;

    ContactView::new(&screen.contact).render(Rect::new(x, y, w, contact_h), &mut buf);

    (buf, hotspots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::ProjectId;

    fn app() -> TuiApp {
        TuiApp::new(Catalog::builtin())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!app.finished());
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.finished());

        let mut app2 = TuiApp::new(Catalog::builtin());
        app2.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app2.finished());
    }

    #[test]
    fn test_tab_cycles_filter_tokens() {
        let mut app = app();
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(
            app.controller().state().active_filter,
            Filter::category("Data Analysis")
        );
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(
            app.controller().state().active_filter,
            Filter::category("Web Dev")
        );
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.controller().state().active_filter, Filter::All);
    }

    #[test]
    fn test_backtab_cycles_backwards_from_sentinel() {
        let mut app = app();
        app.handle_event(key(KeyCode::BackTab));
        assert_eq!(
            app.controller().state().active_filter,
            Filter::category("Web Dev")
        );
    }

    #[test]
    fn test_bracket_keys_move_project_hover_within_visible_list() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char(']')));
        assert_eq!(app.controller().active_project(), Some(ProjectId::new(2)));
        app.handle_event(key(KeyCode::Char('[')));
        assert_eq!(app.controller().active_project(), Some(ProjectId::new(1)));
        // Clamped at the head of the list
        app.handle_event(key(KeyCode::Char('[')));
        assert_eq!(app.controller().active_project(), Some(ProjectId::new(1)));
    }

    #[test]
    fn test_skill_hover_keys_clamp_to_catalog() {
        let mut app = app();
        for _ in 0..20 {
            app.handle_event(key(KeyCode::Char('}')));
        }
        assert_eq!(app.controller().active_skill(), Some(5));
        app.handle_event(key(KeyCode::Char('{')));
        assert_eq!(app.controller().active_skill(), Some(4));
    }

    #[test]
    fn test_document_records_hotspots_for_every_card_and_badge() {
        let app = app();
        let screen = build_screen(app.controller());
        let (_, hotspots) = build_document(&screen, 100);

        let mut project_hits = 0;
        let mut skill_hits = 0;
        for y in 0..400 {
            for x in 0..100 {
                match hotspots.at(x, y) {
                    Some(Hotspot::ProjectCard(_)) => project_hits += 1,
                    Some(Hotspot::SkillBadge(_)) => skill_hits += 1,
                    _ => {}
                }
            }
        }
        assert!(project_hits > 0);
        assert!(skill_hits > 0);
    }

    #[test]
    fn test_document_height_grows_with_narrow_width() {
        let app = app();
        let screen = build_screen(app.controller());
        let (wide, _) = build_document(&screen, 110);
        let (narrow, _) = build_document(&screen, 60);
        assert!(narrow.area.height > wide.area.height);
    }
}
