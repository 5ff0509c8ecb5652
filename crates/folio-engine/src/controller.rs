use crate::event::ViewEvent;
use crate::state::{Filter, ViewState, SCROLL_THRESHOLD};
use folio_types::{Catalog, Project, ProjectId};

/// Owns the catalog and the view state, and is the only place either is
/// mutated. All interaction flows in as [`ViewEvent`]s applied
/// synchronously; derived data flows out through the read accessors.
///
/// Central invariant: after any `apply` returns, `active_project` is
/// `None` iff the visible list is empty, and otherwise names a member of
/// the visible list.
pub struct Controller {
    catalog: Catalog,
    state: ViewState,
}

impl Controller {
    pub fn new(catalog: Catalog) -> Self {
        let state = ViewState {
            active_filter: Filter::All,
            active_project: catalog.projects.first().map(|p| p.id),
            active_skill: if catalog.skills.is_empty() {
                None
            } else {
                Some(0)
            },
            scrolled: false,
        };
        Self { catalog, state }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The subset of the project catalog matching the current filter, in
    /// catalog order. Pure over `(catalog, active_filter)`; never
    /// re-sorted. Unknown filter tokens match nothing.
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.catalog
            .projects
            .iter()
            .filter(|p| self.state.active_filter.matches(p.category))
            .collect()
    }

    /// Apply one interaction. Total over all inputs; never fails.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::FilterChanged(filter) => {
                self.state.active_filter = filter;
                // Reset the highlight to the head of the new visible list
                // so it always refers to a rendered card.
                let head = self.visible_projects().first().map(|p| p.id);
                self.state.active_project = head;
            }
            // Unconditional by design: hover notifications only originate
            // from rendered, hence visible, items.
            ViewEvent::ProjectHovered(id) => {
                self.state.active_project = Some(id);
            }
            ViewEvent::SkillHovered(ordinal) => {
                self.state.active_skill = Some(ordinal);
            }
            ViewEvent::ScrollOffsetChanged(offset) => {
                self.state.scrolled = offset > SCROLL_THRESHOLD;
            }
        }
    }

    pub fn active_project(&self) -> Option<ProjectId> {
        self.state.active_project
    }

    pub fn active_skill(&self) -> Option<usize> {
        self.state.active_skill
    }

    pub fn scrolled(&self) -> bool {
        self.state.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{Category, Icon, Project};

    fn project(id: u32, category: Category) -> Project {
        Project {
            id: ProjectId::new(id),
            title: format!("Project {}", id),
            category,
            description: String::new(),
            tags: vec![],
            focus: String::new(),
            icon: Icon::from("code"),
            link: String::new(),
        }
    }

    /// Catalog shape from the gallery scenario: one Data Analysis entry
    /// followed by three Web Dev entries.
    fn catalog() -> Catalog {
        let mut catalog = Catalog::builtin();
        catalog.projects = vec![
            project(1, Category::DataAnalysis),
            project(2, Category::WebDev),
            project(3, Category::WebDev),
            project(4, Category::WebDev),
        ];
        catalog
    }

    fn visible_ids(controller: &Controller) -> Vec<u32> {
        controller
            .visible_projects()
            .iter()
            .map(|p| p.id.as_u32())
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let controller = Controller::new(catalog());
        assert_eq!(controller.state().active_filter, Filter::All);
        assert_eq!(controller.active_project(), Some(ProjectId::new(1)));
        assert_eq!(controller.active_skill(), Some(0));
        assert!(!controller.scrolled());
    }

    #[test]
    fn test_initial_state_empty_catalog() {
        let mut empty = catalog();
        empty.projects.clear();
        empty.skills.clear();
        let controller = Controller::new(empty);
        assert_eq!(controller.active_project(), None);
        assert_eq!(controller.active_skill(), None);
    }

    #[test]
    fn test_all_sentinel_shows_full_catalog_in_order() {
        let controller = Controller::new(catalog());
        assert_eq!(visible_ids(&controller), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_category_filter_preserves_relative_order() {
        let mut controller = Controller::new(catalog());
        controller.apply(ViewEvent::FilterChanged(Filter::category("Web Dev")));
        assert_eq!(visible_ids(&controller), vec![2, 3, 4]);

        controller.apply(ViewEvent::FilterChanged(Filter::category("Data Analysis")));
        assert_eq!(visible_ids(&controller), vec![1]);
    }

    #[test]
    fn test_filter_change_resets_highlight_to_list_head() {
        let mut controller = Controller::new(catalog());
        controller.apply(ViewEvent::FilterChanged(Filter::category("Web Dev")));
        assert_eq!(controller.active_project(), Some(ProjectId::new(2)));
    }

    #[test]
    fn test_unknown_token_derives_empty_list_and_none_highlight() {
        let mut controller = Controller::new(catalog());
        controller.apply(ViewEvent::FilterChanged(Filter::category("Nonexistent")));
        assert!(visible_ids(&controller).is_empty());
        assert_eq!(controller.active_project(), None);
    }

    #[test]
    fn test_highlight_invariant_across_filter_sequences() {
        let mut controller = Controller::new(catalog());
        let tokens = [
            "Web Dev",
            "Nonexistent",
            "Data Analysis",
            "All",
            "Web Dev",
            "Web Dev",
            "Bogus",
            "All",
        ];
        for token in tokens {
            controller.apply(ViewEvent::FilterChanged(Filter::from_token(token)));
            let visible: Vec<ProjectId> =
                controller.visible_projects().iter().map(|p| p.id).collect();
            match controller.active_project() {
                None => assert!(visible.is_empty()),
                Some(id) => assert!(visible.contains(&id)),
            }
        }
    }

    #[test]
    fn test_repeated_filter_selection_is_idempotent() {
        let mut controller = Controller::new(catalog());
        controller.apply(ViewEvent::ProjectHovered(ProjectId::new(4)));

        controller.apply(ViewEvent::FilterChanged(Filter::category("Web Dev")));
        let first_visible = visible_ids(&controller);
        let first_active = controller.active_project();

        controller.apply(ViewEvent::FilterChanged(Filter::category("Web Dev")));
        assert_eq!(visible_ids(&controller), first_visible);
        assert_eq!(controller.active_project(), first_active);
    }

    #[test]
    fn test_hover_does_not_touch_filter_or_visible_list() {
        let mut controller = Controller::new(catalog());
        controller.apply(ViewEvent::FilterChanged(Filter::category("Web Dev")));
        let before = visible_ids(&controller);

        controller.apply(ViewEvent::ProjectHovered(ProjectId::new(3)));
        controller.apply(ViewEvent::SkillHovered(2));

        assert_eq!(
            controller.state().active_filter,
            Filter::category("Web Dev")
        );
        assert_eq!(visible_ids(&controller), before);
        assert_eq!(controller.active_project(), Some(ProjectId::new(3)));
        assert_eq!(controller.active_skill(), Some(2));
    }

    #[test]
    fn test_project_hover_is_unconditional() {
        let mut controller = Controller::new(catalog());
        controller.apply(ViewEvent::FilterChanged(Filter::category("Data Analysis")));
        // No membership check: the id is stored as-is.
        controller.apply(ViewEvent::ProjectHovered(ProjectId::new(4)));
        assert_eq!(controller.active_project(), Some(ProjectId::new(4)));
    }

    #[test]
    fn test_scroll_threshold_boundary() {
        let mut controller = Controller::new(catalog());

        controller.apply(ViewEvent::ScrollOffsetChanged(SCROLL_THRESHOLD));
        assert!(!controller.scrolled());

        controller.apply(ViewEvent::ScrollOffsetChanged(SCROLL_THRESHOLD + 1));
        assert!(controller.scrolled());

        // No hysteresis: dropping back below the threshold clears the flag.
        controller.apply(ViewEvent::ScrollOffsetChanged(0));
        assert!(!controller.scrolled());
    }

    #[test]
    fn test_gallery_scenario_end_to_end() {
        let mut controller = Controller::new(catalog());
        assert_eq!(controller.state().active_filter, Filter::All);
        assert_eq!(controller.active_project(), Some(ProjectId::new(1)));

        controller.apply(ViewEvent::FilterChanged(Filter::category("Web Dev")));
        assert_eq!(visible_ids(&controller), vec![2, 3, 4]);
        assert_eq!(controller.active_project(), Some(ProjectId::new(2)));

        controller.apply(ViewEvent::ProjectHovered(ProjectId::new(4)));
        assert_eq!(controller.active_project(), Some(ProjectId::new(4)));
        assert_eq!(visible_ids(&controller), vec![2, 3, 4]);

        controller.apply(ViewEvent::FilterChanged(Filter::category("Data Analysis")));
        assert_eq!(visible_ids(&controller), vec![1]);
        assert_eq!(controller.active_project(), Some(ProjectId::new(1)));

        controller.apply(ViewEvent::FilterChanged(Filter::category("Nonexistent")));
        assert!(visible_ids(&controller).is_empty());
        assert_eq!(controller.active_project(), None);
    }
}
