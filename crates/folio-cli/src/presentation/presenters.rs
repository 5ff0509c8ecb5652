//! Presenters for the portfolio page.
//!
//! This module contains PURE FUNCTIONS that convert the catalog and the
//! current view state into ViewModels.
//!
//! ## Design Principles:
//! - NO state management (the Controller owns state, Presenters are stateless)
//! - ALL decisions happen here (active flags, tab order, connector lines)
//! - Views should only need to map data to widgets, NO decisions

use crate::presentation::view_models::{
    ContactLinkViewModel, ContactViewModel, ExperienceRowViewModel, FilterTabViewModel,
    HeroViewModel, NavBarViewModel, ProjectCardViewModel, ResumeViewModel, ScreenViewModel,
    SkillBadgeViewModel, StatViewModel,
};
use folio_engine::{Controller, Filter};
use folio_types::{Catalog, Profile, Project, ProjectId};

/// Build the complete screen ViewModel from the current view state.
///
/// This is the single entry point for the TUI renderer; the console and
/// JSON surfaces call the section builders directly.
pub fn build_screen(controller: &Controller) -> ScreenViewModel {
    let catalog = controller.catalog();
    let state = controller.state();

    ScreenViewModel {
        navbar: build_navbar(&catalog.profile, state.scrolled),
        hero: build_hero(&catalog.profile),
        stats: build_stats(&catalog.profile),
        skills: build_skill_badges(catalog, state.active_skill),
        filter_tabs: build_filter_tabs(&state.active_filter),
        projects: build_project_cards(&controller.visible_projects(), state.active_project),
        experiences: build_experience_rows(catalog),
        contact: build_contact(&catalog.profile),
    }
}

pub fn build_navbar(profile: &Profile, scrolled: bool) -> NavBarViewModel {
    NavBarViewModel {
        name: profile.name.clone(),
        links: vec![
            "About".to_string(),
            "Projects".to_string(),
            "Experience".to_string(),
            "Contact".to_string(),
        ],
        compact: scrolled,
    }
}

pub fn build_hero(profile: &Profile) -> HeroViewModel {
    HeroViewModel {
        headline: profile.headline.clone(),
        tagline: profile.tagline.clone(),
        intro: profile.intro.clone(),
    }
}

pub fn build_stats(profile: &Profile) -> Vec<StatViewModel> {
    profile
        .stats
        .iter()
        .map(|stat| StatViewModel {
            label: stat.label.clone(),
            value: stat.value.clone(),
        })
        .collect()
}

pub fn build_skill_badges(catalog: &Catalog, active: Option<usize>) -> Vec<SkillBadgeViewModel> {
    catalog
        .skills
        .iter()
        .enumerate()
        .map(|(ordinal, skill)| SkillBadgeViewModel {
            ordinal,
            name: skill.name.clone(),
            icon: skill.icon.as_str().to_string(),
            is_active: active == Some(ordinal),
        })
        .collect()
}

/// Filter tabs: the sentinel first, then the known categories, in a
/// fixed order. The current filter's token is marked active; an unknown
/// token leaves every tab inactive.
pub fn build_filter_tabs(active: &Filter) -> Vec<FilterTabViewModel> {
    Filter::known_tokens()
        .into_iter()
        .map(|token| FilterTabViewModel {
            label: token.to_string(),
            is_active: active.to_string() == token,
        })
        .collect()
}

pub fn build_project_cards(
    visible: &[&Project],
    active: Option<ProjectId>,
) -> Vec<ProjectCardViewModel> {
    visible
        .iter()
        .map(|project| ProjectCardViewModel {
            id: project.id.as_u32(),
            title: project.title.clone(),
            category: project.category.as_str().to_string(),
            description: project.description.clone(),
            tags: project.tags.clone(),
            focus: project.focus.clone(),
            icon: project.icon.as_str().to_string(),
            link: project.link.clone(),
            is_active: active == Some(project.id),
        })
        .collect()
}

pub fn build_experience_rows(catalog: &Catalog) -> Vec<ExperienceRowViewModel> {
    let last = catalog.experiences.len().saturating_sub(1);
    catalog
        .experiences
        .iter()
        .enumerate()
        .map(|(idx, exp)| ExperienceRowViewModel {
            role: exp.role.clone(),
            org: exp.org.clone(),
            period: exp.period.clone(),
            description: exp.description.clone(),
            is_last: idx == last,
        })
        .collect()
}

pub fn build_contact(profile: &Profile) -> ContactViewModel {
    ContactViewModel {
        outro: profile.outro.clone(),
        quote: profile.quote.clone(),
        links: profile
            .contacts
            .iter()
            .map(|link| ContactLinkViewModel {
                label: link.label.clone(),
                href: link.href.clone(),
                icon: link.icon.as_str().to_string(),
            })
            .collect(),
        resume: profile.resume.as_ref().map(|asset| ResumeViewModel {
            href: asset.href.clone(),
            suggested_name: asset.suggested_name.clone(),
        }),
        footer: profile.footer.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::ViewEvent;

    fn controller() -> Controller {
        Controller::new(Catalog::builtin())
    }

    #[test]
    fn test_screen_marks_first_project_active_at_mount() {
        let screen = build_screen(&controller());
        assert_eq!(screen.projects.len(), 4);
        assert!(screen.projects[0].is_active);
        assert!(screen.projects[1..].iter().all(|card| !card.is_active));
    }

    #[test]
    fn test_screen_marks_first_skill_active_at_mount() {
        let screen = build_screen(&controller());
        assert!(screen.skills[0].is_active);
        assert_eq!(screen.skills.iter().filter(|b| b.is_active).count(), 1);
    }

    #[test]
    fn test_filter_tabs_track_selection() {
        let mut controller = controller();
        controller.apply(ViewEvent::FilterChanged(Filter::category("Web Dev")));

        let screen = build_screen(&controller);
        let labels: Vec<&str> = screen
            .filter_tabs
            .iter()
            .map(|tab| tab.label.as_str())
            .collect();
        assert_eq!(labels, vec!["All", "Data Analysis", "Web Dev"]);
        assert!(!screen.filter_tabs[0].is_active);
        assert!(screen.filter_tabs[2].is_active);
    }

    #[test]
    fn test_unknown_filter_token_leaves_all_tabs_inactive() {
        let mut controller = controller();
        controller.apply(ViewEvent::FilterChanged(Filter::category("Nonexistent")));

        let screen = build_screen(&controller);
        assert!(screen.filter_tabs.iter().all(|tab| !tab.is_active));
        assert!(screen.projects.is_empty());
    }

    #[test]
    fn test_hovered_card_is_the_only_active_one() {
        let mut controller = controller();
        controller.apply(ViewEvent::ProjectHovered(ProjectId::new(3)));

        let screen = build_screen(&controller);
        let active: Vec<u32> = screen
            .projects
            .iter()
            .filter(|card| card.is_active)
            .map(|card| card.id)
            .collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn test_navbar_compact_follows_scrolled_flag() {
        let mut controller = controller();
        assert!(!build_screen(&controller).navbar.compact);

        controller.apply(ViewEvent::ScrollOffsetChanged(folio_engine::SCROLL_THRESHOLD + 1));
        assert!(build_screen(&controller).navbar.compact);
    }

    #[test]
    fn test_experience_rows_mark_last_connector() {
        let screen = build_screen(&controller());
        assert_eq!(screen.experiences.len(), 3);
        assert!(!screen.experiences[0].is_last);
        assert!(screen.experiences[2].is_last);
    }

    #[test]
    fn test_contact_passes_links_through_verbatim() {
        let screen = build_screen(&controller());
        assert_eq!(screen.contact.links.len(), 3);
        assert_eq!(screen.contact.links[0].href, "mailto:muizisman511@gmail.com");
        let resume = screen.contact.resume.expect("builtin catalog has a resume");
        assert_eq!(resume.suggested_name, "CV_Muiz_Isman.pdf");
    }
}
