//! ViewModels for the portfolio page.
//!
//! These define the complete data contract for the renderers. They
//! contain ONLY primitive types and computed values - NO domain logic.
//! A renderer (TUI widget, console text, or JSON) should be able to
//! produce its output using ONLY this data.

use serde::Serialize;

/// Complete screen state for rendering
#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    /// Navigation bar (pinned above the scrolling content)
    pub navbar: NavBarViewModel,
    pub hero: HeroViewModel,
    pub stats: Vec<StatViewModel>,
    pub skills: Vec<SkillBadgeViewModel>,
    pub filter_tabs: Vec<FilterTabViewModel>,
    /// The visible project list under the current filter, catalog order
    pub projects: Vec<ProjectCardViewModel>,
    pub experiences: Vec<ExperienceRowViewModel>,
    pub contact: ContactViewModel,
}

/// Navigation bar. `compact` is the scrolled flag - the navbar is the
/// sole consumer of it.
#[derive(Debug, Clone, Serialize)]
pub struct NavBarViewModel {
    pub name: String,
    pub links: Vec<String>,
    pub compact: bool,
}

/// Hero section (headline badge, tagline, intro paragraph)
#[derive(Debug, Clone, Serialize)]
pub struct HeroViewModel {
    pub headline: String,
    pub tagline: Vec<String>,
    pub intro: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatViewModel {
    pub label: String,
    pub value: String,
}

/// One skill badge. `ordinal` is the badge's identity for hover purposes.
#[derive(Debug, Clone, Serialize)]
pub struct SkillBadgeViewModel {
    pub ordinal: usize,
    pub name: String,
    pub icon: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterTabViewModel {
    pub label: String,
    pub is_active: bool,
}

/// One project card in the gallery grid
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCardViewModel {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    pub focus: String,
    pub icon: String,
    pub link: String,
    pub is_active: bool,
}

/// One experience timeline row. `is_last` drops the trailing connector.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceRowViewModel {
    pub role: String,
    pub org: String,
    pub period: String,
    pub description: String,
    pub is_last: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactLinkViewModel {
    pub label: String,
    pub href: String,
    pub icon: String,
}

/// Downloadable document reference, passed through verbatim
#[derive(Debug, Clone, Serialize)]
pub struct ResumeViewModel {
    pub href: String,
    pub suggested_name: String,
}

/// Contact footer (outro, links, quote, footer line)
#[derive(Debug, Clone, Serialize)]
pub struct ContactViewModel {
    pub outro: String,
    pub quote: String,
    pub links: Vec<ContactLinkViewModel>,
    pub resume: Option<ResumeViewModel>,
    pub footer: String,
}
