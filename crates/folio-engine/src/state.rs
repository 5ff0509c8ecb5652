use folio_types::{Category, ProjectId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rows of content scrolled past before the navbar collapses into its
/// compact form. Compared strictly (`offset > SCROLL_THRESHOLD`), no
/// hysteresis: every scroll signal is evaluated on its own.
pub const SCROLL_THRESHOLD: u16 = 3;

/// Gallery filter selection. `All` is the sentinel meaning no category
/// restriction. `Category` holds the raw token and is deliberately open:
/// tokens outside the known enumeration are accepted as-is and simply
/// match no catalog entry, deriving an empty visible list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// Build a filter from a raw token. `"All"` maps to the sentinel;
    /// anything else is carried verbatim.
    pub fn from_token(token: &str) -> Self {
        if token == "All" {
            Filter::All
        } else {
            Filter::Category(token.to_string())
        }
    }

    pub fn category(token: impl Into<String>) -> Self {
        Filter::Category(token.into())
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(token) => token == category.as_str(),
        }
    }

    /// The filter tokens the navigation controls offer, in tab order.
    pub fn known_tokens() -> Vec<&'static str> {
        let mut tokens = vec!["All"];
        tokens.extend(Category::all().iter().map(|c| c.as_str()));
        tokens
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "All"),
            Filter::Category(token) => write!(f, "{}", token),
        }
    }
}

/// The page's only mutable entity. Owned exclusively by the
/// [`Controller`](crate::Controller); renderers read the slice relevant
/// to them and request mutations through [`ViewEvent`](crate::ViewEvent)s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub active_filter: Filter,
    pub active_project: Option<ProjectId>,
    pub active_skill: Option<usize>,
    pub scrolled: bool,
}
