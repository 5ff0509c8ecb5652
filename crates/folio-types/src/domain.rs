use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a project entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u32);

impl ProjectId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProjectId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Project categories the gallery filter knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Data Analysis")]
    DataAnalysis,
    #[serde(rename = "Web Dev")]
    WebDev,
}

impl Category {
    /// Display token, as matched by the gallery filter
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DataAnalysis => "Data Analysis",
            Category::WebDev => "Web Dev",
        }
    }

    /// All categories, in the order the filter tabs show them
    pub fn all() -> &'static [Category] {
        &[Category::DataAnalysis, Category::WebDev]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque icon token. The core never interprets it; views map known
/// tokens to glyphs and fall back to a default for anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Icon {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One entry in the project gallery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub tags: Vec<String>,
    pub focus: String,
    pub icon: Icon,
    pub link: String,
}

/// One skill badge. Identity is the entry's ordinal position in the
/// catalog (dense, stable, never reshuffled at runtime).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub icon: Icon,
    pub name: String,
}

/// One timeline entry. The period is a free-form label, not a parsed
/// date range. Rendered in fixed catalog order, read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub org: String,
    pub period: String,
    pub description: String,
}

/// A labeled quick-stat shown under the hero section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// An outbound contact/profile link, passed through verbatim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    pub icon: Icon,
}

/// A downloadable document surfaced as an opaque link with a suggested
/// filename. Existence and content are never validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRef {
    pub href: String,
    pub suggested_name: String,
}

/// Biographical text and contact surface for the page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: Vec<String>,
    pub intro: String,
    pub stats: Vec<Stat>,
    pub quote: String,
    pub outro: String,
    pub footer: String,
    pub contacts: Vec<ContactLink>,
    #[serde(default)]
    pub resume: Option<AssetRef>,
}
