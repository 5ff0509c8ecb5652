use crate::state::Filter;
use folio_types::ProjectId;
use serde::{Deserialize, Serialize};

/// One interaction, processed synchronously by the controller. Every
/// variant is total: no event can fail, and unknown filter tokens derive
/// an empty visible list rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// A filter tab was selected
    FilterChanged(Filter),
    /// The pointer entered a rendered project card
    ProjectHovered(ProjectId),
    /// The pointer entered a rendered skill badge (by ordinal)
    SkillHovered(usize),
    /// The page's vertical scroll offset changed
    ScrollOffsetChanged(u16),
}
