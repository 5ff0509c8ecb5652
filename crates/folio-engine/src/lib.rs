pub mod controller;
pub mod event;
pub mod state;

pub use controller::Controller;
pub use event::ViewEvent;
pub use state::{Filter, ViewState, SCROLL_THRESHOLD};
