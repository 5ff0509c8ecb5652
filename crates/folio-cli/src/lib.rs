// NOTE: folio Architecture Rationale
//
// Why one state-owning controller (not per-section state)?
// - The page has exactly one mutable entity: the view state (filter,
//   highlighted project, highlighted skill, scroll flag)
// - Sections read derived data and report interactions upward as events;
//   no section mutates anything directly
// - Keeps the filter/highlight reset rule in one testable place
//
// Why ViewModels between the engine and the widgets?
// - Widgets map pre-computed primitives to terminal cells, nothing else
// - The same ViewModels feed the TUI, the console renderer, and --format
//   json, so scripted output and the interactive screen cannot drift

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
