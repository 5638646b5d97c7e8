//! Core crate exports for building and running the `tgsearch` terminal screen.
//!
//! The root module re-exports the search model and the UI entry points so
//! embedders can configure and drive the screen without digging through the
//! module hierarchy.

pub mod app_dirs;
pub mod locale;
pub mod logging;
pub mod search;
pub mod ui;

pub use locale::Locale;
pub use search::{GroupKind, HistoryEntry, SearchHistory, SearchResult};
pub use ui::style::{Theme, default_theme};
pub use ui::{App, ScreenOutcome, SearchScreen, SearchUi, UiConfig, run};
