//! Interactive terminal UI for the phone search screen.
//!
//! [`screen`] holds the rendering-free state machine; the remaining
//! submodules implement the event loop, key handling, rendering and the
//! widgets and styles that make up the terminal application.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod labels;
mod render;
mod runtime;
pub mod screen;
mod search;
mod state;
pub mod style;

pub use builder::SearchUi;
pub use config::{DEFAULT_SEARCH_DELAY, UiConfig};
pub use labels::Labels;
pub use runtime::run;
pub use screen::{SearchPhase, SearchScreen};
pub use state::{App, Focus, ScreenOutcome};
