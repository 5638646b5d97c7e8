mod builtins;
mod registry;
mod types;

pub use builtins::default_theme;
pub use registry::{by_name, names};
pub use types::{Theme, ThemeDefinition};

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}
