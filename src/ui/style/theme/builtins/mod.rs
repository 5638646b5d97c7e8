use super::types::{Theme, ThemeDefinition};

pub mod light;
pub mod slate;
pub mod solarized;

pub use slate::SLATE;

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] =
    &[light::DEFINITION, slate::DEFINITION, solarized::DEFINITION];

/// Theme used when the configuration does not name one.
#[must_use]
pub const fn default_theme() -> Theme {
    SLATE
}
