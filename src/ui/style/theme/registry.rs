use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::Theme;

#[derive(Debug, Default)]
struct ThemeRegistry {
    canonical: BTreeMap<String, (&'static str, Theme)>,
    aliases: HashMap<String, String>,
}

impl ThemeRegistry {
    fn builtin() -> Self {
        let mut registry = Self::default();
        for definition in BUILT_IN_DEFINITIONS {
            let normalized = normalize_name(definition.name);
            let previous = registry
                .canonical
                .insert(normalized.clone(), (definition.name, definition.theme));
            debug_assert!(previous.is_none(), "duplicate built-in theme names");

            for alias in definition.aliases {
                let alias = normalize_name(alias);
                if alias != normalized {
                    let conflict = registry.aliases.insert(alias, normalized.clone());
                    debug_assert!(conflict.is_none(), "conflicting built-in theme aliases");
                }
            }
        }
        registry
    }

    fn get(&self, name: &str) -> Option<Theme> {
        let normalized = normalize_name(name);
        if let Some((_, theme)) = self.canonical.get(&normalized) {
            return Some(*theme);
        }

        let target = self.aliases.get(&normalized)?;
        self.canonical.get(target).map(|(_, theme)| *theme)
    }
}

static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();

fn registry() -> &'static ThemeRegistry {
    REGISTRY.get_or_init(ThemeRegistry::builtin)
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    registry().get(name)
}

/// Return the canonical theme names, sorted case-insensitively.
#[must_use]
pub fn names() -> Vec<&'static str> {
    registry()
        .canonical
        .values()
        .map(|(display, _)| *display)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::style::theme::builtins::{SLATE, light::LIGHT};

    #[test]
    fn builtin_themes_are_registered() {
        assert_eq!(names(), ["light", "slate", "solarized"]);
        assert_eq!(by_name("slate"), Some(SLATE));
    }

    #[test]
    fn lookup_ignores_case_and_resolves_aliases() {
        assert_eq!(by_name("  LIGHT "), Some(LIGHT));
        assert_eq!(by_name("Day"), Some(LIGHT));
        assert_eq!(by_name("default"), Some(SLATE));
        assert_eq!(by_name("nord"), None);
    }
}
