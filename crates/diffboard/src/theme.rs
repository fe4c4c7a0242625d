use colored::{ColoredString, Colorize};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use line_diff::DiffRunKind;

use crate::storage::SettingsStore;

/// Settings key holding the chosen theme
pub const THEME_KEY: &str = "theme";

/// Colour scheme of the rendered output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[display(fmt = "light")]
    #[serde(rename = "light-theme")]
    Light,

    #[display(fmt = "dark")]
    #[serde(rename = "dark-theme")]
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The persisted theme, or light when none is stored
    pub fn load(store: &SettingsStore) -> Self {
        store.load(THEME_KEY).unwrap_or_default()
    }

    pub fn save(self, store: &mut SettingsStore) {
        store.save(THEME_KEY, &self);
    }

    /// Colour a patch or side-by-side line of the given kind
    pub fn paint(self, kind: DiffRunKind, text: &str) -> ColoredString {
        match (self, kind) {
            (Theme::Light, DiffRunKind::Added) => text.green(),
            (Theme::Light, DiffRunKind::Removed) => text.red(),
            (Theme::Light, DiffRunKind::Kept) => text.normal(),
            (Theme::Dark, DiffRunKind::Added) => text.bright_green(),
            (Theme::Dark, DiffRunKind::Removed) => text.bright_red(),
            (Theme::Dark, DiffRunKind::Kept) => text.bright_white(),
        }
    }

    /// Colour of hunk headers and other chrome
    pub fn paint_header(self, text: &str) -> ColoredString {
        match self {
            Theme::Light => text.cyan(),
            Theme::Dark => text.bright_cyan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light_without_stored_value() {
        assert_eq!(Theme::load(&SettingsStore::in_memory()), Theme::Light);
    }

    #[test]
    fn persisted_under_css_class_names() {
        let mut store = SettingsStore::in_memory();
        Theme::Dark.save(&mut store);

        assert_eq!(store.load::<String>(THEME_KEY).as_deref(), Some("dark-theme"));
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_falls_back_to_light() {
        let mut store = SettingsStore::in_memory();
        store.save(THEME_KEY, &"solarized");
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
