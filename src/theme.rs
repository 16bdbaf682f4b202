use std::sync::Arc;
use tracing::{debug, info};

use crate::page::{Control, ControlId, Page};
use crate::storage::PreferenceStore;

pub const THEME_KEY: &str = "theme";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const TOGGLE_ID: &str = "themeToggle";

pub const MOON_GLYPH: &str = "🌙";
pub const SUN_GLYPH: &str = "☀️";

const TOGGLE_STYLE: [(&str, &str); 12] = [
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("zIndex", "1000"),
    ("padding", "8px 12px"),
    ("border", "none"),
    ("borderRadius", "8px"),
    ("background", "#d32f2f"),
    ("color", "white"),
    ("fontSize", "18px"),
    ("cursor", "pointer"),
    ("boxShadow", "0px 4px 6px rgba(0,0,0,0.2)"),
];

/// Persisted theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    /// Nothing stored yet.
    #[default]
    Unset,
    Light,
    Dark,
}

impl ThemePreference {
    /// Anything other than `"dark"` or `"light"` reads as `Unset`.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Dark,
            Some("light") => ThemePreference::Light,
            _ => ThemePreference::Unset,
        }
    }

    pub fn load(store: &dyn PreferenceStore) -> Self {
        Self::from_stored(store.get(THEME_KEY).as_deref())
    }

    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            ThemePreference::Dark => Some("dark"),
            ThemePreference::Light => Some("light"),
            ThemePreference::Unset => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    pub fn glyph(self) -> &'static str {
        if self.is_dark() {
            SUN_GLYPH
        } else {
            MOON_GLYPH
        }
    }
}

/// Floating light/dark switch.
pub struct ThemeToggle {
    page: Arc<dyn Page>,
    store: Arc<dyn PreferenceStore>,
    control: ControlId,
}

impl ThemeToggle {
    /// Append the toggle to the page and apply the stored preference.
    ///
    /// Each call appends another control.
    pub fn install(page: Arc<dyn Page>, store: Arc<dyn PreferenceStore>) -> Self {
        let control = page.append_control(Control {
            id: TOGGLE_ID.to_string(),
            label: MOON_GLYPH.to_string(),
            style: TOGGLE_STYLE.to_vec(),
        });

        let preference = ThemePreference::load(store.as_ref());
        debug!("Stored theme preference: {:?}", preference);
        if preference.is_dark() {
            page.add_body_class(DARK_MODE_CLASS);
            page.set_control_label(control, SUN_GLYPH);
        }

        Self {
            page,
            store,
            control,
        }
    }

    pub fn control(&self) -> ControlId {
        self.control
    }

    /// Current mode as shown on the page.
    pub fn mode(&self) -> ThemePreference {
        if self.page.body_has_class(DARK_MODE_CLASS) {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    /// Flip the theme, update the glyph and persist the new mode.
    pub fn click(&self) -> ThemePreference {
        let mode = if self.page.toggle_body_class(DARK_MODE_CLASS) {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        };

        self.page.set_control_label(self.control, mode.glyph());
        if let Some(value) = mode.as_stored() {
            self.store.set(THEME_KEY, value);
        }
        info!("Theme switched to {:?}", mode);
        mode
    }
}
