//! Theme toggle backed by a preference store.

use crate::theme::store::{PreferenceStore, StoreError};
use crate::theme::{Theme, THEME_KEY};

pub struct ThemeController<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Restore the saved theme, or use `default` when none is saved.
    ///
    /// An unreadable saved value is logged and ignored.
    pub fn load(store: S, default: Theme) -> Result<Self, StoreError> {
        let current = match store.get(THEME_KEY)? {
            Some(saved) => saved.parse::<Theme>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring saved theme");
                default
            }),
            None => default,
        };
        Ok(Self { store, current })
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist the new choice.
    pub fn toggle(&mut self) -> Result<Theme, StoreError> {
        let next = self.current.toggle();
        self.store.set(THEME_KEY, next.as_str())?;
        self.current = next;
        tracing::debug!(theme = %next, "Theme toggled");
        Ok(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::MemoryStore;

    #[test]
    fn test_default_when_nothing_saved() {
        let controller = ThemeController::load(MemoryStore::new(), Theme::Dark).unwrap();
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let mut controller = ThemeController::load(MemoryStore::new(), Theme::Light).unwrap();
        assert_eq!(controller.toggle().unwrap(), Theme::Dark);
        assert_eq!(controller.store().get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        let restored = ThemeController::load(controller.store, Theme::Light).unwrap();
        assert_eq!(restored.current(), Theme::Dark);
    }

    #[test]
    fn test_garbage_saved_value_falls_back() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "neon").unwrap();
        let controller = ThemeController::load(store, Theme::Light).unwrap();
        assert_eq!(controller.current(), Theme::Light);
    }
}
