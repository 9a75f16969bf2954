//! Live theme state
//!
//! Holds the active theme and color scheme so a running app can switch
//! schemes or regenerate from new options without rebuilding consumers.
//! A failed regeneration leaves the previous theme in place.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard};

use crate::error::Result;
use crate::theme::{generate, ColorScheme, Theme, ThemeOptions};
use crate::tokens::{render_stylesheet, StylesheetOptions, ThemeProperties};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// A theme together with the options it was generated from
struct Active {
    theme: Arc<Theme>,
    options: ThemeOptions,
}

/// Active theme, the options that produced it and the current scheme
pub struct ThemeState {
    active: RwLock<Active>,
    scheme: RwLock<ColorScheme>,

    /// Set on every change, cleared by [`ThemeState::take_needs_restyle`]
    needs_restyle: AtomicBool,

    /// Called after every change
    on_change: RwLock<Option<fn(ColorScheme)>>,
}

impl ThemeState {
    /// Generate the initial theme
    pub fn new(options: ThemeOptions, scheme: ColorScheme) -> Result<Self> {
        let theme = generate(&options)?;
        Ok(Self {
            active: RwLock::new(Active {
                theme: Arc::new(theme),
                options,
            }),
            scheme: RwLock::new(scheme),
            needs_restyle: AtomicBool::new(false),
            on_change: RwLock::new(None),
        })
    }

    /// Initialize the global theme state (call once at startup)
    ///
    /// Later calls are ignored once a state is installed.
    pub fn init(options: ThemeOptions, scheme: ColorScheme) -> Result<&'static ThemeState> {
        if let Some(state) = THEME_STATE.get() {
            return Ok(state);
        }
        let state = Self::new(options, scheme)?;
        Ok(THEME_STATE.get_or_init(|| state))
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// Register a function to run after the theme or scheme changes
    pub fn set_change_callback(&self, callback: fn(ColorScheme)) {
        *self.on_change.write().unwrap_or_else(PoisonError::into_inner) = Some(callback);
    }

    // ========== Color Scheme ==========

    /// Get the current color scheme
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the color scheme
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = self.scheme.write().unwrap_or_else(PoisonError::into_inner);
        if *current != scheme {
            tracing::debug!(from = ?*current, to = ?scheme, "switching color scheme");
            *current = scheme;
            drop(current);
            self.changed(scheme);
        }
    }

    /// Toggle between light and dark
    pub fn toggle_scheme(&self) {
        self.set_scheme(self.scheme().toggle());
    }

    // ========== Theme ==========

    /// The active theme
    pub fn theme(&self) -> Arc<Theme> {
        Arc::clone(&self.read_active().theme)
    }

    /// Options the active theme was generated from
    pub fn options(&self) -> ThemeOptions {
        self.read_active().options.clone()
    }

    /// The active theme and its options, read together
    pub fn current(&self) -> (Arc<Theme>, ThemeOptions) {
        let active = self.read_active();
        (Arc::clone(&active.theme), active.options.clone())
    }

    /// Regenerate from new options
    ///
    /// On error the previous theme and options stay active.
    pub fn apply(&self, options: ThemeOptions) -> Result<()> {
        let theme = match generate(&options) {
            Ok(theme) => theme,
            Err(err) => {
                tracing::warn!(error = %err, "theme regeneration failed, keeping previous theme");
                return Err(err);
            }
        };

        *self.active.write().unwrap_or_else(PoisonError::into_inner) = Active {
            theme: Arc::new(theme),
            options,
        };
        self.changed(self.scheme());
        Ok(())
    }

    /// Token records for the current scheme
    pub fn properties(&self) -> ThemeProperties {
        let theme = self.theme();
        ThemeProperties::from_colors(theme.for_scheme(self.scheme()))
    }

    /// Stylesheet for the active theme with default selectors
    pub fn stylesheet(&self) -> String {
        render_stylesheet(&self.theme(), &StylesheetOptions::default())
    }

    /// Check and clear the restyle flag
    pub fn take_needs_restyle(&self) -> bool {
        self.needs_restyle.swap(false, Ordering::SeqCst)
    }

    fn read_active(&self) -> RwLockReadGuard<'_, Active> {
        self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn changed(&self, scheme: ColorScheme) {
        self.needs_restyle.store(true, Ordering::SeqCst);
        let callback = *self.on_change.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(callback) = callback {
            callback(scheme);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;
    use crate::scheme::SchemeRole;
    use crate::variant::Variant;

    fn state() -> ThemeState {
        ThemeState::new(ThemeOptions::new("#1f6feb"), ColorScheme::Light).unwrap()
    }

    #[test]
    fn toggle_switches_properties_side() {
        let state = state();
        let light = state.properties();
        state.toggle_scheme();
        assert_eq!(state.scheme(), ColorScheme::Dark);

        let dark = state.properties();
        let theme = state.theme();
        assert_eq!(
            dark.get("background").unwrap().argb,
            theme.dark().role(SchemeRole::Background)
        );
        assert_ne!(light.get("background"), dark.get("background"));
    }

    #[test]
    fn setting_same_scheme_is_not_a_change() {
        let state = state();
        state.set_scheme(ColorScheme::Light);
        assert!(!state.take_needs_restyle());

        state.set_scheme(ColorScheme::Dark);
        assert!(state.take_needs_restyle());
        assert!(!state.take_needs_restyle());
    }

    #[test]
    fn failed_apply_keeps_previous_theme() {
        let state = state();
        let before = state.theme();

        let err = state.apply(ThemeOptions::new("not a color")).unwrap_err();
        assert_eq!(err.parameter(), Some("seed"));
        assert_eq!(*state.theme(), *before);
        assert_eq!(state.options().seed, "#1f6feb");
        assert!(!state.take_needs_restyle());
    }

    #[test]
    fn apply_replaces_theme_and_notifies() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn on_change(_: ColorScheme) {
            CALLS.fetch_add(1, Ordering::SeqCst);
        }

        let state = state();
        state.set_change_callback(on_change);

        let options = ThemeOptions::new("#b33b15").with_variant(Variant::Vibrant);
        state.apply(options.clone()).unwrap();

        assert_eq!(state.options(), options);
        assert_eq!(state.theme().seed().hex(), "#b33b15");
        assert!(state.take_needs_restyle());
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn readers_never_see_a_theme_with_foreign_options() {
        let state = state();
        let seeds = ["#1f6feb", "#b33b15"];

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..20 {
                    state.apply(ThemeOptions::new(seeds[i % 2])).unwrap();
                }
            });
            for _ in 0..200 {
                let (theme, options) = state.current();
                assert_eq!(theme.seed().hex(), options.seed);
            }
        });

        let (theme, options) = state.current();
        assert_eq!(options.seed, "#b33b15");
        assert_eq!(theme.seed().hex(), options.seed);
    }

    #[test]
    fn stylesheet_has_both_blocks() {
        let css = state().stylesheet();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("\n.dark {\n"));
    }
}
