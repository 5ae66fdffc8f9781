//! Preference-to-palette resolution.

use crate::preset::{StylePreset, ThemePalette};

use super::preference::ThemePreference;

/// The palettes a preference selects from a preset.
///
/// Splitting the result into an explicit base plus an optional override
/// keeps the layering rule checkable on its own, before any CSS text
/// exists: the compositor only ever renders what this struct says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTheme<'a> {
    /// Palette supplying the static `:root` variable values.
    pub base: &'a ThemePalette,
    /// Palette re-declared inside a `prefers-color-scheme: dark` media
    /// block. `None` when the preference is fixed.
    pub dark_override: Option<&'a ThemePalette>,
    /// Value for the `color-scheme` hint.
    pub color_scheme: &'static str,
}

/// Resolves which palettes apply for a preference.
///
/// `Auto` layers light-first: the light palette is the static default so
/// that a viewer reporting no preference (or one without media-query
/// support) sees light, and the dark palette only applies behind the
/// media condition.
pub fn resolve_theme(preset: &StylePreset, preference: ThemePreference) -> ResolvedTheme<'_> {
    let color_scheme = preference.color_scheme();
    match preference {
        ThemePreference::Light => ResolvedTheme {
            base: &preset.light,
            dark_override: None,
            color_scheme,
        },
        ThemePreference::Dark => ResolvedTheme {
            base: &preset.dark,
            dark_override: None,
            color_scheme,
        },
        ThemePreference::Auto => ResolvedTheme {
            base: &preset.light,
            dark_override: Some(&preset.dark),
            color_scheme,
        },
    }
}
