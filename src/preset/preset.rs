//! Style preset records.

use super::palette::ThemePalette;

/// Monospace stack used when a preset declares no mono font of its own.
pub const GENERIC_MONO_STACK: &str =
    "ui-monospace, 'SF Mono', Menlo, Consolas, 'Liberation Mono', monospace";

/// A named visual preset: fonts, a light/dark palette pair and optional
/// extra CSS.
///
/// Presets are compile-time constants registered in the
/// [catalog](super::catalog); nothing mutates them after process start.
///
/// # Example
///
/// ```rust
/// use mdlook::preset::resolve_preset;
///
/// let preset = resolve_preset("github").unwrap();
/// assert_eq!(preset.id, "github");
/// assert_eq!(preset.heading_font(), preset.font_family);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePreset {
    /// Stable short key used on the command line (`--style <id>`).
    pub id: &'static str,
    /// Human-readable name.
    pub label: &'static str,
    /// One-line description shown by `--list-styles`.
    pub description: &'static str,
    /// Markup snippets (stylesheet `<link>` tags) embedded verbatim in the
    /// document head, in this order.
    pub font_imports: &'static [&'static str],
    /// CSS font-family for body text.
    pub font_family: &'static str,
    /// Heading font. `None` means headings use [`Self::font_family`].
    pub heading_font_family: Option<&'static str>,
    /// Code font. `None` means [`GENERIC_MONO_STACK`].
    pub mono_font_family: Option<&'static str>,
    /// Palette applied in light mode (and as the `auto` default).
    pub light: ThemePalette,
    /// Palette applied in dark mode.
    pub dark: ThemePalette,
    /// Raw CSS appended after all generated rules.
    pub extra_css: Option<&'static str>,
}

impl StylePreset {
    /// Heading font with its fallback applied.
    pub fn heading_font(&self) -> &'static str {
        self.heading_font_family.unwrap_or(self.font_family)
    }

    /// Mono font with its fallback applied.
    pub fn mono_font(&self) -> &'static str {
        self.mono_font_family.unwrap_or(GENERIC_MONO_STACK)
    }
}
