//! User-requested theme mode.

use std::fmt;
use std::str::FromStr;

/// The theme mode requested on the command line.
///
/// Parsed once per invocation and immutable afterwards. `Auto` defers the
/// choice to the viewer via a media query in the generated CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    /// Light palette as the default, dark palette behind a media query.
    #[default]
    Auto,
    /// Light palette only.
    Light,
    /// Dark palette only.
    Dark,
}

impl ThemePreference {
    /// The CSS `color-scheme` hint this preference advertises.
    pub fn color_scheme(self) -> &'static str {
        match self {
            ThemePreference::Auto => "light dark",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemePreference::Auto => "auto",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        };
        f.write_str(name)
    }
}

/// Error returned when a theme value on the command line is not one of
/// `light`, `dark` or `auto`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidThemeValue {
    value: String,
}

impl fmt::Display for InvalidThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid theme value '{}' (expected light, dark, or auto)",
            self.value
        )
    }
}

impl std::error::Error for InvalidThemeValue {}

impl FromStr for ThemePreference {
    type Err = InvalidThemeValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ThemePreference::Auto),
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(InvalidThemeValue {
                value: other.to_string(),
            }),
        }
    }
}
