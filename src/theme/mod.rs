//! Theme preference and palette resolution.
//!
//! This module provides:
//!
//! - [`ThemePreference`]: the `auto`/`light`/`dark` mode from the CLI
//! - [`ResolvedTheme`]: which palettes actually apply, base + override
//! - [`resolve_theme`]: the light-first layering rule
//!
//! Resolution is pure data: it decides which palettes apply and leaves
//! all CSS text generation to the [style](crate::style) module.

mod preference;
mod resolver;

pub use preference::{InvalidThemeValue, ThemePreference};
pub use resolver::{resolve_theme, ResolvedTheme};
