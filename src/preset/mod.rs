//! Preset catalog: named visual presets and their palettes.
//!
//! This module provides:
//!
//! - [`StylePreset`]: fonts, palette pair and extra CSS for one named look
//! - [`ThemePalette`]: the seven color fields for one mode
//! - [`presets`] / [`resolve_preset`]: the read-only catalog surface
//!
//! The catalog is a compile-time constant. Lookup is exact and
//! case-sensitive; a miss is an absence, never an error.

pub(crate) mod catalog;
mod palette;
#[allow(clippy::module_inception)]
mod preset;

pub use catalog::{presets, resolve_preset, DEFAULT_PRESET_ID};
pub use palette::ThemePalette;
pub use preset::{StylePreset, GENERIC_MONO_STACK};
