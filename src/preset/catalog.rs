//! The built-in preset catalog.
//!
//! Presets are a static ordered table; a lazily built index maps ids to
//! entries for lookup. Registration order is the order presets appear in
//! `--list-styles`, and it never changes at runtime.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::palette::ThemePalette;
use super::preset::StylePreset;

/// Preset chosen when `--style` is not given.
pub const DEFAULT_PRESET_ID: &str = "github";

const GOOGLE_FONTS_PRECONNECT: &str =
    r#"<link rel="preconnect" href="https://fonts.googleapis.com">"#;

static PRESETS: &[StylePreset] = &[
    StylePreset {
        id: "github",
        label: "GitHub",
        description: "Clean sans-serif look in the spirit of GitHub readmes",
        font_imports: &[],
        font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif",
        heading_font_family: None,
        mono_font_family: None,
        light: ThemePalette {
            background: "#ffffff",
            foreground: "#1f2328",
            code_background: "#f6f8fa",
            code_foreground: "#1f2328",
            border: "#d1d9e0",
            link: "#0969da",
            link_hover: "#0550ae",
        },
        dark: ThemePalette {
            background: "#0d1117",
            foreground: "#e6edf3",
            code_background: "#161b22",
            code_foreground: "#e6edf3",
            border: "#30363d",
            link: "#4493f8",
            link_hover: "#58a6ff",
        },
        extra_css: None,
    },
    StylePreset {
        id: "manuscript",
        label: "Manuscript",
        description: "Warm serif reading theme on cream paper",
        font_imports: &[
            GOOGLE_FONTS_PRECONNECT,
            r#"<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Source+Serif+4:opsz,wght@8..60,400;8..60,600;8..60,700&display=swap">"#,
            r#"<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Playfair+Display:wght@600;700&display=swap">"#,
        ],
        font_family: "'Source Serif 4', Georgia, 'Times New Roman', serif",
        heading_font_family: Some("'Playfair Display', Georgia, serif"),
        mono_font_family: None,
        light: ThemePalette {
            background: "#faf6ef",
            foreground: "#3b3228",
            code_background: "#f1ead9",
            code_foreground: "#4a3f33",
            border: "#d8cdb8",
            link: "#8f5b34",
            link_hover: "#6f4526",
        },
        dark: ThemePalette {
            background: "#211d17",
            foreground: "#d8cfc0",
            code_background: "#2c261d",
            code_foreground: "#cfc4ae",
            border: "#463d2f",
            link: "#d8a35d",
            link_hover: "#e6b873",
        },
        extra_css: Some(
            "h1, h2 {\n  border-bottom: none;\n}\n\nblockquote {\n  font-style: italic;\n}",
        ),
    },
    StylePreset {
        id: "terminal",
        label: "Terminal",
        description: "Monospace everything, phosphor green after dark",
        font_imports: &[
            GOOGLE_FONTS_PRECONNECT,
            r#"<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;700&display=swap">"#,
        ],
        font_family: "'JetBrains Mono', ui-monospace, Menlo, Consolas, monospace",
        heading_font_family: None,
        mono_font_family: Some("'JetBrains Mono', ui-monospace, Menlo, Consolas, monospace"),
        light: ThemePalette {
            background: "#f4f4f2",
            foreground: "#1a1c1a",
            code_background: "#e8e8e4",
            code_foreground: "#1a1c1a",
            border: "#b8bcb8",
            link: "#00695c",
            link_hover: "#004d40",
        },
        dark: ThemePalette {
            background: "#0a0f0a",
            foreground: "#33ff66",
            code_background: "#101910",
            code_foreground: "#7dff9f",
            border: "#1d4d2b",
            link: "#4dd0e1",
            link_hover: "#80deea",
        },
        extra_css: Some(
            "h1, h2, h3 {\n  text-transform: uppercase;\n  letter-spacing: 0.08em;\n}\n\na {\n  text-decoration: none;\n  border-bottom: 1px dashed var(--link);\n}",
        ),
    },
    StylePreset {
        id: "midnight",
        label: "Midnight",
        description: "Soft gradients and Inter, tuned for dark rooms",
        font_imports: &[
            GOOGLE_FONTS_PRECONNECT,
            r#"<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap">"#,
        ],
        font_family: "'Inter', -apple-system, 'Segoe UI', sans-serif",
        heading_font_family: None,
        mono_font_family: None,
        light: ThemePalette {
            background: "linear-gradient(180deg, #f8fafc 0%, #eef2f7 100%)",
            foreground: "#1e293b",
            code_background: "#e2e8f0",
            code_foreground: "#334155",
            border: "#cbd5e1",
            link: "#2563eb",
            link_hover: "#1d4ed8",
        },
        dark: ThemePalette {
            background: "linear-gradient(180deg, #0f172a 0%, #1e293b 100%)",
            foreground: "#e2e8f0",
            code_background: "#1e293b",
            code_foreground: "#cbd5e1",
            border: "#334155",
            link: "#60a5fa",
            link_hover: "#93c5fd",
        },
        extra_css: Some(
            "body {\n  background-attachment: fixed;\n}\n\nblockquote {\n  border-left-color: var(--link);\n}",
        ),
    },
    StylePreset {
        id: "solarized",
        label: "Solarized",
        description: "The classic low-contrast palette, light and dark",
        font_imports: &[],
        font_family: "-apple-system, 'Segoe UI', Helvetica, Arial, sans-serif",
        heading_font_family: None,
        mono_font_family: None,
        light: ThemePalette {
            background: "#fdf6e3",
            foreground: "#657b83",
            code_background: "#eee8d5",
            code_foreground: "#586e75",
            border: "#d9cfb2",
            link: "#268bd2",
            link_hover: "#2aa198",
        },
        dark: ThemePalette {
            background: "#002b36",
            foreground: "#839496",
            code_background: "#073642",
            code_foreground: "#93a1a1",
            border: "#0d4a56",
            link: "#268bd2",
            link_hover: "#2aa198",
        },
        extra_css: None,
    },
];

static INDEX: Lazy<HashMap<&'static str, &'static StylePreset>> =
    Lazy::new(|| PRESETS.iter().map(|preset| (preset.id, preset)).collect());

/// All registered presets, in registration order.
pub fn presets() -> &'static [StylePreset] {
    PRESETS
}

/// Looks up a preset by id. Exact, case-sensitive match.
pub fn resolve_preset(id: &str) -> Option<&'static StylePreset> {
    INDEX.get(id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_round_trips_every_preset() {
        for preset in presets() {
            let found = resolve_preset(preset.id).expect("registered preset resolves");
            assert_eq!(found, preset);
        }
    }

    #[test]
    fn test_resolve_unknown_id_is_none() {
        assert!(resolve_preset("no-such-preset").is_none());
        assert!(resolve_preset("").is_none());
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(resolve_preset("github").is_some());
        assert!(resolve_preset("GitHub").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = presets().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), presets().len());
    }

    #[test]
    fn test_default_preset_is_registered() {
        assert!(resolve_preset(DEFAULT_PRESET_ID).is_some());
    }

    #[test]
    fn test_presets_have_metadata() {
        for preset in presets() {
            assert!(!preset.id.is_empty());
            assert!(!preset.label.is_empty());
            assert!(!preset.description.is_empty());
            assert!(!preset.font_family.is_empty());
        }
    }

    #[test]
    fn test_registration_order_is_stable() {
        let first: Vec<&str> = presets().iter().map(|p| p.id).collect();
        let second: Vec<&str> = presets().iter().map(|p| p.id).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], DEFAULT_PRESET_ID);
    }
}
