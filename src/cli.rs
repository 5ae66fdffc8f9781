//! Command-line argument surface.

use std::path::PathBuf;

use clap::Parser;

use crate::preset::DEFAULT_PRESET_ID;
use crate::theme::ThemePreference;

/// Parses a theme value into [`ThemePreference`].
fn parse_theme(s: &str) -> Result<ThemePreference, String> {
    s.parse().map_err(|e: crate::theme::InvalidThemeValue| e.to_string())
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "mdlook", version)]
#[command(about = "Preview a Markdown file as themed HTML in your browser")]
#[command(after_help = "\
Environment:
  MDLOOK_NO_OPEN  any truthy value suppresses the browser launch
  MDLOOK_DEBUG    print the full error chain on failure
  RUST_LOG        overrides the -v derived log filter")]
pub struct Cli {
    /// Markdown file to preview
    pub input: Option<PathBuf>,

    /// Theme preference: light, dark, or auto
    #[arg(long, value_name = "MODE", value_parser = parse_theme)]
    pub theme: Option<ThemePreference>,

    /// Shorthand for --theme light
    #[arg(long, conflicts_with = "dark")]
    pub light: bool,

    /// Shorthand for --theme dark
    #[arg(long)]
    pub dark: bool,

    /// Style preset id (see --list-styles)
    #[arg(long, value_name = "ID", default_value = DEFAULT_PRESET_ID)]
    pub style: String,

    /// List available style presets and exit
    #[arg(long)]
    pub list_styles: bool,

    /// Write the HTML document to stdout instead of a temp file
    #[arg(long)]
    pub stdout: bool,

    /// Skip opening the browser
    #[arg(long)]
    pub no_open: bool,

    /// Increase log verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The effective theme preference.
    ///
    /// `--light`/`--dark` shorthands win over `--theme`; with neither
    /// given the preference defaults to `auto`.
    pub fn preference(&self) -> ThemePreference {
        if self.light {
            ThemePreference::Light
        } else if self.dark {
            ThemePreference::Dark
        } else {
            self.theme.unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_asserts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["mdlook", "notes.md"]);
        assert_eq!(cli.preference(), ThemePreference::Auto);
        assert_eq!(cli.style, DEFAULT_PRESET_ID);
        assert!(!cli.stdout);
        assert!(!cli.no_open);
    }

    #[test]
    fn test_theme_flag_both_forms() {
        let cli = parse(&["mdlook", "--theme", "dark", "notes.md"]);
        assert_eq!(cli.preference(), ThemePreference::Dark);
        let cli = parse(&["mdlook", "--theme=light", "notes.md"]);
        assert_eq!(cli.preference(), ThemePreference::Light);
    }

    #[test]
    fn test_invalid_theme_value_is_rejected() {
        let err = Cli::try_parse_from(["mdlook", "--theme", "sideways", "notes.md"]).unwrap_err();
        assert!(err.to_string().contains("Invalid theme value"));
    }

    #[test]
    fn test_shorthands_set_preference() {
        assert_eq!(
            parse(&["mdlook", "--light", "notes.md"]).preference(),
            ThemePreference::Light
        );
        assert_eq!(
            parse(&["mdlook", "--dark", "notes.md"]).preference(),
            ThemePreference::Dark
        );
    }

    #[test]
    fn test_shorthand_wins_over_theme_flag() {
        let cli = parse(&["mdlook", "--theme", "light", "--dark", "notes.md"]);
        assert_eq!(cli.preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_light_and_dark_conflict() {
        assert!(Cli::try_parse_from(["mdlook", "--light", "--dark", "notes.md"]).is_err());
    }

    #[test]
    fn test_style_flag_both_forms() {
        assert_eq!(parse(&["mdlook", "--style", "terminal", "n.md"]).style, "terminal");
        assert_eq!(parse(&["mdlook", "--style=terminal", "n.md"]).style, "terminal");
    }

    #[test]
    fn test_two_positionals_rejected() {
        assert!(Cli::try_parse_from(["mdlook", "a.md", "b.md"]).is_err());
    }

    #[test]
    fn test_list_styles_needs_no_input() {
        let cli = parse(&["mdlook", "--list-styles"]);
        assert!(cli.list_styles);
        assert!(cli.input.is_none());
    }
}
