//! mdlook binary: argument handling, I/O and browser launch.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use console::style;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use mdlook::cli::Cli;
use mdlook::preset::{presets, resolve_preset, DEFAULT_PRESET_ID};
use mdlook::render::{assemble_document, derive_title, markdown_to_html};
use mdlook::style::compose_css;
use mdlook::theme::resolve_theme;

/// Env var that suppresses the browser launch when truthy.
const NO_OPEN_ENV: &str = "MDLOOK_NO_OPEN";

/// Env var that switches error reporting to the full chain.
const DEBUG_ENV: &str = "MDLOOK_DEBUG";

/// Output file stem used when the source path has none.
const DEFAULT_OUTPUT_STEM: &str = "preview";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let prefix = style("Error:").red().bold().for_stderr();
            if std::env::var_os(DEBUG_ENV).is_some() {
                eprintln!("{prefix} {err:?}");
            } else {
                eprintln!("{prefix} {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list_styles {
        list_styles();
        return Ok(());
    }

    let input = cli
        .input
        .clone()
        .ok_or_else(|| anyhow!("missing Markdown file argument (usage: mdlook <file.md>)"))?;
    let preset = resolve_preset(&cli.style).ok_or_else(|| {
        anyhow!(
            "unknown style '{}' (use --list-styles to see what is available)",
            cli.style
        )
    })?;
    let preference = cli.preference();

    let source = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    debug!(preset = preset.id, theme = %preference, "rendering {}", input.display());

    let resolved = resolve_theme(preset, preference);
    let css = compose_css(preset, &resolved);
    let body = markdown_to_html(&source);
    let title = derive_title(&source, &input);
    let html = assemble_document(&title, &body, &css, resolved.color_scheme, preset, &source)
        .context("failed to assemble HTML document")?;

    if cli.stdout {
        print!("{html}");
        return Ok(());
    }

    let out_path = write_preview(&input, &html)?;
    println!("{}", out_path.display());

    if cli.no_open || browser_suppressed_by_env() {
        debug!("browser launch suppressed");
        return Ok(());
    }
    // The artifact already exists; a launch failure is only a warning.
    if let Err(err) = open::that(&out_path) {
        let prefix = style("Warning:").yellow().bold().for_stderr();
        eprintln!("{prefix} could not open browser: {err}");
    }
    Ok(())
}

/// Writes the document into a fresh temp directory, named after the
/// source file's stem, and returns the absolute path.
fn write_preview(input: &Path, html: &str) -> Result<PathBuf> {
    let dir = tempfile::Builder::new()
        .prefix("mdlook-")
        .tempdir()
        .context("failed to create temporary directory")?
        .keep();
    let stem = match input.file_stem() {
        Some(stem) if !stem.is_empty() => stem.to_string_lossy().into_owned(),
        _ => DEFAULT_OUTPUT_STEM.to_string(),
    };
    let path = dir.join(format!("{stem}.html"));
    fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Prints every registered preset, one per line.
fn list_styles() {
    println!("Available styles:\n");
    for preset in presets() {
        println!("  {:<12} {:<12} {}", preset.id, preset.label, preset.description);
    }
    println!("\nUse --style <id> to pick one; the default is '{DEFAULT_PRESET_ID}'.");
}

fn browser_suppressed_by_env() -> bool {
    std::env::var(NO_OPEN_ENV)
        .map(|value| env_truthy(&value))
        .unwrap_or(false)
}

/// Treats any non-empty value other than the usual "off" spellings as true.
fn env_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

/// Initializes the tracing subscriber from the `-v` count.
///
/// `RUST_LOG` takes precedence over the derived filter. With no `-v` the
/// subscriber stays uninstalled and logging is a no-op.
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };
    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
