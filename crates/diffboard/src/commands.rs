//! Subcommand implementations

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, warn};

use crate::app::{DiffBoardApp, ViewMode};
use crate::cli::{CompareArgs, OutputFormat, ThemeArg};
use crate::config::AppConfig;
use crate::format::pretty_json;
use crate::render;
use crate::storage::SettingsStore;
use crate::theme::Theme;
use crate::toast::{self, Toast};

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read a file, or stdin for `-`
fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn open_app(config: AppConfig) -> DiffBoardApp {
    let store = if config.features.theme_persistence {
        config.settings_store()
    } else {
        SettingsStore::in_memory()
    };
    DiffBoardApp::new(config, store)
}

pub fn compare(config: AppConfig, args: CompareArgs) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }
    print!("{}", compare_output(config, &args)?);
    Ok(())
}

/// Run a comparison and build the text `compare` prints
pub fn compare_output(mut config: AppConfig, args: &CompareArgs) -> Result<String> {
    if is_stdin(&args.left) && is_stdin(&args.right) {
        bail!("Only one side can be read from stdin");
    }
    if let Some(ms) = args.timeout_ms {
        config.diff_timeout_ms = Some(ms);
    }

    let mut app = open_app(config);
    app.set_left(&read_input(&args.left)?);
    app.set_right(&read_input(&args.right)?);

    // reformat first so a swap exchanges the formatted texts
    if args.json_mode {
        app.toggle_json_mode();
    }
    if args.swap {
        app.swap()?;
    }

    let outcome = app.compare().map(|_| ());
    toast::report(app.drain_toasts());
    outcome?;

    // compare resets the view mode, so apply the flag afterwards
    if args.diff_only {
        app.set_view_mode(ViewMode::DiffOnly);
    }

    if let Some(target) = args.copy {
        let text = app.copy(target.into());
        toast::report(app.drain_toasts());
        let Some(text) = text else {
            bail!("Copy actions are disabled");
        };
        return Ok(format!("{text}\n"));
    }

    let Some(comparison) = app.comparison() else {
        bail!("Comparison did not produce a result");
    };
    let theme = (!args.no_color).then(|| app.theme());
    debug!("Rendering {:?} output in {:?} mode", args.format, app.view_mode());

    let output = match args.format {
        OutputFormat::Unified => render::unified(&comparison.result, app.view_mode(), theme),
        OutputFormat::SideBySide => {
            render::side_by_side(&comparison.result, app.view_mode(), theme)
        }
        OutputFormat::Stats => format!("{}\n", render::stats_line(&comparison.stats)),
        OutputFormat::Json => format!(
            "{}\n",
            render::json(&comparison.result, &comparison.stats)
                .context("Failed to serialize the comparison")?
        ),
    };
    Ok(output)
}

pub fn format(path: &Path) -> Result<()> {
    let text = read_input(path)?;
    match pretty_json(&text) {
        Ok(pretty) => {
            println!("{pretty}");
            Ok(())
        }
        Err(err) => {
            toast::report([Toast::error("JSON Error", "Invalid JSON format")]);
            Err(err).with_context(|| format!("Could not format {}", path.display()))
        }
    }
}

pub fn theme(config: AppConfig, choice: Option<ThemeArg>) -> Result<()> {
    if choice.is_some() && !config.features.theme_persistence {
        warn!("Theme persistence is disabled; the choice will not be remembered");
    }

    let mut app = open_app(config);
    match choice {
        None => {}
        Some(ThemeArg::Light) => app.set_theme(Theme::Light),
        Some(ThemeArg::Dark) => app.set_theme(Theme::Dark),
        Some(ThemeArg::Toggle) => {
            app.toggle_theme();
        }
    }
    println!("{}", app.theme());
    Ok(())
}

pub fn clear_settings(config: AppConfig) -> Result<()> {
    // open the file store even when theme persistence is off
    let store = config.settings_store();
    if let Some(path) = store.path() {
        debug!("Clearing settings in {}", path.display());
    }

    let mut app = DiffBoardApp::new(config, store);
    app.clear_settings();
    toast::report(app.drain_toasts());
    Ok(())
}
