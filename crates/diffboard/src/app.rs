use log::{debug, info};
use ropey::Rope;
use serde::{Deserialize, Serialize};

use line_diff::{Context, DiffResult, DiffStats, DEFAULT_NEW_LABEL, DEFAULT_OLD_LABEL};

use crate::config::AppConfig;
use crate::format::pretty_json;
use crate::storage::SettingsStore;
use crate::theme::Theme;
use crate::toast::Toast;

/// Unchanged lines shown around each change in diff-only mode
pub const DIFF_ONLY_CONTEXT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Editors,
    Diff,
}

/// Which unchanged lines the diff view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Every line of both sides
    #[default]
    ShowAll,
    /// Only changes and a few lines around them
    DiffOnly,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::ShowAll => ViewMode::DiffOnly,
            ViewMode::DiffOnly => ViewMode::ShowAll,
        }
    }

    /// Patch context matching this view
    pub fn context(self) -> Context {
        match self {
            ViewMode::ShowAll => Context::Full,
            ViewMode::DiffOnly => Context::Lines(DIFF_ONLY_CONTEXT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    #[error("Both editors are empty")]
    NothingToCompare,
}

/// Something the user can copy out of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Left,
    Right,
    Patch,
    Added,
    Removed,
}

/// The outcome of the last successful comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub result: DiffResult,
    pub stats: DiffStats,

    /// Full-context unified patch with the default labels
    pub patch: String,
}

pub struct DiffBoardApp {
    config: AppConfig,
    store: SettingsStore,

    /// Left editor, the old side of the diff
    left: Rope,

    /// Right editor, the new side of the diff
    right: Rope,

    theme: Theme,
    tab: Tab,

    /// The diff tab stays disabled until something has been compared
    diff_tab_enabled: bool,

    view_mode: ViewMode,
    json_mode: bool,
    comparison: Option<Comparison>,

    /// Notifications not yet shown
    toasts: Vec<Toast>,
}

impl DiffBoardApp {
    pub fn new(config: AppConfig, store: SettingsStore) -> Self {
        let theme = if config.features.theme_persistence {
            Theme::load(&store)
        } else {
            Theme::default()
        };
        debug!("Starting board with {} theme", theme);

        Self {
            view_mode: config.view_mode,
            config,
            store,
            left: Rope::new(),
            right: Rope::new(),
            theme,
            tab: Tab::Editors,
            diff_tab_enabled: false,
            json_mode: false,
            comparison: None,
            toasts: Vec::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn set_left(&mut self, text: &str) {
        self.left = Rope::from_str(text);
    }

    pub fn set_right(&mut self, text: &str) {
        self.right = Rope::from_str(text);
    }

    pub fn left_text(&self) -> String {
        self.left.to_string()
    }

    pub fn right_text(&self) -> String {
        self.right.to_string()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn is_diff_tab_enabled(&self) -> bool {
        self.diff_tab_enabled
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn json_mode(&self) -> bool {
        self.json_mode
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }

    /// Notifications queued since the last drain
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// Diff the left editor against the right one.
    ///
    /// Both sides are trimmed first. The whole file is kept as context so
    /// the stored patch can be shown in either view mode.
    pub fn compare(&mut self) -> Result<&Comparison, CompareError> {
        let left = self.left.to_string();
        let right = self.right.to_string();
        let (left, right) = (left.trim(), right.trim());

        if left.is_empty() && right.is_empty() {
            self.toasts
                .push(Toast::error("Nothing to Compare", "Both editors are empty"));
            return Err(CompareError::NothingToCompare);
        }

        let diff_config = self
            .config
            .diff_config()
            .labels(DEFAULT_OLD_LABEL, DEFAULT_NEW_LABEL)
            .context(Context::Full);
        let result = diff_config.diff(left, right);
        let stats = DiffStats::from_result(&result);
        let patch = diff_config.render(&result);
        info!(
            "Compared {} against {} lines: {}",
            result.old_line_count(),
            result.new_line_count(),
            stats
        );

        self.view_mode = self.config.view_mode;
        self.diff_tab_enabled = true;
        self.tab = Tab::Diff;
        self.toasts
            .push(Toast::success("Comparison Complete", "Diff generated successfully"));

        Ok(&*self.comparison.insert(Comparison {
            result,
            stats,
            patch,
        }))
    }

    /// Exchange the two editors, refreshing an existing comparison when the
    /// merge view is enabled
    pub fn swap(&mut self) -> Result<(), CompareError> {
        std::mem::swap(&mut self.left, &mut self.right);
        self.toasts.push(Toast::success(
            "Editors swapped",
            "The content has been swapped between editors",
        ));

        if self.config.features.merge_view && self.comparison.is_some() {
            debug!("Re-running comparison after swap");
            self.compare()?;
        }
        Ok(())
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        debug!("View mode is now {:?}", self.view_mode);
        self.view_mode
    }

    /// Switch tabs; the diff tab cannot be opened before the first comparison
    pub fn switch_tab(&mut self, tab: Tab) -> bool {
        if tab == Tab::Diff && !self.diff_tab_enabled {
            debug!("Diff tab is disabled until something is compared");
            return false;
        }
        self.tab = tab;
        true
    }

    /// Empty both editors and forget the comparison
    pub fn clear(&mut self) {
        self.left = Rope::new();
        self.right = Rope::new();
        self.comparison = None;
        self.diff_tab_enabled = false;
        self.tab = Tab::Editors;
        self.toasts.push(Toast::info("Cleared", "Editors & diff reset"));
    }

    /// Enter or leave JSON mode.
    ///
    /// Entering reformats every non-blank editor as indented JSON. If either
    /// side does not parse, both are left untouched and an error is queued;
    /// the mode still switches.
    pub fn toggle_json_mode(&mut self) -> bool {
        if !self.config.features.json_mode {
            debug!("JSON mode is disabled by configuration");
            return self.json_mode;
        }

        self.json_mode = !self.json_mode;
        if !self.json_mode {
            self.toasts.push(Toast::info("JSON Mode", "Exited JSON mode"));
            return false;
        }

        match (format_json_side(&self.left), format_json_side(&self.right)) {
            (Ok(left), Ok(right)) => {
                if let Some(left) = left {
                    self.left = Rope::from_str(&left);
                }
                if let Some(right) = right {
                    self.right = Rope::from_str(&right);
                }
                self.toasts
                    .push(Toast::success("JSON Mode", "Editors formatted as JSON"));
            }
            (Err(err), _) | (_, Err(err)) => {
                debug!("JSON mode could not format editors: {}", err);
                self.toasts.push(Toast::error("JSON Error", "Invalid JSON format"));
            }
        }
        true
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if self.config.features.theme_persistence {
            theme.save(&mut self.store);
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    /// Remove every persisted setting and fall back to the default theme
    pub fn clear_settings(&mut self) {
        self.store.clear();
        self.theme = Theme::default();
        self.toasts.push(Toast::info("Cleared", "Saved settings removed"));
    }

    /// Text for the clipboard, or `None` when copy actions are disabled
    pub fn copy(&mut self, target: CopyTarget) -> Option<String> {
        if !self.config.features.copy_actions {
            debug!("Copy actions are disabled by configuration");
            return None;
        }

        let comparison = self.comparison.as_ref();
        let (text, message) = match target {
            CopyTarget::Left => (self.left.to_string(), "Left editor copied"),
            CopyTarget::Right => (self.right.to_string(), "Right editor copied"),
            CopyTarget::Patch => (
                comparison.map(|c| c.patch.clone()).unwrap_or_default(),
                "Full diff copied",
            ),
            CopyTarget::Added => (
                non_empty_or(
                    comparison.map(|c| c.result.added_text()),
                    "No added lines",
                ),
                "Added (+) lines copied",
            ),
            CopyTarget::Removed => (
                non_empty_or(
                    comparison.map(|c| c.result.removed_text()),
                    "No removed lines",
                ),
                "Removed (-) lines copied",
            ),
        };

        self.toasts.push(Toast::success("Copied", message));
        Some(text)
    }
}

fn format_json_side(side: &Rope) -> serde_json::Result<Option<String>> {
    let text = side.to_string();
    if text.trim().is_empty() {
        return Ok(None);
    }
    pretty_json(&text).map(Some)
}

fn non_empty_or(text: Option<String>, fallback: &str) -> String {
    match text {
        Some(text) if !text.is_empty() => text,
        _ => fallback.to_string(),
    }
}
