// DiffBoard: a two-pane text comparison board
// The board state lives in `app`; the remaining modules render it, persist
// its settings and drive it from the command line.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod format;
pub mod render;
pub mod storage;
pub mod theme;
pub mod toast;

pub use app::{Comparison, CompareError, CopyTarget, DiffBoardApp, Tab, ViewMode};
pub use config::{AppConfig, Features};
pub use storage::SettingsStore;
pub use theme::Theme;
pub use toast::{Toast, ToastKind};
