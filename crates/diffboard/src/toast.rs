//! Short user-facing notifications raised by the app

use colored::Colorize;
use derive_more::Display;
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ToastKind {
    #[display(fmt = "success")]
    Success,
    #[display(fmt = "error")]
    Error,
    #[display(fmt = "info")]
    Info,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
            ToastKind::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{} {}: {}", "kind.icon()", title, message)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(title: impl Into<String>, message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ToastKind::Success)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ToastKind::Error)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ToastKind::Info)
    }
}

/// Print toasts to stderr and record them in the log
pub fn report(toasts: impl IntoIterator<Item = Toast>) {
    for toast in toasts {
        match toast.kind {
            ToastKind::Error => {
                warn!("{}: {}", toast.title, toast.message);
                eprintln!("{}", toast.to_string().red());
            }
            ToastKind::Success => {
                info!("{}: {}", toast.title, toast.message);
                eprintln!("{}", toast.to_string().green());
            }
            ToastKind::Info => {
                info!("{}: {}", toast.title, toast.message);
                eprintln!("{}", toast.to_string().blue());
            }
        }
    }
}
