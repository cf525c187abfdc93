use colored::Colorize;
use std::fmt;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
    Heading,
    Caption,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// Disables ANSI styling regardless of the terminal.
    pub plain: bool,
}

fn build_label(kind: MessageKind) -> Option<&'static str> {
    match kind {
        MessageKind::Success => Some("[✓]"),
        MessageKind::Warning => Some("[!]"),
        MessageKind::Error => Some("[x]"),
        _ => None,
    }
}

/// Formats one line of CLI output.
pub fn style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => match build_label(kind) {
            Some(icon) => format!("{icon} {text}"),
            None => text,
        },
    };

    if prefs.plain {
        return base;
    }

    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Heading => base.bright_cyan().bold().to_string(),
        MessageKind::Caption => base.dimmed().to_string(),
        MessageKind::Info => base,
    }
}
