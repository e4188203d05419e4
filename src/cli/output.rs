use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use bufy_core::{Notification, NotificationKind};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
    Separator,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    pub plain_mode: bool,
    pub color_disabled: bool,
    pub quiet_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    colored::control::set_override(!prefs.color_disabled);
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn should_skip(kind: MessageKind, prefs: &OutputPreferences) -> bool {
    prefs.quiet_mode && matches!(kind, MessageKind::Separator)
}

fn build_label(kind: MessageKind, plain: bool) -> (&'static str, &'static str) {
    match (kind, plain) {
        (MessageKind::Info, _) => ("INFO", ""),
        (MessageKind::Success, false) => ("SUCCESS", "[✓]"),
        (MessageKind::Success, true) => ("SUCCESS", ""),
        (MessageKind::Warning, false) => ("WARNING", "[!]"),
        (MessageKind::Warning, true) => ("WARNING", ""),
        (MessageKind::Error, false) => ("ERROR", "[x]"),
        (MessageKind::Error, true) => ("ERROR", ""),
        (MessageKind::Section | MessageKind::Separator, _) => ("", ""),
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();

    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Separator => {
            let ch = if prefs.plain_mode { "-" } else { "─" };
            ch.repeat(40)
        }
        MessageKind::Info => text,
        _ => {
            let (label, icon) = build_label(kind, prefs.plain_mode);
            if icon.is_empty() {
                format!("{label}: {text}")
            } else {
                format!("{label}: {icon} {text}")
            }
        }
    };

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Separator | MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current_preferences();
    if should_skip(kind, &prefs) {
        return;
    }
    let formatted = apply_style(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn separator() {
    print(MessageKind::Separator, "");
}

pub fn hint(message: impl fmt::Display) {
    info(format!("Hint: {}", message));
}

/// Prints a view notification the way a toast would read.
pub fn notification(notification: &Notification) {
    match notification.kind {
        NotificationKind::Success => success(&notification.message),
        NotificationKind::Error => error(&notification.message),
    }
}
