//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use tally_core::{
    display::NotificationLine,
    notify::{Notification, Severity},
};
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            // Headers keep their hash marks, so they bypass the skin
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("{}", line.with(Color::Blue));
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
    }

    /// Render a notification with a label colored by its severity
    pub fn notification(&self, notification: &Notification) {
        let line = NotificationLine(notification).to_string();
        if !self.rich_enabled {
            print!("{line}");
            return;
        }
        let color = severity_color(notification.severity);
        println!("{}", line.trim_end().with(color));
    }

    /// Print text verbatim, bypassing markdown styling
    pub fn raw(&self, text: &str) {
        println!("{text}");
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Reminder => Color::Cyan,
        Severity::Info => Color::Blue,
        Severity::Error => Color::Red,
        Severity::Default => Color::Reset,
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
