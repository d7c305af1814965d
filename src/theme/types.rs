use ratatui::style::Color;
use std::time::Duration;

use crate::state::SortMode;

/// What: User-tunable settings loaded from `settings.conf`.
///
/// Details:
/// - Every field has a default so a missing or partial file still yields a usable value.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Initial Apps page ordering.
    pub sort_mode: SortMode,
    /// Simulated delay before the installed set becomes available, in milliseconds.
    pub initial_load_ms: u64,
    /// How long a notification stays visible, in milliseconds.
    pub toast_ms: u64,
    /// How long the search spinner shows after a keystroke, in milliseconds.
    pub search_debounce_ms: u64,
    /// Number of products shown in the Home page featured section.
    pub featured_count: usize,
    /// Whether the key hints footer is rendered.
    pub show_keybinds_footer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_mode: SortMode::None,
            initial_load_ms: 800,
            toast_ms: 3000,
            search_debounce_ms: 500,
            featured_count: 4,
            show_keybinds_footer: true,
        }
    }
}

impl Settings {
    pub fn initial_load_delay(&self) -> Duration {
        Duration::from_millis(self.initial_load_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Terminal palette used by every view.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub base: Color,
    pub text: Color,
    pub subtext: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub error: Color,
    pub neutral: Color,
    pub star: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Reset,
            text: Color::White,
            subtext: Color::Gray,
            accent: Color::Indexed(99),
            border: Color::DarkGray,
            highlight_bg: Color::Indexed(236),
            success: Color::Green,
            error: Color::Red,
            neutral: Color::Indexed(240),
            star: Color::Yellow,
        }
    }
}
