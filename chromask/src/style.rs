//! ANSI styling for console messages.

/// Terminal text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Purple,
    Cyan,
    DarkCyan,
    Blue,
    Green,
    Yellow,
    Red,
    Bold,
    Underline,
}

/// Resets all styles.
pub const RESET: &str = "\x1b[0m";

impl Style {
    /// ANSI escape sequence enabling this style.
    pub fn code(self) -> &'static str {
        match self {
            Style::Purple => "\x1b[95m",
            Style::Cyan => "\x1b[96m",
            Style::DarkCyan => "\x1b[36m",
            Style::Blue => "\x1b[94m",
            Style::Green => "\x1b[92m",
            Style::Yellow => "\x1b[93m",
            Style::Red => "\x1b[91m",
            Style::Bold => "\x1b[1m",
            Style::Underline => "\x1b[4m",
        }
    }
}

/// Wrap `message` in the given styles, applied in order, followed by [`RESET`].
pub fn format_message(message: &str, styles: &[Style]) -> String {
    let prefix_len: usize = styles.iter().map(|s| s.code().len()).sum();
    let mut out = String::with_capacity(prefix_len + message.len() + RESET.len());
    for style in styles {
        out.push_str(style.code());
    }
    out.push_str(message);
    out.push_str(RESET);
    out
}
