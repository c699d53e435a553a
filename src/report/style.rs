//! Terminal styling capability used by the shell renderer.

/// Text styles the shell report applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Underline,
    Yellow,
    Grey,
    Red,
    Green,
}

impl Style {
    /// Style for a delta: red when it grew, green when it shrank, none when unchanged.
    pub fn for_delta(delta: f64) -> Option<Style> {
        if delta > 0.0 {
            Some(Style::Red)
        } else if delta < 0.0 {
            Some(Style::Green)
        } else {
            None
        }
    }

    fn ansi_codes(self) -> (&'static str, &'static str) {
        match self {
            Style::Bold => ("\x1b[1m", "\x1b[22m"),
            Style::Underline => ("\x1b[4m", "\x1b[24m"),
            Style::Yellow => ("\x1b[33m", "\x1b[39m"),
            Style::Grey => ("\x1b[90m", "\x1b[39m"),
            Style::Red => ("\x1b[31m", "\x1b[39m"),
            Style::Green => ("\x1b[32m", "\x1b[39m"),
        }
    }
}

/// Applies a style to a piece of text.
pub trait Paint {
    fn paint(&self, text: &str, style: Style) -> String;

    /// Apply several styles, innermost first.
    fn paint_all(&self, text: &str, styles: &[Style]) -> String {
        styles
            .iter()
            .fold(text.to_string(), |acc, style| self.paint(&acc, *style))
    }

    fn paint_opt(&self, text: &str, style: Option<Style>) -> String {
        match style {
            Some(style) => self.paint(text, style),
            None => text.to_string(),
        }
    }
}

/// ANSI escape sequences, for terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

impl Paint for Ansi {
    fn paint(&self, text: &str, style: Style) -> String {
        if text.is_empty() {
            return String::new();
        }
        let (open, close) = style.ansi_codes();
        format!("{open}{text}{close}")
    }
}

/// No styling, for files and logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Paint for Plain {
    fn paint(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}
