use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Colours used by the form view. Passed explicitly into every draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub ok: Color,
    pub error: Color,
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: ACCENT,
            border: BORDER,
            text: TEXT,
            muted: MUTED,
            ok: STATUS_OK,
            error: STATUS_ERROR,
            highlight: ACTIVE_HIGHLIGHT,
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn label(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            self.text()
        }
    }

    /// Style of an input box. Error state wins over focus.
    pub fn field(&self, focused: bool, has_error: bool) -> Style {
        match (focused, has_error) {
            (_, true) => Style::default().fg(self.text).bg(self.error),
            (true, false) => Style::default().fg(self.text).bg(self.highlight),
            (false, false) => self.text(),
        }
    }

    pub fn error_text(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn button(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.text)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.accent)
        }
    }
}
