use crate::config::{ColorDef, Config};
use crate::tag::Tag;
use ratatui::style::{Color, Style};

impl From<ColorDef> for Color {
    fn from(def: ColorDef) -> Self {
        match def {
            ColorDef::Rgb(r, g, b) => Color::Rgb(r, g, b),
            ColorDef::Named(name) => named_color(&name).unwrap_or_else(|| {
                tracing::warn!("Unknown color {:?}, using white", name);
                Color::White
            }),
        }
    }
}

/// The eight basic terminal colors (any case), or `reset` for the terminal's own
fn named_color(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        _ => return None,
    };
    Some(color)
}

/// Colors for the editor chrome and every tag
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name (e.g., "classic", "dark")
    pub name: String,

    pub editor_bg: Color,

    pub header_fg: Color,
    pub header_bg: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
    pub status_fg: Color,

    // Syntax highlighting colors
    pub syntax_body: Color,
    pub syntax_comment: Color,
    pub syntax_number: Color,
    pub syntax_variable: Color,
    pub syntax_operator: Color,
    pub syntax_keyword: Color,
    pub syntax_string: Color,
    pub syntax_error_fg: Color,
    pub syntax_error_bg: Color,
}

impl Theme {
    /// The eight-color terminal palette
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),

            editor_bg: Color::Black,

            header_fg: Color::White,
            header_bg: Color::Blue,
            footer_fg: Color::White,
            footer_bg: Color::Blue,
            status_fg: Color::Yellow,

            syntax_body: Color::Green,
            syntax_comment: Color::Blue,
            syntax_number: Color::Magenta,
            syntax_variable: Color::White,
            syntax_operator: Color::Red,
            syntax_keyword: Color::Yellow,
            syntax_string: Color::White,
            syntax_error_fg: Color::White,
            syntax_error_bg: Color::Red,
        }
    }

    /// Dark theme (VSCode Dark+ inspired)
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),

            editor_bg: Color::Rgb(30, 30, 30),

            header_fg: Color::Black,
            header_bg: Color::White,
            footer_fg: Color::Black,
            footer_bg: Color::White,
            status_fg: Color::Rgb(220, 220, 170),

            syntax_body: Color::Rgb(212, 212, 212),
            syntax_comment: Color::Rgb(106, 153, 85),
            syntax_number: Color::Rgb(181, 206, 168),
            syntax_variable: Color::Rgb(156, 220, 254),
            syntax_operator: Color::Rgb(212, 212, 212),
            syntax_keyword: Color::Rgb(86, 156, 214),
            syntax_string: Color::Rgb(206, 145, 120),
            syntax_error_fg: Color::White,
            syntax_error_bg: Color::Rgb(60, 20, 20),
        }
    }

    /// Get a builtin theme by name, falling back to classic
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            other => {
                tracing::warn!("Unknown theme {:?}, using classic", other);
                Self::classic()
            }
        }
    }

    /// Builtin theme named by `config`, with its per-tag overrides applied
    pub fn from_config(config: &Config) -> Self {
        let mut theme = Self::from_name(&config.theme);
        for (&tag, color) in &config.syntax {
            theme.set_tag_color(tag, color.clone().into());
        }
        theme
    }

    fn set_tag_color(&mut self, tag: Tag, color: Color) {
        let slot = match tag {
            Tag::Body => &mut self.syntax_body,
            Tag::Comment => &mut self.syntax_comment,
            Tag::Number => &mut self.syntax_number,
            Tag::Variable => &mut self.syntax_variable,
            Tag::Operator => &mut self.syntax_operator,
            Tag::Keyword => &mut self.syntax_keyword,
            Tag::String => &mut self.syntax_string,
            Tag::Error => &mut self.syntax_error_fg,
        };
        *slot = color;
    }

    /// Style for a character carrying `tag`
    pub fn tag_style(&self, tag: Tag) -> Style {
        let fg = match tag {
            Tag::Body => self.syntax_body,
            Tag::Comment => self.syntax_comment,
            Tag::Number => self.syntax_number,
            Tag::Variable => self.syntax_variable,
            Tag::Operator => self.syntax_operator,
            Tag::Keyword => self.syntax_keyword,
            Tag::String => self.syntax_string,
            Tag::Error => return Style::default().fg(self.syntax_error_fg).bg(self.syntax_error_bg),
        };
        Style::default().fg(fg).bg(self.editor_bg)
    }

    pub fn header_style(&self) -> Style {
        Style::default().fg(self.header_fg).bg(self.header_bg)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_fg).bg(self.editor_bg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
