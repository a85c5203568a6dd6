use std::fmt;

use aligner::domain::value_objects::Level;
use crossterm::style::{Color, Stylize};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl SemanticColor {
    fn color(self) -> Color {
        match self {
            Self::Success => theme::colors::SUCCESS,
            Self::Error => theme::colors::ERROR,
            Self::Warning => theme::colors::WARNING,
            Self::Info => theme::colors::INFO,
            Self::Dim => theme::colors::DIM,
        }
    }

    /// High severity/effort reads as an error, low as success.
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::High => Self::Error,
            Level::Medium => Self::Warning,
            Level::Low => Self::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    pub fn new(text: impl Into<String>, color: Option<SemanticColor>) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Success))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Error))
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Warning))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Info))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Dim))
    }

    pub fn level(level: Level) -> Self {
        Self::new(level.as_str(), Some(SemanticColor::for_level(level)))
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        match (self.color, self.bold) {
            (None, false) => self.text.clone(),
            (None, true) => format!("{}", self.text.as_str().bold()),
            (Some(color), false) => format!("{}", self.text.as_str().with(color.color())),
            (Some(color), true) => format!("{}", self.text.as_str().with(color.color()).bold()),
        }
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
