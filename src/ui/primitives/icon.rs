use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Bullet,
    Analyze,
    Purpose,
    Scan,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Bullet) => theme::icons::BULLET,
            (true, Icon::Analyze) => theme::icons::ANALYZE,
            (true, Icon::Purpose) => theme::icons::PURPOSE,
            (true, Icon::Scan) => theme::icons::SCAN,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Bullet) => theme::icons_ascii::BULLET,
            (false, Icon::Analyze) => theme::icons_ascii::ANALYZE,
            (false, Icon::Purpose) => theme::icons_ascii::PURPOSE,
            (false, Icon::Scan) => theme::icons_ascii::SCAN,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::Bullet => theme::colors::DIM,
            Icon::Analyze | Icon::Purpose | Icon::Scan => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
