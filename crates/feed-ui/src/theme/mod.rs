//! Theme system

use ratatui::prelude::*;

/// Application theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Border color for the selected post
    pub focus_border: Color,
    /// Border color for other posts
    pub unfocus_border: Color,
    /// Author name color
    pub author: Color,
    /// Author role and timestamps
    pub muted: Color,
    /// Link lines
    pub link: Color,
    /// Like counter
    pub like: Color,
    /// Validation message
    pub error: Color,
    /// Title and status bar background
    pub bar_bg: Color,
    /// Title and status bar foreground
    pub bar_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Green,
            unfocus_border: Color::DarkGray,
            author: Color::White,
            muted: Color::Gray,
            link: Color::LightGreen,
            like: Color::Green,
            error: Color::Red,
            bar_bg: Color::DarkGray,
            bar_fg: Color::White,
        }
    }
}

impl Theme {
    /// Theme without colors, for terminals that render them poorly
    pub fn mono() -> Self {
        Self {
            focus_border: Color::Reset,
            unfocus_border: Color::Reset,
            author: Color::Reset,
            muted: Color::Reset,
            link: Color::Reset,
            like: Color::Reset,
            error: Color::Reset,
            bar_bg: Color::Reset,
            bar_fg: Color::Reset,
        }
    }

    /// Look up a theme by config name; unknown names fall back to default
    pub fn from_name(name: &str) -> Self {
        match name {
            "mono" => Self::mono(),
            "default" => Self::default(),
            other => {
                tracing::warn!(theme = other, "unknown theme, using default");
                Self::default()
            }
        }
    }

    /// Style of link lines; underlined so they read as anchors without color
    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("mono"), Theme::mono());
        assert_eq!(Theme::from_name("default"), Theme::default());
        assert_eq!(Theme::from_name("neon"), Theme::default());
    }

    #[test]
    fn test_link_style_underlined() {
        assert!(Theme::mono().link_style().add_modifier.contains(Modifier::UNDERLINED));
    }
}
