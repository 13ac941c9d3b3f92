use std::fs;
use std::path::PathBuf;

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

const USER_THEME_APP_DIR: &str = "torus-snake";
const USER_THEME_FILE: &str = "theme.json";

/// Colors applied to all visual elements.
#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub overlay_title: Color,
    pub overlay_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            snake_head: Color::White,
            snake_body: Color::Green,
            food: Color::Red,
            play_bg: Color::Black,
            border_fg: Color::White,
            border_bg: Color::DarkGray,
            overlay_title: Color::Green,
            overlay_text: Color::Gray,
        }
    }
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Returns the platform-correct user theme path, when a config dir exists.
#[must_use]
pub fn user_theme_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(USER_THEME_APP_DIR);
    path.push(USER_THEME_FILE);
    Some(path)
}

/// Loads the user theme, falling back to the built-in default.
///
/// A missing file is the normal first-run case and yields the default
/// silently. An unreadable or malformed file is reported so the caller
/// can warn before entering raw terminal mode.
pub fn load() -> Result<Theme, ThemeError> {
    let Some(path) = user_theme_path() else {
        return Ok(Theme::default());
    };

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Theme::default()),
        Err(e) => return Err(e.into()),
    };

    Ok(parse(&raw)?)
}

fn parse(raw: &str) -> Result<Theme, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::parse;

    #[test]
    fn well_formed_theme_parses() {
        let raw = r##"{
            "snake_head": "#ffffff",
            "snake_body": "cyan",
            "food": "yellow",
            "play_bg": "black",
            "border_fg": "cyan",
            "border_bg": "darkgray",
            "overlay_title": "cyan",
            "overlay_text": "gray"
        }"##;

        let theme = parse(raw).expect("theme should parse");
        assert_eq!(theme.snake_body, Color::Cyan);
        assert_eq!(theme.food, Color::Yellow);
    }

    #[test]
    fn malformed_theme_is_an_error() {
        assert!(parse("not-json").is_err());
        assert!(parse(r#"{"snake_head": "white"}"#).is_err());
    }
}
