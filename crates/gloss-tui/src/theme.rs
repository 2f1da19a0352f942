//! Colour theme for the gloss TUI.
//!
//! Themes are defined as TOML files. The built-in themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk.
//!
//! # Domain badges
//!
//! A domain's badge colour comes from `[domains.colors]`, keyed by the domain
//! slug (lowercased, whitespace runs replaced by `-`, so `"Number Sense"`
//! becomes `number-sense`). Domains without an explicit colour are hashed to a
//! stable index into `[domains] palette`.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use regex::Regex;
use serde::Deserialize;
use std::{collections::HashMap, sync::LazyLock};

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawText {
    title: RawStyle,
    term: RawStyle,
    definition: RawStyle,
    example: RawStyle,
    muted: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawList {
    cursor: RawStyle,
    selected_domain: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawDomains {
    palette: Vec<String>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    text: RawText,
    list: RawList,
    domains: RawDomains,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values, so rendering never parses colours.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    pub border_focused: Style,
    pub border_unfocused: Style,

    pub title: Style,
    pub term: Style,
    pub definition: Style,
    pub example: Style,
    /// Hints, placeholders and secondary text.
    pub muted: Style,

    /// Highlight for the row under the list cursor.
    pub cursor: Style,
    /// Marker style for the domain currently filtering the view.
    pub selected_domain: Style,

    domain_palette: Vec<Color>,
    domain_colors: HashMap<String, Color>,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str("default", DEFAULT_THEME_SRC)
            .expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str("gruvbox", GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a built-in theme by name, falling back to the default for
    /// unknown names.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            "default" => Self::load_default(),
            other => {
                tracing::warn!(theme = other, "unknown theme, using default");
                Self::load_default()
            }
        }
    }

    /// Parse a theme from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(name: &str, src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            name: name.to_string(),
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            title: raw.text.title.into_style(),
            term: raw.text.term.into_style(),
            definition: raw.text.definition.into_style(),
            example: raw.text.example.into_style(),
            muted: raw.text.muted.into_style(),
            cursor: raw.list.cursor.into_style(),
            selected_domain: raw.list.selected_domain.into_style(),
            domain_palette: raw
                .domains
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
            domain_colors: raw
                .domains
                .colors
                .iter()
                .filter_map(|(slug, c)| Some((slug.to_lowercase(), parse_color(c)?)))
                .collect(),
        })
    }

    /// Badge style for a domain label: an explicit colour for its slug, or a
    /// stable palette colour.
    pub fn domain_style(&self, domain: &str) -> Style {
        let base = Style::default().add_modifier(Modifier::BOLD);
        if let Some(color) = self.domain_colors.get(&domain_slug(domain)) {
            return base.fg(*color);
        }
        if self.domain_palette.is_empty() {
            return base;
        }
        let idx = stable_hash(domain) % self.domain_palette.len();
        base.fg(self.domain_palette[idx])
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `"Number  Sense"` → `"number-sense"`.
pub fn domain_slug(domain: &str) -> String {
    WHITESPACE
        .replace_all(&domain.trim().to_lowercase(), "-")
        .into_owned()
}

/// djb2-style hash, stable across Rust versions and process restarts.
fn stable_hash(s: &str) -> usize {
    s.bytes().fold(5381usize, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as usize)
    })
}

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts named terminal colours (case-insensitive), hex `#rrggbb`, and
/// 256-colour `indexed:N`.
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_load() {
        for theme in [Theme::load_default(), Theme::load_gruvbox_dark()] {
            assert_ne!(theme.border_focused, Style::default());
            assert_ne!(theme.cursor, Style::default());
            assert!(!theme.domain_palette.is_empty());
        }
    }

    #[test]
    fn by_name_resolves_aliases() {
        assert_eq!(Theme::by_name("Gruvbox-Dark").name, "gruvbox");
        assert_eq!(Theme::by_name("nope").name, "default");
    }

    #[test]
    fn slug_matches_badge_classes() {
        assert_eq!(domain_slug("Number Sense"), "number-sense");
        assert_eq!(domain_slug("  Statistics &  Probability "), "statistics-&-probability");
        assert_eq!(domain_slug("Algebra"), "algebra");
    }

    #[test]
    fn explicit_domain_colour_wins() {
        let theme = Theme::load_default();
        assert_eq!(theme.domain_style("Geometry").fg, Some(Color::Green));
        assert_eq!(theme.domain_style("Number Sense").fg, Some(Color::Yellow));
    }

    #[test]
    fn palette_colour_is_stable() {
        let theme = Theme::load_default();
        assert_eq!(theme.domain_style("Topology"), theme.domain_style("Topology"));
        assert!(theme.domain_style("Topology").fg.is_some());
    }

    #[test]
    fn parse_hex_and_indexed() {
        assert_eq!(parse_color("#ff0080"), Some(Color::Rgb(255, 0, 128)));
        assert_eq!(parse_color("indexed:42"), Some(Color::Indexed(42)));
        assert_eq!(parse_color("chartreuse"), None);
    }
}
