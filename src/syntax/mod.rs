//! Syntax highlighting for technique examples using syntect

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use syntect::highlighting::{
    FontStyle, HighlightState, Highlighter, RangedHighlightIterator, ThemeSet,
};
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};

use crate::theme::Theme;

/// Global syntax set with all default syntaxes
static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Global theme set (only used for its token colors)
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

const DARK_CODE_THEME: &str = "base16-ocean.dark";
const LIGHT_CODE_THEME: &str = "InspiredGitHub";

/// Map language names and aliases to syntect syntax names
fn normalize_language(lang: &str) -> &str {
    match lang.trim().to_lowercase().as_str() {
        "js" | "javascript" | "mjs" => "JavaScript",
        "html" | "htm" => "HTML",
        "css" => "CSS",
        "json" => "JSON",
        _ => lang,
    }
}

/// Find the syntax definition for a given language
fn find_syntax(language: Option<&str>) -> Option<&'static SyntaxReference> {
    let lang = language?;
    let normalized = normalize_language(lang);

    SYNTAX_SET
        .find_syntax_by_name(normalized)
        .or_else(|| SYNTAX_SET.find_syntax_by_extension(lang))
}

fn syntect_to_ratatui_color(color: syntect::highlighting::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Highlight a single line of code and return styled spans.
///
/// Falls back to one span in the theme's code color when the language is
/// unknown or highlighting fails.
pub fn highlight_line(line: &str, language: Option<&str>, theme: &Theme) -> Vec<Span<'static>> {
    let code_theme = if theme.is_dark() { DARK_CODE_THEME } else { LIGHT_CODE_THEME };

    if let (Some(syntax), Some(syntect_theme)) =
        (find_syntax(language), THEME_SET.themes.get(code_theme))
    {
        let highlighter = Highlighter::new(syntect_theme);
        let mut highlight_state = HighlightState::new(&highlighter, ScopeStack::new());
        let mut parse_state = ParseState::new(syntax);

        match parse_state.parse_line(line, &SYNTAX_SET) {
            Ok(ops) => {
                let spans: Vec<Span<'static>> =
                    RangedHighlightIterator::new(&mut highlight_state, &ops, line, &highlighter)
                        .map(|(style, text, _range)| {
                            let mut ratatui_style = Style::default()
                                .fg(syntect_to_ratatui_color(style.foreground))
                                .bg(theme.bg_secondary);
                            if style.font_style.contains(FontStyle::BOLD) {
                                ratatui_style = ratatui_style.add_modifier(Modifier::BOLD);
                            }
                            if style.font_style.contains(FontStyle::ITALIC) {
                                ratatui_style = ratatui_style.add_modifier(Modifier::ITALIC);
                            }
                            Span::styled(text.to_string(), ratatui_style)
                        })
                        .collect();
                if !spans.is_empty() {
                    return spans;
                }
            }
            Err(e) => tracing::warn!(error = %e, "syntax highlighting failed"),
        }
    }

    vec![Span::styled(line.to_string(), Style::default().fg(theme.code).bg(theme.bg_secondary))]
}
