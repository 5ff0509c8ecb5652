//! TUI View Components
//!
//! One stateless widget per section of the page. Each wraps a ViewModel
//! reference and maps it to terminal cells; sizing is exposed through a
//! `height(model, width)` function so the page can lay the sections out
//! in one scrollable document.

pub mod contact;
pub mod experience;
pub mod filter_tabs;
pub mod hero;
pub mod navbar;
pub mod project_card;
pub mod skills;
pub mod stats;

/// Map an opaque icon token to a glyph. Unknown tokens get a neutral mark.
pub fn icon_glyph(token: &str) -> &'static str {
    match token {
        "bar-chart" => "📊",
        "layout" => "🧩",
        "code" => "💻",
        "terminal" => "🖥",
        "database" => "🗄",
        "spreadsheet" => "📋",
        "mic" => "🎤",
        "mail" => "✉",
        "linkedin" => "💼",
        "github" => "🐙",
        _ => "✦",
    }
}

/// Greedy word wrap by character count. Pre-wrapping keeps the computed
/// section heights in lockstep with what actually gets rendered.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("one two three four five six", 9);
        assert_eq!(lines, vec!["one two", "three", "four five", "six"]);
    }

    #[test]
    fn test_wrap_empty_text_yields_one_blank_line() {
        assert_eq!(wrap("", 20), vec![String::new()]);
    }

    #[test]
    fn test_unknown_icon_token_falls_back() {
        assert_eq!(icon_glyph("no-such-token"), "✦");
    }
}
