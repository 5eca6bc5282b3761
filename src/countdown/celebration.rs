//! Celebration screen shown when the countdown reaches zero.

use console::{measure_text_width, style};

const CAKE_ART: &[&str] = &[
    "🕯️ 🕯️ 🕯️",
    " |  |  |",
    "███████████",
    "█████████████",
    "███████████████",
    "█████████████████",
    "█████████████████",
    "███████████████",
    "█████████████",
    "███████████",
    "🍰🎂🍰",
];

pub const CELEBRATION_TEXT: &str = "🎉 CAKE TIME! 🎉";
pub const CAKE_PANEL_TITLE: &str = "🎂 Your Cake is Ready! 🎂";
pub const SPARKLES: &str = "✨ ⭐ 🌟 ✨ ⭐ 🌟 ✨ ⭐ 🌟 ✨";

/// Returns the ASCII cake, one string per row.
pub fn cake_art() -> &'static [&'static str] {
    CAKE_ART
}

/// Draws `lines` centered inside a rounded box.
///
/// An optional title is embedded in the top border.
pub fn framed(title: Option<&str>, lines: &[&str]) -> Vec<String> {
    let content_width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0);
    let title_width = title.map(|t| measure_text_width(t) + 2).unwrap_or(0);
    let inner = content_width.max(title_width) + 4;

    let mut out = Vec::with_capacity(lines.len() + 2);

    out.push(match title {
        Some(title) => {
            let fill = inner - title_width;
            let left = fill / 2;
            format!(
                "╭{} {} {}╮",
                "─".repeat(left),
                title,
                "─".repeat(fill - left)
            )
        }
        None => format!("╭{}╮", "─".repeat(inner)),
    });

    for line in lines {
        let pad = inner - measure_text_width(line);
        let left = pad / 2;
        out.push(format!(
            "│{}{}{}│",
            " ".repeat(left),
            line,
            " ".repeat(pad - left)
        ));
    }

    out.push(format!("╰{}╯", "─".repeat(inner)));
    out
}

/// Renders the full celebration screen as lines of text.
pub fn render() -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(String::new());
    for line in framed(None, &[CELEBRATION_TEXT]) {
        lines.push(style(line).red().bright().to_string());
    }
    lines.push(String::new());
    for line in framed(Some(CAKE_PANEL_TITLE), cake_art()) {
        lines.push(style(line).cyan().bright().to_string());
    }
    lines.push(String::new());
    lines.push(style(SPARKLES).yellow().bright().to_string());

    lines
}
