//! Line-building helpers shared by the section views.

use matrixfolio_core::{Palette, Section};
use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
};

/// Section heading: title, rule and spacing.
pub fn heading(section: Section) -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        Line::from(section.heading().fg(Palette::NEON).bold()).centered(),
        Line::from("─".repeat(16).fg(Palette::NEON)).centered(),
        Line::raw(""),
    ]
}

/// Box `body` in a titled frame `width` cells wide.
///
/// Body lines should already fit in `width - 4` cells.
pub fn panel(title: &str, body: Vec<Line<'static>>, width: u16, border: Color) -> Vec<Line<'static>> {
    let width = width.max(8) as usize;
    let inner = width - 4;
    let border = Style::new().fg(border);
    let title = format!(" ▶ {title} ");
    let fill = width.saturating_sub(3 + title.chars().count());

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(Line::from(vec![
        Span::styled("┌─", border),
        Span::styled(title, Style::new().fg(Palette::NEON).bold()),
        Span::styled(format!("{}┐", "─".repeat(fill)), border),
    ]));
    for line in body {
        let pad = inner.saturating_sub(line.width());
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(line.spans);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("└{}┘", "─".repeat(width - 2)),
        border,
    )));
    lines
}

/// Inner width of a [`panel`] that is `width` cells wide.
pub fn panel_inner(width: u16) -> usize {
    width.max(8) as usize - 4
}

/// Greedy word wrap by character count.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);

        // Words longer than a whole line are split hard.
        while current.chars().count() > width {
            let head: String = current.chars().take(width).collect();
            current = current.chars().skip(width).collect();
            lines.push(head);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrapped text as styled lines.
pub fn paragraph(text: &str, width: usize, color: Color) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|line| Line::from(line.fg(color)))
        .collect()
}

/// Cut `text` to at most `width` characters.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// `label:` in muted green followed by a value.
pub fn field(label: &str, value: &str, label_width: usize, width: usize) -> Line<'static> {
    let value_width = width.saturating_sub(label_width);
    Line::from(vec![
        Span::styled(format!("{label:<label_width$}"), Style::new().fg(Palette::MUTED)),
        Span::styled(truncate(value, value_width), Style::new().fg(Palette::TERMINAL)),
    ])
}

/// `left` and `right` pushed to opposite edges of `width` cells.
pub fn spread(left: Span<'static>, right: Span<'static>, width: usize) -> Line<'static> {
    let gap = width.saturating_sub(left.width() + right.width()).max(1);
    Line::from(vec![left, Span::raw(" ".repeat(gap)), right])
}

/// A horizontal bar `width` cells wide, filled to `fraction`.
pub fn bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// A shell prompt line: `$ command`.
pub fn prompt(command: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("$", Style::new().fg(Palette::NEON)),
        Span::styled(format!(" {command}"), Style::new().fg(Palette::TERMINAL)),
    ])
}

/// Replace lines with blanks, keeping the height so the layout stays put.
pub fn conceal(lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    lines.iter().map(|_| Line::raw("")).collect()
}

/// Show `lines` when `visible`, otherwise the same number of blank lines.
pub fn reveal(lines: Vec<Line<'static>>, visible: bool) -> Vec<Line<'static>> {
    if visible { lines } else { conceal(lines) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("the quick brown fox", 9), vec!["the quick", "brown fox"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("a  b", 10), vec!["a b"]);
    }

    #[test]
    fn test_panel_lines_have_panel_width() {
        let body = vec![Line::raw("hello"), Line::raw("")];
        let lines = panel("DATA", body, 30, Palette::DIM);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.width() == 30), "{lines:?}");
        assert!(lines[0].to_string().contains("▶ DATA"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("much too long", 5), "much…");
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(0.5, 4), "██░░");
        assert_eq!(bar(2.0, 3), "███");
        assert_eq!(bar(0.0, 2), "░░");
    }

    #[test]
    fn test_spread() {
        let line = spread(Span::raw("left"), Span::raw("right"), 20);
        assert_eq!(line.width(), 20);
    }

    #[test]
    fn test_reveal_keeps_height() {
        let lines = vec![Line::raw("a"), Line::raw("b")];
        let hidden = reveal(lines.clone(), false);
        assert_eq!(hidden.len(), 2);
        assert_eq!(hidden[0].width(), 0);
        assert_eq!(reveal(lines, true)[1].to_string(), "b");
    }
}
