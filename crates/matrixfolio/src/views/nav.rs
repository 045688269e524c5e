//! Navigation bar and key help.

use matrixfolio_core::{Palette, Section};
use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};

/// Label of a section. The hero is labelled with the person's name.
fn label(section: Section, name: &str) -> String {
    match section {
        Section::Hero if !name.trim().is_empty() => name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_uppercase(),
        Section::Hero => "HOME".to_string(),
        Section::About => "ABOUT".to_string(),
        Section::Skills => "SKILLS".to_string(),
        Section::Projects => "PROJECTS".to_string(),
        Section::Contact => "CONTACT".to_string(),
    }
}

/// `root@handle:~$` prompt followed by the numbered section labels.
pub fn bar(name: &str, handle: &str, active: Section, cursor: &'static str) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("root@{handle}:~$"), Style::new().fg(Palette::NEON).bold()),
        Span::styled(cursor, Style::new().fg(Palette::NEON)),
        Span::raw("  "),
    ];
    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == active {
            Style::new().fg(Palette::VOID).bg(Palette::NEON).bold()
        } else {
            Style::new().fg(Palette::MUTED)
        };
        spans.push(Span::styled(format!("[{}]", i + 1), Style::new().fg(Palette::DIM)));
        spans.push(Span::styled(label(*section, name), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Key help for the main view.
pub fn help(modal_open: bool) -> Line<'static> {
    let key = |k: &'static str| k.bold().fg(Palette::NEON);
    let text = |t: &'static str| t.fg(Palette::DIM);
    if modal_open {
        return Line::from(vec![key("esc"), text(" close  "), key("q"), text(" quit")]).centered();
    }
    Line::from(vec![
        key("q"),
        text(" quit  "),
        key("j/k"),
        text(" scroll  "),
        key("1-5"),
        text(" jump  "),
        key("tab"),
        text(" select project  "),
        key("enter"),
        text(" analyze"),
    ])
    .centered()
}
