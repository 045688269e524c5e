//! Contact section: connection details, the access terminal and the footer.

use matrixfolio_core::{Palette, Section};
use matrixfolio_effects::VisibilityObserver;
use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};

use super::ViewContext;
use super::widgets::{
    field, heading, panel, panel_inner, paragraph, prompt, reveal, spread, truncate,
};

const LABEL_WIDTH: usize = 11;

const INIT_LINES: [&str; 3] = [
    "> INITIALIZING SECURE CONNECTION...",
    "> ENCRYPTION PROTOCOLS ACTIVE",
    "> READY FOR DATA TRANSMISSION",
];

pub fn lines(
    ctx: &ViewContext<'_>,
    observer: &VisibilityObserver,
    init_delay_ms: u64,
) -> Vec<Line<'static>> {
    let portfolio = ctx.portfolio;
    let personal = &portfolio.personal;
    let inner = panel_inner(ctx.width);
    let status = |label: &str, value: &str| {
        let room = inner.saturating_sub(label.chars().count() + 1);
        spread(
            Span::styled(label.to_string(), Style::new().fg(Palette::MUTED)),
            Span::styled(truncate(value, room), Style::new().fg(Palette::NEON)),
            inner,
        )
    };

    let direct = vec![
        field("identity:", &personal.name, LABEL_WIDTH, inner),
        field("role:", &personal.title, LABEL_WIDTH, inner),
        field("org:", &personal.organization, LABEL_WIDTH, inner),
        field("location:", &personal.location, LABEL_WIDTH, inner),
        field("phone:", &personal.phone, LABEL_WIDTH, inner),
        Line::raw(""),
        Line::from("SYSTEM STATUS".fg(Palette::NEON).bold()),
        status("● CONNECTION", "ONLINE"),
        status("● RESPONSE TIME", "< 24H"),
        status("● AVAILABILITY", "OPEN"),
    ];

    let mut terminal: Vec<Line<'static>> = reveal(
        INIT_LINES
            .iter()
            .map(|&l| Line::from(l.fg(Palette::MUTED)))
            .collect(),
        observer.elapsed(ctx.now_ms, init_delay_ms),
    );
    terminal.push(Line::raw(""));
    terminal.push(prompt("contact --info"));
    terminal.push(field("phone:", &personal.phone, LABEL_WIDTH, inner));
    terminal.push(field("location:", &personal.location, LABEL_WIDTH, inner));
    terminal.push(Line::raw(""));
    terminal.push(prompt("skills --list"));
    let categories: Vec<&str> = portfolio
        .skills_by_category()
        .iter()
        .map(|g| g.category)
        .collect();
    terminal.extend(paragraph(&categories.join(", "), inner, Palette::TERMINAL));
    terminal.push(Line::raw(""));
    let mut connection = prompt("connection_status");
    connection.push_span(Span::styled(ctx.cursor, Style::new().fg(Palette::NEON)));
    terminal.push(connection);

    let languages: Vec<&str> = portfolio.languages.iter().map(|l| l.name.as_str()).collect();
    let matrix = vec![
        status("PROTOCOL", "DIRECT"),
        status("LANGUAGES", &languages.join(" / ")),
        status("PROJECTS", &portfolio.projects.len().to_string()),
    ];

    let network = paragraph(
        &format!(
            "Node {} is accepting new connections for collaborative projects and research.",
            portfolio.handle()
        ),
        inner,
        Palette::TERMINAL,
    );

    let mut body = panel("DIRECT_CONNECTION", direct, ctx.width, Palette::DIM);
    body.push(Line::raw(""));
    body.extend(panel("ACCESS_TERMINAL", terminal, ctx.width, Palette::DIM));
    body.push(Line::raw(""));
    body.extend(panel("CONNECTION_MATRIX", matrix, ctx.width, Palette::DIM));
    body.push(Line::raw(""));
    body.extend(panel(
        "PROFESSIONAL_NETWORK_STATUS",
        network,
        ctx.width,
        Palette::DIM,
    ));

    let mut lines = heading(Section::Contact);
    lines.extend(reveal(body, observer.is_visible()));
    lines.push(Line::raw(""));
    lines.push(Line::from("─".repeat(usize::from(ctx.width)).fg(Palette::DIM)));
    lines.push(
        Line::from(
            format!("MATRIX PROTOCOL 2.0 - {}", personal.name.to_uppercase()).fg(Palette::MUTED),
        )
        .centered(),
    );
    lines.push(Line::from("[ END OF TRANSMISSION ]".fg(Palette::DIM)).centered());
    lines.push(Line::raw(""));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrixfolio_core::Portfolio;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_init_lines_follow_the_reveal() {
        let portfolio = Portfolio::from_json(
            r#"{
                "personal": { "name": "Morpheus", "phone": "555-0199" },
                "skills": [ { "name": "Rust", "category": "Languages", "level": 80 } ]
            }"#,
        )
        .unwrap();
        let mut observer = VisibilityObserver::new(0.3);
        let ctx = |now_ms| ViewContext {
            portfolio: &portfolio,
            now_ms,
            width: 60,
            cursor: "▋",
        };

        let hidden = text(&lines(&ctx(0), &observer, 500));
        assert!(!hidden.contains("555-0199"));
        // The footer is always there.
        assert!(hidden.contains("END OF TRANSMISSION"));

        observer.observe(Some(0.5), 1000);
        let revealed = text(&lines(&ctx(1499), &observer, 500));
        assert!(revealed.contains("555-0199"));
        assert!(revealed.contains("$ skills --list"));
        assert!(revealed.contains("Languages"));
        assert!(!revealed.contains("INITIALIZING"));

        let later = text(&lines(&ctx(1500), &observer, 500));
        assert!(later.contains("INITIALIZING SECURE CONNECTION"));
    }

    #[test]
    fn test_long_language_list_is_truncated() {
        let portfolio = Portfolio::from_json(
            r#"{ "languages": [
                { "name": "English", "proficiency": "Native" },
                { "name": "Japanese", "proficiency": "Excellent" },
                { "name": "German", "proficiency": "Good" },
                { "name": "Portuguese", "proficiency": "Good" }
            ] }"#,
        )
        .unwrap();
        let mut observer = VisibilityObserver::new(0.3);
        observer.observe(Some(1.0), 0);
        let ctx = ViewContext {
            portfolio: &portfolio,
            now_ms: 1000,
            width: 40,
            cursor: "▋",
        };
        let lines = lines(&ctx, &observer, 500);
        assert!(lines.iter().all(|l| l.width() <= 40), "{lines:?}");
        assert!(text(&lines).contains("English / Japanese"));
        assert!(text(&lines).contains('…'));
    }
}
