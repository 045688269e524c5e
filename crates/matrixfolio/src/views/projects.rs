//! Projects section: selectable cards, archive stats and the analysis modal.

use matrixfolio_core::{Palette, Portfolio, Project, Section};
use matrixfolio_effects::VisibilityObserver;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use super::ViewContext;
use super::widgets::{field, heading, panel, panel_inner, paragraph, reveal, spread, wrap};

const CARD_STAGGER_MS: u64 = 200;
const STATS_DELAY_MS: u64 = 1000;
const MODAL_MAX_WIDTH: u16 = 72;

/// Rendered projects section.
#[derive(Debug, Default)]
pub struct ProjectsLayout {
    pub lines: Vec<Line<'static>>,
    /// Top line and height of each card, relative to the section.
    pub cards: Vec<(u32, u32)>,
}

pub fn layout(
    ctx: &ViewContext<'_>,
    observer: &VisibilityObserver,
    selected: usize,
) -> ProjectsLayout {
    let mut lines = heading(Section::Projects);
    let mut cards = Vec::with_capacity(ctx.portfolio.projects.len());

    for (i, project) in ctx.portfolio.projects.iter().enumerate() {
        let card = card(project, i == selected, ctx.width);
        cards.push((lines.len() as u32, card.len() as u32));
        lines.extend(reveal(
            card,
            observer.elapsed(ctx.now_ms, i as u64 * CARD_STAGGER_MS),
        ));
        lines.push(Line::raw(""));
    }

    lines.extend(reveal(
        stats(ctx.portfolio, ctx.width),
        observer.elapsed(ctx.now_ms, STATS_DELAY_MS),
    ));
    lines.push(Line::raw(""));
    ProjectsLayout { lines, cards }
}

fn card(project: &Project, selected: bool, width: u16) -> Vec<Line<'static>> {
    let inner = panel_inner(width);
    let mut body = vec![Line::from(Span::styled(
        format!("[{}]", project.category.to_uppercase()),
        Style::new().fg(Palette::category(&project.category)).bold(),
    ))];
    if let Some(image) = &project.image {
        body.push(field("PROJECT_IMAGE:", image, 15, inner));
    }
    body.push(Line::raw(""));
    body.extend(paragraph(&project.description, inner, Palette::TERMINAL));
    body.push(Line::raw(""));
    body.push(Line::from("TECHNOLOGIES:".fg(Palette::MUTED)));
    body.extend(paragraph(&tags(&project.technologies), inner, Palette::NEON));
    body.push(Line::raw(""));
    body.push(spread(
        Span::styled("ENTER TO ANALYZE", Style::new().fg(Palette::MUTED)),
        if selected {
            Span::styled("◀ SELECTED", Style::new().fg(Palette::NEON).bold())
        } else {
            Span::raw("")
        },
        inner,
    ));

    let border = if selected { Palette::NEON } else { Palette::DIM };
    panel(&project.name.to_uppercase(), body, width, border)
}

fn tags(technologies: &[String]) -> String {
    technologies
        .iter()
        .map(|t| format!("[{t}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn category_count(portfolio: &Portfolio, category: &str) -> usize {
    portfolio
        .projects
        .iter()
        .filter(|p| p.category == category)
        .count()
}

fn stats(portfolio: &Portfolio, width: u16) -> Vec<Line<'static>> {
    let inner = panel_inner(width);
    let stat = |label: &str, value: usize| {
        spread(
            Span::styled(label.to_string(), Style::new().fg(Palette::MUTED)),
            Span::styled(value.to_string(), Style::new().fg(Palette::NEON).bold()),
            inner,
        )
    };
    panel(
        "ARCHIVE_STATISTICS",
        vec![
            stat("TOTAL PROJECTS", portfolio.projects.len()),
            stat("HARDWARE SYSTEMS", portfolio.hardware_project_count()),
            stat("ROBOTICS SYSTEMS", category_count(portfolio, "Robotics")),
            stat("WEB APPLICATIONS", category_count(portfolio, "Web Development")),
        ],
        width,
        Palette::DIM,
    )
}

/// Body of the analysis modal, wrapped to `width`.
pub fn modal_lines(project: &Project, code_host: &str, width: usize) -> Vec<Line<'static>> {
    let label = |text: &str| Line::from(text.to_string().fg(Palette::MUTED));

    let mut lines = vec![
        label("TYPE:"),
        Line::from(Span::styled(
            project.category.clone(),
            Style::new().fg(Palette::category(&project.category)).bold(),
        )),
        Line::raw(""),
        label("DESCRIPTION:"),
    ];
    lines.extend(paragraph(&project.description, width, Palette::TERMINAL));
    lines.push(Line::raw(""));
    lines.push(label("TECHNOLOGIES:"));
    lines.extend(paragraph(&tags(&project.technologies), width, Palette::NEON));
    if let Some(image) = &project.image {
        lines.push(Line::raw(""));
        lines.push(label("IMAGE_PATH:"));
        lines.extend(paragraph(image, width, Palette::TERMINAL));
    }
    if let Some(url) = project.repository_url(code_host) {
        lines.push(Line::raw(""));
        lines.push(label("REPOSITORY ACCESS:"));
        lines.extend(
            wrap(&url, width)
                .into_iter()
                .map(|l| Line::from(l.fg(Palette::NEON).underlined())),
        );
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(
        "STATUS: ANALYSIS COMPLETE | ESC TO CLOSE".fg(Palette::DIM),
    ));
    lines
}

/// Draw the analysis modal for `project` centred over `area`.
pub fn render_modal(frame: &mut Frame, area: Rect, project: &Project, code_host: &str) {
    let width = MODAL_MAX_WIDTH.min(area.width.saturating_sub(4)).max(10);
    let body = modal_lines(project, code_host, usize::from(width - 4));
    let height = (body.len() as u16 + 2).min(area.height);

    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);

    let block = Block::bordered()
        .border_style(Style::new().fg(Palette::NEON))
        .title(Line::from(
            format!(" {} - ANALYSIS ", project.name.to_uppercase())
                .fg(Palette::NEON)
                .bold(),
        ))
        .title(Line::from("[ X ]".fg(Palette::MUTED)).right_aligned())
        .style(Style::new().bg(Palette::VOID));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(body)
            .block(block)
            .style(Style::new().bg(Palette::VOID)),
        area,
    );
}
