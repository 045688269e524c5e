//! About section: personal data, languages, expertise and mission.

use matrixfolio_core::{Palette, Proficiency, Section};
use matrixfolio_effects::VisibilityObserver;
use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};

use super::ViewContext;
use super::widgets::{field, heading, panel, panel_inner, paragraph, reveal, spread};

/// The expertise column appears this long after the personal column.
const SECOND_GROUP_DELAY_MS: u64 = 300;

const LABEL_WIDTH: usize = 10;

const MISSION: &str = "In this digital realm, I architect solutions that bridge the gap between \
    imagination and reality. Every line of code, every pixel, every algorithm serves a purpose \
    in the greater matrix of technological advancement.";

pub fn lines(ctx: &ViewContext<'_>, observer: &VisibilityObserver) -> Vec<Line<'static>> {
    let personal = &ctx.portfolio.personal;
    let inner = panel_inner(ctx.width);

    let data_stream = vec![
        field("name:", &personal.name, LABEL_WIDTH, inner),
        field("role:", &personal.title, LABEL_WIDTH, inner),
        field("org:", &personal.organization, LABEL_WIDTH, inner),
        field("location:", &personal.location, LABEL_WIDTH, inner),
        field("contact:", &personal.phone, LABEL_WIDTH, inner),
    ];

    let languages: Vec<Line<'static>> = ctx
        .portfolio
        .languages
        .iter()
        .map(|lang| {
            let color = match lang.proficiency_class() {
                Proficiency::Native => Palette::NEON,
                Proficiency::Excellent => Palette::MUTED,
                Proficiency::Other => Palette::TERMINAL,
            };
            spread(
                Span::styled(lang.name.clone(), Style::new().fg(Palette::TERMINAL)),
                Span::styled(
                    format!("[{}]", lang.proficiency.to_uppercase()),
                    Style::new().fg(color),
                ),
                inner,
            )
        })
        .collect();

    let mut expertise = Vec::new();
    for (i, area) in ctx.portfolio.experience_areas.iter().enumerate() {
        if i > 0 {
            expertise.push(Line::raw(""));
        }
        expertise.push(Line::from(area.title.to_uppercase().fg(Palette::NEON).bold()));
        expertise.extend(paragraph(&area.description, inner, Palette::TERMINAL));
    }

    let mut mission = paragraph(&format!("\"{MISSION}\""), inner, Palette::TERMINAL);
    mission.push(Line::raw(""));
    mission.push(Line::from(
        format!("- {}, MATRIX PROTOCOL 2.0", personal.name.to_uppercase()).fg(Palette::MUTED),
    ));

    let mut first = panel("DATA_STREAM.txt", data_stream, ctx.width, Palette::DIM);
    first.push(Line::raw(""));
    first.extend(panel("LANGUAGE_PROTOCOLS", languages, ctx.width, Palette::DIM));

    let mut second = panel("EXPERTISE_MATRIX", expertise, ctx.width, Palette::DIM);
    second.push(Line::raw(""));
    second.extend(panel("MISSION_STATEMENT", mission, ctx.width, Palette::DIM));

    let mut lines = heading(Section::About);
    lines.extend(reveal(first, observer.is_visible()));
    lines.push(Line::raw(""));
    lines.extend(reveal(
        second,
        observer.elapsed(ctx.now_ms, SECOND_GROUP_DELAY_MS),
    ));
    lines.push(Line::raw(""));
    lines
}
