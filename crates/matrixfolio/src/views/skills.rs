//! Skills section: animated proficiency bars grouped by category.

use matrixfolio_core::{Palette, Section, Skill};
use matrixfolio_effects::VisibilityObserver;
use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};

use super::ViewContext;
use super::widgets::{bar, heading, panel, panel_inner, paragraph, reveal, spread};

/// Time a bar takes to fill to its level.
const FILL_MS: u64 = 1000;
/// Delay between category groups appearing.
const GROUP_STAGGER_MS: u64 = 200;
const SUMMARY_DELAY_MS: u64 = 1000;
const TIERS: u8 = 5;

/// Level shown by a bar that starts filling `delay_ms` after the reveal.
pub fn displayed_level(level: u8, since_reveal_ms: Option<u64>, delay_ms: u64) -> u8 {
    let Some(since) = since_reveal_ms else {
        return 0;
    };
    let progress = (since.saturating_sub(delay_ms) as f32 / FILL_MS as f32).min(1.0);
    (f32::from(level) * progress).round() as u8
}

pub fn lines(
    ctx: &ViewContext<'_>,
    observer: &VisibilityObserver,
    stagger_ms: u64,
) -> Vec<Line<'static>> {
    let inner = usize::from(ctx.width);
    let since = observer.since(ctx.now_ms);
    let groups = ctx.portfolio.skills_by_category();

    let mut lines = heading(Section::Skills);
    let mut index = 0u64;
    for (group_index, group) in groups.iter().enumerate() {
        let mut block = vec![
            Line::from(
                format!("▶▶ {}", group.category.to_uppercase().replace(' ', "_"))
                    .fg(Palette::NEON)
                    .bold(),
            ),
            Line::from("─".repeat(inner).fg(Palette::DIM)),
        ];
        for skill in &group.skills {
            let shown = displayed_level(skill.level, since, index * stagger_ms);
            block.extend(skill_lines(skill, shown, inner));
            index += 1;
        }
        block.push(Line::raw(""));
        lines.extend(reveal(
            block,
            observer.elapsed(ctx.now_ms, group_index as u64 * GROUP_STAGGER_MS),
        ));
    }

    let summary_inner = panel_inner(ctx.width);
    let stat = |label: &str, value: String| {
        spread(
            Span::styled(label.to_string(), Style::new().fg(Palette::MUTED)),
            Span::styled(value, Style::new().fg(Palette::NEON).bold()),
            summary_inner,
        )
    };
    let summary = panel(
        "SYSTEM CAPABILITIES OVERVIEW",
        vec![
            stat("TECHNOLOGIES", ctx.portfolio.skills.len().to_string()),
            stat("DOMAINS", groups.len().to_string()),
            stat(
                "AVG PROFICIENCY",
                format!("{}%", ctx.portfolio.average_skill_level()),
            ),
        ],
        ctx.width,
        Palette::DIM,
    );
    lines.extend(reveal(summary, observer.elapsed(ctx.now_ms, SUMMARY_DELAY_MS)));
    lines.push(Line::raw(""));
    lines
}

fn skill_lines(skill: &Skill, shown: u8, width: usize) -> Vec<Line<'static>> {
    let tier = Skill::level_tier(shown);
    let filled = (shown / 20).min(TIERS);
    let squares: String = (0..TIERS)
        .map(|i| if i < filled { '■' } else { '□' })
        .collect();

    let mut lines = vec![
        spread(
            Span::styled(skill.name.clone(), Style::new().fg(Palette::TERMINAL).bold()),
            Span::styled(format!("{shown}%"), Style::new().fg(Palette::NEON)),
            width,
        ),
        Line::from(bar(f32::from(shown) / 100.0, width).fg(Palette::NEON)),
    ];
    if !skill.details.is_empty() {
        lines.extend(paragraph(&skill.details, width, Palette::MUTED));
    }
    lines.push(Line::from(vec![
        Span::styled(squares, Style::new().fg(Palette::NEON)),
        Span::styled(format!(" LEVEL {tier}"), Style::new().fg(Palette::MUTED)),
    ]));
    lines.push(Line::raw(""));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrixfolio_core::Portfolio;

    fn portfolio() -> Portfolio {
        Portfolio::from_json(
            r#"{ "skills": [
                { "name": "Rust", "category": "Programming Languages", "level": 90 },
                { "name": "KiCad", "category": "Hardware", "level": 50 }
            ] }"#,
        )
        .unwrap()
    }

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_displayed_level() {
        assert_eq!(displayed_level(80, None, 0), 0);
        assert_eq!(displayed_level(80, Some(0), 0), 0);
        assert_eq!(displayed_level(80, Some(500), 0), 40);
        assert_eq!(displayed_level(80, Some(5000), 0), 80);
        // Staggered bars wait for their turn.
        assert_eq!(displayed_level(80, Some(200), 200), 0);
        assert_eq!(displayed_level(80, Some(1200), 200), 80);
    }

    fn level_row(level: u8) -> String {
        let skill = Skill {
            name: "Rust".into(),
            category: "Languages".into(),
            level,
            details: String::new(),
        };
        let lines = skill_lines(&skill, level, 30);
        lines[lines.len() - 2].to_string()
    }

    #[test]
    fn test_level_row_tiers() {
        assert_eq!(level_row(0), "□□□□□ LEVEL 1");
        assert_eq!(level_row(50), "■■□□□ LEVEL 3");
        assert_eq!(level_row(90), "■■■■□ LEVEL 5");
        assert_eq!(level_row(100), "■■■■■ LEVEL 6");
    }

    #[test]
    fn test_bars_fill_after_reveal() {
        let portfolio = portfolio();
        let mut observer = VisibilityObserver::new(0.3);
        let ctx = |now_ms| ViewContext {
            portfolio: &portfolio,
            now_ms,
            width: 40,
            cursor: "▋",
        };

        let hidden = lines(&ctx(0), &observer, 200);
        assert!(!text(&hidden).contains("Rust"));

        observer.observe(Some(1.0), 0);
        let start = text(&lines(&ctx(0), &observer, 200));
        assert!(start.contains("PROGRAMMING_LANGUAGES"));
        assert!(start.contains("0%"));
        assert!(!start.contains("SYSTEM CAPABILITIES OVERVIEW"));

        let done = lines(&ctx(2000), &observer, 200);
        assert_eq!(done.len(), hidden.len());
        let done = text(&done);
        assert!(done.contains("90%"));
        assert!(done.contains("50%"));
        assert!(done.contains("LEVEL 5"));
        assert!(done.contains("AVG PROFICIENCY"));
        assert!(done.contains("70%"));
    }
}
