//! Hero section: typed name and title, then the introduction terminal.

use matrixfolio_core::{Palette, Portfolio};
use matrixfolio_effects::{HeroIntro, HeroTimings};
use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};

use super::ViewContext;
use super::widgets::{panel, panel_inner, paragraph, prompt, reveal};

/// The hero reveal chain plus what it needs to draw.
#[derive(Debug, Clone)]
pub struct HeroView {
    intro: HeroIntro,
}

impl HeroView {
    pub fn new(portfolio: &Portfolio, timings: HeroTimings, mounted_at_ms: u64) -> Self {
        Self {
            intro: HeroIntro::new(
                &portfolio.personal.name,
                &portfolio.personal.title,
                timings,
                mounted_at_ms,
            ),
        }
    }

    pub fn advance(&mut self, now_ms: u64) {
        self.intro.advance(now_ms);
    }

    /// Lines of the hero, at least `viewport_height` tall.
    pub fn lines(&self, ctx: &ViewContext<'_>, viewport_height: u16) -> Vec<Line<'static>> {
        let personal = &ctx.portfolio.personal;
        let visible = self.intro.content_visible();
        let typing_name = self.intro.title().is_empty();

        let mut block = Vec::new();
        block.push(
            Line::from(vec![
                Span::styled(
                    self.intro.name().to_uppercase(),
                    Style::new().fg(Palette::NEON).bold(),
                ),
                Span::styled(ctx.cursor, Style::new().fg(Palette::NEON)),
            ])
            .centered(),
        );
        block.push(
            Line::from(vec![
                Span::styled(self.intro.title().to_string(), Style::new().fg(Palette::MUTED)),
                Span::styled(
                    if typing_name || visible { " " } else { ctx.cursor },
                    Style::new().fg(Palette::MUTED),
                ),
            ])
            .centered(),
        );
        block.push(Line::raw(""));

        let mut details: Vec<Line<'static>> =
            paragraph(
                &format!("{} - {}", personal.organization, personal.description),
                usize::from(ctx.width),
                Palette::TERMINAL,
            )
            .into_iter()
            .map(Line::centered)
            .collect();
        details.push(Line::raw(""));
        details.extend(self.terminal(ctx));
        block.extend(reveal(details, visible));

        let indicator = reveal(
            vec![
                Line::from("↓".fg(Palette::NEON)).centered(),
                Line::from("SCROLL TO EXPLORE".fg(Palette::MUTED)).centered(),
            ],
            visible,
        );

        let height = usize::from(viewport_height).max(block.len() + indicator.len() + 2);
        let top = (height - block.len() - indicator.len()) / 2;
        let mut lines = vec![Line::raw(""); top];
        lines.extend(block);
        while lines.len() + indicator.len() < height {
            lines.push(Line::raw(""));
        }
        lines.extend(indicator);
        lines
    }

    fn terminal(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let personal = &ctx.portfolio.personal;
        let inner = panel_inner(ctx.width);
        let mut body = vec![prompt("whoami")];
        body.extend(paragraph(&personal.bio, inner, Palette::TERMINAL));
        body.push(Line::raw(""));
        body.push(prompt("locate --user"));
        body.extend(paragraph(&personal.location, inner, Palette::TERMINAL));
        body.push(Line::raw(""));
        let mut explore = prompt("explore_portfolio");
        explore.push_span(Span::styled(ctx.cursor, Style::new().fg(Palette::NEON)));
        body.push(explore);

        panel(
            &format!("terminal@{}-protocol", ctx.portfolio.handle()),
            body,
            ctx.width,
            Palette::DIM,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> Portfolio {
        Portfolio::from_json(
            r#"{ "personal": {
                "name": "AB", "title": "C", "organization": "Zion",
                "description": "Operator", "bio": "Follow the white rabbit.",
                "location": "Nebuchadnezzar"
            } }"#,
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

    fn timings() -> HeroTimings {
        HeroTimings {
            start_delay_ms: 0,
            ..HeroTimings::default()
        }
    }

    #[test]
    fn test_fills_the_viewport() {
        let portfolio = portfolio();
        let view = HeroView::new(&portfolio, timings(), 0);
        let ctx = ViewContext {
            portfolio: &portfolio,
            now_ms: 0,
            width: 60,
            cursor: "▋",
        };
        assert_eq!(view.lines(&ctx, 40).len(), 40);
        // A tiny viewport still fits the whole hero.
        assert!(view.lines(&ctx, 3).len() > 3);
    }

    #[test]
    fn test_long_values_stay_inside_the_panel() {
        let mut portfolio = portfolio();
        portfolio.personal.location =
            "Level 3, Dock 7, Zion Underground Hangar, Deep Earth".into();
        let mut view = HeroView::new(&portfolio, timings(), 0);
        view.advance(10_000);
        let ctx = ViewContext {
            portfolio: &portfolio,
            now_ms: 10_000,
            width: 30,
            cursor: "▋",
        };
        let lines = view.lines(&ctx, 40);
        assert!(text(&lines).contains("Underground"));
        assert!(lines.iter().all(|l| l.width() <= 30), "{lines:?}");
    }

    #[test]
    fn test_terminal_waits_for_the_title() {
        let portfolio = portfolio();
        let mut view = HeroView::new(&portfolio, timings(), 0);
        let ctx = ViewContext {
            portfolio: &portfolio,
            now_ms: 0,
            width: 60,
            cursor: "▋",
        };

        view.advance(779);
        let before = view.lines(&ctx, 40);
        assert!(text(&before).contains("AB"));
        assert!(!text(&before).contains("whoami"));
        assert!(!text(&before).contains("SCROLL TO EXPLORE"));

        view.advance(780);
        let after = view.lines(&ctx, 40);
        // The name keeps its cursor after the title is done.
        assert!(text(&after).contains("AB▋"));
        assert_eq!(after.len(), before.len());
        assert!(text(&after).contains("$ whoami"));
        assert!(text(&after).contains("terminal@ab-protocol"));
        assert!(text(&after).contains("Zion - Operator"));
        assert!(text(&after).contains("SCROLL TO EXPLORE"));
    }
}
