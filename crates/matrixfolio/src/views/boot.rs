//! Boot screen: typed status messages over a pulsing binary backdrop.

use matrixfolio_config::Config;
use matrixfolio_core::Palette;
use matrixfolio_effects::{CursorBlink, Typewriter, TypewriterEntry, render_binary_char};
use matrixfolio_fonts::{banner_width, build_banner};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::bar;

const BANNER: &str = "MATRIX";
const PROGRESS_WIDTH: usize = 40;

/// Boot sequence state, owned while the boot screen is shown.
#[derive(Debug, Clone)]
pub struct BootView {
    mounted_at_ms: u64,
    typewriter: Typewriter,
    blink: CursorBlink,
}

impl BootView {
    pub fn new(config: &Config, now_ms: u64) -> Self {
        let entries = config
            .boot
            .messages
            .iter()
            .map(|m| TypewriterEntry::new(m.text.clone(), config.ui.speed.scale(m.hold_ms)))
            .collect();
        let mut typewriter = Typewriter::new(entries, config.boot_char_interval());
        typewriter.start(now_ms);
        Self {
            mounted_at_ms: now_ms,
            typewriter,
            blink: CursorBlink::new(now_ms, config.ui.cursor_blink_ms),
        }
    }

    pub fn advance(&mut self, now_ms: u64) {
        self.typewriter.advance(now_ms);
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    /// Freeze the sequence where it is.
    pub fn stop(&mut self) {
        self.typewriter.cancel();
        self.blink.stop();
    }

    /// Foreground lines, centered by the caller.
    pub fn lines(&self, width: u16, now_ms: u64) -> Vec<Line<'static>> {
        let neon = Style::new().fg(Palette::NEON);
        let mut lines: Vec<Line<'static>> = if usize::from(width) >= banner_width(BANNER) + 4 {
            build_banner(BANNER)
                .into_iter()
                .map(|row| Line::styled(row, neon.bold()))
                .collect()
        } else {
            vec![Line::styled("M A T R I X", neon.bold())]
        };
        lines.push(Line::raw(""));
        lines.push(Line::from("PROTOCOL v2.0".fg(Palette::MUTED)));
        lines.push(Line::raw(""));
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled(self.typewriter.text().to_string(), Style::new().fg(Palette::TERMINAL)),
            Span::styled(self.blink.glyph(now_ms), neon),
        ]));
        lines.push(Line::raw(""));

        let progress = self.typewriter.progress();
        let bar_width = PROGRESS_WIDTH.min(usize::from(width).saturating_sub(4)).max(1);
        lines.push(Line::from(bar(progress, bar_width).fg(Palette::NEON)));
        lines.push(Line::from(
            format!("{:.0}% COMPLETE", progress * 100.0).fg(Palette::MUTED),
        ));
        lines
    }

    pub fn render(&self, frame: &mut Frame, now_ms: u64) {
        let area = frame.area();
        let elapsed = now_ms.saturating_sub(self.mounted_at_ms);
        frame.render_widget(Paragraph::new(backdrop(area, elapsed)), area);

        let lines = self.lines(area.width, now_ms);
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(lines.len() as u16),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
    }
}

fn backdrop(area: Rect, elapsed_ms: u64) -> Vec<Line<'static>> {
    (0..area.height)
        .map(|y| {
            Line::from(
                (0..area.width)
                    .map(|x| render_binary_char(x, y, elapsed_ms))
                    .collect::<Vec<Span>>(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrixfolio_config::BootMessage;
    use ratatui::{Terminal, backend::TestBackend};

    fn config() -> Config {
        let mut config = Config::default();
        config.boot.messages = vec![
            BootMessage {
                text: "WAKE UP".into(),
                hold_ms: 100,
            },
            BootMessage {
                text: "NEO".into(),
                hold_ms: 0,
            },
        ];
        config.boot.char_interval_ms = 10;
        config
    }

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_messages_are_typed_in_order() {
        let mut boot = BootView::new(&config(), 0);
        boot.advance(30);
        assert_eq!(boot.typewriter().text(), "WAKE");
        boot.advance(1000);
        assert!(boot.typewriter().is_done());
        let lines = text(&boot.lines(80, 1000));
        assert!(lines.contains("NEO"));
        assert!(lines.contains("100% COMPLETE"));
    }

    #[test]
    fn test_narrow_banner_fallback() {
        let boot = BootView::new(&config(), 0);
        assert!(text(&boot.lines(20, 0)).contains("M A T R I X"));
        assert_eq!(boot.lines(80, 0).len(), boot.lines(20, 0).len() + 6);
    }

    #[test]
    fn test_render_draws_banner_and_backdrop() {
        let boot = BootView::new(&config(), 0);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| boot.render(frame, 0)).unwrap();
        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("PROTOCOL v2.0"));
        assert!(content.contains('0') || content.contains('1'));
    }
}
