use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use matrixfolio_config::{Config, UiConfig};
use matrixfolio_core::{Portfolio, Section};
use matrixfolio_effects::{CursorBlink, DigitalRain, HeroTimings, RainSettings};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Flex, Layout},
    text::Line,
    widgets::Paragraph,
};

use crate::content::{ContentLoader, ContentSource};
use crate::page::Page;
use crate::views::{
    ViewContext, about, boot::BootView, contact, hero::HeroView, nav, projects, skills,
};

/// Upper bound on the event poll timeout.
const MAX_POLL: Duration = Duration::from_millis(50);
/// Widest the content column gets.
const MAX_CONTENT_WIDTH: u16 = 96;
/// Lines moved per scroll key press.
const SCROLL_STEP: i32 = 2;

/// What is on screen.
#[derive(Debug)]
enum Screen {
    Boot(BootView),
    Main(Box<MainView>),
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Origin of the monotonic clock every effect runs on.
    started: Instant,
    loader: ContentLoader,
    /// Content that arrived before the boot screen was allowed to end.
    loaded: Option<Portfolio>,
    screen: Screen,
}

impl App {
    /// Construct a new instance of [`App`] and start loading content.
    pub fn new(config: Config) -> Self {
        let loader = ContentLoader::spawn(ContentSource::parse(&config.content.source));
        let screen = Screen::Boot(BootView::new(&config, 0));
        Self {
            running: false,
            config,
            started: Instant::now(),
            loader,
            loaded: None,
            screen,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let now = self.now_ms();
            self.tick(now);
            terminal.draw(|frame| self.render(frame, now))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Collect loaded content and leave the boot screen once it may end.
    fn tick(&mut self, now_ms: u64) {
        let Screen::Boot(boot) = &mut self.screen else {
            return;
        };
        boot.advance(now_ms);

        if self.loader.is_pending()
            && let Some(result) = self.loader.poll()
        {
            match result {
                Ok(portfolio) => {
                    tracing::info!(
                        name = %portfolio.personal.name,
                        projects = portfolio.projects.len(),
                        skills = portfolio.skills.len(),
                        "portfolio content loaded"
                    );
                    self.loaded = Some(portfolio);
                }
                Err(e) => tracing::error!(error = %e, "failed to load portfolio content"),
            }
        }

        if now_ms < self.config.boot.min_duration_ms {
            return;
        }
        if let Some(portfolio) = self.loaded.take() {
            boot.stop();
            tracing::info!(
                at_ms = now_ms,
                messages_shown = boot.typewriter().index() + 1,
                "boot complete"
            );
            self.screen = Screen::Main(Box::new(MainView::new(portfolio, &self.config, now_ms)));
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame, now_ms: u64) {
        match &mut self.screen {
            Screen::Boot(boot) => boot.render(frame, now_ms),
            Screen::Main(main) => main.render(frame, now_ms),
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.poll_timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Wait no longer than the next rain frame.
    fn poll_timeout(&self) -> Duration {
        let Screen::Main(main) = &self.screen else {
            return MAX_POLL;
        };
        main.rain
            .as_ref()
            .and_then(|rain| rain.until_next(self.now_ms()))
            .map(|ms| Duration::from_millis(ms.max(1)).min(MAX_POLL))
            .unwrap_or(MAX_POLL)
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('q')) => self.quit(),
            (_, KeyCode::Esc) => {
                if let Screen::Main(main) = &mut self.screen
                    && main.modal_open
                {
                    main.modal_open = false;
                    return;
                }
                self.quit();
            }
            _ => {
                if let Screen::Main(main) = &mut self.screen {
                    main.on_key_event(key);
                }
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// The scrolling portfolio page and everything drawn over it.
#[derive(Debug)]
struct MainView {
    portfolio: Portfolio,
    ui: UiConfig,
    code_host: String,
    mounted_at_ms: u64,
    hero: HeroView,
    page: Page,
    rain: Option<DigitalRain>,
    blink: CursorBlink,
    /// Focused project card.
    selected: usize,
    modal_open: bool,
    /// Absolute top line and height of each project card.
    cards: Vec<(u32, u32)>,
}

impl MainView {
    fn new(portfolio: Portfolio, config: &Config, now_ms: u64) -> Self {
        let hero = config.hero_timings();
        let timings = HeroTimings {
            start_delay_ms: hero.start_delay_ms,
            name_interval_ms: hero.name_interval_ms,
            title_pause_ms: hero.title_pause_ms,
            title_interval_ms: hero.title_interval_ms,
        };
        let rain = config.rain.enabled.then(|| {
            let settings = RainSettings {
                glyph_width: config.rain.glyph_width,
                glyph_height: config.rain.glyph_height,
                reset_chance: config.rain.reset_chance,
                fade: config.rain.fade,
                min_opacity: config.rain.min_opacity,
            };
            DigitalRain::new(settings, config.rain_tick())
        });

        Self {
            hero: HeroView::new(&portfolio, timings, now_ms),
            portfolio,
            ui: config.ui,
            code_host: config.content.code_host.clone(),
            mounted_at_ms: now_ms,
            page: Page::new(config.ui.reveal_threshold),
            rain,
            blink: CursorBlink::new(now_ms, config.ui.cursor_blink_ms),
            selected: 0,
            modal_open: false,
            cards: Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, now_ms: u64) {
        if let Some(rain) = &mut self.rain {
            rain.render(frame, now_ms);
        }
        self.hero.advance(now_ms);

        let [nav_area, body, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let width = body.width.saturating_sub(2).min(MAX_CONTENT_WIDTH);
        let [content] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(body);

        let mut sections = self.sections(now_ms, content.width, content.height);
        let heights = sections.each_ref().map(|lines| lines.len() as u32);
        self.page.layout(heights, u32::from(content.height));
        if self.page.observe(now_ms) {
            sections = self.sections(now_ms, content.width, content.height);
        }

        let visible: Vec<Line> = sections
            .into_iter()
            .flatten()
            .skip(self.page.scroll() as usize)
            .take(usize::from(content.height))
            .collect();
        frame.render_widget(Paragraph::new(visible), content);

        if now_ms >= self.mounted_at_ms + self.ui.nav_delay_ms {
            let bar = nav::bar(
                &self.portfolio.personal.name,
                &self.portfolio.handle(),
                self.page.active_section(),
                self.blink.glyph(now_ms),
            );
            frame.render_widget(bar, nav_area);
        }
        frame.render_widget(nav::help(self.modal_open), help_area);

        if self.modal_open
            && let Some(project) = self.portfolio.projects.get(self.selected)
        {
            projects::render_modal(frame, body, project, &self.code_host);
        }
    }

    /// Lines of every section, top to bottom. Also records card positions.
    fn sections(
        &mut self,
        now_ms: u64,
        width: u16,
        viewport_height: u16,
    ) -> [Vec<Line<'static>>; 5] {
        let ctx = ViewContext {
            portfolio: &self.portfolio,
            now_ms,
            width,
            cursor: self.blink.glyph(now_ms),
        };
        let page = &self.page;
        let projects = projects::layout(&ctx, page.observer(Section::Projects), self.selected);
        let sections = [
            self.hero.lines(&ctx, viewport_height),
            about::lines(&ctx, page.observer(Section::About)),
            skills::lines(&ctx, page.observer(Section::Skills), self.ui.skill_stagger_ms),
            projects.lines,
            contact::lines(&ctx, page.observer(Section::Contact), self.ui.contact_delay_ms),
        ];

        let projects_top = sections[..Section::Projects.index()]
            .iter()
            .map(|lines| lines.len() as u32)
            .sum::<u32>();
        self.cards = projects
            .cards
            .into_iter()
            .map(|(top, height)| (projects_top + top, height))
            .collect();
        sections
    }

    fn on_key_event(&mut self, key: KeyEvent) {
        if self.modal_open {
            return;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.page.scroll_by(SCROLL_STEP),
            KeyCode::Char('k') | KeyCode::Up => self.page.scroll_by(-SCROLL_STEP),
            KeyCode::PageDown | KeyCode::Char(' ') => self.page.page_down(),
            KeyCode::PageUp => self.page.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.page.scroll_to(0),
            KeyCode::Char('G') | KeyCode::End => self.page.scroll_to(self.page.max_scroll()),
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(section) = Section::from_digit(c) {
                    self.page.jump_to(section);
                }
            }
            KeyCode::Tab | KeyCode::Right => self.select_project(1),
            KeyCode::BackTab | KeyCode::Left => self.select_project(-1),
            KeyCode::Enter => {
                if self.portfolio.projects.get(self.selected).is_some() {
                    self.modal_open = true;
                }
            }
            _ => {}
        }
    }

    /// Move the card focus by `step`, wrapping, and scroll the card into view.
    fn select_project(&mut self, step: isize) {
        let count = self.portfolio.projects.len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected as isize + step).rem_euclid(count as isize) as usize;
        if let Some(&(top, height)) = self.cards.get(self.selected) {
            self.page.reveal_line(top, height);
        }
    }
}
