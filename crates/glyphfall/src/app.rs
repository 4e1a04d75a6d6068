//! Application state, event handling and the main loop.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use glyphfall_config::Config;
use glyphfall_core::Cursor;
use glyphfall_rain::RainState;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Style, Stylize},
    text::Line,
};

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Is the rain frozen?
    paused: bool,
    /// Current settings, adjusted by key presses.
    config: Config,
    /// Where `w` writes the config.
    config_path: Option<PathBuf>,
    /// Rain animation state.
    rain: RainState,
    /// Last known mouse position.
    cursor: Option<Cursor>,
    /// Animation clock; only advances while not paused.
    animation: Duration,
    /// Result of the last save, shown in the help line.
    status: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, config_path: Option<PathBuf>, seed: Option<u64>) -> Self {
        let mut rain = match seed {
            Some(seed) => RainState::with_seed(seed),
            None => RainState::new(),
        };
        rain.set_redraw_interval(config.frame_interval());
        Self {
            running: false,
            paused: false,
            config,
            config_path,
            rain,
            cursor: None,
            animation: Duration::ZERO,
            status: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut last_tick = Instant::now();
        while self.running {
            let now = Instant::now();
            self.advance_clock(now.duration_since(last_tick));
            last_tick = now;

            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Move the animation clock forward unless paused.
    fn advance_clock(&mut self, elapsed: Duration) {
        if !self.paused {
            self.animation += elapsed;
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let settings = self.config.rain_settings();
        let elapsed_ms = self.animation.as_millis() as u64;
        self.rain.render(frame, elapsed_ms, &settings, self.cursor);

        if self.config.show_help {
            let area = frame.area();
            let [_, help_area] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
            frame.render_widget(self.help_line(), help_area);
        }
    }

    /// Key bindings plus the current settings.
    fn help_line(&self) -> Line<'static> {
        let (r, g, b) = self.config.color_theme.rgb();
        let accent = Color::Rgb(r, g, b);

        let mut spans = vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "c".bold().fg(accent),
            format!(" {}  ", self.config.color_theme).dark_gray(),
            "s".bold().fg(accent),
            format!(" {}  ", self.config.speed).dark_gray(),
            "g".bold().fg(accent),
            format!(" {}  ", self.config.glyph_set).dark_gray(),
            "space".bold().fg(accent),
            (if self.paused { " resume  " } else { " pause  " }).dark_gray(),
            "w".bold().fg(accent),
            " save".dark_gray(),
        ];
        if let Some(status) = &self.status {
            spans.push(format!("  {status}").fg(accent));
        }
        Line::from(spans).centered().style(Style::new().bg(Color::Black))
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most one frame interval so the rain keeps moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.config.frame_interval())? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    /// Dispatch a single terminal event.
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            Event::FocusLost => self.on_focus_lost(),
            // Picked up by the rain state on the next render
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('c')) => self.config.color_theme = self.config.color_theme.next(),
            (_, KeyCode::Char('s')) => self.config.speed = self.config.speed.next(),
            (_, KeyCode::Char('g')) => self.config.glyph_set = self.config.glyph_set.next(),
            (_, KeyCode::Char(' ')) => self.paused = !self.paused,
            (_, KeyCode::Char('?')) => self.config.show_help = !self.config.show_help,
            (_, KeyCode::Char('w')) => self.save_config(),
            _ => {}
        }
    }

    /// Track the cursor for the repulsion effect.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
                self.cursor = Some(Cursor::new(mouse.column, mouse.row));
            }
            _ => {}
        }
    }

    /// The pointer is somewhere else now; stop pushing glyphs around.
    fn on_focus_lost(&mut self) {
        self.cursor = None;
    }

    /// Write the current settings and report the outcome in the help line.
    fn save_config(&mut self) {
        let result = match &self.config_path {
            Some(path) => self.config.save_to(path).map(|()| path.clone()),
            None => self.config.save(),
        };
        self.status = Some(match result {
            Ok(path) => format!("saved {}", path.display()),
            Err(err) => format!("save failed: {err}"),
        });
        self.config.show_help = true;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
