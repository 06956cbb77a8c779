//! Terminal UI for the power monitor console.

#![allow(missing_docs)]

use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Terminal,
};

use crate::config::ConsoleConfig;
use crate::dashboard::{Dashboard, NotifyKind, Severity};
use crate::dispatch::{CommandSink, LinkEvent};
use crate::i18n::{label_text, LabelKey, Language};

mod input;
mod render;

const COLOR_TEAL: Color = Color::Rgb(0, 168, 150);
const COLOR_GREEN: Color = Color::Rgb(46, 204, 113);
const COLOR_AMBER: Color = Color::Rgb(243, 156, 18);
const COLOR_RED: Color = Color::Rgb(231, 76, 60);
const COLOR_INFO: Color = Color::Rgb(142, 142, 147);
const COLOR_YELLOW: Color = Color::Rgb(245, 196, 66);
const COLOR_CYAN: Color = Color::Rgb(64, 212, 255);
const COLOR_FIELD_BG: Color = Color::Rgb(24, 24, 24);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginField {
    Username,
    Password,
}

#[derive(Debug, Default)]
struct LoginForm {
    username: String,
    password: String,
    focus: Option<LoginField>,
}

impl LoginForm {
    fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focus: Some(LoginField::Username),
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus.unwrap_or(LoginField::Username) {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    fn next_field(&mut self) {
        self.focus = Some(match self.focus {
            Some(LoginField::Username) => LoginField::Password,
            _ => LoginField::Username,
        });
    }
}

struct UiState {
    dashboard: Dashboard,
    login: LoginForm,
}

/// Runs the console until the operator quits.
///
/// The transport thread feeds `events`; this loop is the only consumer and
/// the only writer of dashboard state.
pub fn run_ui(
    config: &ConsoleConfig,
    events: &Receiver<LinkEvent>,
    sink: &mut dyn CommandSink,
    no_input: bool,
) -> anyhow::Result<()> {
    let mut state = UiState {
        dashboard: Dashboard::new(config.language),
        login: LoginForm::new(),
    };
    let refresh = Duration::from_millis(config.refresh_ms);
    let mut last_draw = Instant::now() - refresh;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = (|| {
        loop {
            let now = Instant::now();
            while let Ok(event) = events.try_recv() {
                state.dashboard.handle_link_event(event, now);
            }
            state.dashboard.tick(now);

            if last_draw.elapsed() >= refresh {
                terminal.draw(|frame| render_ui(frame.size(), frame, &state, no_input))?;
                last_draw = Instant::now();
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Release
                        && handle_key(key, &mut state, sink, no_input)
                    {
                        break;
                    }
                    // Redraw immediately after input.
                    last_draw = Instant::now() - refresh;
                }
            }
        }
        Ok(())
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn render_ui(area: Rect, frame: &mut ratatui::Frame<'_>, state: &UiState, no_input: bool) {
    render::render_ui(area, frame, state, no_input);
}

fn handle_key(key: KeyEvent, state: &mut UiState, sink: &mut dyn CommandSink, no_input: bool) -> bool {
    input::handle_key(key, state, sink, no_input)
}

fn label_or(key: LabelKey, language: Language) -> &'static str {
    label_text(key, language).unwrap_or_default()
}

fn label_style() -> Style {
    Style::default().fg(COLOR_CYAN)
}

fn value_style() -> Style {
    Style::default().fg(Color::White)
}

fn header_style() -> Style {
    Style::default()
        .fg(COLOR_YELLOW)
        .add_modifier(Modifier::BOLD)
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Ok => Style::default().fg(COLOR_GREEN),
        Severity::Warn => Style::default().fg(COLOR_AMBER),
        Severity::Error => Style::default().fg(COLOR_RED).add_modifier(Modifier::BOLD),
    }
}

fn notify_style(kind: NotifyKind) -> Style {
    match kind {
        NotifyKind::Info => Style::default().fg(COLOR_CYAN),
        NotifyKind::Success => Style::default().fg(COLOR_GREEN),
        NotifyKind::Error => Style::default().fg(COLOR_RED).add_modifier(Modifier::BOLD),
    }
}

fn panel_block(title: &str, border_style: Style) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {title} "), header_style()))
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(border_style)
}
