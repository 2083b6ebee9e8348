use std::{io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

mod app;
mod board;
mod config;
mod error;
mod model;
mod telemetry;
mod ui;

use app::{Action, App};
use config::Config;
use error::Error;

fn action_from_key(code: KeyCode, editing: bool) -> Option<Action> {
    if editing {
        return Some(match code {
            KeyCode::Esc => Action::CloseOrQuit,
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Input(c),
            _ => return None,
        });
    }

    Some(match code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => Action::CloseOrQuit,

        KeyCode::Char('h') | KeyCode::Left => Action::FocusLeft,
        KeyCode::Char('l') | KeyCode::Right => Action::FocusRight,

        KeyCode::Char('j') | KeyCode::Down => Action::SelectDown,
        KeyCode::Char('k') | KeyCode::Up => Action::SelectUp,

        KeyCode::Char('H') => Action::MoveLeft,
        KeyCode::Char('L') => Action::MoveRight,

        KeyCode::Enter => Action::ToggleDetail,

        KeyCode::Char('a') => Action::AddCard,
        KeyCode::Char('e') => Action::EditCard,
        KeyCode::Char('d') | KeyCode::Delete => Action::DeleteCard,

        _ => return None,
    })
}

fn main() -> Result<(), Error> {
    let cfg = Config::from_env()?;
    telemetry::init(&cfg)?;
    info!(seed = ?cfg.seed, "starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, App::new(cfg.seed.board()));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("exiting");
    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<(), Error> {
    app.focus_first_non_empty();

    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(k) = event::read()? else {
            continue;
        };
        if k.kind != KeyEventKind::Press {
            continue;
        }

        if let Some(a) = action_from_key(k.code, app.prompt.is_some()) {
            if app.apply(a) {
                info!(cards = app.board.card_count(), "quit requested");
                return Ok(());
            }
        }
    }
}
