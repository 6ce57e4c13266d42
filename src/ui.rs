// src/ui.rs

pub mod chat;
pub mod footer;
pub mod header;

use crate::errors::ParleyResult;
use crate::key_handlers::handle_event;
use crate::widget::{ChatState, ChatWidget};
use crate::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::{io, time::Duration};
use tokio::sync::mpsc;
use tokio::time;

const TICK_RATE: Duration = Duration::from_millis(120);
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Enum for different types of events.
enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the terminal UI until the user quits.
pub async fn run_ui(widget: ChatWidget) -> ParleyResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(widget)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        log::error!("UI loop stopped: {}", err);
    }

    res
}

/// Main loop of the application.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> ParleyResult<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // crossterm's reader blocks, so it gets its own thread.
    tokio::task::spawn_blocking(move || loop {
        if tx.is_closed() {
            return;
        }
        match event::poll(POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(event) => {
                    if tx.blocking_send(Event::Input(event)).is_err() {
                        return;
                    }
                }
                Err(e) => log::warn!("Failed to read terminal event: {}", e),
            },
            Ok(false) => {}
            Err(e) => {
                log::error!("Failed to poll terminal events: {}", e);
                return;
            }
        }
    });

    let mut ticker = time::interval(TICK_RATE);

    loop {
        {
            let state = app.widget.state().clone();
            let mut state = state.lock().await;
            terminal.draw(|f| draw(f, &mut state, &mut app))?;
        }

        match next_event(&mut rx, &mut ticker).await {
            Some(Event::Input(event)) => handle_event(event, &mut app).await,
            Some(Event::Tick) => app.on_tick().await,
            None => {
                log::error!("Terminal event reader stopped; closing the UI");
                app.should_quit = true;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Next input or tick. `None` once the reader thread has gone away, since
/// without it there is no way to receive a quit key.
async fn next_event(
    rx: &mut mpsc::Receiver<Event>,
    ticker: &mut time::Interval,
) -> Option<Event> {
    tokio::select! {
        biased;
        event = rx.recv() => event,
        _ = ticker.tick() => Some(Event::Tick),
    }
}

/// Renders the UI components.
pub fn draw(f: &mut Frame, state: &mut ChatState, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Chat
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    header::draw_header(f, chunks[0], app.widget.client().endpoint());
    app.send_button = chat::draw_chat(f, chunks[1], state);
    footer::draw_footer(f, chunks[2], app.pending_replies());
}
