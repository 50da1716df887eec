use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::{setup_terminal, ScreenModes};
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

/// Longest wait for input when no timer is pending.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Run the UI loop until the user quits or shutdown is signalled.
///
/// Each turn draws, waits for input at most until the next timer deadline,
/// then fires whatever timers are due.
pub fn run(mut app: App, events: EventHandler, mouse: bool) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(ScreenModes { mouse })?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        resize(&mut app, cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_WAIT)
            .min(IDLE_WAIT);

        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => resize(&mut app, cols, rows),
            Ok(AppEvent::SubmitFinished { view, result }) => app.on_submit_finished(view, result),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        app.fire_due(Instant::now());
    }

    drop(guard);
    Ok(())
}

fn resize(app: &mut App, cols: u16, rows: u16) {
    let body = body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    app.on_resize(body.width.max(1), body.height.max(1));
}
