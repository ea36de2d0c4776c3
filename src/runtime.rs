//! Terminal session and event loop.
//!
//! The runtime owns the terminal and runs the single loop that mutates
//! [`AppState`]. Three sources feed it:
//!
//! ```text
//! crossterm EventStream ──┐
//! debounce fires ─────────┼──→ tokio::select! → handle_event → actions → render
//! worker responses ───────┘
//! ```
//!
//! Timers and HTTP requests run on their own tasks and only ever send messages
//! back, so no state is shared and nothing needs locking.

use crate::app::{handle_event, map_terminal_event, Action, AppState, Event};
use crate::domain::Result;
use crate::infrastructure::navigation_url;
use crate::search::{HttpSearchClient, SearchBackend};
use crate::trigger::FiredQuery;
use crate::ui::render;
use crate::worker::{SearchWorker, WorkerHandle, WorkerResponse};
use crate::{initialize, Config};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, execute, QueueableCommand};
use futures_util::{Stream, StreamExt};
use reqwest::Url;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    /// The user quit, or the terminal closed its input.
    Quit,
    /// The user navigated away; the URL is opened after the terminal is restored.
    Navigate(Url),
}

/// Puts the terminal into raw, alternate-screen mode and restores it on drop.
#[derive(Debug)]
pub struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    /// Enters raw mode with mouse capture and bracketed paste.
    ///
    /// Keyboard enhancement is requested where supported so `Cmd+K` is reported
    /// with the Super modifier.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LiveSearchError::Io`] if the terminal refuses any mode.
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            keyboard_enhanced: false,
        };

        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste,
            cursor::Hide
        )?;

        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
            guard.keyboard_enhanced = true;
        }

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.keyboard_enhanced {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            stdout,
            cursor::Show,
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
    }
}

/// Everything the event loop needs besides the terminal.
#[derive(Debug)]
pub struct Session {
    pub state: AppState,
    worker: WorkerHandle,
    base_url: Url,
    fired: UnboundedReceiver<FiredQuery>,
    responses: UnboundedReceiver<WorkerResponse>,
}

impl Session {
    /// Builds the application state and starts the search worker.
    ///
    /// Must be called inside a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LiveSearchError::Config`] for an invalid base URL.
    pub fn new(config: &Config, backend: Arc<dyn SearchBackend>) -> Result<Self> {
        let base_url = config.base_url()?;
        let (fired_tx, fired) = mpsc::unbounded_channel();
        let (responses_tx, responses) = mpsc::unbounded_channel();

        let state = initialize(config, fired_tx);
        let worker = SearchWorker::new(backend).spawn(responses_tx);

        Ok(Self {
            state,
            worker,
            base_url,
            fired,
            responses,
        })
    }

    /// Runs the event loop until the user quits or navigates.
    ///
    /// Frames are written to `out` after every event that changes the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal event stream fails, writing a frame
    /// fails, or the worker has stopped.
    pub async fn run<S, W>(&mut self, mut terminal_events: S, out: &mut W) -> Result<Exit>
    where
        S: Stream<Item = io::Result<crossterm::event::Event>> + Unpin,
        W: Write,
    {
        self.draw(out)?;

        loop {
            let event = tokio::select! {
                next = terminal_events.next() => match next {
                    Some(Ok(raw)) => match map_terminal_event(self.state.input_mode, &raw) {
                        Some(event) => event,
                        None => continue,
                    },
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(Exit::Quit),
                },
                Some(fired) = self.fired.recv() => Event::DebounceFired(fired),
                Some(response) = self.responses.recv() => Event::WorkerResponse(response),
            };

            let (needs_render, actions) = handle_event(&mut self.state, &event)?;

            for action in actions {
                match action {
                    Action::Quit => return Ok(Exit::Quit),
                    Action::PostToWorker(message) => self.worker.post(message)?,
                    Action::Navigate(target) => {
                        let url = navigation_url(&self.base_url, &target)?;
                        tracing::info!(url = %url, "navigating");
                        return Ok(Exit::Navigate(url));
                    }
                }
            }

            if needs_render {
                self.draw(out)?;
            }
        }
    }

    /// Stops the worker; requests in flight still complete.
    pub async fn shutdown(self) {
        self.worker.shutdown().await;
    }

    fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        let (rows, cols) = self.state.viewport;
        let frame = render(&self.state, rows, cols);

        out.queue(Clear(ClearType::All))?;
        out.write_all(frame.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Runs an interactive session against the configured server.
///
/// Opens the navigation target in the system browser after the terminal has
/// been restored.
///
/// # Errors
///
/// Returns configuration, terminal, and worker errors. Failed searches are not
/// errors; they are logged and leave the screen unchanged.
pub async fn run(config: &Config) -> Result<()> {
    let backend: Arc<dyn SearchBackend> = Arc::new(HttpSearchClient::new(&config.base_url()?)?);
    let mut session = Session::new(config, backend)?;

    let exit = {
        let _guard = TerminalGuard::enter()?;

        let (cols, rows) = terminal::size()?;
        handle_event(
            &mut session.state,
            &Event::Resize {
                rows: usize::from(rows),
                cols: usize::from(cols),
            },
        )?;

        let mut stdout = io::stdout();
        session.run(EventStream::new(), &mut stdout).await
    };

    session.shutdown().await;

    if let Exit::Navigate(url) = exit? {
        open::that_detached(url.as_str())?;
    }
    Ok(())
}
