//! TUI runner - manages TUI lifecycle and rendering

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::Mutex;

use crate::errors::{AssessaError, Result};
use crate::tui::state::WatchState;
use crate::tui::widgets::render_screen;
use crate::wizard::ReplayEvent;

/// How the user left the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// `q` pressed
    Quit,
    /// Ctrl-C pressed
    Interrupted,
}

/// Main TUI runner
pub struct TuiRunner {
    state: Arc<Mutex<WatchState>>,
}

impl TuiRunner {
    /// Create a runner that folds every update from `updates` into its state
    pub fn new(initial: WatchState, mut updates: UnboundedReceiver<ReplayEvent>) -> Self {
        let state = Arc::new(Mutex::new(initial));

        let state_clone = state.clone();
        tokio::spawn(async move {
            while let Some(update) = updates.recv().await {
                let mut state = state_clone.lock().await;
                *state = state.clone().apply(update);
            }
            // Sender dropped: the replay is over
            let mut state = state_clone.lock().await;
            *state = state.clone().with_finished(true);
        });

        Self { state }
    }

    /// Get current state (for rendering)
    pub async fn get_state(&self) -> WatchState {
        self.state.lock().await.clone()
    }

    /// Run the TUI until the user quits
    ///
    /// # Errors
    /// * `Interrupted` - Ctrl-C was pressed
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_tui_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        match result? {
            ExitReason::Quit => Ok(()),
            ExitReason::Interrupted => Err(AssessaError::Interrupted),
        }
    }

    async fn run_tui_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<ExitReason> {
        use crossterm::event::{Event, KeyCode, KeyModifiers};

        loop {
            let state = self.get_state().await;
            terminal.draw(|f| render_screen(f, &state))?;

            if crossterm::event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = crossterm::event::read()? {
                    match key.code {
                        KeyCode::Char('q') => return Ok(ExitReason::Quit),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(ExitReason::Interrupted);
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}
