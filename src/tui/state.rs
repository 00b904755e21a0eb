//! TUI state management

use chrono::{DateTime, Utc};

use crate::wizard::{EventOutcome, ReplayEvent, WizardSession, WizardView};

/// Evaluation stage currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveStage {
    /// 0-based stage index
    pub index: usize,
    pub label: String,
}

/// Main TUI state
#[derive(Debug, Clone)]
pub struct WatchState {
    pub view: WizardView,
    pub stage: Option<ActiveStage>,
    pub stage_count: usize,
    pub events_total: usize,
    pub events_done: usize,
    pub rejected_count: usize,
    pub start_time: DateTime<Utc>,
    pub logs: Vec<String>,
    pub finished: bool,
}

impl WatchState {
    const MAX_LOGS: usize = 200;

    /// State before the first event of a script with `events_total` events
    pub fn new(session: &WizardSession, stage_count: usize, events_total: usize) -> Self {
        Self {
            view: session.view(),
            stage: None,
            stage_count,
            events_total,
            events_done: 0,
            rejected_count: 0,
            start_time: Utc::now(),
            logs: Vec::new(),
            finished: false,
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new WatchState with the wizard view replaced
    pub fn with_view(mut self, view: WizardView) -> Self {
        self.view = view;
        self
    }

    /// Return a new WatchState with the active stage set
    pub fn with_stage(mut self, stage: Option<ActiveStage>) -> Self {
        self.stage = stage;
        self
    }

    /// Return a new WatchState marked as finished
    pub fn with_finished(mut self, finished: bool) -> Self {
        self.finished = finished;
        self
    }

    /// Return a new WatchState with a single log appended
    pub fn with_log(mut self, log: String) -> Self {
        self.logs.push(log);
        if self.logs.len() > Self::MAX_LOGS {
            self.logs.remove(0);
        }
        self
    }

    fn record_outcome(self, outcome: &EventOutcome) -> Self {
        let line = match outcome.message {
            Some(ref message) => format!("✗ {} - {}", outcome.event, message),
            None => format!("✓ {}", outcome.event),
        };
        let mut state = self.with_log(line);
        state.events_done = outcome.index + 1;
        if !outcome.is_applied() {
            state.rejected_count += 1;
        }
        state
    }

    /// Fold one replay update into the state
    pub fn apply(self, event: ReplayEvent) -> Self {
        match event {
            ReplayEvent::Stage { index, label } => {
                let line = format!("  stage {}/{}: {}", index + 1, self.stage_count, label);
                self.with_stage(Some(ActiveStage { index, label }))
                    .with_log(line)
            }
            ReplayEvent::Outcome { outcome, view } => {
                let stage = if view.evaluating { self.stage.clone() } else { None };
                self.record_outcome(&outcome)
                    .with_view(*view)
                    .with_stage(stage)
            }
        }
    }
}
