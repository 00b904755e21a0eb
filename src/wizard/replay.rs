//! Replay a recorded script against a session
//!
//! Events run strictly in order. A rejected event is recorded and the replay
//! carries on, the way a user would correct their input and try again.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::errors::Result;
use crate::evaluator::{run_staged_evaluation, Evaluator, StageCallback, StagedOptions};

use super::events::{EventOutcome, WizardEvent, WizardScript};
use super::session::WizardSession;
use super::view::WizardView;

/// Progress reported while a replay runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent {
    /// An evaluation stage became active
    Stage { index: usize, label: String },
    /// An event finished, with the view right after it
    Outcome {
        outcome: EventOutcome,
        view: Box<WizardView>,
    },
}

/// Timing for a replay
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOptions {
    pub staged: StagedOptions,

    /// Pause after each event, so a live view can follow along
    pub event_delay: Duration,
}

impl ReplayOptions {
    pub fn new(staged: StagedOptions) -> Self {
        ReplayOptions {
            staged,
            event_delay: Duration::ZERO,
        }
    }

    pub fn with_event_delay(mut self, delay: Duration) -> Self {
        self.event_delay = delay;
        self
    }
}

async fn run_evaluation(
    session: &mut WizardSession,
    evaluator: &mut dyn Evaluator,
    options: &ReplayOptions,
    updates: Option<&UnboundedSender<ReplayEvent>>,
) -> Result<()> {
    let ticket = session.submit_videos()?;

    let callback: Option<StageCallback> = updates.cloned().map(|tx| {
        Box::new(move |index: usize, label: &str| {
            // Receiver gone means nobody is watching; keep evaluating
            let _ = tx.send(ReplayEvent::Stage {
                index,
                label: label.to_string(),
            });
        }) as StageCallback
    });

    let evaluation = match run_staged_evaluation(
        evaluator,
        ticket.profile(),
        &options.staged,
        ticket.token(),
        callback,
    )
    .await
    {
        Ok(evaluation) => evaluation,
        Err(e) => {
            session.abandon_evaluation(&ticket);
            return Err(e);
        }
    };

    session.commit_evaluation(&ticket, evaluation)
}

/// Apply one event to the session
pub async fn apply_event(
    session: &mut WizardSession,
    event: &WizardEvent,
    evaluator: &mut dyn Evaluator,
    options: &ReplayOptions,
    updates: Option<&UnboundedSender<ReplayEvent>>,
) -> Result<()> {
    match event {
        WizardEvent::SubmitIdentity { name, email } => session.submit_identity(name, email),
        WizardEvent::SelectFile { slot, file } => session.select_file(*slot, file.clone()),
        WizardEvent::SubmitVideos => run_evaluation(session, evaluator, options, updates).await,
        WizardEvent::Navigate { step } => {
            session.navigate(*step)?;
            Ok(())
        }
        WizardEvent::Reset => {
            session.reset();
            Ok(())
        }
    }
}

/// Replay every event of `script`, returning one outcome per event
pub async fn replay_script(
    session: &mut WizardSession,
    script: &WizardScript,
    evaluator: &mut dyn Evaluator,
    options: &ReplayOptions,
    updates: Option<UnboundedSender<ReplayEvent>>,
) -> Vec<EventOutcome> {
    let mut outcomes = Vec::with_capacity(script.events.len());

    for (index, event) in script.events.iter().enumerate() {
        tracing::debug!(index, event = %event.label(), "replaying event");
        let result = apply_event(session, event, evaluator, options, updates.as_ref()).await;

        let step = session.current_step();
        let progress = session.progress();
        let outcome = match result {
            Ok(()) => EventOutcome::applied(index, event, step, progress),
            Err(e) => EventOutcome::rejected(index, event, &e, step, progress),
        };

        if let Some(ref tx) = updates {
            let _ = tx.send(ReplayEvent::Outcome {
                outcome: outcome.clone(),
                view: Box::new(session.view()),
            });
        }
        outcomes.push(outcome);

        if !options.event_delay.is_zero() {
            tokio::time::sleep(options.event_delay).await;
        }
    }

    outcomes
}
