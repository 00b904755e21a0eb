//! Watch command - Replay a scripted session in the terminal view

use std::path::Path;
use std::time::Duration;

use crate::config::load_config;
use crate::errors::Result;
use crate::evaluator::StagedOptions;
use crate::fs::read_script;
use crate::tui::{TuiRunner, WatchState};
use crate::wizard::{replay_script, ReplayOptions, WizardSession};

use super::build_evaluator;

/// Pause between events so each one is visible
const EVENT_DELAY: Duration = Duration::from_millis(800);

/// Replay `script` while drawing the wizard
pub async fn run(config_path: Option<&Path>, script: &Path, score: Option<u32>) -> Result<()> {
    let config = load_config(config_path)?;
    let script = read_script(script)?;

    let options =
        ReplayOptions::new(StagedOptions::from(&config.evaluation)).with_event_delay(EVENT_DELAY);
    let mut evaluator = build_evaluator(&config.evaluation, score);

    let mut session = WizardSession::new();
    let initial = WatchState::new(&session, options.staged.stages.len(), script.events.len());

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let mut runner = TuiRunner::new(initial, rx);

    let replay = tokio::spawn(async move {
        replay_script(&mut session, &script, evaluator.as_mut(), &options, Some(tx)).await
    });

    let result = runner.run().await;
    replay.abort();
    result
}
