//! Run command - Replay a scripted session

use std::path::Path;

use crate::config::load_config;
use crate::errors::{AssessaError, Result};
use crate::evaluator::StagedOptions;
use crate::fs::{read_script, write_json};
use crate::wizard::{replay_script, EventOutcome, ReplayOptions, WizardSession, WizardView};

use super::build_evaluator;

fn print_text(outcomes: &[EventOutcome], view: &WizardView) {
    for outcome in outcomes {
        match (&outcome.code, &outcome.message) {
            (Some(code), Some(message)) => println!(
                "{:>3}. [rejected] {} - {}: {}",
                outcome.index + 1,
                outcome.event,
                code,
                message
            ),
            _ => println!(
                "{:>3}. [applied]  {} -> {} ({}%)",
                outcome.index + 1,
                outcome.event,
                outcome.step,
                outcome.progress
            ),
        }
    }

    println!();
    println!("Candidate: {}", view.display_name());
    println!("Step: {} ({}%)", view.title, view.progress);
    if let Some(ref result) = view.result {
        println!("Score: {}/100 {}", result.score, result.verdict());
        if let Some(breakdown) = result.breakdown {
            for (label, value) in breakdown.categories() {
                println!("  {:<18} {}/100", label, value);
            }
        }
    }
}

/// Replay `script` and print one line per event
pub async fn run(
    config_path: Option<&Path>,
    script: &Path,
    json: bool,
    output: Option<&Path>,
    instant: bool,
    score: Option<u32>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let script = read_script(script)?;

    let evaluation = if instant {
        config.evaluation.clone().instant()
    } else {
        config.evaluation.clone()
    };
    let options = ReplayOptions::new(StagedOptions::from(&evaluation));
    let mut evaluator = build_evaluator(&config.evaluation, score);

    let mut session = WizardSession::new();
    let outcomes = replay_script(&mut session, &script, evaluator.as_mut(), &options, None).await;

    let rejected = outcomes.iter().filter(|o| !o.is_applied()).count();
    tracing::info!(events = outcomes.len(), rejected, "replay finished");

    let view = session.view();
    if json {
        let report = serde_json::json!({
            "outcomes": outcomes,
            "view": view,
        });
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| AssessaError::wrap(e, "Cannot serialize output"))?;
        println!("{}", rendered);
    } else {
        print_text(&outcomes, &view);
    }

    if let Some(path) = output {
        write_json(path, &session.snapshot())?;
        tracing::info!(path = %path.display(), "snapshot written");
    }

    Ok(())
}
