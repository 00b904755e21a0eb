//! Staged evaluation runner
//!
//! Plays the evaluation "progress animation" as a sequence of timed ticks,
//! one per stage plus a closing tick, then asks the evaluator for a score.
//! The token is checked after every wait so a reset stops pending ticks.

use std::time::Duration;

use tokio::time::sleep;

use crate::errors::{AssessaError, Result};
use crate::schemas::{CandidateProfile, Evaluation, EvaluationConfig};

use super::{CancellationToken, Evaluator};

/// Called with the 0-based index and label of each stage as it becomes active
pub type StageCallback = Box<dyn FnMut(usize, &str) + Send>;

/// Timing for one staged run
#[derive(Debug, Clone, PartialEq)]
pub struct StagedOptions {
    /// Stage labels, in order
    pub stages: Vec<String>,

    /// Wait before each stage
    pub tick_interval: Duration,

    /// Wait between scoring and returning the result
    pub settle_delay: Duration,
}

impl From<&EvaluationConfig> for StagedOptions {
    fn from(config: &EvaluationConfig) -> Self {
        StagedOptions {
            stages: config.stages.clone(),
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            settle_delay: Duration::from_millis(config.settle_delay_ms),
        }
    }
}

fn ensure_live(token: &CancellationToken) -> Result<()> {
    if token.is_cancelled() {
        return Err(AssessaError::Cancelled);
    }
    Ok(())
}

/// Run the staged evaluation for `profile`.
///
/// # Errors
/// * `Cancelled` - If the token was cancelled before the result was ready
pub async fn run_staged_evaluation<E: Evaluator + ?Sized>(
    evaluator: &mut E,
    profile: &CandidateProfile,
    options: &StagedOptions,
    token: &CancellationToken,
    mut on_stage: Option<StageCallback>,
) -> Result<Evaluation> {
    ensure_live(token)?;

    for (index, label) in options.stages.iter().enumerate() {
        sleep(options.tick_interval).await;
        ensure_live(token)?;

        tracing::debug!(stage = index, label = %label, "evaluation stage");
        if let Some(ref mut callback) = on_stage {
            callback(index, label.as_str());
        }
    }

    // One more interval after the last stage before the score is drawn
    sleep(options.tick_interval).await;
    ensure_live(token)?;

    let evaluation = evaluator.evaluate(profile);

    sleep(options.settle_delay).await;
    ensure_live(token)?;

    tracing::info!(score = evaluation.score, "evaluation finished");
    Ok(evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::FixedEvaluator;
    use crate::schemas::ScoreBreakdown;
    use std::sync::{Arc, Mutex};

    fn fixed(score: u32) -> FixedEvaluator {
        FixedEvaluator::new(Evaluation::new(
            score,
            ScoreBreakdown {
                communication: 90,
                confidence: 85,
                relevance: 80,
            },
        ))
    }

    fn instant_options() -> StagedOptions {
        StagedOptions::from(&EvaluationConfig::default().instant())
    }

    #[tokio::test]
    async fn test_runs_every_stage_then_scores() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let callback: StageCallback = Box::new(move |index, label| {
            sink.lock().unwrap().push((index, label.to_string()));
        });

        let mut evaluator = fixed(82);
        let result = run_staged_evaluation(
            &mut evaluator,
            &CandidateProfile::new(),
            &instant_options(),
            &CancellationToken::new(),
            Some(callback),
        )
        .await
        .unwrap();

        assert_eq!(result.score, 82);
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0].0, 0);
        assert_eq!(seen[3].0, 3);
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();

        let result = run_staged_evaluation(
            &mut fixed(82),
            &CandidateProfile::new(),
            &instant_options(),
            &token,
            None,
        )
        .await;

        assert!(matches!(result, Err(AssessaError::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_mid_run_stops_pending_ticks() {
        let token = CancellationToken::new();
        let ticks = Arc::new(Mutex::new(0usize));

        let options = StagedOptions::from(&EvaluationConfig::default());
        let run_token = token.clone();
        let counter = ticks.clone();
        let handle = tokio::spawn(async move {
            let callback: StageCallback = Box::new(move |_, _| {
                *counter.lock().unwrap() += 1;
            });
            run_staged_evaluation(
                &mut fixed(90),
                &CandidateProfile::new(),
                &options,
                &run_token,
                Some(callback),
            )
            .await
        });

        // Two ticks of 1500ms pass, then the session is reset
        sleep(Duration::from_millis(3200)).await;
        token.cancel();

        let result = handle.await.unwrap();
        assert!(matches!(result, Err(AssessaError::Cancelled)));
        assert_eq!(*ticks.lock().unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_timing_matches_stage_animation() {
        let options = StagedOptions::from(&EvaluationConfig::default());
        let started = tokio::time::Instant::now();

        run_staged_evaluation(
            &mut fixed(82),
            &CandidateProfile::new(),
            &options,
            &CancellationToken::new(),
            None,
        )
        .await
        .unwrap();

        // Four stage ticks, a closing tick, then the settle delay
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(4 * 1500 + 1500 + 1000));
        assert!(elapsed < Duration::from_millis(4 * 1500 + 1500 + 1000 + 50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_closing_tick_discards_score() {
        let token = CancellationToken::new();
        let options = StagedOptions::from(&EvaluationConfig::default());
        let run_token = token.clone();
        let handle = tokio::spawn(async move {
            run_staged_evaluation(
                &mut fixed(82),
                &CandidateProfile::new(),
                &options,
                &run_token,
                None,
            )
            .await
        });

        // Every stage is active, the closing tick is pending
        sleep(Duration::from_millis(6500)).await;
        token.cancel();

        assert!(matches!(handle.await.unwrap(), Err(AssessaError::Cancelled)));
    }

    #[test]
    fn test_options_from_config() {
        let options = StagedOptions::from(&EvaluationConfig::default());
        assert_eq!(options.tick_interval, Duration::from_millis(1500));
        assert_eq!(options.settle_delay, Duration::from_millis(1000));
        assert_eq!(options.stages.len(), 4);
    }
}
