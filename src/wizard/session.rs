//! Wizard session: the single owner of the candidate profile
//!
//! Every user action is one `&mut self` call that either applies fully or
//! returns an error with the session untouched.

use crate::domain;
use crate::errors::{AssessaError, GateRejection, Result, ValidationError};
use crate::evaluator::CancellationToken;
use crate::schemas::{
    CandidateProfile, Evaluation, FileRef, SessionSnapshot, StepId, MAX_SCORE, MIN_SCORE,
};

use super::view::{ResultPayload, StepView, UploadView, WizardView};

/// Handle for one evaluation started by `submit_videos`.
///
/// Carries a copy of the profile so the runner never borrows the session,
/// and the session generation so a commit after a reset is refused.
#[derive(Debug, Clone)]
pub struct EvaluationTicket {
    generation: u64,
    token: CancellationToken,
    profile: CandidateProfile,
}

impl EvaluationTicket {
    /// Token the runner checks between ticks
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Profile as it was when the videos were submitted
    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }
}

/// One candidate's pass through the wizard
#[derive(Debug)]
pub struct WizardSession {
    profile: CandidateProfile,
    current_step: StepId,
    progress: u8,
    generation: u64,
    in_flight: Option<CancellationToken>,
}

impl Default for WizardSession {
    fn default() -> Self {
        WizardSession {
            profile: CandidateProfile::new(),
            current_step: StepId::Identity,
            progress: StepId::Identity.progress_checkpoint(),
            generation: 0,
            in_flight: None,
        }
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    pub fn current_step(&self) -> StepId {
        self.current_step
    }

    /// Progress bar percentage: 25, 50, 75 or 100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// An evaluation has been started and neither committed nor cancelled
    pub fn is_evaluating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Open `step` if the gate allows it. The only way the active step changes.
    pub fn navigate(&mut self, step: StepId) -> std::result::Result<StepId, GateRejection> {
        match domain::navigate(step, &self.profile) {
            Ok(step) => {
                self.current_step = step;
                tracing::info!(step = %step, "navigated");
                Ok(step)
            }
            Err(rejection) => {
                tracing::warn!(step = %step, reason = %rejection.reason, "navigation blocked");
                Err(rejection)
            }
        }
    }

    /// Save the identity form and move on to the upload step
    pub fn submit_identity(&mut self, name: &str, email: &str) -> Result<()> {
        let profile = domain::submit_identity(name, email, &self.profile).map_err(|e| {
            tracing::warn!(error = %e, "identity rejected");
            e
        })?;
        self.profile = profile;
        tracing::info!(name = %self.profile.name, email = %self.profile.email, "identity saved");

        self.navigate(StepId::Upload)?;
        self.progress = StepId::Upload.progress_checkpoint();
        Ok(())
    }

    /// Put a picked file into upload slot `slot` (0-based)
    pub fn select_file(&mut self, slot: usize, file: FileRef) -> Result<()> {
        let name = file.name.clone();
        let profile = domain::accept_upload(slot, file, &self.profile).map_err(|e| {
            tracing::warn!(slot, file = %name, kind = e.kind(), "upload rejected");
            e
        })?;
        self.profile = profile;
        tracing::info!(
            question = slot + 1,
            file = %name,
            uploaded = self.profile.uploaded_count(),
            "video uploaded"
        );
        Ok(())
    }

    /// Submit all three videos and start the evaluation.
    ///
    /// # Errors
    /// * `EvaluationInFlight` - An earlier submission has not finished
    /// * `Gate` - Name or email is missing
    /// * `IncompleteUploads` - Not every slot holds a video
    pub fn submit_videos(&mut self) -> Result<EvaluationTicket> {
        if self.in_flight.is_some() {
            return Err(ValidationError::EvaluationInFlight.into());
        }
        // Identity is checked ahead of the upload count, as the gate does
        domain::can_enter_upload(&self.profile).into_result(StepId::Evaluation)?;
        if !self.profile.all_uploaded() {
            return Err(ValidationError::IncompleteUploads {
                uploaded: self.profile.uploaded_count(),
            }
            .into());
        }

        self.navigate(StepId::Evaluation)?;
        self.progress = StepId::Evaluation.progress_checkpoint();

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());
        tracing::info!(generation = self.generation, "videos submitted for evaluation");

        Ok(EvaluationTicket {
            generation: self.generation,
            token,
            profile: self.profile.clone(),
        })
    }

    /// Commit the evaluator's result and show it.
    ///
    /// # Errors
    /// * `Cancelled` - The ticket is no longer the in-flight one: the session
    ///   was reset, or the ticket was already committed or abandoned
    /// * `Evaluation` - Score outside 60..=100; the evaluation is dropped
    pub fn commit_evaluation(
        &mut self,
        ticket: &EvaluationTicket,
        evaluation: Evaluation,
    ) -> Result<()> {
        if !self.is_live(ticket) {
            tracing::warn!(
                ticket = ticket.generation,
                session = self.generation,
                "discarding stale evaluation"
            );
            return Err(AssessaError::Cancelled);
        }

        self.in_flight = None;
        if !evaluation.in_range() {
            return Err(AssessaError::Evaluation(format!(
                "score {} outside {}..={}",
                evaluation.score, MIN_SCORE, MAX_SCORE
            )));
        }

        self.profile = self.profile.clone().with_evaluation(&evaluation);
        tracing::info!(
            score = self.profile.score,
            passed = self.profile.passed,
            "evaluation committed"
        );

        self.navigate(StepId::Result)?;
        self.progress = StepId::Result.progress_checkpoint();
        Ok(())
    }

    /// Whether `ticket` is the evaluation currently in flight
    fn is_live(&self, ticket: &EvaluationTicket) -> bool {
        ticket.generation == self.generation
            && !ticket.token.is_cancelled()
            && self
                .in_flight
                .as_ref()
                .is_some_and(|token| token.same_as(&ticket.token))
    }

    /// Forget an evaluation whose runner stopped without a result
    pub fn abandon_evaluation(&mut self, ticket: &EvaluationTicket) {
        let current = self
            .in_flight
            .as_ref()
            .is_some_and(|token| token.same_as(&ticket.token));
        if ticket.generation == self.generation && current {
            self.in_flight = None;
            tracing::warn!(generation = self.generation, "evaluation abandoned");
        }
    }

    /// Start over: cancel any running evaluation and clear every field
    pub fn reset(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
        let generation = self.generation + 1;
        *self = WizardSession {
            generation,
            ..WizardSession::default()
        };
        tracing::info!(generation, "assessment reset");
    }

    /// Score, verdict and breakdown once an evaluation is committed
    pub fn result(&self) -> Option<ResultPayload> {
        ResultPayload::from_profile(&self.profile)
    }

    /// Everything a renderer needs to draw the wizard
    pub fn view(&self) -> WizardView {
        let steps = domain::step_badges(self.current_step, &self.profile)
            .into_iter()
            .map(|(step, badge)| StepView {
                step,
                title: step.title().to_string(),
                badge,
            })
            .collect();

        let uploads = self
            .profile
            .uploads
            .iter()
            .enumerate()
            .map(|(index, slot)| UploadView::new(index, slot.as_ref()))
            .collect();

        WizardView {
            current_step: self.current_step,
            title: self.current_step.title().to_string(),
            progress: self.progress,
            candidate_name: self.profile.name.clone(),
            steps,
            uploads,
            next_step: domain::get_next_step(self.current_step),
            evaluating: self.is_evaluating(),
            result: self.result(),
        }
    }

    /// Serializable copy of the session
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(self.current_step, self.progress, self.profile.clone())
    }
}
