use crate::form::{FormError, OrderForm};
use crate::submit::SubmissionOutcome;

/// Submission lifecycle for one form instance. The UI's loading flag is
/// `phase.is_submitting()`; the submit control is disabled while in flight,
/// so at most one attempt runs at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

impl SubmitPhase {
    #[must_use]
    pub const fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether a submit action is accepted in this phase. Failed allows an
    /// explicit resubmission; an in-flight attempt ignores further submits.
    #[must_use]
    pub const fn accepts_submit(self) -> bool {
        matches!(self, Self::Idle | Self::Failed)
    }

    /// Phase reached when the in-flight attempt settles.
    #[must_use]
    pub const fn settle(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Success => Self::Success,
            SubmissionOutcome::Failure(_) => Self::Failed,
        }
    }
}

/// Gate a submit action. On a gate failure the phase is unchanged and the
/// client must not be invoked; the error carries the form banner to show.
///
/// # Errors
/// Returns the `FormError` when the form fails validation.
pub fn begin_submission(phase: SubmitPhase, form: &OrderForm) -> Result<SubmitPhase, FormError> {
    if !phase.accepts_submit() {
        return Ok(phase);
    }
    form.validate()?;
    Ok(SubmitPhase::Submitting)
}
