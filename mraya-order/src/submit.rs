use thiserror::Error;

/// Why a submission attempt failed. Each variant displays the Arabic banner
/// text shown in the form; the structured detail feeds the diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The webhook answered with a non-success status.
    #[error("حدث خطأ أثناء إرسال الطلب. المرجو المحاولة مرة أخرى.")]
    Rejected { status: u16 },
    /// The request never completed (connectivity, DNS, timeout).
    #[error("حدث خطأ في الشبكة. تأكد من اتصالك بالإنترنت.")]
    Network { detail: String },
}

impl SubmissionError {
    /// Form-level banner text for this failure class.
    #[must_use]
    pub fn banner(&self) -> String {
        self.to_string()
    }
}

/// Outcome of exactly one submission attempt. There is no retry; a failure
/// is surfaced to the user, who may resubmit explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(SubmissionError),
}

impl SubmissionOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}
