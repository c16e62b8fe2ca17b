//! Strictly ordered answer submission
//!
//! The backend keys each answer's server-side identity partially on
//! submission order, so drafts go out one at a time, each awaited before
//! the next. This is a deliberate sequential design, not an accidental
//! artifact; submitting in parallel would corrupt collected research data.

use thiserror::Error;
use tracing::{debug, warn};

use canvass_api::{ApiError, SurveyBackend};
use canvass_types::{AnswerDraft, AnswerRecord, SessionToken};

/// A submission sequence stopped at its first failure.
///
/// Records accumulated before the failure are carried here; they remain
/// persisted server-side (there is no compensating delete).
#[derive(Debug, Error)]
#[error("answer submission failed at index {failed_index}: {source}")]
pub struct SubmissionError {
    /// Index into the draft sequence of the submission that failed.
    pub failed_index: usize,
    /// Server-confirmed records for indices before `failed_index`, in
    /// input order.
    pub submitted: Vec<AnswerRecord>,
    #[source]
    pub source: ApiError,
}

/// Submit drafts one at a time, in input order.
///
/// Each draft is submitted only after the previous draft's response has
/// arrived. On success the returned records mirror the input order
/// exactly; callers correlate fixed positions (e.g. a consent block) with
/// response content by index.
///
/// On the first failure the remaining drafts are not submitted and the
/// error carries the partial record list. Re-invoking with the same
/// drafts afterwards re-submits from index 0 and duplicates server-side
/// records for the indices that had already succeeded; resumption is the
/// caller's responsibility and is NOT provided here.
pub async fn submit_in_order(
    backend: &dyn SurveyBackend,
    token: &SessionToken,
    drafts: &[AnswerDraft],
) -> Result<Vec<AnswerRecord>, SubmissionError> {
    let mut submitted = Vec::with_capacity(drafts.len());

    for (index, draft) in drafts.iter().enumerate() {
        match backend.submit_answer(token, draft).await {
            Ok(record) => {
                debug!(index, question_id = %draft.question_id, "answer submitted");
                submitted.push(record);
            }
            Err(source) => {
                warn!(
                    index,
                    question_id = %draft.question_id,
                    remaining = drafts.len() - index - 1,
                    "answer submission failed, aborting sequence"
                );
                return Err(SubmissionError {
                    failed_index: index,
                    submitted,
                    source,
                });
            }
        }
    }

    Ok(submitted)
}
