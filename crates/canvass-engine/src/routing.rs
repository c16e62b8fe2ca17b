//! Question routing under the page/view/mode addressing scheme
//!
//! Experiment configurations may define view- or mode-specific variants of
//! a question set, but always guarantee a default (`view=0`, `mode=0`)
//! bucket. Resolution therefore cascades toward the defaults and never
//! errors on a missing variant; an empty result means the caller shows
//! nothing for that page.

use std::collections::HashMap;

use tracing::debug;

use canvass_types::Question;

/// Buckets keyed by the exact (page, view, mode) triple.
///
/// Built once per resolution call from the flat question list and
/// discarded; lookups on missing keys yield an empty bucket rather than
/// creating one.
struct RoutingTable {
    buckets: HashMap<(u32, u32, u32), Vec<Question>>,
}

impl RoutingTable {
    fn build(questions: &[Question]) -> Self {
        let mut buckets: HashMap<(u32, u32, u32), Vec<Question>> = HashMap::new();
        for question in questions {
            // Untagged questions are excluded from routed resolution.
            if let Some(key) = question.routing_key() {
                buckets.entry(key).or_default().push(question.clone());
            }
        }
        Self { buckets }
    }

    fn bucket(&self, page: u32, view: u32, mode: u32) -> &[Question] {
        self.buckets
            .get(&(page, view, mode))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Resolve the ordered question subset for a requested (page, view, mode).
///
/// Fallback cascade, stopping at the first non-empty bucket:
///
/// 1. `(page, view, mode)`
/// 2. `(page, 0, mode)` when `view != 0`
/// 3. `(page, view, 0)` when `mode != 0`; the view here is the one the
///    caller requested, not the default substituted in step 2
/// 4. `(page, 0, 0)` when both `view != 0` and `mode != 0`
///
/// The winning bucket is sorted by `order` ascending (stable; ties keep
/// their original relative position). All buckets empty yields an empty
/// vec, never an error.
pub fn resolve_questions(all: &[Question], page: u32, view: u32, mode: u32) -> Vec<Question> {
    let table = RoutingTable::build(all);

    let mut candidates = table.bucket(page, view, mode);
    if candidates.is_empty() && view != 0 {
        debug!(page, mode, "no questions for requested view, trying view 0");
        candidates = table.bucket(page, 0, mode);
    }
    if candidates.is_empty() && mode != 0 {
        debug!(page, view, "no questions for requested mode, trying mode 0");
        candidates = table.bucket(page, view, 0);
    }
    if candidates.is_empty() && view != 0 && mode != 0 {
        debug!(page, "falling back to default view and mode");
        candidates = table.bucket(page, 0, 0);
    }

    let mut resolved = candidates.to_vec();
    resolved.sort_by_key(|q| q.order);
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvass_types::{QuestionId, QuestionKind};

    fn question(id: u64, page: u32, view: u32, mode: u32, order: u32) -> Question {
        Question {
            id: QuestionId::new(id),
            text: format!("question {}", id),
            order,
            page: Some(page),
            view: Some(view),
            mode: Some(mode),
            kind: Some(QuestionKind::FreeText),
            choices: vec![],
        }
    }

    fn ids(questions: &[Question]) -> Vec<u64> {
        questions.iter().map(|q| q.id.value()).collect()
    }

    #[test]
    fn test_exact_bucket_wins() {
        let all = vec![question(1, 0, 0, 0, 2), question(2, 0, 1, 0, 1)];
        assert_eq!(ids(&resolve_questions(&all, 0, 1, 0)), vec![2]);
    }

    #[test]
    fn test_missing_view_falls_back_to_view_zero() {
        let all = vec![question(1, 0, 0, 0, 2), question(2, 0, 1, 0, 1)];
        assert_eq!(ids(&resolve_questions(&all, 0, 2, 0)), vec![1]);
    }

    #[test]
    fn test_missing_mode_falls_back_with_requested_view() {
        // Only (page 0, view 2, mode 0) is configured; request view 2, mode 5.
        let all = vec![question(1, 0, 2, 0, 1), question(2, 0, 0, 5, 1)];
        assert_eq!(ids(&resolve_questions(&all, 0, 2, 5)), vec![2]);
        // (page, 0, mode) is tried before (page, view, 0): the view
        // fallback outranks the mode fallback.
    }

    #[test]
    fn test_mode_fallback_uses_original_view_not_substituted_one() {
        // Nothing at (0, 3, 7) or (0, 0, 7); (0, 3, 0) exists.
        let all = vec![question(1, 0, 3, 0, 1), question(9, 0, 0, 0, 1)];
        assert_eq!(ids(&resolve_questions(&all, 0, 3, 7)), vec![1]);
    }

    #[test]
    fn test_double_fallback_to_default_bucket() {
        let all = vec![question(9, 0, 0, 0, 1)];
        assert_eq!(ids(&resolve_questions(&all, 0, 3, 7)), vec![9]);
    }

    #[test]
    fn test_all_buckets_empty_returns_empty() {
        let all = vec![question(1, 1, 0, 0, 1)];
        assert!(resolve_questions(&all, 0, 2, 3).is_empty());
    }

    #[test]
    fn test_untagged_questions_are_excluded() {
        let mut untagged = question(5, 0, 0, 0, 1);
        untagged.view = None;
        let all = vec![untagged, question(6, 0, 0, 0, 2)];
        assert_eq!(ids(&resolve_questions(&all, 0, 0, 0)), vec![6]);
    }

    #[test]
    fn test_result_sorted_by_order_stably() {
        let all = vec![
            question(1, 0, 0, 0, 3),
            question(2, 0, 0, 0, 1),
            question(3, 0, 0, 0, 3),
            question(4, 0, 0, 0, 2),
        ];
        // Ties on order keep input order: 1 before 3.
        assert_eq!(ids(&resolve_questions(&all, 0, 0, 0)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_view_zero_request_skips_view_fallback() {
        // Requested view 0, mode 4; only (0, 0, 0) configured.
        let all = vec![question(1, 0, 0, 0, 1)];
        assert_eq!(ids(&resolve_questions(&all, 0, 0, 4)), vec![1]);
    }
}
