//! Property tests: routed resolution always returns an ordered subsequence
//! drawn from the first non-empty bucket of the fallback cascade, and
//! never errors on a missing variant.

use canvass_engine::resolve_questions;
use canvass_types::{Question, QuestionId, QuestionKind};
use proptest::prelude::*;

fn arb_question() -> impl Strategy<Value = Question> {
    (
        0u64..1000,
        0u32..4,
        0u32..3,
        0u32..3,
        0u32..10,
        prop::option::weighted(0.9, Just(())),
    )
        .prop_map(|(id, page, view, mode, order, tagged)| Question {
            id: QuestionId::new(id),
            text: format!("question {}", id),
            order,
            page: tagged.map(|_| page),
            view: tagged.map(|_| view),
            mode: tagged.map(|_| mode),
            kind: Some(QuestionKind::FreeText),
            choices: vec![],
        })
}

fn arb_questions() -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec(arb_question(), 0..40)
}

/// The bucket the cascade should land on, computed independently of the
/// lookup-table implementation.
fn expected_bucket(all: &[Question], page: u32, view: u32, mode: u32) -> Vec<Question> {
    let in_bucket = |q: &Question, v: u32, m: u32| q.routing_key() == Some((page, v, m));

    let mut steps: Vec<(u32, u32)> = vec![(view, mode)];
    if view != 0 {
        steps.push((0, mode));
    }
    if mode != 0 {
        steps.push((view, 0));
    }
    if view != 0 && mode != 0 {
        steps.push((0, 0));
    }

    for (v, m) in steps {
        let bucket: Vec<Question> = all
            .iter()
            .filter(|q| in_bucket(q, v, m))
            .cloned()
            .collect();
        if !bucket.is_empty() {
            return bucket;
        }
    }
    vec![]
}

proptest! {
    /// The result is exactly the winning bucket, stably sorted by order.
    #[test]
    fn resolution_matches_cascade_reference(
        all in arb_questions(),
        page in 0u32..4,
        view in 0u32..3,
        mode in 0u32..3,
    ) {
        let resolved = resolve_questions(&all, page, view, mode);

        let mut expected = expected_bucket(&all, page, view, mode);
        expected.sort_by_key(|q| q.order);

        prop_assert_eq!(resolved, expected);
    }

    /// Output order is non-decreasing and every question came from the
    /// input.
    #[test]
    fn resolution_is_an_ordered_subset(
        all in arb_questions(),
        page in 0u32..4,
        view in 0u32..3,
        mode in 0u32..3,
    ) {
        let resolved = resolve_questions(&all, page, view, mode);

        for window in resolved.windows(2) {
            prop_assert!(window[0].order <= window[1].order);
        }
        for question in &resolved {
            prop_assert!(all.contains(question));
        }
    }

    /// Requests never panic, whatever the question set looks like.
    #[test]
    fn resolution_never_errors(
        all in arb_questions(),
        page in any::<u32>(),
        view in any::<u32>(),
        mode in any::<u32>(),
    ) {
        let _ = resolve_questions(&all, page, view, mode);
    }

    /// All questions in one bucket: resolution preserves their relative
    /// input order on order ties (stable sort).
    #[test]
    fn tie_break_is_stable(texts in prop::collection::vec(0u64..50, 2..10)) {
        let all: Vec<Question> = texts
            .iter()
            .enumerate()
            .map(|(i, id)| Question {
                id: QuestionId::new(*id + i as u64 * 100),
                text: format!("q{}", i),
                order: 1,
                page: Some(0),
                view: Some(0),
                mode: Some(0),
                kind: None,
                choices: vec![],
            })
            .collect();

        let resolved = resolve_questions(&all, 0, 0, 0);
        prop_assert_eq!(resolved, all);
    }
}
