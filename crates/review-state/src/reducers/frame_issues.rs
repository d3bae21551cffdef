use crate::domain_models::{ActiveReview, Frame, Issue};

/// Issues shown on `frame`
///
/// Persisted issues come first, then the draft's issues, each in their
/// original order. An issue present in both lists appears twice.
pub fn compute_frame_issues(
    issues: &[Issue],
    active_review: Option<&ActiveReview>,
    frame: Frame,
) -> Vec<Issue> {
    let draft_issues = active_review
        .map(|review| review.issues.as_slice())
        .unwrap_or_default();

    issues
        .iter()
        .chain(draft_issues)
        .filter(|issue| issue.is_on_frame(frame))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Review;
    use pretty_assertions::assert_eq;

    fn issue(frame: Frame, id: u64) -> Issue {
        Issue::new(frame).with_attribute("id", id)
    }

    #[test]
    fn test_filters_persisted_issues() {
        let issues = vec![issue(1, 1), issue(2, 2), issue(1, 3)];
        let result = compute_frame_issues(&issues, None, 1);
        assert_eq!(result, vec![issue(1, 1), issue(1, 3)]);
    }

    #[test]
    fn test_persisted_issues_come_before_draft_issues() {
        let issues = vec![issue(4, 1), issue(5, 2), issue(4, 3)];
        let draft = Review::new(vec![issue(4, 10), issue(6, 11), issue(4, 12)]);

        let result = compute_frame_issues(&issues, Some(&draft), 4);

        assert_eq!(
            result,
            vec![issue(4, 1), issue(4, 3), issue(4, 10), issue(4, 12)]
        );
    }

    #[test]
    fn test_does_not_deduplicate() {
        let issues = vec![issue(3, 1)];
        let draft = Review::new(vec![issue(3, 1)]);

        let result = compute_frame_issues(&issues, Some(&draft), 3);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0], result[1]);
    }

    #[test]
    fn test_no_matches() {
        let issues = vec![issue(1, 1)];
        let draft = Review::new(vec![issue(2, 2)]);
        assert!(compute_frame_issues(&issues, Some(&draft), 9).is_empty());
        assert!(compute_frame_issues(&[], None, 0).is_empty());
    }

    #[test]
    fn test_matches_filter_of_concatenation() {
        let issues: Vec<Issue> = (0..20).map(|i| issue(i % 3, i)).collect();
        let draft = Review::new((20..30).map(|i| issue(i % 4, i)).collect());

        for frame in 0..5 {
            let expected: Vec<Issue> = issues
                .iter()
                .chain(draft.issues.iter())
                .filter(|issue| issue.frame == frame)
                .cloned()
                .collect();
            assert_eq!(compute_frame_issues(&issues, Some(&draft), frame), expected);
        }
    }
}
