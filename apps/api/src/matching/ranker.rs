use std::cmp::Ordering;

use crate::models::match_result::MatchResult;

/// Score descending, then matched required count descending, then job id ascending.
pub fn compare_matches(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.matched_required.len().cmp(&a.matched_required.len()))
        .then_with(|| a.job_id.cmp(&b.job_id))
}

/// Orders match results for presentation. The sort is stable, so results that
/// compare equal keep their input order.
pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(compare_matches);
    results
}
