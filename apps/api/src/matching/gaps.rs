use crate::matching::normalizer::SkillToken;
use crate::matching::overlap::SkillOverlap;

/// Matched and missing skills for one job, shaped for the match report.
///
/// An empty `missing_required` means the candidate covers every required
/// skill. It is never an error state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillGaps {
    pub matched_required: Vec<SkillToken>,
    pub missing_required: Vec<SkillToken>,
    pub matched_preferred: Vec<SkillToken>,
    pub missing_preferred: Vec<SkillToken>,
    pub total_required: usize,
    pub total_preferred: usize,
}

impl SkillGaps {
    pub fn from_overlap(overlap: SkillOverlap) -> Self {
        let total_required = overlap.matched_required.len() + overlap.missing_required.len();
        let total_preferred = overlap.matched_preferred.len() + overlap.missing_preferred.len();

        SkillGaps {
            matched_required: overlap.matched_required,
            missing_required: overlap.missing_required,
            matched_preferred: overlap.matched_preferred,
            missing_preferred: overlap.missing_preferred,
            total_required,
            total_preferred,
        }
    }

    pub fn is_fully_covered(&self) -> bool {
        self.missing_required.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalizer::normalize;
    use crate::matching::overlap::{compute_overlap, JobSkills};

    #[test]
    fn test_totals_count_declared_skills() {
        let overlap = compute_overlap(
            &normalize(["python"]),
            &JobSkills::from_declared(&["python", "sql", "aws"], &["docker", "git"]),
        );
        let gaps = SkillGaps::from_overlap(overlap);
        assert_eq!(gaps.total_required, 3);
        assert_eq!(gaps.total_preferred, 2);
        assert_eq!(gaps.matched_required.len(), 1);
        assert_eq!(gaps.missing_required.len(), 2);
        assert!(!gaps.is_fully_covered());
    }

    #[test]
    fn test_no_missing_required_is_fully_covered() {
        let overlap = compute_overlap(
            &normalize(["python", "sql"]),
            &JobSkills::from_declared(&["python", "sql"], &["kafka"]),
        );
        let gaps = SkillGaps::from_overlap(overlap);
        assert!(gaps.is_fully_covered());
        assert_eq!(gaps.missing_preferred.len(), 1);
    }

    #[test]
    fn test_job_without_requirements_is_fully_covered() {
        let gaps = SkillGaps::from_overlap(SkillOverlap::default());
        assert!(gaps.is_fully_covered());
        assert_eq!(gaps.total_required, 0);
    }
}
