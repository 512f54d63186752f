use serde::{Deserialize, Serialize};

use crate::ats::engine::Tip;
use crate::ats::rules::TipCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Good,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub error: usize,
    pub warning: usize,
    pub success: usize,
}

/// Tips split by category, each group in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipSummary {
    pub errors: Vec<Tip>,
    pub warnings: Vec<Tip>,
    pub successes: Vec<Tip>,
}

impl TipSummary {
    pub fn group(tips: &[Tip]) -> Self {
        let mut summary = TipSummary::default();
        for tip in tips {
            let bucket = match tip.category {
                TipCategory::Error => &mut summary.errors,
                TipCategory::Warning => &mut summary.warnings,
                TipCategory::Success => &mut summary.successes,
            };
            bucket.push(tip.clone());
        }
        summary
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            error: self.errors.len(),
            warning: self.warnings.len(),
            success: self.successes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::engine::evaluate;
    use crate::ats::rules::TipId;
    use crate::models::cv::CvData;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Poor);
    }

    #[test]
    fn test_group_empty_cv() {
        let report = evaluate(&CvData::default());
        let summary = TipSummary::group(&report.tips);
        assert_eq!(
            summary.counts(),
            CategoryCounts {
                error: 2,
                warning: 9,
                success: 0
            }
        );
        assert_eq!(summary.errors[0].id, TipId::PersonalName);
        assert_eq!(summary.errors[1].id, TipId::PersonalEmail);
    }

    #[test]
    fn test_group_preserves_order() {
        let mut cv = CvData::default();
        cv.personal.name = "Anna".to_string();
        cv.courses = vec!["AWS".to_string()];
        let report = evaluate(&cv);
        let summary = TipSummary::group(&report.tips);
        let total = summary.errors.len() + summary.warnings.len() + summary.successes.len();
        assert_eq!(total, report.tips.len());
        assert_eq!(summary.warnings.first().map(|t| t.id), Some(TipId::PersonalPhone));
        assert_eq!(summary.successes.last().map(|t| t.id), Some(TipId::CoursesGood));
    }
}
