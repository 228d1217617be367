//! Tip classification and the two read projections used by category sections.
//!
//! Both views are derived from the same ordered tip slice, so the summary item at
//! position `i` always describes the detail item at position `i`.

use serde::Serialize;

use crate::feedback::models::{Tip, TipStatus};

/// Tips split by status, each side keeping the original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TipPartition<'a> {
    pub positive: Vec<&'a Tip>,
    pub advisory: Vec<&'a Tip>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipSummary {
    pub status: TipStatus,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipDetail {
    pub status: TipStatus,
    pub summary: String,
    pub explanation: String,
}

pub fn split_by_status(tips: &[Tip]) -> TipPartition<'_> {
    let (positive, advisory): (Vec<&Tip>, Vec<&Tip>) = tips
        .iter()
        .partition(|tip| tip.status == TipStatus::Positive);
    TipPartition { positive, advisory }
}

/// Compact view: status and tip text only.
pub fn summary_view(tips: &[Tip]) -> Vec<TipSummary> {
    tips.iter()
        .map(|tip| TipSummary {
            status: tip.status,
            summary: tip.summary.clone(),
        })
        .collect()
}

/// Full view: status, tip text and explanation.
pub fn detail_view(tips: &[Tip]) -> Vec<TipDetail> {
    tips.iter()
        .map(|tip| TipDetail {
            status: tip.status,
            summary: tip.summary.clone(),
            explanation: tip.explanation.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tip(status: TipStatus, n: usize) -> Tip {
        Tip {
            status,
            summary: format!("tip {n}"),
            explanation: format!("explanation {n}"),
        }
    }

    fn mixed() -> Vec<Tip> {
        use TipStatus::*;
        [Positive, Advisory, Advisory, Positive, Advisory, Positive]
            .into_iter()
            .enumerate()
            .map(|(i, s)| tip(s, i))
            .collect()
    }

    #[test]
    fn test_split_counts_add_up() {
        let tips = mixed();
        let parts = split_by_status(&tips);
        assert_eq!(parts.positive.len() + parts.advisory.len(), tips.len());
        assert_eq!(parts.positive.len(), 3);
    }

    #[test]
    fn test_split_preserves_relative_order() {
        let tips = mixed();
        let parts = split_by_status(&tips);
        let positive: Vec<&str> = parts.positive.iter().map(|t| t.summary.as_str()).collect();
        let advisory: Vec<&str> = parts.advisory.iter().map(|t| t.summary.as_str()).collect();
        assert_eq!(positive, vec!["tip 0", "tip 3", "tip 5"]);
        assert_eq!(advisory, vec!["tip 1", "tip 2", "tip 4"]);
    }

    #[test]
    fn test_split_empty() {
        let parts = split_by_status(&[]);
        assert!(parts.positive.is_empty());
        assert!(parts.advisory.is_empty());
    }

    #[test]
    fn test_split_single_element() {
        let tips = vec![tip(TipStatus::Advisory, 0)];
        let parts = split_by_status(&tips);
        assert!(parts.positive.is_empty());
        assert_eq!(parts.advisory, vec![&tips[0]]);
    }

    #[test]
    fn test_views_are_index_aligned() {
        for tips in [vec![], vec![tip(TipStatus::Positive, 0)], mixed()] {
            let summaries = summary_view(&tips);
            let details = detail_view(&tips);
            assert_eq!(summaries.len(), details.len());
            assert_eq!(summaries.len(), tips.len());
            for (s, d) in summaries.iter().zip(&details) {
                assert_eq!(s.status, d.status);
                assert_eq!(s.summary, d.summary);
            }
        }
    }

    #[test]
    fn test_detail_view_carries_explanation() {
        let tips = mixed();
        let details = detail_view(&tips);
        assert_eq!(details[4].explanation, "explanation 4");
        assert_eq!(details[4].status, TipStatus::Advisory);
    }
}
