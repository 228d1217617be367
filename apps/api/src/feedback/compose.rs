//! Report composition — builds the render tree the presentation layer walks.
//!
//! Tiers are derived here from the scores being rendered and nowhere else, so a score
//! cannot show one tier in its badge and another in its section.

use serde::Serialize;
use tracing::debug;

use crate::feedback::aggregate::aggregate;
use crate::feedback::error::ReportError;
use crate::feedback::models::{AtsSection, Category, Report, ScoreValue, Tier};
use crate::feedback::tier::classify;
use crate::feedback::tips::{
    detail_view, split_by_status, summary_view, TipDetail, TipSummary,
};

// ────────────────────────────────────────────────────────────────────────────
// Render tree
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryNode {
    pub score: ScoreValue,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeNode {
    pub id: String,
    pub title: String,
    pub score: ScoreValue,
    pub tier: Tier,
}

/// One expandable section per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionNode {
    pub id: String,
    pub title: String,
    pub score: ScoreValue,
    pub tier: Tier,
    /// Initial disclosure state only; the disclosure collaborator owns it afterwards.
    pub open: bool,
    pub positive_count: usize,
    pub advisory_count: usize,
    pub summary: Vec<TipSummary>,
    pub details: Vec<TipDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtsPanelNode {
    pub score: ScoreValue,
    pub tier: Tier,
    pub tips: Vec<TipSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderTree {
    pub summary: SummaryNode,
    pub badges: Vec<BadgeNode>,
    pub sections: Vec<SectionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ats: Option<AtsPanelNode>,
}

impl RenderTree {
    pub fn open_section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .filter(|s| s.open)
            .map(|s| s.id.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Composer
// ────────────────────────────────────────────────────────────────────────────

/// Composes a report into a render tree with exactly one section initially open.
///
/// Fails with `MalformedReport` if the category set is wrong, and with `UnknownSection`
/// if `initially_open_id` names no category. No partial tree is returned on failure.
pub fn compose(report: &Report, initially_open_id: &str) -> Result<RenderTree, ReportError> {
    let categories = aggregate(report)?;

    if !categories.iter().any(|c| c.id == initially_open_id) {
        return Err(ReportError::UnknownSection(initially_open_id.to_string()));
    }

    let badges = categories.iter().map(badge_node).collect();
    let sections = categories
        .iter()
        .map(|c| section_node(c, c.id == initially_open_id))
        .collect();

    let tree = RenderTree {
        summary: SummaryNode {
            score: report.overall_score,
            tier: classify(report.overall_score),
        },
        badges,
        sections,
        ats: report.ats.as_ref().map(ats_panel_node),
    };

    debug!(
        "Composed report: overall={} tier={:?} open={}",
        tree.summary.score, tree.summary.tier, initially_open_id
    );

    Ok(tree)
}

fn badge_node(category: &Category) -> BadgeNode {
    BadgeNode {
        id: category.id.clone(),
        title: category.title.clone(),
        score: category.score,
        tier: classify(category.score),
    }
}

fn section_node(category: &Category, open: bool) -> SectionNode {
    let partition = split_by_status(&category.tips);
    SectionNode {
        id: category.id.clone(),
        title: category.title.clone(),
        score: category.score,
        tier: classify(category.score),
        open,
        positive_count: partition.positive.len(),
        advisory_count: partition.advisory.len(),
        summary: summary_view(&category.tips),
        details: detail_view(&category.tips),
    }
}

fn ats_panel_node(ats: &AtsSection) -> AtsPanelNode {
    AtsPanelNode {
        score: ats.score,
        tier: classify(ats.score),
        tips: ats
            .tips
            .iter()
            .map(|t| TipSummary {
                status: t.status,
                summary: t.summary.clone(),
            })
            .collect(),
    }
}
