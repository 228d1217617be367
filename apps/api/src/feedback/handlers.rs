//! Axum route handlers for the Report API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::feedback::compose::{compose, RenderTree};
use crate::feedback::disclosure::{Accordion, DisclosureSnapshot};
use crate::feedback::models::{Feedback, Report, ScoreValue, Tier};
use crate::feedback::tier::classify;
use crate::presentation::{Theme, Treatment};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRequest {
    pub feedback: Feedback,
    /// Section to show expanded first. Falls back to the configured default.
    #[serde(default)]
    pub open_section: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ComposeResponse {
    pub tree: RenderTree,
    pub theme: Theme,
    pub disclosure: DisclosureSnapshot,
}

#[derive(Debug, Serialize)]
pub struct TierResponse {
    pub score: ScoreValue,
    pub tier: Tier,
    pub treatment: Treatment,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/reports/compose
///
/// Validates an analyzer feedback payload and returns the composed render tree,
/// the treatment table, and the initial disclosure state.
pub async fn handle_compose(
    State(state): State<AppState>,
    AppJson(request): AppJson<ComposeRequest>,
) -> Result<Json<ComposeResponse>, AppError> {
    let open_section = request
        .open_section
        .unwrap_or_else(|| state.config.default_open_section.id().to_string());

    let report = Report::try_from(request.feedback)?;
    let tree = compose(&report, &open_section)?;
    let disclosure = Accordion::from_tree(&tree, state.config.disclosure_policy).snapshot();

    info!(
        "Composed report: overall {} ({:?}), {} sections, open={open_section}",
        tree.summary.score,
        tree.summary.tier,
        tree.sections.len()
    );

    Ok(Json(ComposeResponse {
        tree,
        theme: state.theme.as_ref().clone(),
        disclosure,
    }))
}

/// GET /api/v1/reports/tiers/:score
pub async fn handle_tier(
    State(state): State<AppState>,
    AppPath(score): AppPath<i64>,
) -> Result<Json<TierResponse>, AppError> {
    let score = ScoreValue::new(score).map_err(|e| AppError::Validation(e.to_string()))?;
    let tier = classify(score);

    Ok(Json(TierResponse {
        score,
        tier,
        treatment: state.theme.for_tier(tier).clone(),
    }))
}
