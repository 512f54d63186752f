//! Axum route handlers for the ATS API.

use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::ats::engine::{evaluate, Tip};
use crate::ats::rules::TipId;
use crate::ats::summary::{CategoryCounts, ScoreBand, TipSummary};
use crate::models::cv::{CvPayload, ExportData};
use crate::models::demo::demo_export;
use crate::wizard::step_for_section;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// A tip plus the wizard step its section lives on.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutedTip {
    #[serde(flatten)]
    pub tip: Tip,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_step: Option<usize>,
}

impl From<Tip> for RoutedTip {
    fn from(tip: Tip) -> Self {
        let target_step = tip.target_section.map(|s| step_for_section(s).index());
        RoutedTip { tip, target_step }
    }
}

/// Tip ids per category; the tips themselves are listed once, in `tips`.
#[derive(Debug, Serialize)]
pub struct GroupedTipIds {
    pub errors: Vec<TipId>,
    pub warnings: Vec<TipId>,
    pub successes: Vec<TipId>,
}

impl From<&TipSummary> for GroupedTipIds {
    fn from(summary: &TipSummary) -> Self {
        let ids = |tips: &[Tip]| -> Vec<TipId> { tips.iter().map(|t| t.id).collect() };
        GroupedTipIds {
            errors: ids(&summary.errors),
            warnings: ids(&summary.warnings),
            successes: ids(&summary.successes),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub score: u8,
    pub band: ScoreBand,
    pub counts: CategoryCounts,
    pub summary: GroupedTipIds,
    pub tips: Vec<RoutedTip>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/evaluate
/// Accepts a bare CV or an export envelope.
pub async fn handle_evaluate(Json(payload): Json<CvPayload>) -> Json<EvaluateResponse> {
    let cv = payload.into_cv();
    let report = evaluate(&cv);
    let summary = TipSummary::group(&report.tips);
    let counts = summary.counts();

    debug!(
        "ATS evaluation: score={} errors={} warnings={} successes={}",
        report.score, counts.error, counts.warning, counts.success
    );

    Json(EvaluateResponse {
        score: report.score,
        band: ScoreBand::from_score(report.score),
        counts,
        summary: GroupedTipIds::from(&summary),
        tips: report.tips.into_iter().map(RoutedTip::from).collect(),
    })
}

/// GET /api/v1/cv/demo
pub async fn handle_demo() -> Json<ExportData> {
    Json(demo_export())
}
