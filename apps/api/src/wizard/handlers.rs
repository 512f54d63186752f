use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ats::rules::CvSection;
use crate::errors::AppError;
use crate::wizard::{Navigation, WizardState, WizardStep};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct StepInfo {
    pub index: usize,
    pub key: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavigateAction {
    Next,
    Prev,
    GoTo(usize),
    Section(CvSection),
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub current: usize,
    pub action: NavigateAction,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateResponse {
    pub step: WizardStep,
    pub index: usize,
    pub is_first: bool,
    pub is_last: bool,
    pub finished: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/wizard/steps
pub async fn handle_list_steps() -> Json<Vec<StepInfo>> {
    Json(
        WizardStep::ALL
            .iter()
            .map(|s| StepInfo {
                index: s.index(),
                key: s.key(),
            })
            .collect(),
    )
}

/// POST /api/v1/wizard/navigate
pub async fn handle_navigate(
    Json(req): Json<NavigateRequest>,
) -> Result<Json<NavigateResponse>, AppError> {
    let mut state = WizardState::from_index(req.current)?;
    let outcome = match req.action {
        NavigateAction::Next => state.next(),
        NavigateAction::Prev => state.prev(),
        NavigateAction::GoTo(index) => state.go_to(index)?,
        NavigateAction::Section(section) => state.go_to_section(section),
    };
    debug!("Wizard navigation from step {}: {:?}", req.current, outcome);

    let step = state.current();
    Ok(Json(NavigateResponse {
        step,
        index: step.index(),
        is_first: state.is_first(),
        is_last: state.is_last(),
        finished: outcome == Navigation::Finished,
    }))
}
