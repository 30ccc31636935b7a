use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::{get, post, put},
    Json, Router,
};
use fxdash_core::{
    selection::{validate_currency_code, DateRange},
    DashboardView, Settlement,
};
use serde::Deserialize;

/// Query options shared by every command endpoint.
#[derive(Debug, Default, Deserialize)]
struct CommandParams {
    /// Respond only after the fetches issued by the command have settled.
    #[serde(default)]
    wait: bool,
}

#[derive(Debug, Deserialize)]
struct SelectionBody {
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FilterBody {
    #[serde(default)]
    term: String,
}

#[derive(Debug, Deserialize)]
struct RangeBody {
    #[serde(default)]
    start: String,
    #[serde(default)]
    end: String,
}

/// Runs a command's settlement and returns the resulting view.
async fn settle(state: &AppState, settlement: Settlement, params: &CommandParams) -> DashboardView {
    if params.wait {
        settlement.await;
    } else {
        tokio::spawn(settlement);
    }
    state.dashboard.view()
}

async fn get_dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Json<DashboardView>> {
    Ok(Json(state.dashboard.view()))
}

async fn select_code(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CommandParams>,
    Json(body): Json<SelectionBody>,
) -> ApiResult<Json<DashboardView>> {
    let code = body
        .code
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty());
    if let Some(code) = &code {
        validate_currency_code(code)?;
    }
    let settlement = state.dashboard.select_code(code);
    Ok(Json(settle(&state, settlement, &params).await))
}

async fn set_filter(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CommandParams>,
    Json(body): Json<FilterBody>,
) -> ApiResult<Json<DashboardView>> {
    let settlement = state.dashboard.set_filter(body.term);
    Ok(Json(settle(&state, settlement, &params).await))
}

async fn set_date_range(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CommandParams>,
    Json(body): Json<RangeBody>,
) -> ApiResult<Json<DashboardView>> {
    let range = DateRange::new(body.start.trim(), body.end.trim());
    range.validate()?;
    let settlement = state.dashboard.set_date_range(range);
    Ok(Json(settle(&state, settlement, &params).await))
}

async fn refresh(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CommandParams>,
) -> ApiResult<Json<DashboardView>> {
    let settlement = state.dashboard.trigger_manual_refresh();
    Ok(Json(settle(&state, settlement, &params).await))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/selection", put(select_code))
        .route("/dashboard/filter", put(set_filter))
        .route("/dashboard/range", put(set_date_range))
        .route("/dashboard/refresh", post(refresh))
}
