use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tickerbook_core::portfolio::HoldingRow;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

use super::dto::{HoldingItemQuery, HoldingsView};

fn current_view(state: &AppState) -> HoldingsView {
    state
        .store
        .current()
        .map_or_else(HoldingsView::empty, |outcome| {
            HoldingsView::from(outcome.as_ref())
        })
}

/// Runs one load cycle and returns the stored view.
///
/// The cycle runs on its own task so that a request timeout or a dropped
/// connection cannot cut it off between its start and result notifications.
pub async fn refresh_holdings(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HoldingsView>> {
    let task_state = state.clone();
    tokio::spawn(async move {
        let (cycle, outcome) = task_state.loader.load_cycle().await;
        if !task_state.store.apply(cycle, outcome) {
            tracing::debug!("Refresh cycle {} superseded by a newer load", cycle);
        }
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Holdings refresh failed: {}", e)))?;

    Ok(Json(current_view(&state)))
}

pub async fn get_holdings(State(state): State<Arc<AppState>>) -> Json<HoldingsView> {
    Json(current_view(&state))
}

pub async fn get_holding(
    State(state): State<Arc<AppState>>,
    Query(q): Query<HoldingItemQuery>,
) -> ApiResult<Json<HoldingRow>> {
    let index: usize = q
        .index
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid index: {}", q.index)))?;
    let holding = state.store.holding(index).ok_or(ApiError::NotFound)?;
    Ok(Json(HoldingRow::from(&holding)))
}
