use axum::{extract::State, Json};

use crate::error::ApiResult;
use crate::models::DashboardSummary;
use crate::services::dashboard;
use crate::state::AppState;

/// Pulls every asset, aggregates them and returns the current snapshot.
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Json<DashboardSummary>> {
    let assets = match state.assets.fetch_assets().await {
        Ok(assets) => assets,
        Err(e) => {
            tracing::error!("Error fetching dashboard data: {}", e);
            return Err(e.into());
        }
    };

    tracing::debug!("Aggregating {} assets", assets.len());
    match dashboard::summarize(assets, &state.currency) {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            tracing::error!("Error aggregating dashboard data: {}", e);
            Err(e.into())
        }
    }
}
