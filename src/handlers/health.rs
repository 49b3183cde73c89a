use axum::Json;

use crate::models::HealthResponse;

pub const PROJECT_NAME: &str = "Family Wealth OS";

pub async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "System is online".to_string(),
        project: PROJECT_NAME.to_string(),
    })
}
