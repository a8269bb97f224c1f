use axum::extract::{Query, State};
use std::sync::Arc;

use viewer_count_core::{QueryParams, ViewerFilter};

use crate::AppState;
use crate::api_error::ApiError;

/// `GET /count[?id=N | ?name=S]`: plain-text decimal total.
pub async fn get_count(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, ApiError> {
    let filter = ViewerFilter::from_params(&QueryParams::from_pairs(pairs))?;
    let total = state.count_service.count(&filter).await?;
    Ok(total.to_string())
}
