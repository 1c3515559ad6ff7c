//! Inventory browsing endpoints.

use axum::Json;
use axum::extract::{Path, State};

use sr_protocol::inventory::CategoryListing;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/v1/inventory: Every category with its models, in catalog order.
pub async fn list_inventory(State(state): State<AppState>) -> Json<Vec<CategoryListing>> {
    Json(state.controller.catalog().listings())
}

/// GET /api/v1/inventory/{category}: One category (case-insensitive).
pub async fn get_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Json<CategoryListing>> {
    let catalog = state.controller.catalog();
    let wanted = category.to_lowercase();
    let name = catalog
        .categories()
        .into_iter()
        .find(|c| c.to_lowercase() == wanted)
        .ok_or_else(|| ApiError::NotFound(format!("category '{category}' not found")))?;

    Ok(Json(CategoryListing {
        category: name.to_string(),
        models: catalog.models_in(name).to_vec(),
    }))
}
