//! Admin widget API handlers

use agora_types::types::ApiResponse;
use agora_types::widget::{AdminInfo, Area};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::prelude::*;

/// GET /api/admin/widgets - Widget admin page data
pub async fn get_widget_admin(
	State(app): State<App>,
) -> ClResult<(StatusCode, Json<ApiResponse<AdminInfo>>)> {
	debug!("GET /api/admin/widgets");
	let info = crate::admin::get(&app).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(info))))
}

/// GET /api/admin/widgets/areas - Widget areas with their current content
pub async fn get_widget_areas(
	State(app): State<App>,
) -> ClResult<(StatusCode, Json<ApiResponse<Vec<Area>>>)> {
	debug!("GET /api/admin/widgets/areas");
	let areas = crate::areas::get_areas(&app).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(areas))))
}

/// Routes of the widget admin API. Authentication is left to the embedding router.
pub fn routes() -> Router<App> {
	Router::new()
		.route("/api/admin/widgets", get(get_widget_admin))
		.route("/api/admin/widgets/areas", get(get_widget_areas))
}

// vim: ts=4
