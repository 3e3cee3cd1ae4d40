//! Widget admin HTTP handler tests

mod common;

use agora_core::hooks::HookRegistry;
use agora_widgets::{HOOK_GET_AREAS, routes};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::*;
use serde_json::json;
use tower::ServiceExt;

async fn get_json(app: agora_core::App, uri: &str) -> (StatusCode, serde_json::Value) {
	let router = routes().with_state(app);
	let response = router
		.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
		.await
		.unwrap();
	let status = response.status();
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
	(status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_get_widget_admin() {
	let fx = default_fixture();

	let (status, body) = get_json(fx.app.clone(), "/api/admin/widgets").await;

	assert_eq!(status, StatusCode::OK);
	assert!(body["time"].is_i64());
	assert_eq!(body["data"]["areas"].as_array().map(Vec::len), Some(6));
	assert_eq!(body["data"]["areas"][0]["data"]["length"], 0);
	assert_eq!(body["data"]["templates"][0]["template"], "global");
	assert_eq!(body["data"]["availableWidgets"], serde_json::json!([]));
}

#[tokio::test]
async fn test_get_widget_areas() {
	let fx = default_fixture();

	let (status, body) = get_json(fx.app.clone(), "/api/admin/widgets/areas").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["data"][5]["name"], "Draft Zone");
	assert!(fx.templates.rendered.lock().is_empty());
}

#[tokio::test]
async fn test_collaborator_error_maps_to_json_error() {
	let fx = fixture(
		HookRegistry::new(),
		MockGroupAdapter::default(),
		MockWidgetAdapter::default().failing_on("global", "sidebar"),
		MockTemplateAdapter::new(""),
	);

	let (status, body) = get_json(fx.app.clone(), "/api/admin/widgets").await;

	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error"]["code"], "E-NOT-FOUND");
}

#[tokio::test]
async fn test_malformed_hook_result_is_server_error() {
	let hooks = HookRegistry::new();
	hooks.register_filter(HOOK_GET_AREAS, |_| async { Ok(json!([{ "name": "x" }])) });
	let fx = fixture(
		hooks,
		MockGroupAdapter::default(),
		MockWidgetAdapter::default(),
		MockTemplateAdapter::new(""),
	);

	let (status, body) = get_json(fx.app.clone(), "/api/admin/widgets").await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(body["error"]["code"], "E-INTERNAL");
	assert_eq!(body["error"]["message"], "Internal server error");
}

#[tokio::test]
async fn test_render_failure_is_server_error() {
	let mut templates = MockTemplateAdapter::new("");
	templates.fail = true;
	let fx = fixture(
		HookRegistry::new(),
		MockGroupAdapter::default(),
		MockWidgetAdapter::default(),
		templates,
	);

	let (status, body) = get_json(fx.app.clone(), "/api/admin/widgets").await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(body["error"]["code"], "E-INTERNAL");
}

// vim: ts=4
