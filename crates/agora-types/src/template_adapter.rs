//! Adapter that renders named templates into HTML strings.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait TemplateAdapter: Debug + Send + Sync {
	/// Renders the template `name` (e.g. `"admin/partials/widget-settings"`)
	/// with the given JSON context
	async fn render(&self, name: &str, context: &serde_json::Value) -> ClResult<String>;
}

// vim: ts=4
