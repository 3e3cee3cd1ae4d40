//! Widgets available for placement, with their settings panel

use agora_types::group_adapter::NO_LIMIT;
use agora_types::hook_dispatcher::fire_filter;
use agora_types::widget::WidgetData;

use crate::prelude::*;

/// Filter hook plugins use to register their widgets
pub const HOOK_GET_WIDGETS: &str = "filter:widgets.getWidgets";

/// Renders the settings panel shared by all widgets.
///
/// The panel lists non-privilege groups, system groups first. Groups with the
/// same `system` flag keep the order the group store returned them in.
pub async fn render_admin_template(app: &App) -> ClResult<String> {
	let mut groups =
		app.group_adapter.list_non_privilege_groups(&app.opts.group_sort_key, 0, NO_LIMIT).await?;
	// Stable sort
	groups.sort_by(|a, b| b.system.cmp(&a.system));

	let context = serde_json::json!({ "groups": groups });
	app.template_adapter.render(&app.opts.widget_settings_template, &context).await
}

/// Returns every widget plugins register, with the settings panel appended to its content.
///
/// The hook and the panel render run concurrently; the panel is rendered even
/// when no widget is registered.
pub async fn get_available_widgets(app: &App) -> ClResult<Vec<WidgetData>> {
	let (widgets, admin_template) = tokio::try_join!(
		fire_filter(app.hooks.as_ref(), HOOK_GET_WIDGETS, Vec::<WidgetData>::new()),
		render_admin_template(app),
	)?;

	debug!(count = widgets.len(), "Collected available widgets");
	Ok(widgets.iter().map(|widget| widget.with_appended_content(&admin_template)).collect())
}

// vim: ts=4
