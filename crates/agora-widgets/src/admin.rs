//! Combined view model of the widget admin page

use agora_types::widget::AdminInfo;

use crate::areas::get_areas;
use crate::available::get_available_widgets;
use crate::prelude::*;
use crate::templates::build_templates_from_areas;

/// Loads areas and available widgets concurrently and derives the template grouping.
///
/// Fails if either branch fails; no partial view model is returned.
pub async fn get(app: &App) -> ClResult<AdminInfo> {
	let (areas, available_widgets) =
		tokio::try_join!(get_areas(app), get_available_widgets(app))?;

	let templates = build_templates_from_areas(&areas);
	info!(
		templates = templates.len(),
		areas = areas.len(),
		widgets = available_widgets.len(),
		"Built widget admin view"
	);

	Ok(AdminInfo { templates, areas, available_widgets })
}

// vim: ts=4
