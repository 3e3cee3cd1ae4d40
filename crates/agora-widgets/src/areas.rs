//! Layout areas available for widget placement

use agora_types::hook_dispatcher::fire_filter;
use agora_types::widget::Area;
use futures::future::try_join_all;

use crate::prelude::*;

/// Filter hook plugins use to add, remove, or reorder widget areas
pub const HOOK_GET_AREAS: &str = "filter:widgets.getAreas";

const DRAFT_ZONE_TEMPLATE: &str = "global";
const DRAFT_ZONE_LOCATION: &str = "drafts";

/// Areas offered before plugins get a say
pub fn default_areas() -> Vec<Area> {
	vec![
		Area::new("Global Sidebar", "global", "sidebar"),
		Area::new("Global Header", "global", "header"),
		Area::new("Global Footer", "global", "footer"),
		Area::new("Group Page (Left)", "groups/details.tpl", "left"),
		Area::new("Group Page (Right)", "groups/details.tpl", "right"),
	]
}

/// Parking area for widgets that are not placed anywhere yet
pub fn draft_zone() -> Area {
	Area::new("Draft Zone", DRAFT_ZONE_TEMPLATE, DRAFT_ZONE_LOCATION)
}

fn is_draft_zone(area: &Area) -> bool {
	area.template == DRAFT_ZONE_TEMPLATE && area.location == DRAFT_ZONE_LOCATION
}

/// Returns every widget area, each annotated with the content currently placed in it.
///
/// The default areas pass through [`HOOK_GET_AREAS`]; the Draft Zone is always
/// appended last, exactly once. Area data is fetched concurrently and the first
/// failure fails the whole call.
pub async fn get_areas(app: &App) -> ClResult<Vec<Area>> {
	let mut areas = fire_filter(app.hooks.as_ref(), HOOK_GET_AREAS, default_areas()).await?;

	let before = areas.len();
	areas.retain(|area| !is_draft_zone(area));
	if areas.len() != before {
		debug!("Dropped plugin-provided Draft Zone entries");
	}
	areas.push(draft_zone());

	// Each future owns its area, so results cannot be paired with the wrong entry
	let areas = try_join_all(areas.into_iter().map(|area| async move {
		let data =
			app.widget_adapter.read_area(&area.template, &area.location).await.inspect_err(|e| {
				warn!(
					template = %area.template,
					location = %area.location,
					error = %e,
					"Failed to read widget area"
				);
			})?;
		Ok::<_, Error>(area.with_data(data))
	}))
	.await?;

	debug!(count = areas.len(), "Resolved widget areas");
	Ok(areas)
}


// vim: ts=4
