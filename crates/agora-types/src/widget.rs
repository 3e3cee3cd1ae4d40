//! Data model of the widget admin page

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Attributes this crate does not interpret, kept verbatim
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Content currently placed into an area, as reported by the area resolver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaData {
	pub length: u64,
	#[serde(flatten)]
	pub extra: Extra,
}

impl AreaData {
	pub fn new(length: u64) -> Self {
		Self { length, extra: Extra::new() }
	}
}

/// A widget available for placement. Only `content` is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetData {
	#[serde(default)]
	pub content: String,
	#[serde(flatten)]
	pub extra: Extra,
}

impl WidgetData {
	pub fn new(content: impl Into<String>) -> Self {
		Self { content: content.into(), extra: Extra::new() }
	}

	/// Returns a copy of this widget with `suffix` appended to its content
	pub fn with_appended_content(&self, suffix: &str) -> Self {
		let mut content = String::with_capacity(self.content.len() + suffix.len());
		content.push_str(&self.content);
		content.push_str(suffix);
		Self { content, extra: self.extra.clone() }
	}
}

/// A layout slot where widgets can be placed
///
/// Areas are identified by their `(template, location)` pair for display, but
/// duplicates are kept as separate entries.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
	pub name: String,
	pub template: String,
	pub location: String,
	pub widgets: Option<Vec<WidgetData>>,
	pub data: Option<AreaData>,
}

impl Area {
	pub fn new(
		name: impl Into<String>,
		template: impl Into<String>,
		location: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			template: template.into(),
			location: location.into(),
			widgets: None,
			data: None,
		}
	}

	pub fn with_data(mut self, data: AreaData) -> Self {
		self.data = Some(data);
		self
	}
}

/// Name and location of an area inside a [`TemplateInfo`] group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateArea {
	pub name: String,
	pub location: String,
}

/// Areas grouped by the template file they belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfo {
	pub template: String,
	pub areas: Vec<TemplateArea>,
}

/// Group record as returned by the group store. Only `system` is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupInfo {
	#[serde(default)]
	pub system: i64,
	#[serde(flatten)]
	pub extra: Extra,
}

/// View model of the widget admin page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminInfo {
	pub templates: Vec<TemplateInfo>,
	pub areas: Vec<Area>,
	pub available_widgets: Vec<WidgetData>,
}


// vim: ts=4
