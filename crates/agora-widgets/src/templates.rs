//! Grouping of areas by template

use agora_types::widget::{Area, TemplateArea, TemplateInfo};
use std::collections::HashMap;

/// Groups areas by their template.
///
/// Groups appear in the order their template is first seen; areas keep their
/// relative order inside a group. Only `name` and `location` are carried over.
pub fn build_templates_from_areas(areas: &[Area]) -> Vec<TemplateInfo> {
	let mut templates: Vec<TemplateInfo> = Vec::new();
	let mut index: HashMap<&str, usize> = HashMap::new();

	for area in areas {
		let pos = *index.entry(area.template.as_str()).or_insert_with(|| {
			templates.push(TemplateInfo { template: area.template.clone(), areas: Vec::new() });
			templates.len() - 1
		});

		templates[pos]
			.areas
			.push(TemplateArea { name: area.name.clone(), location: area.location.clone() });
	}

	templates
}


// vim: ts=4
