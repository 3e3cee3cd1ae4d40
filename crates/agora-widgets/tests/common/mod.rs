//! Common test utilities and helpers
//!
//! In-memory adapters standing in for the group store, the widget area
//! resolver and the template renderer, plus an app builder wiring them up.

#![allow(dead_code)]

use agora_core::app::{App, AppBuilder};
use agora_core::hooks::HookRegistry;
use agora_types::error::{ClResult, Error};
use agora_types::group_adapter::GroupAdapter;
use agora_types::template_adapter::TemplateAdapter;
use agora_types::widget::{AreaData, GroupInfo};
use agora_types::widget_adapter::WidgetAdapter;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Group store returning a fixed list and recording its calls
#[derive(Debug, Default)]
pub struct MockGroupAdapter {
	pub groups: Vec<GroupInfo>,
	pub calls: Mutex<Vec<(String, i64, i64)>>,
	pub fail: bool,
}

#[async_trait]
impl GroupAdapter for MockGroupAdapter {
	async fn list_non_privilege_groups(
		&self,
		sort_key: &str,
		start: i64,
		stop: i64,
	) -> ClResult<Vec<GroupInfo>> {
		self.calls.lock().push((sort_key.to_string(), start, stop));
		if self.fail {
			return Err(Error::Internal("group store unavailable".into()));
		}
		Ok(self.groups.clone())
	}
}

/// Area resolver reporting a configured length per `(template, location)`.
///
/// Later areas complete first: each lookup yields to the scheduler a number of
/// times that decreases with the call order, so results arrive out of order.
#[derive(Debug, Default)]
pub struct MockWidgetAdapter {
	pub lengths: HashMap<(String, String), u64>,
	pub failing: Option<(String, String)>,
	pub calls: Mutex<Vec<(String, String)>>,
}

impl MockWidgetAdapter {
	pub fn with_length(mut self, template: &str, location: &str, length: u64) -> Self {
		self.lengths.insert((template.to_string(), location.to_string()), length);
		self
	}

	pub fn failing_on(mut self, template: &str, location: &str) -> Self {
		self.failing = Some((template.to_string(), location.to_string()));
		self
	}
}

#[async_trait]
impl WidgetAdapter for MockWidgetAdapter {
	async fn read_area(&self, template: &str, location: &str) -> ClResult<AreaData> {
		let key = (template.to_string(), location.to_string());
		let order = {
			let mut calls = self.calls.lock();
			calls.push(key.clone());
			calls.len()
		};
		for _ in 0..(16_usize.saturating_sub(order)) {
			tokio::task::yield_now().await;
		}

		if self.failing.as_ref() == Some(&key) {
			return Err(Error::NotFound);
		}
		Ok(AreaData::new(self.lengths.get(&key).copied().unwrap_or(0)))
	}
}

/// Template renderer returning a fixed string and recording the contexts it got
#[derive(Debug)]
pub struct MockTemplateAdapter {
	pub output: String,
	pub rendered: Mutex<Vec<(String, serde_json::Value)>>,
	pub fail: bool,
}

impl MockTemplateAdapter {
	pub fn new(output: &str) -> Self {
		Self { output: output.to_string(), rendered: Mutex::new(Vec::new()), fail: false }
	}
}

#[async_trait]
impl TemplateAdapter for MockTemplateAdapter {
	async fn render(&self, name: &str, context: &serde_json::Value) -> ClResult<String> {
		self.rendered.lock().push((name.to_string(), context.clone()));
		if self.fail {
			return Err(Error::ConfigError(format!("cannot render {}", name)));
		}
		Ok(self.output.clone())
	}
}

pub struct Fixture {
	pub app: App,
	pub hooks: Arc<HookRegistry>,
	pub groups: Arc<MockGroupAdapter>,
	pub widgets: Arc<MockWidgetAdapter>,
	pub templates: Arc<MockTemplateAdapter>,
}

pub fn fixture(
	hooks: HookRegistry,
	groups: MockGroupAdapter,
	widgets: MockWidgetAdapter,
	templates: MockTemplateAdapter,
) -> Fixture {
	let hooks = Arc::new(hooks);
	let groups = Arc::new(groups);
	let widgets = Arc::new(widgets);
	let templates = Arc::new(templates);

	let mut builder = AppBuilder::new();
	builder
		.hooks(hooks.clone())
		.group_adapter(groups.clone())
		.widget_adapter(widgets.clone())
		.template_adapter(templates.clone());
	let app = builder.build().expect("app should build with all adapters");

	Fixture { app, hooks, groups, widgets, templates }
}

pub fn default_fixture() -> Fixture {
	fixture(
		HookRegistry::new(),
		MockGroupAdapter::default(),
		MockWidgetAdapter::default(),
		MockTemplateAdapter::new("<settings/>"),
	)
}

pub fn group(name: &str, system: i64) -> GroupInfo {
	let mut extra = serde_json::Map::new();
	extra.insert("name".to_string(), serde_json::Value::String(name.to_string()));
	GroupInfo { system, extra }
}

pub fn group_names(context: &serde_json::Value) -> Vec<String> {
	context["groups"]
		.as_array()
		.map(|groups| {
			groups.iter().filter_map(|g| g["name"].as_str().map(str::to_string)).collect()
		})
		.unwrap_or_default()
}

// vim: ts=4
