//! App state type and builder

use std::sync::Arc;

use agora_types::group_adapter::GroupAdapter;
use agora_types::hook_dispatcher::HookDispatcher;
use agora_types::template_adapter::TemplateAdapter;
use agora_types::widget_adapter::WidgetAdapter;

use crate::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,

	pub hooks: Arc<dyn HookDispatcher>,
	pub template_adapter: Arc<dyn TemplateAdapter>,
	pub group_adapter: Arc<dyn GroupAdapter>,
	pub widget_adapter: Arc<dyn WidgetAdapter>,
}

pub type App = Arc<AppState>;

pub struct Adapters {
	pub hooks: Option<Arc<dyn HookDispatcher>>,
	pub template_adapter: Option<Arc<dyn TemplateAdapter>>,
	pub group_adapter: Option<Arc<dyn GroupAdapter>>,
	pub widget_adapter: Option<Arc<dyn WidgetAdapter>>,
}

#[derive(Debug, Clone)]
pub struct AppBuilderOpts {
	/// Template rendered into every available widget's settings panel
	pub widget_settings_template: Box<str>,
	/// Sort key passed to the group store when listing groups for the settings panel
	pub group_sort_key: Box<str>,
}

impl Default for AppBuilderOpts {
	fn default() -> Self {
		Self {
			widget_settings_template: "admin/partials/widget-settings".into(),
			group_sort_key: "groups:createtime".into(),
		}
	}
}

/// Install the global tracing subscriber (filter from `RUST_LOG`).
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.try_init();
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	adapters: Adapters,
}

impl AppBuilder {
	pub fn new() -> Self {
		init_tracing();
		AppBuilder {
			opts: AppBuilderOpts::default(),
			adapters: Adapters {
				hooks: None,
				template_adapter: None,
				group_adapter: None,
				widget_adapter: None,
			},
		}
	}

	// Opts
	pub fn widget_settings_template(&mut self, template: impl Into<Box<str>>) -> &mut Self {
		self.opts.widget_settings_template = template.into();
		self
	}
	pub fn group_sort_key(&mut self, sort_key: impl Into<Box<str>>) -> &mut Self {
		self.opts.group_sort_key = sort_key.into();
		self
	}

	// Adapters
	pub fn hooks(&mut self, hooks: Arc<dyn HookDispatcher>) -> &mut Self {
		self.adapters.hooks = Some(hooks);
		self
	}
	pub fn template_adapter(&mut self, template_adapter: Arc<dyn TemplateAdapter>) -> &mut Self {
		self.adapters.template_adapter = Some(template_adapter);
		self
	}
	pub fn group_adapter(&mut self, group_adapter: Arc<dyn GroupAdapter>) -> &mut Self {
		self.adapters.group_adapter = Some(group_adapter);
		self
	}
	pub fn widget_adapter(&mut self, widget_adapter: Arc<dyn WidgetAdapter>) -> &mut Self {
		self.adapters.widget_adapter = Some(widget_adapter);
		self
	}

	pub fn build(self) -> ClResult<App> {
		let Some(hooks) = self.adapters.hooks else {
			error!("FATAL: No hook dispatcher configured");
			return Err(Error::ConfigError("No hook dispatcher configured".to_string()));
		};
		let Some(template_adapter) = self.adapters.template_adapter else {
			error!("FATAL: No template adapter configured");
			return Err(Error::ConfigError("No template adapter configured".to_string()));
		};
		let Some(group_adapter) = self.adapters.group_adapter else {
			error!("FATAL: No group adapter configured");
			return Err(Error::ConfigError("No group adapter configured".to_string()));
		};
		let Some(widget_adapter) = self.adapters.widget_adapter else {
			error!("FATAL: No widget adapter configured");
			return Err(Error::ConfigError("No widget adapter configured".to_string()));
		};

		info!(
			version = VERSION,
			settings_template = %self.opts.widget_settings_template,
			"Agora app state initialized"
		);

		Ok(Arc::new(AppState {
			opts: self.opts,
			hooks,
			template_adapter,
			group_adapter,
			widget_adapter,
		}))
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}


// vim: ts=4
