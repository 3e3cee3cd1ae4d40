//! Template adapter rendering Handlebars templates.
//!
//! Templates are looked up by name: first among templates registered from
//! strings, then as `<template_dir>/<name>.tpl` on disk. File templates are
//! read on every render, so edits show up without a restart.

use async_trait::async_trait;
use handlebars::Handlebars;
use parking_lot::RwLock;
use std::path::{Component, Path, PathBuf};

use agora_types::prelude::*;
use agora_types::template_adapter::TemplateAdapter;

pub const TEMPLATE_EXTENSION: &str = "tpl";

pub struct TemplateAdapterHandlebars {
	template_dir: PathBuf,
	handlebars: RwLock<Handlebars<'static>>,
}

impl std::fmt::Debug for TemplateAdapterHandlebars {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TemplateAdapterHandlebars")
			.field("template_dir", &self.template_dir)
			.field("registered", &self.handlebars.read().get_templates().len())
			.finish()
	}
}

impl TemplateAdapterHandlebars {
	pub fn new(template_dir: impl Into<PathBuf>) -> Self {
		let mut handlebars = Handlebars::new();
		// Enable strict mode to catch undefined variables
		handlebars.set_strict_mode(true);

		Self { template_dir: template_dir.into(), handlebars: RwLock::new(handlebars) }
	}

	/// Register a template from source. Registered templates shadow files of the same name.
	pub fn register_template_string(&self, name: &str, source: &str) -> ClResult<()> {
		self.handlebars.write().register_template_string(name, source).map_err(|e| {
			Error::Internal(format!("Failed to compile template '{}': {}", name, e))
		})?;
		debug!("Registered template: {}", name);
		Ok(())
	}

	/// Resolve a template name to its file, refusing names that leave the template directory
	fn template_path(&self, name: &str) -> ClResult<PathBuf> {
		let relative = Path::new(name);
		if name.is_empty() || !relative.components().all(|c| matches!(c, Component::Normal(_))) {
			warn!("Rejected template name: {:?}", name);
			return Err(Error::ConfigError(format!("Invalid template name: {}", name)));
		}
		Ok(self.template_dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION)))
	}

	async fn load_template(&self, name: &str) -> ClResult<String> {
		let path = self.template_path(name)?;
		match tokio::fs::read_to_string(&path).await {
			Ok(source) => {
				debug!("Loaded template: {}", path.display());
				Ok(source)
			}
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				warn!("Template not found: {}", path.display());
				Err(Error::ConfigError(format!("Template not found: {}", path.display())))
			}
			Err(e) => Err(Error::Internal(format!(
				"Failed to read template {}: {}",
				path.display(),
				e
			))),
		}
	}
}

#[async_trait]
impl TemplateAdapter for TemplateAdapterHandlebars {
	async fn render(&self, name: &str, context: &serde_json::Value) -> ClResult<String> {
		{
			let handlebars = self.handlebars.read();
			if handlebars.has_template(name) {
				return handlebars.render(name, context).map_err(|e| {
					Error::Internal(format!("Failed to render template '{}': {}", name, e))
				});
			}
		}

		let source = self.load_template(name).await?;
		self.handlebars.read().render_template(&source, context).map_err(|e| {
			Error::Internal(format!("Failed to render template '{}': {}", name, e))
		})
	}
}


// vim: ts=4
