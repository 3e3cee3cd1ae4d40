//! Adapter that resolves the widgets currently assigned to a layout area.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;
use crate::widget::AreaData;

#[async_trait]
pub trait WidgetAdapter: Debug + Send + Sync {
	/// Reads the content assigned to the area identified by `(template, location)`
	async fn read_area(&self, template: &str, location: &str) -> ClResult<AreaData>;
}

// vim: ts=4
