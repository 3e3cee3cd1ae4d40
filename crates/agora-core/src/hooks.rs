//! Filter hook registry
//!
//! Plugins register async handlers under a hook name. Firing a hook folds the
//! seed value through the handlers in registration order.

use agora_types::hook_dispatcher::HookDispatcher;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

use crate::prelude::*;

/// Result type for hook functions
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Filter handler: receives the current value, returns the next one
pub type FilterFunction =
	Arc<dyn Fn(serde_json::Value) -> BoxFuture<'static, ClResult<serde_json::Value>> + Send + Sync>;

/// Registry of filter hook handlers
pub struct HookRegistry {
	filters: RwLock<HashMap<String, Vec<FilterFunction>>>,
}

impl HookRegistry {
	/// Create a new empty hook registry
	pub fn new() -> Self {
		Self { filters: RwLock::new(HashMap::new()) }
	}

	/// Append a handler to the chain of `hook`
	pub fn register_filter<F, Fut>(&self, hook: &str, function: F)
	where
		F: Fn(serde_json::Value) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = ClResult<serde_json::Value>> + Send + 'static,
	{
		let function: FilterFunction =
			Arc::new(move |value| -> BoxFuture<'static, ClResult<serde_json::Value>> {
				Box::pin(function(value))
			});
		self.filters.write().entry(hook.to_string()).or_default().push(function);
		debug!(hook = %hook, "Registered filter hook");
	}

	/// Number of handlers registered for `hook`
	pub fn filter_count(&self, hook: &str) -> usize {
		self.filters.read().get(hook).map_or(0, Vec::len)
	}
}

impl Default for HookRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for HookRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let filters = self.filters.read();
		let mut map = f.debug_map();
		for (hook, chain) in filters.iter() {
			map.entry(hook, &chain.len());
		}
		map.finish()
	}
}

#[async_trait]
impl HookDispatcher for HookRegistry {
	fn has_filter(&self, hook: &str) -> bool {
		self.filter_count(hook) > 0
	}

	async fn fire(&self, hook: &str, seed: serde_json::Value) -> ClResult<serde_json::Value> {
		// Snapshot the chain so the lock is not held across handler awaits
		let chain: Vec<FilterFunction> =
			self.filters.read().get(hook).cloned().unwrap_or_default();

		let mut value = seed;
		for (i, function) in chain.iter().enumerate() {
			value = function(value).await.inspect_err(|e| {
				warn!(hook = %hook, handler = i, error = %e, "Filter hook handler failed");
			})?;
		}
		Ok(value)
	}
}


// vim: ts=4
