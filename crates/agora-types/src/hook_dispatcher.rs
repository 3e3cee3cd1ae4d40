//! Filter hook dispatcher interface.
//!
//! A filter hook is a named extension point: every handler registered under the
//! name receives the value produced by the previous handler and returns the next
//! one. Handlers see plain JSON, so plugins do not need to share Rust types with
//! the caller; [`fire_filter`] converts to and from the caller's type.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait HookDispatcher: Debug + Send + Sync {
	/// Returns true if at least one handler is registered for `hook`
	fn has_filter(&self, hook: &str) -> bool;

	/// Runs every handler registered for `hook` in registration order, starting
	/// from `seed`, and returns the final value
	async fn fire(&self, hook: &str, seed: serde_json::Value) -> ClResult<serde_json::Value>;
}

/// Fires a filter hook with a typed seed and reads the result back as the same type.
///
/// The result must keep the seed's shape; anything else is reported as
/// `Error::Internal` naming the hook: the caller's request is fine, a plugin
/// misbehaved.
pub async fn fire_filter<T>(dispatcher: &dyn HookDispatcher, hook: &str, seed: T) -> ClResult<T>
where
	T: Serialize + DeserializeOwned + Send,
{
	if !dispatcher.has_filter(hook) {
		return Ok(seed);
	}

	let value = serde_json::to_value(&seed)?;
	let result = dispatcher.fire(hook, value).await?;
	serde_json::from_value(result).map_err(|e| {
		warn!(hook = %hook, error = %e, "Filter hook returned a value of unexpected shape");
		Error::Internal(format!("Hook '{}' returned invalid data: {}", hook, e))
	})
}

// vim: ts=4
