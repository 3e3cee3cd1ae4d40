//! Adapter that provides read access to user groups.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;
use crate::widget::GroupInfo;

/// Upper bound for [`GroupAdapter::list_non_privilege_groups`] meaning "no limit"
pub const NO_LIMIT: i64 = -1;

#[async_trait]
pub trait GroupAdapter: Debug + Send + Sync {
	/// Lists groups that are not privilege groups, ordered by `sort_key`.
	///
	/// `start` and `stop` are inclusive indexes; a `stop` of [`NO_LIMIT`]
	/// returns every group from `start` on.
	async fn list_non_privilege_groups(
		&self,
		sort_key: &str,
		start: i64,
		stop: i64,
	) -> ClResult<Vec<GroupInfo>>;
}

// vim: ts=4
