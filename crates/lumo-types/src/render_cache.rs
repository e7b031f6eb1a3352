//! Render cache invalidation hook
//!
//! The host keeps compiled stylesheets and rendered fragments cached between
//! requests. Settings flagged with `invalidates_render_cache` fire this hook
//! after a successful write instead of dispatching through any global state.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait RenderCacheInvalidator: Debug + Send + Sync {
	/// Signals that all rendered theme output is stale
	async fn invalidate(&self) -> LmResult<()>;
}

// vim: ts=4
