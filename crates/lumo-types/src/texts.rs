//! Localized UI text lookup

use std::fmt::Debug;

/// Resolves string ids to display text for labels and descriptions.
///
/// Implementations should return a recognizable marker for unknown ids
/// rather than failing; a missing translation must never break the admin
/// form.
pub trait Texts: Debug + Send + Sync {
	fn text(&self, id: &str) -> Box<str>;
}

// vim: ts=4
