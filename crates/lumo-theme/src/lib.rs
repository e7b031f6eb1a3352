//! Setting declarations for the Lumo theme.
//!
//! Declares every admin-editable setting of the theme and assembles them
//! into the tabbed container the host admin UI renders. The builder runs
//! once per admin page load, guarded by the host's full-administration-tree
//! flag; page-rendering code reads the values back through the settings
//! service in `lumo-core`.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod lang;
pub mod pages;

mod prelude;

pub use builder::{build_settings, discover_preset_choices, expand_repeat_group};
pub use lang::EnglishTexts;

// vim: ts=4
