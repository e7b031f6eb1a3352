pub use lumo_types::prelude::*;

// vim: ts=4
