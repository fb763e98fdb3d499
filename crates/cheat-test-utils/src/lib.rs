//! Shared test utilities for the cheatblocks workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`] — small cheat sheets following each built-in convention
//! - [`docs`] — [`TestDocs`](docs::TestDocs) temp-directory builder

pub mod docs;
pub mod fixtures;
