//! Topic catalog and lookup over segmented cheat sheets.
//!
//! An [`Adapter`] owns one loaded document and answers topic queries for it.
//! A [`Registry`] maps language prefixes to adapters and resolves
//! `language/topic` strings across all of them.
//!
//! Everything is loaded eagerly by [`build_registry`] (or
//! [`Registry::from_config`]) and immutable afterwards, so a registry can be
//! shared between threads without locking.

pub mod adapter;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;

pub use adapter::{Adapter, LEARN_TOPIC, LIST_TOPIC, MatchMode, PrefixMatch};
pub use config::{CatalogConfig, load_config};
pub use error::{Error, Result};
pub use registry::{LoadPolicy, Registry, build_registry};
