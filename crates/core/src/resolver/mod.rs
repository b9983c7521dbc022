//! Configuration resolution engine.
//!
//! This module provides identity-keyed list merging, per-layer effective
//! configuration, and field spec binding against a layer writer.
//!
//! # Example
//!
//! ```ignore
//! use strata_core::resolver::engine::ConfigResolver;
//!
//! let mut resolver = ConfigResolver::new(config);
//! resolver.apply_dataset(&mut root)?;
//! let effective = resolver.resolve_layer("points")?;
//! ```
pub mod engine;
pub mod fields;
pub mod merge;
