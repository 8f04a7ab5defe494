//! In-memory H3 readings dataset and query engine for Hexfield.
//!
//! This crate owns everything below the HTTP surface: the synthetic
//! dataset bound to resolution-12 H3 cells, the generator that builds it
//! once at startup, and the three read-only queries served over it:
//!
//! - **Descendant filter**: readings under a coarser ancestor cell
//! - **Polygon filter**: readings inside an arbitrary closed border
//! - **Hierarchical aggregation**: median signal level grouped by
//!   (ancestor cell, category)
//!
//! The dataset is an explicit immutable value. Nothing here holds global
//! state; callers construct a [`Dataset`] (usually via [`generate`]) and
//! pass it by reference into the query functions, which makes the engine
//! trivially shareable across worker threads and testable with small
//! hand-built datasets.
//!
//! # Modules
//!
//! - [`error`]: typed caller-input error taxonomy
//! - [`geo`]: geographic points, great-circle distance, border parsing
//! - [`grid`]: thin adapter over the `h3o` cell library
//! - [`reading`]: the `Reading` record and immutable `Dataset`
//! - [`generate`]: startup dataset synthesis
//! - [`query`]: the three read operations

pub mod error;
pub mod generate;
pub mod geo;
pub mod grid;
pub mod query;
pub mod reading;

pub use error::{GridError, Result};
pub use generate::{generate, GeneratorConfig};
pub use geo::{haversine_km, parse_border, GeoPoint};
pub use query::{aggregate, descendants, within_polygon, AggregateRow};
pub use reading::{Dataset, Reading};
