// src/data/mod.rs
//! Loaders for the external datasets: the cast index (JSON) and the
//! ratings table (CSV).

pub mod cast;
pub mod ratings;

pub use cast::load_cast_index;
pub use ratings::{load_ratings, RatingsLoad};
