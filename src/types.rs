// src/types.rs
//! Common data structures shared by the graph, ranking and loader modules.

use std::collections::{HashMap, HashSet};

/// Movie title -> credited actor names.
pub type CastIndex = HashMap<String, HashSet<String>>;

/// Movie title -> numeric rating. Titles absent from the table are
/// treated as unrated (0.0) wherever they are looked up.
pub type RatingTable = HashMap<String, f64>;

/// A directed, film-labeled connection between two actor nodes.
///
/// Every co-starring pair produces both directions, so the underlying
/// relation is symmetric. Traversal needs the explicit `from` side to
/// reconstruct paths without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub film: String,
}

/// Actor name -> outgoing edges, derived from the cast index.
///
/// Actors with no co-stars never appear as keys: a missing key means
/// "unknown in graph", not "isolated node".
pub type Adjacency = HashMap<String, Vec<Edge>>;
