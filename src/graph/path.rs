// src/graph/path.rs
//! Breadth-first shortest-path search between two actors, tracking the
//! film that first discovers each node so the chain can be replayed.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{Adjacency, Edge};

/// One step along a discovered path: the connecting film and the
/// co-star reached through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub film: String,
    pub actor: String,
}

/// Result of a narrative path query.
///
/// Same-actor, unknown-actor and no-connection are answers, not errors;
/// callers must be able to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Start and end name the same actor; no search was performed.
    SameActor,
    /// Start or end never appears in the adjacency structure.
    UnknownActor,
    /// Both actors are known but no chain of shared credits links them.
    NoConnection,
    /// A shortest chain was found.
    Found(Connection),
}

/// A discovered chain of shared film credits from start to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub start: String,
    pub hops: Vec<Hop>,
}

impl Connection {
    /// Number of films on the path, i.e. the degree of separation.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.hops.len()
    }

    /// Renders the chain as `X was in F with Y was in G with Z`.
    #[must_use]
    pub fn narrative(&self) -> String {
        let mut out = self.start.clone();
        for hop in &self.hops {
            out.push_str(" was in ");
            out.push_str(&hop.film);
            out.push_str(" with ");
            out.push_str(&hop.actor);
        }
        out
    }
}

/// Finds the shortest chain between two actors and reports it as a
/// narrative outcome.
///
/// Both endpoints are validated up front: querying an actor against
/// itself, or naming an actor absent from the adjacency structure,
/// short-circuits without searching.
#[must_use]
pub fn narrative_path(adjacency: &Adjacency, start: &str, end: &str) -> PathOutcome {
    if start == end {
        return PathOutcome::SameActor;
    }
    if !adjacency.contains_key(start) || !adjacency.contains_key(end) {
        return PathOutcome::UnknownActor;
    }

    match bfs(adjacency, start, end) {
        Some(trace) => PathOutcome::Found(reconstruct(start, end, &trace)),
        None => PathOutcome::NoConnection,
    }
}

/// Films along the shortest chain, in start-to-end order.
///
/// Unlike [`narrative_path`] this entry point does not pre-validate its
/// endpoints: an unknown start (or start equal to end) never discovers
/// `end`, so the traversal terminates with an empty result on its own.
#[must_use]
pub fn film_path(adjacency: &Adjacency, start: &str, end: &str) -> Vec<String> {
    match bfs(adjacency, start, end) {
        Some(trace) => reconstruct(start, end, &trace)
            .hops
            .into_iter()
            .map(|hop| hop.film)
            .collect(),
        None => Vec::new(),
    }
}

/// Runs the search, returning the trace that maps each discovered actor
/// to the edge that first reached it, or `None` if `end` was never
/// discovered. The search stops as soon as `end` enters the frontier.
fn bfs<'a>(
    adjacency: &'a Adjacency,
    start: &'a str,
    end: &str,
) -> Option<HashMap<&'a str, &'a Edge>> {
    let mut frontier: VecDeque<&str> = VecDeque::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut trace: HashMap<&str, &Edge> = HashMap::new();

    frontier.push_back(start);
    visited.insert(start);

    while let Some(current) = frontier.pop_front() {
        for edge in adjacency.get(current).map_or(&[][..], Vec::as_slice) {
            let neighbor = edge.to.as_str();
            if !visited.insert(neighbor) {
                continue;
            }
            frontier.push_back(neighbor);
            trace.insert(neighbor, edge);

            if neighbor == end {
                return Some(trace);
            }
        }
    }

    None
}

/// Walks the trace backward from `end`, then reverses the hops into
/// start-to-end order. A missing trace entry mid-walk stops the walk
/// and keeps whatever prefix has been built.
fn reconstruct(start: &str, end: &str, trace: &HashMap<&str, &Edge>) -> Connection {
    let mut hops = Vec::new();
    let mut current = end;

    while current != start {
        let Some(edge) = trace.get(current) else {
            break;
        };
        hops.push(Hop {
            film: edge.film.clone(),
            actor: current.to_string(),
        });
        current = edge.from.as_str();
    }

    hops.reverse();
    Connection {
        start: start.to_string(),
        hops,
    }
}
