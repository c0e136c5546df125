// src/graph/builder.rs
//! Adjacency construction from per-movie cast lists.

use crate::types::{Adjacency, CastIndex, Edge};

/// Builds the actor adjacency structure from the cast index.
///
/// For each film, every unordered pair of cast members contributes both
/// directed edges labeled with that film. Films with fewer than two
/// credited actors contribute nothing, so an actor with no co-stars
/// never appears as a key.
///
/// Rebuilding from an unchanged cast index yields the same node set and
/// the same edge multiset; only edge order within an actor's list may
/// differ, and nothing downstream depends on it.
#[must_use]
pub fn build_adjacency(cast_index: &CastIndex) -> Adjacency {
    let mut adjacency = Adjacency::new();

    for (film, cast) in cast_index {
        let actors: Vec<&String> = cast.iter().collect();
        for i in 0..actors.len() {
            for j in (i + 1)..actors.len() {
                insert_pair(&mut adjacency, actors[i], actors[j], film);
            }
        }
    }

    adjacency
}

fn insert_pair(adjacency: &mut Adjacency, a: &str, b: &str, film: &str) {
    adjacency.entry(a.to_string()).or_default().push(Edge {
        from: a.to_string(),
        to: b.to_string(),
        film: film.to_string(),
    });
    adjacency.entry(b.to_string()).or_default().push(Edge {
        from: b.to_string(),
        to: a.to_string(),
        film: film.to_string(),
    });
}
