// tests/unit_path.rs
//! Tests for the BFS path finder and its two entry points.

use costar_core::graph::{build_adjacency, film_path, narrative_path, PathOutcome};
use costar_core::types::CastIndex;

fn index(films: &[(&str, &[&str])]) -> CastIndex {
    films
        .iter()
        .map(|(film, cast)| {
            (
                (*film).to_string(),
                cast.iter().map(|a| (*a).to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn test_two_hop_chain() {
    let adjacency = build_adjacency(&index(&[
        ("Movie A", &["Alice", "Bob"]),
        ("Movie B", &["Bob", "Carol"]),
    ]));

    match narrative_path(&adjacency, "Alice", "Carol") {
        PathOutcome::Found(connection) => {
            assert_eq!(connection.degree(), 2);
            assert_eq!(
                connection.narrative(),
                "Alice was in Movie A with Bob was in Movie B with Carol"
            );
        }
        other => panic!("expected a connection, got {other:?}"),
    }

    assert_eq!(
        film_path(&adjacency, "Alice", "Carol"),
        vec!["Movie A".to_string(), "Movie B".to_string()]
    );
}

#[test]
fn test_same_actor_short_circuits_even_when_unknown() {
    let adjacency = build_adjacency(&index(&[("Movie A", &["Alice", "Bob"])]));

    assert_eq!(
        narrative_path(&adjacency, "Alice", "Alice"),
        PathOutcome::SameActor
    );
    // The check runs before any graph lookup.
    assert_eq!(
        narrative_path(&adjacency, "Zed", "Zed"),
        PathOutcome::SameActor
    );
}

#[test]
fn test_unknown_actor_is_reported_before_searching() {
    let adjacency = build_adjacency(&index(&[("Movie A", &["Alice", "Bob"])]));

    assert_eq!(
        narrative_path(&adjacency, "Alice", "Zed"),
        PathOutcome::UnknownActor
    );
    assert_eq!(
        narrative_path(&adjacency, "Zed", "Alice"),
        PathOutcome::UnknownActor
    );
}

#[test]
fn test_disjoint_components_have_no_connection() {
    let adjacency = build_adjacency(&index(&[
        ("M1", &["A", "B"]),
        ("M2", &["C", "D"]),
    ]));

    assert_eq!(
        narrative_path(&adjacency, "A", "D"),
        PathOutcome::NoConnection
    );
    assert!(film_path(&adjacency, "A", "D").is_empty());
}

#[test]
fn test_film_path_is_lenient_about_its_endpoints() {
    // The film-list entry point does not pre-validate: an unknown start
    // or identical endpoints just never discover `end`.
    let adjacency = build_adjacency(&index(&[("Movie A", &["Alice", "Bob"])]));

    assert!(film_path(&adjacency, "Zed", "Alice").is_empty());
    assert!(film_path(&adjacency, "Alice", "Alice").is_empty());
}

#[test]
fn test_shortest_path_wins_over_longer_route() {
    // A reaches D directly through "Shortcut" even though the chain
    // A-B-C-D also exists.
    let adjacency = build_adjacency(&index(&[
        ("Leg One", &["A", "B"]),
        ("Leg Two", &["B", "C"]),
        ("Leg Three", &["C", "D"]),
        ("Shortcut", &["A", "D"]),
    ]));

    match narrative_path(&adjacency, "A", "D") {
        PathOutcome::Found(connection) => assert_eq!(connection.degree(), 1),
        other => panic!("expected a connection, got {other:?}"),
    }
    assert_eq!(film_path(&adjacency, "A", "D"), vec!["Shortcut".to_string()]);
}

#[test]
fn test_degree_counts_films_not_actors() {
    let adjacency = build_adjacency(&index(&[
        ("F1", &["A", "B"]),
        ("F2", &["B", "C"]),
        ("F3", &["C", "D"]),
    ]));

    match narrative_path(&adjacency, "A", "D") {
        PathOutcome::Found(connection) => {
            assert_eq!(connection.degree(), 3);
            assert_eq!(connection.hops.len(), 3);
        }
        other => panic!("expected a connection, got {other:?}"),
    }
}

#[test]
fn test_reconstructed_chain_replays_through_the_casts() {
    let cast_index = index(&[
        ("Heat", &["Al", "Bob", "Val"]),
        ("Ronin", &["Bob", "Jean", "Stellan"]),
        ("Nikita", &["Jean", "Anne"]),
        ("Leon", &["Jean", "Gary", "Natalie"]),
    ]);
    let adjacency = build_adjacency(&cast_index);

    let PathOutcome::Found(connection) = narrative_path(&adjacency, "Al", "Natalie") else {
        panic!("expected a connection");
    };

    // Walk the chain forward: each hop's film must credit both the
    // actor we came from and the actor we reach.
    let mut current = connection.start.clone();
    for hop in &connection.hops {
        let cast = &cast_index[&hop.film];
        assert!(cast.contains(&current), "{current} not in {}", hop.film);
        assert!(cast.contains(&hop.actor), "{} not in {}", hop.actor, hop.film);
        current = hop.actor.clone();
    }
    assert_eq!(current, "Natalie");
}
