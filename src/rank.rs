// src/rank.rs
//! Rating-based ordering of the films along a connection path.

use std::cmp::Ordering;

use crate::types::RatingTable;

/// Rating used when a film is absent from the table.
pub const UNRATED: f64 = 0.0;

/// Sorts films in descending order of rating.
///
/// The sort is stable: films with equal (or equally missing) ratings
/// keep their input order, and unrated films land after every rated
/// one. The comparison uses the full-precision value; one-decimal
/// rendering is display-only.
#[must_use]
pub fn rank_by_rating(mut films: Vec<String>, ratings: &RatingTable) -> Vec<String> {
    films.sort_by(|a, b| {
        let rating_a = rating_of(a, ratings);
        let rating_b = rating_of(b, ratings);
        rating_b.partial_cmp(&rating_a).unwrap_or(Ordering::Equal)
    });
    films
}

/// Looks up a film's rating, defaulting missing entries to [`UNRATED`].
#[must_use]
pub fn rating_of(film: &str, ratings: &RatingTable) -> f64 {
    ratings.get(film).copied().unwrap_or(UNRATED)
}

/// Renders a film with its rating to one decimal place, e.g. `Heat (8.3)`.
#[must_use]
pub fn display_line(film: &str, ratings: &RatingTable) -> String {
    format!("{film} ({:.1})", rating_of(film, ratings))
}
