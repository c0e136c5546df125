// src/cli/handlers.rs
//! The query flow: load datasets, build the graph, search, report.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::data;
use crate::graph;
use crate::graph::PathOutcome;
use crate::rank;
use crate::types::RatingTable;

use super::Cli;

/// Runs a single connection query end to end.
///
/// # Errors
/// Returns an error if either dataset fails to load or stdin closes
/// mid-prompt. Unknown actors and missing connections are answers, not
/// errors, and exit cleanly.
pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli);

    let cast_index = data::load_cast_index(&config.cast_file)?;
    let ratings = data::load_ratings(&config.ratings_file)?;
    if config.verbose {
        println!(
            "Loaded {} films, {} ratings ({} rows skipped)",
            cast_index.len(),
            ratings.table.len(),
            ratings.skipped
        );
    }

    let actor1 = resolve_actor(cli.actor1.as_deref(), "Enter actor 1: ")?;
    let actor2 = resolve_actor(cli.actor2.as_deref(), "Enter actor 2: ")?;

    // The cast index is immutable for the rest of the run, so one
    // adjacency build serves both the narrative and the film-list query.
    let adjacency = graph::build_adjacency(&cast_index);

    match graph::narrative_path(&adjacency, &actor1, &actor2) {
        PathOutcome::SameActor => {
            println!("{}", "Start and end actor are the same.".yellow());
        }
        PathOutcome::UnknownActor => {
            println!("{}", "One or both actors not in dataset.".yellow());
        }
        PathOutcome::NoConnection => {
            println!("{}", "No connection found.".yellow());
        }
        PathOutcome::Found(connection) => {
            println!(
                "{} and {} have a degree of separation of {}.",
                actor1.bold(),
                actor2.bold(),
                connection.degree().to_string().green().bold()
            );
            println!();
            println!("{}", connection.narrative());

            if should_rank(cli.ranked)? {
                let films = graph::film_path(&adjacency, &actor1, &actor2);
                print_ranked(&films, &ratings.table);
            }
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Config {
    let mut config = Config::load();
    if let Some(data) = &cli.data {
        config.cast_file.clone_from(data);
    }
    if let Some(ratings) = &cli.ratings {
        config.ratings_file.clone_from(ratings);
    }
    config.verbose = cli.verbose;
    config
}

fn resolve_actor(given: Option<&str>, prompt: &str) -> Result<String> {
    if let Some(name) = given {
        return Ok(name.trim().to_string());
    }
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn should_rank(ranked_flag: bool) -> Result<bool> {
    if ranked_flag {
        return Ok(true);
    }
    print!("\nSort films from this path by rating? y/N: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

fn print_ranked(films: &[String], ratings: &RatingTable) {
    let ordered = rank::rank_by_rating(films.to_vec(), ratings);
    println!("\nMovies in connection path, sorted by rating:");
    for film in &ordered {
        println!("  {}", rank::display_line(film, ratings));
    }
}
