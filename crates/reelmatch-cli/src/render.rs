//! Terminal and JSON rendering of recommendations.

use colored::Colorize;
use serde::Serialize;

use reelmatch_core::{MovieRecord, Recommendation, Response};

/// Printed when a query produces nothing to show
pub const NO_RESULTS_MESSAGE: &str = "Sorry, I couldn't find any similar movies.";

/// Printed when a request matches no intent rule
pub const HELP_MESSAGE: &str = "I didn't understand that. Try something like:
  comedy                        movies of a genre
  movies by Christopher Nolan   movies by a director
  films starring Tom Hanks      movies with an actor
  films after 2010              released in or after a year
  movies before 1980            released in or before a year
  rating above 8.5              rated at least a value
  random movie                  one movie at random
  top movies                    highest rated overall";

#[derive(Serialize)]
struct Listing<'a> {
    heading: &'a str,
    results: &'a [Recommendation],
}

/// Pretty JSON on stdout
pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// A headed list of recommendations, or the no-results message
pub fn recommendations(
    heading: &str,
    results: &[Recommendation],
    as_json: bool,
) -> anyhow::Result<()> {
    if as_json {
        return json(&Listing { heading, results });
    }

    if results.is_empty() {
        println!("{}", NO_RESULTS_MESSAGE.yellow());
        return Ok(());
    }

    println!("{}", heading.cyan().bold());
    for (rank, rec) in results.iter().enumerate() {
        println!("{}", format_line(rank + 1, rec));
    }
    Ok(())
}

/// A keyword-pipeline response
pub fn response(response: &Response, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        return json(response);
    }

    match response {
        Response::Results {
            intent,
            recommendations: results,
        } => {
            let heading = format!("Here are {}:", intent.description());
            recommendations(&heading, results, false)
        }
        Response::NoResults { .. } => {
            println!("{}", NO_RESULTS_MESSAGE.yellow());
            Ok(())
        }
        Response::NotUnderstood { .. } => {
            println!("{}", HELP_MESSAGE.dimmed());
            Ok(())
        }
        Response::InvalidFilter { message, .. } => {
            println!("{} {}", "Invalid request:".red().bold(), message);
            Ok(())
        }
    }
}

fn format_line(rank: usize, rec: &Recommendation) -> String {
    let mut line = format!(
        "  {:>2}. {}{}",
        rank,
        rec.record.title.white().bold(),
        year_suffix(&rec.record).dimmed()
    );

    if !rec.record.genre.is_empty() {
        line.push_str(&format!("  {}", rec.record.genre.cyan()));
    }
    if let Some(rating) = rec.record.rating() {
        line.push_str(&format!("  {}", format!("★ {:.1}", rating).yellow()));
    }
    if let Some(score) = rec.score {
        line.push_str(&format!("  {}", format!("[{:.3}]", score).green()));
    }
    line
}

fn year_suffix(record: &MovieRecord) -> String {
    let year = record.released_year.trim();
    if year.is_empty() {
        String::new()
    } else {
        format!(" ({})", year)
    }
}
