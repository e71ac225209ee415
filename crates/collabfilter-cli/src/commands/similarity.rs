//! Similarity command implementation
//!
//! Prints the user x user similarity matrix and each user's ranked neighbors
//! without predicting anything.

use collabfilter::primitives::Matrix;
use collabfilter::recommend::{compute_similarities, Neighbor};
use colored::Colorize;

use super::{load, print_json, EngineArgs, InputArgs};
use crate::error::Result;
use crate::output;

/// Run the similarity command
pub(crate) fn run(input: &InputArgs, engine: &EngineArgs, json_output: bool) -> Result<()> {
    let file = load(input)?;
    let config = engine.config(file.bounds())?;
    let ranking = compute_similarities(&file.matrix, config.metric, config.k);

    if json_output {
        return print_json(&ranking);
    }

    output::section("Similarity");
    output::kv("Metric", config.metric);
    output::kv("Users", file.matrix.n_rows());
    print_similarities(&ranking.similarities, &ranking.neighbors);
    Ok(())
}

/// Print the similarity matrix followed by every neighbor list.
pub(crate) fn print_similarities(similarities: &Matrix<f64>, neighbors: &[Vec<Neighbor>]) {
    output::section("Similarity matrix");
    if similarities.is_empty() {
        output::empty("users");
        return;
    }
    output::matrix_table(similarities, "U", |_, _| false);

    output::section("Neighbors");
    for (user, list) in neighbors.iter().enumerate() {
        let ranked: Vec<String> = list
            .iter()
            .map(|n| format!("U{} ({})", n.index, output::num(n.similarity)))
            .collect();
        let shown = if ranked.is_empty() {
            "-".dimmed().to_string()
        } else {
            ranked.join(", ")
        };
        println!("  {} {}", format!("U{user}:").white().bold(), shown);
    }
}
