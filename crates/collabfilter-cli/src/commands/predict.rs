//! Predict command implementation
//!
//! Completes the rating matrix and prints the similarity matrix, neighbor
//! lists, per-cell prediction details, and recommendations.

use std::path::Path;

use collabfilter::format::render_completed;
use collabfilter::recommend::{predict_matrix, PredictionDetail, RecommenderConfig, RecommenderResult};
use colored::Colorize;
use tracing::info;

use super::{load, print_json, EngineArgs, InputArgs};
use crate::error::Result;
use crate::output;

/// Decimals used when writing the completed matrix to a file
const OUTPUT_PRECISION: usize = 3;

/// Run the predict command
pub(crate) fn run(
    input: &InputArgs,
    engine: &EngineArgs,
    top: Option<usize>,
    output_path: Option<&Path>,
    json_output: bool,
) -> Result<()> {
    let file = load(input)?;
    let config = engine.config(file.bounds())?;
    let result = predict_matrix(&file.matrix, &config);

    if let Some(path) = output_path {
        std::fs::write(path, render_completed(&result.completed, config.bounds, OUTPUT_PRECISION))?;
        info!(path = %path.display(), "wrote completed matrix");
    }

    if json_output {
        return print_json(&result);
    }

    print_summary(input, &config, &result);
    super::similarity::print_similarities(&result.similarities, &result.neighbors);
    print_predictions(&result.predictions);

    output::section("Completed matrix");
    if result.completed.is_empty() {
        output::empty("ratings");
    } else {
        let predicted = |row: usize, col: usize| file.matrix.get(row, col).is_none();
        output::matrix_table(&result.completed, "I", predicted);
    }

    print_recommendations(&result, top);
    Ok(())
}

fn print_summary(input: &InputArgs, config: &RecommenderConfig, result: &RecommenderResult) {
    output::section("Utility matrix");
    output::kv("File", input.file.display());
    output::kv("Users", result.n_users());
    output::kv("Items", result.n_items());
    output::kv("Missing cells", result.predictions.len());
    output::kv("Metric", config.metric);
    output::kv(
        "Neighbors (k)",
        config.k.map_or_else(|| "all".to_string(), |k| k.to_string()),
    );
    output::kv("Formula", config.formula);
    let bound = |b: Option<f64>| b.map_or_else(|| "none".to_string(), output::num);
    output::kv(
        "Rating bounds",
        format!("[{}, {}]", bound(config.bounds.min), bound(config.bounds.max)),
    );
}

fn print_predictions(predictions: &[PredictionDetail]) {
    output::section("Predictions");
    if predictions.is_empty() {
        output::empty("missing cells");
        return;
    }
    for p in predictions {
        let clamped = if p.final_prediction == p.raw_prediction {
            String::new()
        } else {
            format!(" (raw {})", output::num(p.raw_prediction))
        };
        println!(
            "  {} {}{} [{}]",
            format!("U{} I{}:", p.user, p.item).white().bold(),
            output::num(p.final_prediction).green().bold(),
            clamped,
            p.formula,
        );
        if p.neighbors_used.is_empty() {
            println!("      {}", "no rated neighbor, user mean used".dimmed());
        }
        for c in &p.neighbors_used {
            let mean = c
                .neighbor_mean
                .map_or_else(String::new, |m| format!(", mean {}", output::num(m)));
            println!(
                "      U{} sim {} rating {}{}",
                c.index,
                output::num(c.similarity),
                output::num(c.rating),
                mean
            );
        }
    }
}

fn print_recommendations(result: &RecommenderResult, top: Option<usize>) {
    output::section("Recommendations");
    if result.predictions.is_empty() {
        output::empty("unrated items");
        return;
    }
    for user in 0..result.n_users() {
        let recs = result
            .top_n(user, top.unwrap_or(usize::MAX))
            .unwrap_or_default();
        if recs.is_empty() {
            continue;
        }
        let items: Vec<String> = recs
            .iter()
            .map(|r| format!("I{} ({})", r.item, output::num(r.predicted)))
            .collect();
        println!("  {} {}", format!("U{user}:").white().bold(), items.join(", "));
    }
}
