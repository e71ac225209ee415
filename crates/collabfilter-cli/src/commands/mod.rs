//! Subcommand implementations and the arguments they share.

pub(crate) mod predict;
pub(crate) mod similarity;

use std::path::{Path, PathBuf};

use clap::Args;
use collabfilter::format::{HeaderMode, UtilityFile};
use collabfilter::recommend::{PredictionFormula, RatingBounds, RecommenderConfig, SimilarityMetric};
use tracing::info;

use crate::error::{CliError, Result};

/// Rating file location and layout
#[derive(Args, Debug, Clone)]
pub(crate) struct InputArgs {
    /// Rating file (.txt or .csv); `-`, `?`, `NA` or an empty CSV field mark unrated cells
    #[arg(value_name = "FILE")]
    pub(crate) file: PathBuf,

    /// Whether the first two lines hold the minimum and maximum rating
    #[arg(long, default_value = "auto", value_name = "auto|present|absent")]
    pub(crate) header: HeaderMode,
}

/// Engine parameters
#[derive(Args, Debug, Clone)]
pub(crate) struct EngineArgs {
    /// Similarity metric
    #[arg(short, long, default_value = "pearson", value_name = "pearson|cosine|euclidean")]
    pub(crate) metric: SimilarityMetric,

    /// Number of neighbors per user (all other users when omitted)
    #[arg(short, long)]
    pub(crate) k: Option<usize>,

    /// Prediction formula
    #[arg(short, long, default_value = "simple", value_name = "simple|mean-diff")]
    pub(crate) formula: PredictionFormula,

    /// Minimum rating (overrides the file header)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) min: Option<f64>,

    /// Maximum rating (overrides the file header)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) max: Option<f64>,
}

impl EngineArgs {
    /// Engine configuration, with flag bounds taking precedence over header bounds.
    pub(crate) fn config(&self, header_bounds: RatingBounds) -> Result<RecommenderConfig> {
        let config = RecommenderConfig {
            metric: self.metric,
            k: self.k,
            formula: self.formula,
            bounds: RatingBounds {
                min: self.min.or(header_bounds.min),
                max: self.max.or(header_bounds.max),
            },
        };
        config.validate()?;
        Ok(config)
    }
}

/// Check the path, then read and parse the rating file.
pub(crate) fn load(input: &InputArgs) -> Result<UtilityFile> {
    validate_path(&input.file)?;
    let file = UtilityFile::from_path(&input.file, input.header)?;
    let (users, items) = file.matrix.shape();
    info!(path = %input.file.display(), users, items, "loaded rating file");
    Ok(file)
}

fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| CliError::Serialization(e.to_string()))?;
    println!("{json}");
    Ok(())
}
