use std::path::{Path, PathBuf};

use anyhow::bail;
use pitchscope_profile::{
    profile::{Profile, ProfileSource},
    store::resolve_benchmark,
};
use pitchscope_scoring::{comparison::score_features, result::ComparisonResult};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    model::store::DirModelStore,
    schema::{profile_file::ProfileFile, record::feature_vector_from_json},
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoreArg {
    /// Live feature vector JSON file (feature name to value)
    #[arg(long)]
    features: PathBuf,
    /// Benchmark profile file (a reference model or `build-profile` output)
    #[arg(long, conflicts_with_all = ["models_dir", "benchmark_player", "pitch_type"])]
    profile: Option<PathBuf>,
    /// Directory of stored reference models
    #[arg(long, requires = "benchmark_player")]
    models_dir: Option<PathBuf>,
    /// Player whose reference model to resolve from the models directory
    #[arg(long, requires = "models_dir")]
    benchmark_player: Option<String>,
    /// Detected pitch type, used to prefer a pitch-specific model
    #[arg(long, requires = "models_dir")]
    pitch_type: Option<String>,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// What the `score` command emits: the result plus enough context to tell
/// a real zero from "nothing could be compared".
#[derive(Debug, Clone, Serialize)]
struct ScoreReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    benchmark: Option<BenchmarkInfo>,
    message: String,
    result: ComparisonResult,
}

#[derive(Debug, Clone, Serialize)]
struct BenchmarkInfo {
    label: String,
    source: ProfileSource,
}

impl BenchmarkInfo {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            label: profile.label().to_string(),
            source: profile.source().clone(),
        }
    }
}

pub(crate) fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let raw: Map<String, Value> = util::read_json_file("features", &arg.features)?;
    let features = feature_vector_from_json(&raw);
    eprintln!("Loaded {} live features", features.len());

    let benchmark = find_benchmark(arg)?;
    let report = match &benchmark {
        None => {
            eprintln!("No benchmark model found; nothing to compare against");
            ScoreReport {
                benchmark: None,
                message: "no benchmark model selected or found".to_string(),
                result: ComparisonResult::unscored(),
            }
        }
        Some(profile) if profile.is_empty() => {
            eprintln!("Benchmark '{}' has no feature statistics", profile.label());
            ScoreReport {
                benchmark: Some(BenchmarkInfo::from_profile(profile)),
                message: "benchmark model has no usable data".to_string(),
                result: ComparisonResult::unscored(),
            }
        }
        Some(profile) => {
            let result = score_features(&features, profile);
            eprintln!(
                "Compared {} of {} features against '{}': score {}",
                result.details.len(),
                features.len(),
                profile.label(),
                result.final_score
            );
            ScoreReport {
                benchmark: Some(BenchmarkInfo::from_profile(profile)),
                message: "comparison successful".to_string(),
                result,
            }
        }
    };

    Output::save_json(&report, arg.output.clone())
}

fn find_benchmark(arg: &ScoreArg) -> anyhow::Result<Option<Profile>> {
    if let Some(path) = &arg.profile {
        return Ok(Some(load_profile_file(path)?));
    }
    let (Some(models_dir), Some(benchmark_player)) = (&arg.models_dir, &arg.benchmark_player)
    else {
        bail!("either --profile or --models-dir with --benchmark-player is required");
    };

    let store = DirModelStore::load(models_dir)?;
    Ok(resolve_benchmark(
        &store,
        benchmark_player,
        arg.pitch_type.as_deref(),
    ))
}

fn load_profile_file(path: &Path) -> anyhow::Result<Profile> {
    let file: ProfileFile = util::read_json_file("profile", path)?;
    Ok(file.into_profile())
}
