use std::path::PathBuf;

use serde::Serialize;

use crate::{
    model::store::DirModelStore,
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ListModelsArg {
    /// Directory of stored reference models
    #[arg(long)]
    models_dir: PathBuf,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct ModelSummary {
    model_name: String,
    display_name: String,
    num_features: usize,
}

pub(crate) fn run(arg: &ListModelsArg) -> anyhow::Result<()> {
    let store = DirModelStore::load(&arg.models_dir)?;
    if store.is_empty() {
        eprintln!("No reference models in {}", arg.models_dir.display());
    }

    let summaries = store
        .iter()
        .map(|model| ModelSummary {
            model_name: model.model_name.clone(),
            display_name: model.display_label().to_string(),
            num_features: model.num_features(),
        })
        .collect::<Vec<_>>();

    Output::save_json(&summaries, arg.output.clone())
}
