use std::path::PathBuf;

use chrono::{DateTime, Utc};
use pitchscope_profile::builder;

use crate::{
    schema::record::{self, AnalysisRecord},
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BuildProfileArg {
    /// File of exported analysis records
    #[arg(long)]
    history: PathBuf,
    /// Player whose records make up the history
    #[arg(long)]
    player: String,
    /// Only use records created strictly before this RFC 3339 timestamp
    #[arg(long)]
    before: Option<DateTime<Utc>>,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &BuildProfileArg) -> anyhow::Result<()> {
    let records: Vec<AnalysisRecord> = util::read_json_file("history", &arg.history)?;
    eprintln!("Loaded {} analysis records", records.len());

    let history = record::collect_history(&records, &arg.player, arg.before);
    eprintln!("{} records belong to '{}'", history.len(), arg.player);

    let Some(profile) = builder::build_profile(&arg.player, &history) else {
        eprintln!(
            "Not enough history to build a profile for '{}'",
            arg.player
        );
        return Ok(());
    };

    eprintln!("Built profile with {} features", profile.len());
    Output::save_json(&profile, arg.output.clone())
}
