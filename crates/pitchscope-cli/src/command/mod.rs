use clap::{Parser, Subcommand};

use self::{
    build_profile::BuildProfileArg, list_models::ListModelsArg, score::ScoreArg,
};

mod build_profile;
mod list_models;
mod score;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Build a player's historical-average profile from exported analysis records
    BuildProfile(#[clap(flatten)] BuildProfileArg),
    /// Score a live feature vector against a benchmark profile
    Score(#[clap(flatten)] ScoreArg),
    /// List the reference models stored in a directory
    ListModels(#[clap(flatten)] ListModelsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::BuildProfile(arg) => build_profile::run(&arg)?,
        Mode::Score(arg) => score::run(&arg)?,
        Mode::ListModels(arg) => list_models::run(&arg)?,
    }
    Ok(())
}
