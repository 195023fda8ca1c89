use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "navstate", about = "Replay navigation actions against a fresh store")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.navstate/config.toml or ./config.toml.
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply actions in order and print the state after each one.
    Replay(ReplayArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ReplayArgs {
    /// Actions, e.g. `home`, `detail:7`, `profile+settings`, `overlay:filter`, `hide`.
    #[arg(required = true)]
    pub actions: Vec<String>,

    /// Print one JSON object per step instead of text.
    #[arg(long)]
    pub json: bool,
}
