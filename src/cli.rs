use clap::Parser;
use std::path::PathBuf;

use crate::output::Order;
use crate::pipeline::RunOptions;

#[derive(Parser, Debug)]
#[command(author, version, about = "List the films an actor has appeared in, from IMDb")]
pub struct Cli {
    /// Name of actor for which films will be displayed
    pub actor: String,

    /// Return the movie list from most to least recent
    #[arg(long)]
    pub descending: bool,

    /// Save the output to a JSON document on disk
    #[arg(long)]
    pub save_to_disk: bool,

    /// Configuration file (defaults to ./actor_films.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            query: self.actor.clone(),
            order: Order::from_descending_flag(self.descending),
            save_to_disk: self.save_to_disk,
        }
    }
}
