// Functions that allow the user to interact with the roster.
mod evaluate;
mod roster;

use std::{fmt::Display, path::PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use crate::{
    error::Result,
    logic::{
        app_data::{AppData, Config},
        player::skill::{parse_assignment, SkillId},
        team::lineup::Strategy,
        types::{Age, SkillValue},
    },
};

#[derive(Parser, Debug)]
#[command(name = "moba-team-manager", version, about = "Build and optimize your MOBA esports team composition", long_about = None)]
pub struct Args {
    /// Roster file to work on. Overrides the config.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Config file. Defaults to moba-team-manager.toml if it exists.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// More logging. Repeat for debug output.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new player. Unspecified skills start at 50.
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        age: Age,

        /// Skill value, e.g. --skill Vision=80. Repeatable.
        #[arg(short, long = "skill", value_name = "SKILL=VALUE", value_parser = parse_assignment)]
        skills: Vec<(SkillId, SkillValue)>,
    },

    /// Edit an existing player.
    Update {
        /// Current name of the player.
        player: String,

        /// New name.
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        age: Option<Age>,

        #[arg(short, long = "skill", value_name = "SKILL=VALUE", value_parser = parse_assignment)]
        skills: Vec<(SkillId, SkillValue)>,
    },

    /// Remove a player.
    Delete {
        player: String,
    },

    /// List players with their best role.
    List {
        /// Only show players whose name contains this.
        #[arg(long)]
        search: Option<String>,
    },

    /// Show skills and role fits of a player.
    Show {
        player: String,
    },

    /// Add randomly generated players.
    Random {
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Seed for reproducible players.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Find the best lineup and rate the team.
    Evaluate {
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,

        /// Maximum number of recommendations, at least 1.
        #[arg(long, value_parser = parse_limit)]
        limit: Option<usize>,
    },

    /// Show role requirements and bonuses.
    Roles,

    /// Save the roster to another file.
    Export {
        path: PathBuf,
    },

    /// Replace the roster with the contents of another file.
    Import {
        path: PathBuf,
    },
}

// Run a parsed command line.
pub fn execute(args: Args) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    debug!("using config {config:?}");

    let mut data = AppData::build(config, args.roster)?;
    let json = args.json;

    match args.command {
        Command::Add { name, age, skills } => roster::add(&mut data, &name, age, &skills, json),
        Command::Update { player, name, age, skills } => {
            roster::update(&mut data, &player, name.as_deref(), age, &skills, json)
        }
        Command::Delete { player } => roster::delete(&mut data, &player, json),
        Command::List { search } => roster::list(&data, search.as_deref(), json),
        Command::Show { player } => roster::show(&data, &player, json),
        Command::Random { count, seed } => roster::random(&mut data, count, seed, json),
        Command::Evaluate { strategy, limit } => evaluate::evaluate(&data, strategy, limit, json),
        Command::Roles => roster::roles(json),
        Command::Export { path } => roster::export(&data, &path, json),
        Command::Import { path } => roster::import(&mut data, &path, json),
    }
}

fn parse_limit(text: &str) -> std::result::Result<usize, String> {
    match text.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}

// Print a package to stdout.
fn emit<T: Serialize + Display>(package: &T, json: bool) -> Result<()> {
    match json {
        true => println!("{}", serde_json::to_string_pretty(package)?),
        false => println!("{package}"),
    }
    Ok(())
}
