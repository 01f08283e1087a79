//! CLI frontend for the Sprawlrunner rules helper.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sprawl",
    about = "Sprawlrunner — dice and combat bookkeeping for Anarchy-style games",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice pool and report hits and glitches
    Roll {
        /// Number of d6 in the pool
        pool: u32,

        /// Edge is active: hits on 4+ instead of 5+
        #[arg(short, long)]
        edge: bool,

        /// Spend Edge to reroll the dice that failed
        #[arg(short, long)]
        reroll: bool,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Resolve an opposed test from both sides' hit counts
    Oppose {
        /// Attacker's hits
        attacker: u32,

        /// Defender's hits
        defender: u32,
    },

    /// Roll initiative: attribute + skill + bonus + 1d6
    Initiative {
        /// Relevant attribute score
        attribute: i32,

        /// Relevant skill score
        skill: i32,

        /// Situational or gear bonus
        #[arg(short, long, default_value = "0")]
        bonus: i32,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Apply damage to a condition monitor and classify the result
    Damage {
        /// Current condition monitor value
        monitor: u32,

        /// Damage to apply
        damage: u32,

        /// Monitor capacity
        #[arg(short, long, default_value = "10")]
        max: u32,
    },

    /// Heal a condition monitor, capped at its capacity
    Heal {
        /// Current condition monitor value
        monitor: u32,

        /// Healing to apply
        healing: u32,

        /// Monitor capacity
        #[arg(short, long, default_value = "10")]
        max: u32,
    },

    /// Track ammo after firing and check for reloads
    Ammo {
        /// Rounds currently in the magazine
        current: u32,

        /// Shots fired
        shots: u32,

        /// Magazine capacity (reserved; does not affect the result yet)
        #[arg(short, long, default_value = "10")]
        magazine: u32,
    },

    /// Create a character record in the campaign directory
    New {
        /// Character name
        name: String,

        /// Campaign directory holding character files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show a character record
    Show {
        /// Character name
        name: String,

        /// Campaign directory holding character files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Spend karma to advance a character's attribute or skill
    Advance {
        /// Character name
        name: String,

        /// Attribute or skill to advance
        field: String,

        /// How much to raise it
        #[arg(short, long, default_value = "1")]
        amount: i32,

        /// Karma cost of the advancement
        #[arg(short, long)]
        cost: u32,

        /// Karma the character has available
        #[arg(short, long)]
        karma: u32,

        /// Campaign directory holding character files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Print a storytelling prompt for a player
    Prompt {
        /// Prompt type: cue or disposition
        kind: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            pool,
            edge,
            reroll,
            seed,
        } => commands::roll::run(pool, edge, reroll, seed),
        Commands::Oppose { attacker, defender } => commands::oppose::run(attacker, defender),
        Commands::Initiative {
            attribute,
            skill,
            bonus,
            seed,
        } => commands::initiative::run(attribute, skill, bonus, seed),
        Commands::Damage {
            monitor,
            damage,
            max,
        } => commands::damage::run(monitor, damage, max),
        Commands::Heal {
            monitor,
            healing,
            max,
        } => commands::heal::run(monitor, healing, max),
        Commands::Ammo {
            current,
            shots,
            magazine,
        } => commands::ammo::run(current, shots, magazine),
        Commands::New { name, dir } => commands::new::run(&name, &dir),
        Commands::Show { name, dir } => commands::show::run(&name, &dir),
        Commands::Advance {
            name,
            field,
            amount,
            cost,
            karma,
            dir,
        } => commands::advance::run(&name, &field, amount, cost, karma, &dir),
        Commands::Prompt { kind } => commands::prompt::run(&kind),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
