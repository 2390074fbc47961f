//! Clap CLI definitions for the `ward` command.
//!
//! This module defines the complete CLI structure using clap 4 derive
//! macros.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// ward -- hospital bed occupancy tracker.
///
/// Tracks the occupancy lifecycle of a small ward's beds: who is in
/// which bed since when, what is being cleaned or repaired, and the full
/// transition history of every bed.
#[derive(Parser, Debug)]
#[command(
    name = "ward",
    about = "Hospital bed occupancy tracker",
    long_about = "Tracks the occupancy lifecycle of a small ward's beds: assignments, \
                  releases, cleaning, maintenance, and per-bed transition history.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Ward directory (default: auto-discover .ward/ upward from cwd).
    #[arg(long, global = true, env = "WARD_DIR")]
    pub dir: Option<String>,

    /// User name for login (default: $WARD_USER, then $USER).
    #[arg(long, global = true, env = "WARD_USER")]
    pub user: Option<String>,

    /// Password for login.
    #[arg(long, global = true, env = "WARD_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // ===== Setup =====
    /// Initialize a ward in the current directory.
    Init(InitArgs),

    // ===== Managing Beds =====
    /// Register a new bed.
    Add(BedArgs),

    /// Delete a bed (refused while occupied).
    #[command(alias = "rm")]
    Remove(BedArgs),

    // ===== Occupancy =====
    /// Place a patient in a bed.
    #[command(alias = "assign")]
    Occupy(OccupyArgs),

    /// Release the patient from a bed.
    #[command(alias = "free")]
    Release(BedArgs),

    /// Start or finish cleaning a bed.
    Clean(PhaseArgs),

    /// Take a bed out of service or return it.
    #[command(alias = "maintenance")]
    Maint(PhaseArgs),

    // ===== Views & Reports =====
    /// List all beds with status and live occupancy.
    List,

    /// List only the occupied beds.
    Occupied,

    /// Show the transition history of every bed (or one bed).
    History(HistoryArgs),

    /// Search beds by id, status, or patient.
    Search(SearchArgs),

    /// Show one bed in detail.
    #[command(alias = "view")]
    Show(BedArgs),

    // ===== Utilities =====
    /// Generate shell completions.
    Completion(CompletionArgs),

    /// Print version information.
    Version,
}

/// Arguments for `ward init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Re-initialize even if a ward already exists here.
    #[arg(long)]
    pub force: bool,

    /// Number of beds to seed, numbered from 1.
    #[arg(long, default_value_t = 10)]
    pub beds: u64,
}

/// Arguments for commands that address a single bed.
#[derive(Args, Debug)]
pub struct BedArgs {
    /// Bed number.
    pub id: String,
}

/// Arguments for `ward occupy`.
#[derive(Args, Debug)]
pub struct OccupyArgs {
    /// Bed number.
    pub id: String,

    /// Patient name.
    pub patient: String,
}

/// Arguments for `ward clean` / `ward maint`.
#[derive(Args, Debug)]
pub struct PhaseArgs {
    #[command(subcommand)]
    pub command: PhaseCommand,
}

/// Start/finish subcommands shared by cleaning and maintenance.
#[derive(Subcommand, Debug)]
pub enum PhaseCommand {
    /// Begin the phase.
    Start(BedArgs),
    /// Finish the phase; the bed becomes ready.
    Done(BedArgs),
}

/// Arguments for `ward history`.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Bed number (default: all beds).
    pub id: Option<String>,
}

/// Arguments for `ward search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search criterion: by-id, by-status, or by-patient.
    pub criterion: String,

    /// Value to match.
    pub value: String,
}

/// Arguments for `ward completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}
