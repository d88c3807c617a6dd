use clap::{Args, Subcommand};
use kiln_config::Profile;
use std::path::PathBuf;

use crate::cli::validation::parse_profile;

/// Available Kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the bundler manifest for a profile
    ///
    /// Resolves the profile against the project's overrides and writes the
    /// resulting JSON record to stdout.
    Resolve(ResolveArgs),

    /// Validate project overrides
    ///
    /// Runs schema checks, and with --fs also verifies that the entry,
    /// source directory and HTML template exist.
    Check(CheckArgs),

    /// Summarize a resolved profile
    ///
    /// Prints chains, plugins, output names and chunk groups in a readable
    /// form on stderr.
    Inspect(InspectArgs),
}

/// Options shared by every command that resolves a profile
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Build profile: production or development
    ///
    /// Falls back to NODE_ENV, then to development when NODE_ENV is unset.
    #[arg(short, long, value_parser = parse_profile, value_name = "PROFILE")]
    pub profile: Option<Profile>,

    /// Explicit config file (kiln.toml or package.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root used for config discovery and file checks
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Emit single-line JSON instead of pretty-printed output
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Also check that referenced files exist under the project root
    #[arg(long)]
    pub fs: bool,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,
}
