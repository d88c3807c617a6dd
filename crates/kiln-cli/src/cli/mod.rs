//! Command-line interface definition for Kiln.
//!
//! # Command Structure
//!
//! - `kiln resolve` - Print the bundler manifest for a profile as JSON
//! - `kiln check` - Validate project overrides
//! - `kiln inspect` - Human-readable summary of a resolved profile

mod commands;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, InspectArgs, ProfileArgs, ResolveArgs};
pub use validation::parse_profile;

/// Kiln - build profile resolution for single-page applications
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Resolve production and development build profiles",
    long_about = "Kiln turns a profile selector and project overrides into the complete\n\
                  configuration record a bundler consumes: transform chains per asset\n\
                  category, plugins, output naming and chunk splitting."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_config::Profile;
    use std::path::PathBuf;

    #[test]
    fn resolve_defaults() {
        let cli = Cli::try_parse_from(["kiln", "resolve"]).unwrap();
        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert!(args.profile.profile.is_none());
        assert!(args.profile.config.is_none());
        assert_eq!(args.profile.root, PathBuf::from("."));
        assert!(!args.compact);
    }

    #[test]
    fn profile_flag_is_parsed() {
        let cli = Cli::try_parse_from(["kiln", "inspect", "--profile", "production"]).unwrap();
        let Command::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(args.profile.profile, Some(Profile::Production));
    }

    #[test]
    fn unknown_profile_is_rejected_by_parser() {
        let err = Cli::try_parse_from(["kiln", "resolve", "--profile", "staging"]).unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["kiln", "-v", "-q", "check"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["kiln", "check", "--fs", "--no-color"]).unwrap();
        assert!(cli.no_color);
        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert!(args.fs);
    }
}
