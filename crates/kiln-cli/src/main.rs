//! Kiln CLI - build profile resolution for single-page applications.
//!
//! Parses arguments, installs logging and dispatches to a command.

use clap::Parser;
use kiln_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Inspect(inspect_args) => commands::inspect_execute(inspect_args),
    };

    result.map_err(error::cli_error_to_miette)
}
