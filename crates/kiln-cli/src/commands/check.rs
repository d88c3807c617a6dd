//! Check command implementation.
//!
//! Validates the layered overrides without resolving anything.

use kiln_config::{ConfigValidator, FsValidator, SchemaValidator};

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::settings::ProjectSettings;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load and layer the project's overrides
/// 2. Schema checks (always)
/// 3. Entry, source directory and template on disk (with `--fs`)
pub fn execute(args: CheckArgs) -> Result<()> {
    let settings = ProjectSettings::load(&args.profile)?;

    if settings.source.is_none() {
        ui::warning("No kiln.toml or package.json 'kiln' field found, using defaults");
    } else {
        ui::info(&format!("Checking {}", settings.source_display()));
    }

    let result = if args.fs {
        FsValidator::new(&settings.root).validate(&settings.overrides)
    } else {
        SchemaValidator.validate(&settings.overrides)
    };

    if let Err(err) = result {
        ui::error(&format!("Overrides for {} are invalid", settings.profile));
        return Err(err.into());
    }

    if args.fs {
        ui::success(&format!(
            "Overrides for {} are valid and all referenced files exist",
            settings.profile
        ));
    } else {
        ui::success(&format!("Overrides for {} are valid", settings.profile));
    }
    Ok(())
}
