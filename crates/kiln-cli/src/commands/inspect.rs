//! Inspect command implementation.
//!
//! Prints a readable summary of a resolved profile on stderr.

use kiln_config::BuildProfile;

use crate::cli::InspectArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::settings::ProjectSettings;
use crate::ui;

/// Execute the inspect command.
pub fn execute(args: InspectArgs) -> Result<()> {
    let settings = ProjectSettings::load(&args.profile)?;
    let profile = utils::build_profile(&settings);
    for line in summary(&profile, &settings.source_display()) {
        eprintln!("{line}");
    }
    Ok(())
}

/// Summary lines, in display order.
fn summary(profile: &BuildProfile, source: &str) -> Vec<String> {
    let mut lines = vec![
        ui::heading("Profile"),
        ui::row("mode", profile.profile),
        ui::row("config", source),
        ui::row("devtool", profile.devtool()),
        ui::row("entry", profile.entry.display()),
    ];

    match profile.output_dir() {
        Some(dir) => lines.push(ui::row("output dir", dir.display())),
        None => lines.push(ui::row("output dir", "(in memory)")),
    }

    lines.push(String::new());
    lines.push(ui::heading("Output"));
    lines.push(ui::row("entry file", profile.entry_file()));
    lines.push(ui::row("chunks", &profile.output.chunk_name));
    lines.push(ui::row("assets", &profile.output.asset_name));

    lines.push(String::new());
    lines.push(ui::heading("Rules"));
    for (category, rule) in &profile.rules {
        lines.push(ui::row(
            category.id(),
            format!("{}  [{}]", rule.chain.loaders().join(" ← "), rule.pattern),
        ));
    }

    lines.push(String::new());
    lines.push(ui::heading("Plugins"));
    for plugin in &profile.plugins {
        lines.push(ui::list_item(plugin.kind.package()));
    }

    lines.push(String::new());
    lines.push(ui::heading("Optimization"));
    let optimization = &profile.optimization;
    lines.push(ui::row("minimize", optimization.minimize()));
    if let Some(runtime) = optimization.runtime_chunk_for(profile.entry_name()) {
        lines.push(ui::row("runtime chunk", runtime));
    }
    for group in &optimization.split_chunks.cache_groups {
        lines.push(ui::list_item(format!(
            "{} (priority {}) {}",
            group.name, group.priority, group.pattern
        )));
    }

    if let Some(server) = profile.dev_server() {
        lines.push(String::new());
        lines.push(ui::heading("Dev server"));
        lines.push(ui::row("address", server.address()));
        lines.push(ui::row("open", server.open));
        lines.push(ui::row("hot reload", server.hot_reload));
        lines.push(ui::row("history", server.history_fallback));
    }

    lines
}
