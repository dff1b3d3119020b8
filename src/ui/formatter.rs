//! Pure formatting functions for UI output.
//!
//! All display logic lives here, separated from user interaction.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::config::EnvironmentConfig;
use crate::release::VersionInfo;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().bold(), warning);
}

/// Display the planned tag pair for a release.
///
/// Shows the prior version the plan is based on ("none" when seeding),
/// the immutable tag, and the alias tag if the channel has one.
pub fn display_version_plan(info: &VersionInfo) {
    println!(
        "\n{} (branch '{}')",
        style("Planned release").bold(),
        info.branch
    );
    if let Some(environment) = &info.environment {
        println!("  Environment: {}", environment);
    }
    println!("  Current version: {}", info.current_version_display());
    println!(
        "  Immutable tag:   {}",
        style(&info.immutable_tag).green()
    );
    match &info.mutable_tag {
        Some(mutable) => println!("  Mutable tag:     {}", style(mutable).cyan()),
        None => println!("  Mutable tag:     (none)"),
    }
}

/// Display the configured environment mapping.
pub fn display_environments(config: &EnvironmentConfig) {
    println!("{}", style("Configured environments:").bold());
    for env in &config.environments {
        let marker = if env.is_production {
            " (production)"
        } else {
            ""
        };
        println!("  {} -> {}{}", env.branch, env.name, marker);
    }
}

/// Display the git command needed to push a tag later.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "\n{} To push this tag later, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {} {}", remote, tag)).cyan()
    );
}
