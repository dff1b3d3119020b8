//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, Write};

use anyhow::Result;

use crate::domain::PreReleaseKind;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_environments, display_error,
    display_manual_push_instruction, display_status, display_success, display_version_plan,
};

fn read_trimmed_line() -> Result<String> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Accepts "y" or "yes" (case-insensitive) as confirmation.
/// Default is "no" if user presses Enter.
pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let response = read_trimmed_line()?.to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// Prompts user to select a pre-release kind (alpha, beta, rc).
///
/// Displays a numbered list; Enter selects the first entry.
pub fn select_pre_release() -> Result<PreReleaseKind> {
    println!("\nSelect pre-release type:");
    for (i, kind) in PreReleaseKind::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, kind);
    }

    print!(
        "\nSelect (1-{}) [default: 1]: ",
        PreReleaseKind::ALL.len()
    );
    io::stdout().flush()?;

    let selection = read_trimmed_line()?;
    let index = if selection.is_empty() {
        1
    } else {
        selection.parse::<usize>().unwrap_or(0)
    };

    if index > 0 && index <= PreReleaseKind::ALL.len() {
        Ok(PreReleaseKind::ALL[index - 1])
    } else {
        Err(anyhow::anyhow!("Invalid pre-release selection"))
    }
}

/// Prompts user to bind a branch to an environment slot, or skip it.
///
/// Displays a numbered branch list plus a skip entry. The default is the
/// conventional branch for the slot when it exists locally, otherwise
/// skip. Returns `None` when the slot is skipped.
pub fn select_branch_for_environment(
    environment: &str,
    default_branch: &str,
    branches: &[String],
) -> Result<Option<String>> {
    let skip_index = branches.len() + 1;
    let default_index = branches
        .iter()
        .position(|b| b == default_branch)
        .map(|i| i + 1)
        .unwrap_or(skip_index);

    println!(
        "\nSelect the branch for environment '{}':",
        environment
    );
    for (i, branch) in branches.iter().enumerate() {
        println!("  {}. {}", i + 1, branch);
    }
    println!("  {}. Skip this environment", skip_index);

    print!(
        "\nSelect (1-{}) [default: {}]: ",
        skip_index, default_index
    );
    io::stdout().flush()?;

    let selection = read_trimmed_line()?;
    let index = if selection.is_empty() {
        default_index
    } else {
        selection.parse::<usize>().unwrap_or(0)
    };

    if index == skip_index {
        Ok(None)
    } else if index > 0 && index <= branches.len() {
        Ok(Some(branches[index - 1].clone()))
    } else {
        Err(anyhow::anyhow!("Invalid branch selection"))
    }
}

/// What the user wants to do with the planned tag pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagAction {
    UseGenerated,
    Custom,
    Cancel,
}

/// Prompts user to accept the generated tags, enter custom ones, or cancel.
pub fn select_tag_action(immutable_tag: &str, mutable_tag: Option<&str>) -> Result<TagAction> {
    println!("\nCreate tags:");
    println!("  1. Use generated tags:");
    println!("       - {} (immutable)", immutable_tag);
    if let Some(mutable) = mutable_tag {
        println!("       - {} (mutable)", mutable);
    }
    println!("  2. Enter custom tags");
    println!("  3. Cancel");

    print!("\nSelect (1-3) [default: 1]: ");
    io::stdout().flush()?;

    let selection = read_trimmed_line()?;
    match selection.as_str() {
        "" | "1" => Ok(TagAction::UseGenerated),
        "2" => Ok(TagAction::Custom),
        "3" => Ok(TagAction::Cancel),
        _ => Err(anyhow::anyhow!("Invalid selection")),
    }
}

/// Prompts user for custom immutable/mutable tags.
///
/// Enter keeps the generated default. An empty mutable answer when no
/// default exists means no alias tag.
pub fn prompt_custom_tags(
    default_immutable: &str,
    default_mutable: Option<&str>,
) -> Result<(String, Option<String>)> {
    print!(
        "What is your immutable tag (e.g. v1.2.3-dev)? [{}]: ",
        default_immutable
    );
    io::stdout().flush()?;
    let immutable_input = read_trimmed_line()?;
    let immutable = if immutable_input.is_empty() {
        default_immutable.to_string()
    } else {
        immutable_input
    };

    print!(
        "What is your mutable tag (e.g. dev)? [{}]: ",
        default_mutable.unwrap_or("none")
    );
    io::stdout().flush()?;
    let mutable_input = read_trimmed_line()?;
    let mutable = if mutable_input.is_empty() {
        default_mutable.map(|s| s.to_string())
    } else {
        Some(mutable_input)
    };

    Ok((immutable, mutable))
}
