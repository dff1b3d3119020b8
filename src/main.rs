use anyhow::Result;
use clap::Parser;

use tag_manager::boundary::BoundaryWarning;
use tag_manager::config::{self, EnvironmentConfig};
use tag_manager::domain::{Environment, IncrementKind, PreReleaseKind};
use tag_manager::git::{Git2TagStore, TagStore};
use tag_manager::release;
use tag_manager::ui::{self, TagAction};

const REMOTE: &str = "origin";

/// Environment slots offered during setup, with their conventional branches
const SETUP_SLOTS: [(&str, &str, bool); 4] = [
    ("dev", "develop", false),
    ("qa", "qa", false),
    ("stg", "staging", false),
    ("prod", "main", true),
];

#[derive(clap::Parser)]
#[command(
    name = "tag-manager",
    about = "Create and push environment-aware semantic version tags"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Increment the major version")]
    major: bool,

    #[arg(long, conflicts_with = "major", help = "Increment the minor version")]
    minor: bool,

    #[arg(
        short = 'p',
        long,
        help = "Create a pre-release tag (prompts for alpha/beta/rc)"
    )]
    pre_release: bool,

    #[arg(long, help = "Map branches to environments interactively and exit")]
    setup: bool,

    #[arg(long, help = "Show configured environments and exit")]
    list: bool,

    #[arg(short, long, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("tag-manager {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.setup {
        return run_setup(args.config.as_deref());
    }

    if args.list {
        return list_environments(args.config.as_deref());
    }

    // Load configuration; offer setup when none exists yet
    let env_config = match config::load_config(args.config.as_deref()) {
        Ok(Some(cfg)) => cfg,
        Ok(None) => {
            ui::display_status("No configuration found. Setting up configuration...");
            return run_setup(args.config.as_deref());
        }
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let increment_kind = if args.major {
        IncrementKind::Major
    } else if args.minor {
        IncrementKind::Minor
    } else {
        IncrementKind::Patch
    };

    let pre_release_kind: Option<PreReleaseKind> = if args.pre_release {
        Some(ui::select_pre_release()?)
    } else {
        None
    };

    // Initialize git operations
    let store = match Git2TagStore::discover() {
        Ok(store) => store,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    // Refresh tags so the version base is current; planning continues on
    // local data when the fetch fails
    ui::display_status("Fetching tags from remote...");
    match store.fetch_tags(REMOTE) {
        Ok(_) => ui::display_success("Fetched tags from remote"),
        Err(e) => {
            let warning = BoundaryWarning::FetchFailed {
                remote: REMOTE.to_string(),
                reason: e.to_string(),
            };
            ui::display_boundary_warning(&warning);

            if !args.force && !args.dry_run && !ui::confirm_action("Continue using local tags?")? {
                println!("Operation cancelled by user.");
                return Ok(());
            }
        }
    }

    // Plan the release
    let plan = match release::determine_new_version(
        &store,
        Some(&env_config),
        increment_kind,
        pre_release_kind,
    ) {
        Ok(plan) => plan,
        Err(e) => {
            ui::display_error(&format!("Failed to determine new version: {}", e));
            std::process::exit(1);
        }
    };

    if plan.environment.is_none() && !matches!(plan.branch.as_str(), "main" | "master") {
        let warning = BoundaryWarning::UnmappedBranch {
            branch: plan.branch.clone(),
        };
        ui::display_boundary_warning(&warning);
    }

    ui::display_version_plan(&plan);

    // Let the user accept, customize, or cancel the planned tags
    let (immutable_tag, mutable_tag) = if !args.force && !args.dry_run {
        match ui::select_tag_action(&plan.immutable_tag, plan.mutable_tag.as_deref())? {
            TagAction::UseGenerated => (plan.immutable_tag.clone(), plan.mutable_tag.clone()),
            TagAction::Custom => {
                ui::prompt_custom_tags(&plan.immutable_tag, plan.mutable_tag.as_deref())?
            }
            TagAction::Cancel => {
                println!("Release cancelled");
                return Ok(());
            }
        }
    } else {
        (plan.immutable_tag.clone(), plan.mutable_tag.clone())
    };

    if !args.force && !args.dry_run {
        let summary = match &mutable_tag {
            Some(mutable) => format!(
                "About to create tags:\n  - {} (immutable)\n  - {} (mutable)\n\nProceed?",
                immutable_tag, mutable
            ),
            None => format!("About to create tag:\n  - {} (immutable)\n\nProceed?", immutable_tag),
        };
        if !ui::confirm_action(&summary)? {
            println!("Release cancelled");
            return Ok(());
        }
    }

    if args.dry_run {
        ui::display_status("Dry run:");
        ui::display_success(&format!("  Step 1: would create tag: {}", immutable_tag));
        ui::display_success(&format!(
            "  Step 2: would push {} to {}",
            immutable_tag, REMOTE
        ));
        if let Some(mutable) = &mutable_tag {
            ui::display_success(&format!(
                "  Step 3: would force-move alias tag {} and push it to {}",
                mutable, REMOTE
            ));
        }
        return Ok(());
    }

    // Create and push the immutable tag
    ui::display_status(&format!("Creating tag: {}", immutable_tag));
    if let Err(e) = store.create_tag(&immutable_tag, false) {
        ui::display_error(&format!("Failed to create tag '{}': {}", immutable_tag, e));
        std::process::exit(1);
    }
    ui::display_success(&format!("Created tag: {}", immutable_tag));

    ui::display_status(&format!("Pushing tag: {} to remote", immutable_tag));
    if let Err(e) = store.push_tag(REMOTE, &immutable_tag, false) {
        ui::display_error(&format!("Failed to push tag '{}': {}", immutable_tag, e));
        ui::display_manual_push_instruction(&immutable_tag, REMOTE);
        std::process::exit(1);
    }
    ui::display_success(&format!("Pushed tag: {} to remote", immutable_tag));

    // Force-move the mutable alias so it points at the new release
    if let Some(mutable) = &mutable_tag {
        ui::display_status(&format!("Updating alias tag: {}", mutable));
        if let Err(e) = store.create_tag(mutable, true) {
            ui::display_error(&format!("Failed to update alias tag '{}': {}", mutable, e));
            std::process::exit(1);
        }
        if let Err(e) = store.push_tag(REMOTE, mutable, true) {
            ui::display_error(&format!("Failed to push alias tag '{}': {}", mutable, e));
            std::process::exit(1);
        }
        ui::display_success(&format!("Alias tag {} now points at {}", mutable, immutable_tag));
    }

    ui::display_success(&format!(
        "Successfully published {} for branch {}",
        immutable_tag, plan.branch
    ));

    Ok(())
}

/// Interactive environment setup: one branch (or skip) per slot.
fn run_setup(config_path: Option<&str>) -> Result<()> {
    let store = match Git2TagStore::discover() {
        Ok(store) => store,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let branches = match store.list_branches() {
        Ok(branches) => branches,
        Err(e) => {
            ui::display_error(&format!("Failed to list branches: {}", e));
            std::process::exit(1);
        }
    };

    if branches.is_empty() {
        ui::display_error(
            "No branches found. Initialize the repository and create at least one branch, then run setup again.",
        );
        std::process::exit(1);
    }

    let mut environments = Vec::new();
    for (name, default_branch, is_production) in SETUP_SLOTS {
        if let Some(branch) = ui::select_branch_for_environment(name, default_branch, &branches)? {
            environments.push(Environment::new(name, branch, is_production));
        }
    }

    if environments.is_empty() {
        ui::display_error("No environments configured; nothing to save");
        std::process::exit(1);
    }

    let env_config = EnvironmentConfig { environments };
    match config::save_config(&env_config, config_path) {
        Ok(path) => {
            ui::display_success(&format!("Configuration saved to {}", path.display()));
            let names: Vec<&str> = env_config
                .environments
                .iter()
                .map(|e| e.name.as_str())
                .collect();
            ui::display_status(&format!("Configured environments: {}", names.join(", ")));
        }
        Err(e) => {
            ui::display_error(&format!("Failed to save configuration: {}", e));
            std::process::exit(1);
        }
    }

    Ok(())
}

fn list_environments(config_path: Option<&str>) -> Result<()> {
    match config::load_config(config_path) {
        Ok(Some(cfg)) => {
            ui::display_environments(&cfg);
            Ok(())
        }
        Ok(None) => {
            ui::display_error("No configuration found. Run tag-manager --setup first.");
            std::process::exit(1);
        }
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    }
}
