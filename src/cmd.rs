//! Command implementations for the CLI interface.
//!
//! This module contains the command handlers behind the subcommands: the
//! interactive composer page, one-shot formatting, paste parsing, config
//! management, and shell completions.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::clipboard::{copy_block, CopyOutcome};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::fields::{Role, StatusKind};
use crate::format::format_status;
use crate::parse::parse_status;
use crate::status::FieldBag;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive composer page.
    Ui,

    /// Format a status block from flags and print it.
    Format {
        /// Update kind: start | pause | stop.
        #[arg(long, value_enum, default_value_t = StatusKind::Start)]
        kind: StatusKind,
        /// Project name.
        #[arg(long)]
        project: Option<String>,
        /// Short task description.
        #[arg(long)]
        task: Option<String>,
        /// Your name for the attribution line.
        #[arg(long)]
        name: Option<String>,
        /// Attribution role: dev | qa.
        #[arg(long, value_enum)]
        role: Option<Role>,
        /// Estimated whole hours (START).
        #[arg(long)]
        estimated_hours: Option<String>,
        /// Estimated minutes (START).
        #[arg(long)]
        estimated_minutes: Option<String>,
        /// Reference link or ticket (START).
        #[arg(long)]
        reference: Option<String>,
        /// Status line (PAUSE), e.g. "In Progress" or "Blocked".
        #[arg(long)]
        pause_status: Option<String>,
        /// Reason for pausing (PAUSE).
        #[arg(long)]
        reason: Option<String>,
        /// Progress so far (PAUSE).
        #[arg(long)]
        progress: Option<String>,
        /// Status line (STOP), or "Custom" to use --custom-status.
        #[arg(long)]
        stop_status: Option<String>,
        /// Custom stop status text (STOP).
        #[arg(long)]
        custom_status: Option<String>,
        /// Time taken whole hours (STOP).
        #[arg(long)]
        time_taken_hours: Option<String>,
        /// Time taken minutes (STOP).
        #[arg(long)]
        time_taken_minutes: Option<String>,
        /// Notes line (STOP).
        #[arg(long)]
        notes: Option<String>,
        /// Include the current clock time in the header.
        #[arg(long)]
        show_time: bool,
        /// Explicit header time label; implies showing it.
        #[arg(long)]
        time: Option<String>,
        /// Also copy the block to the system clipboard.
        #[arg(long)]
        copy: bool,
    },

    /// Recover fields from a previously posted status block.
    Parse {
        /// Input file (defaults to stdin).
        #[arg(long)]
        input: Option<PathBuf>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show or change persistent defaults.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current defaults.
    Show,
    /// Set one or more defaults.
    Set {
        /// Default name for the attribution line.
        #[arg(long)]
        name: Option<String>,
        /// Default role: dev | qa.
        #[arg(long, value_enum)]
        role: Option<Role>,
        /// Default project name.
        #[arg(long)]
        project: Option<String>,
        /// Whether headers carry the captured time (true | false).
        #[arg(long)]
        show_time: Option<bool>,
    },
    /// Print the config file location.
    Path,
}

/// Launch the terminal user interface.
pub fn cmd_ui(config_path: &Path) -> Result<()> {
    run_tui(config_path).context("UI error")?;
    Ok(())
}

/// Render a status block from flags, seeded with the config defaults for
/// identity fields, and print it to stdout.
pub fn cmd_format(
    config: &Config,
    kind: StatusKind,
    project: Option<String>,
    task: Option<String>,
    name: Option<String>,
    role: Option<Role>,
    estimated_hours: Option<String>,
    estimated_minutes: Option<String>,
    reference: Option<String>,
    pause_status: Option<String>,
    reason: Option<String>,
    progress: Option<String>,
    stop_status: Option<String>,
    custom_status: Option<String>,
    time_taken_hours: Option<String>,
    time_taken_minutes: Option<String>,
    notes: Option<String>,
    show_time: bool,
    time: Option<String>,
    copy: bool,
) -> Result<()> {
    let mut bag = FieldBag::default();
    bag.project = project.unwrap_or_else(|| config.project.clone());
    bag.actor_name = name.unwrap_or_else(|| config.actor_name.clone());
    if let Some(v) = task {
        bag.task = v;
    }
    if let Some(v) = estimated_hours {
        bag.estimated_hours = v;
    }
    if let Some(v) = estimated_minutes {
        bag.estimated_minutes = v;
    }
    if let Some(v) = reference {
        bag.reference = v;
    }
    if let Some(v) = pause_status {
        bag.pause_status = v;
    }
    if let Some(v) = reason {
        bag.pause_reason = v;
    }
    if let Some(v) = progress {
        bag.progress = v;
    }
    if let Some(v) = stop_status {
        bag.stop_status = v;
    }
    if let Some(v) = custom_status {
        bag.custom_stop_status = v;
    }
    if let Some(v) = time_taken_hours {
        bag.time_taken_hours = v;
    }
    if let Some(v) = time_taken_minutes {
        bag.time_taken_minutes = v;
    }
    if let Some(v) = notes {
        bag.notes = v;
    }

    let role = role.unwrap_or(config.role);
    let captured_label = match time {
        Some(label) => Some(label),
        None if show_time || config.show_time => Some(SystemClock.time_label()),
        None => None,
    };

    let block = format_status(kind, &bag, role, captured_label.as_deref());
    println!("{block}");

    if copy {
        match copy_block(&block)? {
            CopyOutcome::Rich => {}
            CopyOutcome::PlainOnly => eprintln!("copied as plain text only"),
        }
    }
    Ok(())
}

/// Parse pasted text from stdin or a file and print the recovered fields.
pub fn cmd_parse(input: Option<PathBuf>, json: bool) -> Result<()> {
    let text = match input {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let result = parse_status(&text);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    if result.is_empty() {
        println!("No recognisable fields found.");
        return Ok(());
    }
    if let Some(v) = &result.project {
        println!("Project: {v}");
    }
    if let Some(v) = &result.task {
        println!("Task: {v}");
    }
    if let Some(v) = &result.actor_name {
        println!("Name: {v}");
    }
    if let Some(r) = result.role {
        println!("Role: {}", r.label());
    }
    if let Some(v) = &result.captured_time {
        println!("Time: {v}");
    }
    Ok(())
}

/// Show or change the persistent defaults.
pub fn cmd_config(config_path: &Path, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load(config_path);
            println!("name: {}", config.actor_name);
            println!("role: {}", config.role.label());
            println!("project: {}", config.project);
            println!("show-time: {}", config.show_time);
        }
        ConfigAction::Set {
            name,
            role,
            project,
            show_time,
        } => {
            if name.is_none() && role.is_none() && project.is_none() && show_time.is_none() {
                anyhow::bail!(
                    "nothing to set; pass at least one of --name, --role, --project, --show-time"
                );
            }
            let mut config = Config::load(config_path);
            if let Some(v) = name {
                config.actor_name = v;
            }
            if let Some(v) = role {
                config.role = v;
            }
            if let Some(v) = project {
                config.project = v;
            }
            if let Some(v) = show_time {
                config.show_time = v;
            }
            config.save(config_path)?;
            println!("Saved {}", config_path.display());
        }
        ConfigAction::Path => println!("{}", config_path.display()),
    }
    Ok(())
}

/// Generate shell completion scripts on stdout.
pub fn cmd_completions(shell: Shell) {
    use crate::cli::Cli;
    use clap::CommandFactory;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
