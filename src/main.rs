//! Binary entry point: argument parsing, logging setup, command dispatch.

use clap::Parser;

use status_updater::cli::Cli;
use status_updater::cmd::{
    cmd_completions, cmd_config, cmd_format, cmd_parse, cmd_ui, Commands,
};
use status_updater::config::{default_config_path, Config};

fn main() {
    // Diagnostics go to stderr so the alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "status_updater=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(default_config_path);

    let result = match cli.command {
        Commands::Ui => cmd_ui(&config_path),

        Commands::Format {
            kind,
            project,
            task,
            name,
            role,
            estimated_hours,
            estimated_minutes,
            reference,
            pause_status,
            reason,
            progress,
            stop_status,
            custom_status,
            time_taken_hours,
            time_taken_minutes,
            notes,
            show_time,
            time,
            copy,
        } => {
            let config = Config::load(&config_path);
            cmd_format(
                &config, kind, project, task, name, role, estimated_hours, estimated_minutes,
                reference, pause_status, reason, progress, stop_status, custom_status,
                time_taken_hours, time_taken_minutes, notes, show_time, time, copy,
            )
        }

        Commands::Parse { input, json } => cmd_parse(input, json),

        Commands::Config { action } => cmd_config(&config_path, action),

        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
