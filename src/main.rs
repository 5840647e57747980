//! Binary entry point and high-level flow coordination.
//!
//! Dispatches the parsed `CliAction`: a bare invocation runs the decision
//! pipeline under the single-instance lock; subcommands run their handlers
//! and bypass the pipeline entirely. Every recoverable condition degrades
//! to "use defaults" or "skip this invocation" so a scheduler-driven run
//! never takes the host unit down with it.

use themr::args::{CliAction, ParsedArgs};
use themr::commands;
use themr::common::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use themr::common::utils;
use themr::{Themr, log_end, log_error_exit, log_pipe, log_version, log_warning};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let parsed = ParsedArgs::parse(std::env::args());

    let config_dir = match &parsed.action {
        CliAction::Run { config_dir }
        | CliAction::UpdateCommand { config_dir }
        | CliAction::StatusCommand { config_dir } => config_dir.clone(),
        _ => None,
    };

    match parsed.action {
        CliAction::ShowHelp => {
            commands::help::show_help();
            return EXIT_SUCCESS;
        }
        CliAction::ShowVersion => {
            commands::help::show_version();
            return EXIT_SUCCESS;
        }
        CliAction::ShowHelpDueToError => {
            commands::help::show_help();
            return EXIT_FAILURE;
        }
        _ => {}
    }

    if let Err(e) = themr::settings::set_config_dir(config_dir) {
        eprintln!("{e}");
        return EXIT_FAILURE;
    }

    log_version!();

    if utils::running_as_root() {
        // Running as root would leave root-owned files in the user's
        // config and cache directories.
        log_error_exit!("themr should not be run as root");
        log_end!();
        return EXIT_FAILURE;
    }

    let result = match parsed.action {
        CliAction::Run { .. } => run_pipeline(),
        CliAction::UpdateCommand { .. } => commands::update::run(),
        CliAction::StatusCommand { .. } => commands::status::run(),
        // Help and version actions returned above
        _ => unreachable!("informational actions handled before dispatch"),
    };

    match result {
        Ok(()) => {
            log_end!();
            EXIT_SUCCESS
        }
        Err(e) => {
            log_pipe!();
            log_error_exit!("{e:#}");
            log_end!();
            EXIT_FAILURE
        }
    }
}

fn run_pipeline() -> anyhow::Result<()> {
    let _lock = match utils::acquire_instance_lock()? {
        Some(lock) => lock,
        None => {
            log_pipe!();
            log_warning!("Another themr instance is running, skipping this invocation");
            return Ok(());
        }
    };

    Themr::new()?.run()
}
