//! Command-line argument parsing.
//!
//! A bare invocation runs the full decision pipeline; anything else routes
//! to a subcommand or to help/version output and bypasses the pipeline.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the decision pipeline.
    Run { config_dir: Option<String> },
    /// Force-refresh the sun times cache.
    UpdateCommand { config_dir: Option<String> },
    /// Show the effective settings and the verdict that would be applied.
    StatusCommand { config_dir: Option<String> },
    /// Display help information and exit.
    ShowHelp,
    /// Display version information and exit.
    ShowVersion,
    /// Show help due to unknown arguments and exit with failure.
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured action.
    ///
    /// # Arguments
    /// * `args` - Iterator over arguments, argv[0] included (as from
    ///   `std::env::args()`)
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut config_dir: Option<String> = None;
        let mut command: Option<String> = None;
        let mut idx = 0;

        while idx < args_vec.len() {
            let arg = args_vec[idx].as_str();
            match arg {
                "-h" | "--help" => {
                    return ParsedArgs {
                        action: CliAction::ShowHelp,
                    };
                }
                "-V" | "--version" => {
                    return ParsedArgs {
                        action: CliAction::ShowVersion,
                    };
                }
                "-c" | "--config" => match args_vec.get(idx + 1) {
                    Some(dir) if !dir.starts_with('-') => {
                        config_dir = Some(dir.clone());
                        idx += 2;
                    }
                    _ => {
                        return ParsedArgs {
                            action: CliAction::ShowHelpDueToError,
                        };
                    }
                },
                "update" | "status" if command.is_none() => {
                    command = Some(arg.to_string());
                    idx += 1;
                }
                _ => {
                    return ParsedArgs {
                        action: CliAction::ShowHelpDueToError,
                    };
                }
            }
        }

        let action = match command.as_deref() {
            Some("update") => CliAction::UpdateCommand { config_dir },
            Some("status") => CliAction::StatusCommand { config_dir },
            _ => CliAction::Run { config_dir },
        };

        ParsedArgs { action }
    }
}
