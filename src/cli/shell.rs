//! Read-eval loop in its interactive and script forms.

use std::{
    io::{self, BufRead},
    path::PathBuf,
};

use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};
use tracing::{debug, warn};

use crate::cli::completion::ShellHelper;
use crate::cli::core::{CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output;
use crate::errors::CliError;

/// Switches the shell to line-by-line stdin execution without prompts.
pub const SCRIPT_ENV: &str = "BUDGET_VIEW_CLI_SCRIPT";

/// Runs the shell, optionally opening `snapshot` before the first command.
///
/// Without an explicit path the snapshot remembered in the config is reopened.
pub fn run_cli(snapshot: Option<PathBuf>) -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    open_initial_snapshot(&mut context, snapshot);

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context, io::stdin().lock()),
    }
}

fn open_initial_snapshot(context: &mut ShellContext, explicit: Option<PathBuf>) {
    let remembered = context
        .config
        .last_snapshot
        .clone()
        .filter(|path| path.exists());
    let Some(path) = explicit.or(remembered) else {
        return;
    };
    if let Err(err) = context.load_snapshot(&path) {
        warn!("could not open {}: {}", path.display(), err);
        output::warning(format!(
            "Failed to load budgets from {}: {}",
            path.display(),
            err
        ));
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<ShellHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(ShellHelper::new(&context.commands)));
    let history = context.history_path();
    if let Some(path) = history.as_ref().filter(|path| path.exists()) {
        if let Err(err) = editor.load_history(path) {
            warn!("ignoring unreadable history {}: {}", path.display(), err);
        }
    }

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.trim());
                if run_line(context, &line)? == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = history {
        if let Err(err) = editor.save_history(&path) {
            warn!("could not save history to {}: {}", path.display(), err);
        }
    }
    Ok(())
}

/// Runs one command per line; blank lines and `#` comments are skipped.
fn run_script(context: &mut ShellContext, input: impl BufRead) -> Result<(), CliError> {
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        debug!("script line {}: {}", index + 1, trimmed);
        if run_line(context, trimmed)? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

/// Executes `line`, reporting command failures without ending the session.
fn run_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    match execute(context, line) {
        Ok(control) => Ok(control),
        Err(err) => {
            context.report_error(err)?;
            Ok(LoopControl::Continue)
        }
    }
}

fn execute(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = shell_words::split(line)
        .map_err(|err| CommandError::InvalidArguments(format!("cannot parse `{line}`: {err}")))?;
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();

    context.last_command = Some(line.trim().to_string());
    let control = context.dispatch(&raw.to_lowercase(), raw, &args)?;
    if control == LoopControl::Exit {
        context.running = false;
    }
    Ok(control)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_skips_comments_and_stops_at_exit() {
        let home = tempfile::tempdir().unwrap();
        let mut context =
            ShellContext::with_home(CliMode::Script, home.path().to_path_buf()).unwrap();

        let script = "# budgets\n\nsearch groc\nexit\nsearch rent\n";
        run_script(&mut context, script.as_bytes()).unwrap();

        assert_eq!(context.view.query().search, "groc");
        assert!(!context.running);
        assert_eq!(context.last_command.as_deref(), Some("exit"));
    }

    #[test]
    fn unbalanced_quotes_are_reported_not_fatal() {
        let home = tempfile::tempdir().unwrap();
        let mut context =
            ShellContext::with_home(CliMode::Script, home.path().to_path_buf()).unwrap();

        assert!(matches!(
            execute(&mut context, "search \"groc"),
            Err(CommandError::InvalidArguments(_))
        ));
        assert_eq!(
            run_line(&mut context, "search \"groc").unwrap(),
            LoopControl::Continue
        );
        assert!(context.running);
    }
}
