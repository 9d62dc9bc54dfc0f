mod checklist;
mod cli;
mod config;
mod emit;
mod output;
mod prompt;

use std::io::{self, IsTerminal};

use anyhow::{Result, bail};
use checklist::ReleaseContext;
use clap::Parser;
use cli::Cli;
use config::Config;

fn main() {
    if let Err(error) = run() {
        output::print_error(format!("{error:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env(Cli::parse())?;

    let message = if config.version.is_scheduled() {
        config.message.clone()
    } else {
        confirm_unscheduled(&config)?;
        unscheduled_message(&config)?
    };

    let context = ReleaseContext::build(&config, message)?;
    let rendered = checklist::render_checklist(&config, &context)?;
    emit::emit(&config, &rendered)
}

fn confirm_unscheduled(config: &Config) -> Result<()> {
    if config.assume_yes {
        return Ok(());
    }

    let question = format!(
        "Version {} is an unscheduled release. Continue?",
        config.version
    );
    if !prompt::confirm(&question, &mut io::stdin().lock())? {
        bail!("release checklist for {} cancelled", config.version);
    }
    Ok(())
}

fn unscheduled_message(config: &Config) -> Result<Option<String>> {
    if let Some(message) = config.message.as_ref() {
        return Ok(Some(message.clone()));
    }

    let editor = match config.editor.as_deref() {
        Some(editor) if io::stdin().is_terminal() => editor,
        _ => {
            if !config.quiet {
                output::print_hint("pass --message to describe why this release is unscheduled");
            }
            return Ok(None);
        }
    };

    let message = prompt::capture_message(editor, config.version.as_str())?;
    if message.is_empty() {
        output::print_warning("release message is empty");
        return Ok(None);
    }
    Ok(Some(message))
}
