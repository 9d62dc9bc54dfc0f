use std::{
    fs,
    io::{self, IsTerminal, Write},
    path::Path,
};

use anyhow::{Context, Result};
use arboard::Clipboard;

use crate::{
    config::{Config, OutputTarget},
    output,
};

/// Deliver the rendered checklist to the configured output target.
pub(crate) fn emit(config: &Config, checklist: &str) -> Result<()> {
    match &config.output {
        OutputTarget::File(path) => {
            write_checklist(path, checklist)?;
            output::print_written(path);
        }
        OutputTarget::Clipboard => {
            copy_to_clipboard(checklist)?;
            if !config.quiet {
                output::print_log("checklist copied to the clipboard");
            }
        }
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            if !config.quiet && !stdout.is_terminal() {
                output::print_log(format!(
                    "rendered release checklist for {}",
                    config.version
                ));
            }
            print_checklist(&mut stdout, checklist)?;
        }
    }
    Ok(())
}

fn write_checklist(path: &Path, checklist: &str) -> Result<()> {
    fs::write(path, checklist)
        .with_context(|| format!("failed to write checklist to {}", path.display()))
}

fn print_checklist(writer: &mut impl Write, checklist: &str) -> Result<()> {
    writeln!(writer, "{checklist}")
        .and_then(|()| writer.flush())
        .context("failed to write checklist to stdout")
}

fn copy_to_clipboard(checklist: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("failed to access the system clipboard")?;
    clipboard
        .set_text(checklist.to_owned())
        .context("failed to copy checklist to the clipboard")
}
