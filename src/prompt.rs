//! Interactive steps for unscheduled releases.
//!
//! - confirmation: `[y/n]` question answered on stdin
//! - release message: captured from `$VISUAL`/`$EDITOR` through a scratch file

use std::{
    fs,
    io::{BufRead, Write},
    process::Command,
};

use anyhow::{Context, Result, anyhow, bail};
use tempfile::NamedTempFile;

use crate::output;

const MESSAGE_COMMENT_PREFIX: &str = "#";

/// Ask `question` until the reader answers yes or no.
///
/// End of input counts as a decline.
pub(crate) fn confirm(question: &str, input: &mut impl BufRead) -> Result<bool> {
    loop {
        output::print_prompt(question);

        let mut answer = String::new();
        let read = input
            .read_line(&mut answer)
            .context("failed to read confirmation answer")?;
        if read == 0 {
            eprintln!();
            return Ok(false);
        }

        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => continue,
        }
    }
}

/// Open `editor` on a scratch file and return what the user saved.
///
/// The scratch file is removed when this returns, on every path including
/// unwinding. A signal that kills the process while the editor is open
/// (Ctrl-C) skips the drop and leaves the file in the temp directory.
pub(crate) fn capture_message(editor: &str, version: &str) -> Result<String> {
    let mut words = editor.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| anyhow!("editor command is empty"))?;

    let mut scratch = tempfile::Builder::new()
        .prefix("release-message-")
        .suffix(".txt")
        .tempfile()
        .context("failed to create release message scratch file")?;
    write_instructions(&mut scratch, version)?;

    let status = Command::new(program)
        .args(words)
        .arg(scratch.path())
        .status()
        .with_context(|| format!("failed to launch editor `{editor}`"))?;
    if !status.success() {
        bail!("editor `{editor}` exited with {status}");
    }

    let contents = fs::read_to_string(scratch.path())
        .context("failed to read release message scratch file")?;
    Ok(strip_comments(&contents))
}

fn write_instructions(scratch: &mut NamedTempFile, version: &str) -> Result<()> {
    writeln!(
        scratch,
        "{MESSAGE_COMMENT_PREFIX} Describe why {version} is released outside the schedule.\n\
{MESSAGE_COMMENT_PREFIX} Lines starting with '{MESSAGE_COMMENT_PREFIX}' are ignored."
    )
    .and_then(|()| scratch.flush())
    .context("failed to write release message scratch file")
}

fn strip_comments(contents: &str) -> String {
    contents
        .lines()
        .filter(|line| !line.trim_start().starts_with(MESSAGE_COMMENT_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned()
}
