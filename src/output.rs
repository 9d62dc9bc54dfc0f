//! Diagnostic lines for the terminal.
//!
//! Everything here goes to stderr so stdout carries only the checklist.

use std::{
    io::{self, IsTerminal, Write},
    path::Path,
};

use ratatui::{
    crossterm::{
        execute,
        style::{
            Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute,
            SetForegroundColor, force_color_output,
        },
    },
    style::{Color, Modifier, Style},
};

#[derive(Clone, Copy)]
enum MessageKind {
    Log,
    Hint,
    Prompt,
    Warning,
    Error,
}

pub(crate) fn print_log(message: impl AsRef<str>) {
    let text = format!("log: {}", message.as_ref());
    write_stderr(&text, MessageKind::Log, true);
}

pub(crate) fn print_hint(message: impl AsRef<str>) {
    let text = format!("hint: {}", message.as_ref());
    write_stderr(&text, MessageKind::Hint, true);
}

pub(crate) fn print_warning(message: impl AsRef<str>) {
    let text = format!("warning: {}", message.as_ref());
    write_stderr(&text, MessageKind::Warning, true);
}

pub(crate) fn print_error(message: impl AsRef<str>) {
    let text = format!("error: {}", message.as_ref());
    write_stderr(&text, MessageKind::Error, true);
}

/// Print a question without a trailing newline so the answer follows it.
pub(crate) fn print_prompt(question: impl AsRef<str>) {
    let text = format!("{} [y/n]: ", question.as_ref());
    write_stderr(&text, MessageKind::Prompt, false);
}

pub(crate) fn print_written(path: &Path) {
    print_log(format!("checklist written to {}", path.display()));
}

fn write_stderr(text: &str, kind: MessageKind, newline: bool) {
    let mut stderr = io::stderr();
    write_message(&mut stderr, text, kind, newline, stderr_supports_color());
}

fn write_message(
    writer: &mut impl Write,
    text: &str,
    kind: MessageKind,
    newline: bool,
    use_color: bool,
) {
    if use_color && write_colored(writer, text, style_for(kind), newline).is_ok() {
        return;
    }
    let _ = if newline {
        writeln!(writer, "{text}")
    } else {
        write!(writer, "{text}").and_then(|()| writer.flush())
    };
}

fn write_colored(
    writer: &mut impl Write,
    text: &str,
    style: Style,
    newline: bool,
) -> io::Result<()> {
    if let Some(color) = style.fg {
        execute!(writer, SetForegroundColor(CrosstermColor::from(color)))?;
    }
    if style.add_modifier.contains(Modifier::BOLD) {
        execute!(writer, SetAttribute(Attribute::Bold))?;
    }
    if style.add_modifier.contains(Modifier::DIM) {
        execute!(writer, SetAttribute(Attribute::Dim))?;
    }

    execute!(writer, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
    if newline {
        execute!(writer, Print("\n"))?;
    }
    Ok(())
}

fn stderr_supports_color() -> bool {
    if force_color_enabled() {
        force_color_output(true);
        return true;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    io::stderr().is_terminal()
}

fn force_color_enabled() -> bool {
    is_force_color_var_set("RELEASE_CHECKLIST_FORCE_COLOR")
        || is_force_color_var_set("CLICOLOR_FORCE")
}

fn is_force_color_var_set(name: &str) -> bool {
    match std::env::var(name) {
        Ok(value) => value != "0",
        Err(_) => false,
    }
}

fn style_for(kind: MessageKind) -> Style {
    match kind {
        MessageKind::Log => Style::new().fg(Color::Cyan).add_modifier(Modifier::DIM),
        MessageKind::Hint => Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        MessageKind::Prompt => Style::new().add_modifier(Modifier::BOLD),
        MessageKind::Warning => Style::new()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
        MessageKind::Error => Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}
