//! CLI shape and argument parsing for release-checklist.
//!
//! The positional `<version>` must have a `Major.Minor.Patch` form made of
//! ASCII digits only. A non-zero patch component marks an unscheduled release.

use clap::{ArgAction, Parser};
use std::{fmt, path::PathBuf, str::FromStr};

pub(crate) const VERSION_FORMAT_MESSAGE: &str = "Valid version is required (X.XX.X format)";

#[derive(Debug, Parser)]
#[command(
    name = "release-checklist",
    about = "Render the release checklist for a Gutenberg Mobile release",
    long_about = "Render the release checklist for a Gutenberg Mobile release.\n\n\
Templates are fetched from the release toolkit repository, or read from the local\n\
templates directory when `RELEASE_CHECKLIST_LOCAL_TEMPLATES` is set.\n\
Unscheduled releases (non-zero patch version) ask for confirmation and, in an\n\
interactive terminal, open `$VISUAL`/`$EDITOR` for the release message.",
    after_help = "Examples:\n\
  release-checklist 1.110.0\n\
  release-checklist 1.110.0 --release-date \"Thursday January 2, 2025\" -v 24.1\n\
  release-checklist 1.110.1 --message \"Fixes a crash on launch\" --yes\n\
  release-checklist 1.110.0 --output checklist.html"
)]
pub struct Cli {
    /// Release version in `Major.Minor.Patch` form.
    #[arg(value_name = "version")]
    pub version: ReleaseVersion,

    /// Release date shown in the checklist. Defaults to the next Thursday.
    #[arg(short = 'd', long = "release-date", value_name = "date")]
    pub release_date: Option<String>,

    /// Host app (mobile) version targeted by the release.
    #[arg(short = 'v', long = "mobile-version", value_name = "version")]
    pub mobile_version: Option<String>,

    /// Write the checklist to a file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "path")]
    pub output: Option<PathBuf>,

    /// Release message for unscheduled releases.
    #[arg(short = 'm', long = "message", value_name = "text")]
    pub message: Option<String>,

    /// Render the main checklist from this template file.
    #[arg(short = 't', long = "template", value_name = "path")]
    pub template: Option<PathBuf>,

    /// Skip the unscheduled release confirmation prompt.
    #[arg(short = 'y', long = "yes", action = ArgAction::SetTrue)]
    pub yes: bool,

    /// Copy the checklist to the system clipboard instead of printing it.
    #[arg(
        short = 'c',
        long = "clipboard",
        action = ArgAction::SetTrue,
        conflicts_with = "output"
    )]
    pub clipboard: bool,

    /// Silence `log:` status lines.
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    pub quiet: bool,

    /// Leave out the Aztec upgrade steps.
    #[arg(long = "skip-aztec", action = ArgAction::SetTrue)]
    pub skip_aztec: bool,

    /// Render the Aztec upgrade steps as optional.
    #[arg(
        long = "aztec-optional",
        action = ArgAction::SetTrue,
        conflicts_with = "skip_aztec"
    )]
    pub aztec_optional: bool,

    /// Leave out the incoming change steps of unscheduled releases.
    #[arg(long = "skip-incoming-change", action = ArgAction::SetTrue)]
    pub skip_incoming_change: bool,
}

/// Release version accepted on the command line.
///
/// Keeps the string exactly as typed so leading zeros survive into the
/// rendered checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    raw: String,
    scheduled: bool,
}

impl ReleaseVersion {
    pub(crate) fn as_str(&self) -> &str {
        &self.raw
    }

    /// Scheduled releases bump the minor version and keep patch at zero.
    pub(crate) fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub(crate) fn tag(&self) -> String {
        format!("v{}", self.raw)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ReleaseVersion {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split('.');
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(VERSION_FORMAT_MESSAGE.to_owned());
        };

        if ![major, minor, patch].into_iter().all(is_numeric_component) {
            return Err(VERSION_FORMAT_MESSAGE.to_owned());
        }

        Ok(Self {
            raw: value.to_owned(),
            scheduled: patch.bytes().all(|byte| byte == b'0'),
        })
    }
}

fn is_numeric_component(component: &str) -> bool {
    !component.is_empty() && component.bytes().all(|byte| byte.is_ascii_digit())
}
