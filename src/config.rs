//! Run configuration assembled once from CLI flags and environment variables.
//!
//! Environment lookups go through a closure so tests can provide variables
//! without touching the process environment.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::cli::{Cli, ReleaseVersion};

pub(crate) const LOCAL_TEMPLATES_VAR: &str = "RELEASE_CHECKLIST_LOCAL_TEMPLATES";
pub(crate) const TEMPLATES_DIR_VAR: &str = "RELEASE_CHECKLIST_TEMPLATES_DIR";
pub(crate) const TEMPLATE_BASE_URL_VAR: &str = "RELEASE_CHECKLIST_TEMPLATE_BASE_URL";
pub(crate) const DEFAULT_TEMPLATE_BASE_URL: &str =
    "https://raw.githubusercontent.com/wordpress-mobile/release-toolkit-gutenberg-mobile/trunk";
/// CI runners set `CI=true`; unscheduled releases are then confirmed without asking.
const CI_VAR: &str = "CI";
pub(crate) const DEFAULT_MOBILE_VERSION: &str = "XX.X";
const RELEASE_DATE_FORMAT: &str = "%A %B %-d, %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OutputTarget {
    Stdout,
    File(PathBuf),
    Clipboard,
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) version: ReleaseVersion,
    pub(crate) release_date: String,
    pub(crate) mobile_version: String,
    pub(crate) message: Option<String>,
    pub(crate) output: OutputTarget,
    pub(crate) template_override: Option<PathBuf>,
    /// Root of the local templates, set only when the local toggle is on.
    pub(crate) local_templates: Option<PathBuf>,
    pub(crate) template_base_url: String,
    pub(crate) editor: Option<String>,
    pub(crate) include_aztec: bool,
    pub(crate) aztec_optional: bool,
    pub(crate) include_incoming_change: bool,
    pub(crate) assume_yes: bool,
    pub(crate) quiet: bool,
}

impl Config {
    /// Build the run configuration from the process environment.
    pub(crate) fn from_env(cli: Cli) -> Result<Self> {
        let today = Local::now().date_naive();
        Self::from_args_and_env(cli, today, |name| std::env::var(name).ok())
    }

    pub(crate) fn from_args_and_env(
        cli: Cli,
        today: NaiveDate,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let local_templates = if env(LOCAL_TEMPLATES_VAR).is_some_and(|value| is_truthy(&value)) {
            Some(resolve_templates_dir(&env)?)
        } else {
            None
        };

        let template_base_url = env(TEMPLATE_BASE_URL_VAR)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_TEMPLATE_BASE_URL.to_owned());

        let output = match (cli.output, cli.clipboard) {
            (Some(path), _) => OutputTarget::File(path),
            (None, true) => OutputTarget::Clipboard,
            (None, false) => OutputTarget::Stdout,
        };

        Ok(Self {
            release_date: cli
                .release_date
                .unwrap_or_else(|| next_release_date(today)),
            mobile_version: cli
                .mobile_version
                .unwrap_or_else(|| DEFAULT_MOBILE_VERSION.to_owned()),
            message: cli.message,
            output,
            template_override: cli.template,
            local_templates,
            template_base_url: template_base_url.trim_end_matches('/').to_owned(),
            editor: resolve_editor(&env),
            include_aztec: !cli.skip_aztec,
            aztec_optional: cli.aztec_optional,
            include_incoming_change: !cli.skip_incoming_change && !cli.version.is_scheduled(),
            assume_yes: cli.yes || env(CI_VAR).as_deref() == Some("true"),
            quiet: cli.quiet,
            version: cli.version,
        })
    }
}

/// Releases ship on Thursdays. A run on a Thursday targets the same day.
pub(crate) fn next_release_date(today: NaiveDate) -> String {
    let current = today.weekday().num_days_from_monday();
    let thursday = Weekday::Thu.num_days_from_monday();
    let days_ahead = (thursday + 7 - current) % 7;
    let release_day = today + chrono::Duration::days(i64::from(days_ahead));
    release_day.format(RELEASE_DATE_FORMAT).to_string()
}

fn resolve_templates_dir(env: &impl Fn(&str) -> Option<String>) -> Result<PathBuf> {
    match env(TEMPLATES_DIR_VAR).filter(|dir| !dir.is_empty()) {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => std::env::current_dir().context("failed to resolve current directory"),
    }
}

fn resolve_editor(env: &impl Fn(&str) -> Option<String>) -> Option<String> {
    ["VISUAL", "EDITOR"]
        .into_iter()
        .filter_map(|name| env(name))
        .map(|value| value.trim().to_owned())
        .find(|value| !value.is_empty())
}

fn is_truthy(value: &str) -> bool {
    let normalized = value.trim().to_ascii_lowercase();
    !matches!(normalized.as_str(), "" | "0" | "false" | "no" | "off")
}
