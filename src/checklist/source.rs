//! Template source resolution.
//!
//! Resolution precedence:
//! 1. Explicit `--template` file (main checklist only)
//! 2. Local templates directory when the local toggle is set
//! 3. Remote template URL

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::config::Config;

/// Templates known to the checklist renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TemplateKind {
    Checklist,
    Aztec,
    IncomingChange,
}

impl TemplateKind {
    /// Path relative to both the remote base URL and the local templates root.
    pub(crate) fn relative_path(self) -> &'static str {
        match self {
            Self::Checklist => "templates/checklist/checklist.html",
            Self::Aztec => "templates/checklist/aztec.html",
            Self::IncomingChange => "templates/checklist/incoming_change.html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TemplateSource {
    File(PathBuf),
    Remote(String),
}

pub(crate) fn resolve(config: &Config, kind: TemplateKind) -> TemplateSource {
    if kind == TemplateKind::Checklist {
        if let Some(path) = config.template_override.as_ref() {
            return TemplateSource::File(path.clone());
        }
    }

    if let Some(root) = config.local_templates.as_ref() {
        return TemplateSource::File(root.join(kind.relative_path()));
    }

    TemplateSource::Remote(format!(
        "{}/{}",
        config.template_base_url,
        kind.relative_path()
    ))
}

pub(crate) fn load(source: &TemplateSource) -> Result<String> {
    match source {
        TemplateSource::File(path) => read_template_file(path),
        TemplateSource::Remote(url) => fetch_template(url),
    }
}

fn read_template_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read template file at {}", path.display()))
}

fn fetch_template(url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("failed to fetch template from {url}"))?;
    response
        .text()
        .with_context(|| format!("failed to read template body from {url}"))
}
