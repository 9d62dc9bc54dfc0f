//! Release checklist rendering pipeline.
//!
//! Sub-checklists render first and are embedded as plain strings into the
//! main checklist template.
mod render;
mod source;
mod sub;

use anyhow::{Context, Result};

use crate::config::Config;

use render::Substitutions;
use source::TemplateKind;

const RELEASE_URL_BASE: &str = "https://github.com/wordpress-mobile/gutenberg-mobile/releases/new";
const BUILD_URL_BASE: &str = "https://buildkite.com/automattic/gutenberg-mobile/builds";

/// Values bound into the main checklist template for one run.
#[derive(Debug, Clone)]
pub(crate) struct ReleaseContext {
    pub(crate) version: String,
    pub(crate) scheduled: bool,
    pub(crate) date: String,
    pub(crate) mobile_version: String,
    pub(crate) message: String,
    pub(crate) release_url: String,
    pub(crate) build_url: String,
    pub(crate) aztec_checklist: String,
    pub(crate) incoming_change_checklist: String,
}

impl ReleaseContext {
    /// `message` is the final release message, after any editor prompt.
    pub(crate) fn build(config: &Config, message: Option<String>) -> Result<Self> {
        let version = config.version.as_str();
        Ok(Self {
            version: version.to_owned(),
            scheduled: config.version.is_scheduled(),
            date: config.release_date.clone(),
            mobile_version: config.mobile_version.clone(),
            message: message.unwrap_or_default(),
            release_url: format!(
                "{RELEASE_URL_BASE}?tag=v{version}&target=release/{version}&title=Release+{version}"
            ),
            build_url: format!("{BUILD_URL_BASE}?branch={}", config.version.tag()),
            aztec_checklist: sub::render_aztec(config)?,
            incoming_change_checklist: sub::render_incoming_change(config)?,
        })
    }

    fn substitutions(&self) -> Substitutions {
        Substitutions::new()
            .set("version", self.version.as_str())
            .set("scheduled", self.scheduled)
            .set("date", self.date.as_str())
            .set("mobile_version", self.mobile_version.as_str())
            .set("message", self.message.as_str())
            .set("release_url", self.release_url.as_str())
            .set("build_url", self.build_url.as_str())
            .set("aztec_checklist", self.aztec_checklist.as_str())
            .set(
                "incoming_change_checklist",
                self.incoming_change_checklist.as_str(),
            )
    }
}

/// Render the main checklist for an already assembled context.
pub(crate) fn render_checklist(config: &Config, context: &ReleaseContext) -> Result<String> {
    sub::render_kind(config, TemplateKind::Checklist, &context.substitutions())
        .context("failed to render release checklist")
}
