//! Sub-checklists embedded into the main release checklist.
//!
//! Each one follows the same contract as the main checklist: resolve the
//! template source, load it, render it with its own substitutions.

use anyhow::{Context, Result};

use crate::config::Config;

use super::{
    render::{Substitutions, render},
    source::{self, TemplateKind},
};

/// Steps for updating the Aztec editor on both platforms.
pub(crate) fn render_aztec(config: &Config) -> Result<String> {
    if !config.include_aztec {
        return Ok(String::new());
    }
    render_kind(config, TemplateKind::Aztec, &aztec_substitutions(config))
        .context("failed to render Aztec checklist")
}

/// Steps for bringing a fix into an unscheduled release.
pub(crate) fn render_incoming_change(config: &Config) -> Result<String> {
    if !config.include_incoming_change {
        return Ok(String::new());
    }
    render_kind(
        config,
        TemplateKind::IncomingChange,
        &incoming_change_substitutions(config),
    )
    .context("failed to render incoming change checklist")
}

fn aztec_substitutions(config: &Config) -> Substitutions {
    Substitutions::new().set("conditional", config.aztec_optional)
}

fn incoming_change_substitutions(config: &Config) -> Substitutions {
    Substitutions::new()
        .set("version", config.version.as_str())
        .set("tag", config.version.tag())
}

pub(super) fn render_kind(
    config: &Config,
    kind: TemplateKind,
    substitutions: &Substitutions,
) -> Result<String> {
    let template = source::load(&source::resolve(config, kind))?;
    render(&template, substitutions)
}
