//! Substitution of named values into checklist templates.
//!
//! Templates only see the names inserted into [`Substitutions`]. Referencing
//! anything else fails the render instead of producing an empty string.

use anyhow::{Context, Result};
use serde::Serialize;
use tera::{Context as TeraContext, Tera};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub(crate) enum Value {
    Text(String),
    Flag(bool),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Ordered `{placeholder: value}` map handed to a single render.
#[derive(Debug, Clone, Default)]
pub(crate) struct Substitutions {
    entries: Vec<(&'static str, Value)>,
}

impl Substitutions {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a named value.
    pub(crate) fn set(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    fn to_tera_context(&self) -> TeraContext {
        let mut context = TeraContext::new();
        for (name, value) in &self.entries {
            context.insert(*name, value);
        }
        context
    }
}

/// Render `template` with autoescaping disabled; the templates already carry
/// their own markup.
pub(crate) fn render(template: &str, substitutions: &Substitutions) -> Result<String> {
    Tera::one_off(template, &substitutions.to_tera_context(), false)
        .context("failed to render template")
}
