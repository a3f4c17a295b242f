//! Applies a resolved theme: prompt files, startup hook, fastfetch, reload.

use crate::activate::{try_activate, Activator};
use crate::config::Layout;
use crate::files::{fastfetch, prompt, startup};
use crate::theme::ThemeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PromptWritten,
    Linked,
    ConfigWritten,
    Activated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub theme: &'static str,
    /// Whether this run added the hook to the startup file.
    pub linked_now: bool,
    /// `None` when activation was skipped.
    pub activated: Option<bool>,
}

/// Write every output file for `theme`, then optionally reload the prompt.
///
/// Filesystem errors abort at the failing step; earlier files stay written.
pub fn apply(
    theme: &'static ThemeRecord,
    layout: &Layout,
    activator: Option<&dyn Activator>,
) -> anyhow::Result<Outcome> {
    prompt::write(theme, layout)?;
    tracing::debug!(stage = ?Stage::PromptWritten, theme = theme.id);

    let linked_now = startup::link(&layout.startup_file, &layout.source_directive)?;
    tracing::debug!(stage = ?Stage::Linked, appended = linked_now);

    fastfetch::write(theme, layout)?;
    tracing::debug!(stage = ?Stage::ConfigWritten);

    let activated = activator.map(|a| try_activate(a, &layout.prompt_script));
    tracing::debug!(stage = ?Stage::Activated, ?activated);

    Ok(Outcome {
        theme: theme.id,
        linked_now,
        activated,
    })
}
