use anyhow::Context;
use std::path::Path;
use std::process::{Command, Stdio};

/// Re-loads the prompt script into a shell.
pub trait Activator {
    fn activate(&self, script: &Path) -> anyhow::Result<()>;
}

/// Sources the script with `<shell> -c '. "$1"' <shell> <script>`, so the path
/// reaches the shell as one argument.
#[derive(Debug, Clone)]
pub struct ShellActivator {
    pub shell: String,
}

impl ShellActivator {
    pub fn new(shell: impl Into<String>) -> Self {
        Self { shell: shell.into() }
    }
}

impl Activator for ShellActivator {
    fn activate(&self, script: &Path) -> anyhow::Result<()> {
        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(r#". "$1""#)
            .arg(&self.shell)
            .arg(script)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("run {}", self.shell))?;
        if !status.success() {
            anyhow::bail!("{} exited with {status}", self.shell);
        }
        Ok(())
    }
}

/// Run the activator and swallow any failure: the files are already in place
/// and new sessions pick them up regardless.
pub fn try_activate(activator: &dyn Activator, script: &Path) -> bool {
    match activator.activate(script) {
        Ok(()) => {
            tracing::debug!(path = %script.display(), "activated prompt script");
            true
        }
        Err(e) => {
            tracing::warn!("could not reload prompt in this shell: {e:#}");
            false
        }
    }
}
