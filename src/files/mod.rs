//! Writers for the files each consumer reads
//!
//! - prompt: `.bash_theme` and `.dircolors` for bash and `ls`
//! - startup: the `.bashrc` hook that sources the prompt script
//! - fastfetch: the system info display config

pub mod fastfetch;
pub mod prompt;
pub mod startup;

use anyhow::Context;
use std::fs;
use std::path::Path;

pub(crate) fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))
}

pub(crate) fn write(path: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
