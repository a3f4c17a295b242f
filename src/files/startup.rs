use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

fn hook(directive: &str) -> String {
    format!("\n# Custom theme\n{directive}\n")
}

/// Make sure `startup` runs `directive`, appending the hook once. The
/// directive's presence anywhere in the file counts as linked.
///
/// Returns whether anything was appended. Existing duplicates are left alone.
pub fn link(startup: &Path, directive: &str) -> anyhow::Result<bool> {
    let existing = match fs::read_to_string(startup) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e).with_context(|| format!("read {}", startup.display())),
    };
    if existing.contains(directive) {
        tracing::debug!(path = %startup.display(), "startup file already linked");
        return Ok(false);
    }

    let mut f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(startup)
        .with_context(|| format!("open {}", startup.display()))?;
    f.write_all(hook(directive).as_bytes())
        .with_context(|| format!("append {}", startup.display()))?;
    tracing::debug!(path = %startup.display(), "linked startup file");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECTIVE: &str = "source ~/.bash_theme";

    fn count(s: &str) -> usize {
        s.matches(DIRECTIVE).count()
    }

    #[test]
    fn creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".bashrc");

        assert!(link(&path, DIRECTIVE).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "\n# Custom theme\nsource ~/.bash_theme\n");
    }

    #[test]
    fn appends_after_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".bashrc");
        fs::write(&path, "alias ll='ls -l'\n").unwrap();

        link(&path, DIRECTIVE).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "alias ll='ls -l'\n\n# Custom theme\nsource ~/.bash_theme\n"
        );
    }

    #[test]
    fn repeated_links_add_one_directive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".bashrc");

        assert!(link(&path, DIRECTIVE).unwrap());
        for _ in 0..4 {
            assert!(!link(&path, DIRECTIVE).unwrap());
        }
        assert_eq!(count(&fs::read_to_string(&path).unwrap()), 1);
    }

    #[test]
    fn manual_duplicates_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".bashrc");
        let manual = "source ~/.bash_theme\nsource ~/.bash_theme\n";
        fs::write(&path, manual).unwrap();

        assert!(!link(&path, DIRECTIVE).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), manual);
    }

    #[test]
    fn directive_inside_other_text_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".bashrc");
        fs::write(&path, "[ -f ~/.bash_theme ] && source ~/.bash_theme\n").unwrap();

        assert!(!link(&path, DIRECTIVE).unwrap());
    }

    #[test]
    fn absolute_directive_is_linked_separately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".bashrc");
        fs::write(&path, "source ~/.bash_theme\n").unwrap();

        let absolute = "source \"/srv/alt home/.bash_theme\"";
        assert!(link(&path, absolute).unwrap());
        assert!(!link(&path, absolute).unwrap());
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches(absolute).count(), 1);
        assert!(content.ends_with("# Custom theme\nsource \"/srv/alt home/.bash_theme\"\n"));
    }
}
