use crate::config::Layout;
use crate::theme::ThemeRecord;
use std::path::Path;

/// Bash prompt that colors `user@host:cwd$ ` and resets afterwards.
pub fn ps1_line(color: &str) -> String {
    format!(r"export PS1='\[\033[{color}m\]\u@\h:\w\$ \[\033[0m\]'")
}

pub fn dircolors_line(color_rules: &Path) -> String {
    format!("eval $(dircolors -b {})", color_rules.display())
}

pub fn prompt_script(theme: &ThemeRecord, layout: &Layout) -> String {
    format!(
        "{}\n{}\n",
        ps1_line(theme.prompt_color),
        dircolors_line(&layout.color_rules)
    )
}

/// Overwrite the prompt script and the color rules file.
pub fn write(theme: &ThemeRecord, layout: &Layout) -> anyhow::Result<()> {
    super::ensure_dir(&layout.home)?;
    super::write(&layout.prompt_script, &prompt_script(theme, layout))?;
    tracing::debug!(path = %layout.prompt_script.display(), "wrote prompt script");

    // Verbatim, no trailing newline.
    super::write(&layout.color_rules, theme.color_rules)?;
    tracing::debug!(path = %layout.color_rules.display(), "wrote color rules");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn ps1_wraps_whole_prompt_in_color() {
        assert_eq!(
            ps1_line("38;5;196"),
            r"export PS1='\[\033[38;5;196m\]\u@\h:\w\$ \[\033[0m\]'"
        );
    }

    #[test]
    fn script_has_two_lines() {
        let layout = Layout::from_home("/home/u");
        let script = prompt_script(&ThemeRecord::OCEAN, &layout);
        let lines: Vec<_> = script.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r"\033[38;5;81m"));
        assert_eq!(lines[1], "eval $(dircolors -b /home/u/.dircolors)");
        assert!(script.ends_with('\n'));
    }

    #[test]
    fn writes_both_files_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::from_home(dir.path().join("home"));

        write(&ThemeRecord::OCEAN, &layout).unwrap();
        write(&ThemeRecord::FOREST, &layout).unwrap();

        assert_eq!(
            fs::read_to_string(&layout.color_rules).unwrap(),
            ThemeRecord::FOREST.color_rules
        );
        let script = fs::read_to_string(&layout.prompt_script).unwrap();
        assert!(script.contains(r"\033[38;5;34m"));
        assert!(!script.contains("38;5;81"));
    }
}
