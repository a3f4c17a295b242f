use crate::config::Layout;
use crate::theme::ThemeRecord;
use anyhow::Context;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

pub const SCHEMA_URL: &str =
    "https://github.com/fastfetch-cli/fastfetch/raw/dev/doc/json_schema.json";

pub const MODULES: [&str; 6] = ["os", "kernel", "shell", "cpu", "gpu", "memory"];

// Field order here is the order in the written file.
#[derive(Debug, Serialize)]
pub struct FastfetchConfig<'a> {
    #[serde(rename = "$schema")]
    pub schema: &'a str,
    pub logo: Logo<'a>,
    pub modules: &'a [&'a str],
}

#[derive(Debug, Serialize)]
pub struct Logo<'a> {
    pub source: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub height: u32,
    pub width: u32,
    pub padding: Padding,
}

#[derive(Debug, Serialize)]
pub struct Padding {
    pub top: u32,
    pub left: u32,
}

impl<'a> FastfetchConfig<'a> {
    /// Only the logo depends on the theme.
    pub fn for_theme(theme: &'a ThemeRecord) -> Self {
        Self {
            schema: SCHEMA_URL,
            logo: Logo {
                source: theme.logo,
                kind: "kitty",
                height: 16,
                width: 30,
                padding: Padding { top: 8, left: 3 },
            },
            modules: &MODULES,
        }
    }
}

pub fn render(theme: &ThemeRecord) -> anyhow::Result<String> {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    FastfetchConfig::for_theme(theme)
        .serialize(&mut ser)
        .context("encode fastfetch config")?;
    String::from_utf8(out).context("fastfetch config is not utf-8")
}

/// Overwrite the fastfetch config, creating its directory if needed.
pub fn write(theme: &ThemeRecord, layout: &Layout) -> anyhow::Result<()> {
    super::ensure_dir(&layout.fastfetch_dir)?;
    let raw = render(theme)?;
    super::write(&layout.fastfetch_config, &raw)?;
    tracing::debug!(path = %layout.fastfetch_config.display(), "wrote fastfetch config");
    Ok(())
}
