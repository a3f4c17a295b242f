mod activate;
mod app;
mod config;
mod files;
mod theme;

use anyhow::Context;
use clap::Parser;
use config::Layout;
use std::process::ExitCode;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "theme", version, about = "Switch the bash prompt, ls colors and fastfetch logo")]
struct Cli {
    /// Theme to apply (case-insensitive).
    name: Option<String>,

    /// List available themes and exit.
    #[arg(long)]
    list: bool,

    /// Write the files but don't reload the prompt in a shell.
    #[arg(long)]
    no_activate: bool,

    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Log each step to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let code = run(&cli, None)?;
    Ok(ExitCode::from(code))
}

/// Dispatch one invocation and return the process exit status.
///
/// `layout` replaces the configured output locations when given. Invalid
/// theme names return 1 before the config is read or any file is touched.
fn run(cli: &Cli, layout: Option<Layout>) -> anyhow::Result<u8> {
    if cli.list {
        print_themes();
        return Ok(0);
    }

    let theme = match theme::select(cli.name.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            println!("{e}");
            return Ok(1);
        }
    };

    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let layout = match layout {
        Some(l) => l,
        None => cfg.layout().context("resolve home directory")?,
    };

    let shell = activate::ShellActivator::new(cfg.activation.shell.clone());
    let activator: Option<&dyn activate::Activator> = if cfg.activation.enabled && !cli.no_activate {
        Some(&shell)
    } else {
        None
    };

    let outcome = app::apply(theme, &layout, activator)?;
    if outcome.linked_now {
        println!("Added `{}` to {}", layout.source_directive, layout.startup_file.display());
    }
    if outcome.activated == Some(false) {
        println!("Open a new shell to see the new prompt.");
    }
    println!("Theme '{}' applied successfully.", outcome.theme);
    Ok(0)
}

fn print_themes() {
    for t in &theme::CATALOG {
        println!("{:<8} {:<10} {}", t.id, t.prompt_color, t.accent);
    }
}
