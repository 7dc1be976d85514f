//! Subcommand implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use std::io::Write;
use tinta_theme::{ClassList, Theme, ThemeMode, ThemeStorage, ThemeStore};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available themes
    List {
        /// Only themes of this mode (light or dark)
        #[arg(long)]
        mode: Option<ThemeMode>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the active theme
    Current {
        #[arg(long)]
        json: bool,
    },
    /// Show a theme's tokens
    Show {
        id: String,
        /// Print a CSS custom property block instead
        #[arg(long)]
        css: bool,
    },
    /// Select a theme by id
    Set { id: String },
    /// Switch between the default light and dark themes
    Toggle,
    /// Switch to the first theme of the opposite mode
    ToggleMode,
}

impl Command {
    fn mutates(&self) -> bool {
        matches!(self, Self::Set { .. } | Self::Toggle | Self::ToggleMode)
    }
}

/// Run `command` against an initialized store, writing output to `out`
pub fn run<S: ThemeStorage>(
    command: Command,
    store: &mut ThemeStore<S, ClassList>,
    out: &mut impl Write,
) -> Result<()> {
    let mutates = command.mutates();

    match command {
        Command::List { mode, json } => {
            let themes: Vec<&Theme> = match mode {
                Some(mode) => store.catalog().by_mode(mode),
                None => store.catalog().themes().iter().collect(),
            };
            if json {
                serde_json::to_writer_pretty(&mut *out, &themes)?;
                writeln!(out)?;
            } else {
                let current = store.current_id();
                for theme in themes {
                    let marker = if theme.id == current { "*" } else { " " };
                    writeln!(
                        out,
                        "{marker} {:<14} {:<5}  {}",
                        theme.id, theme.mode, theme.name
                    )?;
                }
            }
        }
        Command::Current { json } => {
            let theme = store.current_theme();
            if json {
                serde_json::to_writer_pretty(&mut *out, theme)?;
                writeln!(out)?;
            } else {
                write_theme(out, theme)?;
            }
        }
        Command::Show { id, css } => {
            let theme = store
                .catalog()
                .get(&id)
                .with_context(|| format!("Unknown theme '{id}'. Run `tinta list` to see ids."))?;
            if css {
                let selector = match theme.mode {
                    ThemeMode::Light => ":root".to_string(),
                    ThemeMode::Dark => format!(".{}", store.config().dark_class),
                };
                writeln!(out, "{}", theme.to_css_block(&selector))?;
            } else {
                write_theme(out, theme)?;
            }
        }
        Command::Set { id } => {
            if !store.catalog().contains(&id) {
                writeln!(out, "unknown theme '{id}'; selection unchanged")?;
            }
            store.set_theme(&id);
        }
        Command::Toggle => store.toggle_theme(),
        Command::ToggleMode => store.toggle_mode(),
    }

    if mutates {
        let theme = store.current_theme();
        writeln!(out, "theme: {} ({})", theme.id, theme.mode)?;
        writeln!(out, "root class: \"{}\"", store.root())?;
    }
    Ok(())
}

fn write_theme(out: &mut impl Write, theme: &Theme) -> Result<()> {
    writeln!(out, "{} ({})", theme.name, theme.id)?;
    if !theme.description.is_empty() {
        writeln!(out, "  {}", theme.description)?;
    }
    writeln!(out, "  mode:       {}", theme.mode)?;
    writeln!(out, "  primary:    {}", theme.colors.primary)?;
    writeln!(out, "  secondary:  {}", theme.colors.secondary)?;
    writeln!(out, "  accent:     {}", theme.colors.accent)?;
    writeln!(
        out,
        "  preview:    {} / {} / {}",
        theme.preview.background, theme.preview.surface, theme.preview.text
    )?;
    Ok(())
}
