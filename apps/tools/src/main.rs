use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use server_api::page::render_page;
use shared::{domain::NavTrigger, protocol::Notice};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the tutorial page as a standalone HTML file.
    Render {
        #[arg(long)]
        output: Option<PathBuf>,
        /// Include the notice a navigation button would show, e.g. `embeddings`.
        #[arg(long, value_parser = parse_trigger)]
        notice: Option<NavTrigger>,
    },
    /// List the navigation buttons and the section each one selects.
    Triggers,
}

fn parse_trigger(raw: &str) -> Result<NavTrigger, String> {
    raw.parse().map_err(|e: shared::domain::ParseLabelError| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render { output, notice } => {
            let notice = notice.map(|trigger| Notice::navigating_to(trigger.section()));
            let html = render_page(notice.as_ref());
            match output {
                Some(path) => {
                    fs::write(&path, html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("wrote {}", path.display());
                }
                None => print!("{html}"),
            }
        }
        Command::Triggers => {
            for trigger in NavTrigger::ALL {
                println!(
                    "{:<14} {:<22} -> {}",
                    trigger.key(),
                    trigger.button_label(),
                    trigger.section()
                );
            }
        }
    }

    Ok(())
}
