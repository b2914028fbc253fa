use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use formfix::repair;

#[derive(Parser)]
#[command(
    name = "formfix",
    version,
    about = "Repair passes for a corrupted HTML form template"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a template whose appended tail was written as UTF-16LE
    FixEncoding {
        /// Template file to repair in place
        path: PathBuf,
    },
    /// Move a block appended at end-of-file back inside the form
    FixLayout {
        /// Template file to repair in place
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    formfix::logging::init();

    let cli = Cli::parse();
    match cli.command {
        Command::FixEncoding { path } => {
            repair::encoding::run(&path)?;
            println!("File repaired and layout fixed.");
        }
        Command::FixLayout { path } => {
            repair::layout::run(&path)?;
            println!("File updated successfully");
        }
    }

    Ok(())
}
