// src/bin/cli.rs
use color_eyre::eyre::eyre;
use tableish::cli::{self, Outcome};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    match cli::run().map_err(|e| eyre!("{e}"))? {
        Outcome::Mismatched => std::process::exit(1),
        Outcome::Written | Outcome::Matched | Outcome::Help => Ok(()),
    }
}
