// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self { OutputFormat::Csv => "csv", OutputFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { OutputFormat::Csv => ',', OutputFormat::Tsv => '\t' }
    }

    /// Case-insensitive name lookup (`csv`, `tsv`).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "tsv" => Some(OutputFormat::Tsv),
            _ => None,
        }
    }

    /// Guess from a file extension; `None` when it is neither csv nor tsv.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::parse)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Input {
    #[default]
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_MARKER { Input::Stdin } else { Input::File(PathBuf::from(arg)) }
    }
}

/// Everything the command-line front end needs for one extraction run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub input: Input,
    pub rows: String,
    pub cells: String,
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
    pub expect: Option<PathBuf>,
    pub skip_header: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            input: Input::default(),
            rows: s!(DEFAULT_ROW_SELECTOR),
            cells: s!(DEFAULT_CELL_SELECTOR),
            format: OutputFormat::default(),
            out: None,
            expect: None,
            skip_header: false,
        }
    }
}

impl CliOptions {
    /// Separator for reading the expected table: its own extension wins,
    /// otherwise the output format's.
    pub fn expect_delim(&self) -> char {
        self.expect
            .as_deref()
            .and_then(OutputFormat::from_path)
            .unwrap_or(self.format)
            .delim()
    }
}
