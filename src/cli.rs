// src/cli.rs
use std::{env, fs, io::{self, Write}, path::PathBuf};

use crate::config::options::{CliOptions, Input, OutputFormat};
use crate::{csv, diff, extract_table, Grid};

/// What a run produced, so the binary can pick an exit code.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Written,
    Matched,
    Mismatched,
    Help,
}

/// Parse process args and run.
pub fn run() -> Result<Outcome, Box<dyn std::error::Error>> {
    match parse_args(env::args().skip(1))? {
        Some(opts) => execute(&opts),
        None => {
            eprintln!("{}", include_str!("cli_help.txt"));
            Ok(Outcome::Help)
        }
    }
}

pub fn execute(opts: &CliOptions) -> Result<Outcome, Box<dyn std::error::Error>> {
    logf!(
        "extract: input={:?} rows={:?} cells={:?} format={}",
        opts.input, opts.rows, opts.cells, opts.format.ext()
    );

    let html = read_input(&opts.input)?;
    let mut grid = extract_table(&html, opts.rows.as_str(), opts.cells.as_str())?;
    if opts.skip_header && !grid.is_empty() {
        grid.remove(0);
    }

    if let Some(path) = &opts.expect {
        let text = fs::read_to_string(path)?;
        let expected = csv::parse_rows(&text, opts.expect_delim());
        let result = diff::diff_grids(&expected, &grid);
        if result.is_match() {
            return Ok(Outcome::Matched);
        }
        loge!("{} mismatches against {}", result.mismatches.len(), path.display());
        eprint!("{result}");
        return Ok(Outcome::Mismatched);
    }

    write_output(opts, &grid)?;
    Ok(Outcome::Written)
}

fn read_input(input: &Input) -> io::Result<String> {
    match input {
        Input::Stdin => io::read_to_string(io::stdin()),
        Input::File(path) => fs::read_to_string(path),
    }
}

fn write_output(opts: &CliOptions, grid: &Grid) -> io::Result<()> {
    let sep = opts.format.delim();
    match &opts.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let mut w = io::BufWriter::new(fs::File::create(path)?);
            csv::write_grid(&mut w, grid, None, sep)?;
            w.flush()
        }
        None => {
            let stdout = io::stdout();
            csv::write_grid(stdout.lock(), grid, None, sep)
        }
    }
}

/// `Ok(None)` means help was asked for.
pub fn parse_args<I>(args: I) -> Result<Option<CliOptions>, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = CliOptions::default();
    let mut input: Option<Input> = None;
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--rows" | "-r" => opts.rows = args.next().ok_or("Missing value for --rows")?,
            "--cells" | "-c" => opts.cells = args.next().ok_or("Missing value for --cells")?,
            "--format" | "-f" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.format = OutputFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?;
            }
            "-o" | "--out" => {
                opts.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--expect" => {
                opts.expect = Some(PathBuf::from(args.next().ok_or("Missing value for --expect")?));
            }
            "--skip-header" => opts.skip_header = true,
            "-h" | "--help" => return Ok(None),
            other if other.starts_with('-') && other != "-" => {
                return Err(format!("Unknown arg: {}", other).into());
            }
            other => {
                if input.is_some() {
                    return Err(format!("Unexpected extra input: {}", other).into());
                }
                input = Some(Input::from_arg(other));
            }
        }
    }

    opts.input = input.unwrap_or_default();
    Ok(Some(opts))
}
