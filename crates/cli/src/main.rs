//! CLI tool for extracting tab-separated text from CSV files.

use anyhow::{Context, Result};
use clap::Parser;
use csvtext_core::{format_file_size, TabFormatter};
use csvtext_csv::CsvParser;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// Extract tab-separated plain text from CSV files.
#[derive(Parser, Debug)]
#[command(name = "csv-extract")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Write the parsed rows as JSON instead of tab-separated text
    #[arg(short, long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let parser = CsvParser::new();
    let formatter = TabFormatter::new();

    let failures = process_inputs(&args, &parser, &formatter);
    if failures > 0 {
        log::warn!("{} of {} files failed", failures, args.input.len());
    }

    Ok(())
}

/// Run every input file, reporting failures and moving on to the next one.
///
/// Returns the number of files that failed.
fn process_inputs(args: &Args, parser: &CsvParser, formatter: &TabFormatter) -> usize {
    let mut failures = 0;

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        if let Err(e) = run_file(input_path, args, parser, formatter) {
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
            failures += 1;
        }
    }

    failures
}

/// Extract one file and print it or write it to its output path.
fn run_file(
    input_path: &Path,
    args: &Args,
    parser: &CsvParser,
    formatter: &TabFormatter,
) -> Result<()> {
    let output = process_file(input_path, args, parser, formatter)?;

    if args.print {
        print!("{}", output);
        return Ok(());
    }

    let output_path = get_output_path(input_path, args.output.as_ref(), args.json)?;
    if is_same_file(input_path, &output_path) {
        anyhow::bail!(
            "Refusing to overwrite input file {}",
            output_path.display()
        );
    }

    write_output(&output_path, &output)?;
    if args.verbose {
        eprintln!("Written to: {}", output_path.display());
    }

    Ok(())
}

/// Process a single CSV file.
fn process_file(
    input_path: &Path,
    args: &Args,
    parser: &CsvParser,
    formatter: &TabFormatter,
) -> Result<String> {
    let file = File::open(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;

    if args.verbose {
        let size = file.metadata().map(|m| m.len()).unwrap_or(0);
        eprintln!("  Size: {}", format_file_size(size, 2));
    }

    let filename = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    let document = parser
        .parse(BufReader::new(file), filename)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    log::debug!("Decoded {} as {}", filename, document.encoding);

    if args.verbose {
        eprintln!(
            "  Found {} rows ({}, up to {} fields)",
            document.row_count(),
            document.encoding,
            document.max_field_count()
        );
    }

    if args.json {
        let mut json = serde_json::to_string_pretty(&document)
            .context("Failed to serialize document")?;
        json.push('\n');
        return Ok(json);
    }

    Ok(formatter.format_with_newline(&document.rows))
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>, json: bool) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let extension = if json { "json" } else { "txt" };
    let output_filename = format!("{}.{}", stem, extension);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Whether two paths name the same file on disk.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
