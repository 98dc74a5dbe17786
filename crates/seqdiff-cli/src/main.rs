//! Command-line reporter for the seqdiff comparison engine.
//!
//! Reads two files as sequences (lines by default, JSON array elements
//! with `--json`), compares them through `seqdiff-core`, and prints one
//! diff record per line or a JSON report. Exit codes follow `diff(1)`:
//! 0 when the inputs are identical, 1 when differences were found, 2 on
//! error.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use seqdiff_core::{
    compare, ArrayComparisonResult, ComparisonModel, DiffFactory, KeyedModel, ScalarModel,
};
use serde_json::Value;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    /// One human-readable diff record per line.
    #[default]
    Text,
    /// A JSON array of diff records.
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "seqdiff",
    about = "Compare two files as sequences and classify the differences",
    version
)]
struct Cli {
    /// The expected ("left") input file.
    file1: PathBuf,

    /// The actual ("right") input file.
    file2: PathBuf,

    /// Parse both files as JSON arrays and compare their elements.
    #[arg(long)]
    json: bool,

    /// Key expression for correspondence matching (dotted field path,
    /// e.g. `id` or `meta.id`); repeatable, implies --json.
    #[arg(long = "key", value_name = "EXPR")]
    keys: Vec<String>,

    /// Prefix reported locators with this path.
    #[arg(long = "base-path", default_value = "")]
    base_path: String,

    /// Report format.
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write the report to FILE instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Suppress the report; communicate through the exit status only.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("seqdiff: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let report = if cli.json || !cli.keys.is_empty() {
        compare_json(cli)?
    } else {
        compare_lines(cli)?
    };

    if !cli.quiet && !report.text.is_empty() {
        write_report(cli, &report.text)?;
    }
    Ok(report.identical)
}

struct Report {
    identical: bool,
    text: String,
}

fn compare_lines(cli: &Cli) -> Result<Report> {
    let left = read_lines(&cli.file1)?;
    let right = read_lines(&cli.file2)?;
    let factory = DiffFactory::default();
    let result = compare(&left, &right, &ScalarModel, &cli.base_path, &factory);
    render(cli, &factory, result)
}

fn compare_json(cli: &Cli) -> Result<Report> {
    let left = read_json_array(&cli.file1)?;
    let right = read_json_array(&cli.file2)?;

    let mut model = KeyedModel::new();
    for key in &cli.keys {
        model
            .add_key_expression(&cli.base_path, key)
            .with_context(|| format!("registering key expression {key:?}"))?;
    }

    let factory = DiffFactory::default();
    let result = compare(&left, &right, &model, &cli.base_path, &factory);
    render(cli, &factory, result)
}

fn render<T>(
    cli: &Cli,
    factory: &DiffFactory<T>,
    result: ArrayComparisonResult<T>,
) -> Result<Report>
where
    T: serde::Serialize,
{
    let identical = result.identical();
    let text = match cli.format {
        OutputFormat::Text => {
            let mut lines = String::new();
            for diff in result.diffs() {
                lines.push_str(&factory.describe(diff));
                lines.push('\n');
            }
            lines
        }
        OutputFormat::Json => {
            let mut body = serde_json::to_string_pretty(result.diffs())
                .context("serializing diff report")?;
            body.push('\n');
            body
        }
    };
    Ok(Report { identical, text })
}

fn write_report(cli: &Cli, text: &str) -> Result<()> {
    match &cli.output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("writing report to {}", path.display())),
        None => {
            io::stdout().write_all(text.as_bytes()).context("writing report to stdout")
        }
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(contents.lines().map(ToOwned::to_owned).collect())
}

fn read_json_array(path: &Path) -> Result<Vec<Value>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {} as JSON", path.display()))?;
    match value {
        Value::Array(items) => Ok(items),
        other => bail!(
            "{} must contain a JSON array, found {}",
            path.display(),
            json_type_name(&other)
        ),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
