// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::{Parser, Subcommand};
use glob::Pattern;
use serde::Serialize;
use std::env;
use std::io::{self, Read as _, Write};
use std::path::PathBuf;

use crate::core::analyzer::{analyze, analyze_file, read_text};
use crate::core::comparator::compare;
use crate::core::config::{Config, load_config};
use crate::core::report::{ReportFormat, save_report, serialize};
use crate::core::scanner::scan_directory;
use crate::display::{write_analysis_report, write_comparison_report};
use crate::utils::{create_sample_file, write_top_files};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze text given as an argument (reads stdin if omitted)
    Text {
        text: Option<String>,

        #[command(flatten)]
        options: AnalyzeOptions,
    },

    /// Analyze a UTF-8 text file
    File {
        path: PathBuf,

        #[command(flatten)]
        options: AnalyzeOptions,
    },

    /// Compare the vocabularies of two texts (stop words excluded)
    Compare {
        first: String,

        second: String,

        /// Treat both arguments as file paths
        #[arg(long)]
        files: bool,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Write a sample text file to experiment with
    Sample {
        #[arg(default_value = "sample.txt")]
        path: PathBuf,
    },

    /// Analyze every text file in a directory and list the largest
    Scan {
        /// Directory to scan (defaults to current directory)
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Only analyze files whose name matches this glob (e.g., "*.md")
        #[arg(short, long)]
        include: Option<String>,

        /// Directories to exclude (comma-separated)
        #[arg(short, long)]
        exclude: Option<String>,

        /// Number of files to show
        #[arg(short = 't', long)]
        top: Option<usize>,

        /// Include stop words in the counts
        #[arg(short = 's', long)]
        stop_words: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct AnalyzeOptions {
    /// Include stop words in the analysis
    #[arg(short = 's', long)]
    pub stop_words: bool,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(clap::Args, Debug, Default)]
pub struct OutputOptions {
    /// Save the report to a file (defaults to the configured output path)
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    pub save: Option<Option<PathBuf>>,

    /// Report encoding used by --save and --raw
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Print the serialized report instead of the console report
    #[arg(long)]
    pub raw: bool,
}

/// Runs a command, writing its output to stdout.
///
/// # Errors
///
/// Returns an error if the command fails; see [`run_with_output`].
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out)
}

/// Runs a command, writing its output to `out`.
///
/// Configuration is loaded from the nearest `.wordstat.toml` above the current
/// directory; command-line flags override it.
///
/// # Errors
///
/// This function may return an error if:
/// * The configuration file cannot be read or parsed
/// * The input text is blank or a file cannot be read as UTF-8
/// * A report or sample file cannot be written
pub fn run_with_output<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let config = load_config(&env::current_dir()?)?;

    match args.command {
        Command::Text { text, options } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            if text.trim().is_empty() {
                bail!("No text entered.");
            }
            let analysis = analyze(&text, options.stop_words || config.include_stop_words);
            emit(out, &analysis, &options.output, &config, write_analysis_report)?;
        }
        Command::File { path, options } => {
            let analysis = analyze_file(&path, options.stop_words || config.include_stop_words)
                .with_context(|| format!("Failed to analyze file: {}", path.display()))?;
            emit(out, &analysis, &options.output, &config, write_analysis_report)?;
        }
        Command::Compare {
            first,
            second,
            files,
            output,
        } => {
            let (text1, text2) = if files {
                (
                    read_text(first.as_ref())?,
                    read_text(second.as_ref())?,
                )
            } else {
                (first, second)
            };
            if text1.trim().is_empty() || text2.trim().is_empty() {
                bail!("Please enter both texts.");
            }
            let comparison = compare(&text1, &text2);
            emit(out, &comparison, &output, &config, write_comparison_report)?;
        }
        Command::Sample { path } => {
            create_sample_file(&path)?;
            writeln!(out, "Sample file created: {}", path.display())?;
        }
        Command::Scan {
            directory,
            include,
            exclude,
            top,
            stop_words,
        } => {
            let exclude_owned: Vec<String> = exclude.map_or_else(
                || config.exclude.clone(),
                |dirs| dirs.split(',').map(str::to_owned).collect(),
            );
            let exclude_dirs: Vec<&str> = exclude_owned
                .iter()
                .map(String::as_str)
                .filter(|dir| !dir.is_empty())
                .collect();
            let pattern = include
                .as_deref()
                .map(Pattern::new)
                .transpose()
                .context("Invalid --include glob")?;

            let files = scan_directory(
                &directory,
                &exclude_dirs,
                pattern.as_ref(),
                stop_words || config.include_stop_words,
            )
            .with_context(|| format!("Failed to scan directory: {}", directory.display()))?;

            writeln!(out, "Files analyzed: {}", files.len())?;
            write_top_files(out, &files, top.unwrap_or(config.top))?;
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read text from stdin")?;
    Ok(input)
}

fn emit<T, W, F>(
    out: &mut W,
    report: &T,
    options: &OutputOptions,
    config: &Config,
    render: F,
) -> Result<()>
where
    T: Serialize,
    W: Write,
    F: FnOnce(&mut W, &T) -> io::Result<()>,
{
    let format = options.format.unwrap_or(config.format);

    if options.raw {
        writeln!(out, "{}", serialize(report, format)?)?;
    } else {
        render(out, report)?;
    }

    if let Some(destination) = &options.save {
        let path = destination.clone().unwrap_or_else(|| config.output.clone());
        save_report(report, &path, format)?;
        writeln!(out, "\nAnalysis saved to {}", path.display())?;
    }

    Ok(())
}
