//! # sufperf
//!
//! A CLI tool for post-processing suffix-sorting benchmark logs.
//!
//! ## Overview
//!
//! sufperf is built on top of sufperflib and exposes its four summaries as
//! subcommands. Stream commands read a single log (a file, or standard
//! input); directory commands read a base directory laid out as
//! `<basedir>/<entry>/averages` with a sibling `<basedir>.sum.log`.
//!
//! ## Usage
//!
//! ```bash
//! # Mean/stddev of one corpus-file log
//! sufperf avg-corpus < logs/alice29_txt-BPR.log
//!
//! # Per-round mean/stddev of a random-input log
//! sufperf avg-random logs/random-SKEW.log
//!
//! # Per-algorithm totals over a corpus
//! sufperf sum-avgs runs/corpus > runs/corpus.sum.log
//!
//! # LaTeX summary table
//! sufperf table runs/corpus > table.tex
//! sufperf table runs/corpus -a BPR -a SKEW
//!
//! # Any command as JSON
//! sufperf sum-avgs runs/corpus --output json
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use sufperflib::output::{
    format_algorithm_sums, format_corpus_average, format_group_averages, render_summary_table,
};
use sufperflib::{average_corpus, average_groups, build_summary_table, sum_averages, TableOptions};

/// How results are written to standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    /// The literal text/LaTeX formats
    Text,
    /// Pretty-printed JSON of the computed summary
    Json,
}

impl OutputMode {
    fn from_matches(matches: &ArgMatches) -> Self {
        match matches.get_one::<String>("output").map(|s| s.as_str()) {
            Some("json") => OutputMode::Json,
            _ => OutputMode::Text,
        }
    }
}

/// Optional log file argument shared by the stream commands
fn file_arg() -> Arg {
    Arg::new("file").help("Log file to read (defaults to standard input)")
}

/// Required base directory argument shared by the directory commands
fn basedir_arg() -> Arg {
    Arg::new("basedir")
        .required(true)
        .help("Directory holding one <entry>/averages per corpus file")
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("sufperf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Averages, sums and LaTeX tables from suffix-sorting benchmark logs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (can be repeated)"),
        )
        .subcommand(
            Command::new("avg-corpus")
                .about("Mean and stddev of the time column of a corpus-file log")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("avg-random")
                .about("Per-round mean and stddev of time and memory in a random-input log")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("sum-avgs")
                .about("Per-algorithm totals over all entries of a result directory")
                .arg(basedir_arg()),
        )
        .subcommand(
            Command::new("table")
                .about("LaTeX summary table of a result directory")
                .arg(basedir_arg())
                .arg(
                    Arg::new("algorithm")
                        .short('a')
                        .long("algorithm")
                        .action(ArgAction::Append)
                        .help("Algorithm column (can be specified multiple times)"),
                ),
        )
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Open the log named by the `file` argument, or standard input
fn open_input(matches: &ArgMatches) -> Result<Box<dyn BufRead>, anyhow::Error> {
    match matches.get_one::<String>("file") {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open '{path}'"))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Extract the base directory argument
fn basedir(matches: &ArgMatches) -> Result<&str, anyhow::Error> {
    matches
        .get_one::<String>("basedir")
        .map(|s| s.as_str())
        .context("missing base directory")
}

/// Render either the text form or the JSON form of a result
fn render<T: Serialize>(
    mode: OutputMode,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String, anyhow::Error> {
    match mode {
        OutputMode::Text => Ok(text(value)),
        OutputMode::Json => Ok(serde_json::to_string_pretty(value)? + "\n"),
    }
}

/// Handler for avg-corpus command
fn avg_corpus_handler(matches: &ArgMatches, mode: OutputMode) -> Result<String, anyhow::Error> {
    let average = average_corpus(open_input(matches)?)?;
    render(mode, &average, format_corpus_average)
}

/// Handler for avg-random command
fn avg_random_handler(matches: &ArgMatches, mode: OutputMode) -> Result<String, anyhow::Error> {
    let groups = average_groups(open_input(matches)?)?;
    render(mode, &groups, |g| format_group_averages(g))
}

/// Handler for sum-avgs command
fn sum_avgs_handler(matches: &ArgMatches, mode: OutputMode) -> Result<String, anyhow::Error> {
    let sums = sum_averages(basedir(matches)?)?;
    render(mode, &sums, |s| format_algorithm_sums(s))
}

/// Handler for table command
fn table_handler(matches: &ArgMatches, mode: OutputMode) -> Result<String, anyhow::Error> {
    let mut options = TableOptions::new();
    if let Some(algorithms) = matches.get_many::<String>("algorithm") {
        options = options.algorithms(algorithms.cloned().collect());
    }

    let report = build_summary_table(basedir(matches)?, &options)?;
    render(mode, &report, render_summary_table)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let Some((name, sub_matches)) = matches.subcommand() else {
        return ExitCode::FAILURE;
    };

    init_logging(sub_matches.get_count("verbose"));
    let mode = OutputMode::from_matches(sub_matches);
    log::debug!("running {name} with {mode:?} output");

    let result = match name {
        "avg-corpus" => avg_corpus_handler(sub_matches, mode),
        "avg-random" => avg_random_handler(sub_matches, mode),
        "sum-avgs" => sum_avgs_handler(sub_matches, mode),
        "table" => table_handler(sub_matches, mode),
        other => Err(anyhow::anyhow!("unknown command '{other}'")),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
