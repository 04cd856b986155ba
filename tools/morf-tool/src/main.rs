use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use morf_analyzer::{compile, parse_json, AnalyzeOptions, Analyzer, LexiconEngine, WordResult};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

#[derive(Parser)]
#[command(author, version, about = "Estonian morphological analysis over a compiled lexicon")]
struct Cli {
    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON lexicon into the binary archive the engine loads
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Analyze words and print the analyses as JSON
    Analyze {
        /// Compiled lexicon. Defaults to the process runtime lexicon.
        #[arg(short, long, value_name = "FILE")]
        lexicon: Option<PathBuf>,

        /// Do not guess analyses for unknown words
        #[arg(long)]
        no_heuristics: bool,

        /// Keep phonetic markers in the reported root
        #[arg(long)]
        keep_phonetic: bool,

        /// Keep compound markers in the reported root
        #[arg(long)]
        keep_compound: bool,

        /// Set an option by name, e.g. `trim_compound=false`
        #[arg(short = 'O', long = "option", value_name = "NAME=BOOL", value_parser = parse_option)]
        options: Vec<(String, bool)>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Words to analyze. Reads whitespace-separated text from stdin when empty.
        words: Vec<String>,
    },
}

fn parse_option(raw: &str) -> Result<(String, bool), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=BOOL, got `{raw}`"))?;
    let value = value
        .parse::<bool>()
        .map_err(|_| format!("`{value}` is not true or false"))?;
    Ok((name.to_string(), value))
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(level_filter(cli.verbose))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Compile { input, output } => compile_lexicon(input, output),
        Command::Analyze {
            lexicon,
            no_heuristics,
            keep_phonetic,
            keep_compound,
            options,
            pretty,
            words,
        } => {
            let mut settings = AnalyzeOptions {
                use_heuristics: !no_heuristics,
                trim_phonetic: !keep_phonetic,
                trim_compound: !keep_compound,
            };
            for (name, value) in &options {
                settings.set(name, *value)?;
            }

            let words = if words.is_empty() {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
                text.split_whitespace().map(str::to_string).collect()
            } else {
                words
            };

            let results = match lexicon {
                Some(path) => {
                    let engine = LexiconEngine::open(&path)?;
                    Analyzer::new(engine).analyze(words, &settings)
                }
                None => {
                    let results = morf_analyzer::analyze(words, &settings);
                    morf_analyzer::terminate();
                    results?
                }
            };
            print_results(&results, pretty)
        }
    }
}

fn compile_lexicon(input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    info!(input = ?input, "reading JSON lexicon");
    let input_data = fs::read_to_string(&input).with_context(|| format!("failed to read {:?}", input))?;
    let lexicon = parse_json(&input_data)?;

    info!(version = lexicon.version, entries = lexicon.entries.len(), guesses = lexicon.guesses.len(), "compiling lexicon");
    let bytes = compile(&lexicon)?;

    fs::write(&output, bytes.as_slice()).with_context(|| format!("failed to write {:?}", output))?;
    debug!(output = ?output, bytes = bytes.len(), "lexicon written");
    Ok(())
}

fn print_results(results: &[WordResult], pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(results)?
    } else {
        serde_json::to_string(results)?
    };
    println!("{json}");
    Ok(())
}
