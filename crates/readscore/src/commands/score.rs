//! Score command — the default action when a file is given.

use std::io::{BufRead, Write};

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument, warn};

use readscore_core::config::Config;
use readscore_core::readability::{self, Selection};
use readscore_core::Aggregates;

use super::read_input_file;

/// Prompt shown when no score was chosen on the command line or in config.
pub const PROMPT: &str = "Enter the score you want to calculate (ARI, FK, SMOG, CL, all): ";

/// Arguments for scoring a file.
#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    /// Text file to score (relative to the current directory).
    pub file: Option<Utf8PathBuf>,

    /// Score to calculate: ARI, FK, SMOG, CL or all. Prompts on stdin when omitted.
    #[arg(short, long, value_name = "SCORE")]
    pub score: Option<String>,
}

/// Score a file, reading the selection from stdin if needed.
pub fn cmd_score(args: ScoreArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_score(args, global_json, config, &mut stdin.lock(), &mut stdout.lock())
}

/// Score a file with explicit input and output streams.
#[instrument(name = "cmd_score", skip_all, fields(file = ?args.file))]
pub fn run_score<R: BufRead, W: Write>(
    args: ScoreArgs,
    global_json: bool,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(file) = args.file else {
        writeln!(out, "No file name provided")?;
        return Ok(());
    };
    debug!(file = %file, score = ?args.score, "executing score command");

    let content = read_input_file(&file, config.input_limit())?;

    // Flag beats config; only text mode falls back to the prompt.
    let chosen = args.score.or_else(|| config.score.clone());

    if global_json {
        let selection: Selection = chosen.as_deref().unwrap_or("all").parse()?;
        let report = readability::check_readability(&content, selection)
            .with_context(|| format!("failed to score {file}"))?;
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    let aggregates = Aggregates::from_text(&content);
    if config.echo_text {
        writeln!(out, "The text is:")?;
        writeln!(out, "{content}")?;
    }
    write_counts(out, &aggregates)?;

    let token = match chosen {
        Some(token) => token,
        None => prompt(input, out)?,
    };

    let Ok(selection) = token.parse::<Selection>() else {
        warn!(token = %token, "invalid score selection");
        writeln!(
            out,
            "{}",
            "Invalid score".if_supports_color(Stream::Stdout, |t| t.red())
        )?;
        return Ok(());
    };

    let scores = readability::compute_selection(selection, &aggregates)
        .with_context(|| format!("failed to score {file}"))?;
    writeln!(out)?;
    for result in &scores {
        writeln!(
            out,
            "{}: {:.2} (about {}-year-olds).",
            result
                .formula
                .name()
                .if_supports_color(Stream::Stdout, |t| t.bold()),
            result.score,
            result.age,
        )?;
    }
    writeln!(out)?;
    // `{:?}` keeps the trailing ".0" on whole ages.
    writeln!(
        out,
        "This text should be understood in average by {:?} year olds.",
        readability::average_age(&scores)
    )?;

    Ok(())
}

fn write_counts<W: Write>(out: &mut W, aggregates: &Aggregates) -> std::io::Result<()> {
    writeln!(out, "Words: {}", aggregates.words)?;
    writeln!(out, "Sentences: {}", aggregates.sentences)?;
    writeln!(out, "Characters: {}", aggregates.characters)?;
    writeln!(out, "Syllables: {}", aggregates.syllables)?;
    writeln!(out, "Polysyllables: {}", aggregates.polysyllables)
}

/// Ask for a score and read one line. End of input reads as an empty line.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> anyhow::Result<String> {
    writeln!(out, "{PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read score selection")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
