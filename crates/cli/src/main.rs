use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use matching::sink::DEFAULT_CSV_PATH;
use matching::{CsvFileSink, JsonFileSink, Matcher, PairingResult, ResultSink, MAX_SCORE};
use roster::{source, InputFormat, Role};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Mentor Match - pair mentees with their most similar mentor
#[derive(Parser)]
#[command(name = "mentor-match")]
#[command(about = "Greedy mentor/mentee pairing by attribute similarity", long_about = None)]
struct Cli {
    /// Log filter, e.g. "debug" or "matching=debug" (defaults to RUST_LOG, then "info")
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match every mentee with a mentor and save the pairing table
    Pair {
        /// Mentor roster file (.csv, .tsv or .json)
        #[arg(long)]
        mentors: PathBuf,

        /// Mentee roster file (.csv, .tsv or .json)
        #[arg(long)]
        mentees: PathBuf,

        /// Where to write the pairing table
        #[arg(short, long, default_value = DEFAULT_CSV_PATH)]
        output: PathBuf,

        /// Format of the pairing table
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Format of both roster files
        #[arg(long, value_enum, default_value_t = InputFormatArg::Auto)]
        input_format: InputFormatArg,

        /// Fail instead of overwriting an existing output file
        #[arg(long)]
        fresh: bool,

        /// Disable the parallel matching loop
        #[arg(long)]
        sequential: bool,

        /// Don't print the pairing table
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show how every mentor scores against one mentee
    Explain {
        /// Mentor roster file
        #[arg(long)]
        mentors: PathBuf,

        /// Mentee roster file
        #[arg(long)]
        mentees: PathBuf,

        /// Full name of the mentee to explain
        #[arg(long)]
        mentee: String,

        /// Number of mentors to show
        #[arg(long, default_value = "5")]
        top: usize,

        /// Format of both roster files
        #[arg(long, value_enum, default_value_t = InputFormatArg::Auto)]
        input_format: InputFormatArg,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    /// Tab-separated, same columns as csv
    Tsv,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormatArg {
    /// Pick by file extension
    Auto,
    Csv,
    Tsv,
    Json,
}

impl InputFormatArg {
    fn resolve(self) -> Option<InputFormat> {
        match self {
            InputFormatArg::Auto => None,
            InputFormatArg::Csv => Some(InputFormat::Csv),
            InputFormatArg::Tsv => Some(InputFormat::Tsv),
            InputFormatArg::Json => Some(InputFormat::Json),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match &cli.log_level {
        Some(level) => tracing_subscriber::EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log filter '{}'", level))?,
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Pair {
            mentors,
            mentees,
            output,
            format,
            input_format,
            fresh,
            sequential,
            quiet,
        } => handle_pair(
            &mentors,
            &mentees,
            output,
            format,
            input_format,
            fresh,
            sequential,
            quiet,
        )?,
        Commands::Explain {
            mentors,
            mentees,
            mentee,
            top,
            input_format,
        } => handle_explain(&mentors, &mentees, &mentee, top, input_format)?,
    }

    Ok(())
}

/// Handle the 'pair' command
#[allow(clippy::too_many_arguments)]
fn handle_pair(
    mentors: &Path,
    mentees: &Path,
    output: PathBuf,
    format: OutputFormat,
    input_format: InputFormatArg,
    fresh: bool,
    sequential: bool,
    quiet: bool,
) -> Result<()> {
    let start = Instant::now();

    let mentor_source = source::open(mentors, input_format.resolve());
    let mentee_source = source::open(mentees, input_format.resolve());

    let sink: Box<dyn ResultSink> = match format {
        OutputFormat::Csv => Box::new(CsvFileSink::new(&output).fresh(fresh)),
        OutputFormat::Tsv => Box::new(
            CsvFileSink::new(&output)
                .with_delimiter('\t')
                .fresh(fresh),
        ),
        OutputFormat::Json => Box::new(JsonFileSink::new(&output).fresh(fresh)),
    };
    let mut sinks = vec![sink];

    let matcher = Matcher::new().parallel(!sequential);
    let results = matching::run(
        mentor_source.as_ref(),
        mentee_source.as_ref(),
        &matcher,
        &mut sinks,
    )
    .context("Pairing run failed")?;

    if !quiet {
        print_pairings(&results);
    }
    println!(
        "{} Wrote {} pairings to {} in {:?}",
        "✓".green(),
        results.len(),
        output.display(),
        start.elapsed()
    );
    Ok(())
}

/// Handle the 'explain' command
fn handle_explain(
    mentors: &Path,
    mentees: &Path,
    mentee_name: &str,
    top: usize,
    input_format: InputFormatArg,
) -> Result<()> {
    let mentor_roster = source::open(mentors, input_format.resolve())
        .fetch(Role::Mentor)
        .context("Failed to load mentor roster")?;
    let mentee_roster = source::open(mentees, input_format.resolve())
        .fetch(Role::Mentee)
        .context("Failed to load mentee roster")?;

    let mentee = mentee_roster
        .find(mentee_name)
        .ok_or_else(|| anyhow!("Mentee '{}' not found in {}", mentee_name, mentees.display()))?;

    let matcher = Matcher::new();
    let (best, best_score) = matcher.best_mentor(mentor_roster.people(), mentee);
    let ranked = matcher.rank(mentor_roster.people(), mentee);
    info!("Ranked {} mentors for '{}'", ranked.len(), mentee_name);

    println!("{}", format!("Mentor scores for '{}':", mentee_name).bold().blue());
    match best {
        Some(mentor) => println!(
            "{}Matched mentor: {} ({}/{})",
            "• ".green(),
            mentor.full_name.bold(),
            best_score,
            MAX_SCORE
        ),
        None => println!("{}No mentor scored above 0", "• ".yellow()),
    }

    for (rank, entry) in ranked.iter().take(top).enumerate() {
        println!(
            "{}. {} - Score: {}",
            (rank + 1).to_string().green(),
            entry.mentor,
            entry.score()
        );
        for (field, ratio) in entry.breakdown.entries() {
            println!("     {:<10} {:>3}", field, ratio);
        }
    }
    Ok(())
}

/// Print the pairing table to stdout
fn print_pairings(results: &[PairingResult]) {
    let name_width = results
        .iter()
        .map(|r| r.mentee.chars().count())
        .chain(std::iter::once("Mentee".len()))
        .max()
        .unwrap_or(0);

    println!(
        "{}",
        format!("{:<width$}  {:<24}  {:>5}", "Mentee", "Mentor", "Score", width = name_width).bold()
    );
    for result in results {
        let mentor = match &result.mentor {
            Some(name) => format!("{:<24}", name).normal(),
            None => format!("{:<24}", "(no match)").dimmed(),
        };
        println!(
            "{:<width$}  {}  {:>5}",
            result.mentee,
            mentor,
            result.score,
            width = name_width
        );
    }
}
