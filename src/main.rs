use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

use csp_rank::catalog::{validate_catalog, Catalog, Tier};
use csp_rank::output;
use csp_rank::scoring::{aggregate, rank, ScoringError};
use csp_rank::selection::parse_selection;

const EXIT_SUCCESS: i32 = 0;
const EXIT_SELECTION: i32 = 1;
const EXIT_INTERNAL: i32 = 2;
const EXIT_IO: i32 = 3;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable sections
    #[default]
    Table,
    /// provider<TAB>score, best first
    Tsv,
    Json,
    Yaml,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the evaluation parameters with their ids and priority levels
    List {
        /// Only list parameters of this priority level (PL1, PL2 or PL3)
        #[arg(short, long)]
        tier: Option<Tier>,
    },
    /// Score and rank providers for a selection (default if no subcommand)
    Score {
        /// Parameter ids, e.g. `2 5 9` or `2,5,9`. Prompts on stdin when omitted.
        ids: Vec<String>,

        /// Comma-separated parameter ids, appended to any positional ids
        #[arg(short, long)]
        select: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Parser, Debug)]
#[command(name = "csp-rank")]
#[command(about = "Rank AWS, Azure and GCP by tier-weighted parameter scores", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and per-tier breakdown
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Rendering options shared by every `score` output format
#[derive(Debug, Clone, Copy)]
struct ScoreOptions {
    format: OutputFormat,
    verbose: bool,
    use_colors: bool,
}

fn init_tracing(verbose: bool) {
    // RUST_LOG wins over --verbose
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

/// Print the catalog and read one line of comma-separated ids
fn prompt_for_selection(
    catalog: &Catalog,
    use_colors: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<String> {
    writeln!(out, "Available Parameters:")?;
    writeln!(out, "{}", output::format_catalog(catalog, None, use_colors))?;
    writeln!(out)?;
    write!(out, "Enter parameter numbers (comma-separated): ")?;
    out.flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read selection from stdin")?;
    Ok(line)
}

fn exit_code_for(err: &ScoringError) -> i32 {
    if err.is_user_error() {
        EXIT_SELECTION
    } else {
        EXIT_INTERNAL
    }
}

/// Render the scored selection in the requested format
fn render_score(catalog: &Catalog, raw: &str, options: ScoreOptions) -> Result<String, i32> {
    let selection = parse_selection(raw);
    if selection.is_empty() {
        warn!("no parameter ids selected; every provider scores zero");
    }
    debug!(?selection, "parsed selection");

    let result = aggregate(&selection, catalog).map_err(|e| {
        if e.is_user_error() {
            eprintln!("Invalid selection: {}. Valid ids are 1-{}.", e, catalog.len());
        } else {
            eprintln!("Internal error: {}", e);
        }
        exit_code_for(&e)
    })?;

    let ranking = rank(&result).map_err(|e| {
        // Only a malformed score result lands here
        eprintln!("Internal error: {}", e);
        exit_code_for(&e)
    })?;

    let use_colors = options.use_colors;
    let text = match options.format {
        OutputFormat::Table => {
            let mut sections = vec![
                String::new(),
                "Selected Parameters and Their Rankings:".to_string(),
                output::format_selected(catalog, &selection, use_colors),
            ];
            if options.verbose {
                sections.push(String::new());
                sections.push("Tier Breakdown:".to_string());
                sections.push(output::format_breakdown(&result));
            }
            sections.push(String::new());
            sections.push("Final CSP Scores:".to_string());
            sections.push(output::format_scores(&result, use_colors));
            sections.push(String::new());
            sections.push("Ranked CSPs:".to_string());
            sections.push(output::format_ranking(&ranking, use_colors));
            if let Some(best) = ranking.best() {
                sections.push(String::new());
                sections.push(format!("Best CSP based on your selection: {}", best.provider));
            }
            sections.join("\n")
        }
        OutputFormat::Tsv => output::format_tsv(&ranking),
        OutputFormat::Json | OutputFormat::Yaml => {
            let report = output::ScoreReport::new(catalog, &selection, &result, &ranking);
            let rendered = if options.format == OutputFormat::Json {
                report.to_json()
            } else {
                report.to_yaml()
            };
            rendered.map_err(|e| {
                eprintln!("Output error: {:#}", e);
                EXIT_INTERNAL
            })?
        }
    };
    Ok(text)
}

/// Run the `score` command and return the process exit code.
///
/// With neither positional ids nor `--select`, the catalog is shown and one
/// line is read from `input`.
fn run_score(
    catalog: &Catalog,
    ids: &[String],
    select: Option<&str>,
    options: ScoreOptions,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> i32 {
    let raw = if ids.is_empty() && select.is_none() {
        match prompt_for_selection(catalog, options.use_colors, input, out) {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Input error: {:#}", e);
                return EXIT_IO;
            }
        }
    } else {
        let mut raw = ids.join(",");
        if let Some(select) = select {
            raw.push(',');
            raw.push_str(select);
        }
        raw
    };

    let text = match render_score(catalog, &raw, options) {
        Ok(text) => text,
        Err(code) => return code,
    };
    match writeln!(out, "{}", text) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Output error: {}", e);
            EXIT_IO
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Score {
        ids: Vec::new(),
        select: None,
        format: OutputFormat::Table,
    });
    let use_colors = !cli.no_color && output::should_use_colors();

    let catalog = Catalog::builtin();
    if let Err(errors) = validate_catalog(&catalog) {
        eprintln!("Catalog errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_INTERNAL);
    }
    debug!(parameters = catalog.len(), "loaded built-in catalog");

    let code = match command {
        Commands::List { tier } => {
            println!("{}", output::format_catalog(&catalog, tier, use_colors));
            EXIT_SUCCESS
        }
        Commands::Score {
            ids,
            select,
            format,
        } => {
            let options = ScoreOptions {
                format,
                verbose: cli.verbose,
                use_colors,
            };
            run_score(
                &catalog,
                &ids,
                select.as_deref(),
                options,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
            )
        }
    };

    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use csp_rank::catalog::Provider;
    use csp_rank::scoring::ScoreResult;
    use std::io::{BufReader, Read};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    fn plain(format: OutputFormat) -> ScoreOptions {
        ScoreOptions {
            format,
            verbose: false,
            use_colors: false,
        }
    }

    fn score_args(ids: &[&str], format: OutputFormat) -> (i32, String) {
        let ids: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let code = run_score(
            &Catalog::builtin(),
            &ids,
            None,
            plain(format),
            &mut io::empty(),
            &mut out,
        );
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cli_parses_list_tier() {
        let cli = Cli::try_parse_from(["csp-rank", "list", "--tier", "PL2"]).unwrap();
        match cli.command {
            Some(Commands::List { tier }) => assert_eq!(tier, Some(Tier::Tier2)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_tier() {
        assert!(Cli::try_parse_from(["csp-rank", "list", "--tier", "PL4"]).is_err());
    }

    #[test]
    fn test_exit_code_for_errors() {
        let unknown = aggregate(&parse_selection("19"), &Catalog::builtin()).unwrap_err();
        assert_eq!(exit_code_for(&unknown), EXIT_SELECTION);

        let partial = ScoreResult::from_totals([(Provider::Aws, 0.1), (Provider::Gcp, 0.2)]);
        let malformed = rank(&partial).unwrap_err();
        assert_eq!(exit_code_for(&malformed), EXIT_INTERNAL);
    }

    #[test]
    fn test_score_unknown_id_exits_with_selection_error() {
        let (code, output) = score_args(&["1", "19"], OutputFormat::Table);
        assert_eq!(code, EXIT_SELECTION);
        assert!(output.is_empty());
    }

    #[test]
    fn test_score_valid_selection_table() {
        let (code, output) = score_args(&["15"], OutputFormat::Table);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(output.contains("Selected Parameters and Their Rankings:"));
        assert!(output.contains(" - disaster_recovery"));
        assert!(output.contains("   1. AWS -> 0.3000"));
        assert!(output.contains("   3. GCP -> 0.0000"));
        assert!(output.ends_with("Best CSP based on your selection: AWS\n"));
        assert!(!output.contains("Tier Breakdown:"));
    }

    #[test]
    fn test_score_verbose_adds_breakdown() {
        let options = ScoreOptions {
            verbose: true,
            ..plain(OutputFormat::Table)
        };
        let mut out = Vec::new();
        let code = run_score(
            &Catalog::builtin(),
            &[],
            Some("2,5"),
            options,
            &mut io::empty(),
            &mut out,
        );
        assert_eq!(code, EXIT_SUCCESS);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Tier Breakdown:"));
        assert!(output.contains("Tier-1 (PL1, weight 0.5): 2 selected"));
    }

    #[test]
    fn test_score_empty_selection_scores_zero() {
        let (code, output) = score_args(&["abc"], OutputFormat::Table);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(output.contains("No parameters selected."));
        assert!(output.contains("   AWS: 0.0000\n   Azure: 0.0000\n   GCP: 0.0000"));
        // Zero ties fall back to provider order
        assert!(output.contains("   1. AWS -> 0.0000"));
    }

    #[test]
    fn test_score_tsv() {
        let (code, output) = score_args(&["13"], OutputFormat::Tsv);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(output.lines().next(), Some("GCP\t0.2000"));
    }

    #[test]
    fn test_score_json_report() {
        let (code, output) = score_args(&["15"], OutputFormat::Json);
        assert_eq!(code, EXIT_SUCCESS);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["best"], "AWS");
    }

    #[test]
    fn test_score_reads_prompted_selection() {
        let mut input = "15, 4\n".as_bytes();
        let mut out = Vec::new();
        let code = run_score(
            &Catalog::builtin(),
            &[],
            None,
            plain(OutputFormat::Tsv),
            &mut input,
            &mut out,
        );
        assert_eq!(code, EXIT_SUCCESS);
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Available Parameters:\n"));
        assert!(output.contains("Enter parameter numbers (comma-separated): "));
        assert!(output.contains("AWS\t0.3000"));
    }

    #[test]
    fn test_score_stdin_failure_exits_with_io_error() {
        let mut input = BufReader::new(FailingReader);
        let mut out = Vec::new();
        let code = run_score(
            &Catalog::builtin(),
            &[],
            None,
            plain(OutputFormat::Table),
            &mut input,
            &mut out,
        );
        assert_eq!(code, EXIT_IO);
    }

    #[test]
    fn test_positional_and_select_ids_are_combined() {
        let ids = vec!["15".to_string()];
        let mut out = Vec::new();
        let code = run_score(
            &Catalog::builtin(),
            &ids,
            Some("19"),
            plain(OutputFormat::Tsv),
            &mut io::empty(),
            &mut out,
        );
        assert_eq!(code, EXIT_SELECTION);
    }
}
