//! Hearts Pack Core - Fediverse emoji pack generator
//!
//! The main entry point for hp-core, handling:
//! - Pack generation (Mastodon tar, Misskey zip, Akkoma manifest)
//! - Mapping list validation
//! - Logging setup and exit-code mapping

use clap::{Args, Parser, Subcommand, ValueEnum};
use hp_core::exit_codes::ExitCode;
use hp_core::pipeline::{self, GenerateOptions, RunSummary};
use hp_core::{check, logging};
use std::path::{Path, PathBuf};
use tracing::error;

/// Hearts Pack Core - packages the hearts emoji set for the fediverse
#[derive(Parser)]
#[command(name = "hp-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all distribution packs (default when no command given)
    Generate(GenerateArgs),

    /// Validate the mapping list without writing artifacts
    Check(CheckArgs),

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to the mapping list file
    #[arg(long, default_value = pipeline::DEFAULT_LIST_FILE)]
    list: PathBuf,

    /// Directory containing source images [default: the list file's directory]
    #[arg(long)]
    source_dir: Option<PathBuf>,

    /// Output folder for pack artifacts [default: "Fediverse Packs" next to the source directory]
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Host string recorded in the Misskey meta.json
    #[arg(long, default_value = pipeline::DEFAULT_HOST)]
    host: String,

    /// Keep the staging directory for inspection
    #[arg(long)]
    keep_staging: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        GenerateArgs {
            list: PathBuf::from(pipeline::DEFAULT_LIST_FILE),
            source_dir: None,
            output_dir: None,
            host: pipeline::DEFAULT_HOST.to_string(),
            keep_staging: false,
        }
    }
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Path to the mapping list file
    #[arg(long, default_value = pipeline::DEFAULT_LIST_FILE)]
    list: PathBuf,

    /// Directory containing source images [default: the list file's directory]
    #[arg(long)]
    source_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', default_value = "human")]
    format: OutputFormat,
}

/// Supported output formats for the check report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable problem listing
    #[default]
    Human,

    /// Structured JSON on stdout
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.global.verbose, cli.global.quiet, cli.global.no_color);

    let code = match cli.command.unwrap_or_default() {
        Commands::Generate(args) => run_generate(args),
        Commands::Check(args) => run_check(args),
        Commands::Version => {
            println!("hp-core {}", env!("CARGO_PKG_VERSION"));
            ExitCode::Clean
        }
    };
    std::process::exit(code.as_i32());
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate(GenerateArgs::default())
    }
}

fn run_generate(args: GenerateArgs) -> ExitCode {
    let opts = resolve_options(args);
    match pipeline::generate(&opts) {
        Ok(summary) => {
            report_summary(&summary, &opts);
            if summary.skipped > 0 {
                ExitCode::Partial
            } else {
                ExitCode::Clean
            }
        }
        Err(err) => {
            error!("{err}");
            ExitCode::from(&err)
        }
    }
}

fn run_check(args: CheckArgs) -> ExitCode {
    let source_dir = source_dir_for(&args.list, args.source_dir);
    match check::check(&args.list, &source_dir) {
        Ok(report) => {
            match args.format {
                OutputFormat::Json => match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        error!("cannot serialize report: {err}");
                        return ExitCode::InternalError;
                    }
                },
                OutputFormat::Human => {
                    if report.is_clean() {
                        println!("{} entries, no problems found", report.entries);
                    } else {
                        println!(
                            "{} entries, {} problem(s):",
                            report.entries,
                            report.problems.len()
                        );
                        for problem in &report.problems {
                            println!("  {problem}");
                        }
                    }
                }
            }
            if report.is_clean() {
                ExitCode::Clean
            } else {
                ExitCode::Partial
            }
        }
        Err(err) => {
            error!("{err}");
            ExitCode::from(&err)
        }
    }
}

/// Fill in the defaulted source and output directories.
fn resolve_options(args: GenerateArgs) -> GenerateOptions {
    let GenerateArgs {
        list,
        source_dir,
        output_dir,
        host,
        keep_staging,
    } = args;

    let source_dir = source_dir_for(&list, source_dir);
    let output_dir = output_dir.unwrap_or_else(|| default_output_dir(&source_dir));

    GenerateOptions {
        list_path: list,
        source_dir,
        output_dir,
        host,
        keep_staging,
    }
}

/// The source directory defaults to the list file's directory.
fn source_dir_for(list: &Path, explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        list.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    })
}

/// The output folder defaults to "Fediverse Packs" next to the source
/// directory.
fn default_output_dir(source_dir: &Path) -> PathBuf {
    source_dir
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .join(pipeline::DEFAULT_OUTPUT_DIR)
}

fn report_summary(summary: &RunSummary, opts: &GenerateOptions) {
    if summary.skipped > 0 {
        println!(
            "Packed {} emoji into {} ({} entries skipped)",
            summary.packed,
            opts.output_dir.display(),
            summary.skipped
        );
    } else {
        println!(
            "Packed {} emoji into {}",
            summary.packed,
            opts.output_dir.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::parse_from(["hp-core", "generate"]);
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.list, PathBuf::from(pipeline::DEFAULT_LIST_FILE));
                assert_eq!(args.host, pipeline::DEFAULT_HOST);
                assert!(!args.keep_staging);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_no_command_defaults_to_generate() {
        let cli = Cli::parse_from(["hp-core"]);
        assert!(cli.command.is_none());
        assert!(matches!(Commands::default(), Commands::Generate(_)));
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::parse_from(["hp-core", "-vv", "generate"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(!cli.global.quiet);
    }

    #[test]
    fn test_check_format_values() {
        let cli = Cli::parse_from(["hp-core", "check", "--format", "json"]);
        match cli.command {
            Some(Commands::Check(args)) => assert_eq!(args.format, OutputFormat::Json),
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_source_dir_defaults_to_list_parent() {
        let dir = source_dir_for(Path::new("hearts/fedi_hearts_list.txt"), None);
        assert_eq!(dir, PathBuf::from("hearts"));
    }

    #[test]
    fn test_source_dir_for_bare_list_name() {
        let dir = source_dir_for(Path::new("fedi_hearts_list.txt"), None);
        assert_eq!(dir, PathBuf::from("."));
    }

    #[test]
    fn test_default_output_dir_is_sibling_of_source() {
        let out = default_output_dir(Path::new("repo/hearts"));
        assert_eq!(out, PathBuf::from("repo/Fediverse Packs"));
    }

    #[test]
    fn test_default_output_dir_for_bare_source() {
        let out = default_output_dir(Path::new("hearts"));
        assert_eq!(out, PathBuf::from("./Fediverse Packs"));
    }
}
