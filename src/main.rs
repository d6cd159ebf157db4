// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use log::{error, warn, debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap::error::ErrorKind;
use clap_complete::{generate, Shell};

use thaivocab::app_config::{self, Config};
use thaivocab::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a vocabulary TSV file to JSON (default command)
    Convert(ConvertArgs),

    /// Generate shell completions for thaivocab
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input TSV file to convert
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output JSON path (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Set logging level (the statistics report on stdout is always printed)
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Parse and report without writing the output file
    #[arg(long)]
    dry_run: bool,
}

/// thaivocab - Thai vocabulary TSV to JSON converter
///
/// Reads a tab-separated vocabulary export and writes the JSON document used
/// by the Thai tone quiz.
#[derive(Parser, Debug)]
#[command(name = "thaivocab")]
#[command(version)]
#[command(about = "Convert Thai vocabulary TSV files to tone quiz JSON")]
#[command(long_about = "thaivocab converts a tab-separated vocabulary file into the JSON document used by the Thai tone quiz.

INPUT FORMAT:
    Thai word <TAB> meaning <TAB> romanization with tones in <sup> tags
    e.g. สวัสดี<TAB>hello<TAB>sa<sup>L</sup> wat<sup>L</sup> dii<sup>M</sup>

EXAMPLES:
    thaivocab NewVocab.tsv                      # Write the default output file
    thaivocab -o public/vocab.json NewVocab.tsv # Write somewhere else
    thaivocab --dry-run NewVocab.tsv            # Only print statistics
    thaivocab completions bash > thaivocab.bash # Generate bash completions

An input file literally named 'convert' or 'completions' is read as the
subcommand; use the explicit form instead: thaivocab convert convert

OUTPUT:
    By default the JSON is written to data/vocabulary.json next to the
    thaivocab executable. Use --output or the config file to change it.
    The statistics report goes to stdout, log messages to stderr.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input TSV file to convert
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output JSON path (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Set logging level (the statistics report on stdout is always printed)
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Parse and report without writing the output file
    #[arg(long)]
    dry_run: bool,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Color escape and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌ "),
            Level::Warn => ("\x1B[1;33m", "🚧 "),
            Level::Info => ("\x1B[1;32m", ""),
            Level::Debug => ("\x1B[1;36m", "🔍 "),
            Level::Trace => ("\x1B[1;35m", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}{}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() {
    // Info until the options and config say otherwise
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = CommandLineOptions::parse();

    let result = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "thaivocab", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => run_convert(args),
        None => {
            let Some(input_path) = cli.input_path else {
                CommandLineOptions::command()
                    .error(ErrorKind::MissingRequiredArgument, "INPUT_PATH is required")
                    .exit();
            };

            run_convert(ConvertArgs {
                input_path,
                output: cli.output,
                config_path: cli.config_path,
                log_level: cli.log_level,
                dry_run: cli.dry_run,
            })
        }
    };

    if let Err(e) = result {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    // A command line log level applies before the config is even read
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.into());
    }

    let mut config = match &options.config_path {
        Some(path) if path.exists() => Config::load(path)?,
        Some(path) => {
            warn!("Config file not found at '{}', using defaults.", path.display());
            Config::default()
        }
        None => Config::default(),
    };

    if let Some(output) = options.output {
        config.output_path = output;
    }

    match options.log_level {
        Some(log_level) => config.log_level = log_level.into(),
        None => log::set_max_level(config.log_level.into()),
    }

    debug!("Using configuration: {:?}", config);

    let controller = Controller::with_config(config)?;
    let summary = controller.run(&options.input_path, options.dry_run)?;

    for line in &summary.report {
        println!("{}", line);
    }

    debug!(
        "Converted {} entries, skipped {}",
        summary.total_entries, summary.skipped_entries
    );

    Ok(())
}
